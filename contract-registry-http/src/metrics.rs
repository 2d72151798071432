use actix_web::{dev::Server, App, HttpServer};
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};
use std::net::SocketAddr;

lazy_static! {
    pub static ref RESOLUTIONS: IntCounterVec = register_int_counter_vec!(
        "contract_registry_resolve_decorator",
        "number of contract decorator resolutions",
        &["endpoint"],
    )
    .unwrap();
}

pub fn count_resolve_decorator(endpoint: &str) {
    RESOLUTIONS.with_label_values(&[endpoint]).inc();
}

#[derive(Clone)]
pub struct Metrics {
    metrics_middleware: PrometheusMetrics,
    registry_middleware: PrometheusMetrics,
}

impl Metrics {
    pub fn new(endpoint: String) -> Self {
        let registry = prometheus::default_registry();
        let metrics_middleware = PrometheusMetricsBuilder::new("contract_registry_metrics")
            .registry(registry.clone())
            .endpoint(&endpoint)
            .build()
            .unwrap();
        // note: registry middleware has no endpoint
        let registry_middleware = PrometheusMetricsBuilder::new("contract_registry")
            .registry(registry.clone())
            .build()
            .unwrap();

        Self {
            metrics_middleware,
            registry_middleware,
        }
    }

    pub fn middleware(&self) -> &PrometheusMetrics {
        &self.registry_middleware
    }

    pub fn run_server(&self, addr: SocketAddr) -> Server {
        let metrics_middleware = self.metrics_middleware.clone();
        HttpServer::new(move || App::new().wrap(metrics_middleware.clone()))
            .bind(addr)
            .unwrap()
            .run()
    }
}
