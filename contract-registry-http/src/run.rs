use crate::{configure_router, metrics::Metrics, routers::AppRouter, settings::Settings};
use actix_web::{App, HttpServer};
use std::sync::Arc;

pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let socket_addr = settings.server.addr;
    tracing::info!("contract registry is starting at {}", socket_addr);
    let app_router = Arc::new(AppRouter::new(&settings)?);
    let metrics = Metrics::new(settings.metrics.route.clone());

    let server_future = {
        let middleware = metrics.middleware().clone();
        let server = HttpServer::new(move || {
            App::new()
                .wrap(middleware.clone())
                .configure(configure_router(&*app_router))
        })
        .bind(socket_addr)?
        .run();
        tokio::spawn(async move { server.await.map_err(anyhow::Error::msg) })
    };

    let mut futures = vec![server_future];
    if settings.metrics.enabled {
        let metrics_server = metrics.run_server(settings.metrics.addr);
        futures.push(tokio::spawn(async move {
            metrics_server.await.map_err(anyhow::Error::msg)
        }));
    }

    let (res, _, others) = futures::future::select_all(futures).await;
    for future in others.into_iter() {
        future.abort()
    }
    res?
}
