use super::{configure_router, contracts::ContractsRouter, interfaces::InterfacesRouter, Router};
use crate::{handlers::status, settings::Settings};
use actix_web::web;
use contract_registry::{load_from_dir, ContractDecoratorRepository, ContractInterfacesRepository};

pub struct AppRouter {
    contracts: ContractsRouter,
    interfaces: InterfacesRouter,
}

impl AppRouter {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let decorators = web::Data::new(ContractDecoratorRepository::default());
        let interfaces = web::Data::new(ContractInterfacesRepository::default());
        if let Some(dir) = &settings.registry.dir {
            load_from_dir(
                dir,
                &settings.registry.ignored_dirs,
                &decorators,
                &interfaces,
            )?;
        }
        Ok(Self {
            contracts: ContractsRouter::new(decorators.clone(), interfaces.clone()),
            interfaces: InterfacesRouter::new(interfaces),
        })
    }
}

impl Router for AppRouter {
    fn register_routes(&self, service_config: &mut web::ServiceConfig) {
        service_config
            .route("/health", web::get().to(status::status))
            .service(
                web::scope("/api/v1")
                    .service(web::scope("/contracts").configure(configure_router(&self.contracts)))
                    .service(
                        web::scope("/interfaces").configure(configure_router(&self.interfaces)),
                    ),
            );
    }
}
