use super::Router;
use crate::handlers::interfaces;
use actix_web::web;
use contract_registry::ContractInterfacesRepository;

pub struct InterfacesRouter {
    interfaces: web::Data<ContractInterfacesRepository>,
}

impl InterfacesRouter {
    pub fn new(interfaces: web::Data<ContractInterfacesRepository>) -> Self {
        Self { interfaces }
    }
}

impl Router for InterfacesRouter {
    fn register_routes(&self, service_config: &mut web::ServiceConfig) {
        service_config
            .app_data(self.interfaces.clone())
            .route("", web::get().to(interfaces::list))
            .route("", web::post().to(interfaces::register))
            .route("/{id:.+}/info.md", web::get().to(interfaces::info_markdown))
            .route("/{id:.+}", web::get().to(interfaces::get))
            .route("/{id:.+}", web::delete().to(interfaces::delete));
    }
}
