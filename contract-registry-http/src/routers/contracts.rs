use super::Router;
use crate::handlers::contracts;
use actix_web::web;
use contract_registry::{ContractDecoratorRepository, ContractInterfacesRepository};

pub struct ContractsRouter {
    decorators: web::Data<ContractDecoratorRepository>,
    interfaces: web::Data<ContractInterfacesRepository>,
}

impl ContractsRouter {
    pub fn new(
        decorators: web::Data<ContractDecoratorRepository>,
        interfaces: web::Data<ContractInterfacesRepository>,
    ) -> Self {
        Self {
            decorators,
            interfaces,
        }
    }
}

impl Router for ContractsRouter {
    // Ids may contain `/`, so id segments use tail-matching patterns and
    // sub-resource routes must be registered before the catch-all ones.
    fn register_routes(&self, service_config: &mut web::ServiceConfig) {
        service_config
            .app_data(self.decorators.clone())
            .app_data(self.interfaces.clone())
            .route("", web::get().to(contracts::list))
            .route("", web::post().to(contracts::register))
            .route(
                "/{id:.+}/manifest.json",
                web::get().to(contracts::manifest_json),
            )
            .route(
                "/{id:.+}/artifact.json",
                web::get().to(contracts::artifact_json),
            )
            .route("/{id:.+}/info.md", web::get().to(contracts::info_markdown))
            .route(
                "/{id:.+}/suggested-interfaces",
                web::get().to(contracts::suggested_interfaces),
            )
            .route(
                "/{id:.+}/interfaces",
                web::put().to(contracts::set_interfaces),
            )
            .route(
                "/{id:.+}/interfaces",
                web::patch().to(contracts::update_interfaces),
            )
            .route("/{id:.+}", web::get().to(contracts::get))
            .route("/{id:.+}", web::delete().to(contracts::delete));
    }
}
