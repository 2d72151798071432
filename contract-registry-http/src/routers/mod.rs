mod app;
mod contracts;
mod interfaces;

pub use self::app::AppRouter;

use actix_web::web;

pub trait Router {
    fn register_routes(&self, service_config: &mut web::ServiceConfig);
}

impl<T: Router> Router for Option<T> {
    fn register_routes(&self, service_config: &mut web::ServiceConfig) {
        if let Some(router) = self {
            router.register_routes(service_config)
        }
    }
}

pub fn configure_router(router: &impl Router) -> impl FnOnce(&mut web::ServiceConfig) + '_ {
    |service_config| router.register_routes(service_config)
}
