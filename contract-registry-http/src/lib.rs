mod handlers;
mod metrics;
mod routers;
mod run;
mod settings;
mod tracer;

pub use routers::{configure_router, AppRouter, Router};
pub use run::run;
pub use settings::Settings;
pub use tracer::init_logs;
