pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod site;
pub mod template;

pub use config::Config;
pub use routes::AppState;
