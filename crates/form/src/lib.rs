mod api;
mod controller;
mod form;

pub use api::*;
pub use controller::*;
pub use form::*;
