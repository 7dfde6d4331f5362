pub mod routes;
pub mod startup;
pub mod store;
pub mod errors;
pub mod extract;
pub mod openapi;

pub use startup::{run, run_with_config};
