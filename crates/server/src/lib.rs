pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;
pub mod extract;
pub mod openapi;

pub use startup::{run, run_with_config};
pub use state::AppState;
