//! Shared pieces used by every crate in the workspace: wire types that are
//! not tied to an entity, and process-wide logging setup.

pub mod types;

pub mod utils {
    pub mod logging;
}
