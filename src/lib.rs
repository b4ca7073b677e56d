//! Dropblox (workspace facade crate).
//!
//! Re-exports the workspace crates as `dropblox::{core,format,term,types}` and
//! hosts the pieces shared by the binary: environment configuration and the
//! stderr logger.

pub mod config;
pub mod logger;

pub use dropblox_core as core;
pub use dropblox_format as format;
pub use dropblox_term as term;
pub use dropblox_types as types;

pub use config::Config;
