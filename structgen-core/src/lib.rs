//! Core building blocks for the structgen code generator.
//!
//! structgen connects to a MySQL or PostgreSQL database, reads one table's
//! column metadata from the engine's catalog, and renders a struct
//! declaration mirroring that schema. This crate holds everything but the
//! command-line front end.
//!
//! # Architecture
//! Data flows one way: configuration → connection → raw column rows →
//! normalized descriptors → rendered text. No component reads back from a
//! later stage.
//!
//! - [`config`]: YAML configuration loading
//! - [`adapters`]: per-engine schema readers
//! - [`typemap`] / [`naming`]: type and identifier mapping
//! - [`emit`]: declaration rendering
//! - [`error`]: structured error kinds
//! - [`logging`]: tracing subscriber setup

pub mod adapters;
pub mod config;
pub mod emit;
pub mod error;
pub mod logging;
pub mod models;
pub mod naming;
pub mod typemap;

// Re-export commonly used types
pub use adapters::{Engine, SchemaReader};
pub use config::{CONFIG_FILE, Config};
pub use emit::{emit, render_struct};
pub use error::{Result, StructgenError};
pub use logging::init_logging;
pub use models::ColumnDescriptor;
