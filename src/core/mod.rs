//! Core module — server configuration, state, and startup
//!
//! # Module structure
//!
//! - [`Config`] — server configuration
//! - [`ServerState`] — server state
//! - [`Server`] — HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Server, build_app};
pub use state::ServerState;
