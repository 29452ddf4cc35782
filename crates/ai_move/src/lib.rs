//! Network and command-line front end for the move engines.

pub mod config;
pub mod server;

pub use config::{AppConfig, ServerConfig, DEFAULT_ADDR};
pub use server::{router, ApiError, MoveRequest, MoveResponse};
