// src/core/mod.rs
//! Configuration and HTTP plumbing shared by the jobs

pub mod config_manager;
pub mod service_client;

pub use config_manager::ApiConfig;
pub use service_client::ServiceClient;
