//! Dokploy API client and Terraform-style provider core.
//!
//! - [`client`]: authenticated HTTP access to the Dokploy API
//! - [`source`]: source-type inference for applications and compose stacks
//! - [`env_vars`]: `KEY=VALUE` environment text codec
//! - [`provider`]: resources and data sources over JSON state

pub mod cli;
pub mod client;
pub mod config;
pub mod env_vars;
pub mod error;
pub mod provider;
pub mod source;
