pub mod config;
pub mod data;
pub mod env;
pub mod init;
pub mod request;
pub mod resource;
pub mod source_type;
