//! Auth module: layered login pipeline (validation, credential lookup, password
//! verification, token issuance).

pub mod domain;
pub mod errors;
pub mod password;
pub mod repo;
pub mod repository;
pub mod service;
pub mod token;
pub mod validation;

pub use errors::AuthError;
pub use service::{AuthConfig, AuthService};
