//! Users: registration, profile updates, password changes.
//!
//! Same three-layer split as every other entity: domain inputs, a repository
//! trait, and the service that owns the rules.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::UserService;
