//! Document types and their ordered attribute schema.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::DocumentTypeService;
