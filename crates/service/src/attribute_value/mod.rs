//! Values of attributes attached to documents.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::AttributeValueService;
