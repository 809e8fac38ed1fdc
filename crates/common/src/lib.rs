//! Shared building blocks for the EDM workspace: logging setup, pagination
//! primitives and small transport-neutral types.

pub mod types;
pub mod utils;
pub mod pagination;
