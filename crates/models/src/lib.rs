pub mod errors;
pub mod db;
pub mod user;
pub mod document;
pub mod document_type;
pub mod document_type_attribute;
pub mod attribute;
pub mod attribute_value;

#[cfg(test)]
mod tests;
