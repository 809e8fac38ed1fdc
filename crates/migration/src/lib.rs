//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user;
mod m20240101_000002_create_document_type;
mod m20240101_000003_create_attribute;
mod m20240101_000004_create_document_type_attribute;
mod m20240101_000005_create_document;
mod m20240101_000006_create_attribute_value;
mod m20240101_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user::Migration),
            Box::new(m20240101_000002_create_document_type::Migration),
            Box::new(m20240101_000003_create_attribute::Migration),
            Box::new(m20240101_000004_create_document_type_attribute::Migration),
            Box::new(m20240101_000005_create_document::Migration),
            Box::new(m20240101_000006_create_attribute_value::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000007_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_registered_in_order() {
        let names: Vec<String> = Migrator::migrations().iter().map(|m| m.name().to_string()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 7);
        assert!(names.last().unwrap().ends_with("add_indexes"));
    }
}
