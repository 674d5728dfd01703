pub use sea_orm_migration::prelude::*;

mod m20260214_183222_create_documents_table;
mod m20260214_191047_create_schedules_table;
mod m20260215_092310_create_contacts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260214_183222_create_documents_table::Migration),
            Box::new(m20260214_191047_create_schedules_table::Migration),
            Box::new(m20260215_092310_create_contacts_table::Migration),
        ]
    }
}
