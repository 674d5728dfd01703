use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_DOCUMENTS: &str = "PK_documents";
}

/// Metadata for an uploaded study-material PDF. The file bytes themselves
/// live on disk, named after the record id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub exam_type: String,
    pub subject: String,
    pub batch: String,
    pub filename: String,
    pub description: Option<String>,
    pub uploaded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_exam_type(exam_type: &str) -> Select<Entity> {
        Self::find().filter(Column::ExamType.eq(exam_type))
    }
}
