use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Groups reference their children by id; the lists are owned, ordered and
/// stored as JSON arrays.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", default_value = "[]")]
    pub participant_ids: String, // JSON array stored as string
    #[sea_orm(column_type = "Text", default_value = "[]")]
    pub animator_ids: String, // JSON array stored as string
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
