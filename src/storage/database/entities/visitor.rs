use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One counted visit: a hashed identity on a UTC day
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "visitors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// SHA-256 of salt and client address, lowercase hex
    pub ip_hash: String,

    /// First time this identity was seen on `visit_date`
    pub visited_at: DateTimeUtc,

    /// UTC day, `YYYY-MM-DD`
    pub visit_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
