//! Member entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::database::postgres_base::CollectionEntity;

use chatdev_core::domain::{Member, NewMember};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub subteam: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl CollectionEntity for Entity {
    type Record = Member;
    type New = NewMember;
}

impl From<Model> for Member {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            position: model.position,
            subteam: model.subteam,
        }
    }
}

/// A fresh row for an insert; the id is assigned here.
impl From<NewMember> for ActiveModel {
    fn from(member: NewMember) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            name: Set(member.name),
            position: Set(member.position),
            subteam: Set(member.subteam),
        }
    }
}
