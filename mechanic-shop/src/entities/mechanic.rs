use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mechanic")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub fname: String,
    pub lname: String,
    pub experience: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::closed_request::Entity")]
    ClosedRequests,
}

impl Related<super::closed_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClosedRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMechanic {
    pub id: i32,
    pub fname: String,
    pub lname: String,
    pub experience: i32,
}

impl From<NewMechanic> for ActiveModel {
    fn from(new: NewMechanic) -> Self {
        Self {
            id: Set(new.id),
            fname: Set(new.fname),
            lname: Set(new.lname),
            experience: Set(new.experience),
        }
    }
}
