use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub fname: String,
    pub lname: String,
    pub phone: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::owns::Entity")]
    Owns,

    #[sea_orm(has_many = "super::service_request::Entity")]
    ServiceRequests,
}

impl Related<super::owns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owns.def()
    }
}

impl Related<super::service_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields collected by the add-customer workflow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub id: i32,
    pub fname: String,
    pub lname: String,
    pub phone: String,
    pub address: String,
}

impl From<NewCustomer> for ActiveModel {
    fn from(new: NewCustomer) -> Self {
        Self {
            id: Set(new.id),
            fname: Set(new.fname),
            lname: Set(new.lname),
            phone: Set(new.phone),
            address: Set(new.address),
        }
    }
}
