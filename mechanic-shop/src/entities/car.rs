use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
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

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCar {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl From<NewCar> for ActiveModel {
    fn from(new: NewCar) -> Self {
        Self {
            vin: Set(new.vin),
            make: Set(new.make),
            model: Set(new.model),
            year: Set(new.year),
        }
    }
}
