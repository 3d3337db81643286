use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rid: i32,
    pub customer_id: i32,
    pub car_vin: String,
    pub date: Date,
    pub odometer: i32,
    #[sea_orm(column_type = "Text")]
    pub complain: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,

    #[sea_orm(
        belongs_to = "super::car::Entity",
        from = "Column::CarVin",
        to = "super::car::Column::Vin"
    )]
    Car,

    #[sea_orm(has_many = "super::closed_request::Entity")]
    ClosedRequests,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl Related<super::closed_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClosedRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewServiceRequest {
    pub rid: i32,
    pub customer_id: i32,
    pub car_vin: String,
    pub date: Date,
    pub odometer: i32,
    pub complain: String,
}

impl From<NewServiceRequest> for ActiveModel {
    fn from(new: NewServiceRequest) -> Self {
        Self {
            rid: Set(new.rid),
            customer_id: Set(new.customer_id),
            car_vin: Set(new.car_vin),
            date: Set(new.date),
            odometer: Set(new.odometer),
            complain: Set(new.complain),
        }
    }
}
