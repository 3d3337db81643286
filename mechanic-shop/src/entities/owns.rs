use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Ownership link between a customer and a car.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ownership_id: i32,
    pub customer_id: i32,
    pub car_vin: String,
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

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewOwnership {
    pub ownership_id: i32,
    pub customer_id: i32,
    pub car_vin: String,
}

impl From<NewOwnership> for ActiveModel {
    fn from(new: NewOwnership) -> Self {
        Self {
            ownership_id: Set(new.ownership_id),
            customer_id: Set(new.customer_id),
            car_vin: Set(new.car_vin),
        }
    }
}
