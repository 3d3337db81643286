use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Billing record that finalizes a service request.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "closed_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub wid: i32,
    pub rid: i32,
    pub mid: i32,
    pub date: Date,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub bill: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service_request::Entity",
        from = "Column::Rid",
        to = "super::service_request::Column::Rid"
    )]
    ServiceRequest,

    #[sea_orm(
        belongs_to = "super::mechanic::Entity",
        from = "Column::Mid",
        to = "super::mechanic::Column::Id"
    )]
    Mechanic,
}

impl Related<super::service_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceRequest.def()
    }
}

impl Related<super::mechanic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mechanic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewClosedRequest {
    pub wid: i32,
    pub rid: i32,
    pub mid: i32,
    pub date: Date,
    pub comment: String,
    pub bill: i32,
}

impl From<NewClosedRequest> for ActiveModel {
    fn from(new: NewClosedRequest) -> Self {
        Self {
            wid: Set(new.wid),
            rid: Set(new.rid),
            mid: Set(new.mid),
            date: Set(new.date),
            comment: Set(new.comment),
            bill: Set(new.bill),
        }
    }
}
