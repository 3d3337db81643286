//! Sea-ORM entities for the six shop tables.
//!
//! Table and column names are lowercase so they line up with a schema
//! created in PostgreSQL with unquoted identifiers.

pub mod car;
pub mod closed_request;
pub mod customer;
pub mod mechanic;
pub mod owns;
pub mod service_request;

use crate::core::ShopResource;

pub type Customer = customer::Model;
pub type Mechanic = mechanic::Model;
pub type Car = car::Model;
pub type Ownership = owns::Model;
pub type ServiceRequest = service_request::Model;
pub type ClosedRequest = closed_request::Model;

impl ShopResource for Customer {
    type EntityType = customer::Entity;
    type ColumnType = customer::Column;
    type ActiveModelType = customer::ActiveModel;
    type CreateModel = customer::NewCustomer;
    type Key = i32;

    const ID_COLUMN: Self::ColumnType = customer::Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "Customer";
}

impl ShopResource for Mechanic {
    type EntityType = mechanic::Entity;
    type ColumnType = mechanic::Column;
    type ActiveModelType = mechanic::ActiveModel;
    type CreateModel = mechanic::NewMechanic;
    type Key = i32;

    const ID_COLUMN: Self::ColumnType = mechanic::Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "Mechanic";
}

impl ShopResource for Car {
    type EntityType = car::Entity;
    type ColumnType = car::Column;
    type ActiveModelType = car::ActiveModel;
    type CreateModel = car::NewCar;
    type Key = String;

    const ID_COLUMN: Self::ColumnType = car::Column::Vin;
    const RESOURCE_NAME_SINGULAR: &'static str = "Car";
}

impl ShopResource for Ownership {
    type EntityType = owns::Entity;
    type ColumnType = owns::Column;
    type ActiveModelType = owns::ActiveModel;
    type CreateModel = owns::NewOwnership;
    type Key = i32;

    const ID_COLUMN: Self::ColumnType = owns::Column::OwnershipId;
    const RESOURCE_NAME_SINGULAR: &'static str = "Ownership";
}

impl ShopResource for ServiceRequest {
    type EntityType = service_request::Entity;
    type ColumnType = service_request::Column;
    type ActiveModelType = service_request::ActiveModel;
    type CreateModel = service_request::NewServiceRequest;
    type Key = i32;

    const ID_COLUMN: Self::ColumnType = service_request::Column::Rid;
    const RESOURCE_NAME_SINGULAR: &'static str = "Service request";
}

impl ShopResource for ClosedRequest {
    type EntityType = closed_request::Entity;
    type ColumnType = closed_request::Column;
    type ActiveModelType = closed_request::ActiveModel;
    type CreateModel = closed_request::NewClosedRequest;
    type Key = i32;

    const ID_COLUMN: Self::ColumnType = closed_request::Column::Wid;
    const RESOURCE_NAME_SINGULAR: &'static str = "Closed request";
}
