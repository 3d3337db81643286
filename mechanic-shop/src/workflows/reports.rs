//! The five read-only reports.
//!
//! Joins, grouping and ordering are done by the database; each report only
//! builds its statement and hands it to [`access::print_query`].

use sea_orm::prelude::Date;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, RelationTrait, Statement,
};
use std::io::{BufRead, Write};

use crate::console::Console;
use crate::database::access::{self, TableRow};
use crate::entities::{car, closed_request, customer, owns, service_request};
use crate::errors::Result;
use crate::validation::validators;

pub const CHEAP_BILL_LIMIT: i32 = 100;
pub const FLEET_OWNER_MIN_CARS: i32 = 20;
pub const VINTAGE_BEFORE_YEAR: i32 = 1995;
pub const LOW_MILEAGE_LIMIT: i32 = 50_000;

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CheapBill {
    pub fname: String,
    pub lname: String,
    pub date: Date,
    pub comment: String,
    pub bill: i32,
}

impl TableRow for CheapBill {
    fn headers() -> &'static [&'static str] {
        &["first name", "last name", "closed", "comment", "bill"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.fname.clone(),
            self.lname.clone(),
            self.date.to_string(),
            self.comment.clone(),
            self.bill.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct FleetOwner {
    pub fname: String,
    pub lname: String,
    pub cars: i64,
}

impl TableRow for FleetOwner {
    fn headers() -> &'static [&'static str] {
        &["first name", "last name", "cars"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.fname.clone(), self.lname.clone(), self.cars.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CarModel {
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl TableRow for CarModel {
    fn headers() -> &'static [&'static str] {
        &["make", "model", "year"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.make.clone(), self.model.clone(), self.year.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct BusyCar {
    pub make: String,
    pub model: String,
    pub requests: i64,
}

impl TableRow for BusyCar {
    fn headers() -> &'static [&'static str] {
        &["make", "model", "open service requests"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.make.clone(),
            self.model.clone(),
            self.requests.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CustomerTotal {
    pub fname: String,
    pub lname: String,
    pub total: i64,
}

impl TableRow for CustomerTotal {
    fn headers() -> &'static [&'static str] {
        &["first name", "last name", "total bill"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.fname.clone(), self.lname.clone(), self.total.to_string()]
    }
}

/// Closed requests billed under [`CHEAP_BILL_LIMIT`], with the customer's name.
pub fn cheap_bills_query<C: ConnectionTrait>(db: &C) -> Statement {
    closed_request::Entity::find()
        .select_only()
        .column(customer::Column::Fname)
        .column(customer::Column::Lname)
        .column(closed_request::Column::Date)
        .column(closed_request::Column::Comment)
        .column(closed_request::Column::Bill)
        .join(
            JoinType::InnerJoin,
            closed_request::Relation::ServiceRequest.def(),
        )
        .join(JoinType::InnerJoin, service_request::Relation::Customer.def())
        .filter(closed_request::Column::Bill.lt(CHEAP_BILL_LIMIT))
        .order_by_asc(closed_request::Column::Date)
        .order_by_asc(closed_request::Column::Wid)
        .build(db.get_database_backend())
}

/// Customers linked to more than [`FLEET_OWNER_MIN_CARS`] cars.
pub fn fleet_owners_query<C: ConnectionTrait>(db: &C) -> Statement {
    let cars = Expr::col((owns::Entity, owns::Column::OwnershipId)).count();
    customer::Entity::find()
        .select_only()
        .column(customer::Column::Fname)
        .column(customer::Column::Lname)
        .column_as(cars.clone(), "cars")
        .join(JoinType::InnerJoin, customer::Relation::Owns.def())
        .group_by(customer::Column::Id)
        .group_by(customer::Column::Fname)
        .group_by(customer::Column::Lname)
        .having(Expr::expr(cars).gt(FLEET_OWNER_MIN_CARS))
        .order_by_asc(customer::Column::Lname)
        .order_by_asc(customer::Column::Id)
        .build(db.get_database_backend())
}

/// Distinct models built before [`VINTAGE_BEFORE_YEAR`] that were brought in
/// with fewer than [`LOW_MILEAGE_LIMIT`] miles.
pub fn vintage_low_mileage_query<C: ConnectionTrait>(db: &C) -> Statement {
    car::Entity::find()
        .select_only()
        .column(car::Column::Make)
        .column(car::Column::Model)
        .column(car::Column::Year)
        .distinct()
        .join(JoinType::InnerJoin, car::Relation::ServiceRequests.def())
        .filter(car::Column::Year.lt(VINTAGE_BEFORE_YEAR))
        .filter(service_request::Column::Odometer.lt(LOW_MILEAGE_LIMIT))
        .order_by_asc(car::Column::Make)
        .order_by_asc(car::Column::Model)
        .order_by_asc(car::Column::Year)
        .build(db.get_database_backend())
}

/// The `k` cars with the most open service requests. A request is open
/// until it has a closed request.
pub fn busiest_cars_query<C: ConnectionTrait>(db: &C, k: u64) -> Statement {
    let requests = Expr::col((service_request::Entity, service_request::Column::Rid)).count();
    car::Entity::find()
        .select_only()
        .column(car::Column::Make)
        .column(car::Column::Model)
        .column_as(requests.clone(), "requests")
        .join(JoinType::InnerJoin, car::Relation::ServiceRequests.def())
        .join(
            JoinType::LeftJoin,
            service_request::Relation::ClosedRequests.def(),
        )
        .filter(closed_request::Column::Wid.is_null())
        .group_by(car::Column::Vin)
        .group_by(car::Column::Make)
        .group_by(car::Column::Model)
        .order_by_desc(requests)
        .order_by_asc(car::Column::Vin)
        .limit(k)
        .build(db.get_database_backend())
}

/// Every customer with at least one closed request, by total billed.
pub fn customer_totals_query<C: ConnectionTrait>(db: &C) -> Statement {
    let total = Expr::col((closed_request::Entity, closed_request::Column::Bill)).sum();
    customer::Entity::find()
        .select_only()
        .column(customer::Column::Fname)
        .column(customer::Column::Lname)
        .column_as(total.clone(), "total")
        .join(JoinType::InnerJoin, customer::Relation::ServiceRequests.def())
        .join(
            JoinType::InnerJoin,
            service_request::Relation::ClosedRequests.def(),
        )
        .group_by(customer::Column::Id)
        .group_by(customer::Column::Fname)
        .group_by(customer::Column::Lname)
        .order_by_desc(total)
        .order_by_asc(customer::Column::Id)
        .build(db.get_database_backend())
}

async fn run<T, R, W, C>(console: &mut Console<R, W>, db: &C, stmt: Statement) -> Result<usize>
where
    T: FromQueryResult + TableRow,
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    let rows = access::print_query::<T, _, _>(db, stmt, console.output()).await?;
    if rows == 0 {
        console.say("No rows")?;
    } else {
        console.say(format_args!("{rows} row(s)"))?;
    }
    Ok(rows)
}

/// # Errors
///
/// Fails if the query fails or the console cannot be written.
pub async fn customers_with_bill_under_100<R, W, C>(
    console: &mut Console<R, W>,
    db: &C,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    run::<CheapBill, _, _, _>(console, db, cheap_bills_query(db)).await
}

/// # Errors
///
/// Fails if the query fails or the console cannot be written.
pub async fn customers_with_more_than_20_cars<R, W, C>(
    console: &mut Console<R, W>,
    db: &C,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    run::<FleetOwner, _, _, _>(console, db, fleet_owners_query(db)).await
}

/// # Errors
///
/// Fails if the query fails or the console cannot be written.
pub async fn cars_before_1995_under_50000_miles<R, W, C>(
    console: &mut Console<R, W>,
    db: &C,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    run::<CarModel, _, _, _>(console, db, vintage_low_mileage_query(db)).await
}

/// Prompts for `k` first.
///
/// # Errors
///
/// Fails on closed input, a failed query or console output.
pub async fn top_k_cars_by_service_requests<R, W, C>(
    console: &mut Console<R, W>,
    db: &C,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    let k = console.prompt_with("How many cars (k): ", validators::parse_top_k)?;
    run::<BusyCar, _, _, _>(console, db, busiest_cars_query(db, k)).await
}

/// # Errors
///
/// Fails if the query fails or the console cannot be written.
pub async fn customers_by_total_bill<R, W, C>(console: &mut Console<R, W>, db: &C) -> Result<usize>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    run::<CustomerTotal, _, _, _>(console, db, customer_totals_query(db)).await
}
