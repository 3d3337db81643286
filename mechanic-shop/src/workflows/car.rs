use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QueryTrait};
use std::io::{BufRead, Write};

use super::Session;
use super::customer::{add_customer, find_customer};
use crate::core::ShopResource;
use crate::database::access;
use crate::entities::{Car, Ownership, car, owns};
use crate::errors::{Result, ShopError};
use crate::validation::validators;

/// Menu entry: pick (or create) the owner, then add a car for them.
///
/// # Errors
///
/// [`ShopError::Cancelled`] if the user backs out at any step.
pub async fn add_car<R, W, C>(session: &mut Session<R, W>, db: &C) -> Result<String>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    let owner = session
        .console
        .choose("Owner: ", &["Existing customer", "New customer"])?;
    let customer_id = if owner == 0 {
        find_customer(session, db).await?.0
    } else {
        add_customer(session, db).await?
    };
    add_car_for(session, db, customer_id).await
}

/// Collect a new car, insert it and link it to `customer_id`.
///
/// A VIN that is already registered prompts to try another one; declining
/// cancels the workflow. Returns the VIN.
///
/// # Errors
///
/// [`ShopError::Cancelled`] if the user declines to enter another VIN.
pub async fn add_car_for<R, W, C>(
    session: &mut Session<R, W>,
    db: &C,
    customer_id: i32,
) -> Result<String>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    let vin = loop {
        let vin = session
            .console
            .prompt_text("VIN (16 letters and digits): ", validators::validate_vin)?;
        if !Car::exists(db, vin.clone()).await? {
            break vin;
        }
        tracing::debug!(vin = %vin, "Duplicate VIN entered");
        session
            .console
            .say(format_args!("A car with VIN {vin} is already registered."))?;
        if !session.console.confirm("Enter a different VIN?")? {
            return Err(ShopError::cancelled("duplicate VIN"));
        }
    };

    let years = session.years;
    let console = &mut session.console;
    let make = console.prompt_text("Make: ", validators::validate_make)?;
    let model = console.prompt_text("Model: ", validators::validate_model)?;
    let year = console.prompt_with(
        &format!("Year ({}-{}): ", years.min_year, years.max_year),
        |v| validators::parse_year(v, years),
    )?;

    Car::create(
        db,
        car::NewCar {
            vin: vin.clone(),
            make,
            model,
            year,
        },
    )
    .await?;

    let ownership_id = session.ids.allocate::<Ownership, _>(db).await?;
    Ownership::create(
        db,
        owns::NewOwnership {
            ownership_id,
            customer_id,
            car_vin: vin.clone(),
        },
    )
    .await?;

    session
        .console
        .say(format_args!("Car {vin} added for customer {customer_id}"))?;
    Ok(vin)
}

/// Cars linked to `customer_id`, ordered by VIN.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn cars_owned_by<C>(db: &C, customer_id: i32) -> Result<Vec<Car>>
where
    C: ConnectionTrait,
{
    let stmt = car::Entity::find()
        .inner_join(owns::Entity)
        .filter(owns::Column::CustomerId.eq(customer_id))
        .order_by_asc(car::Column::Vin)
        .build(db.get_database_backend());
    Ok(access::query_rows(db, stmt).await?)
}
