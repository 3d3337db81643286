use chrono::NaiveDate;
use sea_orm::ConnectionTrait;
use std::io::{BufRead, Write};

use super::Session;
use super::car::{add_car_for, cars_owned_by};
use super::customer::find_customer;
use crate::core::ShopResource;
use crate::entities::{ServiceRequest, service_request};
use crate::errors::Result;
use crate::validation::validators;

/// Open a service request dated `today`.
///
/// The customer is resolved by last name (see
/// [`find_customer`](super::find_customer)); a customer created on the spot
/// gets a new car right away. Otherwise the customer's cars are listed with
/// an extra entry for adding another one. Returns the request ID.
///
/// # Errors
///
/// [`ShopError::Cancelled`](crate::errors::ShopError::Cancelled) if the
/// user backs out at any step.
pub async fn insert_service_request<R, W, C>(
    session: &mut Session<R, W>,
    db: &C,
    today: NaiveDate,
) -> Result<i32>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    let (customer_id, created) = find_customer(session, db).await?;
    let car_vin = if created {
        add_car_for(session, db, customer_id).await?
    } else {
        pick_car(session, db, customer_id).await?
    };

    let odometer = session
        .console
        .prompt_with("Odometer reading: ", validators::parse_odometer)?;
    let complain = session.console.prompt_text("Complaint: ", |v| {
        validators::validate_required("complaint", v)
    })?;

    let rid = session.ids.allocate::<ServiceRequest, _>(db).await?;
    ServiceRequest::create(
        db,
        service_request::NewServiceRequest {
            rid,
            customer_id,
            car_vin: car_vin.clone(),
            date: today,
            odometer,
            complain,
        },
    )
    .await?;

    tracing::info!(rid, customer_id, car_vin = %car_vin, "Service request opened");
    session
        .console
        .say(format_args!("Service request {rid} opened for car {car_vin}"))?;
    Ok(rid)
}

async fn pick_car<R, W, C>(session: &mut Session<R, W>, db: &C, customer_id: i32) -> Result<String>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    let mut cars = cars_owned_by(db, customer_id).await?;
    if cars.is_empty() {
        session
            .console
            .say("This customer has no cars on file. Adding one now.")?;
        return add_car_for(session, db, customer_id).await;
    }

    let mut options: Vec<String> = cars
        .iter()
        .map(|c| format!("{} {} {} ({})", c.year, c.make, c.model, c.vin))
        .collect();
    options.push("Add a new car".to_string());

    let picked = session.console.choose("Select a car: ", &options)?;
    if picked == cars.len() {
        add_car_for(session, db, customer_id).await
    } else {
        Ok(cars.swap_remove(picked).vin)
    }
}
