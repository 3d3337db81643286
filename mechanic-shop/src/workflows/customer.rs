use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QueryTrait};
use std::io::{BufRead, Write};

use super::Session;
use crate::core::ShopResource;
use crate::database::access;
use crate::entities::{Customer, customer};
use crate::errors::{Result, ShopError};
use crate::validation::validators;

/// Collect and validate a new customer, then insert it.
///
/// Returns the new customer's ID.
///
/// # Errors
///
/// Fails on closed input or a database error.
pub async fn add_customer<R, W, C>(session: &mut Session<R, W>, db: &C) -> Result<i32>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    let console = &mut session.console;
    let fname = console.prompt_text("First name: ", |v| {
        validators::validate_name("first name", v)
    })?;
    let lname = console.prompt_text("Last name: ", |v| {
        validators::validate_name("last name", v)
    })?;
    let phone = console.prompt_text("Phone number (e.g. (951)123-4567): ", validators::validate_phone)?;
    let street = console.prompt_text("Street: ", |v| validators::validate_place("street", v))?;
    let city = console.prompt_text("City: ", |v| validators::validate_place("city", v))?;
    let state = console.prompt_text("State (e.g. CA): ", validators::validate_state)?;
    let zip = console.prompt_text("Zip code: ", validators::validate_zip)?;

    let id = session.ids.allocate::<Customer, _>(db).await?;
    Customer::create(
        db,
        customer::NewCustomer {
            id,
            fname,
            lname,
            phone,
            address: format!("{street}, {city}, {state} {zip}"),
        },
    )
    .await?;

    session.console.say(format_args!("Customer added with ID {id}"))?;
    Ok(id)
}

/// Customers with exactly this last name, lowest ID first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn customers_by_last_name<C>(db: &C, lname: &str) -> Result<Vec<Customer>>
where
    C: ConnectionTrait,
{
    let stmt = customer::Entity::find()
        .filter(customer::Column::Lname.eq(lname))
        .order_by_asc(customer::Column::Id)
        .build(db.get_database_backend());
    Ok(access::query_rows(db, stmt).await?)
}

/// Resolve a customer by last name.
///
/// No match offers to add a new customer (declining cancels); one match is
/// used as is; several matches are listed for selection. The flag is `true`
/// when the customer was created here.
///
/// # Errors
///
/// [`ShopError::Cancelled`] if the user declines to add a customer.
pub async fn find_customer<R, W, C>(session: &mut Session<R, W>, db: &C) -> Result<(i32, bool)>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    let lname = session.console.prompt_text("Customer last name: ", |v| {
        validators::validate_name("last name", v)
    })?;
    let mut matches = customers_by_last_name(db, &lname).await?;
    tracing::debug!(lname = %lname, matches = matches.len(), "Customer search");

    match matches.len() {
        0 => {
            session
                .console
                .say(format_args!("No customer with last name '{lname}'."))?;
            if !session.console.confirm("Add a new customer?")? {
                return Err(ShopError::cancelled("no matching customer"));
            }
            Ok((add_customer(session, db).await?, true))
        }
        1 => {
            let found = matches.remove(0);
            session.console.say(format_args!(
                "Using customer {} {} (ID {})",
                found.fname, found.lname, found.id
            ))?;
            Ok((found.id, false))
        }
        _ => {
            let options: Vec<String> = matches
                .iter()
                .map(|c| format!("{} {}, {} ({})", c.fname, c.lname, c.phone, c.address))
                .collect();
            let picked = session.console.choose("Select a customer: ", &options)?;
            Ok((matches[picked].id, false))
        }
    }
}
