use sea_orm::ConnectionTrait;
use std::io::{BufRead, Write};

use super::Session;
use crate::core::ShopResource;
use crate::entities::{Mechanic, mechanic};
use crate::errors::Result;
use crate::validation::validators;

/// Collect and validate a new mechanic, then insert it.
///
/// # Errors
///
/// Fails on closed input or a database error.
pub async fn add_mechanic<R, W, C>(session: &mut Session<R, W>, db: &C) -> Result<i32>
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
    let experience = console.prompt_with("Years of experience: ", validators::parse_experience)?;

    let id = session.ids.allocate::<Mechanic, _>(db).await?;
    Mechanic::create(
        db,
        mechanic::NewMechanic {
            id,
            fname,
            lname,
            experience,
        },
    )
    .await?;

    session.console.say(format_args!("Mechanic added with ID {id}"))?;
    Ok(id)
}
