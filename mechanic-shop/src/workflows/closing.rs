use chrono::NaiveDate;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryTrait};
use std::io::{BufRead, Write};

use super::Session;
use crate::core::ShopResource;
use crate::database::access;
use crate::entities::{ClosedRequest, Mechanic, ServiceRequest, closed_request};
use crate::errors::{Result, ShopError};
use crate::validation::validators;

/// Close a service request as of `today` and record the bill.
///
/// Rejected without inserting anything when the request does not exist, is
/// already closed, the mechanic does not exist, or `today` is earlier than
/// the date the request was opened. Returns the closed request's ID.
///
/// # Errors
///
/// [`ShopError::NotFound`], [`ShopError::Conflict`] or
/// [`ShopError::ClosingBeforeRequest`] for the cases above.
pub async fn close_service_request<R, W, C>(
    session: &mut Session<R, W>,
    db: &C,
    today: NaiveDate,
) -> Result<i32>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait,
{
    let rid = session.console.prompt_with("Service request ID: ", |v| {
        validators::parse_id("service request ID", v)
    })?;
    let request = ServiceRequest::get_one(db, rid).await?;

    if times_closed(db, rid).await? > 0 {
        return Err(ShopError::conflict(format!(
            "Service request {rid} is already closed"
        )));
    }

    let mid = session
        .console
        .prompt_with("Mechanic ID: ", |v| validators::parse_id("mechanic ID", v))?;
    if !Mechanic::exists(db, mid).await? {
        return Err(ShopError::not_found(
            Mechanic::RESOURCE_NAME_SINGULAR,
            Some(mid.to_string()),
        ));
    }

    if today < request.date {
        return Err(ShopError::ClosingBeforeRequest {
            opened: request.date,
            closing: today,
        });
    }

    let bill = session
        .console
        .prompt_with("Bill (whole dollars): ", validators::parse_bill)?;
    let comment = session.console.read_line("Comment: ")?;

    let wid = session.ids.allocate::<ClosedRequest, _>(db).await?;
    ClosedRequest::create(
        db,
        closed_request::NewClosedRequest {
            wid,
            rid,
            mid,
            date: today,
            comment,
            bill,
        },
    )
    .await?;

    tracing::info!(wid, rid, mid, bill, "Service request closed");
    session
        .console
        .say(format_args!("Service request {rid} closed (work ID {wid})"))?;
    Ok(wid)
}

async fn times_closed<C: ConnectionTrait>(db: &C, rid: i32) -> Result<usize> {
    let stmt = closed_request::Entity::find()
        .filter(closed_request::Column::Rid.eq(rid))
        .build(db.get_database_backend());
    Ok(access::query_count(db, stmt).await?)
}
