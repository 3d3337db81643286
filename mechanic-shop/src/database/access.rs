//! Statement execution helpers.
//!
//! The four primitives every workflow and report goes through. They take a
//! prepared [`Statement`] (SQL plus bound values) so no user input is ever
//! spliced into SQL text.

use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Statement};
use std::io::Write;

use crate::errors::ShopError;

/// A result row that can be printed as one line of a report table.
pub trait TableRow {
    /// Column headers, in print order.
    fn headers() -> &'static [&'static str];

    /// Cell values, in the same order as [`TableRow::headers`].
    fn cells(&self) -> Vec<String>;
}

/// Run an INSERT / UPDATE / DELETE / DDL statement.
///
/// # Errors
///
/// Returns a `DbErr` if the statement fails.
pub async fn execute_update<C>(db: &C, stmt: Statement) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    tracing::debug!(sql = %stmt.sql, "execute update");
    let result = db.execute(stmt).await?;
    Ok(result.rows_affected())
}

/// Run a query and map every row into `T`.
///
/// # Errors
///
/// Returns a `DbErr` if the query fails or a row does not match `T`.
pub async fn query_rows<T, C>(db: &C, stmt: Statement) -> Result<Vec<T>, DbErr>
where
    T: FromQueryResult,
    C: ConnectionTrait,
{
    tracing::debug!(sql = %stmt.sql, "query rows");
    T::find_by_statement(stmt).all(db).await
}

/// Run a query and return how many rows it produced.
///
/// # Errors
///
/// Returns a `DbErr` if the query fails.
pub async fn query_count<C>(db: &C, stmt: Statement) -> Result<usize, DbErr>
where
    C: ConnectionTrait,
{
    tracing::debug!(sql = %stmt.sql, "query count");
    Ok(db.query_all(stmt).await?.len())
}

/// Run a query and print its rows as a tab-separated table.
///
/// Returns the number of rows printed.
///
/// # Errors
///
/// Fails if the query fails or the output cannot be written.
pub async fn print_query<T, C, W>(db: &C, stmt: Statement, out: &mut W) -> Result<usize, ShopError>
where
    T: FromQueryResult + TableRow,
    C: ConnectionTrait,
    W: Write,
{
    let rows: Vec<T> = query_rows(db, stmt).await?;
    write_table(&rows, out)?;
    Ok(rows.len())
}

/// Print `rows` under a header line; prints nothing for an empty slice.
///
/// # Errors
///
/// Fails if the output cannot be written.
pub fn write_table<T, W>(rows: &[T], out: &mut W) -> std::io::Result<()>
where
    T: TableRow,
    W: Write,
{
    if rows.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", T::headers().join("\t"))?;
    for row in rows {
        writeln!(out, "{}", row.cells().join("\t"))?;
    }
    Ok(())
}
