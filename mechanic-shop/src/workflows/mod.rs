//! The shop's business operations.
//!
//! Each workflow is a sequence of `Result`-returning steps over a
//! [`Session`] and a connection. Workflows that insert rows are run by the
//! menu inside a transaction, so any error (cancellation included) that
//! escapes a workflow leaves nothing behind.

pub mod car;
pub mod closing;
pub mod customer;
pub mod mechanic;
pub mod reports;
pub mod service_request;

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::ids::IdGenerator;
use crate::validation::YearRange;

pub use car::{add_car, add_car_for};
pub use closing::close_service_request;
pub use customer::{add_customer, find_customer};
pub use mechanic::add_mechanic;
pub use service_request::insert_service_request;

/// Per-run state shared by every workflow.
pub struct Session<R, W> {
    pub console: Console<R, W>,
    pub ids: IdGenerator,
    pub years: YearRange,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, ids: IdGenerator, years: YearRange) -> Self {
        Self {
            console,
            ids,
            years,
        }
    }
}
