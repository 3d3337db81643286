//! Main menu loop.
//!
//! Each write operation runs in its own transaction: committed when the
//! workflow returns `Ok`, rolled back on any error. Reports read from the
//! plain connection. Errors are printed and the menu is shown again; end of
//! input leaves the loop.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseTransaction, TransactionTrait};
use std::fmt;
use std::io::{BufRead, Write};

use crate::errors::{Result, ShopError};
use crate::validation::ValidationError;
use crate::workflows::{self, Session, reports};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCustomer = 1,
    AddMechanic,
    AddCar,
    InsertServiceRequest,
    CloseServiceRequest,
    CustomersWithBillUnder100,
    CustomersWithMoreThan20Cars,
    CarsBefore1995Under50000Miles,
    TopKCarsByServiceRequests,
    CustomersByTotalBill,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 11] = [
        Self::AddCustomer,
        Self::AddMechanic,
        Self::AddCar,
        Self::InsertServiceRequest,
        Self::CloseServiceRequest,
        Self::CustomersWithBillUnder100,
        Self::CustomersWithMoreThan20Cars,
        Self::CarsBefore1995Under50000Miles,
        Self::TopKCarsByServiceRequests,
        Self::CustomersByTotalBill,
        Self::Exit,
    ];

    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AddCustomer => "Add customer",
            Self::AddMechanic => "Add mechanic",
            Self::AddCar => "Add car",
            Self::InsertServiceRequest => "Insert service request",
            Self::CloseServiceRequest => "Close service request",
            Self::CustomersWithBillUnder100 => "List customers with bill less than 100",
            Self::CustomersWithMoreThan20Cars => "List customers with more than 20 cars",
            Self::CarsBefore1995Under50000Miles => "List cars before 1995 with 50000 miles",
            Self::TopKCarsByServiceRequests => "List k cars with the most services",
            Self::CustomersByTotalBill => "List customers in descending order of their total bill",
            Self::Exit => "< EXIT",
        }
    }

    /// Operations that insert rows and therefore run in a transaction.
    #[must_use]
    pub fn writes(self) -> bool {
        matches!(
            self,
            Self::AddCustomer
                | Self::AddMechanic
                | Self::AddCar
                | Self::InsertServiceRequest
                | Self::CloseServiceRequest
        )
    }
}

impl TryFrom<u8> for MenuChoice {
    type Error = ValidationError;

    fn try_from(number: u8) -> std::result::Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| {
                ValidationError::new("choice", format!("enter a number from 1 to {}", Self::ALL.len()))
            })
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Parse one line of menu input.
///
/// # Errors
///
/// Returns a `ValidationError` unless the line is a number from 1 to 11.
pub fn parse_choice(input: &str) -> std::result::Result<MenuChoice, ValidationError> {
    let number: u8 = input.trim().parse().map_err(|_| {
        ValidationError::new(
            "choice",
            format!("enter a number from 1 to {}", MenuChoice::ALL.len()),
        )
    })?;
    MenuChoice::try_from(number)
}

/// Show the menu and read choices until `Exit` or end of input.
///
/// `today` is asked for the current date each time a workflow needs one.
///
/// # Errors
///
/// Fails only if the console itself cannot be written.
pub async fn run<R, W, C, F>(session: &mut Session<R, W>, db: &C, today: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait + TransactionTrait,
    F: Fn() -> NaiveDate,
{
    loop {
        session.console.say("MAIN MENU")?;
        session.console.say("---------")?;
        for choice in MenuChoice::ALL {
            session.console.say(choice)?;
        }

        let choice = match session
            .console
            .prompt_with("Please make your choice: ", parse_choice)
        {
            Ok(choice) => choice,
            Err(ShopError::InputClosed) => break,
            Err(err) => return Err(err),
        };
        if choice == MenuChoice::Exit {
            break;
        }

        tracing::info!(operation = choice.label(), "Menu operation");
        match perform(session, db, choice, today()).await {
            Ok(()) => {}
            Err(ShopError::InputClosed) => {
                tracing::info!("Input closed during an operation");
                break;
            }
            Err(err) => {
                err.log_internal();
                session.console.say(err)?;
            }
        }
    }
    Ok(())
}

/// Run one menu operation to completion.
///
/// # Errors
///
/// Whatever the operation fails with; write operations have been rolled
/// back by then.
pub async fn perform<R, W, C>(
    session: &mut Session<R, W>,
    db: &C,
    choice: MenuChoice,
    today: NaiveDate,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: ConnectionTrait + TransactionTrait,
{
    if !choice.writes() {
        let console = &mut session.console;
        let _rows = match choice {
            MenuChoice::CustomersWithBillUnder100 => {
                reports::customers_with_bill_under_100(console, db).await?
            }
            MenuChoice::CustomersWithMoreThan20Cars => {
                reports::customers_with_more_than_20_cars(console, db).await?
            }
            MenuChoice::CarsBefore1995Under50000Miles => {
                reports::cars_before_1995_under_50000_miles(console, db).await?
            }
            MenuChoice::TopKCarsByServiceRequests => {
                reports::top_k_cars_by_service_requests(console, db).await?
            }
            MenuChoice::CustomersByTotalBill => reports::customers_by_total_bill(console, db).await?,
            _ => 0,
        };
        return Ok(());
    }

    let txn = db.begin().await?;
    let outcome = match choice {
        MenuChoice::AddCustomer => workflows::add_customer(session, &txn).await.map(drop),
        MenuChoice::AddMechanic => workflows::add_mechanic(session, &txn).await.map(drop),
        MenuChoice::AddCar => workflows::add_car(session, &txn).await.map(drop),
        MenuChoice::InsertServiceRequest => {
            workflows::insert_service_request(session, &txn, today)
                .await
                .map(drop)
        }
        MenuChoice::CloseServiceRequest => {
            workflows::close_service_request(session, &txn, today)
                .await
                .map(drop)
        }
        _ => Ok(()),
    };
    finish(txn, outcome).await
}

async fn finish<T>(txn: DatabaseTransaction, outcome: Result<T>) -> Result<T> {
    match outcome {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback) = txn.rollback().await {
                tracing::error!(error = %rollback, "Rollback failed");
            }
            Err(err)
        }
    }
}
