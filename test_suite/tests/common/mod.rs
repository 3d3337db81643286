use chrono::NaiveDate;
use mechanic_shop::database;
use mechanic_shop::entities::{
    Car, ClosedRequest, Customer, Mechanic, Ownership, ServiceRequest, car, closed_request,
    customer, mechanic, owns, service_request,
};
use mechanic_shop::settings::DatabaseSettings;
use mechanic_shop::{Console, IdGenerator, Migrator, Session, ShopResource, YearRange};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use sea_orm_migration::MigratorTrait;
use std::io::Cursor;

pub type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

// Helper function to get database URL from environment or default to SQLite
fn get_test_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string())
}

#[allow(dead_code)]
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let settings = DatabaseSettings {
        host: "localhost".to_string(),
        port: 5432,
        name: "mechanic_shop".to_string(),
        user: "postgres".to_string(),
        password: String::new(),
        connect_timeout_secs: 5,
        url: Some(get_test_database_url()),
    };
    let db = database::connect(&settings).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// A session whose console reads `script` and records everything printed.
#[allow(dead_code)]
pub fn session(script: &str) -> TestSession {
    let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    Session::new(console, IdGenerator::default(), YearRange::default())
}

#[allow(dead_code)]
pub fn printed(session: TestSession) -> String {
    let (_, out) = session.console.into_parts();
    String::from_utf8(out).expect("console output is UTF-8")
}

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[allow(dead_code)]
pub async fn count<E: EntityTrait>(db: &DatabaseConnection) -> u64
where
    E::Model: Send + Sync,
{
    E::find().count(db).await.expect("count rows")
}

#[allow(dead_code)]
pub async fn seed_customer(db: &DatabaseConnection, id: i32, fname: &str, lname: &str) {
    Customer::create(
        db,
        customer::NewCustomer {
            id,
            fname: fname.to_string(),
            lname: lname.to_string(),
            phone: "(951)123-4567".to_string(),
            address: "900 University Ave, Riverside, CA 92521".to_string(),
        },
    )
    .await
    .expect("seed customer");
}

#[allow(dead_code)]
pub async fn seed_mechanic(db: &DatabaseConnection, id: i32) {
    Mechanic::create(
        db,
        mechanic::NewMechanic {
            id,
            fname: "Ada".to_string(),
            lname: "Wrench".to_string(),
            experience: 12,
        },
    )
    .await
    .expect("seed mechanic");
}

/// Insert a car and link it to `customer_id` (ownership ID = `ownership_id`).
#[allow(dead_code)]
pub async fn seed_car(
    db: &DatabaseConnection,
    ownership_id: i32,
    customer_id: i32,
    vin: &str,
    make: &str,
    model: &str,
    year: i32,
) {
    Car::create(
        db,
        car::NewCar {
            vin: vin.to_string(),
            make: make.to_string(),
            model: model.to_string(),
            year,
        },
    )
    .await
    .expect("seed car");
    Ownership::create(
        db,
        owns::NewOwnership {
            ownership_id,
            customer_id,
            car_vin: vin.to_string(),
        },
    )
    .await
    .expect("seed ownership");
}

#[allow(dead_code)]
pub async fn seed_request(
    db: &DatabaseConnection,
    rid: i32,
    customer_id: i32,
    vin: &str,
    opened: NaiveDate,
    odometer: i32,
) {
    ServiceRequest::create(
        db,
        service_request::NewServiceRequest {
            rid,
            customer_id,
            car_vin: vin.to_string(),
            date: opened,
            odometer,
            complain: "Strange noise".to_string(),
        },
    )
    .await
    .expect("seed service request");
}

#[allow(dead_code)]
pub async fn seed_closed(
    db: &DatabaseConnection,
    wid: i32,
    rid: i32,
    mid: i32,
    closed: NaiveDate,
    bill: i32,
) {
    ClosedRequest::create(
        db,
        closed_request::NewClosedRequest {
            wid,
            rid,
            mid,
            date: closed,
            comment: "Done".to_string(),
            bill,
        },
    )
    .await
    .expect("seed closed request");
}
