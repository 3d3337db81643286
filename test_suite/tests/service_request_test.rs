// Insert-service-request workflow

mod common;
use common::{count, date, printed, seed_car, seed_customer, session, setup_test_db};
use mechanic_shop::entities::{ServiceRequest, car, customer, owns, service_request};
use mechanic_shop::menu::{self, MenuChoice};
use mechanic_shop::workflows::insert_service_request;
use mechanic_shop::ShopResource;

const VIN: &str = "1HGCM82633A00435";
const OTHER_VIN: &str = "JH4KA7561PC00869";

#[tokio::test]
async fn test_request_for_owned_car() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    seed_customer(&db, 1, "Ann", "Lee").await;
    seed_car(&db, 1, 1, VIN, "Honda", "Accord", 2003).await;
    let mut session = session("Lee\n1\n48000\nBrakes squeal\n");

    let rid = insert_service_request(&mut session, &db, date(2024, 1, 10))
        .await
        .unwrap();

    let stored = ServiceRequest::get_one(&db, rid).await.unwrap();
    assert_eq!(stored.customer_id, 1);
    assert_eq!(stored.car_vin, VIN);
    assert_eq!(stored.date, date(2024, 1, 10));
    assert_eq!(stored.odometer, 48000);
    assert_eq!(stored.complain, "Brakes squeal");

    let out = printed(session);
    assert!(out.contains(&format!("1. 2003 Honda Accord ({VIN})")));
    assert!(out.contains("2. Add a new car"));
}

#[tokio::test]
async fn test_odometer_and_complaint_are_validated() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    seed_customer(&db, 1, "Ann", "Lee").await;
    seed_car(&db, 1, 1, VIN, "Honda", "Accord", 2003).await;
    let mut session = session("Lee\n1\n48,000\n48000\n\n   \nBrakes squeal\n");

    insert_service_request(&mut session, &db, date(2024, 1, 10))
        .await
        .unwrap();

    let out = printed(session);
    assert_eq!(out.matches("Invalid odometer").count(), 1);
    assert_eq!(out.matches("Invalid complaint").count(), 2);
}

#[tokio::test]
async fn test_add_new_car_entry() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    seed_customer(&db, 1, "Ann", "Lee").await;
    seed_car(&db, 1, 1, VIN, "Honda", "Accord", 2003).await;
    let mut session = session(&format!(
        "Lee\n2\n{OTHER_VIN}\nAcura\nLegend\n1993\n1200\nCheck engine light\n"
    ));

    let rid = insert_service_request(&mut session, &db, date(2024, 1, 10))
        .await
        .unwrap();

    assert_eq!(ServiceRequest::get_one(&db, rid).await.unwrap().car_vin, OTHER_VIN);
    assert_eq!(count::<car::Entity>(&db).await, 2);
    assert_eq!(count::<owns::Entity>(&db).await, 2);
}

#[tokio::test]
async fn test_customer_without_cars_adds_one() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    seed_customer(&db, 1, "Ann", "Lee").await;
    let mut session = session(&format!(
        "Lee\n{OTHER_VIN}\nAcura\nLegend\n1993\n1200\nCheck engine light\n"
    ));

    let rid = insert_service_request(&mut session, &db, date(2024, 1, 10))
        .await
        .unwrap();

    assert_eq!(ServiceRequest::get_one(&db, rid).await.unwrap().car_vin, OTHER_VIN);
    assert!(printed(session).contains("no cars on file"));
}

#[tokio::test]
async fn test_unknown_customer_is_created_with_a_car() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session(&format!(
        "Nobody\ny\nJane\nNobody\n(951)123-4567\n1 Main St\nRiverside\nCA\n92521\n\
         {OTHER_VIN}\nAcura\nLegend\n1993\n1200\nCheck engine light\n"
    ));

    let rid = insert_service_request(&mut session, &db, date(2024, 1, 10))
        .await
        .unwrap();

    let stored = ServiceRequest::get_one(&db, rid).await.unwrap();
    assert_eq!(stored.car_vin, OTHER_VIN);
    assert_eq!(count::<customer::Entity>(&db).await, 1);
    assert_eq!(count::<owns::Entity>(&db).await, 1);
}

#[tokio::test]
async fn test_declined_new_customer_inserts_nothing() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session("Nobody\nn\n");

    let err = menu::perform(
        &mut session,
        &db,
        MenuChoice::InsertServiceRequest,
        date(2024, 1, 10),
    )
    .await
    .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(count::<customer::Entity>(&db).await, 0);
    assert_eq!(count::<service_request::Entity>(&db).await, 0);
}
