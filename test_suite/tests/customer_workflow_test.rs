// Add-customer, add-mechanic and customer lookup workflows

mod common;
use common::{count, printed, seed_customer, session, setup_test_db};
use mechanic_shop::entities::{Customer, Mechanic, customer, mechanic};
use mechanic_shop::workflows::{add_customer, add_mechanic, find_customer};
use mechanic_shop::{ShopError, ShopResource};

const NEW_CUSTOMER: &str = "Mary\nSmith\n(951)123-4567\n900 University Ave\nRiverside\nCA\n92521\n";

#[tokio::test]
async fn test_add_customer_builds_address() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session(NEW_CUSTOMER);

    let id = add_customer(&mut session, &db).await.unwrap();

    let stored = Customer::get_one(&db, id).await.unwrap();
    assert_eq!(stored.fname, "Mary");
    assert_eq!(stored.lname, "Smith");
    assert_eq!(stored.phone, "(951)123-4567");
    assert_eq!(stored.address, "900 University Ave, Riverside, CA 92521");
    assert!(id >= 0);
    assert!(printed(session).contains(&format!("Customer added with ID {id}")));
}

#[tokio::test]
async fn test_add_customer_reprompts_invalid_fields() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session(
        "M4ry\nMary\nSmith\n951-123-4567\n(951)123-456\n(951)123-4567\n\
         900 University Ave\nRiverside\nca\nCA\n9252\n92521\n",
    );

    add_customer(&mut session, &db).await.unwrap();

    let out = printed(session);
    assert_eq!(out.matches("Invalid first name").count(), 1);
    assert_eq!(out.matches("Invalid phone number").count(), 2);
    assert_eq!(out.matches("Invalid state").count(), 1);
    assert_eq!(out.matches("Invalid zip code").count(), 1);
    assert_eq!(count::<customer::Entity>(&db).await, 1);
}

#[tokio::test]
async fn test_add_customer_input_closed_inserts_nothing() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session("Mary\nSmith\n");

    let err = add_customer(&mut session, &db).await.unwrap_err();

    assert!(matches!(err, ShopError::InputClosed));
    assert_eq!(count::<customer::Entity>(&db).await, 0);
}

#[tokio::test]
async fn test_add_mechanic_checks_experience() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session("Bob\nJones\n100\nten\n15\n");

    let id = add_mechanic(&mut session, &db).await.unwrap();

    let stored = Mechanic::get_one(&db, id).await.unwrap();
    assert_eq!(stored.experience, 15);
    assert_eq!(count::<mechanic::Entity>(&db).await, 1);
    assert_eq!(
        printed(session).matches("Invalid years of experience").count(),
        2
    );
}

#[tokio::test]
async fn test_find_customer_single_match() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    seed_customer(&db, 1, "Ann", "Lee").await;
    seed_customer(&db, 2, "Bo", "Park").await;
    let mut session = session("Lee\n");

    let (id, created) = find_customer(&mut session, &db).await.unwrap();

    assert_eq!(id, 1);
    assert!(!created);
}

#[tokio::test]
async fn test_find_customer_multiple_matches_are_listed() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    seed_customer(&db, 1, "Ann", "Smith").await;
    seed_customer(&db, 2, "Bo", "Smith").await;
    let mut session = session("Smith\n3\n2\n");

    let (id, created) = find_customer(&mut session, &db).await.unwrap();

    assert_eq!(id, 2);
    assert!(!created);
    let out = printed(session);
    assert!(out.contains("1. Ann Smith"));
    assert!(out.contains("2. Bo Smith"));
    assert!(out.contains("Invalid choice"));
}

#[tokio::test]
async fn test_find_customer_no_match_declined() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session("Nobody\nn\n");

    let err = find_customer(&mut session, &db).await.unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(count::<customer::Entity>(&db).await, 0);
}

#[tokio::test]
async fn test_find_customer_no_match_adds_customer() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session(&format!("Smith\ny\n{NEW_CUSTOMER}"));

    let (id, created) = find_customer(&mut session, &db).await.unwrap();

    assert!(created);
    assert_eq!(Customer::get_one(&db, id).await.unwrap().lname, "Smith");
}

#[tokio::test]
async fn test_find_customer_rejects_blank_last_name() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    seed_customer(&db, 1, "Ann", "Lee").await;
    let mut session = session("   \nLee\n");

    let (id, _) = find_customer(&mut session, &db).await.unwrap();

    assert_eq!(id, 1);
    let out = printed(session);
    assert_eq!(out.matches("Invalid last name").count(), 1);
    assert!(!out.contains("No customer with last name"));
}
