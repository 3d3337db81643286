// Main menu loop: choice parsing, error recovery and end of input

mod common;
use common::{count, date, printed, session, setup_test_db};
use mechanic_shop::entities::mechanic;
use mechanic_shop::menu;

#[tokio::test]
async fn test_exit_choice() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session("12\nabc\n11\n");

    menu::run(&mut session, &db, || date(2024, 1, 10)).await.unwrap();

    let out = printed(session);
    assert_eq!(out.matches("MAIN MENU").count(), 1);
    assert_eq!(out.matches("Invalid choice").count(), 2);
    assert!(out.contains("11. < EXIT"));
}

#[tokio::test]
async fn test_end_of_input_exits_cleanly() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session("");

    menu::run(&mut session, &db, || date(2024, 1, 10)).await.unwrap();
}

#[tokio::test]
async fn test_end_of_input_mid_operation_rolls_back() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session("2\nBob\n");

    menu::run(&mut session, &db, || date(2024, 1, 10)).await.unwrap();

    assert_eq!(count::<mechanic::Entity>(&db).await, 0);
}

#[tokio::test]
async fn test_failed_operation_returns_to_menu() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let mut session = session("5\n99\n2\nBob\nJones\n15\n11\n");

    menu::run(&mut session, &db, || date(2024, 1, 10)).await.unwrap();

    let out = printed(session);
    assert!(out.contains("Service request with ID '99' not found"));
    assert!(out.contains("Mechanic added with ID"));
    assert_eq!(out.matches("MAIN MENU").count(), 3);
    assert_eq!(count::<mechanic::Entity>(&db).await, 1);
}
