//! End-to-end walkthrough of the directory workflow.
//!
//! Provisions a fresh database, registers clients and numbers, renames a
//! client, removes a number, searches, and cascade-deletes, checking the
//! table contents after each step.
//!
//! Run with: cargo test --test lifecycle_integration

mod common;

use common::{add_client, create_test_directory, seed_sample_clients};
use domain::models::{ClientUpdate, SearchCriteria, Table};

#[tokio::test]
async fn test_full_directory_lifecycle() {
    let directory = create_test_directory().await;
    let (petya, vasya) = seed_sample_clients(&directory).await;

    let clients = directory.dump_table(Table::Client).await.unwrap();
    assert_eq!(
        clients,
        vec![
            "(1, 'Petya', 'Petrov', 'petrusha@inbox.com')".to_string(),
            "(2, 'Vasya', 'Vasilyev', 'vasyandr@inbox.com')".to_string(),
        ]
    );

    let phones = directory.dump_table(Table::PhoneNumber).await.unwrap();
    assert_eq!(
        phones,
        vec![
            "(1, 1, '123')".to_string(),
            "(2, 1, '321')".to_string(),
            "(3, 2, '6543')".to_string(),
            "(4, 2, '456')".to_string(),
        ]
    );

    // Rename the first client, email untouched
    let update = ClientUpdate {
        first_name: Some("Petrusha".to_string()),
        last_name: Some("Petroff".to_string()),
        ..Default::default()
    };
    directory.update_client(petya, update).await.unwrap();

    let clients = directory.dump_table(Table::Client).await.unwrap();
    assert_eq!(clients[0], "(1, 'Petrusha', 'Petroff', 'petrusha@inbox.com')");

    // Drop one of Vasya's numbers
    directory.delete_phone(vasya, "456").await.unwrap();
    let phones = directory.dump_table(Table::PhoneNumber).await.unwrap();
    assert_eq!(
        phones,
        vec![
            "(1, 1, '123')".to_string(),
            "(2, 1, '321')".to_string(),
            "(3, 2, '6543')".to_string(),
        ]
    );

    // Substring search by name and by number
    let found = directory
        .find_clients(&SearchCriteria::default().with_first_name("as"))
        .await
        .unwrap();
    assert_eq!(found, vec![vasya]);

    let found = directory
        .find_clients(&SearchCriteria::default().with_number("3"))
        .await
        .unwrap();
    assert_eq!(found, vec![petya, vasya]);

    // Cascade-delete the first client
    directory.delete_client(petya).await.unwrap();

    let clients = directory.dump_table(Table::Client).await.unwrap();
    assert_eq!(
        clients,
        vec!["(2, 'Vasya', 'Vasilyev', 'vasyandr@inbox.com')".to_string()]
    );
    let phones = directory.dump_table(Table::PhoneNumber).await.unwrap();
    assert_eq!(phones, vec!["(3, 2, '6543')".to_string()]);

    // Clients without an email register without conflicts
    add_client(&directory, "Ivan", "Ivanov", "").await;
    add_client(&directory, "Oleg", "Olegov", "").await;
    let clients = directory.dump_table(Table::Client).await.unwrap();
    assert_eq!(clients.len(), 3);
}

#[tokio::test]
async fn test_repeated_schema_init_preserves_data() {
    let directory = create_test_directory().await;
    let petya = add_client(&directory, "Petya", "Petrov", "petrusha@inbox.com").await;

    directory.init_schema().await.unwrap();
    directory.init_schema().await.unwrap();

    let client = directory.get_client(petya).await.unwrap();
    assert_eq!(client.first_name, "Petya");
}
