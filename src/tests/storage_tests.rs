use crate::core::errors::SiteError;
use crate::core::models::{
    appointment::InsertAppointment, contact_message::InsertContactMessage, user::InsertUser,
};
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage};
use std::collections::HashSet;

fn contact_input(n: usize) -> InsertContactMessage {
    InsertContactMessage {
        name: format!("Visitor {}", n),
        email: format!("visitor{}@example.com", n),
        message: "Interested in your consulting services.".to_string(),
    }
}

#[tokio::test]
async fn test_create_contact_message_assigns_id_and_echoes_fields() {
    let storage = InMemoryStorage::new();
    let input = contact_input(1);
    let stored = storage.create_contact_message(input.clone()).await.unwrap();
    assert!(!stored.id.is_empty());
    assert_eq!(stored.name, input.name);
    assert_eq!(stored.email, input.email);
    assert_eq!(stored.message, input.message);
}

#[tokio::test]
async fn test_identical_payloads_get_distinct_ids() {
    let storage = InMemoryStorage::new();
    let a = storage.create_contact_message(contact_input(1)).await.unwrap();
    let b = storage.create_contact_message(contact_input(1)).await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(storage.list_contact_messages().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_returns_records_in_insertion_order() {
    let storage = InMemoryStorage::new();
    let mut created = Vec::new();
    for n in 0..25 {
        created.push(storage.create_contact_message(contact_input(n)).await.unwrap());
    }
    let listed = storage.list_contact_messages().await.unwrap();
    assert_eq!(listed, created);

    let ids: HashSet<_> = listed.iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids.len(), 25);
    assert!(listed.windows(2).all(|w| w[0].created_at <= w[1].created_at));
}

#[tokio::test]
async fn test_list_is_a_snapshot() {
    let storage = InMemoryStorage::new();
    storage.create_contact_message(contact_input(1)).await.unwrap();
    let before = storage.list_contact_messages().await.unwrap();
    storage.create_contact_message(contact_input(2)).await.unwrap();
    assert_eq!(before.len(), 1);
    assert_eq!(storage.list_contact_messages().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_appointments_start_empty_and_keep_order() {
    let storage = InMemoryStorage::new();
    assert!(storage.list_appointments().await.unwrap().is_empty());

    let first = storage
        .create_appointment(InsertAppointment {
            name: "Alice Smith".to_string(),
            email: "a@b.com".to_string(),
            service: "Web Development".to_string(),
            date: "2024-12-01".to_string(),
            message: None,
        })
        .await
        .unwrap();
    let second = storage
        .create_appointment(InsertAppointment {
            name: "Bob Jones".to_string(),
            email: "bob@example.com".to_string(),
            service: "Cybersecurity".to_string(),
            date: "2024-12-02".to_string(),
            message: Some("Audit for our payment stack".to_string()),
        })
        .await
        .unwrap();

    let listed = storage.list_appointments().await.unwrap();
    assert_eq!(listed, vec![first.clone(), second.clone()]);
    assert!(first.created_at <= second.created_at);
    assert_eq!(second.message.as_deref(), Some("Audit for our payment stack"));
}

#[tokio::test]
async fn test_collections_are_independent() {
    let storage = InMemoryStorage::new();
    storage.create_contact_message(contact_input(1)).await.unwrap();
    assert!(storage.list_appointments().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clones_share_state() {
    let storage = InMemoryStorage::new();
    let other = storage.clone();
    storage.create_contact_message(contact_input(1)).await.unwrap();
    assert_eq!(other.list_contact_messages().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_creates_are_all_kept() {
    let storage = InMemoryStorage::new();
    let mut handles = Vec::new();
    for n in 0..50 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            storage.create_contact_message(contact_input(n)).await.unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    let listed = storage.list_contact_messages().await.unwrap();
    assert_eq!(listed.len(), 50);
    assert!(listed.windows(2).all(|w| w[0].created_at <= w[1].created_at));
}

#[tokio::test]
async fn test_users_by_id_and_username() {
    let storage = InMemoryStorage::new();
    let user = storage
        .create_user(InsertUser {
            username: "admin".to_string(),
            password: "s3cret-pass".to_string(),
        })
        .await
        .unwrap();

    assert_ne!(user.password, "s3cret-pass");
    assert!(bcrypt::verify("s3cret-pass", &user.password).unwrap());

    let by_id = storage.get_user(&user.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "admin");
    let by_name = storage.get_user_by_username("admin").await.unwrap().unwrap();
    assert_eq!(by_name.id, user.id);

    assert!(storage.get_user("missing").await.unwrap().is_none());
    assert!(storage.get_user_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let storage = InMemoryStorage::new();
    let input = InsertUser {
        username: "admin".to_string(),
        password: "one".to_string(),
    };
    storage.create_user(input.clone()).await.unwrap();
    let result = storage.create_user(input).await;
    assert!(matches!(result, Err(SiteError::UsernameTaken(ref name)) if name == "admin"));
}

#[tokio::test]
async fn test_concurrent_duplicate_usernames_keep_one() {
    let storage = InMemoryStorage::new();
    let mut handles = Vec::new();
    for _ in 0..4 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            storage
                .create_user(InsertUser {
                    username: "editor".to_string(),
                    password: "password123".to_string(),
                })
                .await
        }));
    }
    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(e) => assert!(matches!(e, SiteError::UsernameTaken(_))),
        }
    }
    assert_eq!(created, 1);
    assert!(storage.get_user_by_username("editor").await.unwrap().is_some());
}
