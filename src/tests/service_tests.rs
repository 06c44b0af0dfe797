use crate::core::errors::SiteError;
use crate::tests::create_test_service;
use serde_json::json;

#[tokio::test]
async fn test_submit_contact_message_stores_valid_input() {
    let service = create_test_service();
    let message = service
        .submit_contact_message(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "We need help migrating to the cloud."
        }))
        .await
        .unwrap();
    assert_eq!(message.name, "Jane Doe");

    let listed = service.list_contact_messages().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, message.id);
}

#[tokio::test]
async fn test_rejected_submission_is_not_stored() {
    let service = create_test_service();
    let result = service
        .submit_contact_message(&json!({ "name": "Al", "email": "bad", "message": "short" }))
        .await;
    match result {
        Err(SiteError::Validation(errors)) => assert_eq!(errors.fields(), vec!["email", "message"]),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(service.list_contact_messages().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_appointment_round_trip() {
    let service = create_test_service();
    let appointment = service
        .submit_appointment(&json!({
            "name": "Alice Smith",
            "email": "a@b.com",
            "service": "Web Development",
            "date": "2024-12-01"
        }))
        .await
        .unwrap();
    assert_eq!(appointment.message, None);

    let invalid = service.submit_appointment(&json!({ "name": "Alice Smith" })).await;
    assert!(matches!(invalid, Err(SiteError::Validation(_))));

    let listed = service.list_appointments().await.unwrap();
    assert_eq!(listed, vec![appointment]);
}

#[tokio::test]
async fn test_add_user_and_lookup() {
    let service = create_test_service();
    let user = service.add_user("editor".to_string(), "password123".to_string()).await.unwrap();
    let found = service.get_user_by_username("editor").await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
    assert!(service.get_user(&user.id).await.unwrap().is_some());

    let duplicate = service.add_user("editor".to_string(), "other".to_string()).await;
    assert!(matches!(duplicate, Err(SiteError::UsernameTaken(_))));
}
