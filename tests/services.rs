//! Resource services against a mock server: paths, envelopes and bodies.

mod common;

use freshservice::models::{
    CreateRequesterModel, CreateTimeEntryModel, ListSolutionFoldersOptions, RecordModel, ServiceItemSearch,
    SoftwareUser, SoftwareUsers,
};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::client_for;

#[tokio::test]
async fn test_contract_approve_is_bodyless_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/contracts/12"))
        .and(query_param("operation", "approve"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).contracts().approve(12).await.unwrap();
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.data);
}

#[tokio::test]
async fn test_problem_time_entry_is_wrapped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/problems/8/time_entries"))
        .and(body_json(json!({
            "time_entry": {"agent_id": 3, "time_spent": "01:30", "note": "Root cause analysis"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "time_entry": {"id": 55, "agent_id": 3, "time_spent": "01:30"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entry = CreateTimeEntryModel::new(3, "01:30").with_note("Root cause analysis");
    let created = client_for(&server)
        .problems()
        .create_time_entry(8, &entry)
        .await
        .unwrap()
        .into_data();
    assert_eq!(created.id, 55);
    assert_eq!(created.time_spent.as_deref(), Some("01:30"));
}

#[tokio::test]
async fn test_ticket_children_are_scoped_to_ticket() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/21/tasks/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"task": {"id": 4, "title": "Reimage laptop"}})))
        .expect(1)
        .mount(&server)
        .await;

    let task = client_for(&server).tickets().get_task(21, 4).await.unwrap().into_data();
    assert_eq!(task.id, 4);
    assert_eq!(task.title.as_deref(), Some("Reimage laptop"));
}

#[tokio::test]
async fn test_software_delete_users_joins_ids() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/applications/6/users"))
        .and(query_param("user_ids", "1,2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).software().delete_users(6, [1, 2]).await.unwrap();
    assert!(response.data);
}

#[tokio::test]
async fn test_software_add_users_sends_bindings() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/applications/6/users"))
        .and(body_json(json!({"application_users": [{"user_id": 10}, {"user_id": 11}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "application_users": [{"id": 1, "user_id": 10}, {"id": 2, "user_id": 11}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = SoftwareUsers::from(vec![SoftwareUser::for_user(10), SoftwareUser::for_user(11)]);
    let created = client_for(&server).software().add_users(6, &users).await.unwrap().into_data();
    let ids: Vec<(u64, u64)> = created.application_users.iter().map(|u| (u.id, u.user_id)).collect();
    assert_eq!(ids, vec![(1, 10), (2, 11)]);
}

#[tokio::test]
async fn test_custom_object_record_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/objects/900/records"))
        .and(body_json(json!({"data": {"name": "Fleet", "seats": 4}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "custom_object": {"bo_display_id": 1, "name": "Fleet", "seats": 4}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = RecordModel::new().with_field("name", "Fleet").with_field("seats", 4);
    let stored = client_for(&server)
        .custom_objects()
        .create_record(900, &record)
        .await
        .unwrap()
        .into_data();
    assert_eq!(stored.get("bo_display_id"), Some(&json!(1)));
    assert_eq!(stored.get("name"), Some(&json!("Fleet")));
}

#[tokio::test]
async fn test_requester_delete_uses_forget() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/requesters/31/forget"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/requesters/31"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let fs = client_for(&server);
    assert!(fs.requesters().delete(31).await.unwrap().data);
    assert!(fs.requesters().deactivate(31).await.unwrap().data);
}

#[tokio::test]
async fn test_requester_create_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/requesters"))
        .and(body_json(json!({"first_name": "Ada", "primary_email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "requester": {"id": 31, "first_name": "Ada", "last_name": "Lovelace", "primary_email": "ada@example.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let model = CreateRequesterModel::new("Ada", "ada@example.com");
    let requester = client_for(&server).requesters().create(&model).await.unwrap().into_data();
    assert_eq!(requester.id, 31);
    assert_eq!(requester.display_name(), "Ada Lovelace");
}

#[tokio::test]
async fn test_agent_roles_live_under_roles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/roles/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"role": {"id": 2, "name": "Account Admin"}})))
        .expect(1)
        .mount(&server)
        .await;

    let role = client_for(&server).agents().get_role(2).await.unwrap().into_data();
    assert_eq!(role.id, 2);
    assert_eq!(role.name.as_deref(), Some("Account Admin"));
}

#[tokio::test]
async fn test_solution_folders_require_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/solutions/folders"))
        .and(query_param("category_id", "14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"folders": [{"id": 3, "name": "VPN"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let folders = client_for(&server)
        .solutions()
        .list_folders(&ListSolutionFoldersOptions::new(14))
        .await
        .unwrap()
        .into_data();
    assert_eq!(folders.folders.len(), 1);
    assert_eq!(folders.folders[0].name.as_deref(), Some("VPN"));
}

#[tokio::test]
async fn test_service_catalog_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/service_catalog/items/search"))
        .and(query_param("search_term", "laptop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "service_items": [{"id": 5, "display_id": 105, "name": "Request a laptop"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = client_for(&server)
        .service_catalog()
        .search_items(&ServiceItemSearch::new("laptop"))
        .await
        .unwrap()
        .into_data();
    assert_eq!(items.service_items[0].display_id, 105);
}

#[tokio::test]
async fn test_ticket_restore_and_response_headers() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/17/restore"))
        .respond_with(ResponseTemplate::new(204).insert_header("x-ratelimit-remaining", "99"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).tickets().restore(17).await.unwrap();
    assert!(response.data);
    assert_eq!(response.headers["x-ratelimit-remaining"], "99");
}
