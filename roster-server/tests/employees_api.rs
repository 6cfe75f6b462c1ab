// roster-server/tests/employees_api.rs
// 员工 API 集成测试：在随机端口上启动真实路由，经 roster-client 驱动

use roster_client::{ClientError, RosterClient};
use roster_server::core::{Config, ServerState, build_app};
use serde_json::json;
use shared::{Employee, EmployeeDraft, EmployeeUpdate};
use tempfile::TempDir;

/// Spawn the real router on an ephemeral port; the TempDir keeps the
/// backing file alive for the duration of the test.
async fn spawn_server() -> (RosterClient, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::with_overrides(temp_dir.path().to_str().unwrap(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    let app = build_app().with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = RosterClient::new(&format!("http://{addr}")).unwrap();
    (client, temp_dir)
}

fn ann_draft() -> EmployeeDraft {
    EmployeeDraft {
        full_name: Some("Ann Lee".to_string()),
        role: Some("Engineer".to_string()),
        department: Some("R&D".to_string()),
        email: Some("ann@x.com".to_string()),
        salary: Some(json!("120000")),
        hire_date: Some("2024-01-01".to_string()),
    }
}

#[tokio::test]
async fn create_coerces_string_salary_and_assigns_an_id() {
    let (client, _guard) = spawn_server().await;

    // raw request to assert the transport status code
    let response = reqwest::Client::new()
        .post(format!("{}/employees", client.base_url()))
        .json(&ann_draft())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let created: Employee = response.json().await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.full_name, "Ann Lee");
    assert_eq!(created.salary, 120_000.0);
    assert_eq!(created.hire_date, "2024-01-01");
}

#[tokio::test]
async fn created_record_round_trips_through_list() {
    let (client, _guard) = spawn_server().await;

    let created = client.create(&ann_draft()).await.unwrap();
    let listed = client.list().await.unwrap();

    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn empty_payload_is_accepted_and_normalized() {
    let (client, _guard) = spawn_server().await;

    let created = client.create(&EmployeeDraft::default()).await.unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.full_name, "");
    assert_eq!(created.salary, 0.0);
    assert_eq!(created.hire_date.len(), 10);
}

#[tokio::test]
async fn update_applies_only_the_supplied_fields() {
    let (client, _guard) = spawn_server().await;
    let created = client.create(&ann_draft()).await.unwrap();

    let patch = EmployeeUpdate {
        salary: Some(json!(5_000)),
        ..Default::default()
    };
    let updated = client.update(created.id, &patch).await.unwrap();

    assert_eq!(updated.salary, 5_000.0);
    assert_eq!(updated.full_name, created.full_name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.id, created.id);
}

#[tokio::test]
async fn update_unknown_id_returns_not_found() {
    let (client, _guard) = spawn_server().await;

    let err = client
        .update(999, &EmployeeUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));

    let response = reqwest::Client::new()
        .put(format!("{}/employees/999", client.base_url()))
        .json(&EmployeeUpdate::default())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn delete_returns_no_content_then_not_found() {
    let (client, _guard) = spawn_server().await;
    let created = client.create(&ann_draft()).await.unwrap();

    let response = reqwest::Client::new()
        .delete(format!("{}/employees/{}", client.base_url(), created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);
    assert!(client.list().await.unwrap().is_empty());

    // 再次删除：目标已不存在
    let err = client.delete(created.id).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn ids_stay_unique_after_deletes() {
    let (client, _guard) = spawn_server().await;

    client.create(&ann_draft()).await.unwrap();
    let second = client.create(&ann_draft()).await.unwrap();
    client.delete(second.id).await.unwrap();

    let third = client.create(&ann_draft()).await.unwrap();
    assert_eq!(third.id, 3);
}

#[tokio::test]
async fn concurrent_creates_allocate_distinct_ids() {
    let (client, _guard) = spawn_server().await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let client = client.clone();
        handles.push(tokio::spawn(
            async move { client.create(&ann_draft()).await },
        ));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn unmatched_routes_return_the_generic_not_found_body() {
    let (client, _guard) = spawn_server().await;

    let response = reqwest::get(format!("{}/nope", client.base_url()))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: shared::ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "not_found");
    assert_eq!(body.message, "Route not found");
}

#[tokio::test]
async fn health_reports_ok_and_the_record_count() {
    let (client, _guard) = spawn_server().await;
    client.create(&ann_draft()).await.unwrap();

    let response = reqwest::get(format!("{}/health", client.base_url()))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["employees"], 1);
}
