//! Collection and by-id tests for roles and users.
//!
//! # Invariants
//! - Every request carries the bearer token, `Accept`, `client-request-id`
//!   and `api-version`
//! - Following every continuation yields each object exactly once
//! - A by-id lookup returns the requested object or `NotFound`

mod common;

use std::collections::HashSet;

use common::*;
use wiremock::matchers::{header, header_exists, method, path, query_param};

#[tokio::test]
async fn test_list_roles_first_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(tenant_path("directoryRoles")))
        .and(query_param("api-version", "1.6"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .and(header_exists("client-request-id"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("roles/list_roles_page1.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .list_objects::<Role>(Some(&token()), None)
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].object_id, ROLE_COMPANY_ADMIN);
    assert_eq!(
        page.items[1].display_name.as_deref(),
        Some("Helpdesk Administrator")
    );
    assert!(page.has_more());
}

#[tokio::test]
async fn test_list_passes_filter_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(tenant_path("users")))
        .and(query_param("$filter", "startswith(displayName,'Ada')"))
        .and(query_param("$top", "5"))
        .and(query_param("api-version", "1.6"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("users/list_users.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let filter = ListFilter::new()
        .filter("startswith(displayName,'Ada')")
        .top(5);
    let page = client
        .list_objects::<User>(Some(&token()), Some(&filter))
        .await
        .unwrap();

    // The API decides what matches; the client returns whatever came back.
    assert_eq!(page.items.len(), 2);
    assert!(!page.has_more());
}

async fn mount_role_pages(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(tenant_path("directoryRoles")))
        .and(query_param("$skiptoken", "X'4453707402000100000017'"))
        .and(query_param("api-version", "1.6"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("roles/list_roles_page2.json")),
        )
        .with_priority(1)
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(tenant_path("directoryRoles")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("roles/list_roles_page1.json")),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_next_page_enumerates_every_role_once() {
    let mock_server = MockServer::start().await;
    mount_role_pages(&mock_server).await;

    let client = client_for(&mock_server);
    let token = token();

    let mut page = client.list_objects::<Role>(Some(&token), None).await.unwrap();
    let mut ids: Vec<String> = page.items.iter().map(|r| r.object_id.clone()).collect();
    while let Some(next) = page.next_page.take() {
        page = client.next_page::<Role>(Some(&token), &next).await.unwrap();
        ids.extend(page.items.iter().map(|r| r.object_id.clone()));
    }

    assert_eq!(
        ids,
        vec![ROLE_COMPANY_ADMIN, ROLE_HELPDESK_ADMIN, ROLE_DIRECTORY_READERS]
    );
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn test_list_all_objects_follows_continuations() {
    let mock_server = MockServer::start().await;
    mount_role_pages(&mock_server).await;

    let client = client_for(&mock_server);
    let roles = client
        .list_all_objects::<Role>(Some(&token()), None)
        .await
        .unwrap();

    let ids: Vec<_> = roles.iter().map(|r| r.object_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![ROLE_COMPANY_ADMIN, ROLE_HELPDESK_ADMIN, ROLE_DIRECTORY_READERS]
    );
}

#[tokio::test]
async fn test_get_role_returns_requested_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(tenant_path(&format!("directoryRoles/{ROLE_COMPANY_ADMIN}"))))
        .and(query_param("api-version", "1.6"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("roles/get_role.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let role: Role = client
        .get_object(Some(&token()), ROLE_COMPANY_ADMIN)
        .await
        .unwrap();

    assert_eq!(role.object_id, ROLE_COMPANY_ADMIN);
    assert_eq!(role.display_name.as_deref(), Some("Company Administrator"));
    assert_eq!(role.is_system, Some(true));
}

#[tokio::test]
async fn test_get_user_by_principal_name_is_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(tenant_path("users/grace_fabrikam.test%23EXT%23@contoso.onmicrosoft.com")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("users/get_user.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let user: User = client
        .get_object(
            Some(&token()),
            "grace_fabrikam.test#EXT#@contoso.onmicrosoft.com",
        )
        .await
        .unwrap();

    assert_eq!(user.object_id, USER_ADA);
}

#[tokio::test]
async fn test_get_unknown_role_is_not_found() {
    let mock_server = MockServer::start().await;
    let missing = "00000000-0000-0000-0000-000000000000";

    Mock::given(method("GET"))
        .and(path(tenant_path(&format!("directoryRoles/{missing}"))))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(load_fixture("errors/not_found.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_object::<Role>(Some(&token()), missing)
        .await
        .unwrap_err();

    match err {
        ClientError::NotFound(id) => assert_eq!(id, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_object_of_other_kind_is_deserialization_error() {
    let mock_server = MockServer::start().await;

    // A user record served where a role was requested.
    Mock::given(method("GET"))
        .and(path(tenant_path(&format!("directoryRoles/{USER_ADA}"))))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("users/get_user.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_object::<Role>(Some(&token()), USER_ADA)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ClientError::Deserialization(ref msg) if msg.contains("expected a Role record")),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_record_missing_object_id_fails_the_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(tenant_path("users")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [
                {"objectType": "User", "objectId": USER_ADA},
                {"objectType": "User", "displayName": "No Identifier"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .list_objects::<User>(Some(&token()), None)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ClientError::Deserialization(ref msg) if msg.starts_with("record 1:")),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_non_json_body_is_deserialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(tenant_path("directoryRoles")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .list_objects::<Role>(Some(&token()), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Deserialization(_)));
}

#[tokio::test]
async fn test_blank_object_id_is_rejected_locally() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_object::<User>(Some(&token()), "  ")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidUrl(_)));
}
