//! Token handling tests.
//!
//! # Invariants
//! - An absent or expired token fails with `Unauthorized` and no request
//!   reaches the server, for every operation
//! - HTTP 401 and 403 from the API surface as `Unauthorized`

mod common;

use chrono::{Duration, Utc};
use common::*;
use wiremock::matchers::{method, path};

async fn server_expecting_no_requests() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    mock_server
}

fn assert_unauthorized<T: std::fmt::Debug>(result: Result<T, ClientError>) {
    match result {
        Err(ClientError::Unauthorized { status: None, .. }) => {}
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

async fn assert_every_operation_unauthorized(
    client: &DirectoryClient,
    token: Option<&AccessToken>,
) {
    let role = company_admin_role();

    assert_unauthorized(client.list_objects::<Role>(token, None).await);
    assert_unauthorized(client.list_all_objects::<User>(token, None).await);
    assert_unauthorized(
        client
            .next_page::<Role>(
                token,
                &directory_client::PageToken::new("directoryRoles?$skiptoken=x"),
            )
            .await,
    );
    assert_unauthorized(client.get_object::<Role>(token, ROLE_COMPANY_ADMIN).await);
    assert_unauthorized(
        client
            .get_linked_objects(token, &role, LinkRelation::Members)
            .await,
    );
    assert_unauthorized(
        client
            .get_linked::<User>(token, &role, LinkRelation::Members)
            .await,
    );
}

#[tokio::test]
async fn test_absent_token_never_reaches_server() {
    let mock_server = server_expecting_no_requests().await;
    let client = client_for(&mock_server);

    assert_every_operation_unauthorized(&client, None).await;
    assert!(mock_server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_blank_token_is_absent() {
    let mock_server = server_expecting_no_requests().await;
    let client = client_for(&mock_server);

    let token = AccessToken::new("   ");
    assert!(token.is_none());
    assert_every_operation_unauthorized(&client, token.as_ref()).await;
}

#[tokio::test]
async fn test_expired_token_never_reaches_server() {
    let mock_server = server_expecting_no_requests().await;
    let client = client_for(&mock_server);

    let expired = token().with_expiry(Utc::now() - Duration::minutes(1));
    assert_every_operation_unauthorized(&client, Some(&expired)).await;
}

#[tokio::test]
async fn test_unsupported_relation_with_absent_token_is_unauthorized() {
    let mock_server = server_expecting_no_requests().await;
    let client = client_for(&mock_server);

    let err = client
        .get_linked_objects(None, &company_admin_role(), LinkRelation::Owners)
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_rejected_token_is_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(tenant_path("directoryRoles")))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(load_fixture("errors/unauthorized.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .list_objects::<Role>(Some(&token()), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized { status: Some(401), .. }));
    assert!(err.requires_reauthentication());
    assert!(err.to_string().contains("Your access token has expired"));
}

#[tokio::test]
async fn test_forbidden_is_unauthorized_without_reauthentication() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(tenant_path(&format!("directoryRoles/{ROLE_COMPANY_ADMIN}/members"))))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(load_fixture("errors/forbidden.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_linked_objects(Some(&token()), &company_admin_role(), LinkRelation::Members)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized { status: Some(403), .. }));
    assert!(!err.requires_reauthentication());
}

#[tokio::test]
async fn test_unexpired_token_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(tenant_path("users")))
        .and(wiremock::matchers::header("authorization", "Bearer test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("users/list_users.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let fresh = token().with_expiry(Utc::now() + Duration::hours(1));
    let page = client.list_objects::<User>(Some(&fresh), None).await.unwrap();
    assert_eq!(page.items.len(), 2);
}
