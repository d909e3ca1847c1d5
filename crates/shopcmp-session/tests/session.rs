//! Integration tests for `Session` against a wiremock auth backend.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopcmp_client::ShopClient;
use shopcmp_core::SignupRequest;
use shopcmp_session::{Session, SessionError, SessionState, TokenStore};

fn client(server: &MockServer) -> Arc<ShopClient> {
    Arc::new(
        ShopClient::with_base_url(&server.uri(), None, "shopcmp-test/0.1", 3, 0)
            .expect("client construction should not fail"),
    )
}

fn profile() -> serde_json::Value {
    json!({
        "id": 7,
        "email": "anh@example.com",
        "username": "anh",
        "full_name": "Nguyen Anh"
    })
}

async fn mount_me(server: &MockServer, token: &str, status: u16) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(profile())
    } else {
        ResponseTemplate::new(status)
            .set_body_json(json!({ "detail": "Could not validate credentials" }))
    };
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn restore_without_token_is_anonymous() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let session = Session::restore(client(&server), TokenStore::new(dir.path().join("token")))
        .await
        .unwrap();

    assert_eq!(session.state(), &SessionState::Anonymous);
    assert!(matches!(
        session.require_compare(),
        Err(SessionError::Forbidden { .. })
    ));
}

#[tokio::test]
async fn restore_with_valid_token_is_authenticated() {
    let server = MockServer::start().await;
    mount_me(&server, "good", 200).await;
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::new(dir.path().join("token"));
    store.save("good").unwrap();

    let session = Session::restore(client(&server), store).await.unwrap();

    assert_eq!(session.token(), Some("good"));
    assert_eq!(session.require_user().unwrap().username, "anh");
    assert!(session.require_catalog().is_ok());
}

#[tokio::test]
async fn restore_with_rejected_token_clears_it() {
    let server = MockServer::start().await;
    mount_me(&server, "stale", 401).await;
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::new(dir.path().join("token"));
    store.save("stale").unwrap();

    let session = Session::restore(client(&server), store.clone()).await.unwrap();

    assert_eq!(session.state(), &SessionState::Anonymous);
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn login_persists_token_and_loads_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;
    mount_me(&server, "fresh", 200).await;
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::new(dir.path().join("token"));

    let mut session = Session::new(client(&server), store.clone());
    let user = session.login("anh", "pw").await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(store.load().unwrap().as_deref(), Some("fresh"));
}

#[tokio::test]
async fn login_rejection_maps_to_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "detail": "Incorrect username or password" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::new(dir.path().join("token"));

    let mut session = Session::new(client(&server), store.clone());
    let err = session.login("anh", "wrong").await.unwrap_err();

    assert!(
        matches!(err, SessionError::InvalidCredentials(ref msg) if msg == "Incorrect username or password")
    );
    assert_eq!(session.state(), &SessionState::Anonymous);
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn logout_clears_token_and_state() {
    let server = MockServer::start().await;
    mount_me(&server, "good", 200).await;
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::new(dir.path().join("token"));
    store.save("good").unwrap();

    let mut session = Session::restore(client(&server), store.clone()).await.unwrap();
    session.logout().unwrap();

    assert_eq!(session.state(), &SessionState::Anonymous);
    assert!(session.token().is_none());
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn guest_mode_grants_capabilities_without_account() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(client(&server), TokenStore::new(dir.path().join("token")));

    session.enter_guest();
    assert_eq!(session.state(), &SessionState::Guest);
    assert!(session.require_compare().is_ok());
    assert!(matches!(
        session.require_user(),
        Err(SessionError::NotAuthenticated)
    ));

    session.exit_guest();
    assert_eq!(session.state(), &SessionState::Anonymous);
}

#[tokio::test]
async fn signup_does_not_sign_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile()))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let session = Session::new(client(&server), TokenStore::new(dir.path().join("token")));

    let user = session
        .signup(&SignupRequest {
            email: "anh@example.com".into(),
            username: "anh".into(),
            password: "pw".into(),
            full_name: Some("Nguyen Anh".into()),
        })
        .await
        .unwrap();

    assert_eq!(user.username, "anh");
    assert_eq!(session.state(), &SessionState::Anonymous);
}
