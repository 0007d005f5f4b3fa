use anyhow::Result;
use assert_json_diff::assert_json_eq;
use claims::{assert_none, assert_ok, assert_some};
use reqwest::StatusCode;
use serde_json::json;

use concierge::models::Role;
use concierge::storage::{MemoryStorage, Storage, AUTH_KEY};

mod helpers;
use helpers::*;

#[tokio::test]
async fn google_sign_in_commits_tokens_and_user_to_the_session() -> Result<()> {
    let test = spawn_app();
    test.transport.push_response(
        StatusCode::OK,
        json!({
            "accessToken": "tok1",
            "refreshToken": "ref1",
            "user": { "_id": "u1", "email": "guest@example.com", "role": "user" }
        }),
    );

    let user = test.app.sign_in_with_google("google-id-token").await?;
    assert_eq!(user.id, "u1");

    // the sign-in endpoint received the raw ID token
    let calls = test.transport.requests_to("/auth/google-signin");
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].body.as_ref().and_then(|b| b["idToken"].as_str()),
        Some("google-id-token")
    );

    // session and storage agree
    assert_eq!(test.app.session.access_token().as_deref(), Some("tok1"));
    let persisted: serde_json::Value =
        serde_json::from_str(&test.storage.get(AUTH_KEY).expect("auth entry should exist"))?;
    assert_json_eq!(
        persisted,
        json!({
            "token": "tok1",
            "refreshToken": "ref1",
            "user": { "_id": "u1", "email": "guest@example.com", "role": "user" }
        })
    );
    Ok(())
}

#[tokio::test]
async fn subsequent_requests_use_the_token_from_sign_in() -> Result<()> {
    let test = spawn_app();
    test.transport.push_response(
        StatusCode::OK,
        json!({
            "accessToken": "tok1",
            "refreshToken": "ref1",
            "user": { "_id": "u1", "email": "guest@example.com" }
        }),
    );
    test.transport.push_response(StatusCode::OK, json!({ "bookings": [] }));

    test.app.sign_in_with_google("google-id-token").await?;
    concierge::api::bookings::list_mine(&test.app.api).await?;

    let calls = test.transport.requests_to("/bookings");
    assert_eq!(calls[0].bearer.as_deref(), Some("tok1"));
    Ok(())
}

#[test]
fn a_persisted_session_restores_across_app_builds() {
    let test = spawn_app();
    let admin = serde_json::from_value(json!({
        "_id": "a1",
        "email": "manager@example.com",
        "role": "admin"
    }))
    .expect("admin fixture should parse");
    assert_ok!(test.app.session.login("tok1", "ref1", admin));

    // simulate a fresh tab over the same storage
    let restored = spawn_app_over(test.storage.clone());
    let user = restored.app.session.user().expect("user should restore");
    assert_eq!(user.role, Some(Role::Admin));
    assert_eq!(restored.app.session.access_token().as_deref(), Some("tok1"));
    assert_eq!(restored.app.session.refresh_token().as_deref(), Some("ref1"));
}

#[test]
fn malformed_persisted_auth_restores_logged_out() {
    let storage = std::sync::Arc::new(MemoryStorage::new());
    storage.seed(AUTH_KEY, "{\"token\": \"tok1\", \"user\": ");

    let test = spawn_app_over(storage);
    assert_none!(test.app.session.user());
    assert_none!(test.app.session.access_token());
}

#[test]
fn logout_erases_the_persisted_session() {
    let test = spawn_app();
    let user = serde_json::from_value(json!({ "_id": "u1", "email": "guest@example.com" }))
        .expect("user fixture should parse");
    assert_ok!(test.app.session.login("tok1", "ref1", user));
    assert_some!(test.storage.get(AUTH_KEY));

    assert_ok!(test.app.session.logout());

    assert_none!(test.app.session.user());
    assert_eq!(test.storage.get(AUTH_KEY), None);

    // a later app build over the same storage starts logged out
    let next = spawn_app_over(test.storage.clone());
    assert_none!(next.app.session.user());
}
