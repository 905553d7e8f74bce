//! HTTP-level integration tests for user management and registration.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, delete_auth, get_auth, login_for_token, post_json,
    post_json_auth, put_json_auth, ADMIN_ROLE_ID, GENERAL_ROLE_ID,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Public registration defaults the role to `general` and the account to
/// active, and normalizes the email to lowercase.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "NewUser@Test.com",
        "first_name": "New",
        "last_name": "User",
        "password": "strong_password_123!"
    });
    let response = post_json(app, "/api/users/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["email"], "newuser@test.com");
    assert_eq!(json["role"], "general");
    assert_eq!(json["role_id"], GENERAL_ROLE_ID);
    assert_eq!(json["status"], "active");
}

/// Registering an email that already exists (any casing) returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let (_user, _pw) = create_test_user(&pool, "taken@test.com", GENERAL_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "TAKEN@test.com",
        "first_name": "Dup",
        "last_name": "User",
        "password": "strong_password_123!"
    });
    let response = post_json(app, "/api/users/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Registration rejects an email without '@'.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "not-an-email",
        "first_name": "Bad",
        "last_name": "Email",
        "password": "strong_password_123!"
    });
    let response = post_json(app, "/api/users/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Registration naming a nonexistent role returns 400 (bad reference).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_unknown_role(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "badrole@test.com",
        "first_name": "Bad",
        "last_name": "Role",
        "password": "strong_password_123!",
        "user_role_id": 9999
    });
    let response = post_json(app, "/api/users/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Admin management
// ---------------------------------------------------------------------------

/// Admin can create a user with an explicit role via POST /users.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_create_user(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "admin@test.com", ADMIN_ROLE_ID).await;
    let token = login_for_token(&pool, "admin@test.com", &admin_pw).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "email": "created@test.com",
        "first_name": "Created",
        "last_name": "ByAdmin",
        "password": "strong_password_123!",
        "user_role_id": ADMIN_ROLE_ID
    });
    let response = post_json_auth(app, "/api/users", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["role"], "admin");
}

/// Listing users is admin-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_requires_admin(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "admin@test.com", ADMIN_ROLE_ID).await;
    let (_user, user_pw) = create_test_user(&pool, "plain@test.com", GENERAL_ROLE_ID).await;

    let admin_token = login_for_token(&pool, "admin@test.com", &admin_pw).await;
    let user_token = login_for_token(&pool, "plain@test.com", &user_pw).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/users", &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().expect("array").len(), 2);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/users", &user_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Any authenticated user may list active users and fetch a user by id.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_general_user_reads(pool: PgPool) {
    let (other, _) = create_test_user(&pool, "other@test.com", GENERAL_ROLE_ID).await;
    let (_user, pw) = create_test_user(&pool, "reader@test.com", GENERAL_ROLE_ID).await;
    let token = login_for_token(&pool, "reader@test.com", &pw).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/users/active", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/users/{}", other.id), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "other@test.com");
}

// ---------------------------------------------------------------------------
// Update rules
// ---------------------------------------------------------------------------

/// A general user may update their own profile as long as the role reference
/// is untouched (sending the current role id is fine).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_self_update_without_role_change(pool: PgPool) {
    let (user, pw) = create_test_user(&pool, "selfupd@test.com", GENERAL_ROLE_ID).await;
    let token = login_for_token(&pool, "selfupd@test.com", &pw).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "first_name": "Changed",
        "user_role_id": GENERAL_ROLE_ID
    });
    let response = put_json_auth(app, &format!("/api/users/{}", user.id), body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Changed");
    assert_eq!(json["role_id"], GENERAL_ROLE_ID);
}

/// A general user may not change their own role.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_self_update_role_change_forbidden(pool: PgPool) {
    let (user, pw) = create_test_user(&pool, "escalate@test.com", GENERAL_ROLE_ID).await;
    let token = login_for_token(&pool, "escalate@test.com", &pw).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "user_role_id": ADMIN_ROLE_ID });
    let response = put_json_auth(app, &format!("/api/users/{}", user.id), body, &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Re-sending the current account status is not a status change; actually
/// changing it is forbidden for a general user.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_self_update_status_rules(pool: PgPool) {
    let (user, pw) = create_test_user(&pool, "statusrt@test.com", GENERAL_ROLE_ID).await;
    let token = login_for_token(&pool, "statusrt@test.com", &pw).await;

    // Current status echoed back (any casing) passes through.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "first_name": "Kept", "status": "Active" });
    let response = put_json_auth(app, &format!("/api/users/{}", user.id), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Kept");
    assert_eq!(json["status"], "active");

    // An actual status change is rejected.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "status": "disabled" });
    let response = put_json_auth(app, &format!("/api/users/{}", user.id), body, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A general user may not update another user's record.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_other_user_forbidden(pool: PgPool) {
    let (other, _) = create_test_user(&pool, "victim@test.com", GENERAL_ROLE_ID).await;
    let (_user, pw) = create_test_user(&pool, "meddler@test.com", GENERAL_ROLE_ID).await;
    let token = login_for_token(&pool, "meddler@test.com", &pw).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "first_name": "Hacked" });
    let response = put_json_auth(app, &format!("/api/users/{}", other.id), body, &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Admin may change any user's role and status.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_update_role_and_status(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "admin@test.com", ADMIN_ROLE_ID).await;
    let (target, _) = create_test_user(&pool, "target@test.com", GENERAL_ROLE_ID).await;
    let token = login_for_token(&pool, "admin@test.com", &admin_pw).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "user_role_id": ADMIN_ROLE_ID, "status": "Disabled" });
    let response = put_json_auth(app, &format!("/api/users/{}", target.id), body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["role_id"], ADMIN_ROLE_ID);
    assert_eq!(json["status"], "disabled");
}

/// Updating a user's email to one held by another user returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_email_collision(pool: PgPool) {
    let (_other, _) = create_test_user(&pool, "held@test.com", GENERAL_ROLE_ID).await;
    let (user, pw) = create_test_user(&pool, "mover@test.com", GENERAL_ROLE_ID).await;
    let token = login_for_token(&pool, "mover@test.com", &pw).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "Held@test.com" });
    let response = put_json_auth(app, &format!("/api/users/{}", user.id), body, &token).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Per-user password endpoint
// ---------------------------------------------------------------------------

/// The owner may change their password through /users/{id}/password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_password_endpoint_owner(pool: PgPool) {
    let (user, pw) = create_test_user(&pool, "owner@test.com", GENERAL_ROLE_ID).await;
    let token = login_for_token(&pool, "owner@test.com", &pw).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "password": "rotated_password_789!" });
    let response =
        put_json_auth(app, &format!("/api/users/{}/password", user.id), body, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "owner@test.com", "password": "rotated_password_789!" });
    let response = post_json(app, "/api/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Even an admin may not change another user's password here.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_password_endpoint_rejects_non_owner(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "admin@test.com", ADMIN_ROLE_ID).await;
    let (target, _) = create_test_user(&pool, "keeper@test.com", GENERAL_ROLE_ID).await;
    let token = login_for_token(&pool, "admin@test.com", &admin_pw).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "password": "hijacked_password_1!" });
    let response =
        put_json_auth(app, &format!("/api/users/{}/password", target.id), body, &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Admin may delete a user; the record is gone afterwards.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_delete_user(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "admin@test.com", ADMIN_ROLE_ID).await;
    let (target, _) = create_test_user(&pool, "doomed@test.com", GENERAL_ROLE_ID).await;
    let token = login_for_token(&pool, "admin@test.com", &admin_pw).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/users/{}", target.id), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/users/{}", target.id), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting users is admin-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_user_requires_admin(pool: PgPool) {
    let (other, _) = create_test_user(&pool, "other@test.com", GENERAL_ROLE_ID).await;
    let (_user, pw) = create_test_user(&pool, "plain@test.com", GENERAL_ROLE_ID).await;
    let token = login_for_token(&pool, "plain@test.com", &pw).await;

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/users/{}", other.id), &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
