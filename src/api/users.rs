//! User account endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::{AdjustBalance, CreateUser, LoginUser, User},
};

/// Collection envelope for user listings
#[derive(Serialize, ToSchema)]
pub struct UsersListResponse {
    pub users: Vec<User>,
}

/// Registration response
#[derive(Serialize, ToSchema)]
pub struct RegisteredResponse {
    pub user_id: i64,
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = UsersListResponse)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
) -> AppResult<Json<UsersListResponse>> {
    let users = state.services.users.list().await?;
    Ok(Json(UsersListResponse { users }))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = state.services.users.get_by_id(id).await?;
    Ok(Json(user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User registered", body = RegisteredResponse)
    )
)]
pub async fn register_user(
    State(state): State<crate::AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<RegisteredResponse>)> {
    let user = state.services.users.register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisteredResponse { user_id: user.id }),
    ))
}

/// Authenticate a user by email and password
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "users",
    request_body = LoginUser,
    responses(
        (status = 200, description = "Authenticated user", body = User),
        (status = 404, description = "Invalid credentials")
    )
)]
pub async fn login_user(
    State(state): State<crate::AppState>,
    Json(input): Json<LoginUser>,
) -> AppResult<Json<User>> {
    let user = state
        .services
        .users
        .login(&input.email, &input.password)
        .await?;
    Ok(Json(user))
}

/// Apply a signed adjustment to a user's usm_pesos balance
#[utoipa::path(
    patch,
    path = "/users/{id}/usm_pesos",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = AdjustBalance,
    responses(
        (status = 204, description = "Balance adjusted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn adjust_balance(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(input): Json<AdjustBalance>,
) -> AppResult<StatusCode> {
    state.services.users.adjust_balance(id, input.amount).await?;
    Ok(StatusCode::NO_CONTENT)
}
