//! User account model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User model from database.
///
/// The password is stored and compared in clear text, as in the original
/// system; it is never serialized back out.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub usm_pesos: i64,
}

/// Registration request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub usm_pesos: i64,
}

/// Login request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

/// Relative balance adjustment request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AdjustBalance {
    /// Signed amount added to the current balance.
    pub amount: i64,
}
