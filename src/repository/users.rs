//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new user and return the created row
    pub async fn create(&self, user: &CreateUser) -> AppResult<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, password, usm_pesos)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, password, usm_pesos
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.usm_pesos)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password, usm_pesos FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Get user by email
    pub async fn get_by_email(&self, email: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password, usm_pesos FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }

    /// Plain-equality credential check, as in the original system
    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, password, usm_pesos
            FROM users
            WHERE email = $1 AND password = $2
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Invalid email or password".to_string()))
    }

    /// Relative balance adjustment (usm_pesos += amount)
    pub async fn adjust_balance(&self, id: i64, amount: i64) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET usm_pesos = usm_pesos + $1 WHERE id = $2")
            .bind(amount)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }
        Ok(())
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password, usm_pesos FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
