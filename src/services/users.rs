//! User account service.
//!
//! Simple single-row CRUD over the users repository; no invariant beyond
//! what one UPDATE provides. The credential check is a plain equality
//! comparison, carried over from the original system.

use crate::{
    error::AppResult,
    models::user::{CreateUser, User},
    repository::users::UsersRepository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: UsersRepository,
}

impl UsersService {
    pub fn new(repository: UsersRepository) -> Self {
        Self { repository }
    }

    /// Register a new user
    pub async fn register(&self, input: CreateUser) -> AppResult<User> {
        self.repository.create(&input).await
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        self.repository.get_by_id(id).await
    }

    /// Get user by email
    pub async fn get_by_email(&self, email: &str) -> AppResult<User> {
        self.repository.get_by_email(email).await
    }

    /// Authenticate a user by email and password
    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        self.repository.login(email, password).await
    }

    /// Apply a signed adjustment to the user's usm_pesos balance
    pub async fn adjust_balance(&self, id: i64, amount: i64) -> AppResult<()> {
        self.repository.adjust_balance(id, amount).await
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.list().await
    }
}
