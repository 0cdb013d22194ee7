//! Business logic services

pub mod catalog;
pub mod users;

use std::sync::Arc;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(Arc::new(repository.books.clone())),
            users: users::UsersService::new(repository.users),
        }
    }
}
