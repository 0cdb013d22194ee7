//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, users};
use crate::error::ErrorResponse;
use crate::models::book::{CreateBook, TransactionKind, UpdateBook};
use crate::models::user::{AdjustBalance, CreateUser, LoginUser, User};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "UZM API",
        version = "0.1.0",
        description = "Book shop inventory and accounting REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        // Users
        users::list_users,
        users::get_user,
        users::register_user,
        users::login_user,
        users::adjust_balance,
    ),
    components(
        schemas(
            ErrorResponse,
            TransactionKind,
            CreateBook,
            UpdateBook,
            books::BookResponse,
            books::InventoryResponse,
            books::BooksListResponse,
            User,
            CreateUser,
            LoginUser,
            AdjustBalance,
            users::UsersListResponse,
            users::RegisteredResponse,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "books", description = "Book catalog and inventory"),
        (name = "users", description = "User accounts")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
