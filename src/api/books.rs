//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{BookQuery, BookWithInventory, CreateBook, UpdateBook},
};

/// Wire representation of a book with its nested inventory
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub id: i64,
    pub book_name: String,
    pub book_category: String,
    pub transaction_type: String,
    pub price: i64,
    pub status: bool,
    pub popularity_score: i64,
    pub inventory: InventoryResponse,
}

#[derive(Serialize, ToSchema)]
pub struct InventoryResponse {
    pub available_quantity: i64,
}

impl From<BookWithInventory> for BookResponse {
    fn from(bwi: BookWithInventory) -> Self {
        let book = bwi.book;
        Self {
            id: book.id,
            book_name: book.book_name,
            book_category: book.book_category,
            transaction_type: book.transaction_type,
            price: book.price,
            status: book.status,
            popularity_score: book.popularity_score,
            inventory: InventoryResponse {
                available_quantity: bwi.available_quantity,
            },
        }
    }
}

/// Collection envelope for book listings
#[derive(Serialize, ToSchema)]
pub struct BooksListResponse {
    pub books: Vec<BookResponse>,
}

/// List books, optionally filtered by availability
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("status" = Option<bool>, Query, description = "true restricts to books with available stock; absent or false lists all")
    ),
    responses(
        (status = 200, description = "List of books", body = BooksListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<BooksListResponse>> {
    let books = state.services.catalog.list_books(query.status).await?;

    Ok(Json(BooksListResponse {
        books: books.into_iter().map(BookResponse::from).collect(),
    }))
}

/// Get a book by ID (no availability filter)
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book with inventory", body = BookResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.get_book(id, None).await?;
    Ok(Json(book.into()))
}

/// Create a book together with its initial inventory
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(input): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let created = state.services.catalog.create_book(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Patch-update a book; only the supplied fields are changed
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateBook>,
) -> AppResult<Json<BookResponse>> {
    let updated = state.services.catalog.update_book(id, input).await?;
    Ok(Json(updated.into()))
}
