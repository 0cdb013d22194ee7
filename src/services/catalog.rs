//! Book catalog service.
//!
//! Owns the business rules of the catalog: input validation on creation,
//! the merge semantics of partial updates, and the convention that a book's
//! status tracks its inventory quantity whenever stock changes.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookWithInventory, CreateBook, TransactionKind, UpdateBook},
    repository::books::BookStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn BookStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// List books, optionally restricted to those with available stock
    pub async fn list_books(
        &self,
        only_available: Option<bool>,
    ) -> AppResult<Vec<BookWithInventory>> {
        self.store.list(only_available).await
    }

    /// Get a book by id. A book excluded by the availability filter is
    /// reported as not found, the same as a missing id.
    pub async fn get_book(
        &self,
        id: i64,
        only_available: Option<bool>,
    ) -> AppResult<BookWithInventory> {
        self.store
            .get_by_id(id, only_available)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a book together with its inventory row.
    ///
    /// Validation is fail-fast: transaction kind first, then price, then name.
    /// Creation is a quantity-setting write, so status is derived from the
    /// initial stock; a supplied status value is ignored on that axis, as on
    /// the update path.
    pub async fn create_book(&self, input: CreateBook) -> AppResult<BookWithInventory> {
        let kind = TransactionKind::parse(&input.transaction_type).ok_or_else(|| {
            AppError::Validation("transaction_type must be 'sale' or 'rental'".to_string())
        })?;

        if input.price < 0 {
            return Err(AppError::Validation(
                "price must be a positive value".to_string(),
            ));
        }

        let name = input.book_name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("book_name is required".to_string()));
        }

        let book = Book {
            id: 0, // assigned by the store
            book_name: name.to_string(),
            book_category: input.book_category.trim().to_string(),
            transaction_type: kind.as_str().to_string(),
            price: input.price,
            status: input.stock > 0,
            popularity_score: input.popularity_score.unwrap_or(0),
        };

        let id = self.store.create_pair(&book, input.stock).await?;
        self.get_book(id, None).await
    }

    /// Patch-update a book: overwrite only the supplied fields, then persist
    /// the merged row together with the new stock, if any.
    ///
    /// When stock is supplied, status is re-derived from the new quantity and
    /// overrides any status value carried in the same request.
    pub async fn update_book(&self, id: i64, input: UpdateBook) -> AppResult<BookWithInventory> {
        let current = self.get_book(id, None).await?;
        let mut book = current.book;

        if let Some(name) = input.book_name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::Validation("book_name is required".to_string()));
            }
            book.book_name = name;
        }
        if let Some(category) = input.book_category {
            book.book_category = category.trim().to_string();
        }
        if let Some(kind) = input.transaction_type {
            let kind = TransactionKind::parse(&kind).ok_or_else(|| {
                AppError::Validation("transaction_type must be 'sale' or 'rental'".to_string())
            })?;
            book.transaction_type = kind.as_str().to_string();
        }
        if let Some(price) = input.price {
            if price < 0 {
                return Err(AppError::Validation(
                    "price must be a positive value".to_string(),
                ));
            }
            book.price = price;
        }
        if let Some(status) = input.status {
            book.status = status;
        }
        if let Some(score) = input.popularity_score {
            book.popularity_score = score;
        }

        self.store.update_pair(&book, input.stock).await?;
        self.get_book(id, None).await
    }
}
