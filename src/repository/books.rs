//! Books repository: the inventory store contract and its PostgreSQL
//! implementation.
//!
//! Every read joins `books` with `inventory` on the book id and treats a
//! missing inventory row as quantity 0. The paired writes (`create_pair`,
//! `update_pair`) run inside one transaction: either both the book row and
//! the inventory row land, or neither does.

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::AppResult,
    models::book::{Book, BookWithInventory},
};

/// Transactional store contract consumed by the catalog service.
///
/// The PostgreSQL repository below is the production implementation; unit
/// tests substitute an in-memory one.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// List all books with their quantities, ordered by ascending id.
    /// `only_available == Some(true)` restricts to quantity > 0 at query time.
    async fn list(&self, only_available: Option<bool>) -> AppResult<Vec<BookWithInventory>>;

    /// Point lookup. A book excluded by the availability filter reads as
    /// absent, the same as a missing id.
    async fn get_by_id(
        &self,
        id: i64,
        only_available: Option<bool>,
    ) -> AppResult<Option<BookWithInventory>>;

    /// Insert a book row and its inventory row atomically; returns the new id.
    async fn create_pair(&self, book: &Book, initial_stock: i64) -> AppResult<i64>;

    /// Persist a merged book row and, when `stock` is supplied, the new
    /// inventory quantity, atomically. A supplied stock re-derives the book's
    /// status from the new quantity, overriding the status carried in `book`.
    async fn update_pair(&self, book: &Book, stock: Option<i64>) -> AppResult<()>;
}

fn filter_available(only_available: Option<bool>) -> bool {
    only_available.unwrap_or(false)
}

fn row_to_book_with_inventory(row: &sqlx::postgres::PgRow) -> BookWithInventory {
    BookWithInventory {
        book: Book {
            id: row.get("id"),
            book_name: row.get("book_name"),
            book_category: row.get("book_category"),
            transaction_type: row.get("transaction_type"),
            price: row.get("price"),
            status: row.get("status"),
            popularity_score: row.get("popularity_score"),
        },
        available_quantity: row.get("available_quantity"),
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn list(&self, only_available: Option<bool>) -> AppResult<Vec<BookWithInventory>> {
        let mut query = String::from(
            r#"
            SELECT b.id, b.book_name, b.book_category, b.transaction_type,
                   b.price, b.status, b.popularity_score,
                   COALESCE(i.available_quantity, 0) AS available_quantity
            FROM books b
            LEFT JOIN inventory i ON i.book_id = b.id
            "#,
        );
        if filter_available(only_available) {
            query.push_str(" WHERE COALESCE(i.available_quantity, 0) > 0");
        }
        query.push_str(" ORDER BY b.id ASC");

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(row_to_book_with_inventory).collect())
    }

    async fn get_by_id(
        &self,
        id: i64,
        only_available: Option<bool>,
    ) -> AppResult<Option<BookWithInventory>> {
        let mut query = String::from(
            r#"
            SELECT b.id, b.book_name, b.book_category, b.transaction_type,
                   b.price, b.status, b.popularity_score,
                   COALESCE(i.available_quantity, 0) AS available_quantity
            FROM books b
            LEFT JOIN inventory i ON i.book_id = b.id
            WHERE b.id = $1
            "#,
        );
        if filter_available(only_available) {
            query.push_str(" AND COALESCE(i.available_quantity, 0) > 0");
        }

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_book_with_inventory))
    }

    async fn create_pair(&self, book: &Book, initial_stock: i64) -> AppResult<i64> {
        let mut tx = self.pool.begin().await?;

        let book_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO books (book_name, book_category, transaction_type,
                               price, status, popularity_score)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&book.book_name)
        .bind(&book.book_category)
        .bind(&book.transaction_type)
        .bind(book.price)
        .bind(book.status)
        .bind(book.popularity_score)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO inventory (book_id, available_quantity) VALUES ($1, $2)")
            .bind(book_id)
            .bind(initial_stock)
            .execute(&mut *tx)
            .await?;

        // Rollback happens on drop if either insert failed before this point.
        tx.commit().await?;

        tracing::info!("Created book id={} with initial stock {}", book_id, initial_stock);
        Ok(book_id)
    }

    async fn update_pair(&self, book: &Book, stock: Option<i64>) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE books
            SET book_name = $1,
                book_category = $2,
                transaction_type = $3,
                price = $4,
                status = $5,
                popularity_score = $6
            WHERE id = $7
            "#,
        )
        .bind(&book.book_name)
        .bind(&book.book_category)
        .bind(&book.transaction_type)
        .bind(book.price)
        .bind(book.status)
        .bind(book.popularity_score)
        .bind(book.id)
        .execute(&mut *tx)
        .await?;

        if let Some(quantity) = stock {
            sqlx::query("UPDATE inventory SET available_quantity = $1 WHERE book_id = $2")
                .bind(quantity)
                .bind(book.id)
                .execute(&mut *tx)
                .await?;

            // Status tracks the new quantity, not any status value supplied
            // alongside the stock.
            sqlx::query(
                r#"
                UPDATE books
                SET status = COALESCE(
                    (SELECT available_quantity FROM inventory WHERE book_id = $1) > 0,
                    FALSE
                )
                WHERE id = $1
                "#,
            )
            .bind(book.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
