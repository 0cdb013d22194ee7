//! Book and inventory models and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sale/rental classification of a book.
///
/// Input is accepted case-insensitively, including the legacy Spanish
/// spellings used by existing clients ("venta"/"arriendo"); the canonical
/// stored form is the lowercase English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Sale,
    Rental,
}

impl TransactionKind {
    /// Parse a user-supplied transaction kind, returning `None` when it is
    /// not one of the accepted spellings.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sale" | "venta" => Some(TransactionKind::Sale),
            "rental" | "arriendo" => Some(TransactionKind::Rental),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "sale",
            TransactionKind::Rental => "rental",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i64,
    pub book_name: String,
    pub book_category: String,
    pub transaction_type: String, // canonical lowercase form, see TransactionKind
    pub price: i64,
    pub status: bool,
    pub popularity_score: i64,
}

/// Read-side join of a book and its inventory quantity.
///
/// Never persisted directly; a missing inventory row reads as quantity 0.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookWithInventory {
    pub book: Book,
    pub available_quantity: i64,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub book_name: String,
    #[serde(default)]
    pub book_category: String,
    pub transaction_type: String,
    pub price: i64,
    /// Accepted for wire compatibility; availability is derived from `stock`.
    #[serde(default)]
    pub status: bool,
    pub popularity_score: Option<i64>,
    #[serde(default)]
    pub stock: i64,
}

/// Partial update request; absent fields leave the stored value untouched
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub book_name: Option<String>,
    pub book_category: Option<String>,
    pub transaction_type: Option<String>,
    pub price: Option<i64>,
    pub status: Option<bool>,
    pub popularity_score: Option<i64>,
    pub stock: Option<i64>,
}

/// Query parameters for book listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookQuery {
    /// `true` restricts the listing to books with available stock;
    /// absent or `false` applies no filter.
    pub status: Option<bool>,
}
