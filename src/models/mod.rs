//! Data models for the UZM server

pub mod book;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookWithInventory, TransactionKind};
pub use user::User;
