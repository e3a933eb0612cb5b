use std::fmt;

use crate::model::ModelError;

/// Reasons a borrow or return transaction is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// The member id, the book id, or both are unknown to the store.
    InvalidId { member_id: String, book_id: String },
    BorrowLimitReached { member_id: String, limit: usize },
    BookUnavailable { book_id: String },
    /// The member does not hold the book being returned.
    ReturnNotFound { member_id: String, book_id: String },
    /// Strict returns only: every copy of the book is already on the shelf.
    OverReturn { book_id: String },
    Store(ModelError),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidId { member_id, book_id } => write!(
                f,
                "invalid member or book id (member {}, book {})",
                member_id, book_id
            ),
            LibraryError::BorrowLimitReached { member_id, limit } => write!(
                f,
                "member {} already holds the limit of {} books",
                member_id, limit
            ),
            LibraryError::BookUnavailable { book_id } => {
                write!(f, "no copies of book {} are available", book_id)
            }
            LibraryError::ReturnNotFound { member_id, book_id } => write!(
                f,
                "member {} has not borrowed book {}",
                member_id, book_id
            ),
            LibraryError::OverReturn { book_id } => {
                write!(f, "all copies of book {} are already returned", book_id)
            }
            LibraryError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<ModelError> for LibraryError {
    fn from(err: ModelError) -> Self {
        LibraryError::Store(err)
    }
}
