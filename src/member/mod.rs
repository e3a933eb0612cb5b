//! Members and their borrowing rules.
//!
//! A member holds the ids of the books currently on loan, in borrow order.
//! The [`MemberKind`] decides how many books may be held and how overdue
//! returns are fined.

mod kind;

pub use kind::MemberKind;

use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::config::ReturnPolicy;
use crate::error::LibraryError;
use crate::model::Model;

/// Outcome of an accepted return.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnReceipt {
    pub book_id: String,
    pub title: String,
    pub overdue_days: i64,
    pub fine: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    id: String,
    name: String,
    kind: MemberKind,
    borrowed: Vec<String>,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: MemberKind) -> Self {
        Member {
            id: id.into(),
            name: name.into(),
            kind,
            borrowed: Vec::new(),
        }
    }

    pub fn student(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, MemberKind::Student)
    }

    pub fn faculty(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, MemberKind::Faculty)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Ids of the books on loan, oldest first.
    pub fn borrowed(&self) -> &[String] {
        &self.borrowed
    }

    pub fn max_borrow_limit(&self) -> usize {
        self.kind.max_borrow_limit()
    }

    /// `overdue_days * fine_rate`. Zero or negative days are not clamped.
    pub fn calculate_fine(&self, overdue_days: i64) -> f64 {
        overdue_days as f64 * self.kind.fine_rate()
    }

    /// Takes a copy of `book` on loan. Neither side changes on failure.
    pub fn borrow(&mut self, book: &mut Book) -> Result<(), LibraryError> {
        let limit = self.max_borrow_limit();
        if self.borrowed.len() >= limit {
            return Err(LibraryError::BorrowLimitReached {
                member_id: self.id.clone(),
                limit,
            });
        }

        if !book.borrow() {
            return Err(LibraryError::BookUnavailable {
                book_id: book.id().to_string(),
            });
        }

        self.borrowed.push(book.id().to_string());
        Ok(())
    }

    /// Hands `book` back and computes the fine. Only the first matching loan
    /// is removed. Loans are matched by book id, so a book record replaced
    /// while on loan still accepts the return.
    pub fn return_book(
        &mut self,
        book: &mut Book,
        overdue_days: i64,
        policy: ReturnPolicy,
    ) -> Result<ReturnReceipt, LibraryError> {
        let Some(position) = self.borrowed.iter().position(|id| id == book.id()) else {
            return Err(LibraryError::ReturnNotFound {
                member_id: self.id.clone(),
                book_id: book.id().to_string(),
            });
        };

        match policy {
            ReturnPolicy::Lenient => book.return_copy(),
            ReturnPolicy::Strict => book.try_return_copy()?,
        }
        self.borrowed.remove(position);

        Ok(ReturnReceipt {
            book_id: book.id().to_string(),
            title: book.title().to_string(),
            overdue_days,
            fine: self.calculate_fine(overdue_days),
        })
    }
}

impl Model for Member {
    const COLLECTION: &'static str = "members";

    fn id(&self) -> &str {
        &self.id
    }
}
