use serde::{Deserialize, Serialize};

use crate::error::LibraryError;
use crate::model::Model;

/// A catalogued title and its copy counter.
///
/// `available_copies` is signed and unclamped: a lenient return always adds a
/// copy back, even past `total_copies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    id: String,
    title: String,
    author: String,
    total_copies: u32,
    available_copies: i64,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        total_copies: u32,
    ) -> Self {
        Book {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            total_copies,
            available_copies: i64::from(total_copies),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    pub fn available_copies(&self) -> i64 {
        self.available_copies
    }

    /// Takes one copy off the shelf. Returns false, leaving the book
    /// untouched, when none are available.
    pub fn borrow(&mut self) -> bool {
        if self.available_copies > 0 {
            self.available_copies -= 1;
            true
        } else {
            false
        }
    }

    /// Puts one copy back on the shelf without checking `total_copies`.
    pub fn return_copy(&mut self) {
        self.available_copies += 1;
    }

    /// Puts one copy back unless every copy is already on the shelf.
    pub fn try_return_copy(&mut self) -> Result<(), LibraryError> {
        if self.available_copies >= i64::from(self.total_copies) {
            return Err(LibraryError::OverReturn {
                book_id: self.id.clone(),
            });
        }
        self.available_copies += 1;
        Ok(())
    }

    pub fn info_line(&self) -> String {
        format!(
            "BookID: {}, Title: {}, Author: {}, Available: {}/{}",
            self.id, self.title, self.author, self.available_copies, self.total_copies
        )
    }
}

impl Model for Book {
    const COLLECTION: &'static str = "books";

    fn id(&self) -> &str {
        &self.id
    }
}
