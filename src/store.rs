//! Book and member access on top of any [`ModelStore`].

use crate::book::Book;
use crate::member::Member;
use crate::model::{ModelError, ModelStore, ModelsExt};

/// Catalogue operations for the library. Adding an id that already exists
/// replaces the previous record; the add methods return how many times the
/// id has been written, so anything above 1 means a replacement.
pub trait LibraryStore: ModelStore + Sized {
    fn add_book(&self, book: &Book) -> Result<u64, ModelError> {
        self.models::<Book>().save(book).map(|v| v.version)
    }

    fn get_book(&self, id: &str) -> Result<Option<Book>, ModelError> {
        self.models::<Book>().get(id)
    }

    fn add_member(&self, member: &Member) -> Result<u64, ModelError> {
        self.models::<Member>().save(member).map(|v| v.version)
    }

    fn get_member(&self, id: &str) -> Result<Option<Member>, ModelError> {
        self.models::<Member>().get(id)
    }

    /// Every book, sorted by id.
    fn books(&self) -> Result<Vec<Book>, ModelError> {
        self.models::<Book>().all()
    }
}

impl<S: ModelStore> LibraryStore for S {}
