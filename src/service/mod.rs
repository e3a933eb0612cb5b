//! Library service — borrow and return requests against the store.
//!
//! `LibraryService<S>` loads the member and book named by a request, applies
//! the member's borrowing rules, writes both records back, and reports the
//! outcome on its [`Console`](crate::Console).
//!
//! ## Quick Start
//!
//! ```ignore
//! use circulation::{Book, InMemoryModelStore, LibraryService, LibraryStore, Member};
//!
//! let store = InMemoryModelStore::new();
//! store.add_book(&Book::new("B1", "Dune", "Herbert", 1))?;
//! store.add_member(&Member::student("M1", "Alice"))?;
//!
//! let service = LibraryService::new(store);
//! service.borrow_book("M1", "B1")?;
//! service.return_book("M1", "B1", 3)?;
//! service.display_summary();
//! ```

mod library_service;

pub use library_service::LibraryService;
