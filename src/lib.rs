mod book;
mod config;
mod console;
mod driver;
mod error;
pub mod input;
mod member;
pub mod model;
mod service;
mod store;

pub use book::Book;
pub use config::{LibraryConfig, ReturnPolicy};
pub use console::{format_amount, Console};
pub use driver::{Driver, RunStats};
pub use error::LibraryError;
pub use input::{ParseError, Transaction};
pub use member::{Member, MemberKind, ReturnReceipt};
pub use model::{InMemoryModelStore, Model, ModelError, ModelRepository, ModelStore, ModelsExt, Versioned};
pub use service::LibraryService;
pub use store::LibraryStore;
