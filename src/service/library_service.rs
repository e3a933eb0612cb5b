use crate::book::Book;
use crate::config::ReturnPolicy;
use crate::console::{format_amount, Console};
use crate::error::LibraryError;
use crate::member::{Member, ReturnReceipt};
use crate::model::ModelStore;
use crate::store::LibraryStore;

/// Orchestrates borrow and return requests over a store it owns.
///
/// Every rejected request is reported on the console and returned as a
/// [`LibraryError`]; nothing is written back to the store in that case.
pub struct LibraryService<S> {
    store: S,
    console: Console,
    return_policy: ReturnPolicy,
}

impl<S: ModelStore> LibraryService<S> {
    /// Create a service reporting to stdout with lenient returns.
    pub fn new(store: S) -> Self {
        Self {
            store,
            console: Console::stdout(),
            return_policy: ReturnPolicy::default(),
        }
    }

    /// Report to `console` instead of stdout.
    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    pub fn with_return_policy(mut self, policy: ReturnPolicy) -> Self {
        self.return_policy = policy;
        self
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads both parties of a request, reporting an invalid id when either
    /// is missing.
    fn lookup(&self, member_id: &str, book_id: &str) -> Result<(Member, Book), LibraryError> {
        let member = self.store.get_member(member_id)?;
        let book = self.store.get_book(book_id)?;

        match (member, book) {
            (Some(member), Some(book)) => Ok((member, book)),
            _ => {
                self.console.line("Invalid member or book ID.");
                tracing::debug!(member_id, book_id, "rejected request with unknown id");
                Err(LibraryError::InvalidId {
                    member_id: member_id.to_string(),
                    book_id: book_id.to_string(),
                })
            }
        }
    }

    fn announce(&self, member: &Member) {
        self.console.blank();
        self.console.line(format!(
            "Member: {} ({})",
            member.name(),
            member.kind().label()
        ));
    }

    fn persist(&self, member: &Member, book: &Book) -> Result<(), LibraryError> {
        self.store.add_book(book)?;
        self.store.add_member(member)?;
        Ok(())
    }

    pub fn borrow_book(&self, member_id: &str, book_id: &str) -> Result<(), LibraryError> {
        let (mut member, mut book) = self.lookup(member_id, book_id)?;

        self.announce(&member);
        self.console.line(format!("Borrowed Book: {}", book.title()));

        match member.borrow(&mut book) {
            Ok(()) => {
                self.persist(&member, &book)?;
                self.console.line("Borrowing Successful");
                tracing::debug!(
                    member_id,
                    book_id,
                    available = book.available_copies(),
                    "borrow accepted"
                );
                Ok(())
            }
            Err(err) => {
                match &err {
                    LibraryError::BorrowLimitReached { .. } => {
                        self.console.line("Borrowing failed: Borrow limit reached.")
                    }
                    LibraryError::BookUnavailable { .. } => {
                        self.console.line("Borrowing failed: Book unavailable.")
                    }
                    other => self.console.line(format!("Borrowing failed: {}", other)),
                }
                tracing::debug!(member_id, book_id, error = %err, "borrow rejected");
                Err(err)
            }
        }
    }

    pub fn return_book(
        &self,
        member_id: &str,
        book_id: &str,
        overdue_days: i64,
    ) -> Result<ReturnReceipt, LibraryError> {
        let (mut member, mut book) = self.lookup(member_id, book_id)?;

        self.announce(&member);

        match member.return_book(&mut book, overdue_days, self.return_policy) {
            Ok(receipt) => {
                self.persist(&member, &book)?;
                self.console.line(format!("Returned Book: {}", receipt.title));
                self.console
                    .line(format!("Overdue Days: {}", receipt.overdue_days));
                self.console
                    .line(format!("Fine: ${}", format_amount(receipt.fine)));
                tracing::debug!(member_id, book_id, fine = receipt.fine, "return accepted");
                Ok(receipt)
            }
            Err(err) => {
                match &err {
                    LibraryError::ReturnNotFound { .. } => {
                        self.console.line("Return failed: Book not found.")
                    }
                    LibraryError::OverReturn { .. } => self
                        .console
                        .line("Return failed: all copies already on shelf."),
                    other => self.console.line(format!("Return failed: {}", other)),
                }
                tracing::debug!(member_id, book_id, error = %err, "return rejected");
                Err(err)
            }
        }
    }

    /// Prints the summary header. No totals are computed.
    pub fn display_summary(&self) {
        self.console.blank();
        self.console.line("BOOK BORROWING SUMMARY");
    }

    /// Prints one availability line per book, sorted by id.
    pub fn display_inventory(&self) -> Result<(), LibraryError> {
        for book in self.store.books()? {
            self.console.line(book.info_line());
        }
        Ok(())
    }
}
