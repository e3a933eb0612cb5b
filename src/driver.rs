//! Reads the three input blocks and feeds them through the service.

use std::fmt;
use std::io::{self, BufRead};

use crate::config::LibraryConfig;
use crate::console::Console;
use crate::input::{self, ParseError, Transaction};
use crate::model::ModelStore;
use crate::service::LibraryService;
use crate::store::LibraryStore;

/// Counters for one pass over the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub books_loaded: usize,
    pub members_loaded: usize,
    pub transactions_applied: usize,
    pub transactions_rejected: usize,
    /// Malformed, undecodable or unstorable lines, in any block.
    pub lines_skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Books,
    Members,
    Transactions,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Books => write!(f, "books"),
            Block::Members => write!(f, "members"),
            Block::Transactions => write!(f, "transactions"),
        }
    }
}

pub struct Driver<S> {
    service: LibraryService<S>,
    show_inventory: bool,
    stats: RunStats,
}

impl<S: ModelStore> Driver<S> {
    pub fn new(store: S, console: Console, config: &LibraryConfig) -> Self {
        Driver {
            service: LibraryService::new(store)
                .with_console(console)
                .with_return_policy(config.return_policy),
            show_inventory: config.show_inventory,
            stats: RunStats::default(),
        }
    }

    /// Loads books, then members, then applies transactions, then prints the
    /// summary. Input that ends early closes every remaining block.
    pub fn run<R: BufRead>(mut self, reader: R) -> io::Result<RunStats> {
        let mut lines = reader.lines().enumerate().map(|(n, line)| (n + 1, line));

        for block in [Block::Books, Block::Members, Block::Transactions] {
            let before = self.stats.clone();
            loop {
                let Some((number, line)) = lines.next() else {
                    tracing::debug!(%block, "input ended before block terminator");
                    break;
                };
                let line = match line {
                    Ok(line) => line,
                    Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                        tracing::warn!(%block, line = number, "skipping undecodable line: {}", e);
                        self.stats.lines_skipped += 1;
                        continue;
                    }
                    Err(e) => return Err(e),
                };
                if input::is_terminator(&line) {
                    break;
                }
                if line.trim().is_empty() {
                    continue;
                }
                self.apply(block, number, &line);
            }
            tracing::info!(
                %block,
                books = self.stats.books_loaded - before.books_loaded,
                members = self.stats.members_loaded - before.members_loaded,
                applied = self.stats.transactions_applied - before.transactions_applied,
                rejected = self.stats.transactions_rejected - before.transactions_rejected,
                skipped = self.stats.lines_skipped - before.lines_skipped,
                "block finished"
            );
        }

        self.service.display_summary();
        if self.show_inventory {
            if let Err(e) = self.service.display_inventory() {
                tracing::error!("failed to list inventory: {}", e);
            }
        }

        Ok(self.stats)
    }

    fn apply(&mut self, block: Block, number: usize, line: &str) {
        let result = match block {
            Block::Books => self.load_book(number, line),
            Block::Members => self.load_member(number, line),
            Block::Transactions => self.apply_transaction(number, line),
        };
        if let Err(e) = result {
            tracing::warn!(%block, line = e.line(), "skipping malformed line: {}", e);
            self.stats.lines_skipped += 1;
        }
    }

    fn load_book(&mut self, number: usize, line: &str) -> Result<(), ParseError> {
        let book = input::parse_book(number, line)?;
        match self.service.store().add_book(&book) {
            Ok(version) => {
                if version > 1 {
                    tracing::debug!(book_id = book.id(), version, "replaced earlier book record");
                }
                tracing::debug!(book_id = book.id(), "loaded book");
                self.stats.books_loaded += 1;
            }
            Err(e) => {
                tracing::error!(book_id = book.id(), "failed to store book: {}", e);
                self.stats.lines_skipped += 1;
            }
        }
        Ok(())
    }

    fn load_member(&mut self, number: usize, line: &str) -> Result<(), ParseError> {
        let member = input::parse_member(number, line)?;
        match self.service.store().add_member(&member) {
            Ok(version) => {
                if version > 1 {
                    tracing::debug!(member_id = member.id(), version, "replaced earlier member record");
                }
                tracing::debug!(member_id = member.id(), "loaded member");
                self.stats.members_loaded += 1;
            }
            Err(e) => {
                tracing::error!(member_id = member.id(), "failed to store member: {}", e);
                self.stats.lines_skipped += 1;
            }
        }
        Ok(())
    }

    fn apply_transaction(&mut self, number: usize, line: &str) -> Result<(), ParseError> {
        let outcome = match input::parse_transaction(number, line)? {
            Transaction::Borrow { member_id, book_id } => {
                self.service.borrow_book(&member_id, &book_id)
            }
            Transaction::Return {
                member_id,
                book_id,
                overdue_days,
            } => self
                .service
                .return_book(&member_id, &book_id, overdue_days)
                .map(|_| ()),
        };

        match outcome {
            Ok(()) => self.stats.transactions_applied += 1,
            Err(_) => self.stats.transactions_rejected += 1,
        }
        Ok(())
    }
}
