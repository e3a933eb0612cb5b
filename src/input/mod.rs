//! Line formats for the three input blocks.
//!
//! ```text
//! <bookId> <title> <author> <totalCopies>
//! <memberId> <name> <type>
//! <memberId> <bookId> borrow
//! <memberId> <bookId> return <overdueDays>
//! ```
//!
//! Tokens are separated by whitespace, so titles and names cannot contain
//! spaces. Tokens past the last expected field are ignored.

mod error;

pub use error::ParseError;

use std::str::{FromStr, SplitWhitespace};

use crate::book::Book;
use crate::member::{Member, MemberKind};

/// A parsed line of the transaction block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Borrow {
        member_id: String,
        book_id: String,
    },
    Return {
        member_id: String,
        book_id: String,
        overdue_days: i64,
    },
}

/// True for the line that closes a block: `done`, in any case.
pub fn is_terminator(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("done")
}

struct Fields<'a> {
    line: usize,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn new(line: usize, text: &'a str) -> Self {
        Fields {
            line,
            tokens: text.split_whitespace(),
        }
    }

    fn text(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.tokens.next().ok_or(ParseError::MissingField {
            line: self.line,
            field,
        })
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let raw = self.text(field)?;
        raw.parse().map_err(|_| ParseError::InvalidNumber {
            line: self.line,
            field,
            value: raw.to_string(),
        })
    }
}

/// `<bookId> <title> <author> <totalCopies>`
pub fn parse_book(line: usize, text: &str) -> Result<Book, ParseError> {
    let mut fields = Fields::new(line, text);
    let id = fields.text("book id")?;
    let title = fields.text("title")?;
    let author = fields.text("author")?;
    let total_copies: u32 = fields.number("total copies")?;
    Ok(Book::new(id, title, author, total_copies))
}

/// `<memberId> <name> <type>`
pub fn parse_member(line: usize, text: &str) -> Result<Member, ParseError> {
    let mut fields = Fields::new(line, text);
    let id = fields.text("member id")?;
    let name = fields.text("name")?;
    let kind = MemberKind::parse(fields.text("member type")?);
    Ok(Member::new(id, name, kind))
}

/// `<memberId> <bookId> <operation> [<overdueDays>]`. Any operation other
/// than `borrow` is a return and needs the overdue days.
pub fn parse_transaction(line: usize, text: &str) -> Result<Transaction, ParseError> {
    let mut fields = Fields::new(line, text);
    let member_id = fields.text("member id")?.to_string();
    let book_id = fields.text("book id")?.to_string();
    let operation = fields.text("operation")?;

    if operation.eq_ignore_ascii_case("borrow") {
        return Ok(Transaction::Borrow { member_id, book_id });
    }

    let overdue_days = fields.number("overdue days")?;
    Ok(Transaction::Return {
        member_id,
        book_id,
        overdue_days,
    })
}
