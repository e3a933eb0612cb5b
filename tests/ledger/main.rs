//! End-to-end runs of the ledger over in-memory input.


use circulation::{
    Book, Console, LibraryConfig, LibraryError, LibraryService, LibraryStore, ReturnPolicy,
    RunStats,
};
use support::{run, run_bytes_with, run_with};

// ============================================================================
// The reference scenario: one copy, two students
// ============================================================================

#[test]
fn single_copy_is_borrowed_refused_and_returned() {
    let run = run("\
B1 Dune Herbert 1
done
M1 Alice Student
M2 Carol student
done
M1 B1 borrow
M2 B1 borrow
M1 B1 return 3
done
");

    assert_eq!(
        run.text(),
        vec![
            "Member: Alice (Student)",
            "Borrowed Book: Dune",
            "Borrowing Successful",
            "Member: Carol (Student)",
            "Borrowed Book: Dune",
            "Borrowing failed: Book unavailable.",
            "Member: Alice (Student)",
            "Returned Book: Dune",
            "Overdue Days: 3",
            "Fine: $3.0",
            "BOOK BORROWING SUMMARY",
        ]
    );

    let book = run.store.get_book("B1").unwrap().unwrap();
    assert_eq!(book.available_copies(), 1);
    assert!(run.store.get_member("M1").unwrap().unwrap().borrowed().is_empty());
    assert!(run.store.get_member("M2").unwrap().unwrap().borrowed().is_empty());

    assert_eq!(
        run.stats,
        RunStats {
            books_loaded: 1,
            members_loaded: 2,
            transactions_applied: 2,
            transactions_rejected: 1,
            lines_skipped: 0,
        }
    );
}

#[test]
fn blank_lines_separate_member_reports() {
    let run = run("B1 Dune Herbert 1\ndone\nM1 Alice Student\ndone\nM1 B1 borrow\ndone\n");
    assert_eq!(
        run.lines,
        vec![
            "",
            "Member: Alice (Student)",
            "Borrowed Book: Dune",
            "Borrowing Successful",
            "",
            "BOOK BORROWING SUMMARY",
        ]
    );
}

// ============================================================================
// Borrow limits and fines per member kind
// ============================================================================

#[test]
fn student_fourth_borrow_hits_the_limit() {
    let run = run("\
B1 Dune Herbert 2
B2 Emma Austen 2
B3 Ulysses Joyce 2
B4 Beloved Morrison 2
done
M1 Alice Student
done
M1 B1 borrow
M1 B2 borrow
M1 B3 borrow
M1 B4 borrow
done
");

    assert!(run
        .text()
        .contains(&"Borrowing failed: Borrow limit reached."));
    let alice = run.store.get_member("M1").unwrap().unwrap();
    assert_eq!(alice.borrowed(), ["B1", "B2", "B3"].map(String::from));
    assert_eq!(run.store.get_book("B4").unwrap().unwrap().available_copies(), 2);
}

#[test]
fn faculty_holds_five_and_pays_half() {
    let run = run("\
B1 Dune Herbert 6
done
F1 Bob Faculty
done
F1 B1 borrow
F1 B1 borrow
F1 B1 borrow
F1 B1 borrow
F1 B1 borrow
F1 B1 borrow
F1 B1 return 4
done
");

    let text = run.text();
    assert_eq!(
        text.iter()
            .filter(|l| **l == "Borrowing Successful")
            .count(),
        5
    );
    assert!(text.contains(&"Borrowing failed: Borrow limit reached."));
    assert!(text.contains(&"Fine: $2.0"));

    let bob = run.store.get_member("F1").unwrap().unwrap();
    assert_eq!(bob.borrowed().len(), 4);
    assert_eq!(run.store.get_book("B1").unwrap().unwrap().available_copies(), 2);
}

#[test]
fn very_large_fines_print_in_scientific_notation() {
    let run = run("B1 Dune Herbert 1\ndone\nF1 Bob Faculty\ndone\nF1 B1 borrow\nF1 B1 return 40000000\ndone\n");

    let text = run.text();
    assert!(text.contains(&"Overdue Days: 40000000"));
    assert!(text.contains(&"Fine: $2.0E7"));
}

#[test]
fn early_and_on_time_returns_are_not_clamped() {
    let run = run("\
B1 Dune Herbert 2
done
M1 Alice Student
done
M1 B1 borrow
M1 B1 borrow
M1 B1 return 0
M1 B1 return -2
done
");

    let text = run.text();
    assert!(text.contains(&"Fine: $0.0"));
    assert!(text.contains(&"Fine: $-2.0"));
}

// ============================================================================
// Rejected transactions leave the store untouched
// ============================================================================

#[test]
fn unknown_ids_are_reported_and_ignored() {
    let run = run("\
B1 Dune Herbert 1
done
M1 Alice Student
done
M9 B1 borrow
M1 B9 borrow
M1 B9 return 2
done
");

    assert_eq!(
        run.text(),
        vec![
            "Invalid member or book ID.",
            "Invalid member or book ID.",
            "Invalid member or book ID.",
            "BOOK BORROWING SUMMARY",
        ]
    );
    assert_eq!(run.store.get_book("B1").unwrap().unwrap().available_copies(), 1);
    assert_eq!(run.stats.transactions_rejected, 3);
}

#[test]
fn returning_a_book_never_borrowed_fails() {
    let run = run("B1 Dune Herbert 1\ndone\nM1 Alice Student\ndone\nM1 B1 return 5\ndone\n");

    assert!(run.text().contains(&"Return failed: Book not found."));
    assert_eq!(run.store.get_book("B1").unwrap().unwrap().available_copies(), 1);
}

// ============================================================================
// Input handling
// ============================================================================

#[test]
fn malformed_lines_are_skipped_not_fatal() {
    let run = run("\
B1 Dune Herbert one
B2 Emma Austen 1
done
M1 Alice
M2 Carol Student
done
M2 B2 return
M2 B2 borrow
done
");

    assert!(run.store.get_book("B1").unwrap().is_none());
    assert!(run.store.get_member("M1").unwrap().is_none());
    assert_eq!(run.store.get_book("B2").unwrap().unwrap().available_copies(), 0);
    assert_eq!(run.stats.lines_skipped, 3);
    assert_eq!(run.stats.transactions_applied, 1);
}

#[test]
fn undecodable_line_is_skipped_and_later_blocks_apply() {
    let input: &[u8] =
        b"B1 Dune Herbert 1\nB2 Caf\xE9 Author 1\ndone\nM1 Alice Student\ndone\nM1 B1 borrow\ndone\n";
    let run = run_bytes_with(input, &LibraryConfig::default());

    assert_eq!(run.stats.lines_skipped, 1);
    assert_eq!(run.stats.books_loaded, 1);
    assert_eq!(run.stats.transactions_applied, 1);
    assert!(run.store.get_book("B2").unwrap().is_none());
    assert_eq!(run.store.get_book("B1").unwrap().unwrap().available_copies(), 0);
    assert!(run.text().contains(&"Borrowing Successful"));
    assert_eq!(run.text().last(), Some(&"BOOK BORROWING SUMMARY"));
}

#[test]
fn terminators_ignore_case_and_missing_ones_end_input() {
    let run = run("B1 Dune Herbert 1\nDONE\nM1 Alice Student\nDone\nM1 B1 borrow\n");

    assert_eq!(run.stats.transactions_applied, 1);
    assert_eq!(run.text().last(), Some(&"BOOK BORROWING SUMMARY"));
}

#[test]
fn empty_input_still_prints_the_summary() {
    let run = run("");
    assert_eq!(run.text(), vec!["BOOK BORROWING SUMMARY"]);
    assert_eq!(run.stats, RunStats::default());
}

#[test]
fn later_book_line_replaces_earlier_one() {
    let run = run("B1 Dune Herbert 1\nB1 Emma Austen 3\ndone\ndone\ndone\n");

    let book: Book = run.store.get_book("B1").unwrap().unwrap();
    assert_eq!(book.title(), "Emma");
    assert_eq!(book.available_copies(), 3);
    assert_eq!(run.stats.books_loaded, 2);
}

// ============================================================================
// Return policy and inventory
// ============================================================================

const RESTOCKED: &str = "\
B1 Dune Herbert 1
done
M1 Alice Student
done
M1 B1 borrow
done
";

#[test]
fn strict_returns_reject_over_return() {
    // Seed a loan, then replace the book record with a fully stocked one.
    let first = run(RESTOCKED);
    first
        .store
        .add_book(&Book::new("B1", "Dune", "Herbert", 1))
        .unwrap();

    let (console, lines) = Console::captured();
    let service = LibraryService::new(first.store.clone())
        .with_return_policy(ReturnPolicy::Strict)
        .with_console(console);

    let err = service.return_book("M1", "B1", 0).unwrap_err();
    assert!(matches!(err, LibraryError::OverReturn { .. }));
    assert_eq!(
        lines.lock().unwrap().last().map(String::as_str),
        Some("Return failed: all copies already on shelf.")
    );
    assert_eq!(first.store.get_book("B1").unwrap().unwrap().available_copies(), 1);
    assert_eq!(first.store.get_member("M1").unwrap().unwrap().borrowed().len(), 1);

    let lenient = service.with_return_policy(ReturnPolicy::Lenient);
    lenient.return_book("M1", "B1", 0).unwrap();
    assert_eq!(first.store.get_book("B1").unwrap().unwrap().available_copies(), 2);
}

#[test]
fn inventory_follows_the_summary() {
    let config = LibraryConfig::new().with_inventory(true);
    let run = run_with(
        "B2 Emma Austen 2\nB1 Dune Herbert 1\ndone\nM1 Alice Student\ndone\nM1 B2 borrow\ndone\n",
        &config,
    );

    let text = run.text();
    assert_eq!(
        &text[text.len() - 3..],
        [
            "BOOK BORROWING SUMMARY",
            "BookID: B1, Title: Dune, Author: Herbert, Available: 1/1",
            "BookID: B2, Title: Emma, Author: Austen, Available: 1/2",
        ]
    );
}
