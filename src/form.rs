//! The submit form and the result display — the two halves of the UI
//! boundary.
//!
//! ## Design
//! - `SubmitForm` stands in for the page's three input fields. It is passed
//!   into the session explicitly instead of being looked up ambiently, so the
//!   core stays testable without a live terminal.
//! - `ResultDisplay` is the output container. The session only ever writes
//!   it, one full replacement per inbound frame; it never reads it back.

use std::io::{self, Write};

use colored::*;

use crate::votes::generate_votes;
use crate::{Algorithm, Query};

// ---------------------------------------------------------------------------
// Submit form
// ---------------------------------------------------------------------------

/// Current values of the three input fields.
///
/// `count` keeps the raw field text; coercion to a number happens at submit
/// time, like a free-form numeric field. The algorithm choice is a single
/// selector: checked means neff, anything else means sato.
#[derive(Debug, Clone, Default)]
pub struct SubmitForm {
    pub count: String,
    pub neff: bool,
    pub parallelize: bool,
}

impl SubmitForm {
    pub fn new(count: impl Into<String>, neff: bool, parallelize: bool) -> Self {
        SubmitForm {
            count: count.into(),
            neff,
            parallelize,
        }
    }

    /// Numeric value of the count field. Non-numeric text coerces to 0, so a
    /// garbled field produces an empty vote list instead of a fault.
    pub fn count_value(&self) -> i64 {
        self.count.trim().parse().unwrap_or(0)
    }

    /// Algorithm inferred from the selector state. Exactly one of the two
    /// algorithms for any bool value, never both or neither.
    pub fn algorithm(&self) -> Algorithm {
        if self.neff {
            Algorithm::Neff
        } else {
            Algorithm::Sato
        }
    }

    /// Build a fresh query from the current field values.
    pub fn query(&self) -> Query {
        Query {
            votes: generate_votes(self.count_value()),
            algorithm: self.algorithm(),
            parallelize: self.parallelize,
        }
    }
}

// ---------------------------------------------------------------------------
// Result display
// ---------------------------------------------------------------------------

/// Output container for server responses.
///
/// Each inbound frame replaces the previous content in full; implementations
/// must not append.
pub trait ResultDisplay: Send {
    fn replace(&mut self, text: &str);
}

/// Renders the latest timing report on a single terminal line.
pub struct TerminalDisplay {
    last: String,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        TerminalDisplay {
            last: String::new(),
        }
    }

    /// The currently displayed text.
    pub fn current(&self) -> &str {
        &self.last
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultDisplay for TerminalDisplay {
    fn replace(&mut self, text: &str) {
        self.last.clear();
        self.last.push_str(text);
        // \r + erase-line: the result line is cleared and rewritten, so only
        // the most recent report is ever visible.
        print!("\r\x1b[2K{} {}\n> ", "elapsed".green().bold(), self.last);
        let _ = io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_inference_selector_checked() {
        assert_eq!(SubmitForm::new("1", true, false).algorithm(), Algorithm::Neff);
    }

    #[test]
    fn test_algorithm_inference_selector_unchecked() {
        assert_eq!(SubmitForm::new("1", false, false).algorithm(), Algorithm::Sato);
    }

    #[test]
    fn test_count_value_plain() {
        assert_eq!(SubmitForm::new("42", false, false).count_value(), 42);
    }

    #[test]
    fn test_count_value_garbage_coerces_to_zero() {
        assert_eq!(SubmitForm::new("votes!", false, false).count_value(), 0);
    }

    #[test]
    fn test_terminal_display_replaces_in_full() {
        let mut display = TerminalDisplay::new();
        display.replace("first report");
        display.replace("B");
        assert_eq!(display.current(), "B");
    }
}
