//! User commands typed into the terminal.
//!
//! A line starts with a verb (`new`, `delete`, `quit` or one of their aliases),
//! optionally followed by the on-screen position of a quote. Positions are shown
//! 1-based and converted to store indexes here.
use std::str::FromStr;

use quotable_common::QuoteError;
use strum_macros::{Display, EnumString};

/// Recognised command words.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Verb {
    #[strum(to_string = "new", serialize = "n", serialize = "refresh")]
    New,
    #[strum(to_string = "delete", serialize = "d", serialize = "del")]
    Delete,
    #[strum(to_string = "quit", serialize = "q", serialize = "exit")]
    Quit,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Fetch one more quote.
    Refresh,
    /// Remove the quote at this store index.
    Remove(usize),
    /// Leave the program.
    Quit,
}

impl FromStr for Intent {
    type Err = QuoteError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb_word = words
            .next()
            .ok_or_else(|| QuoteError::InvalidIntent("empty command".to_string()))?;
        let verb = Verb::from_str(verb_word)
            .map_err(|_| QuoteError::InvalidIntent(format!("unknown command '{}'", verb_word)))?;

        let intent = match verb {
            Verb::New => Intent::Refresh,
            Verb::Quit => Intent::Quit,
            Verb::Delete => {
                let position = words.next().ok_or_else(|| {
                    QuoteError::InvalidIntent(format!("'{}' needs a quote number", verb))
                })?;
                Intent::Remove(parse_position(position)?)
            }
        };

        if let Some(extra) = words.next() {
            return Err(QuoteError::InvalidIntent(format!(
                "unexpected argument '{}' after '{}'",
                extra, verb
            )));
        }
        Ok(intent)
    }
}

/// Turns an on-screen number (`1`, `2`, ...) into a store index.
fn parse_position(raw: &str) -> Result<usize, QuoteError> {
    let trimmed = raw.trim_start_matches('[').trim_end_matches(']');
    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(QuoteError::InvalidIntent(format!(
            "'{}' is not a quote number",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_and_aliases() {
        assert_eq!("n".parse::<Intent>().unwrap(), Intent::Refresh);
        assert_eq!("NEW".parse::<Intent>().unwrap(), Intent::Refresh);
        assert_eq!("refresh".parse::<Intent>().unwrap(), Intent::Refresh);
        assert_eq!("q".parse::<Intent>().unwrap(), Intent::Quit);
        assert_eq!("Exit".parse::<Intent>().unwrap(), Intent::Quit);
    }

    #[test]
    fn delete_converts_to_zero_based_index() {
        assert_eq!("d 1".parse::<Intent>().unwrap(), Intent::Remove(0));
        assert_eq!("  delete   3 ".parse::<Intent>().unwrap(), Intent::Remove(2));
        assert_eq!("del [2]".parse::<Intent>().unwrap(), Intent::Remove(1));
    }

    #[test]
    fn delete_requires_positive_number() {
        assert!(matches!("d".parse::<Intent>(), Err(QuoteError::InvalidIntent(_))));
        assert!(matches!("d 0".parse::<Intent>(), Err(QuoteError::InvalidIntent(_))));
        assert!(matches!("d -1".parse::<Intent>(), Err(QuoteError::InvalidIntent(_))));
        assert!(matches!("d two".parse::<Intent>(), Err(QuoteError::InvalidIntent(_))));
    }

    #[test]
    fn rejects_unknown_and_trailing_words() {
        let err = "fetch".parse::<Intent>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid command: unknown command 'fetch'");
        assert!(matches!("n now".parse::<Intent>(), Err(QuoteError::InvalidIntent(_))));
        assert!(matches!("   ".parse::<Intent>(), Err(QuoteError::InvalidIntent(_))));
    }

    #[test]
    fn verb_display_uses_canonical_name() {
        assert_eq!(Verb::Delete.to_string(), "delete");
        assert_eq!("D".parse::<Verb>().unwrap(), Verb::Delete);
    }
}
