//! Parser for line-oriented event scripts.
//!
//! One event per line, whitespace-separated fields, `#` starts a
//! comment line:
//!
//! ```text
//! R <uid>                      register user
//! U <uid>                      unregister user
//! A <mid> <category> <year>    add movie to intake
//! D                            distribute intake to catalog
//! W <uid> <mid>                user watches movie
//! S <uid>                      suggest from other users' histories
//! F <uid> <cat1> <cat2> <year> filtered category/year search
//! T <mid>                      take movie off the service
//! M                            print category table
//! P                            print users
//! ```
//!
//! Categories are accepted both as bucket index (0-5, the original
//! script encoding) and as case-insensitive names ("drama", "sci-fi").

use catalog::{Category, MovieId, UserId, Year};
use thiserror::Error;

/// One parsed script event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Register {
        uid: UserId,
    },
    Unregister {
        uid: UserId,
    },
    AddMovie {
        id: MovieId,
        category: Category,
        year: Year,
    },
    Distribute,
    Watch {
        uid: UserId,
        id: MovieId,
    },
    Suggest {
        uid: UserId,
    },
    FilteredSearch {
        uid: UserId,
        category1: Category,
        category2: Category,
        min_year: Year,
    },
    TakeOff {
        id: MovieId,
    },
    PrintMovies,
    PrintUsers,
}

/// Errors from parsing a script line, carrying the line number.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("unknown event '{event}' at line {line}")]
    UnknownEvent { event: String, line: usize },

    #[error("event {event} at line {line}: {reason}")]
    BadArguments {
        event: char,
        line: usize,
        reason: String,
    },
}

/// Parse one script line.
///
/// Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<Event>, ScriptError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut fields = trimmed.split_whitespace();
    let event = fields.next().unwrap_or_default();
    let args: Vec<&str> = fields.collect();

    let parsed = match event {
        "R" => Event::Register {
            uid: parse_uid(&args, 0, 'R', line)?,
        },
        "U" => Event::Unregister {
            uid: parse_uid(&args, 0, 'U', line)?,
        },
        "A" => {
            expect_args('A', &args, 3, line)?;
            Event::AddMovie {
                id: parse_num(args[0], "movie id", 'A', line)?,
                category: parse_category(args[1], 'A', line)?,
                year: parse_num(args[2], "year", 'A', line)?,
            }
        }
        "D" => Event::Distribute,
        "W" => {
            expect_args('W', &args, 2, line)?;
            Event::Watch {
                uid: parse_num(args[0], "user id", 'W', line)?,
                id: parse_num(args[1], "movie id", 'W', line)?,
            }
        }
        "S" => Event::Suggest {
            uid: parse_uid(&args, 0, 'S', line)?,
        },
        "F" => {
            expect_args('F', &args, 4, line)?;
            Event::FilteredSearch {
                uid: parse_num(args[0], "user id", 'F', line)?,
                category1: parse_category(args[1], 'F', line)?,
                category2: parse_category(args[2], 'F', line)?,
                min_year: parse_num(args[3], "year", 'F', line)?,
            }
        }
        "T" => {
            expect_args('T', &args, 1, line)?;
            Event::TakeOff {
                id: parse_num(args[0], "movie id", 'T', line)?,
            }
        }
        "M" => Event::PrintMovies,
        "P" => Event::PrintUsers,
        other => {
            return Err(ScriptError::UnknownEvent {
                event: other.to_string(),
                line,
            });
        }
    };
    Ok(Some(parsed))
}

fn expect_args(event: char, args: &[&str], expected: usize, line: usize) -> Result<(), ScriptError> {
    if args.len() < expected {
        return Err(ScriptError::BadArguments {
            event,
            line,
            reason: format!("expected {} arguments, found {}", expected, args.len()),
        });
    }
    Ok(())
}

fn parse_uid(args: &[&str], at: usize, event: char, line: usize) -> Result<UserId, ScriptError> {
    expect_args(event, args, at + 1, line)?;
    parse_num(args[at], "user id", event, line)
}

fn parse_num<T: std::str::FromStr>(
    token: &str,
    field: &str,
    event: char,
    line: usize,
) -> Result<T, ScriptError> {
    token.parse().map_err(|_| ScriptError::BadArguments {
        event,
        line,
        reason: format!("invalid {field} '{token}'"),
    })
}

fn parse_category(token: &str, event: char, line: usize) -> Result<Category, ScriptError> {
    if let Ok(index) = token.parse::<usize>() {
        return Category::from_index(index).ok_or_else(|| ScriptError::BadArguments {
            event,
            line,
            reason: format!("category index '{token}' is out of range (0-5)"),
        });
    }
    let lowered = token.to_ascii_lowercase();
    Category::ALL
        .iter()
        .copied()
        .find(|cat| cat.label().to_ascii_lowercase().replace('-', "") == lowered.replace('-', ""))
        .ok_or_else(|| ScriptError::BadArguments {
            event,
            line,
            reason: format!("unknown category '{token}'"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        assert_eq!(parse_line("# setup phase", 1).unwrap(), None);
        assert_eq!(parse_line("   ", 2).unwrap(), None);
    }

    #[test]
    fn test_full_event_grammar() {
        assert_eq!(
            parse_line("R 42", 1).unwrap(),
            Some(Event::Register { uid: 42 })
        );
        assert_eq!(
            parse_line("A 147 5 2014", 2).unwrap(),
            Some(Event::AddMovie {
                id: 147,
                category: Category::Comedy,
                year: 2014
            })
        );
        assert_eq!(parse_line("D", 3).unwrap(), Some(Event::Distribute));
        assert_eq!(
            parse_line("W 3 147", 4).unwrap(),
            Some(Event::Watch { uid: 3, id: 147 })
        );
        assert_eq!(
            parse_line("F 3 2 5 1990", 5).unwrap(),
            Some(Event::FilteredSearch {
                uid: 3,
                category1: Category::Drama,
                category2: Category::Comedy,
                min_year: 1990
            })
        );
        assert_eq!(
            parse_line("T 147", 6).unwrap(),
            Some(Event::TakeOff { id: 147 })
        );
        assert_eq!(parse_line("M", 7).unwrap(), Some(Event::PrintMovies));
        assert_eq!(parse_line("P", 8).unwrap(), Some(Event::PrintUsers));
    }

    #[test]
    fn test_categories_parse_by_name_too() {
        assert_eq!(
            parse_line("A 1 drama 1976", 1).unwrap(),
            Some(Event::AddMovie {
                id: 1,
                category: Category::Drama,
                year: 1976
            })
        );
        assert_eq!(
            parse_line("A 2 SciFi 1979", 2).unwrap(),
            Some(Event::AddMovie {
                id: 2,
                category: Category::SciFi,
                year: 1979
            })
        );
    }

    #[test]
    fn test_unknown_event_is_an_error() {
        let err = parse_line("X 1", 9).unwrap_err();
        assert!(matches!(err, ScriptError::UnknownEvent { line: 9, .. }));
    }

    #[test]
    fn test_missing_and_invalid_arguments() {
        assert!(parse_line("A 147 5", 1).is_err());
        assert!(parse_line("W three 147", 2).is_err());
        assert!(parse_line("A 1 9 2000", 3).is_err()); // category out of range
    }
}
