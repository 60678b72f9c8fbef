//! Reader for the plain-text division format:
//!
//! ```text
//! 4
//! Atlanta       83 71  8  0 1 6 1
//! Philadelphia  80 79  3  1 0 0 2
//! New_York      78 78  6  6 0 0 0
//! Montreal      77 82  3  1 2 0 0
//! ```
//!
//! The first line holds the number of teams `n`. Each following line holds a
//! team name, its wins, losses and remaining games, then `n` counts of games
//! left against every team of the division, in division order. Blank lines
//! are skipped.

use std::str::FromStr;

use thiserror::Error;

use crate::common::{Error, Team};
use crate::division::Division;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("missing team count")]
    MissingCount,
    #[error("`{0}` is not a valid team count")]
    BadCount(String),
    #[error("expected {expected} teams, found {found}")]
    MissingTeams { expected: usize, found: usize },
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("`{0}` is not a non-negative integer")]
    BadNumber(String),
    #[error("unexpected content after the last team")]
    TrailingContent,
}

fn number(line: usize, field: &str) -> Result<u32, ParseError> {
    field.parse().map_err(|_| ParseError {
        line,
        kind: ParseErrorKind::BadNumber(field.to_owned()),
    })
}

pub fn parse_division(text: &str) -> Result<Division, Error> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((count_line, count)) = lines.next() else {
        return Err(ParseError {
            line: 1,
            kind: ParseErrorKind::MissingCount,
        }
        .into());
    };
    let n: usize = count.parse().map_err(|_| ParseError {
        line: count_line,
        kind: ParseErrorKind::BadCount(count.to_owned()),
    })?;

    // the count is untrusted until the team lines are there
    let expected_fields = n.saturating_add(4);
    let mut teams = Vec::new();
    let mut games = Vec::new();
    for found in 0..n {
        let Some((line, content)) = lines.next() else {
            return Err(ParseError {
                line: text.lines().count() + 1,
                kind: ParseErrorKind::MissingTeams { expected: n, found },
            }
            .into());
        };
        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.len() != expected_fields {
            return Err(ParseError {
                line,
                kind: ParseErrorKind::FieldCount {
                    expected: expected_fields,
                    found: fields.len(),
                },
            }
            .into());
        }
        teams.push(Team::new(
            fields[0],
            number(line, fields[1])?,
            number(line, fields[2])?,
            number(line, fields[3])?,
        ));
        let row = fields[4..]
            .iter()
            .map(|field| number(line, field))
            .collect::<Result<Vec<u32>, _>>()?;
        games.push(row);
    }
    if let Some((line, _)) = lines.next() {
        return Err(ParseError {
            line,
            kind: ParseErrorKind::TrailingContent,
        }
        .into());
    }
    Division::new(teams, games)
}

impl FromStr for Division {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_division(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAMS4: &str = "4
Atlanta       83 71  8  0 1 6 1
Philadelphia  80 79  3  1 0 0 2
New_York      78 78  6  6 0 0 0
Montreal      77 82  3  1 2 0 0
";

    fn parse_error(text: &str) -> ParseError {
        match text.parse::<Division>() {
            Err(Error::Parse(err)) => err,
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse() {
        let division: Division = TEAMS4.parse().unwrap();
        assert_eq!(division.number_of_teams(), 4);
        assert_eq!(division.wins("New_York"), Ok(78));
        assert_eq!(division.losses("Montreal"), Ok(82));
        assert_eq!(division.remaining("Atlanta"), Ok(8));
        assert_eq!(division.against("Atlanta", "New_York"), Ok(6));
        assert!(division.check_schedule().is_ok());
    }

    #[test]
    fn test_blank_lines_and_padding() {
        let text = "\n  2  \n\n a 1 2 3 0 3\n\n b 4 5 6 3 0\n\n";
        let division: Division = text.parse().unwrap();
        assert_eq!(division.teams().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(division.against("b", "a"), Ok(3));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_error("").kind, ParseErrorKind::MissingCount);
        assert_eq!(
            parse_error("four\n"),
            ParseError {
                line: 1,
                kind: ParseErrorKind::BadCount("four".to_owned())
            }
        );
        assert_eq!(
            parse_error("2\na 1 2 3 0 3\n"),
            ParseError {
                line: 3,
                kind: ParseErrorKind::MissingTeams {
                    expected: 2,
                    found: 1
                }
            }
        );
        assert_eq!(
            parse_error("1\na 1 2 3\n"),
            ParseError {
                line: 2,
                kind: ParseErrorKind::FieldCount {
                    expected: 5,
                    found: 4
                }
            }
        );
        assert_eq!(
            parse_error("1\na 1 -2 3 0\n"),
            ParseError {
                line: 2,
                kind: ParseErrorKind::BadNumber("-2".to_owned())
            }
        );
        assert_eq!(
            parse_error("1\na 1 2 3 0\nb\n").kind,
            ParseErrorKind::TrailingContent
        );
    }

    #[test]
    fn test_huge_team_count() {
        assert_eq!(
            parse_error("1000000000000000000\n"),
            ParseError {
                line: 2,
                kind: ParseErrorKind::MissingTeams {
                    expected: 1_000_000_000_000_000_000,
                    found: 0
                }
            }
        );
        let text = format!("{}\na 1 2 3 0\n", usize::MAX);
        assert_eq!(
            parse_error(&text).kind,
            ParseErrorKind::FieldCount {
                expected: usize::MAX,
                found: 5
            }
        );
    }

    #[test]
    fn test_division_errors_pass_through() {
        assert_eq!(
            "0\n".parse::<Division>().unwrap_err(),
            Error::EmptyDivision
        );
        assert_eq!(
            "2\na 1 1 0 0 0\na 1 1 0 0 0\n".parse::<Division>().unwrap_err(),
            Error::DuplicateTeam("a".to_owned())
        );
    }

    #[test]
    fn test_error_message() {
        let err = "1\na x 2 3 0\n".parse::<Division>().unwrap_err();
        assert_eq!(err.to_string(), "line 2: `x` is not a non-negative integer");
    }
}
