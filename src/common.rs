use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flow::FlowError;
use crate::schedule::ParseError;

/// Position of a team in its division, `0..n`.
pub type TeamIndex = usize;

#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub remaining: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, wins: u32, losses: u32, remaining: u32) -> Self {
        Team {
            name: name.into(),
            wins,
            losses,
            remaining,
        }
    }
    /// Wins the team ends up with if it takes every remaining game.
    pub fn best_possible_wins(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.remaining)
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{} ({} left)",
            self.name, self.wins, self.losses, self.remaining
        )
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown team `{0}`")]
    UnknownTeam(String),
    #[error("a division needs at least one team")]
    EmptyDivision,
    #[error("team `{0}` appears more than once")]
    DuplicateTeam(String),
    #[error("schedule has {rows} rows for {expected} teams")]
    ScheduleRows { rows: usize, expected: usize },
    #[error("schedule row {row} has {len} entries, expected {expected}")]
    ScheduleShape {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("team `{0}` has games scheduled against itself")]
    SelfGames(String),
    #[error("`{first}` plays `{second}` {forward} times but `{second}` plays `{first}` {backward} times")]
    AsymmetricSchedule {
        first: String,
        second: String,
        forward: u32,
        backward: u32,
    },
    #[error("`{team}` has {remaining} games remaining but {scheduled} scheduled within the division")]
    RemainingTooFew {
        team: String,
        remaining: u32,
        scheduled: u64,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("flow network defect: {0}")]
    Network(#[from] FlowError),
}
