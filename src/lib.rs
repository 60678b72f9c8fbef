//! Decides which teams of a division can no longer finish in first place.
//!
//! A team is eliminated when no outcome of the remaining games lets it end
//! the season with at least as many wins as every other team. Besides the
//! obvious case, where some team already has more wins than the candidate
//! can reach, elimination is decided with a max-flow over the games left
//! among the other teams; the minimum cut then names the teams that prove
//! it.
//!
//! ```
//! use division_elimination::{Division, Elimination};
//!
//! let division: Division = "4
//! Atlanta       83 71  8  0 1 6 1
//! Philadelphia  80 79  3  1 0 0 2
//! New_York      78 78  6  6 0 0 0
//! Montreal      77 82  3  1 2 0 0"
//!     .parse()
//!     .unwrap();
//! let elimination = Elimination::analyze(division).unwrap();
//! assert!(elimination.is_eliminated("Philadelphia").unwrap());
//! assert_eq!(
//!     elimination.certificate_of_elimination("Philadelphia").unwrap(),
//!     Some(&["Atlanta".to_owned(), "New_York".to_owned()][..])
//! );
//! ```

pub mod common;
pub mod config;
pub mod division;
pub mod elimination;
pub mod flow;
pub mod network;
pub mod schedule;

pub use common::{Error, Team, TeamIndex};
pub use config::{Config, ScheduleCheck};
pub use division::Division;
pub use elimination::{analyze_team, Elimination, EliminationResult, Verdict};
pub use flow::{Capacity, FlowError, FlowNetwork, MaxFlow};
pub use network::EliminationNetwork;
pub use schedule::{parse_division, ParseError, ParseErrorKind};
