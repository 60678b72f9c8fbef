use std::collections::HashMap;

use crate::common::{Error, Team, TeamIndex};

/// Read-only snapshot of a division: the teams' records and the games still
/// to be played between every pair of them.
#[derive(Debug, Clone)]
pub struct Division {
    teams: Vec<Team>,
    games: Vec<Vec<u32>>,
    index: HashMap<String, TeamIndex>,
}

impl Division {
    /// Checks the shape of the input only; see [`Division::check_schedule`]
    /// for the consistency of the schedule itself.
    pub fn new(teams: Vec<Team>, games: Vec<Vec<u32>>) -> Result<Self, Error> {
        if teams.is_empty() {
            return Err(Error::EmptyDivision);
        }
        let n = teams.len();
        if games.len() != n {
            return Err(Error::ScheduleRows {
                rows: games.len(),
                expected: n,
            });
        }
        if let Some((row, line)) = games.iter().enumerate().find(|(_, line)| line.len() != n) {
            return Err(Error::ScheduleShape {
                row,
                len: line.len(),
                expected: n,
            });
        }
        let mut index = HashMap::with_capacity(n);
        for (i, team) in teams.iter().enumerate() {
            if index.insert(team.name.clone(), i).is_some() {
                return Err(Error::DuplicateTeam(team.name.clone()));
            }
        }
        Ok(Division {
            teams,
            games,
            index,
        })
    }
    /// Zero diagonal, symmetric matrix, and no team with fewer remaining
    /// games than it has scheduled inside the division. Remaining games may
    /// exceed the row sum: they can include games against other divisions.
    pub fn check_schedule(&self) -> Result<(), Error> {
        for (i, team) in self.teams.iter().enumerate() {
            if self.games[i][i] != 0 {
                return Err(Error::SelfGames(team.name.clone()));
            }
            for j in (i + 1)..self.teams.len() {
                let (forward, backward) = (self.games[i][j], self.games[j][i]);
                if forward != backward {
                    return Err(Error::AsymmetricSchedule {
                        first: team.name.clone(),
                        second: self.teams[j].name.clone(),
                        forward,
                        backward,
                    });
                }
            }
            let scheduled: u64 = self.games[i].iter().map(|&g| u64::from(g)).sum();
            if u64::from(team.remaining) < scheduled {
                return Err(Error::RemainingTooFew {
                    team: team.name.clone(),
                    remaining: team.remaining,
                    scheduled,
                });
            }
        }
        Ok(())
    }
    pub fn number_of_teams(&self) -> usize {
        self.teams.len()
    }
    /// Team names in division order.
    pub fn teams(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.iter().map(|team| team.name.as_str())
    }
    pub fn records(&self) -> &[Team] {
        &self.teams
    }
    pub fn team(&self, i: TeamIndex) -> &Team {
        &self.teams[i]
    }
    pub fn index_of(&self, name: &str) -> Result<TeamIndex, Error> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownTeam(name.to_owned()))
    }
    pub fn wins(&self, name: &str) -> Result<u32, Error> {
        Ok(self.teams[self.index_of(name)?].wins)
    }
    pub fn losses(&self, name: &str) -> Result<u32, Error> {
        Ok(self.teams[self.index_of(name)?].losses)
    }
    pub fn remaining(&self, name: &str) -> Result<u32, Error> {
        Ok(self.teams[self.index_of(name)?].remaining)
    }
    pub fn against(&self, first: &str, second: &str) -> Result<u32, Error> {
        Ok(self.games_between(self.index_of(first)?, self.index_of(second)?))
    }
    pub fn games_between(&self, i: TeamIndex, j: TeamIndex) -> u32 {
        self.games[i][j]
    }
    /// Team with the most wins so far. Ties go to the alphabetically first
    /// name, so the choice does not depend on the order of the input.
    pub fn leader(&self) -> TeamIndex {
        self.teams
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.wins.cmp(&b.wins).then_with(|| b.name.cmp(&a.name)))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
