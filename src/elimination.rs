use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::{Error, TeamIndex};
use crate::config::{Config, ScheduleCheck};
use crate::division::Division;
use crate::flow::FlowError;
use crate::network::EliminationNetwork;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Some outcome of the remaining games leaves the team tied for first or
    /// better.
    Contender,
    /// Another team already has more wins than this one can reach.
    TriviallyEliminated,
    /// Eliminated by the teams on the source side of a minimum cut.
    EliminatedByMinCut,
}

#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct EliminationResult {
    verdict: Verdict,
    certificate: Option<Vec<String>>,
}

impl EliminationResult {
    fn contender() -> Self {
        EliminationResult {
            verdict: Verdict::Contender,
            certificate: None,
        }
    }
    fn trivially_eliminated(leader: String) -> Self {
        EliminationResult {
            verdict: Verdict::TriviallyEliminated,
            certificate: Some(vec![leader]),
        }
    }
    fn eliminated_by_min_cut(certificate: Vec<String>) -> Self {
        EliminationResult {
            verdict: Verdict::EliminatedByMinCut,
            certificate: Some(certificate),
        }
    }
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
    pub fn is_eliminated(&self) -> bool {
        self.verdict != Verdict::Contender
    }
    /// Teams that together prove the elimination, in division order.
    pub fn certificate(&self) -> Option<&[String]> {
        self.certificate.as_deref()
    }
}

/// Decides elimination for a single team.
pub fn analyze_team(
    division: &Division,
    candidate: TeamIndex,
) -> Result<EliminationResult, FlowError> {
    let team = division.team(candidate);
    let leader = division.team(division.leader());
    if team.best_possible_wins() < u64::from(leader.wins) {
        debug!(
            "{} can reach {} wins but {} already has {}",
            team.name,
            team.best_possible_wins(),
            leader.name,
            leader.wins
        );
        return Ok(EliminationResult::trivially_eliminated(leader.name.clone()));
    }

    let built = EliminationNetwork::build(division, candidate);
    let max_flow = built.max_flow()?;
    let certificate: Vec<String> = (0..division.number_of_teams())
        .filter(|&k| {
            built
                .team_vertex(k)
                .map_or(false, |vertex| max_flow.in_source_side(vertex))
        })
        .map(|k| division.team(k).name.clone())
        .collect();

    if certificate.is_empty() {
        debug_assert_eq!(max_flow.value(), built.scheduled_games());
        debug!(
            "{} is alive: all {} remaining games fit under {} wins",
            team.name,
            built.scheduled_games(),
            team.best_possible_wins()
        );
        return Ok(EliminationResult::contender());
    }
    debug!(
        "{} is eliminated: only {} of {} games fit, certificate {:?}",
        team.name,
        max_flow.value(),
        built.scheduled_games(),
        certificate
    );
    Ok(EliminationResult::eliminated_by_min_cut(certificate))
}

/// Elimination verdicts for every team of a division.
#[derive(Clone, Debug)]
pub struct Elimination {
    division: Division,
    results: Vec<EliminationResult>,
}

impl Elimination {
    pub fn analyze(division: Division) -> Result<Self, Error> {
        Self::with_config(division, &Config::default())
    }
    pub fn with_config(division: Division, config: &Config) -> Result<Self, Error> {
        if config.schedule_check == ScheduleCheck::Strict {
            division.check_schedule()?;
        }
        let n = division.number_of_teams();
        let analyze = |candidate| analyze_team(&division, candidate);
        let results: Vec<EliminationResult> = if config.parallel {
            (0..n).into_par_iter().map(analyze).collect::<Result<_, _>>()?
        } else {
            (0..n).map(analyze).collect::<Result<_, _>>()?
        };
        debug!(
            "{} of {} teams eliminated",
            results.iter().filter(|r| r.is_eliminated()).count(),
            n
        );
        Ok(Elimination { division, results })
    }
    pub fn division(&self) -> &Division {
        &self.division
    }
    pub fn number_of_teams(&self) -> usize {
        self.division.number_of_teams()
    }
    pub fn teams(&self) -> impl Iterator<Item = &str> + '_ {
        self.division.teams()
    }
    pub fn wins(&self, team: &str) -> Result<u32, Error> {
        self.division.wins(team)
    }
    pub fn losses(&self, team: &str) -> Result<u32, Error> {
        self.division.losses(team)
    }
    pub fn remaining(&self, team: &str) -> Result<u32, Error> {
        self.division.remaining(team)
    }
    pub fn against(&self, first: &str, second: &str) -> Result<u32, Error> {
        self.division.against(first, second)
    }
    pub fn result(&self, team: &str) -> Result<&EliminationResult, Error> {
        Ok(&self.results[self.division.index_of(team)?])
    }
    pub fn is_eliminated(&self, team: &str) -> Result<bool, Error> {
        Ok(self.result(team)?.is_eliminated())
    }
    pub fn certificate_of_elimination(&self, team: &str) -> Result<Option<&[String]>, Error> {
        Ok(self.result(team)?.certificate())
    }
    /// Every team with its result, in division order.
    pub fn results(&self) -> impl Iterator<Item = (&str, &EliminationResult)> + '_ {
        self.division.teams().zip(self.results.iter())
    }
}
