use crate::common::TeamIndex;
use crate::division::Division;
use crate::flow::{Capacity, FlowError, FlowNetwork, MaxFlow, Vertex};

/// Flow network asking whether every team other than `candidate` can be kept
/// at or below the candidate's best possible win total.
///
/// Game vertices take their games from the source and hand each win to one
/// of the two teams involved; a team vertex can pass at most
/// `best - wins` wins on to the sink. The candidate has no vertex at all.
#[derive(Clone, Debug)]
pub struct EliminationNetwork {
    network: FlowNetwork,
    source: Vertex,
    sink: Vertex,
    candidate: TeamIndex,
    team_vertices: Vec<Option<Vertex>>,
    scheduled: i64,
}

impl EliminationNetwork {
    pub fn build(division: &Division, candidate: TeamIndex) -> Self {
        let n = division.number_of_teams();
        assert!(candidate < n, "team {} is not in a division of {}", candidate, n);
        let others = n - 1;
        let pairs = others * others.saturating_sub(1) / 2;
        let mut network = FlowNetwork::with_capacity(pairs + others + 2, 3 * pairs + others);
        let source = network.add_vertex();
        let sink = network.add_vertex();

        let best = division.team(candidate).best_possible_wins() as i64;
        let team_vertices: Vec<Option<Vertex>> = (0..n)
            .map(|i| {
                if i == candidate {
                    return None;
                }
                let vertex = network.add_vertex();
                let room = (best - i64::from(division.team(i).wins)).max(0);
                network.add_edge(vertex, sink, Capacity::Finite(room));
                Some(vertex)
            })
            .collect();

        let mut scheduled = 0;
        for i in 0..n {
            let Some(team_i) = team_vertices[i] else {
                continue;
            };
            for j in (i + 1)..n {
                let Some(team_j) = team_vertices[j] else {
                    continue;
                };
                let games = i64::from(division.games_between(i, j));
                let game = network.add_vertex();
                network.add_edge(source, game, Capacity::Finite(games));
                network.add_edge(game, team_i, Capacity::Unbounded);
                network.add_edge(game, team_j, Capacity::Unbounded);
                scheduled += games;
            }
        }

        EliminationNetwork {
            network,
            source,
            sink,
            candidate,
            team_vertices,
            scheduled,
        }
    }
    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }
    pub fn source(&self) -> Vertex {
        self.source
    }
    pub fn sink(&self) -> Vertex {
        self.sink
    }
    /// Solves a copy of the network, so team vertices stay queryable against
    /// the returned cut.
    pub fn max_flow(&self) -> Result<MaxFlow, FlowError> {
        MaxFlow::solve(self.network.clone(), self.source, self.sink)
    }
    pub fn candidate(&self) -> TeamIndex {
        self.candidate
    }
    /// `None` for the candidate itself.
    pub fn team_vertex(&self, team: TeamIndex) -> Option<Vertex> {
        self.team_vertices.get(team).copied().flatten()
    }
    /// Games left among the teams other than the candidate, i.e. the
    /// capacity leaving the source.
    pub fn scheduled_games(&self) -> i64 {
        self.scheduled
    }
}
