use serde::{Deserialize, Serialize};

/// How much to trust the schedule handed to the analyzer.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleCheck {
    /// Reject asymmetric schedules, self games and overbooked teams.
    #[default]
    Strict,
    /// Take the schedule as given.
    Trust,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schedule_check: ScheduleCheck,
    /// Analyze teams on the rayon thread pool.
    pub parallel: bool,
}

impl Config {
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
    pub fn schedule_check(mut self, schedule_check: ScheduleCheck) -> Self {
        self.schedule_check = schedule_check;
        self
    }
}
