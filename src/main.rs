use std::fs;
use std::path::PathBuf;

use clap::Parser;
use division_elimination::{Config, Division, Elimination, ScheduleCheck, Verdict};
use log::info;
use serde::Serialize;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(author, version, about = "Find the teams that can no longer finish first", long_about = None)]
struct Cli {
    /// Division file: team count, then `name wins losses remaining g0 .. gn-1` per team
    #[arg(value_name = "FILE")]
    division: PathBuf,
    /// Analyze teams in parallel
    #[arg(long)]
    parallel: bool,
    /// Skip the schedule consistency checks
    #[arg(long)]
    trust_schedule: bool,
    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TeamReport<'a> {
    team: &'a str,
    wins: u32,
    losses: u32,
    remaining: u32,
    verdict: Verdict,
    certificate: Option<&'a [String]>,
}

fn report(elimination: &Elimination) -> Vec<TeamReport<'_>> {
    elimination
        .results()
        .zip(elimination.division().records())
        .map(|((team, result), record)| TeamReport {
            team,
            wins: record.wins,
            losses: record.losses,
            remaining: record.remaining,
            verdict: result.verdict(),
            certificate: result.certificate(),
        })
        .collect()
}

/// One line per team, in division order.
fn render(elimination: &Elimination) -> String {
    let mut out = String::new();
    for (team, result) in elimination.results() {
        let line = match result.certificate() {
            Some(certificate) => format!(
                "{} is eliminated by the subset R = {{ {} }}",
                team,
                certificate.join(" ")
            ),
            None => format!("{} is not eliminated", team),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn main() -> CliResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::default()
        .parallel(cli.parallel)
        .schedule_check(if cli.trust_schedule {
            ScheduleCheck::Trust
        } else {
            ScheduleCheck::Strict
        });
    let text = fs::read_to_string(&cli.division)?;
    let division: Division = text.parse()?;
    info!(
        "loaded {} teams from {}",
        division.number_of_teams(),
        cli.division.display()
    );
    let elimination = Elimination::with_config(division, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report(&elimination))?);
        return Ok(());
    }
    print!("{}", render(&elimination));
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn teams4() -> Elimination {
        let division: Division = include_str!("../data/teams4.txt").parse().unwrap();
        Elimination::analyze(division).unwrap()
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render(&teams4()),
            "Atlanta is not eliminated
Philadelphia is eliminated by the subset R = { Atlanta New_York }
New_York is not eliminated
Montreal is eliminated by the subset R = { Atlanta }
"
        );
    }

    #[test]
    fn test_json_report() {
        let elimination = teams4();
        let value = serde_json::to_value(report(&elimination)).unwrap();
        let teams = value.as_array().unwrap();
        assert_eq!(teams.len(), 4);
        assert_eq!(
            teams[0],
            json!({
                "team": "Atlanta",
                "wins": 83,
                "losses": 71,
                "remaining": 8,
                "verdict": "contender",
                "certificate": null
            })
        );
        assert_eq!(
            teams[1],
            json!({
                "team": "Philadelphia",
                "wins": 80,
                "losses": 79,
                "remaining": 3,
                "verdict": "eliminated_by_min_cut",
                "certificate": ["Atlanta", "New_York"]
            })
        );
        assert_eq!(teams[3]["verdict"], "trivially_eliminated");
        assert_eq!(teams[3]["certificate"], json!(["Atlanta"]));
    }
}
