use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use scoring::dto::{SortColumn, SortDirection};
use scoring::models::{LeaderboardEntry, ScoringConfig};
use scoring::services::{distribution, participant_history, sort_entries, summarize};
use snapshot::{CompetitionSnapshot, JsonFileSource, SnapshotSource, SnapshotValidator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scorecard")]
#[command(about = "Competition leaderboard calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Competition snapshot JSON file, needed by every command but `defaults`
    #[arg(long, env = "SNAPSHOT_PATH")]
    snapshot: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked leaderboard
    Leaderboard {
        #[arg(long, default_value = "rank")]
        sort: SortColumn,

        #[command(flatten)]
        direction: DirectionArgs,

        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },
    /// Print averages and category totals
    Summary,
    /// Print every scored record of one participant
    History {
        #[arg(long)]
        participant: String,
    },
    /// Check the snapshot for errors and data-quality gaps
    Validate,
    /// Print the default scoring settings as JSON
    Defaults,
}

#[derive(clap::Args)]
#[group(multiple = false)]
struct DirectionArgs {
    #[arg(long)]
    desc: bool,

    #[arg(long)]
    asc: bool,
}

impl DirectionArgs {
    fn direction(&self) -> SortDirection {
        if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("scorecard={},snapshot={},scoring={}", log_level, log_level, log_level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let defaults = ScoringConfig::default();

    if let Commands::Defaults = cli.command {
        println!("{}", serde_json::to_string_pretty(&defaults)?);
        return Ok(());
    }

    let path = cli
        .snapshot
        .context("--snapshot or SNAPSHOT_PATH is required for this command")?;
    let source = JsonFileSource::new(path);
    let snapshot = source
        .load()
        .await
        .with_context(|| format!("Failed to load snapshot from {}", source.describe()))?;

    match cli.command {
        Commands::Leaderboard {
            sort,
            direction,
            limit,
            json,
        } => {
            let mut entries = compute(&snapshot, &defaults)?;
            sort_entries(&mut entries, sort, direction.direction());
            if let Some(limit) = limit {
                entries.truncate(limit);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_table(&entries);
            }
        }
        Commands::Summary => {
            let entries = compute(&snapshot, &defaults)?;
            let summary = summarize(&entries);
            let totals = distribution(&entries);

            println!(
                "Participants: {} ({} scored)",
                summary.total_participants, summary.scored_participants
            );
            println!(
                "Averages: physical {} | mental {} | extra {} | total {}",
                summary.average_physical,
                summary.average_mental,
                summary.average_extra,
                summary.average_total
            );
            println!("Best total: {}", summary.max_total);
            println!(
                "Points earned: physical {} | mental {} | extra {}",
                totals.physical, totals.mental, totals.extra
            );
        }
        Commands::History { participant } => {
            let config = snapshot.scoring_config(&defaults)?;
            let history = participant_history(
                &snapshot.participants,
                &participant,
                &snapshot.scores,
                &snapshot.games,
                &config,
            )
            .with_context(|| format!("Cannot build history for '{participant}'"))?;

            if history.is_empty() {
                tracing::warn!("Participant '{}' has no scores yet", participant);
            }
            for point in &history {
                println!(
                    "{}  {:<12} physical {:>4}  mental {:>4}  extra {:>4}  total {:>5}",
                    point.recorded_at.format("%Y-%m-%d %H:%M"),
                    point.score_id,
                    point.physical_score,
                    point.mental_score,
                    point.extra_score,
                    point.total_score
                );
            }
        }
        Commands::Validate => {
            tracing::info!("Validating snapshot {}...", source.describe());
            let report = SnapshotValidator::validate(&snapshot, &defaults)?;
            report.log_warnings();
            tracing::info!(
                "✓ Validation successful ({} warning(s))",
                report.warnings.len()
            );
        }
        Commands::Defaults => {}
    }

    Ok(())
}

fn compute(
    snapshot: &CompetitionSnapshot,
    defaults: &ScoringConfig,
) -> anyhow::Result<Vec<LeaderboardEntry>> {
    let config = snapshot
        .scoring_config(defaults)
        .context("Stored scoring settings are invalid")?;
    Ok(snapshot.leaderboard(&config)?)
}

fn print_table(entries: &[LeaderboardEntry]) {
    println!(
        "{:>4}  {:<28} {:>4} {:>8} {:>8} {:>8} {:>8}",
        "#", "Name", "Year", "Physical", "Mental", "Extra", "Total"
    );
    for entry in entries {
        println!(
            "{:>4}  {:<28} {:>4} {:>8} {:>8} {:>8} {:>8}",
            entry.rank,
            entry.name,
            entry.year,
            entry.physical_score,
            entry.mental_score,
            entry.extra_score_final,
            entry.total_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_needs_no_snapshot() {
        let cli = Cli::try_parse_from(["scorecard", "defaults"]).unwrap();
        assert!(matches!(cli.command, Commands::Defaults));
    }

    #[test]
    fn test_snapshot_flag_is_global_to_commands() {
        let cli = Cli::try_parse_from([
            "scorecard",
            "--snapshot",
            "data.json",
            "leaderboard",
            "--sort",
            "total",
            "--desc",
        ])
        .unwrap();
        assert_eq!(cli.snapshot, Some(PathBuf::from("data.json")));
        assert!(matches!(
            cli.command,
            Commands::Leaderboard {
                sort: SortColumn::Total,
                ..
            }
        ));
    }
}
