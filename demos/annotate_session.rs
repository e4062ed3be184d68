//! Print the boards for one exported session
//!
//! Usage:
//!   annotate_session <snapshot_root> <year> <round> <session> [--watch <updates>]
//!
//! Example:
//!   annotate_session test-data 2024 1 R
//!   RUST_LOG=pitboard=debug annotate_session snapshots 2024 6 S --watch 3

use anyhow::{Context, bail};
use futures::StreamExt;
use pitboard::{
    SessionBoard, SessionKey, SessionKind, SessionSource, SessionWatcher, SnapshotDirectory,
    WatchConfig,
};
use std::env;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn print_board(board: &SessionBoard) {
    println!("=== {} {} ===", board.event.year, board.event.event_name);

    println!("\nFastest laps:");
    for (position, row) in board.fastest_laps.iter().enumerate() {
        println!("  {:>2}. {:<4} {} (lap {})", position + 1, row.driver, row.lap_time, row.lap_number);
    }

    println!("\nTrack status:");
    for row in &board.track_status {
        println!("  {:>12}  {}", row.time, row.description);
    }

    println!("\nRace control:");
    for annotation in &board.race_control {
        println!(
            "  [{:<13}] {:<20} {:<4} #{:<3} lap {:<7} {}",
            annotation.category,
            annotation.penalty_type,
            annotation.driver_label(),
            annotation.car_number_label(),
            annotation.lap_label(),
            annotation.original_text
        );
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        bail!("usage: {} <snapshot_root> <year> <round> <session> [--watch <updates>]", args[0]);
    }

    let year: u16 = args[2].parse().context("year must be a number")?;
    let round: u8 = args[3].parse().context("round must be a number")?;
    let kind = SessionKind::from_code(&args[4])
        .with_context(|| format!("unknown session code '{}'", args[4]))?;
    let key = SessionKey::new(year, round, kind)?;

    let watch_updates = match args.get(5).map(String::as_str) {
        Some("--watch") => {
            let raw = args.get(6).context("--watch needs an update count")?;
            Some(raw.parse::<usize>().context("update count must be a number")?)
        }
        Some(other) => bail!("unexpected argument '{}'", other),
        None => None,
    };

    let mut source = SnapshotDirectory::new(&args[1]);

    let Some(updates) = watch_updates else {
        let snapshot = source
            .load(&key)
            .await?
            .with_context(|| format!("no snapshot for {} under {}", key, args[1]))?;
        print_board(&SessionBoard::build(&snapshot));
        return Ok(());
    };

    let config = WatchConfig { refresh_interval: Duration::from_secs(5), ..WatchConfig::default() };
    let channels = SessionWatcher::spawn(source, key, config);
    let mut boards = channels.stream().take(updates);

    while let Some(board) = boards.next().await {
        match board {
            Some(board) => print_board(&board),
            None => println!("Waiting for {} data", key),
        }
    }

    channels.cancel.cancel();
    Ok(())
}
