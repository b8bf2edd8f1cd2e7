//! Mock ranking command

use crate::leaderboard::{self, SortBy};
use crate::output::print_ranking;
use crate::stats::store::StatsStore;
use anyhow::Result;

/// Print the mock leaderboard built around the local player's stats
///
/// # Errors
///
/// Returns an error if the stats file exists but cannot be read or parsed.
pub fn run_ranking(store: &StatsStore, sort_by: SortBy) -> Result<()> {
    let stats = store.load()?;
    let players = leaderboard::build(&stats, sort_by);
    print_ranking(&players);
    Ok(())
}
