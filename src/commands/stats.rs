//! Stats report command

use crate::output::print_stats;
use crate::stats::store::StatsStore;
use anyhow::Result;

/// Print the persisted player statistics
///
/// # Errors
///
/// Returns an error if the stats file exists but cannot be read or parsed.
pub fn run_stats(store: &StatsStore) -> Result<()> {
    let stats = store.load()?;
    print_stats(&stats);
    Ok(())
}
