//! `pocket roll <die>`

use anyhow::Result;
use pocket_core::{Die, roll};

use crate::App;

/// Rolls `die`, stores it in the persisted history, and shows recent results.
pub fn run(app: &App, die: Die) -> Result<String> {
    run_seeded(app, die, rand::random::<u64>())
}

pub fn run_seeded(app: &App, die: Die, seed: u64) -> Result<String> {
    let result = roll(die, app.rng.as_ref(), seed);

    let mut history = app.roll_history();
    history.record(result);
    app.save_roll_history(&history)?;

    tracing::debug!("Rolled {} -> {}", die, result.value);

    let recent = history
        .iter()
        .map(|r| format!("{}:{}", r.die, r.value))
        .collect::<Vec<_>>()
        .join(" ");
    Ok(format!("{die} -> {}\nRecent: {recent}", result.value))
}

#[cfg(test)]
mod tests {
    use pocket_core::RollHistory;

    use super::*;
    use crate::commands::testing;

    #[test]
    fn rolls_are_recorded_newest_first() {
        let app = testing::app();
        run_seeded(&app, Die::D20, 1).unwrap();
        let out = run_seeded(&app, Die::D4, 2).unwrap();

        let history = app.roll_history();
        assert_eq!(history.len(), 2);
        let latest = history.latest().unwrap();
        assert_eq!(latest.die, Die::D4);
        assert!((1..=4).contains(&latest.value));
        assert!(out.starts_with(&format!("d4 -> {}", latest.value)));
    }

    #[test]
    fn history_is_capped() {
        let app = testing::app();
        for seed in 0..15 {
            run_seeded(&app, Die::D6, seed).unwrap();
        }
        assert_eq!(app.roll_history().len(), RollHistory::CAPACITY);
    }
}
