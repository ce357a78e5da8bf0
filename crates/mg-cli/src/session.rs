//! Session flow: difficulty → pool → draw → spinner → result → history

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mg_core::{Difficulty, GachaResult};
use mg_roulette::{
    SpinOutcome, SpinnerConfig, TerminalSink, build_pool, pick_index, spin,
};

use crate::history;
use crate::paths::DataPaths;
use crate::store;

/// Run catalog diagnostics only. Bootstraps missing files but writes no
/// history; always exits 0 because findings are advisory.
pub fn run_validate(paths: &DataPaths) -> GachaResult<i32> {
    let catalog = store::load_catalog(&paths.rewards)?;
    let issues = catalog.validate();

    if issues.is_empty() {
        println!("Catalog OK: {} rewards, no issues.", catalog.len());
    } else {
        println!("Catalog: {} rewards, {} issue(s):", catalog.len(), issues.len());
        for issue in &issues {
            println!("  - {issue}");
        }
    }
    Ok(0)
}

/// Full draw session. Returns the process exit code: 1 for an unrecognized
/// difficulty, 0 for everything else including "no rewards available" and
/// an interrupted spin.
pub fn run(
    paths: &DataPaths,
    difficulty_arg: Option<&str>,
    seed_override: Option<u64>,
) -> GachaResult<i32> {
    let config = store::load_config(&paths.config)?;
    let catalog = store::load_catalog(&paths.rewards)?;
    history::ensure_history(&paths.history)?;

    for issue in catalog.validate() {
        log::warn!("catalog: {issue}");
    }

    let token = match difficulty_arg {
        Some(arg) => arg.to_string(),
        None => prompt_difficulty()?,
    };
    let difficulty = match token.parse::<Difficulty>() {
        Ok(difficulty) => difficulty,
        Err(_) => {
            eprintln!("Invalid difficulty. Use EASY / MEDIUM / HARD.");
            return Ok(1);
        }
    };

    let pool = build_pool(&catalog.rewards, &config, difficulty);
    if pool.is_empty() {
        println!(
            "{}",
            "No rewards available for current settings.".red().bold()
        );
        return Ok(0);
    }

    let mut spinner_config = config.spinner.sanitized();
    if seed_override.is_some() {
        spinner_config.seed = seed_override;
    }
    let mut rng = match spinner_config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let winner = pick_index(&pool, &mut rng)?;
    let names: Vec<String> = pool.iter().map(|r| r.name.clone()).collect();
    log::debug!(
        "pool of {} at {difficulty}, landing on index {winner}",
        pool.len()
    );

    println!("{}", "Spinning...".cyan().bold());
    let outcome = run_spinner(&names, winner, &spinner_config, &mut rng)?;
    if outcome == SpinOutcome::Interrupted {
        println!("Interrupted.");
        return Ok(0);
    }

    let reward = &pool[winner];
    println!(
        "{}",
        format!("★ Reward: {}  (grade={})", reward.name, reward.grade)
            .green()
            .bold()
    );

    // History is written only after the reward is fully revealed, so an
    // interrupted run leaves the file untouched.
    history::record(&paths.history, difficulty, reward)?;
    Ok(0)
}

/// Raw mode scopes exactly the animation so Ctrl-C arrives as a key event
/// instead of killing the process mid-line.
fn run_spinner(
    names: &[String],
    winner: usize,
    config: &SpinnerConfig,
    rng: &mut ChaCha8Rng,
) -> GachaResult<SpinOutcome> {
    let mut sink = TerminalSink::new();
    let raw = enable_raw_mode().is_ok();
    let outcome = spin(names, winner, config, &mut sink, rng);
    if raw {
        let _ = disable_raw_mode();
    }
    outcome
}

fn prompt_difficulty() -> GachaResult<String> {
    print!("Mission difficulty (EASY/MEDIUM/HARD): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_core::{Catalog, Grade, Reward};
    use mg_roulette::GachaConfig;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_invalid_difficulty_exits_one_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::in_dir(dir.path());

        let code = run(&paths, Some("IMPOSSIBLE"), None).unwrap();
        assert_eq!(code, 1);
        assert_eq!(fs::read_to_string(&paths.history).unwrap(), "[]");
    }

    #[test]
    fn test_empty_pool_exits_zero_and_keeps_history() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::in_dir(dir.path());

        // Lock on, EASY only unlocks BASIC, catalog holds a lone RARE.
        let mut config = GachaConfig::default();
        config.use_difficulty_lock = true;
        store::save_json(&paths.config, &config).unwrap();
        let catalog = Catalog::new(vec![Reward::new("Cafe Drink", Grade::Rare, 1.0)]);
        store::save_json(&paths.rewards, &catalog).unwrap();

        history::ensure_history(&paths.history).unwrap();
        let reward = Reward::new("Old", Grade::Basic, 1.0);
        history::record(&paths.history, Difficulty::Hard, &reward).unwrap();
        let before = fs::read_to_string(&paths.history).unwrap();

        let code = run(&paths, Some("easy"), None).unwrap();
        assert_eq!(code, 0);
        assert_eq!(fs::read_to_string(&paths.history).unwrap(), before);
    }

    #[test]
    fn test_validate_bootstraps_and_exits_zero() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::in_dir(dir.path());

        let code = run_validate(&paths).unwrap();
        assert_eq!(code, 0);
        assert!(paths.rewards.exists());
        assert!(!paths.history.exists());
    }
}
