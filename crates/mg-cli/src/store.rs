//! Config and catalog stores — flat JSON files with default bootstrap

use std::fs;
use std::path::Path;

use serde::Serialize;

use mg_core::{Catalog, GachaResult, Grade, Reward};
use mg_roulette::GachaConfig;

/// Serialize `value` as pretty JSON to `path`
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> GachaResult<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Load the config file, creating a documented default when missing.
///
/// A malformed file falls back to defaults with a warning and is left
/// untouched on disk, so a typo never blocks a run or clobbers the file.
pub fn load_config(path: &Path) -> GachaResult<GachaConfig> {
    if !path.exists() {
        let config = GachaConfig::default();
        save_json(path, &config)?;
        log::info!("created default config at {}", path.display());
        return Ok(config);
    }

    let raw = fs::read_to_string(path)?;
    match serde_json::from_str(&raw) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!(
                "config {} is malformed ({err}); falling back to defaults",
                path.display()
            );
            Ok(GachaConfig::default())
        }
    }
}

/// Load the catalog, creating the sample catalog when missing.
///
/// Ids are normalized on every load; when backfill changed anything the
/// file is rewritten so the assigned ids stay stable from then on.
pub fn load_catalog(path: &Path) -> GachaResult<Catalog> {
    let mut catalog = if path.exists() {
        let raw = fs::read_to_string(path)?;
        match serde_json::from_str(&raw) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::warn!(
                    "catalog {} is malformed ({err}); treating it as empty",
                    path.display()
                );
                Catalog::default()
            }
        }
    } else {
        let sample = sample_catalog();
        save_json(path, &sample)?;
        log::info!("created sample catalog at {}", path.display());
        sample
    };

    if catalog.normalize_ids() {
        save_json(path, &catalog)?;
        log::info!("backfilled reward ids in {}", path.display());
    }
    Ok(catalog)
}

/// Starter rewards written on first run
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Reward::new("Short Video (5m)", Grade::Basic, 3.0),
        Reward::new("Game (30m)", Grade::Basic, 2.0),
        Reward::new("Music Break", Grade::Basic, 3.0),
        Reward::new("Cafe Drink", Grade::Rare, 1.0),
        Reward::new("Movie Episode", Grade::Rare, 1.0),
        Reward::new("Delivery Meal", Grade::Epic, 1.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_is_bootstrapped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = load_config(&path).unwrap();
        assert_eq!(config, GachaConfig::default());
        assert!(path.exists());

        // Second load reads the file it just wrote.
        let again = load_config(&path).unwrap();
        assert_eq!(config, again);
    }

    #[test]
    fn test_malformed_config_falls_back_without_clobbering() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config, GachaConfig::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn test_missing_catalog_gets_sample_with_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rewards.json");

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.rewards.iter().all(|r| !r.id.is_empty()));
    }

    #[test]
    fn test_backfilled_ids_are_persisted_and_stable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rewards.json");
        fs::write(
            &path,
            r#"[{"name":"A","grade":"BASIC"},{"name":"B","grade":"RARE"}]"#,
        )
        .unwrap();

        let first = load_catalog(&path).unwrap();
        let first_ids: Vec<String> = first.rewards.iter().map(|r| r.id.clone()).collect();
        assert!(first_ids.iter().all(|id| !id.is_empty()));

        let second = load_catalog(&path).unwrap();
        let second_ids: Vec<String> = second.rewards.iter().map(|r| r.id.clone()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_malformed_catalog_reads_empty_and_keeps_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rewards.json");
        fs::write(&path, "42").unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "42");
    }
}
