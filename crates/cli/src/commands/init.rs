//! `chainbuild init`: write a starter configuration.

use chainbuild_config::BuildConfig;
use std::path::Path;

use super::CommandResult;

pub async fn run(config_path: &Path) -> CommandResult {
    if config_path.exists() {
        println!("⚠️  {} already exists, leaving it untouched", config_path.display());
        return Ok(());
    }

    std::fs::write(config_path, BuildConfig::default_toml())
        .map_err(|e| format!("Failed to write {}: {e}", config_path.display()))?;

    println!("✅ Wrote {}", config_path.display());
    println!("   Next: list your sources in <node>/<node>.files, then run `chainbuild build`");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_parseable_starter_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chainbuild.toml");

        run(&path).await.unwrap();
        let config = BuildConfig::load_from(&path).unwrap();
        assert_eq!(config.steps.len(), 1);
    }

    #[tokio::test]
    async fn existing_config_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chainbuild.toml");
        std::fs::write(&path, "# hand-written\n").unwrap();

        run(&path).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# hand-written\n");
    }
}
