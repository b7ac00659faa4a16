//! Subcommand implementations and the wiring they share.

pub mod build;
pub mod init;
pub mod resolve;
pub mod validate;

use chainbuild_config::{BuildConfig, StepConfig};
use chainbuild_core::{BuildNode, FileSystem, ModuleResolver, TokioFs};
use chainbuild_engine::{DirectoryNode, NodeModulesResolver};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Load the config and the directory its relative paths are based on.
pub fn load(config_path: &Path) -> Result<(BuildConfig, PathBuf), Box<dyn std::error::Error>> {
    let config = BuildConfig::load_from(config_path).map_err(|e| format!("Failed to load config: {e}"))?;
    Ok((config, config_base(config_path)))
}

/// Directory holding `config_path`; `.` for a bare file name.
pub fn config_base(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Steps to run: all of them, or only `index`.
pub fn selected(
    config: &BuildConfig,
    index: Option<usize>,
) -> Result<Vec<(usize, &StepConfig)>, Box<dyn std::error::Error>> {
    match index {
        None => Ok(config.steps.iter().enumerate().collect()),
        Some(i) => config
            .steps
            .get(i)
            .map(|step| vec![(i, step)])
            .ok_or_else(|| format!("No step {i}: config has {} step(s)", config.steps.len()).into()),
    }
}

/// Local collaborators for a step whose node lives under `base`.
pub fn collaborators(
    base: &Path,
    step: &StepConfig,
) -> Result<(Arc<dyn BuildNode>, Arc<dyn FileSystem>, Arc<dyn ModuleResolver>), Box<dyn std::error::Error>>
{
    let dir = base.join(&step.node);
    let node: Arc<dyn BuildNode> = Arc::new(DirectoryNode::new(&dir)?);
    let fs: Arc<dyn FileSystem> = Arc::new(TokioFs);
    let modules: Arc<dyn ModuleResolver> = Arc::new(NodeModulesResolver::new(dir));
    Ok((node, fs, modules))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_steps() -> BuildConfig {
        BuildConfig::parse("[[steps]]\nnode = \"a\"\n\n[[steps]]\nnode = \"b\"\n").unwrap()
    }

    #[test]
    fn selected_defaults_to_every_step() {
        let config = two_steps();
        let steps = selected(&config, None).unwrap();
        let indices: Vec<usize> = steps.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn selected_single_step() {
        let config = two_steps();
        let steps = selected(&config, Some(1)).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].1.node, PathBuf::from("b"));
    }

    #[test]
    fn selected_out_of_range_names_step_count() {
        let config = two_steps();
        let err = selected(&config, Some(5)).unwrap_err();
        assert!(err.to_string().contains("No step 5"));
        assert!(err.to_string().contains("2 step(s)"));
    }

    #[test]
    fn bare_config_name_is_based_on_cwd() {
        assert_eq!(config_base(Path::new("chainbuild.toml")), PathBuf::from("."));
        assert_eq!(config_base(Path::new("site/chainbuild.toml")), PathBuf::from("site"));
    }

    #[test]
    fn load_bases_paths_on_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chainbuild.toml");
        std::fs::write(&path, "[[steps]]\nnode = \"bundles/index\"\n").unwrap();

        let (config, base) = load(&path).unwrap();
        assert_eq!(base.as_path(), dir.path());
        assert_eq!(config.steps.len(), 1);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load(Path::new("/nonexistent/chainbuild.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config"));
    }

    #[test]
    fn collaborators_root_node_under_base() {
        let config = two_steps();
        let (node, _, _) = collaborators(Path::new("/site"), &config.steps[1]).unwrap();
        assert_eq!(node.name(), "b");
        assert_eq!(node.dir(), Path::new("/site/b"));
    }
}
