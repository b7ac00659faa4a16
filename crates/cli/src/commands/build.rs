//! `chainbuild build`: run steps and write their targets.

use chainbuild_engine::BuildStep;
use std::path::Path;

use super::CommandResult;

pub async fn run(config_path: &Path, step: Option<usize>) -> CommandResult {
    let (config, base) = super::load(config_path)?;
    let transform = chainbuild_engine::from_config(&config.transform);

    for (index, step_config) in super::selected(&config, step)? {
        let (node, fs, modules) = super::collaborators(&base, step_config)?;
        let step = BuildStep::new(step_config.clone(), transform.clone());

        let output = step
            .run(node, fs, modules)
            .await
            .map_err(|e| format!("Step {index} ({}) failed: {e}", step_config.node.display()))?;

        println!(
            "✅ {} ({} segments, {} bytes)",
            output.path.display(),
            output.segments,
            output.bytes
        );
    }

    Ok(())
}
