//! `chainbuild resolve`: show what a step would assemble.

use chainbuild_engine::{BuildStep, flatten};
use std::path::Path;

use super::CommandResult;

pub async fn run(config_path: &Path, step: Option<usize>) -> CommandResult {
    let (config, base) = super::load(config_path)?;
    let transform = chainbuild_engine::from_config(&config.transform);

    for (index, step_config) in super::selected(&config, step)? {
        let (node, fs, modules) = super::collaborators(&base, step_config)?;
        let step = BuildStep::new(step_config.clone(), transform.clone());

        let ctx = step.context(node, fs, modules).await?;
        let tree = step.resolve(&ctx).await?;

        println!("📦 Step {index}: {} → {}", step_config.node.display(), step_config.target);
        for segment in flatten(&tree) {
            match &segment.contents {
                Some(contents) => println!("   {:>8} B  {}", contents.len(), segment.path),
                None => println!("   {:>8}    {}  ⚠️  unreadable", "-", segment.path),
            }
        }
    }

    Ok(())
}
