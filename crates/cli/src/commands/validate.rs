//! `chainbuild validate`: check the configuration file.

use chainbuild_core::ChainEntry;
use std::path::Path;

use super::CommandResult;

pub async fn run(config_path: &Path) -> CommandResult {
    println!("🔍 Validating {}...", config_path.display());

    let (config, base) = match super::load(config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("   ❌ {e}");
            return Err(e);
        }
    };
    println!("   ✅ Config parsed successfully");

    let mut warnings = Vec::new();
    for (index, step) in config.steps.iter().enumerate() {
        if !base.join(&step.node).is_dir() {
            warnings.push(format!("steps[{index}]: node directory {} does not exist", step.node.display()));
        }
        if step.chain.is_empty() {
            warnings.push(format!("steps[{index}]: empty chain produces an empty target"));
        }
        if step.chain.iter().any(|e| matches!(e, ChainEntry::Text(t) if t.trim().is_empty())) {
            warnings.push(format!("steps[{index}]: chain contains blank literal text"));
        }
    }

    if warnings.is_empty() {
        println!("   ✅ All checks passed");
    } else {
        println!();
        for w in &warnings {
            println!("   ⚠️  {w}");
        }
    }

    println!();
    let transform = match config.transform.command.first() {
        Some(program) => program.as_str(),
        None => "identity",
    };
    println!("   Transform: {transform}");
    for (index, step) in config.steps.iter().enumerate() {
        println!(
            "   Step {index}:    {} → {} ({} entries)",
            step.node.display(),
            step.target,
            step.chain.len()
        );
    }

    Ok(())
}
