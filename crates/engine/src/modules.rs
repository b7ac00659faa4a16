//! `node_modules` lookup for well-known modules.
//!
//! Walks from a start directory up to the filesystem root, checking
//! `node_modules/<name>/` at each level. The entry file is the package's
//! `main` field, falling back to `index.js`.

use chainbuild_core::{ModuleResolver, ResolveError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct NodeModulesResolver {
    start: PathBuf,
}

#[derive(Deserialize)]
struct PackageManifest {
    #[serde(default)]
    main: Option<String>,
}

impl NodeModulesResolver {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
        }
    }

    fn entry_in(package_dir: &Path) -> Result<Option<PathBuf>, ResolveError> {
        let manifest_path = package_dir.join("package.json");
        let main = match std::fs::read_to_string(&manifest_path) {
            Ok(text) => {
                let manifest: PackageManifest =
                    serde_json::from_str(&text).map_err(|e| ResolveError::InvalidManifest {
                        path: manifest_path.clone(),
                        reason: e.to_string(),
                    })?;
                manifest.main.filter(|m| !m.trim().is_empty())
            }
            Err(_) if package_dir.is_dir() => None,
            Err(_) => return Ok(None),
        };

        let entry = package_dir.join(main.as_deref().unwrap_or("index.js"));
        if entry.is_file() {
            return Ok(Some(entry));
        }
        // `"main": "lib/ym"` means `lib/ym.js`.
        let mut with_ext = entry.clone().into_os_string();
        with_ext.push(".js");
        let with_ext = PathBuf::from(with_ext);
        if with_ext.is_file() {
            return Ok(Some(with_ext));
        }
        let index = entry.join("index.js");
        Ok(index.is_file().then_some(index))
    }
}

impl ModuleResolver for NodeModulesResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf, ResolveError> {
        for dir in self.start.ancestors() {
            let package_dir = dir.join("node_modules").join(name);
            if let Some(entry) = Self::entry_in(&package_dir)? {
                debug!(module = name, path = %entry.display(), "Resolved module");
                return Ok(entry);
            }
        }
        Err(ResolveError::ModuleNotFound {
            name: name.into(),
            from: self.start.clone(),
        })
    }
}
