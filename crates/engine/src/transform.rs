//! Local transforms: identity and an external command.

use chainbuild_config::TransformConfig;
use chainbuild_core::{Transform, TransformError, TransformOptions};
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Arc;

/// Environment variable carrying the step's options, as JSON, to a command transform.
pub const OPTIONS_ENV: &str = "CHAINBUILD_TRANSFORM_OPTIONS";

/// Returns code unchanged and ignores options.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl Transform for IdentityTransform {
    fn name(&self) -> &str {
        "identity"
    }

    fn transform(&self, code: &str, _options: Option<&TransformOptions>) -> Result<String, TransformError> {
        Ok(code.to_string())
    }
}

/// Pipes each segment through an external program (stdin → stdout).
///
/// Options are passed as JSON in [`OPTIONS_ENV`]; the variable is unset when
/// the step has no options. A non-zero exit rejects the segment.
#[derive(Debug, Clone)]
pub struct CommandTransform {
    program: String,
    args: Vec<String>,
}

impl CommandTransform {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Transform for CommandTransform {
    fn name(&self) -> &str {
        &self.program
    }

    fn transform(&self, code: &str, options: Option<&TransformOptions>) -> Result<String, TransformError> {
        let spawn_err = |reason: String| TransformError::Spawn {
            program: self.program.clone(),
            reason,
        };

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .env_remove(OPTIONS_ENV);
        if let Some(options) = options {
            command.env(OPTIONS_ENV, options.to_string());
        }

        let mut child = command.spawn().map_err(|e| spawn_err(e.to_string()))?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| spawn_err("stdin not captured".into()))?;

        // Feed stdin from another thread so a chatty child cannot deadlock on a full stdout pipe.
        let input = code.to_string();
        let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output().map_err(|e| spawn_err(e.to_string()))?;
        match writer.join() {
            Ok(Ok(())) => {}
            // The child may legitimately exit without draining stdin; its status decides.
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(spawn_err(e.to_string())),
            Err(_) => return Err(spawn_err("stdin writer panicked".into())),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(TransformError::Rejected(if stderr.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                stderr
            }));
        }
        String::from_utf8(output.stdout).map_err(|_| TransformError::InvalidOutput)
    }
}

/// Build the transform a config asks for.
pub fn from_config(config: &TransformConfig) -> Arc<dyn Transform> {
    match config.command.split_first() {
        Some((program, args)) => Arc::new(CommandTransform::new(program.clone(), args.to_vec())),
        None => Arc::new(IdentityTransform),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_options() {
        let opts = serde_json::json!({ "minify": true });
        assert_eq!(IdentityTransform.transform("let y=2;", Some(&opts)).unwrap(), "let y=2;");
    }

    #[test]
    fn empty_config_selects_identity() {
        assert_eq!(from_config(&TransformConfig::default()).name(), "identity");
    }

    #[test]
    fn command_config_selects_program() {
        let config = TransformConfig {
            command: vec!["npx".into(), "babel".into()],
        };
        assert_eq!(from_config(&config).name(), "npx");
    }

    #[cfg(unix)]
    #[test]
    fn command_pipes_code_through() {
        let t = CommandTransform::new("tr", vec!["a-z".into(), "A-Z".into()]);
        assert_eq!(t.transform("let y=2;", None).unwrap(), "LET Y=2;");
    }

    #[cfg(unix)]
    #[test]
    fn command_receives_options_as_json() {
        let t = CommandTransform::new(
            "sh",
            vec!["-c".into(), format!("cat >/dev/null; printf %s \"${OPTIONS_ENV}\"")],
        );
        let opts = serde_json::json!({ "presets": ["env"] });
        assert_eq!(t.transform("x", Some(&opts)).unwrap(), r#"{"presets":["env"]}"#);
        assert_eq!(t.transform("x", None).unwrap(), "");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_rejects() {
        let t = CommandTransform::new(
            "sh",
            vec!["-c".into(), "cat >/dev/null; echo 'SyntaxError: Unexpected token' >&2; exit 1".into()],
        );
        let err = t.transform("@@", None).unwrap_err();
        match err {
            TransformError::Rejected(msg) => assert!(msg.contains("Unexpected token")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let t = CommandTransform::new("chainbuild-no-such-transform", vec![]);
        assert!(matches!(t.transform("x", None), Err(TransformError::Spawn { .. })));
    }
}
