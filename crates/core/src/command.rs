//! kubectl invocation: argument vector and the process seam.

#![forbid(unsafe_code)]

use std::process::Command;

use tracing::debug;

use crate::error::{ImagesError, ImagesResult};

/// Server-side go-template. Emits one header line per pod carrying its first
/// container, then one `name,image,policy` line per further container and one
/// `(init) name,image,policy` line per init container.
pub const GO_TEMPLATE: &str = r#"go-template={{range .items}} {{.metadata.namespace}} {{","}} {{.metadata.name}} {{","}} {{range .spec.containers}} {{.name}} {{","}} {{.image}} {{","}} {{.imagePullPolicy}} {{"\n"}} {{end}} {{range .spec.initContainers}} {{"(init)"}} {{.name}} {{","}} {{.image}} {{","}} {{.imagePullPolicy}} {{"\n"}} {{end}} {{end}}"#;

pub const DEFAULT_KUBECTL: &str = "kubectl";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    pub all_namespaces: bool,
    pub namespace: String,
    pub columns: String,
    pub kubeconfig: String,
    pub context: String,
    pub unique: bool,
}

/// Arguments passed to kubectl, excluding the binary name.
pub fn build_args(params: &Parameters) -> Vec<String> {
    let mut args: Vec<String> = vec!["get".into(), "pods".into()];
    if params.all_namespaces {
        args.push("--all-namespaces".into());
    } else if !params.namespace.is_empty() {
        args.push("-n".into());
        args.push(params.namespace.clone());
    }
    args.push("-o".into());
    args.push(GO_TEMPLATE.into());
    if !params.kubeconfig.is_empty() {
        args.push("--kubeconfig".into());
        args.push(params.kubeconfig.clone());
    }
    if !params.context.is_empty() {
        args.push("--context".into());
        args.push(params.context.clone());
    }
    args
}

/// Runs kubectl and returns its captured output.
pub trait CommandRunner {
    fn run(&self, args: &[String]) -> ImagesResult<Vec<u8>>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, args: &[String]) -> ImagesResult<Vec<u8>> {
        (**self).run(args)
    }
}

/// Real runner backed by a kubectl binary on `PATH`.
#[derive(Debug, Clone)]
pub struct Kubectl {
    binary: String,
}

impl Kubectl {
    pub fn new(binary: impl Into<String>) -> Self {
        Self { binary: binary.into() }
    }
}

impl CommandRunner for Kubectl {
    fn run(&self, args: &[String]) -> ImagesResult<Vec<u8>> {
        debug!(binary = %self.binary, ?args, "running kubectl");
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|source| ImagesError::Spawn { binary: self.binary.clone(), source })?;
        // stderr is folded in so cluster-side noise is visible to the parser
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        if !output.status.success() {
            return Err(ImagesError::Command {
                status: output.status,
                output: String::from_utf8_lossy(&combined).into_owned(),
            });
        }
        debug!(bytes = combined.len(), "kubectl finished");
        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tail(args: &[String]) -> Vec<&str> {
        args.iter().map(String::as_str).filter(|a| *a != GO_TEMPLATE).collect()
    }

    #[test]
    fn default_namespace_has_no_selector() {
        let args = build_args(&Parameters::default());
        assert_eq!(args, vec!["get", "pods", "-o", GO_TEMPLATE]);
    }

    #[test]
    fn all_namespaces_wins_over_namespace() {
        let params = Parameters { all_namespaces: true, namespace: "dev".into(), ..Default::default() };
        assert_eq!(tail(&build_args(&params)), vec!["get", "pods", "--all-namespaces", "-o"]);
    }

    #[test]
    fn namespace_selector() {
        let params = Parameters { namespace: "dev".into(), ..Default::default() };
        assert_eq!(tail(&build_args(&params)), vec!["get", "pods", "-n", "dev", "-o"]);
    }

    #[test]
    fn credential_flags_follow_output_selector() {
        let params = Parameters {
            namespace: "dev".into(),
            kubeconfig: "/tmp/kc".into(),
            context: "prod".into(),
            ..Default::default()
        };
        let args = build_args(&params);
        assert_eq!(
            args,
            vec!["get", "pods", "-n", "dev", "-o", GO_TEMPLATE, "--kubeconfig", "/tmp/kc", "--context", "prod"]
        );
    }

    #[test]
    fn context_without_kubeconfig() {
        let params = Parameters { context: "kind".into(), ..Default::default() };
        assert_eq!(tail(&build_args(&params)), vec!["get", "pods", "-o", "--context", "kind"]);
    }

    fn sh(script: &str) -> ImagesResult<Vec<u8>> {
        Kubectl::new("sh").run(&["-c".to_string(), script.to_string()])
    }

    #[test]
    fn nonzero_exit_carries_combined_output() {
        match sh("echo out; echo err >&2; exit 3") {
            Err(ImagesError::Command { status, output }) => {
                assert_eq!(status.code(), Some(3));
                assert!(output.contains("out"), "output={output}");
                assert!(output.contains("err"), "output={output}");
            }
            other => panic!("expected command error, got {other:?}"),
        }
    }

    #[test]
    fn success_returns_stdout_then_stderr() {
        let out = sh("echo out; echo err >&2").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "out\nerr\n");
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let runner = Kubectl::new("kimages-no-such-binary-on-path");
        let err = runner.run(&[]).unwrap_err();
        assert!(matches!(err, ImagesError::Spawn { .. }), "err={err}");
    }
}
