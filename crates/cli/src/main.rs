use std::io::Write;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use kimages_core::{compile_pattern, ImageLister, Kubectl, OutputFormat, Parameters, DEFAULT_KUBECTL};
use tracing::debug;

const EXAMPLES: &str = "Examples:
  # display a table of all images in current namespace using podName/containerName/containerImage as columns.
  kubectl images

  # display images info in yaml format
  kubectl images -oy

  # display a table of images that match 'nginx' podname regex in 'dev' namespace using podName/containerImage as columns.
  kubectl images -n dev nginx -c 1,2";

#[derive(Parser, Debug)]
#[command(name = "kubectl-images", version, about = "Show container images used in the cluster.", after_help = EXAMPLES)]
struct Cli {
    /// Regex matched against pod names
    #[arg(value_name = "PODNAME-REGEX")]
    pattern: Option<String>,

    /// If present, list images in all namespaces.
    #[arg(short = 'A', long = "all-namespaces")]
    all_namespaces: bool,

    /// If present, list images in the specified namespace only. Use current namespace as fallback.
    #[arg(short = 'n', long = "namespace", default_value = "")]
    namespace: String,

    /// Columns to display, separated by comma. [0:Namespace, 1:PodName, 2:ContainerName, 3:ContainerImage, 4:ImagePullPolicy]
    #[arg(short = 'c', long = "columns", default_value = "1,2,3")]
    columns: String,

    /// Path to the kubeconfig file to use for CLI requests.
    #[arg(short = 'k', long = "kubeconfig", default_value = "")]
    kubeconfig: String,

    /// The name of the kubeconfig context to use.
    #[arg(short = 'C', long = "context", default_value = "")]
    context: String,

    /// Output format. [json(j)|table(t)|yaml(y)]
    #[arg(short = 'o', long = "output-format", default_value = "table")]
    output_format: String,

    /// Unique images group by namespace/container/images/pullPolicy.
    #[arg(short = 'u', long = "unique")]
    unique: bool,
}

fn init_tracing() {
    let env = std::env::var("KIMAGES_LOG").unwrap_or_else(|_| "warn".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env).unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr).init();
}

fn run(cli: Cli) -> Result<()> {
    // compiled before kubectl is ever started
    let pattern = cli.pattern.as_deref().map(compile_pattern).transpose()?;
    let params = Parameters {
        all_namespaces: cli.all_namespaces,
        namespace: cli.namespace,
        columns: cli.columns,
        kubeconfig: cli.kubeconfig,
        context: cli.context,
        unique: cli.unique,
    };
    let format = OutputFormat::from_flag(&cli.output_format);
    debug!(?params, ?format, "listing images");

    let lister = ImageLister::new(Kubectl::new(DEFAULT_KUBECTL), params, pattern);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    lister.render(format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[Oh...] {}", e);
            ExitCode::FAILURE
        }
    }
}
