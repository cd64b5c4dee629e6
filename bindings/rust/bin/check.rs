//! Command-line check that the Veld grammar linked into this build loads.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tree-sitter-veld-check")]
#[command(about = "Check that the veld grammar loads into the tree-sitter runtime", long_about = None)]
struct Cli {
    /// Log filter, e.g. `debug` or `tree_sitter_veld=trace`
    #[arg(long, env = "VELD_CHECK_LOG", default_value = "info")]
    log_level: String,

    /// Only report failures
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match tree_sitter_veld::load_grammar() {
        Ok(handle) => {
            if !cli.quiet {
                println!(
                    "{} grammar loaded (ABI {}, {} node kinds)",
                    handle.name(),
                    handle.abi_version(),
                    handle.node_kind_count()
                );
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(grammar = error.grammar(), "{error}");
            ExitCode::FAILURE
        }
    }
}
