use clap::Parser;
use pom_order_cli::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so --stdout output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(summary) => {
            if cli.check {
                if summary.changed > 0 {
                    std::process::exit(1);
                }
                tracing::info!("{} file(s) checked, all canonical", summary.scanned);
            }
        }
        Err(err) => {
            eprintln!("pom-order: {err}");
            std::process::exit(2);
        }
    }
}
