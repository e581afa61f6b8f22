use chrono::Utc;
use pull_request_closer::{GitHub, parse_args, run};
use tracing::{error, info};

fn handle_clap_help_version(clap_err: &clap::Error) -> ! {
    use clap::error::ErrorKind;
    match clap_err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{clap_err}");
            std::process::exit(0);
        }
        _ => {
            eprint!("{clap_err}");
            std::process::exit(2);
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => {
            if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                handle_clap_help_version(clap_err);
            } else {
                return Err(err);
            }
        }
    };

    let github = GitHub::new(&config.access_token)?;

    match run(&config, &github, Utc::now()).await {
        Ok(report) => {
            info!(
                repo = %config.repo,
                candidates = report.candidates(),
                closed = report.closed.len(),
                failed = report.failed.len(),
                skipped = report.skipped.len(),
                "Finished"
            );
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "Failed to find pull requests");
            std::process::exit(1);
        }
    }
}
