use anyhow::Result;
use clap::{CommandFactory, Parser, error::ErrorKind};

use crate::types::{Config, DEFAULT_COMMENT, Repo};

const BUILD_INFO_HUMAN: &str = env!("BUILD_INFO_HUMAN");

#[derive(Parser)]
#[command(
    name = "pull-request-closer",
    about = "Auto-close old GitHub pull requests that were forgotten by their committer"
)]
#[command(version, long_version = BUILD_INFO_HUMAN)]
struct CliArgs {
    /// GitHub access token
    #[arg(long = "access-token", value_name = "TOKEN")]
    pub access_token: String,

    /// GitHub repository owner whose pull requests will be operated upon
    #[arg(long, value_name = "OWNER")]
    pub owner: String,

    /// GitHub repository name whose pull requests will be operated upon
    #[arg(long, value_name = "REPO")]
    pub repository: String,

    /// Label added to a pull request to mark it as automatically closed
    #[arg(long, default_value = "", value_name = "LABEL")]
    pub label: String,

    /// Body of the comment posted when a pull request is closed
    #[arg(long, default_value = DEFAULT_COMMENT, value_name = "TEXT")]
    pub comment: String,

    /// Close pull requests with no new comments or commits for more than this many days
    #[arg(long, value_name = "DAYS")]
    pub days: u32,

    /// Only report the pull requests that would be closed
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl CliArgs {
    fn into_config(self) -> Result<Config, clap::Error> {
        let invalid = |msg: String| CliArgs::command().error(ErrorKind::ValueValidation, msg);

        let repo = Repo::new(self.owner, self.repository)
            .map_err(|e| invalid(format!("Invalid repository: {e}")))?;

        if self.access_token.trim().is_empty() {
            return Err(invalid("Access token must not be empty".to_string()));
        }

        let label = Some(self.label).filter(|label| !label.is_empty());

        Ok(Config {
            access_token: self.access_token,
            repo,
            label,
            comment: self.comment,
            days: self.days,
            dry_run: self.dry_run,
        })
    }
}

/// Parses command-line arguments into the configuration for one run.
///
/// Every argument problem, including an invalid repository or a blank
/// token, comes back as a `clap::Error` inside the `anyhow::Error` so the
/// caller can pick the exit code. So do `--help` and `--version`.
pub fn parse_args<I, T>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = CliArgs::try_parse_from(args)?;
    Ok(cli.into_config()?)
}
