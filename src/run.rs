use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use tracing::{info, warn};

use crate::{
    closer::close_pull_request,
    error::{CloseError, RetrievalError},
    finder::find_stale_pull_requests,
    types::{Config, Forge},
};

/// What happened to each stale pull request during one run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub closed: Vec<u64>,
    pub failed: Vec<CloseError>,
    /// Candidates left alone because of `--dry-run`.
    pub skipped: Vec<u64>,
}

impl RunReport {
    pub fn candidates(&self) -> usize {
        self.closed.len() + self.failed.len() + self.skipped.len()
    }
}

/// Finds the stale pull requests and closes them one at a time.
///
/// Only a failed listing is returned as an error. A pull request that
/// cannot be closed is logged, recorded in the report, and the run moves
/// on to the next one.
pub async fn run<F>(
    config: &Config,
    forge: &F,
    now: DateTime<Utc>,
) -> Result<RunReport, RetrievalError>
where
    F: Forge + Sync,
{
    let stale = find_stale_pull_requests(forge, &config.repo, config.days, now).await?;
    let mut report = RunReport::default();

    for pr in &stale {
        let idle = HumanTime::from(pr.updated_at - now);

        if config.dry_run {
            info!(pull_request = %pr.url, number = pr.number, last_update = %idle, "Would close pull request");
            report.skipped.push(pr.number);
            continue;
        }

        info!(pull_request = %pr.url, number = pr.number, last_update = %idle, "Closing pull request");

        match close_pull_request(
            forge,
            &config.repo,
            pr,
            &config.comment,
            config.label.as_deref(),
        )
        .await
        {
            Ok(()) => report.closed.push(pr.number),
            Err(err) => {
                warn!(pull_request = %pr.url, error = %err, "Failed to close pull request");
                report.failed.push(err);
            }
        }
    }

    Ok(report)
}
