use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::{
    error::RetrievalError,
    types::{Forge, PullRequest, Repo},
};

/// Returns the instant before which a pull request counts as stale.
///
/// Saturates at the earliest representable time, so an absurdly large
/// threshold selects nothing instead of overflowing.
pub fn staleness_cutoff(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    TimeDelta::try_days(i64::from(days))
        .and_then(|delta| now.checked_sub_signed(delta))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Strictly older than the cutoff; an update exactly at the cutoff is kept.
pub fn is_stale(pr: &PullRequest, cutoff: DateTime<Utc>) -> bool {
    pr.updated_at < cutoff
}

/// Lists the open pull requests of `repo` and keeps the ones whose last
/// update is older than `days` days before `now`, in upstream order.
pub async fn find_stale_pull_requests<F>(
    forge: &F,
    repo: &Repo,
    days: u32,
    now: DateTime<Utc>,
) -> Result<Vec<PullRequest>, RetrievalError>
where
    F: Forge + Sync,
{
    let open = forge
        .list_open_pull_requests(repo)
        .await
        .map_err(RetrievalError::new)?;

    let cutoff = staleness_cutoff(now, days);
    debug!(%repo, open = open.len(), %cutoff, "Listed open pull requests");

    Ok(open.into_iter().filter(|pr| is_stale(pr, cutoff)).collect())
}
