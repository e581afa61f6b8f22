//! Pull request closer: automatically closes stale GitHub pull requests.
//!
//! Lists the open pull requests of one repository, keeps those that have
//! not been updated for a configurable number of days, and closes each of
//! them with an explanatory comment and an optional label. Meant to be run
//! periodically from a scheduler.

pub mod cli;
pub mod closer;
pub mod error;
pub mod finder;
pub mod github;
pub mod run;
pub mod types;

pub use cli::parse_args;
pub use closer::close_pull_request;
pub use error::{CloseError, CloseStep, RetrievalError};
pub use finder::{find_stale_pull_requests, is_stale, staleness_cutoff};
pub use github::GitHub;
pub use run::{RunReport, run};
pub use types::{
    Config, DEFAULT_COMMENT, Forge, PrState, PullRequest, PullRequestEdit, Repo, RepoError,
};
