use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Comment body posted when no `--comment` is given.
pub const DEFAULT_COMMENT: &str = "Pull request was automatically closed";

/// A GitHub repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    owner: String,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    EmptyOwner,
    EmptyName,
    InvalidCharacter { part: &'static str, value: String },
}

impl fmt::Display for RepoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoError::EmptyOwner => write!(f, "repository owner must not be empty"),
            RepoError::EmptyName => write!(f, "repository name must not be empty"),
            RepoError::InvalidCharacter { part, value } => {
                write!(f, "repository {part} '{value}' must not contain '/' or whitespace")
            }
        }
    }
}

impl std::error::Error for RepoError {}

impl Repo {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, RepoError> {
        let owner = owner.into();
        let name = name.into();

        if owner.is_empty() {
            return Err(RepoError::EmptyOwner);
        }
        if name.is_empty() {
            return Err(RepoError::EmptyName);
        }
        if !is_valid_part(&owner) {
            return Err(RepoError::InvalidCharacter {
                part: "owner",
                value: owner,
            });
        }
        if !is_valid_part(&name) {
            return Err(RepoError::InvalidCharacter {
                part: "name",
                value: name,
            });
        }

        Ok(Self { owner, name })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_valid_part(part: &str) -> bool {
    !part.contains('/') && !part.chars().any(char::is_whitespace)
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// State of a pull request as reported by the forge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrState {
    Open,
    Closed,
}

impl PrState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrState::Open => "open",
            PrState::Closed => "closed",
        }
    }
}

impl fmt::Display for PrState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a pull request as listed by the forge.
///
/// Never mutated locally: changes are expressed as a [`PullRequestEdit`]
/// and submitted through [`Forge::edit_pull_request`].
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub number: u64,
    pub url: String,
    pub updated_at: DateTime<Utc>,
    pub state: PrState,
}

/// Changes to apply to a pull request. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestEdit {
    state: Option<PrState>,
}

impl PullRequestEdit {
    pub const fn new() -> Self {
        Self { state: None }
    }

    pub fn state(mut self, state: PrState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn new_state(&self) -> Option<PrState> {
        self.state
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_none()
    }
}

/// Everything one run needs, parsed once at startup.
#[derive(Clone)]
pub struct Config {
    pub access_token: String,
    pub repo: Repo,
    /// Label attached when closing; `None` skips the label step.
    pub label: Option<String>,
    pub comment: String,
    pub days: u32,
    pub dry_run: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &"<redacted>")
            .field("repo", &self.repo)
            .field("label", &self.label)
            .field("comment", &self.comment)
            .field("days", &self.days)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

/// The hosting service the closer talks to.
#[async_trait]
pub trait Forge {
    /// Lists every open pull request, all pages included, in upstream order.
    async fn list_open_pull_requests(&self, repo: &Repo) -> anyhow::Result<Vec<PullRequest>>;

    async fn create_comment(&self, repo: &Repo, number: u64, body: &str) -> anyhow::Result<()>;

    async fn add_labels(&self, repo: &Repo, number: u64, labels: &[String]) -> anyhow::Result<()>;

    async fn edit_pull_request(
        &self,
        repo: &Repo,
        number: u64,
        edit: &PullRequestEdit,
    ) -> anyhow::Result<()>;
}
