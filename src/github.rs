use anyhow::{Context, Result};
use async_trait::async_trait;
use octocrab::{Octocrab, params};
use tracing::{debug, instrument};

use crate::types::{Forge, PrState, PullRequest, PullRequestEdit, Repo};

/// [`Forge`] backed by the GitHub REST API.
pub struct GitHub {
    client: Octocrab,
}

impl GitHub {
    /// Creates a client authenticated with a personal access token.
    pub fn new(access_token: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(access_token.to_string())
            .build()
            .context("Failed to create GitHub client")?;
        Ok(Self { client })
    }

    /// Creates a client talking to another API root, e.g. GitHub Enterprise.
    pub fn with_base_uri(access_token: &str, base_uri: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .base_uri(base_uri)
            .with_context(|| format!("Invalid GitHub API URI: '{base_uri}'"))?
            .personal_token(access_token.to_string())
            .build()
            .context("Failed to create GitHub client")?;
        Ok(Self { client })
    }
}

impl TryFrom<octocrab::models::pulls::PullRequest> for PullRequest {
    type Error = anyhow::Error;

    fn try_from(pr: octocrab::models::pulls::PullRequest) -> Result<Self> {
        // GitHub always sets updated_at on listed pull requests; created_at
        // covers payloads that omit it.
        let updated_at = pr
            .updated_at
            .or(pr.created_at)
            .with_context(|| format!("Pull request #{} has no update timestamp", pr.number))?;

        let url = pr
            .html_url
            .map(|url| url.to_string())
            .unwrap_or(pr.url);

        let state = match pr.state {
            Some(octocrab::models::IssueState::Closed) => PrState::Closed,
            _ => PrState::Open,
        };

        Ok(Self {
            number: pr.number,
            url,
            updated_at,
            state,
        })
    }
}

#[async_trait]
impl Forge for GitHub {
    #[instrument(skip(self, repo), fields(repo = %repo))]
    async fn list_open_pull_requests(&self, repo: &Repo) -> Result<Vec<PullRequest>> {
        let first_page = self
            .client
            .pulls(repo.owner(), repo.name())
            .list()
            .state(params::State::Open)
            .per_page(100)
            .send()
            .await
            .with_context(|| format!("Failed to list open pull requests of {repo}"))?;

        let pulls = self
            .client
            .all_pages(first_page)
            .await
            .with_context(|| format!("Failed to fetch further pull request pages of {repo}"))?;

        let mut open = Vec::with_capacity(pulls.len());
        for pr in pulls {
            let pr = PullRequest::try_from(pr)?;
            // Closed while we were paging.
            if pr.state == PrState::Open {
                open.push(pr);
            }
        }
        Ok(open)
    }

    #[instrument(skip(self, repo, body), fields(repo = %repo))]
    async fn create_comment(&self, repo: &Repo, number: u64, body: &str) -> Result<()> {
        self.client
            .issues(repo.owner(), repo.name())
            .create_comment(number, body)
            .await?;
        Ok(())
    }

    #[instrument(skip(self, repo), fields(repo = %repo))]
    async fn add_labels(&self, repo: &Repo, number: u64, labels: &[String]) -> Result<()> {
        self.client
            .issues(repo.owner(), repo.name())
            .add_labels(number, labels)
            .await?;
        Ok(())
    }

    #[instrument(skip(self, repo), fields(repo = %repo))]
    async fn edit_pull_request(
        &self,
        repo: &Repo,
        number: u64,
        edit: &PullRequestEdit,
    ) -> Result<()> {
        if edit.is_empty() {
            return Ok(());
        }

        let pulls = self.client.pulls(repo.owner(), repo.name());
        let mut update = pulls.update(number);
        if let Some(state) = edit.new_state() {
            debug!(number, %state, "Setting pull request state");
            update = update.state(match state {
                PrState::Open => params::pulls::State::Open,
                PrState::Closed => params::pulls::State::Closed,
            });
        }
        update.send().await?;
        Ok(())
    }
}
