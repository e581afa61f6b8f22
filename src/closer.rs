use crate::{
    error::{CloseError, CloseStep},
    types::{Forge, PrState, PullRequest, PullRequestEdit, Repo},
};

/// Comments on, optionally labels, and closes one pull request.
///
/// The steps run in that order and the first failure stops the rest. The
/// pull request is left with whatever the earlier steps already did.
pub async fn close_pull_request<F>(
    forge: &F,
    repo: &Repo,
    pr: &PullRequest,
    comment: &str,
    label: Option<&str>,
) -> Result<(), CloseError>
where
    F: Forge + Sync,
{
    forge
        .create_comment(repo, pr.number, comment)
        .await
        .map_err(|err| CloseError::new(pr.number, CloseStep::Comment, err))?;

    if let Some(label) = label {
        forge
            .add_labels(repo, pr.number, &[label.to_string()])
            .await
            .map_err(|err| CloseError::new(pr.number, CloseStep::Label, err))?;
    }

    let edit = PullRequestEdit::new().state(PrState::Closed);
    forge
        .edit_pull_request(repo, pr.number, &edit)
        .await
        .map_err(|err| CloseError::new(pr.number, CloseStep::Close, err))?;

    Ok(())
}
