use std::fmt;

/// Listing the open pull requests failed. Aborts the whole run.
#[derive(Debug)]
pub struct RetrievalError {
    source: anyhow::Error,
}

impl RetrievalError {
    pub fn new(source: anyhow::Error) -> Self {
        Self { source }
    }
}

impl fmt::Display for RetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.source)
    }
}

impl std::error::Error for RetrievalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let source: &(dyn std::error::Error + Send + Sync + 'static) = self.source.as_ref();
        Some(source)
    }
}

/// The remote call of a close action that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseStep {
    Comment,
    Label,
    Close,
}

impl CloseStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloseStep::Comment => "create comment",
            CloseStep::Label => "add label",
            CloseStep::Close => "close pull request",
        }
    }
}

impl fmt::Display for CloseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closing a single pull request failed part way.
///
/// Steps before `step` were applied and are not rolled back.
#[derive(Debug)]
pub struct CloseError {
    pub number: u64,
    pub step: CloseStep,
    source: anyhow::Error,
}

impl CloseError {
    pub fn new(number: u64, step: CloseStep, source: anyhow::Error) -> Self {
        Self {
            number,
            step,
            source,
        }
    }
}

impl fmt::Display for CloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to {} on pull request #{}: {:#}",
            self.step, self.number, self.source
        )
    }
}

impl std::error::Error for CloseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let source: &(dyn std::error::Error + Send + Sync + 'static) = self.source.as_ref();
        Some(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_error_names_failing_step() {
        let err = CloseError::new(42, CloseStep::Label, anyhow::anyhow!("label not found"));
        assert_eq!(
            err.to_string(),
            "failed to add label on pull request #42: label not found"
        );
        assert_eq!(err.step, CloseStep::Label);
    }

    #[test]
    fn test_retrieval_error_shows_cause_chain_once() {
        let err = RetrievalError::new(
            anyhow::anyhow!("Bad credentials").context("Failed to list open pull requests of o/r"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to list open pull requests of o/r: Bad credentials"
        );
    }

    #[test]
    fn test_retrieval_error_exposes_source() {
        use std::error::Error;

        let err = RetrievalError::new(anyhow::anyhow!("Not Found"));
        assert!(err.to_string().contains("Not Found"));
        assert!(err.source().is_some());
    }
}
