use async_trait::async_trait;

use crate::error::Result;
use crate::types::FormSubmission;

/// A delivery backend for contact form submissions.
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// Stable backend identifier, used in logs.
    fn id(&self) -> &'static str;

    /// Deliver one submission.
    ///
    /// Implementations make exactly one delivery attempt per call. Retry
    /// policy, if any, belongs to the caller.
    async fn submit(&self, submission: &FormSubmission) -> Result<()>;
}
