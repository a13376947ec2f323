//! Results service

use tracing::instrument;

use crate::dto::ResultsView;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Results service
pub struct ResultsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ResultsService<'a> {
    /// Create a new ResultsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Vote counts for every candidate, highest first, with their total
    #[instrument(skip(self))]
    pub async fn results(&self) -> ServiceResult<ResultsView> {
        let tally = self.ctx.vote_repo().tally().await?;
        Ok(ResultsView::from(tally))
    }
}
