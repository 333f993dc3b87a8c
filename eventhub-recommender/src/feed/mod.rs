//! `FeedRecommender` implementation.

use eventhub_core::{
    CandidateEvent, Diagnostics, EventDirectory, EventScorer, RecommendError,
    RecommendationRequest, RecommendationResponse, Recommender, UserContext, rank_events,
};
use eventhub_scorer::RecommendationScorer;

/// Recommender that filters a directory's listing and ranks it.
///
/// The recommender is generic over the engine boundaries: a directory that
/// answers follow, profile and listing lookups, and a relevance scorer.
pub struct FeedRecommender<D, S>
where
    D: EventDirectory,
    S: EventScorer,
{
    directory: D,
    scorer: S,
}

impl<D> FeedRecommender<D, RecommendationScorer>
where
    D: EventDirectory,
{
    /// Construct a recommender using the default scoring weights.
    #[must_use]
    pub fn with_default_scorer(directory: D) -> Self {
        Self::new(directory, RecommendationScorer::default())
    }
}

impl<D, S> FeedRecommender<D, S>
where
    D: EventDirectory,
    S: EventScorer,
{
    /// Construct a recommender from a directory and a scorer.
    #[must_use]
    pub const fn new(directory: D, scorer: S) -> Self {
        Self { directory, scorer }
    }

    /// Directory backing the lookups.
    #[must_use]
    pub const fn directory(&self) -> &D {
        &self.directory
    }

    /// Scorer used for ranking.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    fn user_context(&self, request: &RecommendationRequest) -> Result<UserContext, RecommendError> {
        let followed = self
            .directory
            .followed_organizers(&request.user_id)
            .inspect_err(|err| log::warn!("followed-organizer lookup failed: {err}"))?;
        let location = self
            .directory
            .user_location(&request.user_id)
            .inspect_err(|err| log::warn!("user profile lookup failed: {err}"))?;
        log::debug!(
            "user {} follows {} organizers, location set: {}",
            request.user_id,
            followed.len(),
            location.is_some()
        );

        let mut context = UserContext::new(request.now).with_followed(followed);
        context.location = location;
        Ok(context)
    }
}

impl<D, S> Recommender for FeedRecommender<D, S>
where
    D: EventDirectory,
    S: EventScorer,
{
    fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, RecommendError> {
        request.validate()?;
        let context = self.user_context(request)?;

        let listed = self
            .directory
            .candidate_events()
            .inspect_err(|err| log::warn!("candidate event lookup failed: {err}"))?;
        let candidates_received = listed.len();
        let candidates = upcoming_published(listed, &context);
        let discarded = candidates_received.saturating_sub(candidates.len());
        if discarded > 0 {
            log::debug!("discarded {discarded} unpublished or past events");
        }

        let mut events = rank_events(&self.scorer, &candidates, &context);
        let candidates_ranked = events.len();
        if let Some(limit) = request.limit {
            events.truncate(limit);
        }

        Ok(RecommendationResponse {
            events,
            diagnostics: Diagnostics {
                candidates_received,
                candidates_ranked,
                followed_organizers: context.followed.len(),
            },
        })
    }
}

/// Keep published events dated on or after the calendar date of `context.now`.
fn upcoming_published(listed: Vec<CandidateEvent>, context: &UserContext) -> Vec<CandidateEvent> {
    let today = context.now.date_naive();
    listed
        .into_iter()
        .filter(|event| event.is_candidate_on(today))
        .collect()
}
