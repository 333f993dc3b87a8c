//! Feed orchestration for EventHub recommendations.
//!
//! This crate provides [`FeedRecommender`], the default implementation of the
//! [`Recommender`](eventhub_core::Recommender) trait. It gathers a user's
//! followed organizers, stored location and the candidate event listing from
//! an [`EventDirectory`](eventhub_core::EventDirectory), keeps events that are
//! published and not yet past, and ranks them with any
//! [`EventScorer`](eventhub_core::EventScorer).
//!
//! Lookup failures abort the pass with
//! [`RecommendError::Lookup`](eventhub_core::RecommendError::Lookup); callers
//! that need a degraded feed wrap the result with
//! [`RecommendationFeed::from_result`](eventhub_core::RecommendationFeed::from_result).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod feed;

pub use feed::FeedRecommender;
