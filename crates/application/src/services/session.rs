//! Per-session vote bookkeeping

use site_directory_domain::{ListingId, StarVote};
use std::collections::HashMap;

/// Votes cast during one browsing session.
///
/// A session may vote on a listing once. The record lives only as long as
/// the session value; the store keeps no record of who voted.
#[derive(Debug, Clone, Default)]
pub struct RatingSession {
    votes: HashMap<ListingId, StarVote>,
}

impl RatingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_rated(&self, id: &ListingId) -> bool {
        self.votes.contains_key(id)
    }

    /// The vote this session gave `id`, if any
    pub fn vote_for(&self, id: &ListingId) -> Option<StarVote> {
        self.votes.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    pub(crate) fn record(&mut self, id: ListingId, vote: StarVote) {
        self.votes.insert(id, vote);
    }
}
