//! Star votes and the running-mean rating formula.

use crate::errors::RatingError;
use serde::{Deserialize, Serialize};

/// Lowest possible mean rating
pub const MIN_RATING: f64 = 0.0;

/// Highest possible mean rating
pub const MAX_RATING: f64 = 5.0;

/// A single star vote in `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarVote(u8);

impl StarVote {
    /// Fewest stars a vote can give
    pub const MIN: u8 = 1;
    /// Most stars a vote can give
    pub const MAX: u8 = 5;

    /// Fails with [`RatingError::InvalidVote`] outside `MIN..=MAX`
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::InvalidVote(value))
        }
    }

    /// Number of stars
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StarVote {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarVote> for u8 {
    fn from(vote: StarVote) -> Self {
        vote.0
    }
}

/// Fold one vote into an existing mean.
///
/// Returns `(rating * votes + vote) / (votes + 1)` together with the new vote
/// count. The mean is clamped to `[MIN_RATING, MAX_RATING]` so a corrupted
/// prior rating cannot push the result out of range.
pub fn apply_vote(rating: f64, votes: u32, vote: StarVote) -> (f64, u32) {
    let prior = if rating.is_finite() {
        rating.clamp(MIN_RATING, MAX_RATING)
    } else {
        MIN_RATING
    };
    let new_votes = votes.saturating_add(1);
    let total = prior * f64::from(votes) + f64::from(vote.value());
    let mean = (total / f64::from(new_votes)).clamp(MIN_RATING, MAX_RATING);
    (mean, new_votes)
}
