use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::classifier::postprocess::{top_emotions, EmotionPercent, AGGREGATE_TOP_N};
use crate::classifier::EmotionClassifier;
use crate::listing_detail::comment_view::CommentView;
use crate::listing_detail::pricing::{disabled_dates, total_price};
use crate::models::comment::SafeComment;
use crate::models::listing::SafeListing;
use crate::models::reservation::{ReservationRow, SafeReservation};

/// Listing-wide emotional summary as an explicit tri-state: not yet
/// computed, computed with the top-5 non-zero emotions, or failed. A
/// classifier failure lands in `Failed` instead of failing the whole page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum EmotionalSummary {
    /// Pre-computation state. Server responses always carry `Computed` or
    /// `Failed`; this variant is the contract's initial value for clients
    /// that render before the payload lands.
    Pending,
    Computed { emotions: Vec<EmotionPercent> },
    Failed,
}

/// The full detail-page payload: listing with owner, reservation-derived
/// calendar data, a quoted total for an optionally selected stay, the
/// aggregate emotional summary, and rendered comments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetail {
    pub listing: SafeListing,
    pub reservations: Vec<SafeReservation>,
    pub disabled_dates: Vec<NaiveDate>,
    /// Quote for the selected date range; the nightly price when no range
    /// is selected.
    pub total_price: i64,
    pub emotional_summary: EmotionalSummary,
    pub show_summary_empty_state: bool,
    pub comments: Vec<CommentView>,
}

/// Classifies the concatenation of every comment text (single space
/// separator), once per page request. An empty comment list still issues
/// the call with an empty input, matching the shipped behavior.
pub async fn compute_emotional_summary(
    classifier: &EmotionClassifier,
    comments: &[SafeComment],
) -> EmotionalSummary {
    let text = comments
        .iter()
        .map(|comment| comment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    match classifier.classify(&text).await {
        Ok(raw) => EmotionalSummary::Computed {
            emotions: top_emotions(&raw, AGGREGATE_TOP_N),
        },
        Err(e) => {
            warn!("Emotional summary classification failed: {e}");
            EmotionalSummary::Failed
        }
    }
}

/// Whether the summary section should fall back to its "no comments yet"
/// placeholder. The count consulted here was never wired to the emotion
/// list, so the comparison cannot hold and the placeholder never renders.
/// The intended condition is ambiguous, so the shipped behavior is kept
/// rather than guessed at.
pub fn summary_shows_empty_state(_summary: &EmotionalSummary) -> bool {
    const UNWIRED_COUNT: Option<usize> = None;
    UNWIRED_COUNT == Some(0)
}

pub fn compose(
    listing: SafeListing,
    reservations: Vec<ReservationRow>,
    comments: &[SafeComment],
    emotional_summary: EmotionalSummary,
    stay: Option<(NaiveDate, NaiveDate)>,
) -> ListingDetail {
    let show_summary_empty_state = summary_shows_empty_state(&emotional_summary);
    let total_price = match stay {
        Some((start, end)) => total_price(start, end, listing.price),
        None => listing.price,
    };

    ListingDetail {
        total_price,
        disabled_dates: disabled_dates(&reservations),
        reservations: reservations.into_iter().map(SafeReservation::from).collect(),
        listing,
        emotional_summary,
        show_summary_empty_state,
        comments: comments.iter().map(CommentView::render).collect(),
    }
}
