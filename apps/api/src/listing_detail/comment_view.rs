use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::classifier::postprocess::{top_emotions, EmotionPercent, COMMENT_TOP_N};
use crate::classifier::EmotionScore;
use crate::models::comment::SafeComment;

const PLACEHOLDER_AVATAR: &str = "/images/placeholder.jpg";

/// One rendered comment: author line, formatted timestamp, body, rating,
/// and an emotional-breakdown slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub author_name: Option<String>,
    pub author_image: String,
    pub formatted_date: String,
    pub text: String,
    pub rating: i32,
    /// Per-comment breakdown slot. The classification path for it exists
    /// (see [`comment_breakdown`]) but is currently switched off, so this
    /// always renders empty. Pending a product decision on whether the
    /// per-comment breakdown ships.
    pub emotional_breakdown: Vec<EmotionPercent>,
}

impl CommentView {
    pub fn render(comment: &SafeComment) -> Self {
        CommentView {
            author_name: comment.user.name.clone(),
            author_image: comment
                .user
                .image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string()),
            formatted_date: format_long_date(&comment.created_at),
            text: comment.text.clone(),
            rating: comment.rating,
            emotional_breakdown: Vec::new(),
        }
    }
}

/// Post-processing policy for a single comment's breakdown: top 3 entries,
/// zero-percent entries dropped. Currently unreferenced by [`CommentView::render`]
/// (the breakdown is disabled); kept wired for when it is switched back on.
#[allow(dead_code)]
pub fn comment_breakdown(raw: &[EmotionScore]) -> Vec<EmotionPercent> {
    top_emotions(raw, COMMENT_TOP_N)
}

/// en-US long date/time, e.g. `June 1, 2023 at 5:30:00 PM`. A timestamp
/// that fails to parse is passed through untouched.
fn format_long_date(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|d| d.format("%B %-d, %Y at %-I:%M:%S %p").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::SafeUser;

    fn comment(image: Option<&str>) -> SafeComment {
        SafeComment {
            id: "c1".into(),
            listing_id: "L1".into(),
            user_id: "u1".into(),
            text: "Great stay".into(),
            rating: 5,
            created_at: "2023-06-01T17:30:00+00:00".into(),
            user: SafeUser {
                id: "u1".into(),
                name: Some("Ada".into()),
                image: image.map(String::from),
                email_verified: None,
                created_at: "2023-01-01T00:00:00+00:00".into(),
                updated_at: "2023-01-01T00:00:00+00:00".into(),
            },
        }
    }

    #[test]
    fn test_long_date_formatting() {
        assert_eq!(
            format_long_date("2023-06-01T17:30:00+00:00"),
            "June 1, 2023 at 5:30:00 PM"
        );
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        assert_eq!(format_long_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_missing_avatar_falls_back_to_placeholder() {
        let view = CommentView::render(&comment(None));
        assert_eq!(view.author_image, PLACEHOLDER_AVATAR);
    }

    #[test]
    fn test_present_avatar_is_kept() {
        let view = CommentView::render(&comment(Some("/images/ada.jpg")));
        assert_eq!(view.author_image, "/images/ada.jpg");
    }

    #[test]
    fn test_breakdown_always_renders_empty_while_disabled() {
        let view = CommentView::render(&comment(None));
        assert!(view.emotional_breakdown.is_empty());
    }

    #[test]
    fn test_breakdown_policy_is_top_three_non_zero() {
        let raw = vec![
            EmotionScore { label: "joy".into(), score: 0.8 },
            EmotionScore { label: "love".into(), score: 0.1 },
            EmotionScore { label: "pride".into(), score: 0.05 },
            EmotionScore { label: "relief".into(), score: 0.04 },
        ];
        let breakdown = comment_breakdown(&raw);
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].label, "joy");
    }
}
