//! Render projection consumed by the presentation layer.
//!
//! Only the data shape of a card lives here; drawing, gestures and dialogs
//! belong to the host UI.

use crate::model::record::{Record, RecordId};

pub const DEFAULT_PREVIEW_CHARS: usize = 140;
pub const ELLIPSIS: char = '…';

pub const EMPTY_LIST_MESSAGE: &str = "No blogs yet — write your first one above.";
pub const VALIDATION_NOTICE: &str = "Please enter both a title and content for the blog.";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this blog?";

/// One rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: RecordId,
    pub title: String,
    /// Full content when expanded, otherwise the truncated preview.
    pub body: String,
    /// `View` or `Hide`.
    pub toggle_label: &'static str,
}

/// Projects records into cards, preserving collection order.
pub fn project_cards(records: &[Record], preview_chars: usize) -> Vec<CardView> {
    records
        .iter()
        .map(|record| CardView {
            id: record.id.clone(),
            title: record.title.clone(),
            body: if record.expanded {
                record.content.clone()
            } else {
                preview(&record.content, preview_chars)
            },
            toggle_label: if record.expanded { "Hide" } else { "View" },
        })
        .collect()
}

/// First `max_chars` characters of `content`, with `…` appended only when
/// something was cut.
pub fn preview(content: &str, max_chars: usize) -> String {
    let mut chars = content.chars();
    let mut head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        head.push(ELLIPSIS);
    }
    head
}

#[cfg(test)]
mod tests {
    use super::{preview, project_cards, DEFAULT_PREVIEW_CHARS};
    use crate::model::record::Record;

    #[test]
    fn short_content_is_not_marked() {
        assert_eq!(preview("hello", 140), "hello");
        let exact = "x".repeat(140);
        assert_eq!(preview(&exact, 140), exact);
    }

    #[test]
    fn long_content_is_cut_on_char_boundary() {
        let long = "é".repeat(141);
        let cut = preview(&long, 140);
        assert_eq!(cut.chars().count(), 141);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn expanded_cards_show_full_content() {
        let body = "y".repeat(200);
        let mut open = Record::with_id("1", "Open", body.as_str());
        open.expanded = true;
        let closed = Record::with_id("2", "Closed", body.as_str());

        let cards = project_cards(&[open, closed], DEFAULT_PREVIEW_CHARS);
        assert_eq!(cards[0].body, body);
        assert_eq!(cards[0].toggle_label, "Hide");
        assert_eq!(cards[1].body.chars().count(), DEFAULT_PREVIEW_CHARS + 1);
        assert_eq!(cards[1].toggle_label, "View");
    }
}
