use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Reserved category tag selecting the tall media aspect. Every other
/// category renders square.
pub const DETAIL_PAGE_CATEGORY: &str = "detail-page";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaAspect {
    Square,
    Tall,
}

/// One entry of a work item's creative-direction list. Carried through
/// persistence for older blobs; the current pages do not render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CreativeDirection {
    pub title: String,
    pub description: String,
}

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Opaque identifier, stable for the item's lifetime. Allocated from the
    /// creation timestamp; see [`allocate_work_id`].
    pub id: String,

    pub brand: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    pub company: String,

    pub category: String,

    pub one_liner: String,

    /// URL or data reference; empty means "no thumbnail" and the archive
    /// card falls back to the first gallery visual.
    pub thumbnail: String,

    /// Newline-delimited; each line renders as its own paragraph.
    pub role: String,

    /// Unused by current rendering but preserved on round-trip.
    #[serde(default)]
    pub media: Vec<String>,

    /// Unused by current rendering but preserved on round-trip.
    #[serde(default)]
    pub creative_directions: Vec<CreativeDirection>,

    /// Gallery media references; order is display order.
    #[serde(default)]
    pub visuals: Vec<String>,
}

impl WorkItem {
    /// A fresh all-empty draft with the given identifier.
    pub fn draft(id: String) -> Self {
        Self {
            id,
            brand: "New Project".to_string(),
            logo: None,
            company: String::new(),
            category: String::new(),
            one_liner: String::new(),
            thumbnail: String::new(),
            role: String::new(),
            media: Vec::new(),
            creative_directions: Vec::new(),
            visuals: Vec::new(),
        }
    }

    pub fn aspect(&self) -> MediaAspect {
        if self.category == DETAIL_PAGE_CATEGORY {
            MediaAspect::Tall
        } else {
            MediaAspect::Square
        }
    }

    /// Media shown on the archive card: the thumbnail, or the first gallery
    /// visual when no thumbnail is set.
    pub fn display_media(&self) -> Option<&str> {
        if !self.thumbnail.is_empty() {
            return Some(&self.thumbnail);
        }
        self.visuals.first().map(String::as_str)
    }

    pub fn role_lines(&self) -> impl Iterator<Item = &str> {
        self.role.split('\n')
    }
}

/// Allocate an identifier unique among `existing`.
///
/// Milliseconds since the epoch, as a decimal string. Operations are
/// single-operator and sequential, so a timestamp token suffices; the bump
/// loop only matters when two items are created within the same millisecond.
pub fn allocate_work_id(existing: &[WorkItem]) -> String {
    let mut candidate = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|w| w.id == id) {
            return id;
        }
        candidate += 1;
    }
}
