// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::media::{StagedArtwork, StagedFile};

/// Maximum number of tags a draft may carry.
pub const MAX_TAGS: usize = 10;

/// Default wall-clock time used when the scheduled option is chosen.
pub const DEFAULT_SCHEDULE_TIME: &str = "09:00";

/// When the composed episode should go live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishTiming {
    Now,
    Scheduled { date: String, time: String },
}

impl PublishTiming {
    pub fn is_now(&self) -> bool {
        matches!(self, Self::Now)
    }
}

impl Default for PublishTiming {
    fn default() -> Self {
        Self::Now
    }
}

/// The in-memory, not-yet-persisted state of an episode being composed.
///
/// The draft is owned exclusively by the wizard and mutated only through it;
/// it is destroyed on close and reset after a successful publish.
///
/// Invariants: `tags` holds at most [`MAX_TAGS`] entries with no duplicate
/// values, `artwork` never exceeds [`super::MAX_ARTWORK_BYTES`], and `file`
/// only ever holds a supported media extension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    file: Option<StagedFile>,
    title: String,
    description: String,
    category: String,
    tags: SmallVec<[String; MAX_TAGS]>,
    artwork: Option<StagedArtwork>,
    explicit_content: bool,
    promotional_content: bool,
    timing: PublishTiming,
}

impl Draft {
    pub fn file(&self) -> Option<&StagedFile> {
        self.file.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn artwork(&self) -> Option<&StagedArtwork> {
        self.artwork.as_ref()
    }

    pub fn explicit_content(&self) -> bool {
        self.explicit_content
    }

    pub fn promotional_content(&self) -> bool {
        self.promotional_content
    }

    pub fn timing(&self) -> &PublishTiming {
        &self.timing
    }

    pub(crate) fn set_file(&mut self, file: StagedFile) {
        self.file = Some(file);
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub(crate) fn set_category(&mut self, category: String) {
        self.category = category;
    }

    pub(crate) fn set_explicit_content(&mut self, explicit_content: bool) {
        self.explicit_content = explicit_content;
    }

    pub(crate) fn set_promotional_content(&mut self, promotional_content: bool) {
        self.promotional_content = promotional_content;
    }

    pub(crate) fn set_artwork(&mut self, artwork: StagedArtwork) {
        self.artwork = Some(artwork);
    }

    pub(crate) fn set_timing(&mut self, timing: PublishTiming) {
        self.timing = timing;
    }

    /// Appends a tag; no-op when the value is already present or the cap is
    /// reached. Returns whether the tag was added.
    pub(crate) fn add_tag(&mut self, tag: &str) -> bool {
        if self.tags.len() >= MAX_TAGS || self.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    /// Removes a tag by value; no-op when absent. Returns whether a tag was
    /// removed.
    pub(crate) fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|existing| existing != tag);
        self.tags.len() != before
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{Draft, MAX_TAGS};

    #[test]
    fn tags_stay_unique_and_capped() {
        let mut draft = Draft::default();
        for i in 0..25 {
            draft.add_tag(&format!("tag-{}", i % 12));
        }
        assert_eq!(draft.tags().len(), MAX_TAGS);
        let mut seen = draft.tags().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), MAX_TAGS);
    }

    #[test]
    fn duplicate_add_is_a_no_op() {
        let mut draft = Draft::default();
        assert!(draft.add_tag("interview"));
        assert!(!draft.add_tag("interview"));
        assert_eq!(draft.tags(), ["interview"]);
    }

    #[test]
    fn removing_absent_tag_leaves_tags_unchanged() {
        let mut draft = Draft::default();
        draft.add_tag("interview");
        draft.add_tag("tech");
        assert!(!draft.remove_tag("news"));
        assert_eq!(draft.tags(), ["interview", "tech"]);
        assert!(draft.remove_tag("interview"));
        assert_eq!(draft.tags(), ["tech"]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut draft = Draft::default();
        draft.set_title("Pilot".to_owned());
        draft.add_tag("pilot");
        draft.set_explicit_content(true);
        draft.reset();
        assert_eq!(draft, Draft::default());
    }
}
