// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{DateTime, SecondsFormat, Utc};

use super::draft::{Draft, PublishTiming};
use super::ids::EpisodeId;

/// Thumbnail used when an episode is published without artwork.
pub const DEFAULT_ARTWORK_URL: &str =
    "https://i.pinimg.com/1200x/cb/e9/96/cbe996b7f522c685915b29d3fdd3691d.jpg";

/// The persisted, immutable result of a successful publish action.
///
/// Derived from a [`Draft`] exactly once; the media binary is never stored,
/// only its metadata. Artwork is either a self-contained `data:` URL or the
/// fixed placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    id: EpisodeId,
    title: String,
    description: String,
    category: String,
    tags: Vec<String>,
    publish_date: String,
    publish_now: bool,
    scheduled_date: Option<String>,
    file_name: String,
    file_type: String,
    file_size: u64,
    artwork: String,
    explicit_content: bool,
    promotional_content: bool,
}

impl Episode {
    /// Derives the persisted record from a draft at publish time.
    ///
    /// `artwork` is the already-encoded representation (or the placeholder);
    /// encoding happens before derivation so the append can be all-or-nothing.
    pub fn derive(
        draft: &Draft,
        id: EpisodeId,
        published_at: DateTime<Utc>,
        artwork: String,
    ) -> Self {
        let (publish_now, scheduled_date) = match draft.timing() {
            PublishTiming::Now => (true, None),
            PublishTiming::Scheduled { date, time } => (false, Some(format!("{date}T{time}"))),
        };

        Self {
            id,
            title: draft.title().to_owned(),
            description: draft.description().to_owned(),
            category: draft.category().to_owned(),
            tags: draft.tags().to_vec(),
            publish_date: published_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            publish_now,
            scheduled_date,
            file_name: draft.file().map(|f| f.name().to_owned()).unwrap_or_default(),
            file_type: draft.file().map(|f| f.type_label()).unwrap_or_default(),
            file_size: draft.file().map(|f| f.byte_size()).unwrap_or(0),
            artwork,
            explicit_content: draft.explicit_content(),
            promotional_content: draft.promotional_content(),
        }
    }

    pub fn id(&self) -> &EpisodeId {
        &self.id
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

    pub fn publish_date(&self) -> &str {
        &self.publish_date
    }

    pub fn publish_now(&self) -> bool {
        self.publish_now
    }

    pub fn scheduled_date(&self) -> Option<&str> {
        self.scheduled_date.as_deref()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn artwork(&self) -> &str {
        &self.artwork
    }

    pub fn explicit_content(&self) -> bool {
        self.explicit_content
    }

    pub fn promotional_content(&self) -> bool {
        self.promotional_content
    }

    /// Rebuilds a record loaded from the store.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        id: EpisodeId,
        title: String,
        description: String,
        category: String,
        tags: Vec<String>,
        publish_date: String,
        publish_now: bool,
        scheduled_date: Option<String>,
        file_name: String,
        file_type: String,
        file_size: u64,
        artwork: String,
        explicit_content: bool,
        promotional_content: bool,
    ) -> Self {
        Self {
            id,
            title,
            description,
            category,
            tags,
            publish_date,
            publish_now,
            scheduled_date,
            file_name,
            file_type,
            file_size,
            artwork,
            explicit_content,
            promotional_content,
        }
    }

    /// Replaces the id; used by the store to disambiguate same-millisecond
    /// publishes before the record is persisted.
    pub(crate) fn with_id(mut self, id: EpisodeId) -> Self {
        self.id = id;
        self
    }
}
