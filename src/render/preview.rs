// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Preview projection of a draft.
//!
//! Pure derivation: the wizard hands in its state and gets a renderable
//! model back; nothing here mutates the draft or touches the store.

use crate::model::{Draft, MediaKind, StagedFile, DEFAULT_ARTWORK_URL};

use super::text::{estimate_bitrate_kbps, file_icon, format_duration, format_file_size};

pub const FALLBACK_TITLE: &str = "Name of podcast";
pub const FALLBACK_DESCRIPTION: &str = "No description provided.";
pub const FALLBACK_CATEGORY: &str = "Uncategorized";

/// The preview step's renderable model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub title: String,
    pub description: String,
    pub category_label: String,
    pub tags: Vec<String>,
    pub thumbnail: Thumbnail,
    pub player: Option<PlayerPanel>,
    pub warnings: Vec<WarningBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    /// Decoded artwork as a self-contained data URL.
    Artwork(String),
    Placeholder,
}

impl Thumbnail {
    pub fn src(&self) -> &str {
        match self {
            Self::Artwork(data_url) => data_url,
            Self::Placeholder => DEFAULT_ARTWORK_URL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerPanel {
    Audio {
        file_name: String,
        size_label: String,
        duration: DurationField,
        bitrate: BitrateField,
    },
    /// Video files show basic info only; playback preview is not available.
    Video { file_name: String },
}

/// Best-effort duration; stays loading until the media reports metadata,
/// possibly forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationField {
    Loading,
    Known(String),
}

impl DurationField {
    pub fn label(&self) -> &str {
        match self {
            Self::Loading => "Loading...",
            Self::Known(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitrateField {
    Analyzing,
    Kbps(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningBadge {
    Explicit,
    ContainsAds,
}

impl WarningBadge {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Explicit => "EXPLICIT",
            Self::ContainsAds => "CONTAINS ADS",
        }
    }
}

/// File card shown next to the drop area and in the preview sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCard {
    pub icon: &'static str,
    pub file_name: String,
    pub size_label: String,
}

pub fn project_file_card(file: &StagedFile) -> FileCard {
    FileCard {
        icon: file_icon(file.kind()),
        file_name: file.name().to_owned(),
        size_label: format_file_size(file.byte_size()),
    }
}

/// Builds the full preview model from the wizard's current state.
///
/// `artwork_preview` is the decoded representation once the decode stage has
/// completed; until then the placeholder is projected. `media_duration_secs`
/// is the best-effort duration from the metadata stage.
pub fn project_preview(
    draft: &Draft,
    artwork_preview: Option<&str>,
    media_duration_secs: Option<f64>,
) -> Preview {
    let title = non_empty_or(draft.title(), FALLBACK_TITLE);
    let description = non_empty_or(draft.description(), FALLBACK_DESCRIPTION);
    let category_label = non_empty_or(draft.category(), FALLBACK_CATEGORY);

    let thumbnail = match artwork_preview {
        Some(data_url) => Thumbnail::Artwork(data_url.to_owned()),
        None => Thumbnail::Placeholder,
    };

    let player = draft.file().map(|file| match file.kind() {
        MediaKind::Audio => PlayerPanel::Audio {
            file_name: file.name().to_owned(),
            size_label: format_file_size(file.byte_size()),
            duration: match media_duration_secs {
                Some(seconds) => DurationField::Known(format_duration(seconds)),
                None => DurationField::Loading,
            },
            bitrate: media_duration_secs
                .and_then(|seconds| estimate_bitrate_kbps(file.byte_size(), seconds))
                .map_or(BitrateField::Analyzing, BitrateField::Kbps),
        },
        // Unsupported never reaches the draft; the selection guard rejects it.
        MediaKind::Video | MediaKind::Unsupported => {
            PlayerPanel::Video { file_name: file.name().to_owned() }
        }
    });

    let mut warnings = Vec::new();
    if draft.explicit_content() {
        warnings.push(WarningBadge::Explicit);
    }
    if draft.promotional_content() {
        warnings.push(WarningBadge::ContainsAds);
    }

    Preview {
        title,
        description,
        category_label,
        tags: draft.tags().to_vec(),
        thumbnail,
        player,
        warnings,
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_owned()
    } else {
        value.to_owned()
    }
}
