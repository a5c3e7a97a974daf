// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The episode upload wizard.
//!
//! A three-step linear flow (`Upload -> Details -> Preview`) over one
//! in-memory [`Draft`]. Every mutation goes through the wizard; validation
//! failures abort the operation with no partial state change, and the wizard
//! stays usable after any rejection. Publish derives the immutable
//! [`Episode`] record and appends it through the episode store; success is
//! reported only once the write has been confirmed.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    Draft, Episode, EpisodeId, PublishTiming, StagedArtwork, StagedFile, DEFAULT_ARTWORK_URL,
    DEFAULT_SCHEDULE_TIME, MAX_ARTWORK_BYTES,
};
use crate::nav::NavTarget;
use crate::render::{project_preview, Preview};
use crate::stage::{self, EncodeError, StageCounter, StageKind, StageTicket};
use crate::store::{EpisodeStore, KeyValueStore, StoreError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Upload,
    Details,
    Preview,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upload => f.write_str("upload"),
            Self::Details => f.write_str("details"),
            Self::Preview => f.write_str("preview"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// File extension outside the supported audio/video set.
    UnsupportedFileType { file_name: String },
    /// Artwork above the 5 MiB cap.
    ArtworkTooLarge { byte_size: u64, max: u64 },
    /// Title, description, or category empty after trimming.
    MissingRequiredFields,
    /// Operation invoked outside the step it belongs to.
    StepMismatch { expected: WizardStep, actual: WizardStep },
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFileType { file_name } => {
                write!(f, "please select a valid audio or video file (got {file_name:?})")
            }
            Self::ArtworkTooLarge { byte_size, max } => {
                write!(f, "image must be smaller than {max} bytes (got {byte_size})")
            }
            Self::MissingRequiredFields => f.write_str("please fill in all required fields"),
            Self::StepMismatch { expected, actual } => {
                write!(f, "operation belongs to the {expected} step (currently {actual})")
            }
        }
    }
}

impl std::error::Error for WizardError {}

#[derive(Debug)]
pub enum PublishError {
    NotInPreview { actual: WizardStep },
    ArtworkEncode(EncodeError),
    Store(StoreError),
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInPreview { actual } => {
                write!(f, "publish is only available from the preview step (currently {actual})")
            }
            Self::ArtworkEncode(source) => write!(f, "artwork encoding failed: {source}"),
            Self::Store(source) => write!(f, "could not save episode: {source}"),
        }
    }
}

impl std::error::Error for PublishError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotInPreview { .. } => None,
            Self::ArtworkEncode(source) => Some(source),
            Self::Store(source) => Some(source),
        }
    }
}

impl From<StoreError> for PublishError {
    fn from(source: StoreError) -> Self {
        Self::Store(source)
    }
}

/// Result of a confirmed publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    pub episode_id: EpisodeId,
    pub navigate_to: NavTarget,
}

/// The wizard controller: owns the draft and the stage bookkeeping.
#[derive(Debug, Default)]
pub struct Wizard {
    step: WizardStep,
    draft: Draft,
    stages: StageCounter,
    pending_file: Option<(StageTicket, StagedFile)>,
    pending_artwork_decode: Option<StageTicket>,
    pending_media_duration: Option<StageTicket>,
    artwork_preview: Option<String>,
    media_duration_secs: Option<f64>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Decoded artwork representation once the decode stage has completed.
    pub fn artwork_preview(&self) -> Option<&str> {
        self.artwork_preview.as_deref()
    }

    pub fn media_duration_secs(&self) -> Option<f64> {
        self.media_duration_secs
    }

    /// Validates a file selection and starts the processing stage.
    ///
    /// The draft's `file` field is untouched until the stage completes; an
    /// unsupported extension rejects the selection outright.
    pub fn select_file(&mut self, file: StagedFile) -> Result<StageTicket, WizardError> {
        if self.step != WizardStep::Upload {
            return Err(WizardError::StepMismatch {
                expected: WizardStep::Upload,
                actual: self.step,
            });
        }
        if !file.kind().is_supported() {
            return Err(WizardError::UnsupportedFileType { file_name: file.name().to_owned() });
        }

        let ticket = self.stages.issue(StageKind::FileProcessing);
        self.pending_file = Some((ticket, file));
        Ok(ticket)
    }

    /// Completes the processing stage: commits the staged file and advances
    /// to `Details`. Starts the best-effort media-duration stage and returns
    /// its ticket; a stale ticket is ignored.
    pub fn file_processed(&mut self, ticket: StageTicket) -> Option<StageTicket> {
        let (pending, file) = self.pending_file.take()?;
        if pending != ticket {
            self.pending_file = Some((pending, file));
            return None;
        }

        self.draft.set_file(file);
        self.step = WizardStep::Details;
        let duration_ticket = self.stages.issue(StageKind::MediaDuration);
        self.pending_media_duration = Some(duration_ticket);
        Some(duration_ticket)
    }

    /// Records the playback duration reported by the media resource.
    pub fn media_duration_ready(&mut self, ticket: StageTicket, seconds: f64) -> bool {
        if self.pending_media_duration != Some(ticket) {
            return false;
        }
        self.pending_media_duration = None;
        self.media_duration_secs = Some(seconds);
        true
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.set_title(title.into());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.set_description(description.into());
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.draft.set_category(category.into());
    }

    pub fn set_explicit_content(&mut self, explicit: bool) {
        self.draft.set_explicit_content(explicit);
    }

    pub fn set_promotional_content(&mut self, promotional: bool) {
        self.draft.set_promotional_content(promotional);
    }

    /// Adds a trimmed tag; no-op on empty input, duplicates, or a full list.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        self.draft.add_tag(tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.draft.remove_tag(tag)
    }

    /// Accepts artwork up to the size cap and starts the decode stage for
    /// the image preview. An oversized image leaves the draft unchanged.
    pub fn select_artwork(&mut self, artwork: StagedArtwork) -> Result<StageTicket, WizardError> {
        if artwork.byte_size() > MAX_ARTWORK_BYTES {
            return Err(WizardError::ArtworkTooLarge {
                byte_size: artwork.byte_size(),
                max: MAX_ARTWORK_BYTES,
            });
        }

        self.draft.set_artwork(artwork);
        self.artwork_preview = None;
        let ticket = self.stages.issue(StageKind::ArtworkDecode);
        self.pending_artwork_decode = Some(ticket);
        Ok(ticket)
    }

    /// Completes the decode stage with the previewable representation.
    pub fn artwork_decoded(&mut self, ticket: StageTicket, data_url: String) -> bool {
        if self.pending_artwork_decode != Some(ticket) {
            return false;
        }
        self.pending_artwork_decode = None;
        self.artwork_preview = Some(data_url);
        true
    }

    pub fn choose_publish_now(&mut self) {
        self.draft.set_timing(PublishTiming::Now);
    }

    /// Selects the scheduled option, defaulting to tomorrow at 09:00.
    pub fn choose_schedule(&mut self, today: NaiveDate) {
        let tomorrow = today.succ_opt().unwrap_or(today);
        self.draft.set_timing(PublishTiming::Scheduled {
            date: tomorrow.format("%Y-%m-%d").to_string(),
            time: DEFAULT_SCHEDULE_TIME.to_owned(),
        });
    }

    /// Copies explicit date/time inputs into the scheduled timing.
    pub fn set_schedule(&mut self, date: impl Into<String>, time: impl Into<String>) {
        self.draft.set_timing(PublishTiming::Scheduled { date: date.into(), time: time.into() });
    }

    /// `Details -> Preview`: requires trimmed title, description, and
    /// category to be non-empty. The trimmed values are what the draft keeps.
    pub fn continue_to_preview(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::Details {
            return Err(WizardError::StepMismatch {
                expected: WizardStep::Details,
                actual: self.step,
            });
        }

        let title = self.draft.title().trim().to_owned();
        let description = self.draft.description().trim().to_owned();
        let category = self.draft.category().trim().to_owned();
        if title.is_empty() || description.is_empty() || category.is_empty() {
            return Err(WizardError::MissingRequiredFields);
        }

        self.draft.set_title(title);
        self.draft.set_description(description);
        self.draft.set_category(category);
        self.step = WizardStep::Preview;
        Ok(())
    }

    /// Projects the preview model from the current state.
    pub fn preview(&self) -> Preview {
        project_preview(&self.draft, self.artwork_preview.as_deref(), self.media_duration_secs)
    }

    /// Discards the draft entirely and returns to `Upload`.
    ///
    /// Outstanding stage tickets become stale; completing one afterwards is
    /// a no-op.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Publishes the composed episode.
    ///
    /// Artwork, when present, is encoded before the append so the list write
    /// is all-or-nothing; without artwork the placeholder is used
    /// immediately. The wizard resets to `Upload` only after the write has
    /// been confirmed.
    pub async fn publish<S: KeyValueStore>(
        &mut self,
        episodes: &EpisodeStore<S>,
        now: DateTime<Utc>,
    ) -> Result<PublishOutcome, PublishError> {
        if self.step != WizardStep::Preview {
            return Err(PublishError::NotInPreview { actual: self.step });
        }

        let artwork = match self.draft.artwork() {
            Some(artwork) => {
                tracing::debug!(stage = %StageKind::ArtworkEncode, "encoding artwork");
                stage::encode_artwork(artwork.clone())
                    .await
                    .map_err(PublishError::ArtworkEncode)?
            }
            None => DEFAULT_ARTWORK_URL.to_owned(),
        };

        let id = EpisodeId::from_millis(now.timestamp_millis().max(0) as u64);
        let episode = Episode::derive(&self.draft, id, now, artwork);
        let episode_id = episodes.append(episode)?;

        tracing::info!(id = %episode_id, "episode published");
        self.reset();
        Ok(PublishOutcome { episode_id, navigate_to: NavTarget::Dashboard })
    }

    fn reset(&mut self) {
        self.draft.reset();
        self.pending_file = None;
        self.pending_artwork_decode = None;
        self.pending_media_duration = None;
        self.artwork_preview = None;
        self.media_duration_secs = None;
        self.step = WizardStep::Upload;
    }
}

#[cfg(test)]
mod tests;
