// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Named asynchronous stages.
//!
//! The original UI simulated these with wall-clock timers and browser
//! callbacks. Here each stage is an explicit ticket whose completion the
//! caller reports back to the wizard, so tests trigger completion
//! deterministically and the demo drives it from real timers. Stages are not
//! cancellable and carry no timeout: a media resource that never reports
//! metadata leaves the duration projection loading indefinitely.

use std::fmt;

use crate::model::StagedArtwork;

/// The asynchronous work the wizard can be waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Simulated processing after a valid file selection, gating
    /// `Upload -> Details`.
    FileProcessing,
    /// Decoding a selected artwork image into a previewable representation.
    ArtworkDecode,
    /// Best-effort discovery of the media playback duration.
    MediaDuration,
    /// Encoding artwork into its self-contained persisted representation.
    ArtworkEncode,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileProcessing => f.write_str("file-processing"),
            Self::ArtworkDecode => f.write_str("artwork-decode"),
            Self::MediaDuration => f.write_str("media-duration"),
            Self::ArtworkEncode => f.write_str("artwork-encode"),
        }
    }
}

/// Handle for one started stage.
///
/// A ticket becomes stale when the draft it belongs to is reset; completing
/// a stale ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageTicket {
    kind: StageKind,
    seq: u64,
}

impl StageTicket {
    pub fn kind(&self) -> StageKind {
        self.kind
    }
}

/// Issues tickets with strictly increasing sequence numbers.
#[derive(Debug, Default)]
pub(crate) struct StageCounter {
    next_seq: u64,
}

impl StageCounter {
    pub(crate) fn issue(&mut self, kind: StageKind) -> StageTicket {
        let seq = self.next_seq;
        self.next_seq += 1;
        StageTicket { kind, seq }
    }
}

/// Encodes artwork off the event path.
///
/// Multi-megabyte base64 runs on the blocking pool so a large image does not
/// stall other queued work.
pub async fn encode_artwork(artwork: StagedArtwork) -> Result<String, EncodeError> {
    tokio::task::spawn_blocking(move || artwork.data_url())
        .await
        .map_err(|_| EncodeError::TaskFailed)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    TaskFailed,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TaskFailed => f.write_str("artwork encoding task failed"),
        }
    }
}

impl std::error::Error for EncodeError {}
