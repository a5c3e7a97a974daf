// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Largest artwork image the wizard accepts, in bytes (5 MiB).
pub const MAX_ARTWORK_BYTES: u64 = 5 * 1024 * 1024;

const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "m4a", "wav"];
const VIDEO_EXTENSIONS: [&str; 3] = ["mpg", "mp4", "mov"];

/// Closed classification of an episode media file by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
    Unsupported,
}

impl MediaKind {
    /// Classifies a file name by its extension, case-insensitively.
    ///
    /// A file without an extension is `Unsupported`.
    pub fn classify(file_name: &str) -> Self {
        let Some(extension) = extension_of(file_name) else {
            return Self::Unsupported;
        };
        let extension = extension.to_ascii_lowercase();
        if AUDIO_EXTENSIONS.contains(&extension.as_str()) {
            Self::Audio
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Self::Video
        } else {
            Self::Unsupported
        }
    }

    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

fn extension_of(file_name: &str) -> Option<&str> {
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension)
}

/// A user-selected media file held by reference; the binary content itself is
/// never persisted, only its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    name: String,
    byte_size: u64,
    mime_category: String,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, byte_size: u64, mime_category: impl Into<String>) -> Self {
        Self { name: name.into(), byte_size, mime_category: mime_category.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    pub fn mime_category(&self) -> &str {
        &self.mime_category
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::classify(&self.name)
    }

    /// The upper-cased extension stored on the episode record (`MP3`, `MOV`, ...).
    pub fn type_label(&self) -> String {
        extension_of(&self.name).unwrap_or_default().to_ascii_uppercase()
    }
}

/// A user-selected artwork image, held in memory until the wizard either
/// previews it or encodes it into the persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedArtwork {
    name: String,
    mime: String,
    bytes: Vec<u8>,
}

impl StagedArtwork {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), mime: mime.into(), bytes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Encodes the image into a self-contained `data:` URL.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::{MediaKind, StagedArtwork, StagedFile};

    #[test]
    fn classifies_known_extensions_case_insensitively() {
        assert_eq!(MediaKind::classify("episode.mp3"), MediaKind::Audio);
        assert_eq!(MediaKind::classify("episode.M4A"), MediaKind::Audio);
        assert_eq!(MediaKind::classify("episode.Wav"), MediaKind::Audio);
        assert_eq!(MediaKind::classify("episode.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::classify("episode.MOV"), MediaKind::Video);
        assert_eq!(MediaKind::classify("episode.mpg"), MediaKind::Video);
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(MediaKind::classify("episode.ogg"), MediaKind::Unsupported);
        assert_eq!(MediaKind::classify("episode.pdf"), MediaKind::Unsupported);
        assert_eq!(MediaKind::classify("episode"), MediaKind::Unsupported);
        assert_eq!(MediaKind::classify(".mp3"), MediaKind::Unsupported);
        assert_eq!(MediaKind::classify("episode."), MediaKind::Unsupported);
    }

    #[test]
    fn type_label_is_upper_cased_extension() {
        let file = StagedFile::new("Interview Part 2.m4a", 1024, "audio");
        assert_eq!(file.type_label(), "M4A");
    }

    #[test]
    fn artwork_encodes_to_data_url() {
        let artwork = StagedArtwork::new("cover.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(artwork.data_url(), "data:image/png;base64,iVBORw==");
    }
}
