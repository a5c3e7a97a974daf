// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Small text formatting helpers shared by the projections.

use crate::model::MediaKind;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human file size in base-1024 units, up to two decimals, trailing zeros
/// trimmed (`1.5 KB`, `4.01 MB`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// Playback duration as `m:ss`.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Rough bitrate estimate in kbps from file size and playback duration.
pub fn estimate_bitrate_kbps(byte_size: u64, duration_seconds: f64) -> Option<u32> {
    if duration_seconds <= 0.0 {
        return None;
    }
    Some(((byte_size as f64 * 8.0) / duration_seconds / 1000.0).round() as u32)
}

pub fn file_icon(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Audio => "\u{1f3b5}",
        MediaKind::Video => "\u{1f3a5}",
        MediaKind::Unsupported => "\u{1f4c4}",
    }
}
