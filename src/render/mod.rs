// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Renderable projections of wizard state.

pub mod preview;
pub mod text;

pub use preview::{
    project_file_card, project_preview, BitrateField, DurationField, FileCard, PlayerPanel,
    Preview, Thumbnail, WarningBadge, FALLBACK_CATEGORY, FALLBACK_DESCRIPTION, FALLBACK_TITLE,
};
pub use text::{estimate_bitrate_kbps, file_icon, format_duration, format_file_size};
