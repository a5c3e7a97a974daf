// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Drafts are composed in the wizard; episodes are the immutable records a
//! publish action derives from them. Accounts and sessions back the
//! login/signup surfaces.

pub mod account;
pub mod draft;
pub mod episode;
pub mod ids;
pub mod media;

pub use account::{Account, SessionUser};
pub use draft::{Draft, PublishTiming, DEFAULT_SCHEDULE_TIME, MAX_TAGS};
pub use episode::{Episode, DEFAULT_ARTWORK_URL};
pub use ids::{EpisodeId, IdError};
pub use media::{MediaKind, StagedArtwork, StagedFile, MAX_ARTWORK_BYTES};
