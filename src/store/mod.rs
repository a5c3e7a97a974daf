// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The local key-value store and the repositories built on it.
//!
//! Keys mirror the original browser storage layout: a credentials list, the
//! flat session triple, and the published-episodes list, each read/written
//! independently with no cross-key atomicity.

pub mod episodes;
pub mod kv;

pub use episodes::EpisodeStore;
pub use kv::{
    KeyValueStore, MemoryStore, StoreError, StoreFolder, WriteDurability, LOGGED_IN_KEY,
    PUBLISHED_EPISODES_KEY, USER_ACCOUNTS_KEY, USER_EMAIL_KEY, USER_NAME_KEY,
};
