// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wavecast — local-first podcast studio core.
//!
//! Accounts, session state, the three-step episode upload wizard, and the
//! published episode list, all persisted through a string-keyed store.

pub mod auth;
pub mod model;
pub mod nav;
pub mod render;
pub mod stage;
pub mod store;
pub mod wizard;
