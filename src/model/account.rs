// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A stored user account.
///
/// Accounts live as one JSON list under a single store key, append-only apart
/// from the uniqueness check on `email` (exact, case-sensitive). Passwords
/// are stored as entered; there is no server and no hashing in this local
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    name: String,
    email: String,
    password: String,
    created_at: String,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            created_at: created_at.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// The user identity written to the flat session keys on login/signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    name: String,
    email: String,
}

impl SessionUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
