// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A published episode's uniqueness token.
///
/// Ids are derived from the creation time in milliseconds, serialized as a
/// decimal string. The store disambiguates collisions before persisting, so a
/// persisted list never contains the same id twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpisodeId {
    value: String,
}

impl EpisodeId {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::NotDecimal);
        }
        Ok(Self { value })
    }

    pub fn from_millis(millis: u64) -> Self {
        Self { value: millis.to_string() }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }

    pub fn millis(&self) -> Option<u64> {
        self.value.parse().ok()
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for EpisodeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for EpisodeId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for EpisodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for EpisodeId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    NotDecimal,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("episode id must not be empty"),
            Self::NotDecimal => f.write_str("episode id must be a decimal millisecond token"),
        }
    }
}

impl std::error::Error for IdError {}
