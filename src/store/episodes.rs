// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::model::{Episode, EpisodeId};

use super::kv::{KeyValueStore, StoreError, PUBLISHED_EPISODES_KEY};

/// The persisted episode list under one store key.
///
/// The list is one serialized blob, newest first. Appending is
/// read-modify-write: the whole value is re-serialized and written in a
/// single `set`, so a failed write never leaves a partially updated list.
#[derive(Debug, Clone)]
pub struct EpisodeStore<S> {
    store: S,
}

impl<S: KeyValueStore> EpisodeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the persisted list; a missing key is an empty list, a corrupt
    /// value is an error and the stored blob stays untouched.
    pub fn load(&self) -> Result<Vec<Episode>, StoreError> {
        let Some(raw) = self.store.get(PUBLISHED_EPISODES_KEY)? else {
            return Ok(Vec::new());
        };

        let records: Vec<EpisodeJson> = serde_json::from_str(&raw).map_err(|source| {
            StoreError::Json { key: PUBLISHED_EPISODES_KEY.to_owned(), source }
        })?;

        records.into_iter().map(episode_from_json).collect()
    }

    /// Prepends one record and writes the full list back.
    ///
    /// When the millisecond-derived id is already taken (two publishes inside
    /// one millisecond), the token is bumped until unused, so the returned id
    /// is always distinct within the list.
    pub fn append(&self, episode: Episode) -> Result<EpisodeId, StoreError> {
        let mut episodes = self.load()?;

        let mut id = episode.id().clone();
        while episodes.iter().any(|existing| existing.id() == &id) {
            let millis = id.millis().unwrap_or(0);
            id = EpisodeId::from_millis(millis.saturating_add(1));
        }
        let episode = episode.with_id(id.clone());

        episodes.insert(0, episode);
        self.save(&episodes)?;

        tracing::debug!(id = %id, total = episodes.len(), "episode appended");
        Ok(id)
    }

    fn save(&self, episodes: &[Episode]) -> Result<(), StoreError> {
        let records: Vec<EpisodeJson> = episodes.iter().map(episode_to_json).collect();
        let raw = serde_json::to_string(&records).map_err(|source| StoreError::Json {
            key: PUBLISHED_EPISODES_KEY.to_owned(),
            source,
        })?;
        self.store.set(PUBLISHED_EPISODES_KEY, &raw)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EpisodeJson {
    id: String,
    title: String,
    description: String,
    category: String,
    tags: Vec<String>,
    publish_date: String,
    publish_now: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scheduled_date: Option<String>,
    file_name: String,
    file_type: String,
    file_size: u64,
    artwork: String,
    explicit_content: bool,
    promotional_content: bool,
}

fn episode_to_json(episode: &Episode) -> EpisodeJson {
    EpisodeJson {
        id: episode.id().as_str().to_owned(),
        title: episode.title().to_owned(),
        description: episode.description().to_owned(),
        category: episode.category().to_owned(),
        tags: episode.tags().to_vec(),
        publish_date: episode.publish_date().to_owned(),
        publish_now: episode.publish_now(),
        scheduled_date: episode.scheduled_date().map(ToOwned::to_owned),
        file_name: episode.file_name().to_owned(),
        file_type: episode.file_type().to_owned(),
        file_size: episode.file_size(),
        artwork: episode.artwork().to_owned(),
        explicit_content: episode.explicit_content(),
        promotional_content: episode.promotional_content(),
    }
}

fn episode_from_json(json: EpisodeJson) -> Result<Episode, StoreError> {
    let id = EpisodeId::new(json.id.clone()).map_err(|source| StoreError::InvalidId {
        key: PUBLISHED_EPISODES_KEY.to_owned(),
        value: json.id,
        source,
    })?;

    Ok(Episode::from_parts(
        id,
        json.title,
        json.description,
        json.category,
        json.tags,
        json.publish_date,
        json.publish_now,
        json.scheduled_date,
        json.file_name,
        json.file_type,
        json.file_size,
        json.artwork,
        json.explicit_content,
        json.promotional_content,
    ))
}
