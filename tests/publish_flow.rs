// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end flow: signup, login, the full upload wizard, and the persisted
//! episode list, against both store backends.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{TimeZone, Utc};

use wavecast::auth::{current_session, log_in, sign_up, SignUpForm};
use wavecast::model::{StagedArtwork, StagedFile};
use wavecast::nav::NavTarget;
use wavecast::store::{EpisodeStore, MemoryStore, StoreFolder};
use wavecast::wizard::{Wizard, WizardStep};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(label: &str) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "wavecast-flow-{label}-{}-{seq}-{nanos}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn demo_form() -> SignUpForm {
    SignUpForm {
        name: "Ada".to_owned(),
        email: "ada@wavecast.test".to_owned(),
        password: "super-secret".to_owned(),
        confirm_password: "super-secret".to_owned(),
    }
}

async fn publish_one(
    wizard: &mut Wizard,
    episodes: &EpisodeStore<&StoreFolder>,
    title: &str,
    now: chrono::DateTime<Utc>,
) -> wavecast::model::EpisodeId {
    let ticket = wizard
        .select_file(StagedFile::new("pilot.mp3", 4_200_000, "audio"))
        .expect("valid file");
    let duration_ticket = wizard.file_processed(ticket).expect("advance to details");
    wizard.media_duration_ready(duration_ticket, 185.0);

    wizard.set_title(title);
    wizard.set_description("An episode.");
    wizard.set_category("technology");
    wizard.continue_to_preview().expect("complete form");

    let outcome = wizard.publish(episodes, now).await.expect("publish");
    assert_eq!(outcome.navigate_to, NavTarget::Dashboard);
    assert_eq!(wizard.step(), WizardStep::Upload);
    outcome.episode_id
}

#[tokio::test]
async fn full_flow_persists_across_reopen() {
    let dir = TempDir::new("full");
    let folder = StoreFolder::new(&dir.path);

    let outcome = sign_up(&folder, &demo_form(), Utc::now()).expect("signup");
    assert_eq!(outcome.navigate_to, NavTarget::GetStarted);
    let outcome = log_in(&folder, "ada@wavecast.test", "super-secret").expect("login");
    assert_eq!(outcome.navigate_to, NavTarget::Dashboard);

    let episodes = EpisodeStore::new(&folder);
    let mut wizard = Wizard::new();

    let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
    let first = publish_one(&mut wizard, &episodes, "Pilot", now).await;
    // A second publish inside the same millisecond still gets a distinct id.
    let second = publish_one(&mut wizard, &episodes, "Episode Two", now).await;
    assert_ne!(first, second);

    // Reopen the folder as a fresh handle, as a new page load would.
    let reopened = StoreFolder::new(&dir.path);
    let session = current_session(&reopened).expect("session read").expect("logged in");
    assert_eq!(session.name(), "Ada");

    let list = EpisodeStore::new(&reopened).load().expect("load");
    assert_eq!(list.len(), 2);
    // Newest first.
    assert_eq!(list[0].id(), &second);
    assert_eq!(list[0].title(), "Episode Two");
    assert_eq!(list[1].id(), &first);
    assert_eq!(list[1].title(), "Pilot");
    assert_eq!(list[1].file_type(), "MP3");
    assert_eq!(list[1].publish_date(), "2026-08-24T12:00:00.000Z");
}

#[tokio::test]
async fn artwork_round_trips_through_the_persisted_record() {
    let store = MemoryStore::new();
    let episodes = EpisodeStore::new(&store);

    let mut wizard = Wizard::new();
    let ticket = wizard
        .select_file(StagedFile::new("art-show.m4a", 1_000_000, "audio"))
        .expect("valid file");
    wizard.file_processed(ticket).expect("advance to details");

    wizard.set_title("Art Show");
    wizard.set_description("With artwork.");
    wizard.set_category("arts");
    let artwork = StagedArtwork::new("cover.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]);
    let expected = artwork.data_url();
    wizard.select_artwork(artwork).expect("artwork");
    wizard.continue_to_preview().expect("complete form");

    wizard.publish(&episodes, Utc::now()).await.expect("publish");

    let list = episodes.load().expect("load");
    assert_eq!(list[0].artwork(), expected);
    assert!(list[0].artwork().starts_with("data:image/png;base64,"));
}
