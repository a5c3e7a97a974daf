// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{NaiveDate, TimeZone, Utc};

use super::{PublishError, Wizard, WizardError, WizardStep};
use crate::model::{
    PublishTiming, StagedArtwork, StagedFile, DEFAULT_ARTWORK_URL, MAX_ARTWORK_BYTES,
};
use crate::nav::NavTarget;
use crate::render::{DurationField, PlayerPanel, Thumbnail};
use crate::store::{EpisodeStore, MemoryStore};

fn audio_file() -> StagedFile {
    StagedFile::new("pilot.mp3", 4_200_000, "audio")
}

fn small_artwork() -> StagedArtwork {
    StagedArtwork::new("cover.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
}

/// Drives a fresh wizard to the details step with the file committed.
fn wizard_at_details() -> Wizard {
    let mut wizard = Wizard::new();
    let ticket = wizard.select_file(audio_file()).expect("valid file");
    wizard.file_processed(ticket).expect("duration ticket");
    wizard
}

fn fill_required(wizard: &mut Wizard) {
    wizard.set_title("Pilot");
    wizard.set_description("First episode");
    wizard.set_category("technology");
}

#[test]
fn file_commits_only_when_processing_completes() {
    let mut wizard = Wizard::new();
    let ticket = wizard.select_file(audio_file()).expect("valid file");

    assert_eq!(wizard.step(), WizardStep::Upload);
    assert!(wizard.draft().file().is_none());

    let duration_ticket = wizard.file_processed(ticket).expect("advances");
    assert_eq!(wizard.step(), WizardStep::Details);
    assert_eq!(wizard.draft().file().map(StagedFile::name), Some("pilot.mp3"));

    assert!(wizard.media_duration_ready(duration_ticket, 185.0));
    assert_eq!(wizard.media_duration_secs(), Some(185.0));
}

#[test]
fn unsupported_file_is_rejected_and_wizard_stays_usable() {
    let mut wizard = Wizard::new();

    let err = wizard.select_file(StagedFile::new("notes.pdf", 1024, "application")).unwrap_err();
    assert_eq!(err, WizardError::UnsupportedFileType { file_name: "notes.pdf".to_owned() });
    assert!(wizard.draft().file().is_none());
    assert_eq!(wizard.step(), WizardStep::Upload);

    assert!(wizard.select_file(audio_file()).is_ok());
}

#[test]
fn selecting_a_file_outside_the_upload_step_is_a_step_mismatch() {
    let mut wizard = wizard_at_details();
    let err = wizard.select_file(audio_file()).unwrap_err();
    assert_eq!(
        err,
        WizardError::StepMismatch { expected: WizardStep::Upload, actual: WizardStep::Details }
    );
}

#[test]
fn stale_processing_ticket_is_ignored_after_cancel() {
    let mut wizard = Wizard::new();
    let ticket = wizard.select_file(audio_file()).expect("valid file");
    wizard.cancel();

    assert_eq!(wizard.file_processed(ticket), None);
    assert_eq!(wizard.step(), WizardStep::Upload);
    assert!(wizard.draft().file().is_none());
}

#[test]
fn stale_duration_ticket_is_ignored() {
    let mut wizard = wizard_at_details();
    let first_ticket = wizard.select_artwork(small_artwork()).expect("artwork");
    // An unrelated ticket never completes the duration stage.
    assert!(!wizard.media_duration_ready(first_ticket, 60.0));
    assert_eq!(wizard.media_duration_secs(), None);
}

#[test]
fn preview_requires_all_required_fields() {
    let mut wizard = wizard_at_details();

    assert_eq!(wizard.continue_to_preview(), Err(WizardError::MissingRequiredFields));

    wizard.set_title("  Pilot  ");
    wizard.set_description("   ");
    wizard.set_category("technology");
    assert_eq!(wizard.continue_to_preview(), Err(WizardError::MissingRequiredFields));
    assert_eq!(wizard.step(), WizardStep::Details);

    wizard.set_description("First episode");
    wizard.continue_to_preview().expect("complete form");
    assert_eq!(wizard.step(), WizardStep::Preview);
    // The draft keeps the trimmed values.
    assert_eq!(wizard.draft().title(), "Pilot");
}

#[test]
fn preview_from_upload_is_a_step_mismatch() {
    let mut wizard = Wizard::new();
    assert_eq!(
        wizard.continue_to_preview(),
        Err(WizardError::StepMismatch { expected: WizardStep::Details, actual: WizardStep::Upload })
    );
}

#[test]
fn oversized_artwork_is_rejected_without_touching_the_draft() {
    let mut wizard = wizard_at_details();

    let oversized =
        StagedArtwork::new("huge.png", "image/png", vec![0; (MAX_ARTWORK_BYTES + 1) as usize]);
    let err = wizard.select_artwork(oversized).unwrap_err();
    assert_eq!(
        err,
        WizardError::ArtworkTooLarge { byte_size: MAX_ARTWORK_BYTES + 1, max: MAX_ARTWORK_BYTES }
    );
    assert!(wizard.draft().artwork().is_none());
}

#[test]
fn artwork_preview_appears_once_decoded() {
    let mut wizard = wizard_at_details();
    let ticket = wizard.select_artwork(small_artwork()).expect("artwork");
    assert_eq!(wizard.artwork_preview(), None);

    assert!(wizard.artwork_decoded(ticket, small_artwork().data_url()));
    assert_eq!(wizard.artwork_preview(), Some("data:image/png;base64,iVBORw=="));

    // Completing the same ticket again is a no-op.
    assert!(!wizard.artwork_decoded(ticket, "data:image/png;base64,XXXX".to_owned()));
}

#[test]
fn reselecting_artwork_invalidates_the_previous_decode() {
    let mut wizard = wizard_at_details();
    let first = wizard.select_artwork(small_artwork()).expect("artwork");
    let _second = wizard.select_artwork(small_artwork()).expect("artwork");

    assert!(!wizard.artwork_decoded(first, "stale".to_owned()));
    assert_eq!(wizard.artwork_preview(), None);
}

#[test]
fn schedule_defaults_to_tomorrow_morning() {
    let mut wizard = wizard_at_details();
    wizard.choose_schedule(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());
    assert_eq!(
        wizard.draft().timing(),
        &PublishTiming::Scheduled { date: "2026-08-25".to_owned(), time: "09:00".to_owned() }
    );

    wizard.choose_publish_now();
    assert_eq!(wizard.draft().timing(), &PublishTiming::Now);
}

#[test]
fn preview_projection_reflects_wizard_state() {
    let mut wizard = wizard_at_details();
    fill_required(&mut wizard);
    wizard.select_artwork(small_artwork()).expect("artwork");

    let preview = wizard.preview();
    assert_eq!(preview.title, "Pilot");
    assert_eq!(preview.thumbnail, Thumbnail::Placeholder);
    let Some(PlayerPanel::Audio { duration, .. }) = preview.player else {
        panic!("expected audio panel");
    };
    assert_eq!(duration, DurationField::Loading);
}

#[tokio::test]
async fn publish_appends_resets_and_navigates_to_the_dashboard() {
    let store = MemoryStore::new();
    let episodes = EpisodeStore::new(store);

    let mut wizard = wizard_at_details();
    fill_required(&mut wizard);
    wizard.add_tag("pilot");
    wizard.set_explicit_content(true);
    wizard.continue_to_preview().expect("complete form");

    let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
    let outcome = wizard.publish(&episodes, now).await.expect("publish");
    assert_eq!(outcome.navigate_to, NavTarget::Dashboard);

    let stored = episodes.load().expect("load");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id(), &outcome.episode_id);
    assert_eq!(stored[0].title(), "Pilot");
    assert_eq!(stored[0].artwork(), DEFAULT_ARTWORK_URL);
    assert!(stored[0].explicit_content());

    assert_eq!(wizard.step(), WizardStep::Upload);
    assert!(wizard.draft().file().is_none());
    assert!(wizard.draft().tags().is_empty());
}

#[tokio::test]
async fn publish_encodes_selected_artwork() {
    let store = MemoryStore::new();
    let episodes = EpisodeStore::new(store);

    let mut wizard = wizard_at_details();
    fill_required(&mut wizard);
    wizard.select_artwork(small_artwork()).expect("artwork");
    wizard.continue_to_preview().expect("complete form");

    let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
    wizard.publish(&episodes, now).await.expect("publish");

    let stored = episodes.load().expect("load");
    assert_eq!(stored[0].artwork(), "data:image/png;base64,iVBORw==");
}

#[tokio::test]
async fn publish_outside_the_preview_step_is_refused() {
    let store = MemoryStore::new();
    let episodes = EpisodeStore::new(store);

    let mut wizard = Wizard::new();
    let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
    let err = wizard.publish(&episodes, now).await.unwrap_err();
    assert!(matches!(err, PublishError::NotInPreview { actual: WizardStep::Upload }));
    assert!(episodes.load().expect("load").is_empty());
}
