// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wavecast CLI entrypoint.
//!
//! By default this opens the store folder and prints the current session and
//! the published episode list.
//!
//! Use `--demo` to run a scripted end-to-end flow (signup, login, upload
//! wizard, publish) against a throwaway store folder under the system temp
//! directory.

use std::error::Error;
use std::time::Duration;

use chrono::Utc;

use wavecast::auth::{log_in, sign_up, SignUpForm};
use wavecast::model::{StagedArtwork, StagedFile};
use wavecast::render::format_file_size;
use wavecast::store::{EpisodeStore, StoreFolder, WriteDurability};
use wavecast::wizard::Wizard;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<store-dir>] [--durable-writes]\n  {program} [--store <dir>] [--durable-writes]\n  {program} --demo\n\nIf store-dir/--store is omitted, the current working directory is used.\n--demo runs a scripted publish flow against a throwaway store and cannot be\ncombined with store-dir/--store.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    store_dir: Option<String>,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--store" => {
                if options.store_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.store_dir = Some(dir);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.store_dir.is_some() {
                    return Err(());
                }
                options.store_dir = Some(arg);
            }
        }
    }

    if options.demo && options.store_dir.is_some() {
        return Err(());
    }

    Ok(options)
}

fn open_folder(dir: String, durable_writes: bool) -> StoreFolder {
    let folder = StoreFolder::new(dir);
    if durable_writes {
        folder.with_durability(WriteDurability::Durable)
    } else {
        folder
    }
}

fn print_episodes(folder: &StoreFolder) -> Result<(), Box<dyn Error>> {
    match wavecast::auth::current_session(folder)? {
        Some(user) => println!("Logged in as {} <{}>", user.name(), user.email()),
        None => println!("Not logged in."),
    }

    let episodes = EpisodeStore::new(folder.clone());
    let list = episodes.load()?;
    if list.is_empty() {
        println!("No published episodes.");
        return Ok(());
    }

    println!("Published episodes ({}):", list.len());
    for episode in &list {
        println!(
            "  {}  {}  [{} {}]  {}",
            episode.id(),
            episode.publish_date(),
            episode.file_type(),
            format_file_size(episode.file_size()),
            episode.title()
        );
    }
    Ok(())
}

async fn run_demo(folder: StoreFolder) -> Result<(), Box<dyn Error>> {
    let form = SignUpForm {
        name: "Demo Host".to_owned(),
        email: "demo@wavecast.test".to_owned(),
        password: "demo-pass".to_owned(),
        confirm_password: "demo-pass".to_owned(),
    };
    let outcome = sign_up(&folder, &form, Utc::now())?;
    println!("Signed up {} -> {}", outcome.user.name(), outcome.navigate_to);

    let outcome = log_in(&folder, "demo@wavecast.test", "demo-pass")?;
    println!("Logged in {} -> {}", outcome.user.name(), outcome.navigate_to);

    let episodes = EpisodeStore::new(folder.clone());
    let mut wizard = Wizard::new();

    let ticket = wizard.select_file(StagedFile::new("pilot.mp3", 4_200_000, "audio"))?;
    tokio::time::sleep(Duration::from_millis(400)).await;
    let duration_ticket = wizard.file_processed(ticket).ok_or("processing ticket went stale")?;
    tokio::time::sleep(Duration::from_millis(150)).await;
    wizard.media_duration_ready(duration_ticket, 185.0);

    wizard.set_title("Pilot");
    wizard.set_description("The first Wavecast episode.");
    wizard.set_category("technology");
    wizard.add_tag("pilot");
    wizard.add_tag("intro");

    let artwork = StagedArtwork::new("cover.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]);
    let data_url = artwork.data_url();
    let art_ticket = wizard.select_artwork(artwork)?;
    tokio::time::sleep(Duration::from_millis(100)).await;
    wizard.artwork_decoded(art_ticket, data_url);

    wizard.continue_to_preview()?;
    let preview = wizard.preview();
    println!("Preview: {} ({})", preview.title, preview.category_label);

    let outcome = wizard.publish(&episodes, Utc::now()).await?;
    println!("Published episode {} -> {}", outcome.episode_id, outcome.navigate_to);

    let ticket = wizard.select_file(StagedFile::new("studio-tour.mov", 96_000_000, "video"))?;
    tokio::time::sleep(Duration::from_millis(400)).await;
    wizard.file_processed(ticket).ok_or("processing ticket went stale")?;

    wizard.set_title("Studio Tour");
    wizard.set_description("A look behind the scenes.");
    wizard.set_category("society");
    wizard.choose_schedule(Utc::now().date_naive());
    wizard.continue_to_preview()?;

    let outcome = wizard.publish(&episodes, Utc::now()).await?;
    println!("Published episode {} -> {}", outcome.episode_id, outcome.navigate_to);

    println!();
    print_episodes(&folder)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "wavecast".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.demo {
            let now_millis = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0);
            let demo_dir = std::env::temp_dir()
                .join(format!("wavecast-demo-store-{}-{now_millis}", std::process::id()));
            let folder = open_folder(demo_dir.to_string_lossy().into_owned(), false);

            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            runtime.block_on(run_demo(folder))?;
            return Ok(());
        }

        let dir = options.store_dir.unwrap_or_else(|| ".".to_owned());
        let folder = open_folder(dir, options.durable_writes);
        print_episodes(&folder)
    })();

    if let Err(err) = result {
        eprintln!("wavecast: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(["--demo".to_owned()].into_iter()).expect("parse options");
        assert!(options.demo);
        assert!(options.store_dir.is_none());
    }

    #[test]
    fn parses_store_dir() {
        let options = parse_options(["--store".to_owned(), "some/dir".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.store_dir.as_deref(), Some("some/dir"));
        assert!(!options.demo);
    }

    #[test]
    fn parses_positional_store_dir() {
        let options = parse_options(["some/dir".to_owned()].into_iter()).expect("parse options");
        assert_eq!(options.store_dir.as_deref(), Some("some/dir"));
    }

    #[test]
    fn parses_durable_writes() {
        let options = parse_options(["--durable-writes".to_owned()].into_iter())
            .expect("parse options");
        assert!(options.durable_writes);
    }

    #[test]
    fn rejects_demo_with_store_dir() {
        parse_options(["--demo".to_owned(), "--store".to_owned(), ".".to_owned()].into_iter())
            .unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(["--demo".to_owned(), "--demo".to_owned()].into_iter()).unwrap_err();
        parse_options(
            ["--store".to_owned(), ".".to_owned(), "--store".to_owned(), "other".to_owned()]
                .into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_multiple_positional_store_dirs() {
        parse_options(["one".to_owned(), "two".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_missing_store_value() {
        parse_options(["--store".to_owned()].into_iter()).unwrap_err();
    }
}
