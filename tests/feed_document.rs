use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use dirfeed::catalog::{file_identifier, CatalogedFile, FeedSnapshot};
use dirfeed::config::model::{DEFAULT_AUTHOR_NAME, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use dirfeed::config::{load_from_path, ConfigFile, FeedSection};
use dirfeed::feed::{build_entry, render_feed};

type TestResult = Result<(), Box<dyn Error>>;

const ADDRESS: &str = "http://localhost:64055";

fn cataloged(name: &str, size: u64) -> CatalogedFile {
    CatalogedFile {
        identifier: file_identifier(name),
        path: PathBuf::from(format!("/srv/media/{name}")),
        name: name.to_string(),
        size,
        modified: SystemTime::now(),
    }
}

#[test]
fn entry_builder_projects_a_cataloged_file() {
    let file = cataloged("episode.mp3", 52_428_800);
    let entry = build_entry(&file, ADDRESS);

    let expected_link = format!("{ADDRESS}/file/{}/episode.mp3", file.identifier);
    assert_eq!(entry.title, "episode.mp3");
    assert_eq!(entry.link, expected_link);
    assert_eq!(entry.enclosure_url, expected_link);
    assert_eq!(entry.enclosure_length, "52428800");
    assert_eq!(entry.enclosure_type, "audio/mpeg");
    assert_eq!(entry.description, "");
}

#[test]
fn entry_builder_leaves_unrecognized_mime_empty() {
    let entry = build_entry(&cataloged("blob.zzz-unknown", 9), ADDRESS);
    assert_eq!(entry.enclosure_type, "");
    assert_eq!(entry.enclosure_length, "9");
}

#[test]
fn feed_section_resolves_defaults_for_unset_and_empty() {
    let empty = FeedSection {
        title: None,
        link: Some(String::new()),
        description: None,
        author_name: Some(String::new()),
    };
    let meta = empty.resolve(ADDRESS);
    assert_eq!(meta.title, DEFAULT_TITLE);
    assert_eq!(meta.link, ADDRESS);
    assert_eq!(meta.description, DEFAULT_DESCRIPTION);
    assert_eq!(meta.author_name, DEFAULT_AUTHOR_NAME);

    let set = FeedSection {
        title: Some("Conference talks".to_string()),
        link: Some("http://feeds.example.net".to_string()),
        description: Some("Recordings".to_string()),
        author_name: Some("av-team".to_string()),
    };
    let meta = set.resolve(ADDRESS);
    assert_eq!(meta.title, "Conference talks");
    assert_eq!(meta.link, "http://feeds.example.net");
    assert_eq!(meta.description, "Recordings");
    assert_eq!(meta.author_name, "av-team");
}

#[test]
fn config_loads_from_toml() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("dirfeed.toml");
    fs::write(
        &path,
        r#"
[feed]
title = "Conference talks"
author_name = "av-team"
"#,
    )?;

    let cfg: ConfigFile = load_from_path(&path)?;
    assert_eq!(cfg.feed.title.as_deref(), Some("Conference talks"));
    assert_eq!(cfg.feed.author_name.as_deref(), Some("av-team"));
    assert!(cfg.feed.link.is_none());
    assert!(cfg.feed.description.is_none());

    // Empty file parses to all-defaults.
    fs::write(&path, "")?;
    let cfg = load_from_path(&path)?;
    assert!(cfg.feed.title.is_none());
    Ok(())
}

#[test]
fn rendered_feed_carries_channel_and_items() {
    let meta = FeedSection::default().resolve(ADDRESS);
    let file = cataloged("episode.mp3", 1024);
    let entry = build_entry(&file, ADDRESS);
    let link = entry.link.clone();

    let snapshot = FeedSnapshot {
        entries: vec![entry],
        last_updated: Some(SystemTime::now()),
    };
    let xml = render_feed(&meta, &snapshot);

    assert!(xml.contains("<rss"));
    assert!(xml.contains(&format!("<title>{DEFAULT_TITLE}</title>")));
    assert!(xml.contains("<title>episode.mp3</title>"));
    assert!(xml.contains(&link));
    assert!(xml.contains("length=\"1024\""));
    assert!(xml.contains("type=\"audio/mpeg\""));
    assert!(xml.contains("<pubDate>"));
}

#[test]
fn rendered_feed_for_empty_catalog_has_no_items_or_pub_date() {
    let meta = FeedSection::default().resolve(ADDRESS);
    let snapshot = FeedSnapshot {
        entries: Vec::new(),
        last_updated: None,
    };
    let xml = render_feed(&meta, &snapshot);

    assert!(xml.contains("<rss"));
    assert!(!xml.contains("<item>"));
    assert!(!xml.contains("<pubDate>"));
}
