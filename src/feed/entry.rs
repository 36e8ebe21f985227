// src/feed/entry.rs

use crate::catalog::CatalogedFile;

/// The syndication projection of one cataloged file.
///
/// Derived, read-only data: regenerated from the file record when it is
/// cataloged, never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub description: String,
    pub enclosure_url: String,
    /// Declared byte length, rendered as a decimal string.
    pub enclosure_length: String,
    /// MIME type guessed from the file extension; empty when unrecognized.
    pub enclosure_type: String,
}

/// Build the feed entry for a cataloged file.
///
/// `server_address` is the base URL clients reach the server on, e.g.
/// `http://localhost:64055`. The entry link doubles as the enclosure URL,
/// and the description is deliberately empty.
pub fn build_entry(file: &CatalogedFile, server_address: &str) -> FeedEntry {
    let link = format!("{server_address}/file/{}/{}", file.identifier, file.name);

    let mime = mime_guess::from_path(&file.path)
        .first_raw()
        .unwrap_or("")
        .to_string();

    FeedEntry {
        title: file.name.clone(),
        link: link.clone(),
        description: String::new(),
        enclosure_url: link,
        enclosure_length: file.size.to_string(),
        enclosure_type: mime,
    }
}
