// src/config/model.rs

use serde::Deserialize;

use crate::feed::ChannelMeta;

pub const DEFAULT_TITLE: &str = "Gross RSS Feed";
pub const DEFAULT_DESCRIPTION: &str = "A feed provided by ...";
pub const DEFAULT_AUTHOR_NAME: &str = "...";

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [feed]
/// title = "Holiday photos"
/// description = "Everything in ~/photos"
/// author_name = "someone"
/// ```
///
/// All sections and fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Channel-level feed options from `[feed]`.
    #[serde(default)]
    pub feed: FeedSection,
}

/// `[feed]` section: metadata for the served RSS channel.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedSection {
    #[serde(default)]
    pub title: Option<String>,

    /// Channel link; defaults to the server's own address.
    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub author_name: Option<String>,
}

impl FeedSection {
    /// Resolve the section into concrete channel metadata.
    ///
    /// Unset *and* empty values fall back to the fixed defaults;
    /// `server_address` is the fallback for `link`.
    pub fn resolve(&self, server_address: &str) -> ChannelMeta {
        ChannelMeta {
            title: or_default(&self.title, DEFAULT_TITLE),
            link: or_default(&self.link, server_address),
            description: or_default(&self.description, DEFAULT_DESCRIPTION),
            author_name: or_default(&self.author_name, DEFAULT_AUTHOR_NAME),
        }
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
