// src/feed/render.rs

use chrono::{DateTime, Utc};
use rss::{ChannelBuilder, EnclosureBuilder, Item, ItemBuilder};

use crate::catalog::FeedSnapshot;
use crate::feed::entry::FeedEntry;

/// MIME type the feed document is served with.
pub const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";

/// Resolved channel-level metadata for the feed document.
///
/// Produced once at startup from the feed config (see
/// `config::FeedSection::resolve`) and shared read-only with the feed
/// handler.
#[derive(Debug, Clone)]
pub struct ChannelMeta {
    pub title: String,
    pub link: String,
    pub description: String,
    pub author_name: String,
}

/// Serialize a catalog snapshot into the RSS XML document.
///
/// The channel pub date is the catalog's last-updated time in RFC 2822
/// format, omitted while the catalog is empty.
pub fn render_feed(meta: &ChannelMeta, snapshot: &FeedSnapshot) -> String {
    let items: Vec<Item> = snapshot.entries.iter().map(entry_to_item).collect();

    let mut builder = ChannelBuilder::default();
    builder
        .title(meta.title.clone())
        .link(meta.link.clone())
        .description(meta.description.clone())
        .managing_editor(meta.author_name.clone())
        .items(items);

    if let Some(updated) = snapshot.last_updated {
        let updated: DateTime<Utc> = updated.into();
        builder.pub_date(updated.to_rfc2822());
    }

    builder.build().to_string()
}

fn entry_to_item(entry: &FeedEntry) -> Item {
    let enclosure = EnclosureBuilder::default()
        .url(entry.enclosure_url.clone())
        .length(entry.enclosure_length.clone())
        .mime_type(entry.enclosure_type.clone())
        .build();

    ItemBuilder::default()
        .title(entry.title.clone())
        .link(entry.link.clone())
        .description(entry.description.clone())
        .enclosure(enclosure)
        .build()
}
