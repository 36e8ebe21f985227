// src/feed/mod.rs

//! Feed entry construction and RSS document rendering.
//!
//! `entry.rs` is the pure projection of a cataloged file into an entry
//! record; `render.rs` turns a catalog snapshot plus channel metadata into
//! the served XML. The `rss` crate is treated as a black-box encoder for
//! the document format itself.

pub mod entry;
pub mod render;

pub use entry::{build_entry, FeedEntry};
pub use render::{render_feed, ChannelMeta, RSS_CONTENT_TYPE};
