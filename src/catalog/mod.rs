// src/catalog/mod.rs

//! The in-memory catalog of discovered files.
//!
//! This module is responsible for:
//! - Content-addressing file names into stable identifiers (`file.rs`).
//! - Owning the authoritative `identifier -> file` mapping and the ordered
//!   feed-entry list (`store.rs`).
//! - Draining the discovery channel as the single writer of catalog state.
//!
//! It does **not** know about HTTP or RSS serialization; handlers only read
//! snapshots out of it.

pub mod file;
pub mod store;

pub use file::{file_identifier, CatalogedFile};
pub use store::{run_consumer, Catalog, FeedSnapshot};
