//! # vf-store
//!
//! Local persistence for VeriFact.
//!
//! A single string key-value store holds two keys:
//! - [`HISTORY_KEY`]: JSON array of the last ten results, newest first
//! - [`THEME_KEY`]: `dark` or `light`

mod error;
mod history;
mod kv;
mod theme;

pub use error::StoreError;
pub use history::{HISTORY_KEY, HistoryStore};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{THEME_KEY, ThemeStore};
