//! Board operations - pure domain logic shared by the TUI and the CLI
//!
//! `ordering` decides where tasks end up; `export` renders a column to disk.
//! Persistence stays in `storage::board`.

pub mod export;
pub mod ordering;
