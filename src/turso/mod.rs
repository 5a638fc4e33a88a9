//! Turso/libsql lexicon database.
//!
//! The indexed backing store behind [`crate::LexiconStore`]:
//! - `client`: connection handling and error mapping
//! - `schema`: table definitions and the migration system
//! - `lexicon`: dictionary/entry writes and the `LexiconBackend` queries

mod client;
mod lexicon;
mod schema;

pub use client::{TursoClient, TursoError};
pub use lexicon::DictionaryInfo;
pub use schema::initialize_schema;
