//! Glossa - locale resolution and translation lookup for site renderers
//!
//! Glossa resolves the active locale for a static build or a server-rendered
//! request, loads and caches that locale's JSON translations, looks up dotted
//! keys and interpolates `{{name}}` parameters. The `glossa` binary checks
//! that every locale file exposes the same keys as a base locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface of the key-set validator
//! - `config`: Configuration file loading and parsing
//! - `core`: Translator, translation store and key-set validator

pub mod cli;
pub mod config;
pub mod core;
