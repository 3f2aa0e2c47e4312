//! Context-aware translation into Traditional Chinese (Taiwan), English and
//! Japanese, with per-language glossary notes and locally saved favorites.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod migration;
pub mod presentation;
pub mod state;
