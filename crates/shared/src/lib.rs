//! Shared configuration and localization for the InfoSection crates

pub mod config;
pub mod i18n;

pub use config::{RevealConfig, SectionEntry, SiteConfig};
pub use i18n::{Catalog, Locale, Translator};
