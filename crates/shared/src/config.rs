//! Site configuration for the InfoSection demo

use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;
use std::collections::HashSet;

use crate::i18n::Locale;

/// Configuration embedded from site.toml
pub const SITE_TOML: &str = include_str!("../site.toml");

// =============================================================================
// File-based Configuration (site.toml)
// =============================================================================

/// Configuration loaded from site.toml
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    #[serde(default)]
    pub default_locale: Locale,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

/// Tunables for the scroll reveal and text animation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element (0.0-1.0) that must be visible to reveal it
    pub threshold: f64,
    /// Start delay of the description relative to the heading
    pub description_delay_ms: u32,
    /// Delay added per word inside one animated text
    pub word_stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            description_delay_ms: 300,
            word_stagger_ms: 60,
        }
    }
}

/// One section on the demo page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionEntry {
    pub id: String,
    #[serde(default)]
    pub title_key: Option<String>,
    #[serde(default)]
    pub description_key: Option<String>,
    /// Catalog key for the body paragraph
    #[serde(default)]
    pub body_key: Option<String>,
    /// Short glyph shown in the chip
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub inverse: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "InfoSection".to_string(),
            default_locale: Locale::default(),
            reveal: RevealConfig::default(),
            sections: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).with_context(|| {
            "Failed to parse site.toml. Check for:\n\
             - Missing required fields (name, sections[].id)\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
             - Unsupported default_locale (expected \"en\" or \"es\")"
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_toml(SITE_TOML)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.reveal.threshold),
            "reveal.threshold must be between 0.0 and 1.0, got {}",
            self.reveal.threshold
        );

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                bail!("Section ids must not be empty");
            }
            if !seen.insert(section.id.as_str()) {
                bail!("Duplicate section id: {}", section.id);
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn section(&self, id: &str) -> Option<&SectionEntry> {
        self.sections.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translator;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.reveal, RevealConfig::default());
        assert!(!config.sections.is_empty());
    }

    #[test]
    fn test_embedded_sections_have_translations() {
        let config = SiteConfig::embedded().unwrap();
        let t = Translator::load(Locale::En).unwrap();

        for section in &config.sections {
            for key in [&section.title_key, &section.description_key, &section.body_key]
                .into_iter()
                .flatten()
            {
                assert_ne!(&t.t(key), key, "untranslated key in section {}", section.id);
            }
        }
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = SiteConfig::from_toml("name = \"Demo\"\n").unwrap();
        assert_eq!(config.name, "Demo");
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.description_delay_ms, 300);
        assert!(config.sections.is_empty());
    }

    #[test]
    fn test_partial_reveal_table_keeps_other_defaults() {
        let config = SiteConfig::from_toml("name = \"Demo\"\n[reveal]\ndescription_delay_ms = 500\n").unwrap();
        assert_eq!(config.reveal.description_delay_ms, 500);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.word_stagger_ms, 60);
    }

    #[test]
    fn test_section_lookup() {
        let config = SiteConfig::from_toml(
            r#"
            name = "Demo"
            default_locale = "es"

            [[sections]]
            id = "features"
            title_key = "features.title"
            inverse = true
            "#,
        )
        .unwrap();

        assert_eq!(config.default_locale, Locale::Es);
        let section = config.section("features").unwrap();
        assert!(section.inverse);
        assert_eq!(section.title_key.as_deref(), Some("features.title"));
        assert_eq!(section.description_key, None);
        assert!(config.section("missing").is_none());
    }

    #[test]
    fn test_threshold_out_of_range() {
        let err = SiteConfig::from_toml("name = \"Demo\"\n[reveal]\nthreshold = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn test_duplicate_section_ids() {
        let err = SiteConfig::from_toml(
            "name = \"Demo\"\n[[sections]]\nid = \"about\"\n[[sections]]\nid = \"about\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate section id"));
    }

    #[test]
    fn test_empty_section_id() {
        assert!(SiteConfig::from_toml("name = \"Demo\"\n[[sections]]\nid = \" \"\n").is_err());
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        assert!(SiteConfig::from_toml("name = \"Demo\"\ndefault_locale = \"fr\"\n").is_err());
    }
}
