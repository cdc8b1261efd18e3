//! Locale catalogs and the translation lookup used by the section components

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const EN_CATALOG: &str = include_str!("../locales/en.toml");
const ES_CATALOG: &str = include_str!("../locales/es.toml");

// =============================================================================
// Locale
// =============================================================================

/// Languages the site ships catalogs for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// Short language code, also used as the `lang` attribute
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Name of the language in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// Match a BCP 47 tag such as `es-MX` on its primary subtag
    pub fn from_language_tag(tag: &str) -> Option<Locale> {
        let primary = tag.trim().split(['-', '_']).next()?;
        primary.parse().ok()
    }

    fn catalog_source(self) -> &'static str {
        match self {
            Locale::En => EN_CATALOG,
            Locale::Es => ES_CATALOG,
        }
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => bail!("Unsupported locale: {other}"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Flattened `dotted.key -> text` table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parse a catalog from nested TOML tables.
    ///
    /// `[about]` followed by `title = "About"` becomes the key `about.title`.
    pub fn parse(source: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(source).context("Failed to parse locale catalog")?;

        let mut entries = HashMap::new();
        flatten_into(&mut entries, "", &table)?;
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: &str, table: &toml::Table) -> Result<()> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        match value {
            toml::Value::String(text) => {
                entries.insert(key, text.clone());
            }
            toml::Value::Table(nested) => flatten_into(entries, &key, nested)?,
            other => bail!("Catalog entry '{key}' must be a string, found {}", other.type_str()),
        }
    }
    Ok(())
}

// =============================================================================
// Translator
// =============================================================================

/// Total key lookup: active locale, then English, then the key itself
#[derive(Debug, Clone, Default)]
pub struct Translator {
    locale: Locale,
    primary: Arc<Catalog>,
    fallback: Arc<Catalog>,
}

impl Translator {
    /// Load the embedded catalogs for `locale`
    pub fn load(locale: Locale) -> Result<Self> {
        let fallback = Catalog::parse(Locale::En.catalog_source()).context("English catalog is invalid")?;
        let primary = match locale {
            Locale::En => fallback.clone(),
            other => Catalog::parse(other.catalog_source())
                .with_context(|| format!("Catalog for locale '{other}' is invalid"))?,
        };
        Ok(Self::from_catalogs(locale, primary, fallback))
    }

    pub fn from_catalogs(locale: Locale, primary: Catalog, fallback: Catalog) -> Self {
        Self {
            locale,
            primary: Arc::new(primary),
            fallback: Arc::new(fallback),
        }
    }

    /// Translator with empty catalogs; every key resolves to itself
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        self.primary
            .get(key)
            .or_else(|| self.fallback.get(key))
            .unwrap_or(key)
            .to_string()
    }
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
            && Arc::ptr_eq(&self.primary, &other.primary)
            && Arc::ptr_eq(&self.fallback, &other.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(source: &str) -> Catalog {
        Catalog::parse(source).unwrap()
    }

    #[test]
    fn test_locale_parse_and_display() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" ES ".parse::<Locale>().unwrap(), Locale::Es);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Es.to_string(), "es");
    }

    #[test]
    fn test_locale_from_language_tag() {
        assert_eq!(Locale::from_language_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_language_tag("en_GB"), Some(Locale::En));
        assert_eq!(Locale::from_language_tag("EN"), Some(Locale::En));
        assert_eq!(Locale::from_language_tag("de-DE"), None);
        assert_eq!(Locale::from_language_tag(""), None);
    }

    #[test]
    fn test_catalog_flattens_nested_tables() {
        let c = catalog(
            r#"
            greeting = "Hello"

            [about]
            title = "About Us"

            [about.team]
            lead = "Lead"
            "#,
        );
        assert_eq!(c.len(), 3);
        assert_eq!(c.get("greeting"), Some("Hello"));
        assert_eq!(c.get("about.title"), Some("About Us"));
        assert_eq!(c.get("about.team.lead"), Some("Lead"));
        assert_eq!(c.get("about"), None);
    }

    #[test]
    fn test_catalog_rejects_non_string_values() {
        let err = Catalog::parse("[about]\ncount = 3\n").unwrap_err();
        assert!(format!("{err:#}").contains("about.count"));
    }

    #[test]
    fn test_catalog_rejects_invalid_toml() {
        assert!(Catalog::parse("[about\ntitle = 1").is_err());
    }

    #[test]
    fn test_translator_fallback_chain() {
        let primary = catalog("[about]\ntitle = \"Sobre nosotros\"\n");
        let fallback = catalog("[about]\ntitle = \"About Us\"\nbody = \"We build things\"\n");
        let t = Translator::from_catalogs(Locale::Es, primary, fallback);

        assert_eq!(t.t("about.title"), "Sobre nosotros");
        assert_eq!(t.t("about.body"), "We build things");
        assert_eq!(t.t("missing.key"), "missing.key");
        assert_eq!(t.locale(), Locale::Es);
    }

    #[test]
    fn test_identity_translator_returns_keys() {
        let t = Translator::identity();
        assert_eq!(t.t("about.title"), "about.title");
        assert_eq!(t.t(""), "");
    }

    #[test]
    fn test_embedded_catalogs_load() {
        for locale in Locale::ALL {
            let t = Translator::load(locale).unwrap();
            assert_eq!(t.locale(), locale);
            assert_ne!(t.t("about.title"), "about.title");
        }
        assert_eq!(Translator::load(Locale::En).unwrap().t("about.title"), "About Us");
    }

    #[test]
    fn test_embedded_catalogs_share_keys() {
        let en = catalog(EN_CATALOG);
        let es = catalog(ES_CATALOG);
        let mut missing: Vec<&str> = en.keys().filter(|k| es.get(k).is_none()).collect();
        missing.sort_unstable();
        assert!(missing.is_empty(), "keys missing from es catalog: {missing:?}");
    }
}
