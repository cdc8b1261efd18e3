//! Site configuration and translators with safe fallbacks
//! Parse failures are logged and replaced by defaults so the page still renders

use std::sync::LazyLock;

use leptos::logging::warn;
use shared::{Locale, SiteConfig, Translator};

pub static CONFIG: LazyLock<SiteConfig> = LazyLock::new(|| {
    SiteConfig::embedded().unwrap_or_else(|err| {
        warn!("Invalid site.toml, using defaults: {err:#}");
        SiteConfig::default()
    })
});

static TRANSLATORS: LazyLock<Vec<Translator>> = LazyLock::new(|| {
    Locale::ALL
        .into_iter()
        .filter_map(|locale| match Translator::load(locale) {
            Ok(translator) => Some(translator),
            Err(err) => {
                warn!("Locale catalog unavailable, keys will show untranslated: {err:#}");
                None
            }
        })
        .collect()
});

/// Cached translator for `locale`; the identity translator if its catalog failed to load
pub fn translator_for(locale: Locale) -> Translator {
    TRANSLATORS
        .iter()
        .find(|t| t.locale() == locale)
        .cloned()
        .unwrap_or_else(Translator::identity)
}

/// Browser language when a catalog exists for it, otherwise the configured default
pub fn initial_locale() -> Locale {
    #[cfg(feature = "hydrate")]
    if let Some(locale) = browser_locale() {
        return locale;
    }
    CONFIG.default_locale
}

#[cfg(feature = "hydrate")]
fn browser_locale() -> Option<Locale> {
    let tag = web_sys::window()?.navigator().language()?;
    let locale = Locale::from_language_tag(&tag);
    if locale.is_none() {
        leptos::logging::log!("No catalog for browser language {tag}");
    }
    locale
}
