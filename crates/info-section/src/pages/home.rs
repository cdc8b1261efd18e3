use leptos::prelude::*;
use shared::{SectionEntry, Translator};

use crate::components::{InfoSection, LanguageToggle};
use crate::config::{CONFIG, initial_locale, translator_for};

#[component]
pub fn HomePage() -> impl IntoView {
    let locale = RwSignal::new(initial_locale());
    let translator = Memo::new(move |_| translator_for(locale.get()));
    let text = move |key: &'static str| Signal::derive(move || translator.with(|t| t.t(key)));

    view! {
        <main lang=move || locale.get().code()>
            <header class="max-w-4xl mx-auto px-4 py-12 text-center">
                <h1 class="text-4xl font-bold">{CONFIG.name.clone()}</h1>
                <p class="text-gray-600 mt-2">{text("site.tagline")}</p>
                <LanguageToggle locale=locale label=text("site.language") />
            </header>

            {CONFIG.sections.iter().map(|entry| section_view(entry, translator)).collect_view()}
        </main>
    }
}

fn section_view(entry: &SectionEntry, translator: Memo<Translator>) -> impl IntoView {
    let body_key = entry.body_key.clone().unwrap_or_default();
    let body = move || translator.with(|t| t.t(&body_key));

    // Empty keys fall back to the plain title (the id) and an omitted description
    view! {
        <InfoSection
            id=entry.id.clone()
            title=entry.id.clone()
            title_key=entry.title_key.clone().unwrap_or_default()
            description_key=entry.description_key.clone().unwrap_or_default()
            icon=section_icon(entry)
            inverse=entry.inverse
            translator=translator
            reveal=CONFIG.reveal
        >
            <p class="text-center text-lg leading-relaxed">{body}</p>
        </InfoSection>
    }
}

/// Chip glyph of a configured section, if it has one
fn section_icon(entry: &SectionEntry) -> Option<ViewFn> {
    entry.icon.clone().map(|glyph| ViewFn::from(move || glyph.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_icon_only_when_configured() {
        let how = CONFIG.sections.iter().find(|s| s.icon.is_none()).unwrap();
        assert!(section_icon(how).is_none());

        let about = CONFIG.sections.iter().find(|s| s.id == "about").unwrap();
        let html = Owner::new().with(|| section_icon(about).unwrap().run().to_html());
        assert!(html.contains("◆"));
    }
}
