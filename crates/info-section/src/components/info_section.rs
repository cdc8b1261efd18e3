use leptos::html;
use leptos::prelude::*;
use shared::{RevealConfig, Translator};

use super::animated_text::{AnimatedText, TextElement};
use crate::class_names::cn;
use crate::reveal::RevealState;

const SECTION_BASE: &str = "section-container transition-all duration-700";
const INVERSE_BACKGROUND: &str = "bg-primary/5";

/// Text inputs of a section before translation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionContent {
    pub id: String,
    pub title: Option<String>,
    pub title_key: Option<String>,
    pub description: Option<String>,
    pub description_key: Option<String>,
}

/// What a section displays once its text has been resolved
#[derive(Debug, Clone, PartialEq)]
pub struct SectionModel {
    pub id: String,
    pub title: String,
    /// `None` when there is nothing to show, in which case no paragraph is rendered
    pub description: Option<String>,
}

impl SectionModel {
    pub fn resolve(content: &SectionContent, translator: &Translator) -> Self {
        let title = resolve_text(content.title_key.as_deref(), content.title.as_deref(), translator);
        let description = resolve_text(
            content.description_key.as_deref(),
            content.description.as_deref(),
            translator,
        );

        Self {
            id: content.id.clone(),
            title: title.unwrap_or_default(),
            description: description.filter(|d| !d.is_empty()),
        }
    }
}

/// A non-empty key wins over the plain text
pub fn resolve_text(key: Option<&str>, text: Option<&str>, translator: &Translator) -> Option<String> {
    match key.filter(|k| !k.is_empty()) {
        Some(key) => Some(translator.t(key)),
        None => text.map(str::to_string),
    }
}

pub fn section_class(state: RevealState, inverse: bool, extra: Option<&str>) -> String {
    cn([
        Some(SECTION_BASE),
        Some(state.classes()),
        inverse.then_some(INVERSE_BACKGROUND),
        extra,
    ])
}

/// Titled content section that slides into view the first time it is scrolled to.
///
/// Titles and descriptions can be plain strings or catalog keys; keys are
/// looked up through `translator` (keys are shown verbatim without one).
#[component]
pub fn InfoSection(
    /// Anchor id, unique among sibling sections
    #[prop(into)]
    id: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] title_key: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] description_key: Option<String>,
    /// Shown in the chip next to the title
    #[prop(optional_no_strip)]
    icon: Option<ViewFn>,
    #[prop(optional, into)] class: Option<String>,
    /// Use the alternate background
    #[prop(optional)]
    inverse: bool,
    #[prop(optional, into)] translator: Option<Signal<Translator>>,
    #[prop(optional)] reveal: Option<RevealConfig>,
    children: Children,
) -> impl IntoView {
    let reveal = reveal.unwrap_or_default();
    let translator = translator.unwrap_or_else(|| Signal::derive(Translator::identity));
    let content = SectionContent {
        id: id.clone(),
        title,
        title_key,
        description,
        description_key,
    };
    let model = Memo::new(move |_| SectionModel::resolve(&content, &translator.get()));

    let section_ref = NodeRef::<html::Section>::new();

    #[cfg(feature = "hydrate")]
    let state = crate::reveal::use_reveal(crate::observer::DomObserver::new(reveal.threshold), move || {
        section_ref.get().map(web_sys::Element::from)
    });
    // Without a browser observer the section stays hidden
    #[cfg(not(feature = "hydrate"))]
    let (state, _) = signal(RevealState::Hidden);

    let revealed = Signal::derive(move || state.get().is_visible());
    let title = Signal::derive(move || model.with(|m| m.title.clone()));
    let description = Signal::derive(move || model.with(|m| m.description.clone().unwrap_or_default()));
    // Only presence changes rebuild the paragraph, so a retitle does not replay its animation
    let has_description = Memo::new(move |_| model.with(|m| m.description.is_some()));
    let description_delay = reveal.description_delay_ms;
    let stagger = reveal.word_stagger_ms;

    view! {
        <section
            id=id
            node_ref=section_ref
            class=move || section_class(state.get(), inverse, class.as_deref())
        >
            <div class="max-w-4xl mx-auto">
                <div class="mb-8 flex flex-col items-center text-center">
                    <div class="info-chip mb-3">
                        {icon.map(|icon| view! { <span class="text-primary">{icon.run()}</span> })}
                        <span>{title}</span>
                    </div>
                    <AnimatedText
                        element=TextElement::H2
                        text=title
                        class="text-3xl md:text-4xl mb-4"
                        stagger_ms=stagger
                        active=revealed
                    />
                    {move || {
                        has_description
                            .get()
                            .then(|| {
                                view! {
                                    <AnimatedText
                                        element=TextElement::P
                                        text=description
                                        class="text-lg text-gray-600"
                                        delay_ms=description_delay
                                        stagger_ms=stagger
                                        active=revealed
                                    />
                                }
                            })
                    }}
                </div>
                <div class="mt-8">{children()}</div>
            </div>
        </section>
    }
}
