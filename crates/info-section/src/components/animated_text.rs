use leptos::prelude::*;
use shared::RevealConfig;

use crate::class_names::cn;

const WORD_BASE: &str = "inline-block transition-all duration-500 ease-out";
const WORD_HIDDEN: &str = "opacity-0 translate-y-2";
const WORD_SHOWN: &str = "opacity-100 translate-y-0";

/// Tag used to wrap an animated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextElement {
    H1,
    #[default]
    H2,
    H3,
    P,
    Span,
}

/// Split `text` into words, each paired with its transition delay in ms
pub fn word_schedule(text: &str, delay_ms: u32, stagger_ms: u32) -> Vec<(String, u32)> {
    text.split_whitespace()
        .enumerate()
        .map(|(idx, word)| {
            let offset = stagger_ms.saturating_mul(idx as u32);
            (word.to_string(), delay_ms.saturating_add(offset))
        })
        .collect()
}

/// Check if user prefers reduced motion
#[cfg(feature = "hydrate")]
fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[cfg(not(feature = "hydrate"))]
fn prefers_reduced_motion() -> bool {
    false
}

fn word_class(shown: bool) -> String {
    cn([Some(WORD_BASE), Some(if shown { WORD_SHOWN } else { WORD_HIDDEN })])
}

/// Words show once the text is mounted and its container is active
pub fn words_shown(mounted: Signal<bool>, active: Signal<bool>) -> Signal<bool> {
    Signal::derive(move || mounted.get() && active.get())
}

/// Text that fades in word by word once mounted and `active`
#[component]
pub fn AnimatedText(
    element: TextElement,
    #[prop(into)] text: Signal<String>,
    #[prop(optional, into)] class: Option<String>,
    /// Start delay before the first word
    #[prop(optional)]
    delay_ms: u32,
    #[prop(default = RevealConfig::default().word_stagger_ms)] stagger_ms: u32,
    /// Holds the words hidden while false, e.g. until the enclosing section is revealed
    #[prop(optional, into)]
    active: Option<Signal<bool>>,
) -> impl IntoView {
    let (mounted, set_mounted) = signal(false);
    let active = active.unwrap_or_else(|| Signal::derive(|| true));
    let shown = words_shown(mounted.into(), active);
    let (delay_ms, stagger_ms) = if prefers_reduced_motion() {
        (0, 0)
    } else {
        (delay_ms, stagger_ms)
    };

    // Words are rendered hidden first, then flipped on the next frame so the transition runs
    Effect::new(move |_| {
        request_animation_frame(move || set_mounted.set(true));
    });

    let words = move || {
        word_schedule(&text.get(), delay_ms, stagger_ms)
            .into_iter()
            .map(move |(word, delay)| {
                view! {
                    <span class=move || word_class(shown.get()) style=format!("transition-delay: {delay}ms")>
                        {word}
                    </span>
                    " "
                }
            })
            .collect_view()
    };

    let class = class.unwrap_or_default();
    match element {
        TextElement::H1 => view! { <h1 class=class>{words}</h1> }.into_any(),
        TextElement::H2 => view! { <h2 class=class>{words}</h2> }.into_any(),
        TextElement::H3 => view! { <h3 class=class>{words}</h3> }.into_any(),
        TextElement::P => view! { <p class=class>{words}</p> }.into_any(),
        TextElement::Span => view! { <span class=class>{words}</span> }.into_any(),
    }
}
