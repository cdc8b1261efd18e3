use leptos::prelude::*;
use shared::Locale;

use crate::class_names::cn;

/// Row of buttons switching the active locale
#[component]
pub fn LanguageToggle(locale: RwSignal<Locale>, #[prop(into)] label: Signal<String>) -> impl IntoView {
    view! {
        <nav class="flex justify-center items-center gap-2 mt-4 text-sm" aria-label=label>
            <span class="text-gray-500">{label}</span>
            {Locale::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            type="button"
                            lang=option.code()
                            class=move || {
                                cn([
                                    Some("px-2 py-1 rounded border"),
                                    (locale.get() == option).then_some("bg-primary/10 font-bold"),
                                ])
                            }
                            aria-pressed=move || (locale.get() == option).to_string()
                            on:click=move |_| locale.set(option)
                        >
                            {option.native_name()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
