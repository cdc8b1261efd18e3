use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::{CONFIG, translator_for};
use crate::pages::HomePage;

#[component]
pub fn App() -> impl IntoView {
    let not_found = translator_for(CONFIG.default_locale).t("site.not_found");

    view! {
        <Router>
            <Routes fallback=move || view! { <p>{not_found.clone()}</p> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
