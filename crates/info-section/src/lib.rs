//! Scroll-revealed, localized content sections for Leptos
//!
//! [`InfoSection`](components::InfoSection) renders a titled section that
//! fades and slides in the first time it enters the viewport. Reveal logic
//! lives in [`reveal`] and only talks to the browser through the
//! [`VisibilityObserver`](observer::VisibilityObserver) trait.

pub mod app;
pub mod class_names;
pub mod components;
pub mod config;
pub mod observer;
pub mod pages;
pub mod reveal;

pub use app::App;
