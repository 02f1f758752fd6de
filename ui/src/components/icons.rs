//! Icon glyphs as values.
//!
//! The navigation registry refers to icons through this enum instead of
//! carrying opaque renderables; the match below is the only place glyph
//! markup lives.

use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CustomAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Home,
    People,
    Event,
    Menu,
    Close,
}

impl Glyph {
    fn path(self) -> &'static str {
        match self {
            Glyph::Home => "M3 12l9-9 9 9M5 10v10h5v-6h4v6h5V10",
            Glyph::People => {
                "M17 20h5v-2a4 4 0 00-3-3.87M9 20H4v-2a4 4 0 013-3.87m7-6.13a4 4 0 11-8 0 4 4 0 018 0m8 2a3 3 0 11-6 0 3 3 0 016 0"
            }
            Glyph::Event => "M8 7V3m8 4V3M5 11h14M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
            Glyph::Menu => "M4 6h16M4 12h16M4 18h16",
            Glyph::Close => "M6 18L18 6M6 6l12 12",
        }
    }
}

#[component]
pub fn Icon(glyph: Glyph) -> impl IntoView {
    view! {
        <svg
            class="dnc-glyph"
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d=glyph.path()/>
        </svg>
    }
}
