use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::view;

use crate::content::{SPONSORS, Sponsor};
use crate::style::use_style;
use crate::theme::Viewport;

/// Sponsor logo grid for the about page. Column count is breakpoint-driven;
/// logo urls are used verbatim, broken images degrade silently.
#[component]
pub fn SponsorsSection() -> impl IntoView {
    let section = use_style(
        "sponsors",
        &format!(
            "&{{padding:4rem 1.5rem;max-width:72rem;margin:0 auto;}} \
             & .subtitle{{font-size:2rem;font-weight:700;margin:0 0 2rem;}} \
             & .sponsors-grid{{display:grid;grid-template-columns:repeat(2,1fr);\
             gap:1rem;justify-items:center;align-items:center;}} \
             {medium}{{& .sponsors-grid{{grid-template-columns:repeat(3,1fr);}}}} \
             {wide}{{& .sponsors-grid{{grid-template-columns:repeat(4,1fr);}}}} \
             & .image{{max-width:8rem;width:100%;height:auto;border-radius:.75rem;}}",
            medium = Viewport::Medium.and_up(),
            wide = Viewport::Wide.and_up(),
        ),
    );

    view! {
        <section class=section>
            <h2 class="subtitle">"Our Sponsors"</h2>
            <div class="sponsors-grid">
                <For
                    each=|| SPONSORS.iter().copied()
                    key=|sponsor| sponsor.id
                    children=|sponsor: Sponsor| {
                        view! {
                            <div class="image-wrapper">
                                <img class="image" src=sponsor.logo alt="Partner"/>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
