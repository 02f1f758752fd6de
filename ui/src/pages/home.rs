use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_meta::Title;

use crate::components::button::ContainedButton;
use crate::content::{DISCORD_INVITE, SITE_NAME, TAGLINE};
use crate::style::use_style;
use crate::theme;

#[component]
pub fn Home() -> impl IntoView {
    let hero = use_style(
        "hero",
        &format!(
            "&{{max-width:72rem;margin:0 auto;padding:6rem 1.5rem;}} \
             & h1{{font-size:3rem;line-height:1.15;margin:0 0 1rem;}} \
             & .tagline{{font-size:1.25rem;color:{primary};margin:0 0 2.5rem;}} \
             & .hero-actions{{display:flex;gap:1rem;flex-wrap:wrap;}} \
             & .ghost-link{{display:inline-block;padding:0.6rem 1.5rem;\
             border:1px solid rgba(244,244,248,.3);border-radius:9999px;\
             color:{text};text-decoration:none;}}",
            primary = theme::PRIMARY,
            text = theme::TEXT,
        ),
    );

    view! {
        <Title text=SITE_NAME/>
        <section class=hero>
            <h1>
                "A global community where anyone can learn and network "
                "with fellow developers and designers."
            </h1>
            <p class="tagline">{TAGLINE}</p>
            <div class="hero-actions">
                <ContainedButton href=DISCORD_INVITE>"Join Us"</ContainedButton>
                <a class="ghost-link" href="/about">"About the community"</a>
            </div>
        </section>
    }
}
