use leptos::IntoView;
use leptos::component;
use leptos::prelude::Children;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

use crate::style::use_style;
use crate::theme;

/// Filled call-to-action link, the only button variant the site uses.
#[component]
pub fn ContainedButton(
    href: &'static str,
    #[prop(optional)] full_width: bool,
    children: Children,
) -> impl IntoView {
    let base = use_style(
        "btn-contained",
        &format!(
            "&{{display:inline-block;background:{primary};color:{surface};\
             padding:0.6rem 1.5rem;border-radius:9999px;font-weight:600;\
             text-align:center;text-decoration:none;transition:filter .15s;}} \
             &:hover{{filter:brightness(0.9);}} \
             &.full{{display:block;width:100%;}}",
            primary = theme::PRIMARY,
            surface = theme::SURFACE,
        ),
    );

    let class = if full_width { format!("{base} full") } else { base };

    view! {
        <a href=href class=class>
            {children()}
        </a>
    }
}
