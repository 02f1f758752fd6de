//! Sticky site header.
//!
//! Two bits of component-local state: whether the page is scrolled away
//! from the very top (drives the translucent blurred surface) and whether
//! the mobile drawer is open. Everything else derives from the navigation
//! registry and the current route.

use leptos::IntoView;
use leptos::component;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::Get;
use leptos::prelude::OnAttribute;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::Signal;
use leptos::prelude::StyleAttribute;
use leptos::prelude::Update;
use leptos::view;
use leptos_router::hooks::use_location;
use leptos_use::use_window_scroll;

use crate::components::button::ContainedButton;
use crate::components::icons::{Glyph, Icon};
use crate::content::{BRANDING_LOGO, DISCORD_INVITE, NavLink, SITE_NAME, TAGLINE};
use crate::style::use_style;
use crate::theme;
use crate::theme::Viewport;

/// A link is highlighted exactly when its url equals the current route
/// path. Identity comparison, no prefix matching.
fn is_active(url: &str, path: &str) -> bool {
    url == path
}

/// Menu-button semantics: toggle, never set. An open drawer closes, a
/// closed one opens.
fn toggle(open: &mut bool) {
    *open = !*open;
}

#[component]
pub fn Navbar(items: &'static [NavLink]) -> impl IntoView {
    let pathname = use_location().pathname;
    let drawer_open = RwSignal::new(false);

    // no hysteresis: any nonzero offset counts as scrolled
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || scroll_y.get() > 0.0);

    let wrapper = use_style(
        "navbar",
        &format!(
            "&{{position:sticky;top:0;z-index:40;width:100%;transition:background .2s ease;}} \
             & .nav-grid{{max-width:72rem;margin:0 auto;display:flex;align-items:center;\
             justify-content:space-between;gap:1rem;padding:1rem 1.5rem;}} \
             & .branding-logo{{height:3rem;width:auto;display:block;}} \
             & .nav-links{{display:none;}} \
             & .nav-cta{{display:none;}} \
             & .nav-link{{color:{text};text-decoration:none;opacity:.85;}} \
             & .nav-link:hover{{opacity:1;}} \
             & .nav-link.active{{color:{primary};opacity:1;font-weight:600;}} \
             & .menu-btn{{display:inline-flex;background:none;border:none;color:{text};\
             cursor:pointer;padding:.5rem;}} \
             {wide}{{& .nav-links{{display:flex;align-items:center;gap:2rem;}} \
             & .nav-cta{{display:block;}} & .menu-btn{{display:none;}}}}",
            text = theme::TEXT,
            primary = theme::PRIMARY,
            wide = Viewport::Wide.and_up(),
        ),
    );

    view! {
        <header class=wrapper style=move || theme::navbar_surface(scrolled.get())>
            <div class="nav-grid">
                <a href="/">
                    <img class="branding-logo" src=BRANDING_LOGO alt="branding-logo"/>
                </a>
                <nav class="nav-links">
                    <For
                        each=move || items.iter().copied()
                        key=|link| link.url
                        children=move |link: NavLink| {
                            view! {
                                <a
                                    href=link.url
                                    class=move || {
                                        if is_active(link.url, &pathname.get()) {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        }
                    />
                </nav>
                <div class="nav-cta">
                    <ContainedButton href=DISCORD_INVITE>"Join Us"</ContainedButton>
                </div>
                <button
                    class="menu-btn"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| drawer_open.update(toggle)
                >
                    <Icon glyph=Glyph::Menu/>
                </button>
            </div>
            <MobileDrawer open=drawer_open items=items/>
        </header>
    }
}

/// Slide-in overlay for narrow viewports. Always in the DOM, translated
/// off-screen while closed; the backdrop catches outside clicks.
#[component]
fn MobileDrawer(open: RwSignal<bool>, items: &'static [NavLink]) -> impl IntoView {
    let pathname = use_location().pathname;

    let backdrop = use_style(
        "drawer-backdrop",
        "&{position:fixed;inset:0;background:rgba(0,0,0,.5);opacity:0;\
         pointer-events:none;transition:opacity .25s ease;z-index:50;} \
         &.visible{opacity:1;pointer-events:auto;}",
    );
    let panel = use_style(
        "drawer",
        &format!(
            "&{{position:fixed;top:0;right:0;bottom:0;width:18rem;max-width:85vw;\
             background:{surface};color:{text};transform:translateX(100%);\
             transition:transform .25s ease;z-index:60;padding:1rem;overflow-y:auto;}} \
             &.open{{transform:none;}} \
             & .close-btn{{background:none;border:none;color:{text};cursor:pointer;\
             padding:.5rem;}} \
             & .drawer-branding{{display:flex;flex-direction:column;gap:.5rem;\
             margin:0 1rem 2rem;}} \
             & .drawer-branding img{{height:4.5rem;width:4.5rem;}} \
             & .branding-title{{font-size:1.4rem;font-weight:700;margin:0;}} \
             & .branding-tagline{{font-size:.85rem;opacity:.7;margin:0;}} \
             & .list-item{{display:flex;align-items:center;gap:.75rem;\
             padding:.75rem 1rem;border-radius:.5rem;color:{text};\
             text-decoration:none;}} \
             & .list-item.highlighted{{background:rgba(108,99,255,.15);color:{primary};}} \
             & .divider{{border:none;border-top:1px solid rgba(244,244,248,.12);margin:0;}} \
             & .drawer-cta{{margin:1.5rem 1rem 0;}}",
            surface = theme::SURFACE,
            text = theme::TEXT,
            primary = theme::PRIMARY,
        ),
    );

    view! {
        <div
            class=move || {
                if open.get() { format!("{backdrop} visible") } else { backdrop.clone() }
            }
            on:click=move |_| open.set(false)
        ></div>
        <aside
            class=move || if open.get() { format!("{panel} open") } else { panel.clone() }
            aria-hidden=move || (!open.get()).to_string()
        >
            <button
                class="close-btn"
                aria-label="Close navigation menu"
                on:click=move |_| open.set(false)
            >
                <Icon glyph=Glyph::Close/>
            </button>
            <div class="drawer-branding">
                <img src=BRANDING_LOGO alt="branding-logo"/>
                <p class="branding-title">{SITE_NAME}</p>
                <p class="branding-tagline">{TAGLINE}</p>
            </div>
            <For
                each=move || items.iter().copied()
                key=|link| link.url
                children=move |link: NavLink| {
                    view! {
                        // selecting a link navigates and always closes
                        <a
                            href=link.url
                            class=move || {
                                if is_active(link.url, &pathname.get()) {
                                    "list-item highlighted"
                                } else {
                                    "list-item"
                                }
                            }
                            on:click=move |_| open.set(false)
                        >
                            <Icon glyph=link.icon/>
                            <span>{link.label}</span>
                        </a>
                        <hr class="divider"/>
                    }
                }
            />
            <div class="drawer-cta">
                <ContainedButton href=DISCORD_INVITE full_width=true>
                    "Join Discord"
                </ContainedButton>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_LINKS;
    use crate::style::StyleCache;
    use leptos::prelude::RenderHtml;
    use leptos::prelude::provide_context;
    use leptos_router::components::Router;
    use leptos_router::location::RequestUrl;

    fn render_at(path: &'static str) -> String {
        let owner = leptos::reactive::owner::Owner::new();
        owner.with(move || {
            provide_context(StyleCache::new());
            provide_context(RequestUrl::new(path));
            view! {
                <Router>
                    <Navbar items=NAV_LINKS/>
                </Router>
            }
            .to_html()
        })
    }

    #[test]
    fn marks_only_the_current_route_active() {
        let html = render_at("/about");
        assert!(html.contains("nav-link active"));
        assert!(html.contains("list-item highlighted"));
        // the other registry entry stays unhighlighted
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert_eq!(html.matches("list-item highlighted").count(), 1);
    }

    #[test]
    fn nothing_is_active_on_unknown_routes() {
        let html = render_at("/nowhere");
        assert!(!html.contains("nav-link active"));
        assert!(!html.contains("list-item highlighted"));
    }

    #[test]
    fn starts_unscrolled_with_transparent_surface() {
        let html = render_at("/");
        assert!(html.contains("background:transparent"));
        assert!(html.contains("backdrop-filter:none"));
    }

    #[test]
    fn drawer_ships_closed() {
        let html = render_at("/");
        assert!(!html.contains("dnc-drawer open"));
        assert!(html.contains("aria-hidden=\"true\""));
    }

    #[test]
    fn empty_registry_degrades_to_an_empty_row() {
        let owner = leptos::reactive::owner::Owner::new();
        let html = owner.with(|| {
            provide_context(StyleCache::new());
            provide_context(RequestUrl::new("/"));
            view! {
                <Router>
                    <Navbar items=&[]/>
                </Router>
            }
            .to_html()
        });
        // no link entries, but branding and CTA survive
        assert!(!html.contains(">Home<"));
        assert!(!html.contains(">About<"));
        assert!(!html.contains("nav-link active"));
        assert!(html.contains("branding-logo"));
        assert!(html.contains("Join Us"));
    }

    #[test]
    fn highlight_is_an_exact_url_match() {
        assert!(is_active("/about", "/about"));
        assert!(!is_active("/about", "/about/team"));
        assert!(!is_active("/", "/about"));
        assert!(is_active("/", "/"));
    }

    #[test]
    fn menu_button_toggles_rather_than_sets() {
        // the same function the click handler passes to `update`
        let mut open = false;
        toggle(&mut open);
        assert!(open);
        // a second toggle restores the original state
        toggle(&mut open);
        assert!(!open);
    }
}
