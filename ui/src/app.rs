use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_router::components::Router;

use leptos_meta::provide_meta_context;

use crate::components::navbar::Navbar;
use crate::content::NAV_LINKS;
use crate::routes::RoutesMenu;
use crate::style::use_style;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let main = use_style("main", "&{min-height:100vh;}");

    view! {
      <Router>
        <Navbar items=NAV_LINKS/>
        <main class=main>
          <RoutesMenu/>
        </main>
      </Router>
    }
}
