use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_meta::Title;

use crate::components::sponsors::SponsorsSection;
use crate::style::use_style;

#[component]
pub fn About() -> impl IntoView {
    let intro = use_style(
        "about-intro",
        "&{max-width:72rem;margin:0 auto;padding:4rem 1.5rem 0;} \
         & h1{font-size:2.5rem;margin:0 0 1rem;} \
         & p{max-width:42rem;line-height:1.7;opacity:.85;}",
    );

    view! {
        <Title text="About | Design and Code"/>
        <section class=intro>
            <h1>"About us"</h1>
            <p>
                "Design and Code is a community of developers and designers "
                "who connect, collaborate and comprehend together. We run "
                "events, share resources and help each other grow, and none "
                "of it would be possible without the partners below."
            </p>
        </section>
        <SponsorsSection/>
    }
}
