use yew::prelude::*;

use crate::paths::page_href;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Path the visitor asked for, echoed back when known.
    #[prop_or_default]
    pub requested: Option<AttrValue>,
    pub on_go_home: Callback<()>,
}

/// Fallback for paths outside intake, schedule and booking.
#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let onclick = {
        let go_home = props.on_go_home.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            go_home.emit(());
        })
    };
    let detail = props.requested.as_ref().map_or_else(
        || String::from("There is nothing at this address."),
        |path| format!("There is nothing at {path}."),
    );

    html! {
        <section class="panel not-found" data-testid="not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ detail }</p>
            <a class="button" href={page_href(&Route::Intake, "")} {onclick}>
                { "Back to search" }
            </a>
        </section>
    }
}
