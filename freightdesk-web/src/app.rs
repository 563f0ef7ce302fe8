use freightdesk_core::ScheduleConfig;
use once_cell::sync::Lazy;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

use crate::pages::booking::BookingPage;
use crate::pages::intake::IntakePage;
use crate::pages::not_found::NotFound;
use crate::pages::schedule::SchedulePage;
use crate::paths::page_href;
use crate::router::Route;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <main id="main">
                <AppInner />
            </main>
            <div
                id={crate::a11y::STATUS_REGION_ID}
                class="sr-only"
                role="status"
                aria-live="polite"
            ></div>
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let location = use_location();
    let query = location
        .as_ref()
        .map(|location| AttrValue::from(location.query_str().to_string()))
        .unwrap_or_default();
    let requested = location.map(|location| AttrValue::from(location.path().to_string()));
    render_route(&route, &query, requested)
}

static SCHEDULE_CONFIG: Lazy<ScheduleConfig> = Lazy::new(ScheduleConfig::load_from_static);

/// Bundled tunables and terminal catalog, parsed on first use.
#[must_use]
pub fn schedule_config() -> &'static ScheduleConfig {
    &SCHEDULE_CONFIG
}

/// Leave the current page. Every page starts over from its URL and the
/// schedule cache.
pub fn go_to(href: &str) {
    if let Err(err) = crate::dom::navigate(href) {
        log::error!("navigation to {href} failed: {err}");
    }
}

/// Page for a route, wired to full-page navigation.
#[must_use]
pub fn render_route(route: &Route, query: &AttrValue, requested: Option<AttrValue>) -> Html {
    let back_to_search = Callback::from(|()| go_to(&page_href(&Route::Intake, "")));
    match route {
        Route::Intake => {
            let catalog = schedule_config().terminals.clone();
            let on_submit =
                Callback::from(|query: String| go_to(&page_href(&Route::Schedule, &query)));
            html! { <IntakePage {catalog} today={crate::dom::today()} {on_submit} /> }
        }
        Route::Schedule => {
            let on_navigate = Callback::from(|href: String| go_to(&href));
            html! {
                <SchedulePage query={query.clone()} {on_navigate} on_back={back_to_search} />
            }
        }
        Route::Booking => html! {
            <BookingPage query={query.clone()} on_back={back_to_search} />
        },
        Route::NotFound => html! { <NotFound {requested} on_go_home={back_to_search} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_is_parsed_once() {
        let first = schedule_config();
        let second = schedule_config();
        assert!(std::ptr::eq(first, second));
        assert_eq!(*first, ScheduleConfig::load_from_static());
        assert!(!first.terminals.departures.is_empty());
    }
}
