//! Schedule page: reconcile the cached batch and hand a sailing to booking.

use anyhow::Context;
use freightdesk_core::{
    BookingError, Sailing, ScheduleEngine, ScheduleStore, ScheduleView,
    SearchCriteria, ViewSink, decode_criteria, encode_selection, select_sailing,
};
use rand::Rng;
use yew::prelude::*;

use crate::components::ScheduleTable;
use crate::paths::page_href;
use crate::router::Route;
use crate::storage::WebScheduleStore;

/// Sink for the schedule page: keeps the rendered view and turns notices
/// into a blocking alert plus a live-region announcement.
#[derive(Debug, Default)]
pub struct PageSink {
    view: Option<ScheduleView>,
}

impl PageSink {
    #[must_use]
    pub fn into_view(self) -> ScheduleView {
        self.view.unwrap_or_default()
    }
}

impl ViewSink for PageSink {
    fn show_schedule(&mut self, view: ScheduleView) {
        self.view = Some(view);
    }

    fn show_notice(&mut self, notice: &str) {
        crate::dom::alert(notice);
        crate::a11y::announce(notice);
    }
}

/// Everything the page keeps between the initial render and a booking click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSchedule {
    pub criteria: SearchCriteria,
    pub sailings: Vec<Sailing>,
    pub view: ScheduleView,
}

/// Decode the incoming criteria and reconcile them against the store.
///
/// # Errors
///
/// Returns an error when the query does not carry valid criteria.
pub fn prepare_schedule<S>(
    query: &str,
    engine: &ScheduleEngine<S>,
    rng: &mut impl Rng,
) -> anyhow::Result<PreparedSchedule>
where
    S: ScheduleStore,
{
    let criteria = decode_criteria(query).context("schedule page opened without search criteria")?;
    let mut sink = PageSink::default();
    let sailings = engine.present(&criteria, rng, &mut sink);
    Ok(PreparedSchedule {
        criteria,
        sailings,
        view: sink.into_view(),
    })
}

/// Link to the booking page for sailing `id`, or `None` when the handoff is
/// refused. A capacity refusal is reported through `sink`.
pub fn handoff<V>(
    sailings: &[Sailing],
    id: u32,
    criteria: &SearchCriteria,
    sink: &mut V,
) -> Option<String>
where
    V: ViewSink,
{
    match select_sailing(sailings, id, criteria) {
        Ok(selection) => Some(page_href(&Route::Booking, &encode_selection(&selection))),
        Err(err @ BookingError::InsufficientSpace { .. }) => {
            sink.show_notice(&err.to_string());
            None
        }
        Err(err @ BookingError::UnknownSailing(_)) => {
            log::warn!("{err}");
            None
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SchedulePageProps {
    /// Raw query string of the page URL.
    pub query: AttrValue,
    /// Receives the booking page link for an accepted sailing.
    #[prop_or_default]
    pub on_navigate: Callback<String>,
    #[prop_or_default]
    pub on_back: Callback<()>,
}

#[function_component(SchedulePage)]
pub fn schedule_page(props: &SchedulePageProps) -> Html {
    let prepared = use_memo(props.query.clone(), |query| {
        let engine = ScheduleEngine::new(WebScheduleStore, crate::app::schedule_config().clone());
        prepare_schedule(query, &engine, &mut crate::rng::session_rng()).map_err(|err| {
            log::error!("{err:#}");
            format!("{err:#}")
        })
    });
    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    match &*prepared {
        Ok(schedule) => {
            let on_book = {
                let prepared = prepared.clone();
                let navigate = props.on_navigate.clone();
                Callback::from(move |id: u32| {
                    let Ok(schedule) = &*prepared else {
                        return;
                    };
                    let mut sink = PageSink::default();
                    if let Some(href) =
                        handoff(&schedule.sailings, id, &schedule.criteria, &mut sink)
                    {
                        navigate.emit(href);
                    }
                })
            };
            html! {
                <section class="panel schedule-page" data-testid="schedule-page">
                    <ScheduleTable view={schedule.view.clone()} {on_book} />
                    <button type="button" class="link" onclick={on_back}>{ "New search" }</button>
                </section>
            }
        }
        Err(message) => html! {
            <section class="panel schedule-page" data-testid="schedule-error" aria-live="assertive">
                <h1>{ "No search criteria" }</h1>
                <p>{ message.clone() }</p>
                <button type="button" onclick={on_back}>{ "Back to search" }</button>
            </section>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use freightdesk_core::{
        CargoPeriod, ContainerType, MemoryStore, ScheduleConfig, encode_criteria,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[derive(Default)]
    struct Notices(Vec<String>);

    impl ViewSink for Notices {
        fn show_schedule(&mut self, _view: ScheduleView) {}

        fn show_notice(&mut self, notice: &str) {
            self.0.push(notice.to_string());
        }
    }

    fn criteria() -> SearchCriteria {
        SearchCriteria {
            departure_terminal: "Shijiazhuang".to_string(),
            arrival_terminal: "Belgrade".to_string(),
            cargo_ready_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            cargo_period: CargoPeriod::OneMonth,
            container_number: 20,
            container_type: ContainerType::Forty,
        }
    }

    #[test]
    fn prepare_decodes_and_renders() {
        let engine = ScheduleEngine::new(MemoryStore::new(), ScheduleConfig::default());
        let mut rng = SmallRng::seed_from_u64(9);
        let query = format!("?{}", encode_criteria(&criteria()));
        let prepared = prepare_schedule(&query, &engine, &mut rng).unwrap();
        assert_eq!(prepared.criteria, criteria());
        assert_eq!(prepared.sailings.len(), 6);
        assert_eq!(prepared.view.rows.len(), 6);
        assert!(prepared.view.caption.contains("Shijiazhuang"));
    }

    #[test]
    fn prepare_rejects_empty_query() {
        let engine = ScheduleEngine::new(MemoryStore::new(), ScheduleConfig::default());
        let mut rng = SmallRng::seed_from_u64(9);
        let err = prepare_schedule("", &engine, &mut rng).unwrap_err();
        assert!(format!("{err:#}").contains("departureTerminal"));
    }

    #[test]
    fn handoff_respects_capacity() {
        let engine = ScheduleEngine::new(MemoryStore::new(), ScheduleConfig::default());
        let mut rng = SmallRng::seed_from_u64(10);
        let prepared =
            prepare_schedule(&encode_criteria(&criteria()), &engine, &mut rng).unwrap();
        for sailing in &prepared.sailings {
            let mut notices = Notices::default();
            let href = handoff(&prepared.sailings, sailing.id, &criteria(), &mut notices);
            if sailing.available_space >= 20 {
                let href = href.unwrap();
                assert!(href.starts_with("/booking?id="));
                assert!(notices.0.is_empty());
            } else {
                assert!(href.is_none());
                assert_eq!(notices.0, vec!["Not enough space available for booking."]);
            }
        }
    }

    #[test]
    fn handoff_ignores_unknown_ids() {
        let mut notices = Notices::default();
        assert!(handoff(&[], 4, &criteria(), &mut notices).is_none());
        assert!(notices.0.is_empty());
    }
}
