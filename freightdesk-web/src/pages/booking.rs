use freightdesk_core::{
    BookingField, BookingForm, BookingSummary, FormErrors, FormField, decode_selection,
};
use yew::prelude::*;

use crate::components::InputField;

/// Shown once every contact field validates.
pub const CONFIRMATION_NOTICE: &str = "Thank you! Your booking request has been received.";

#[derive(Properties, Clone, PartialEq)]
pub struct BookingPageProps {
    /// Raw query string of the page URL.
    pub query: AttrValue,
    #[prop_or_default]
    pub on_back: Callback<()>,
}

#[function_component(BookingPage)]
pub fn booking_page(props: &BookingPageProps) -> Html {
    let summary = use_memo(props.query.clone(), |query| {
        decode_selection(query)
            .map(|selection| BookingSummary::from(&selection))
            .map_err(|err| {
                log::error!("booking page opened without a selection: {err}");
                err.to_string()
            })
    });
    let form = use_state(BookingForm::default);
    let errors = use_state(FormErrors::default);
    let confirmed = use_state(|| false);

    let on_input = |field: BookingField| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };
    let on_blur = |field: BookingField| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |()| {
            let mut next = (*errors).clone();
            next.record(field.id(), form.validate_field(field));
            errors.set(next);
        })
    };
    let error_for =
        |field: BookingField| errors.message_for(field.id()).map(AttrValue::from);

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let confirmed = confirmed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let failed = form.validate();
            if failed.is_empty() {
                log::info!(
                    "booking submitted for {} ({})",
                    form.company_name.trim(),
                    form.company_code.trim()
                );
                crate::a11y::announce(CONFIRMATION_NOTICE);
                confirmed.set(true);
            } else {
                log::info!("booking form has {} errors", failed.len());
                confirmed.set(false);
            }
            errors.set(failed);
        })
    };
    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let Ok(summary) = &*summary else {
        return html! {
            <section class="panel booking-page" data-testid="booking-error" aria-live="assertive">
                <h1>{ "No sailing selected" }</h1>
                <p>{ "Choose a sailing from the schedule before booking." }</p>
                <button type="button" onclick={on_back}>{ "Back to search" }</button>
            </section>
        };
    };

    html! {
        <section class="panel booking-page" data-testid="booking-page">
            <h1>{ "Booking details" }</h1>
            { summary_list(summary) }
            <form id="booking-form" novalidate={true} onsubmit={on_submit}>
                <InputField
                    id={BookingField::CompanyName.id()}
                    label="Company name"
                    value={form.company_name.clone()}
                    error={error_for(BookingField::CompanyName)}
                    on_input={on_input(BookingField::CompanyName)}
                    on_blur={on_blur(BookingField::CompanyName)}
                />
                <InputField
                    id={BookingField::CompanyCode.id()}
                    label="Company code"
                    value={form.company_code.clone()}
                    error={error_for(BookingField::CompanyCode)}
                    on_input={on_input(BookingField::CompanyCode)}
                    on_blur={on_blur(BookingField::CompanyCode)}
                />
                <InputField
                    id={BookingField::Email.id()}
                    label="Email"
                    input_type="email"
                    value={form.email.clone()}
                    error={error_for(BookingField::Email)}
                    on_input={on_input(BookingField::Email)}
                    on_blur={on_blur(BookingField::Email)}
                />
                <button type="submit" id="submit-booking-btn" class="primary">{ "Book" }</button>
            </form>
            if *confirmed {
                <p class="confirmation" role="status">{ CONFIRMATION_NOTICE }</p>
            }
        </section>
    }
}

fn summary_list(summary: &BookingSummary) -> Html {
    let rows = [
        ("booking-departureTerminal", "Departure terminal", &summary.departure_terminal),
        ("booking-arrivalTerminal", "Arrival terminal", &summary.arrival_terminal),
        ("booking-departureDate", "Departure date", &summary.departure_date),
        ("booking-transitTime", "Transit time (days)", &summary.transit_time),
        ("booking-eta", "ETA", &summary.eta),
        ("booking-containerNumber", "Containers", &summary.container_number),
        ("booking-containerType", "Container type", &summary.container_type),
        ("booking-price", "Price", &summary.price),
    ];
    html! {
        <dl class="booking-summary">
            { for rows.into_iter().map(|(id, label, value)| html! {
                <div key={id} class="summary-row">
                    <dt>{ label }</dt>
                    <dd id={id}>{ value.clone() }</dd>
                </div>
            }) }
        </dl>
    }
}
