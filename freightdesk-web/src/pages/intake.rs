use chrono::NaiveDate;
use freightdesk_core::constants::{
    CONTAINER_TYPE_PLACEHOLDER, MAX_CONTAINERS, MIN_CONTAINERS, PERIOD_PLACEHOLDER,
    TERMINAL_PLACEHOLDER,
};
use freightdesk_core::format::iso_date;
use freightdesk_core::{FormErrors, FormField, IntakeField, IntakeForm, TerminalCatalog};
use yew::prelude::*;

use crate::components::{InputField, SelectField};

#[derive(Properties, Clone, PartialEq)]
pub struct IntakePageProps {
    pub catalog: TerminalCatalog,
    /// Local calendar date the page was opened on.
    pub today: NaiveDate,
    /// Receives the encoded criteria query once the form validates.
    pub on_submit: Callback<String>,
}

#[function_component(IntakePage)]
pub fn intake_page(props: &IntakePageProps) -> Html {
    let form = {
        let catalog = props.catalog.clone();
        use_state(move || IntakeForm::new(&catalog))
    };
    let errors = use_state(FormErrors::default);

    let on_change = |field: IntakeField| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };
    let on_blur = |field: IntakeField| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |()| {
            let mut next = (*errors).clone();
            next.record(field.id(), form.validate_field(field));
            errors.set(next);
        })
    };
    let error_for =
        |field: IntakeField| errors.message_for(field.id()).map(AttrValue::from);

    let on_swap = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.swap_terminals();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.submit_query() {
                Ok(query) => {
                    errors.set(FormErrors::default());
                    submit.emit(query);
                }
                Err(failed) => {
                    crate::dom::alert(&failed.joined());
                    errors.set(failed);
                }
            }
        })
    };

    let min_date = iso_date(freightdesk_core::earliest_ready_date(props.today));

    html! {
        <section class="panel intake" data-testid="intake-page">
            <h1>{ "Find a rail freight schedule" }</h1>
            <form id="intake-form" novalidate={true} onsubmit={on_submit}>
                <fieldset class="route">
                    <legend>{ "Route" }</legend>
                    <SelectField
                        id={IntakeField::DepartureTerminal.id()}
                        label="Departure terminal"
                        placeholder={TERMINAL_PLACEHOLDER}
                        options={form.departure_options.clone()}
                        value={form.departure_terminal.clone()}
                        error={error_for(IntakeField::DepartureTerminal)}
                        on_change={on_change(IntakeField::DepartureTerminal)}
                        on_blur={on_blur(IntakeField::DepartureTerminal)}
                    />
                    <button
                        type="button"
                        id="swap-terminals"
                        class="swap-btn"
                        aria-label="Swap departure and arrival terminals"
                        onclick={on_swap}
                    >
                        { "⇄" }
                    </button>
                    <SelectField
                        id={IntakeField::ArrivalTerminal.id()}
                        label="Arrival terminal"
                        placeholder={TERMINAL_PLACEHOLDER}
                        options={form.arrival_options.clone()}
                        value={form.arrival_terminal.clone()}
                        error={error_for(IntakeField::ArrivalTerminal)}
                        on_change={on_change(IntakeField::ArrivalTerminal)}
                        on_blur={on_blur(IntakeField::ArrivalTerminal)}
                    />
                </fieldset>
                <fieldset class="cargo">
                    <legend>{ "Cargo" }</legend>
                    <InputField
                        id={IntakeField::CargoReadyDate.id()}
                        label="Cargo ready date"
                        input_type="date"
                        value={form.cargo_ready_date.clone()}
                        min={Some(AttrValue::from(min_date))}
                        error={error_for(IntakeField::CargoReadyDate)}
                        on_input={on_change(IntakeField::CargoReadyDate)}
                        on_blur={on_blur(IntakeField::CargoReadyDate)}
                    />
                    <SelectField
                        id={IntakeField::CargoPeriod.id()}
                        label="Period"
                        placeholder={PERIOD_PLACEHOLDER}
                        options={form.period_options.clone()}
                        value={form.cargo_period.clone()}
                        error={error_for(IntakeField::CargoPeriod)}
                        on_change={on_change(IntakeField::CargoPeriod)}
                        on_blur={on_blur(IntakeField::CargoPeriod)}
                    />
                    <InputField
                        id={IntakeField::ContainerNumber.id()}
                        label="Number of containers"
                        input_type="number"
                        value={form.container_number.clone()}
                        min={Some(AttrValue::from(MIN_CONTAINERS.to_string()))}
                        max={Some(AttrValue::from(MAX_CONTAINERS.to_string()))}
                        error={error_for(IntakeField::ContainerNumber)}
                        on_input={on_change(IntakeField::ContainerNumber)}
                        on_blur={on_blur(IntakeField::ContainerNumber)}
                    />
                    <SelectField
                        id={IntakeField::ContainerType.id()}
                        label="Container type"
                        placeholder={CONTAINER_TYPE_PLACEHOLDER}
                        options={form.container_type_options.clone()}
                        value={form.container_type.clone()}
                        error={error_for(IntakeField::ContainerType)}
                        on_change={on_change(IntakeField::ContainerType)}
                        on_blur={on_blur(IntakeField::ContainerType)}
                    />
                </fieldset>
                <button type="submit" id="search-btn" class="primary">
                    { "Search schedules" }
                </button>
            </form>
        </section>
    }
}
