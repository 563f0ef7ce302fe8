use freightdesk_core::{ScheduleRow, ScheduleView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: ScheduleView,
    /// Emits the sailing id of the clicked row.
    #[prop_or_default]
    pub on_book: Callback<u32>,
}

/// Schedule caption plus one row per sailing.
#[function_component(ScheduleTable)]
pub fn schedule_table(props: &Props) -> Html {
    html! {
        <section class="schedule" aria-labelledby="schedule-caption">
            <h2 id="schedule-caption" class="schedule-caption">{ props.view.caption.clone() }</h2>
            <table class="schedule-table">
                <thead>
                    <tr>
                        <th scope="col">{ "#" }</th>
                        <th scope="col">{ "Departure" }</th>
                        <th scope="col">{ "Transit time (days)" }</th>
                        <th scope="col">{ "ETA" }</th>
                        <th scope="col">{ "Available space" }</th>
                        <th scope="col">{ "Price" }</th>
                        <th scope="col"><span class="sr-only">{ "Action" }</span></th>
                    </tr>
                </thead>
                <tbody id="schedule-table-body">
                    { for props.view.rows.iter().map(|row| render_row(row, &props.on_book)) }
                </tbody>
            </table>
        </section>
    }
}

fn render_row(row: &ScheduleRow, on_book: &Callback<u32>) -> Html {
    let onclick = {
        let cb = on_book.clone();
        let id = row.sailing_id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    html! {
        <tr key={row.sailing_id} class={classes!((!row.bookable).then_some("full"))}>
            <td>{ row.position }</td>
            <td>{ row.departure.clone() }</td>
            <td>{ row.transit_days.clone() }</td>
            <td>{ row.eta.clone() }</td>
            <td>{ row.available_space.clone() }</td>
            <td>{ row.price.clone() }</td>
            <td>
                <button
                    type="button"
                    class="book-btn"
                    data-id={row.sailing_id.to_string()}
                    disabled={!row.bookable}
                    {onclick}
                >
                    { "Book" }
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn row(id: u32, bookable: bool) -> ScheduleRow {
        ScheduleRow {
            position: id,
            sailing_id: id,
            departure: "05/01/2024".to_string(),
            transit_days: "16".to_string(),
            eta: "21/01/2024".to_string(),
            available_space: if bookable {
                "12".to_string()
            } else {
                "2 (not enough space)".to_string()
            },
            price: "48.500,00\u{a0}$".to_string(),
            bookable,
        }
    }

    #[test]
    fn renders_caption_rows_and_disabled_action() {
        let view = ScheduleView {
            caption: "The schedules from Chengdu to Vorsino".to_string(),
            rows: vec![row(1, true), row(2, false)],
        };
        let props = Props {
            view,
            on_book: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ScheduleTable>::with_props(props).render());
        assert!(html.contains("The schedules from Chengdu to Vorsino"));
        assert!(html.contains("05/01/2024"));
        assert!(html.contains("(not enough space)"));
        assert!(html.contains("disabled"));
        assert_eq!(html.matches("book-btn").count(), 2);
    }
}
