//! Labelled inputs with an inline error slot (`{id}-error`).
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew::TargetCast;

#[derive(Properties, PartialEq, Clone)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub placeholder: AttrValue,
    pub options: Vec<String>,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let on_change = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                    cb.emit(sel.value());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };
    let on_blur = {
        let cb = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| cb.emit(()))
    };
    let selected = props.value.as_str();

    html! {
        <div class={classes!("field", props.error.is_some().then_some("invalid"))}>
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <select
                id={props.id.clone()}
                name={props.id.clone()}
                onchange={on_change}
                onblur={on_blur}
                aria-invalid={props.error.is_some().to_string()}
                aria-describedby={error_id(&props.id)}
            >
                <option value="" selected={selected.is_empty()}>
                    { props.placeholder.clone() }
                </option>
                { for props.options.iter().map(|opt| html! {
                    <option value={opt.clone()} selected={opt == selected}>{ opt.clone() }</option>
                }) }
            </select>
            <ErrorSlot id={props.id.clone()} error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct InputFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub max: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
}

#[function_component(InputField)]
pub fn input_field(props: &InputFieldProps) -> Html {
    let on_input = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                    cb.emit(input.value());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };
    let on_blur = {
        let cb = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| cb.emit(()))
    };

    html! {
        <div class={classes!("field", props.error.is_some().then_some("invalid"))}>
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                min={props.min.clone()}
                max={props.max.clone()}
                oninput={on_input}
                onblur={on_blur}
                aria-invalid={props.error.is_some().to_string()}
                aria-describedby={error_id(&props.id)}
            />
            <ErrorSlot id={props.id.clone()} error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ErrorSlotProps {
    id: AttrValue,
    error: Option<AttrValue>,
}

#[function_component(ErrorSlot)]
fn error_slot(props: &ErrorSlotProps) -> Html {
    html! {
        <span id={error_id(&props.id)} class="error-message" role="alert">
            { props.error.clone().unwrap_or_default() }
        </span>
    }
}

fn error_id(field_id: &str) -> AttrValue {
    AttrValue::from(format!("{field_id}-error"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn select_marks_current_value() {
        let props = SelectFieldProps {
            id: "departure-terminal".into(),
            label: "Departure terminal".into(),
            placeholder: "Select a terminal".into(),
            options: vec!["Chengdu".to_string(), "Wuhan".to_string()],
            value: "Wuhan".into(),
            error: None,
            on_change: Callback::noop(),
            on_blur: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SelectField>::with_props(props).render());
        assert!(html.contains("Select a terminal"));
        assert!(html.contains("departure-terminal-error"));
        assert!(html.contains("Chengdu"));
    }

    #[test]
    fn input_shows_inline_error() {
        let props = InputFieldProps {
            id: "container-num".into(),
            label: "Number of containers".into(),
            input_type: "number".into(),
            value: "41".into(),
            min: Some("1".into()),
            max: Some("40".into()),
            error: Some("Please enter a valid number of containers between 1 and 40.".into()),
            on_input: Callback::noop(),
            on_blur: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<InputField>::with_props(props).render());
        assert!(html.contains("between 1 and 40"));
        assert!(html.contains("invalid"));
        assert!(html.contains("container-num-error"));
    }
}
