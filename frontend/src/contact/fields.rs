use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::form_state::FormFlow;
use crate::contact::types::FormRecord;

pub type TextSetter = fn(&mut FormRecord, String);
pub type BoolSetter = fn(&mut FormRecord, bool);

/// Writes an input's value into the record and clears that field's
/// error on the way.
pub fn input_callback(
    flow: &FormFlow,
    on_change: &Callback<FormFlow>,
    field: &'static str,
    set: TextSetter,
) -> Callback<InputEvent> {
    let flow = flow.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        let mut flow = flow.clone();
        set(&mut flow.record, value);
        flow.clear_error(field);
        on_change.emit(flow);
    })
}

pub fn textarea_callback(
    flow: &FormFlow,
    on_change: &Callback<FormFlow>,
    field: &'static str,
    set: TextSetter,
) -> Callback<InputEvent> {
    let flow = flow.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
        let mut flow = flow.clone();
        set(&mut flow.record, value);
        flow.clear_error(field);
        on_change.emit(flow);
    })
}

pub fn select_callback(
    flow: &FormFlow,
    on_change: &Callback<FormFlow>,
    field: &'static str,
    set: TextSetter,
) -> Callback<Event> {
    let flow = flow.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        let mut flow = flow.clone();
        set(&mut flow.record, value);
        flow.clear_error(field);
        on_change.emit(flow);
    })
}

pub fn checkbox_callback(
    flow: &FormFlow,
    on_change: &Callback<FormFlow>,
    set: BoolSetter,
) -> Callback<Event> {
    let flow = flow.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: Event| {
        let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
        let mut flow = flow.clone();
        set(&mut flow.record, checked);
        on_change.emit(flow);
    })
}

/// Inline red text under the offending field.
pub fn field_error(flow: &FormFlow, field: &str) -> Html {
    match flow.errors.get(field) {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}
