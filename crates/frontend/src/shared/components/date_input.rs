use chrono::NaiveDate;
use leptos::prelude::*;

use crate::shared::date_utils::{parse_input_date, to_input_value};

/// Native date picker bound to an optional calendar date.
///
/// Clearing the field reports `None`.
#[component]
pub fn DateInput(
    #[prop(into)] value: Signal<Option<NaiveDate>>,
    on_change: impl Fn(Option<NaiveDate>) + 'static,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__input form__input--date"
            id=id
            required=required
            prop:value=move || to_input_value(value.get())
            on:input=move |ev| on_change(parse_input_date(&event_target_value(&ev)))
        />
    }
}
