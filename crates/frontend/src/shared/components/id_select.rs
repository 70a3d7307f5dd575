use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Native `<select>` over backend records, with an empty placeholder entry.
///
/// Choosing the placeholder reports `None`.
#[component]
pub fn IdSelect<I>(
    #[prop(into)] options: Signal<Vec<(I, String)>>,
    #[prop(into)] value: Signal<Option<I>>,
    on_change: Callback<Option<I>>,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView
where
    I: AggregateId + Send + Sync + 'static,
{
    view! {
        <select
            class="form__select"
            id=id
            disabled=move || disabled.get().unwrap_or(false)
            prop:value=move || value.get().map(|v| v.as_string()).unwrap_or_default()
            on:change=move |ev| {
                let raw = event_target_value(&ev);
                on_change.run(I::from_string(&raw).ok());
            }
        >
            <option value="">{placeholder}</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|(key, label)| view! { <option value=key.as_string()>{label}</option> })
                    .collect_view()
            }}
        </select>
    }
}
