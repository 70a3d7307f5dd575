use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// One card of a catalog list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCard {
    pub key: i64,
    pub title: String,
    pub subtitle: String,
}

/// Name input with save and cancel buttons, used for create and rename
#[component]
pub fn NameEditor(
    #[prop(into)] initial: String,
    #[prop(into)] placeholder: String,
    icon_name: &'static str,
    on_save: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(initial);

    view! {
        <div class="card__editor">
            <span class="card__icon">{icon(icon_name)}</span>
            <input
                class="form__input card__editor-input"
                placeholder=placeholder
                autofocus=true
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        on_save.run(name.get_untracked());
                    }
                }
            />
            <Button
                appearance=ButtonAppearance::Primary
                size=ButtonSize::Small
                on_click=move |_| on_save.run(name.get_untracked())
                attr:title="Guardar"
            >
                {icon("check")}
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| on_cancel.run(())
                attr:title="Cancelar"
            >
                {icon("x")}
            </Button>
        </div>
    }
}

/// Card list with inline rename and delete
#[component]
pub fn CatalogCards(
    #[prop(into)] cards: Signal<Vec<CatalogCard>>,
    /// Key of the card in rename mode
    #[prop(into)]
    editing: Signal<Option<i64>>,
    icon_name: &'static str,
    on_edit: Callback<Option<i64>>,
    on_rename: Callback<(i64, String)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="card-list">
            <For
                each=move || cards.get()
                key=|c| (c.key, c.title.clone())
                children=move |card: CatalogCard| {
                    let key = card.key;
                    let title = card.title.clone();
                    view! {
                        <div class="card">
                            {move || {
                                if editing.get() == Some(key) {
                                    view! {
                                        <NameEditor
                                            initial=title.clone()
                                            placeholder=""
                                            icon_name=icon_name
                                            on_save=Callback::new(move |name| on_rename.run((key, name)))
                                            on_cancel=Callback::new(move |_| on_edit.run(None))
                                        />
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <div class="card--row">
                                            <span class="card__icon">{icon(icon_name)}</span>
                                            <div class="card__text">
                                                <div class="card__title">{card.title.clone()}</div>
                                                <div class="card__subtitle">{card.subtitle.clone()}</div>
                                            </div>
                                            <div class="card__actions">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| on_edit.run(Some(key))
                                                    attr:title="Editar"
                                                >
                                                    {icon("pencil")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| on_delete.run(key)
                                                    attr:title="Eliminar"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </div>
                                        </div>
                                    }
                                    .into_any()
                                }
                            }}
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Browser confirm dialog; `false` when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
