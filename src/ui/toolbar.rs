use dioxus::prelude::*;

use crate::state::data_model;
use crate::state::i18n::{self, Language};
use crate::state::ingestion::IngestionCoordinator;
use crate::ui::actions;

#[component]
pub fn Toolbar(
    mut coordinator: Signal<IngestionCoordinator>,
    mut language: Signal<Language>,
    file_name: Signal<Option<String>>,
    error_message: Signal<Option<String>>,
    mut show_table: Signal<bool>,
) -> Element {
    let mut labels_choice = use_signal::<Option<usize>>(|| None);
    let mut values_choice = use_signal::<Option<usize>>(|| None);

    let current_language = *language.read();
    let state = coordinator.read();
    let options = state.validation_options().to_vec();
    let launch_visible = state.launch_visible();
    let width = state.table().map(|table| data_model::column_count(table)).unwrap_or(0);
    let columns = data_model::column_labels(state.header(), width);
    drop(state);

    let open_label = i18n::tr(current_language, "toolbar.open");
    let clear_label = i18n::tr(current_language, "toolbar.clear");
    let launch_label = i18n::tr(current_language, "toolbar.launch");
    let labels_label = i18n::tr(current_language, "toolbar.labels_column");
    let values_label = i18n::tr(current_language, "toolbar.values_column");
    let apply_label = i18n::tr(current_language, "toolbar.apply_chart");

    rsx! {
        div { class: "toolbar",
            // File group
            div { class: "toolbar-group",
                select {
                    class: "toolbar-select toolbar-select-sm",
                    id: "select-language",
                    value: "{current_language.code()}",
                    onchange: move |evt| {
                        if let Some(next_language) = Language::from_code(&evt.value()) {
                            language.set(next_language);
                        }
                    },
                    for lang in Language::all().iter().copied() {
                        option { value: "{lang.code()}", "{i18n::tr(current_language, lang.label_key())}" }
                    }
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-open",
                    onclick: move |_| {
                        spawn(async move {
                            actions::open_file(coordinator, file_name, error_message, show_table).await;
                        });
                    },
                    "\u{1F4C2} {open_label}"
                }
                button {
                    class: "toolbar-btn toolbar-btn-danger",
                    id: "btn-clear",
                    disabled: file_name.read().is_none(),
                    onclick: move |_| {
                        actions::clear_file(coordinator, file_name, error_message, show_table);
                        labels_choice.set(None);
                        values_choice.set(None);
                    },
                    "\u{2715} {clear_label}"
                }
                if launch_visible {
                    button {
                        class: "toolbar-btn",
                        id: "btn-launch",
                        onclick: move |_| show_table.set(true),
                        "\u{25B6} {launch_label}"
                    }
                }
            }
            div { class: "toolbar-separator" }

            // Options group
            div { class: "toolbar-group",
                for option in options {
                    {
                        let name = option.name.clone();
                        let enabled = option.enabled;
                        let label = i18n::tr(current_language, &format!("option.{name}"));
                        rsx! {
                            label { class: "toolbar-label",
                                input {
                                    r#type: "checkbox",
                                    checked: enabled,
                                    onchange: move |_| {
                                        coordinator.with_mut(|state| {
                                            state.update_validation_option(&name, !enabled);
                                        });
                                    }
                                }
                                "{label}"
                            }
                        }
                    }
                }
            }
            div { class: "toolbar-separator" }

            // Chart group
            div { class: "toolbar-group",
                span { class: "toolbar-label", "{labels_label}" }
                select {
                    class: "toolbar-select",
                    id: "select-labels-column",
                    onchange: move |evt| labels_choice.set(evt.value().parse::<usize>().ok()),
                    option { value: "", "-" }
                    for (idx, col) in columns.iter().enumerate() {
                        option { value: "{idx}", "{col}" }
                    }
                }
                span { class: "toolbar-label", "{values_label}" }
                select {
                    class: "toolbar-select",
                    id: "select-values-column",
                    onchange: move |evt| values_choice.set(evt.value().parse::<usize>().ok()),
                    option { value: "", "-" }
                    for (idx, col) in columns.iter().enumerate() {
                        option { value: "{idx}", "{col}" }
                    }
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-apply-chart",
                    disabled: labels_choice.read().is_none() || values_choice.read().is_none(),
                    onclick: move |_| {
                        let labels = *labels_choice.read();
                        let values = *values_choice.read();
                        if let (Some(labels), Some(values)) = (labels, values) {
                            coordinator.with_mut(|state| state.select_chart_inputs(labels, values));
                        }
                    },
                    "{apply_label}"
                }
            }

            // Info area (right-aligned)
            div { class: "toolbar-info",
                if let Some(name) = file_name.read().as_ref() {
                    span { class: "file-path", "{name}" }
                }
                if let Some(err) = error_message.read().as_ref() {
                    span { class: "error-message", "{err}" }
                }
            }
        }
    }
}
