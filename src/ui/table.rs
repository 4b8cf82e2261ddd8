use dioxus::prelude::*;

use crate::state::data_model::{self, Row};
use crate::state::i18n::{self, Language};
use crate::state::ingestion::{ChartInputs, IngestionCoordinator};

#[component]
pub fn DataTable(coordinator: Signal<IngestionCoordinator>, language: Signal<Language>) -> Element {
    let state = coordinator.read();
    let Some(table) = state.table() else {
        let empty = i18n::tr(*language.read(), "app.empty");
        return rsx! {
            p { class: "empty-message", id: "empty-message", "{empty}" }
        };
    };

    let width = data_model::column_count(table);
    let columns = data_model::column_labels(state.header(), width);
    let rows: Vec<Row> = state.body_rows().to_vec();
    let chart = state.chart_inputs();
    drop(state);

    rsx! {
        div { class: "table-container", id: "table-container",
            table {
                thead {
                    tr {
                        th { class: "row-number", "#" }
                        for (idx, col) in columns.iter().enumerate() {
                            th { class: column_class(idx, chart), id: "col-{idx}", "{col}" }
                        }
                    }
                }
                tbody {
                    for (row_index, row) in rows.iter().enumerate() {
                        tr {
                            class: row_class(row_index),
                            id: "row-{row_index}",
                            td { class: "row-number", "{row_index + 1}" }
                            for idx in 0..width {
                                td {
                                    class: cell_class(row, idx),
                                    "{row.get(idx).map(|field| data_model::display_field(field)).unwrap_or_default()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn row_class(row_index: usize) -> &'static str {
    if row_index % 2 == 0 {
        "even"
    } else {
        "odd"
    }
}

fn column_class(idx: usize, chart: ChartInputs) -> &'static str {
    if chart.labels == Some(idx) {
        "chart-labels"
    } else if chart.values == Some(idx) {
        "chart-values"
    } else {
        ""
    }
}

fn cell_class(row: &Row, idx: usize) -> &'static str {
    if idx < row.len() {
        "cell"
    } else {
        "cell missing-cell"
    }
}
