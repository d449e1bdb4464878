use dioxus::prelude::*;

use crate::ui::format::{table_container_style, table_header_cell_style};

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub indicator: &'static str,
    pub align: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<String>,
}

#[component]
pub fn DataTable(
    headers: Vec<HeaderCell>,
    rows: Vec<TableRow>,
    busy: bool,
    show_status_action: bool,
    on_sort: EventHandler<String>,
    on_delete: EventHandler<String>,
    on_status: EventHandler<String>,
) -> Element {
    let column_count = headers.len() + 1;
    let aligns: Vec<&'static str> = headers.iter().map(|header| header.align).collect();
    let header_style = table_header_cell_style();

    rsx! {
        div {
            style: table_container_style(),
            table {
                style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        for header in headers.clone() {
                            th {
                                style: "{header_style} text-align: {header.align}; cursor: pointer;",
                                onclick: {
                                    let key = header.key.clone();
                                    let sortable = header.sortable;
                                    move |_| {
                                        if sortable {
                                            on_sort.call(key.clone());
                                        }
                                    }
                                },
                                "{header.label}{header.indicator}"
                            }
                        }
                        th { style: header_style, "Ações" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "{column_count}",
                                style: "padding: 16px; text-align: center; color: #666;",
                                "Nenhum registro encontrado"
                            }
                        }
                    }
                    for row in rows.clone() {
                        tr {
                            key: "{row.key}",
                            style: "border-bottom: 1px solid #eee;",
                            for (cell, align) in row.cells.iter().zip(aligns.iter()) {
                                td {
                                    style: "padding: 6px 10px; text-align: {align}; white-space: nowrap;",
                                    "{cell}"
                                }
                            }
                            td {
                                style: "padding: 6px 10px; white-space: nowrap; display: flex; gap: 6px;",
                                if show_status_action {
                                    button {
                                        disabled: busy,
                                        onclick: {
                                            let key = row.key.clone();
                                            move |_| on_status.call(key.clone())
                                        },
                                        "Status"
                                    }
                                }
                                button {
                                    disabled: busy,
                                    onclick: {
                                        let key = row.key.clone();
                                        move |_| on_delete.call(key.clone())
                                    },
                                    "Excluir"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
