use dioxus::prelude::*;

use crate::ui::format::tab_button_style;

#[component]
pub fn ConfirmDialog(
    heading: String,
    description: String,
    error: Option<String>,
    pending: bool,
    status_options: Vec<String>,
    selected_status: Option<String>,
    on_select_status: EventHandler<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; align-items: center; justify-content: center; z-index: 1500;",
            div {
                style: "background: #fff; border-radius: 10px; padding: 20px; min-width: 360px; max-width: 520px; box-shadow: 0 16px 32px rgba(0,0,0,0.2);",
                h3 { style: "margin-top: 0;", "{heading}" }
                p { "{description}" }

                if !status_options.is_empty() {
                    div {
                        style: "display: flex; gap: 6px; flex-wrap: wrap; margin-bottom: 12px;",
                        for status in status_options.clone() {
                            button {
                                style: tab_button_style(selected_status.as_deref() == Some(status.as_str())),
                                disabled: pending,
                                onclick: {
                                    let status = status.clone();
                                    move |_| on_select_status.call(status.clone())
                                },
                                "{status}"
                            }
                        }
                    }
                }

                if let Some(message) = error {
                    p { style: "color: #b42318;", "{message}" }
                }

                div {
                    style: "display: flex; gap: 8px; justify-content: flex-end;",
                    button {
                        disabled: pending,
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button {
                        disabled: pending,
                        onclick: move |_| on_confirm.call(()),
                        if pending { "Aguarde..." } else { "Confirmar" }
                    }
                }
            }
        }
    }
}
