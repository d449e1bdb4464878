use dioxus::prelude::*;

use crate::ui::components::dropdown::{
    DropdownId, DropdownOption, DropdownSelect, NONE_OPTION_VALUE,
};

#[derive(Clone, Debug, PartialEq)]
pub enum FilterControlKind {
    Text,
    Category(Vec<String>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterControl {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterControlKind,
    pub current: String,
}

#[component]
pub fn FilterBar(
    search: String,
    controls: Vec<FilterControl>,
    can_clear: bool,
    busy: bool,
    open_dropdown: Signal<Option<DropdownId>>,
    dropdown_pos: Signal<Option<(f64, f64)>>,
    on_search: EventHandler<String>,
    on_search_submit: EventHandler<()>,
    on_filter: EventHandler<(String, String)>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
            input {
                r#type: "search",
                placeholder: "Buscar...",
                value: "{search}",
                oninput: move |event| on_search.call(event.value()),
            }
            button {
                disabled: busy,
                onclick: move |_| on_search_submit.call(()),
                "Buscar"
            }

            {controls.iter().map(|control| render_control(control, busy, open_dropdown, dropdown_pos, on_filter))}

            button {
                disabled: busy || !can_clear,
                onclick: move |_| on_clear.call(()),
                "Limpar filtros"
            }
        }
    }
}

fn render_control(
    control: &FilterControl,
    busy: bool,
    open_dropdown: Signal<Option<DropdownId>>,
    dropdown_pos: Signal<Option<(f64, f64)>>,
    on_filter: EventHandler<(String, String)>,
) -> Element {
    let key = control.key;
    let label = control.label;
    let current = control.current.clone();

    match &control.kind {
        FilterControlKind::Text => rsx! {
            label {
                style: "display: inline-flex; gap: 4px; align-items: center;",
                "{label}"
                input {
                    r#type: "text",
                    value: "{current}",
                    oninput: move |event: FormEvent| on_filter.call((key.to_string(), event.value())),
                }
            }
        },
        FilterControlKind::Category(options) => {
            let dropdown_options: Vec<DropdownOption> =
                std::iter::once(DropdownOption::new(NONE_OPTION_VALUE, "(todos)"))
                    .chain(
                        options
                            .iter()
                            .map(|option| DropdownOption::new(option.clone(), option.clone())),
                    )
                    .collect();
            let selected = (!current.is_empty()).then_some(current);
            rsx! {
                DropdownSelect {
                    id: DropdownId::Filter(key),
                    label: label,
                    options: dropdown_options,
                    selected: selected,
                    disabled: busy,
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_select: move |value: String| {
                        let value = if value == NONE_OPTION_VALUE {
                            String::new()
                        } else {
                            value
                        };
                        on_filter.call((key.to_string(), value));
                    }
                }
            }
        }
    }
}
