use dioxus::prelude::*;

use crate::config::PAGE_SIZE_CHOICES;
use crate::ui::components::dropdown::{DropdownId, DropdownOption, DropdownSelect};

#[component]
pub fn PaginationBar(
    current_page: u32,
    total_pages: u32,
    total_items: u64,
    page_size: u32,
    has_prev: bool,
    has_next: bool,
    busy: bool,
    open_dropdown: Signal<Option<DropdownId>>,
    dropdown_pos: Signal<Option<(f64, f64)>>,
    on_page: EventHandler<u32>,
    on_page_size: EventHandler<u32>,
) -> Element {
    let mut choices = PAGE_SIZE_CHOICES.to_vec();
    if !choices.contains(&page_size) {
        choices.push(page_size);
        choices.sort_unstable();
    }
    let size_options: Vec<DropdownOption> = choices
        .iter()
        .map(|size| DropdownOption::new(size.to_string(), size.to_string()))
        .collect();

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center; padding: 8px 0;",
            button {
                disabled: busy || !has_prev,
                onclick: move |_| on_page.call(current_page.saturating_sub(1)),
                "Anterior"
            }
            span { "Página {current_page} de {total_pages} ({total_items} registros)" }
            button {
                disabled: busy || !has_next,
                onclick: move |_| on_page.call(current_page + 1),
                "Próxima"
            }
            DropdownSelect {
                id: DropdownId::PageSize,
                label: "Itens por página",
                options: size_options,
                selected: Some(page_size.to_string()),
                disabled: busy,
                open_dropdown: open_dropdown,
                dropdown_pos: dropdown_pos,
                on_select: move |value: String| {
                    if let Ok(size) = value.parse::<u32>() {
                        on_page_size.call(size);
                    }
                }
            }
        }
    }
}
