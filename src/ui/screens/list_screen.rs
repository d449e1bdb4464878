use std::sync::Arc;

use dioxus::prelude::*;
use tracing::debug;

use crate::domain::entities::fornecedor::Fornecedor;
use crate::domain::entities::funcionario::Funcionario;
use crate::domain::entities::material::Material;
use crate::domain::entities::orcamento::Orcamento;
use crate::domain::entities::record::{Record, RecordAction};
use crate::domain::view::column::{find_column, FilterKind};
use crate::domain::view::dialog::ActionDialog;
use crate::domain::view::filter::FilterValue;
use crate::domain::view::pagination::{PageChange, PaginationMode};
use crate::infra::api::resource::ApiResource;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::action_dialog::ConfirmDialog;
use crate::ui::components::data_table::{DataTable, HeaderCell, TableRow};
use crate::ui::components::filter_bar::{FilterBar, FilterControl, FilterControlKind};
use crate::ui::components::pagination_bar::PaginationBar;
use crate::ui::format::{cell_text, column_alignment, notice_style, sort_indicator};
use crate::ui::state::app_state::{AppServices, ListScreenState};
use crate::usecase::ports::source::{MutationEndpoint, PageCriteria, RecordSource};
use crate::usecase::services::edit_service::EditService;
use crate::usecase::services::list_view::ListView;
use crate::usecase::services::query_service::QueryService;

#[component]
pub fn FuncionariosScreen() -> Element {
    list_screen::<Funcionario>()
}

#[component]
pub fn FornecedoresScreen() -> Element {
    list_screen::<Fornecedor>()
}

#[component]
pub fn MateriaisScreen() -> Element {
    list_screen::<Material>()
}

#[component]
pub fn OrcamentosScreen() -> Element {
    list_screen::<Orcamento>()
}

/// Runs the fetch on a UI task and applies the result when it lands. `busy`
/// disables the controls that could start another one meanwhile.
fn spawn_fetch<T: Record>(
    mut view: Signal<ListView<T>>,
    mut busy: Signal<bool>,
    queries: QueryService<T>,
    criteria: PageCriteria,
) {
    busy.set(true);
    spawn(async move {
        let result = run_blocking(move || queries.fetch_page(&criteria)).await;
        view.write().apply_fetch(result);
        busy.set(false);
    });
}

fn fetch_if_needed<T: Record>(
    view: Signal<ListView<T>>,
    busy: Signal<bool>,
    queries: &QueryService<T>,
    criteria: Option<PageCriteria>,
) {
    if let Some(criteria) = criteria {
        spawn_fetch(view, busy, queries.clone(), criteria);
    }
}

fn follow_page_change<T: Record>(
    view: Signal<ListView<T>>,
    busy: Signal<bool>,
    queries: &QueryService<T>,
    change: PageChange,
) {
    if change == PageChange::Rejected {
        debug!(resource = T::RESOURCE, "page change rejected");
    }
    let criteria = view.peek().fetch_for(change);
    fetch_if_needed(view, busy, queries, criteria);
}

struct DialogView {
    heading: String,
    description: String,
    error: Option<String>,
    pending: bool,
    status_options: Vec<String>,
    selected_status: Option<String>,
}

fn dialog_view<T: Record>(view: &ListView<T>, dialog: &ActionDialog) -> Option<DialogView> {
    let (Some(target), Some(action)) = (dialog.target(), dialog.action()) else {
        return None;
    };
    let subject = view
        .items()
        .iter()
        .find(|record| record.key() == target)
        .map(Record::describe)
        .unwrap_or_else(|| format!("registro {target}"));
    let (description, status_options, selected_status) = match action {
        RecordAction::Delete => (
            format!("Excluir {subject}? Esta ação não pode ser desfeita."),
            Vec::new(),
            None,
        ),
        RecordAction::UpdateStatus(status) => (
            format!("Escolha o novo status para {subject}."),
            T::status_options().iter().map(|s| s.to_string()).collect(),
            Some(status.clone()),
        ),
    };
    Some(DialogView {
        heading: action.label(),
        description,
        error: dialog.error().map(str::to_string),
        pending: dialog.is_pending(),
        status_options,
        selected_status,
    })
}

fn filter_controls<T: Record>(view: &ListView<T>) -> Vec<FilterControl> {
    view.columns()
        .iter()
        .filter_map(|column| {
            let kind = match column.filter {
                FilterKind::None => return None,
                FilterKind::Text => FilterControlKind::Text,
                FilterKind::Category(options) => FilterControlKind::Category(
                    options.iter().map(|option| option.to_string()).collect(),
                ),
            };
            Some(FilterControl {
                key: column.key,
                label: column.label,
                kind,
                current: view
                    .filters()
                    .get(column.key)
                    .map(FilterValue::query_value)
                    .unwrap_or_default(),
            })
        })
        .collect()
}

fn list_screen<T: Record>() -> Element {
    let services = use_context::<AppServices>();
    let ListScreenState {
        mut view,
        mut dialog,
        mut busy,
        mut open_dropdown,
        dropdown_pos,
    } = ListScreenState::<T>::new(&services.config);

    let client = services.client.clone();
    let (queries, edits) = use_hook(move || {
        let resource = Arc::new(ApiResource::<T>::new(client));
        let source: Arc<dyn RecordSource<T>> = resource.clone();
        let endpoint: Arc<dyn MutationEndpoint> = resource;
        (
            QueryService::new(source),
            EditService::new(T::RESOURCE, endpoint),
        )
    });

    let queries_for_init = queries.clone();
    use_effect(move || {
        let criteria = view.peek().reload_criteria();
        spawn_fetch(view, busy, queries_for_init.clone(), criteria);
    });

    let snapshot = view.read();
    let mode = snapshot.pagination().mode();
    let headers: Vec<HeaderCell> = snapshot
        .columns()
        .iter()
        .map(|column| HeaderCell {
            key: column.key.to_string(),
            label: column.label.to_string(),
            sortable: column.sortable,
            indicator: sort_indicator(snapshot.sort().direction_for(column.key)),
            align: column_alignment(column),
        })
        .collect();
    let rows: Vec<TableRow> = snapshot
        .visible_rows()
        .into_iter()
        .map(|record| TableRow {
            key: record.key().to_string(),
            cells: snapshot
                .columns()
                .iter()
                .map(|column| cell_text(column, record))
                .collect(),
        })
        .collect();
    let controls = filter_controls(&snapshot);
    let search = snapshot.search().to_string();
    let can_clear = snapshot.has_criteria();
    let pagination = snapshot.pagination().clone();
    let matching = snapshot.matching_count();
    let notice = snapshot
        .notice()
        .map(|notice| (notice.message().to_string(), notice.is_error()));
    let open_dialog = dialog_view(&snapshot, &dialog.read());
    drop(snapshot);

    let is_busy = busy();
    let show_status_action = !T::status_options().is_empty();
    let title = T::TITLE;
    let showing = rows.len();

    let queries_for_reload = queries.clone();
    let queries_for_page = queries.clone();
    let queries_for_size = queries.clone();
    let queries_for_submit = queries.clone();
    let queries_for_filter = queries.clone();
    let queries_for_clear = queries.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; flex: 1; min-height: 0;",
            onclick: move |_| open_dropdown.set(None),

            div {
                style: "display: flex; gap: 12px; align-items: center;",
                h2 { style: "margin: 0;", "{title}" }
                button {
                    disabled: is_busy,
                    onclick: move |_| {
                        let criteria = view.peek().reload_criteria();
                        spawn_fetch(view, busy, queries_for_reload.clone(), criteria);
                    },
                    "Recarregar"
                }
                if is_busy {
                    span { style: "color: #666;", "Carregando..." }
                }
                if mode == PaginationMode::Client {
                    span { style: "color: #666;", "Exibindo {showing} de {matching}" }
                }
            }

            if let Some((message, is_error)) = notice {
                div {
                    style: notice_style(is_error),
                    span { "{message}" }
                    button {
                        style: "margin-left: 8px; border: none; background: transparent; cursor: pointer;",
                        onclick: move |_| view.write().set_notice(None),
                        "×"
                    }
                }
            }

            FilterBar {
                search: search,
                controls: controls,
                can_clear: can_clear,
                busy: is_busy,
                open_dropdown: open_dropdown,
                dropdown_pos: dropdown_pos,
                on_search: move |term: String| view.write().set_search(&term),
                on_search_submit: move |_| {
                    let criteria = view.peek().refresh_criteria();
                    fetch_if_needed(view, busy, &queries_for_submit, criteria);
                },
                on_filter: move |(field, value): (String, String)| {
                    view.write().set_filter_text(&field, &value);
                    let is_category = matches!(
                        find_column(view.peek().columns(), &field).map(|column| column.filter),
                        Some(FilterKind::Category(_))
                    );
                    // Text filters wait for an explicit search so typing does not hit the API.
                    if is_category {
                        let criteria = view.peek().refresh_criteria();
                        fetch_if_needed(view, busy, &queries_for_filter, criteria);
                    }
                },
                on_clear: move |_| {
                    view.write().clear_filters();
                    let criteria = view.peek().refresh_criteria();
                    fetch_if_needed(view, busy, &queries_for_clear, criteria);
                },
            }

            DataTable {
                headers: headers,
                rows: rows,
                busy: is_busy,
                show_status_action: show_status_action,
                on_sort: move |key: String| view.write().cycle_sort(&key),
                on_delete: move |id: String| {
                    dialog.write().open(&id, RecordAction::Delete);
                },
                on_status: move |id: String| {
                    if let Some(first) = T::status_options().first() {
                        dialog.write().open(&id, RecordAction::UpdateStatus(first.to_string()));
                    }
                },
            }

            PaginationBar {
                current_page: pagination.current_page(),
                total_pages: pagination.total_pages(),
                total_items: pagination.total_items(),
                page_size: pagination.page_size(),
                has_prev: pagination.has_prev(),
                has_next: pagination.has_next(),
                busy: is_busy,
                open_dropdown: open_dropdown,
                dropdown_pos: dropdown_pos,
                on_page: move |page: u32| {
                    let change = view.write().request_page(page);
                    follow_page_change(view, busy, &queries_for_page, change);
                },
                on_page_size: move |size: u32| {
                    let change = view.write().request_page_size(size);
                    follow_page_change(view, busy, &queries_for_size, change);
                },
            }
        }

        if let Some(open) = open_dialog {
            ConfirmDialog {
                heading: open.heading,
                description: open.description,
                error: open.error,
                pending: open.pending,
                status_options: open.status_options,
                selected_status: open.selected_status,
                on_select_status: move |status: String| {
                    let target = dialog.peek().target().map(str::to_string);
                    if let Some(target) = target {
                        dialog.write().open(&target, RecordAction::UpdateStatus(status));
                    }
                },
                on_confirm: {
                    let edits = edits.clone();
                    let queries = queries.clone();
                    move |_| {
                        let Some((target, action)) = dialog.write().begin() else {
                            return;
                        };
                        busy.set(true);
                        let edits = edits.clone();
                        let queries = queries.clone();
                        spawn(async move {
                            let (id, requested) = (target.clone(), action.clone());
                            let result = run_blocking(move || edits.apply(&id, &requested)).await;
                            {
                                let mut dialog_state = dialog.write();
                                view.write().finish_action(&mut dialog_state, &target, &action, result);
                            }
                            busy.set(false);
                            let refill = view.peek().refill_criteria();
                            fetch_if_needed(view, busy, &queries, refill);
                        });
                    }
                },
                on_cancel: move |_| {
                    dialog.write().cancel();
                },
            }
        }
    }
}
