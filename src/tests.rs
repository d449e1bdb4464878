use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;

use crate::domain::entities::funcionario::Funcionario;
use crate::domain::entities::page::Page;
use crate::domain::entities::record::{Record, RecordAction};
use crate::domain::view::column::find_column;
use crate::domain::view::dialog::ActionDialog;
use crate::domain::view::pagination::{PageChange, PaginationMode};
use crate::domain::view::value::SortDirection;
use crate::ensure_webview_data_dir;
use crate::ui::format::{
    cell_text, format_currency, sort_indicator, table_container_style, table_header_cell_style,
};
use crate::usecase::ports::source::{
    MutationEndpoint, MutationOutcome, PageCriteria, RecordSource, SourceError,
};
use crate::usecase::services::edit_service::EditService;
use crate::usecase::services::list_view::{ListView, Notice};
use crate::usecase::services::query_service::QueryService;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("obras-{prefix}-{nanos}"))
}

fn funcionario(id: u32) -> Funcionario {
    let status = if id % 5 == 0 { "Inativo" } else { "Ativo" };
    serde_json::from_value(json!({
        "id": id,
        "nome": format!("Funcionario {id}"),
        "cargo": "Pedreiro",
        "salario": 2000 + id,
        "status": status,
    }))
    .expect("fixture should decode")
}

fn staff(count: u32) -> Vec<Funcionario> {
    (1..=count).map(funcionario).collect()
}

/// Serves `records` the way the REST backend does: paged when the criteria
/// carry a page, the full list otherwise.
struct FakeSource {
    records: Vec<Funcionario>,
    fail: Mutex<bool>,
    calls: Mutex<Vec<PageCriteria>>,
}

impl FakeSource {
    fn new(records: Vec<Funcionario>) -> Arc<Self> {
        Arc::new(Self {
            records,
            fail: Mutex::new(false),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn set_failing(&self, fail: bool) {
        *self.fail.lock().expect("fail flag lock") = fail;
    }

    fn calls(&self) -> Vec<PageCriteria> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl RecordSource<Funcionario> for FakeSource {
    fn fetch_page(&self, criteria: &PageCriteria) -> Result<Page<Funcionario>, SourceError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(criteria.clone());
        if *self.fail.lock().expect("fail flag lock") {
            return Err(SourceError::Network("connection refused".to_string()));
        }
        match (criteria.page, criteria.page_size) {
            (Some(page), Some(page_size)) => {
                let start = ((page - 1) * page_size) as usize;
                let items: Vec<Funcionario> = self
                    .records
                    .iter()
                    .skip(start)
                    .take(page_size as usize)
                    .cloned()
                    .collect();
                Ok(Page::new(
                    items,
                    self.records.len() as u64,
                    0,
                    page,
                    page_size,
                ))
            }
            _ => Ok(Page::unpaginated(self.records.clone())),
        }
    }
}

struct FakeEndpoint {
    outcome: Result<MutationOutcome, SourceError>,
    calls: Mutex<Vec<(String, RecordAction)>>,
}

impl FakeEndpoint {
    fn answering(outcome: Result<MutationOutcome, SourceError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }
}

impl MutationEndpoint for FakeEndpoint {
    fn mutate(&self, id: &str, action: &RecordAction) -> Result<MutationOutcome, SourceError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((id.to_string(), action.clone()));
        self.outcome.clone()
    }
}

fn services(
    source: &Arc<FakeSource>,
    endpoint: &Arc<FakeEndpoint>,
) -> (QueryService<Funcionario>, EditService) {
    let source: Arc<dyn RecordSource<Funcionario>> = source.clone();
    let endpoint: Arc<dyn MutationEndpoint> = endpoint.clone();
    (
        QueryService::new(source),
        EditService::new(Funcionario::RESOURCE, endpoint),
    )
}

fn accepted() -> Arc<FakeEndpoint> {
    FakeEndpoint::answering(Ok(MutationOutcome {
        success: true,
        message: String::new(),
    }))
}

// The screen runs these same steps, with the source call on a blocking task.
fn fetch(
    view: &mut ListView<Funcionario>,
    queries: &QueryService<Funcionario>,
    criteria: PageCriteria,
) -> bool {
    view.apply_fetch(queries.fetch_page(&criteria))
}

fn load(view: &mut ListView<Funcionario>, queries: &QueryService<Funcionario>) -> bool {
    let criteria = view.reload_criteria();
    fetch(view, queries, criteria)
}

fn follow(
    view: &mut ListView<Funcionario>,
    queries: &QueryService<Funcionario>,
    change: PageChange,
) -> bool {
    match view.fetch_for(change) {
        Some(criteria) => fetch(view, queries, criteria),
        None => change == PageChange::Applied,
    }
}

fn go_to(view: &mut ListView<Funcionario>, queries: &QueryService<Funcionario>, page: u32) -> bool {
    let change = view.request_page(page);
    follow(view, queries, change)
}

fn resize(view: &mut ListView<Funcionario>, queries: &QueryService<Funcionario>, size: u32) -> bool {
    let change = view.request_page_size(size);
    follow(view, queries, change)
}

fn confirm(view: &mut ListView<Funcionario>, dialog: &mut ActionDialog, edits: &EditService) -> bool {
    let Some((target, action)) = dialog.begin() else {
        return false;
    };
    assert!(dialog.is_pending(), "dialog should be pending while the call runs");
    let result = edits.apply(&target, &action);
    view.finish_action(dialog, &target, &action, result)
}

#[test]
fn server_mode_loads_the_first_page_with_query_parameters() {
    let source = FakeSource::new(staff(25));
    let (queries, _) = services(&source, &accepted());
    let mut view = ListView::<Funcionario>::new(PaginationMode::Server, 10);

    assert!(load(&mut view, &queries), "initial load should succeed");

    assert_eq!(view.items().len(), 10);
    assert_eq!(view.pagination().current_page(), 1);
    assert_eq!(view.pagination().total_pages(), 3);
    assert_eq!(view.pagination().total_items(), 25);

    let calls = source.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].page, Some(1));
    assert_eq!(calls[0].page_size, Some(10));
    assert_eq!(calls[0].search, None);
}

#[test]
fn server_mode_sends_search_and_filters_with_the_first_page() {
    let mut view = ListView::<Funcionario>::new(PaginationMode::Server, 10);
    view.set_search("  pedreiro ");
    view.set_filter_text("status", "Ativo");

    let criteria = view.first_page_criteria();

    assert_eq!(
        criteria.query_pairs(),
        vec![
            ("page".to_string(), "1".to_string()),
            ("pageSize".to_string(), "10".to_string()),
            ("search".to_string(), "pedreiro".to_string()),
            ("status".to_string(), "Ativo".to_string()),
        ]
    );
}

#[test]
fn server_mode_rejects_out_of_range_pages_without_fetching() {
    let source = FakeSource::new(staff(25));
    let (queries, _) = services(&source, &accepted());
    let mut view = ListView::<Funcionario>::new(PaginationMode::Server, 10);
    load(&mut view, &queries);

    assert!(!go_to(&mut view, &queries, 0));
    assert!(!go_to(&mut view, &queries, 4));
    assert_eq!(source.calls().len(), 1, "rejected pages must not fetch");
    assert_eq!(view.pagination().current_page(), 1);

    assert!(go_to(&mut view, &queries, 3));
    assert_eq!(view.pagination().current_page(), 3);
    assert_eq!(view.items().len(), 5);
    assert_eq!(source.calls().last().and_then(|c| c.page), Some(3));
}

#[test]
fn page_size_change_returns_to_the_first_page_in_both_modes() {
    let source = FakeSource::new(staff(25));
    let (queries, _) = services(&source, &accepted());

    let mut server = ListView::<Funcionario>::new(PaginationMode::Server, 10);
    load(&mut server, &queries);
    go_to(&mut server, &queries, 3);
    assert!(resize(&mut server, &queries, 20));
    assert_eq!(server.pagination().current_page(), 1);
    assert_eq!(server.pagination().page_size(), 20);
    assert_eq!(server.pagination().total_pages(), 2);

    let mut client = ListView::<Funcionario>::new(PaginationMode::Client, 10);
    load(&mut client, &queries);
    assert_eq!(client.request_page(3), PageChange::Applied);
    assert_eq!(client.request_page_size(20), PageChange::Applied);
    assert_eq!(client.pagination().current_page(), 1);
    assert_eq!(client.pagination().total_pages(), 2);
    assert_eq!(client.visible_rows().len(), 20);

    assert_eq!(client.request_page_size(0), PageChange::Rejected);
    assert_eq!(client.pagination().page_size(), 20);
}

#[test]
fn failed_fetch_keeps_the_current_rows_and_reports_the_error() {
    let source = FakeSource::new(staff(25));
    let (queries, _) = services(&source, &accepted());
    let mut view = ListView::<Funcionario>::new(PaginationMode::Server, 10);
    load(&mut view, &queries);
    let before: Vec<String> = view.items().iter().map(|f| f.id.clone()).collect();

    source.set_failing(true);
    assert!(!go_to(&mut view, &queries, 2));

    let after: Vec<String> = view.items().iter().map(|f| f.id.clone()).collect();
    assert_eq!(after, before);
    assert_eq!(view.pagination().current_page(), 1);
    let notice = view.notice().expect("failure should leave a notice");
    assert!(notice.is_error());
    assert!(
        notice.message().starts_with("Falha ao carregar funcionários"),
        "unexpected notice: {}",
        notice.message()
    );

    source.set_failing(false);
    assert!(go_to(&mut view, &queries, 2));
    assert_eq!(view.notice(), None, "a successful fetch clears the error");
}

#[test]
fn client_mode_search_resets_to_the_first_page() {
    let source = FakeSource::new(staff(25));
    let (queries, _) = services(&source, &accepted());
    let mut view = ListView::<Funcionario>::new(PaginationMode::Client, 10);
    load(&mut view, &queries);
    assert_eq!(source.calls()[0], PageCriteria::default());

    view.request_page(3);
    view.set_search("Funcionario 2");

    assert_eq!(view.pagination().current_page(), 1);
    assert_eq!(view.matching_count(), 7);
    assert_eq!(view.pagination().total_pages(), 1);
    assert_eq!(view.reload_criteria(), PageCriteria::default());
}

#[test]
fn client_mode_category_filter_and_clear() {
    let source = FakeSource::new(staff(25));
    let (queries, _) = services(&source, &accepted());
    let mut view = ListView::<Funcionario>::new(PaginationMode::Client, 10);
    load(&mut view, &queries);

    view.set_filter_text("status", "inativo");
    assert_eq!(view.matching_count(), 5);
    assert!(view
        .visible_rows()
        .iter()
        .all(|f| f.status.as_deref() == Some("Inativo")));

    view.cycle_sort("salario");
    view.cycle_sort("salario");
    assert_eq!(
        view.sort().direction_for("salario"),
        Some(SortDirection::Desc)
    );
    assert_eq!(view.visible_rows()[0].id, "25");

    assert!(view.has_criteria());
    view.clear_filters();
    assert!(!view.has_criteria());
    assert_eq!(view.matching_count(), 25);
    assert!(!view.sort().is_active());
    assert_eq!(view.visible_rows()[0].id, "1");
}

#[test]
fn confirmed_delete_removes_the_row_without_refetching() {
    let source = FakeSource::new(staff(50));
    let endpoint = accepted();
    let (queries, edits) = services(&source, &endpoint);
    let mut view = ListView::<Funcionario>::new(PaginationMode::Client, 100);
    load(&mut view, &queries);
    let mut dialog = ActionDialog::default();

    assert!(dialog.open("42", RecordAction::Delete));
    assert!(confirm(&mut view, &mut dialog, &edits));

    assert!(view.items().iter().all(|f| f.id != "42"));
    assert_eq!(view.items().len(), 49);
    assert_eq!(view.pagination().total_items(), 49);
    assert_eq!(source.calls().len(), 1, "delete must not trigger a fetch");
    assert_eq!(dialog, ActionDialog::Closed);
    assert_eq!(
        view.notice(),
        Some(&Notice::Info("Registro excluído".to_string()))
    );
    assert_eq!(
        endpoint.calls.lock().expect("calls lock").as_slice(),
        &[("42".to_string(), RecordAction::Delete)]
    );
}

#[test]
fn server_mode_delete_adjusts_totals_locally() {
    let source = FakeSource::new(staff(11));
    let (queries, edits) = services(&source, &accepted());
    let mut view = ListView::<Funcionario>::new(PaginationMode::Server, 10);
    load(&mut view, &queries);
    assert_eq!(view.pagination().total_pages(), 2);
    let mut dialog = ActionDialog::default();

    dialog.open("3", RecordAction::Delete);
    assert!(confirm(&mut view, &mut dialog, &edits));

    assert_eq!(view.items().len(), 9);
    assert_eq!(view.pagination().total_items(), 10);
    assert_eq!(view.pagination().total_pages(), 1);
    assert!(!view.pagination().has_next());
    assert_eq!(view.refill_criteria(), None, "rows are still shown");
    assert_eq!(source.calls().len(), 1);
}

#[test]
fn deleting_the_last_row_of_a_server_page_refills_from_an_earlier_page() {
    let source = FakeSource::new(staff(11));
    let (queries, edits) = services(&source, &accepted());
    let mut view = ListView::<Funcionario>::new(PaginationMode::Server, 10);
    load(&mut view, &queries);
    assert!(go_to(&mut view, &queries, 2));
    assert_eq!(view.items().len(), 1);
    let mut dialog = ActionDialog::default();

    dialog.open("11", RecordAction::Delete);
    assert!(confirm(&mut view, &mut dialog, &edits));

    assert!(view.items().is_empty());
    assert_eq!(view.pagination().total_pages(), 1);
    assert_eq!(view.pagination().current_page(), 1);
    let refill = view
        .refill_criteria()
        .expect("an emptied page should be refilled");
    assert_eq!(refill.page, Some(1));
    assert_eq!(refill.page_size, Some(10));

    assert!(fetch(&mut view, &queries, refill));
    assert_eq!(view.items().len(), 10);
}

#[test]
fn client_mode_needs_no_fetch_after_narrowing_or_paging() {
    let source = FakeSource::new(staff(25));
    let (queries, edits) = services(&source, &accepted());
    let mut view = ListView::<Funcionario>::new(PaginationMode::Client, 10);
    load(&mut view, &queries);

    view.set_search("Funcionario 1");
    assert_eq!(view.refresh_criteria(), None);
    let change = view.request_page(1);
    assert_eq!(view.fetch_for(change), None);

    let mut dialog = ActionDialog::default();
    for id in 1..=25 {
        dialog.open(&id.to_string(), RecordAction::Delete);
        confirm(&mut view, &mut dialog, &edits);
    }
    assert!(view.items().is_empty());
    assert_eq!(view.refill_criteria(), None);
    assert_eq!(source.calls().len(), 1);
}

#[test]
fn server_mode_refresh_and_page_changes_map_to_criteria() {
    let source = FakeSource::new(staff(25));
    let (queries, _) = services(&source, &accepted());
    let mut view = ListView::<Funcionario>::new(PaginationMode::Server, 10);
    load(&mut view, &queries);
    go_to(&mut view, &queries, 2);

    view.set_search("pedreiro");
    let refresh = view.refresh_criteria().expect("server mode refetches");
    assert_eq!(refresh.page, Some(1));
    assert_eq!(refresh.search.as_deref(), Some("pedreiro"));

    let rejected = view.request_page(9);
    assert_eq!(rejected, PageChange::Rejected);
    assert_eq!(view.fetch_for(rejected), None);
    let next = view.request_page(3);
    assert_eq!(view.fetch_for(next).and_then(|c| c.page), Some(3));
}

#[test]
fn status_change_patches_the_record_in_place() {
    let source = FakeSource::new(staff(10));
    let endpoint = FakeEndpoint::answering(Ok(MutationOutcome {
        success: true,
        message: "Status atualizado".to_string(),
    }));
    let (queries, edits) = services(&source, &endpoint);
    let mut view = ListView::<Funcionario>::new(PaginationMode::Client, 10);
    load(&mut view, &queries);
    let mut dialog = ActionDialog::default();

    dialog.open("4", RecordAction::UpdateStatus("Férias".to_string()));
    assert!(confirm(&mut view, &mut dialog, &edits));

    let record = view
        .items()
        .iter()
        .find(|f| f.id == "4")
        .expect("record should still be listed");
    assert_eq!(record.status.as_deref(), Some("Férias"));
    assert_eq!(
        view.notice(),
        Some(&Notice::Info("Status atualizado".to_string()))
    );
    assert!(!dialog.is_open());
}

#[test]
fn rejected_mutation_keeps_the_dialog_open_with_the_message() {
    let source = FakeSource::new(staff(10));
    let endpoint = FakeEndpoint::answering(Ok(MutationOutcome {
        success: false,
        message: "Status inválido".to_string(),
    }));
    let (queries, edits) = services(&source, &endpoint);
    let mut view = ListView::<Funcionario>::new(PaginationMode::Client, 10);
    load(&mut view, &queries);
    let mut dialog = ActionDialog::default();

    dialog.open("4", RecordAction::UpdateStatus("Férias".to_string()));
    assert!(!confirm(&mut view, &mut dialog, &edits));

    assert!(dialog.is_open(), "dialog should stay open for a retry");
    assert_eq!(dialog.error(), Some("Status inválido"));
    assert_eq!(dialog.target(), Some("4"));
    let record = view
        .items()
        .iter()
        .find(|f| f.id == "4")
        .expect("record should still be listed");
    assert_eq!(record.status.as_deref(), Some("Ativo"));
    assert!(view.notice().is_some_and(Notice::is_error));
}

#[test]
fn network_failure_on_delete_keeps_the_row() {
    let source = FakeSource::new(staff(10));
    let endpoint = FakeEndpoint::answering(Err(SourceError::Network("timeout".to_string())));
    let (queries, edits) = services(&source, &endpoint);
    let mut view = ListView::<Funcionario>::new(PaginationMode::Client, 10);
    load(&mut view, &queries);
    let mut dialog = ActionDialog::default();

    dialog.open("7", RecordAction::Delete);
    assert!(!confirm(&mut view, &mut dialog, &edits));

    assert_eq!(view.items().len(), 10);
    assert_eq!(dialog.error(), Some("falha de conexão: timeout"));
}

#[test]
fn format_currency_uses_brazilian_separators() {
    assert_eq!(format_currency(1234.5), "R$ 1.234,50");
    assert_eq!(format_currency(0.0), "R$ 0,00");
    assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
    assert_eq!(format_currency(-45.678), "-R$ 45,68");
}

#[test]
fn salary_cells_render_as_currency() {
    let columns = Funcionario::columns();
    let salario = find_column(&columns, "salario").expect("salario column should exist");

    assert_eq!(cell_text(salario, &funcionario(3)), "R$ 2.003,00");
}

#[test]
fn sort_indicator_follows_direction() {
    assert_eq!(sort_indicator(Some(SortDirection::Asc)), " ▲");
    assert_eq!(sort_indicator(Some(SortDirection::Desc)), " ▼");
    assert_eq!(sort_indicator(None), "");
}

#[test]
fn table_styles_keep_headers_visible_while_scrolling() {
    let container = table_container_style();
    assert!(container.contains("overflow: auto"));
    assert!(container.contains("min-height: 0"));

    let header = table_header_cell_style();
    assert!(header.contains("position: sticky"));
    assert!(header.contains("top: 0"));
}

#[test]
fn ensure_webview_data_dir_creates_webview_subdir() {
    let temp_dir = unique_test_dir("webview-data-dir");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");

    let webview_dir =
        ensure_webview_data_dir(&temp_dir).expect("webview data dir should be created");

    assert_eq!(webview_dir, temp_dir.join("webview"));
    assert!(webview_dir.is_dir(), "webview directory should exist");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}
