use std::sync::Arc;

use dioxus::prelude::{use_signal, Signal};

use crate::config::AppConfig;
use crate::domain::entities::record::Record;
use crate::domain::view::dialog::ActionDialog;
use crate::infra::api::client::ApiClient;
use crate::ui::components::dropdown::DropdownId;
use crate::usecase::services::list_view::ListView;

/// Shared across every screen through the Dioxus context.
#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub client: Arc<ApiClient>,
}

pub struct ListScreenState<T: Record> {
    pub view: Signal<ListView<T>>,
    pub dialog: Signal<ActionDialog>,
    pub busy: Signal<bool>,
    pub open_dropdown: Signal<Option<DropdownId>>,
    pub dropdown_pos: Signal<Option<(f64, f64)>>,
}

impl<T: Record> ListScreenState<T> {
    pub fn new(config: &AppConfig) -> Self {
        let mode = config.pagination;
        let page_size = config.page_size;
        Self {
            view: use_signal(move || ListView::<T>::new(mode, page_size)),
            dialog: use_signal(ActionDialog::default),
            busy: use_signal(|| false),
            open_dropdown: use_signal(|| None::<DropdownId>),
            dropdown_pos: use_signal(|| None::<(f64, f64)>),
        }
    }
}
