use dioxus::prelude::*;

use crate::ui::format::{root_container_style, tab_button_style};
use crate::ui::screens::list_screen::{
    FornecedoresScreen, FuncionariosScreen, MateriaisScreen, OrcamentosScreen,
};
use crate::ui::state::app_state::AppServices;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Funcionarios,
    Fornecedores,
    Materiais,
    Orcamentos,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Funcionarios,
        Screen::Fornecedores,
        Screen::Materiais,
        Screen::Orcamentos,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Funcionarios => "Funcionários",
            Screen::Fornecedores => "Fornecedores",
            Screen::Materiais => "Materiais",
            Screen::Orcamentos => "Orçamentos",
        }
    }
}

#[component]
pub fn App() -> Element {
    let services = use_context::<AppServices>();
    let mut screen = use_signal(|| Screen::Funcionarios);
    let base_url = services.client.base_url().to_string();
    let current = screen();
    let body = match current {
        Screen::Funcionarios => rsx! { FuncionariosScreen {} },
        Screen::Fornecedores => rsx! { FornecedoresScreen {} },
        Screen::Materiais => rsx! { MateriaisScreen {} },
        Screen::Orcamentos => rsx! { OrcamentosScreen {} },
    };

    rsx! {
        div {
            style: root_container_style(),
            div {
                style: "display: flex; gap: 6px; align-items: center; padding-bottom: 8px; border-bottom: 1px solid #ddd;",
                {Screen::ALL.into_iter().map(|tab| {
                    let label = tab.label();
                    rsx!(
                        button {
                            key: "{label}",
                            style: tab_button_style(tab == current),
                            onclick: move |_| screen.set(tab),
                            "{label}"
                        }
                    )
                })}
                span { style: "margin-left: auto; color: #888; font-size: 12px;", "{base_url}" }
            }

            {body}
        }
    }
}
