use serde::Deserialize;

use crate::domain::entities::record::{de, Record};
use crate::domain::view::column::Column;
use crate::domain::view::value::FieldValue;

pub const FORNECEDOR_STATUS: &[&str] = &["Ativo", "Inativo"];

// Supplier payloads show up both as `nome` and `Nome`; the aliases fold them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fornecedor {
    #[serde(deserialize_with = "de::id", alias = "Id", alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de::text", alias = "Nome")]
    pub nome: String,
    #[serde(default, deserialize_with = "de::opt_text", alias = "CNPJ", alias = "Cnpj")]
    pub cnpj: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Telefone")]
    pub telefone: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Email")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Endereco")]
    pub endereco: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Status")]
    pub status: Option<String>,
}

impl Record for Fornecedor {
    const RESOURCE: &'static str = "fornecedores";
    const TITLE: &'static str = "Fornecedores";

    fn key(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("fornecedor {}", self.nome)
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("nome", "Nome", |f: &Fornecedor| FieldValue::text(&f.nome))
                .searchable()
                .text_filter(),
            Column::new("cnpj", "CNPJ", |f: &Fornecedor| {
                FieldValue::opt_text(f.cnpj.as_deref())
            })
            .searchable(),
            Column::new("telefone", "Telefone", |f: &Fornecedor| {
                FieldValue::opt_text(f.telefone.as_deref())
            })
            .unsortable(),
            Column::new("email", "E-mail", |f: &Fornecedor| {
                FieldValue::opt_text(f.email.as_deref())
            })
            .searchable(),
            Column::new("endereco", "Endereço", |f: &Fornecedor| {
                FieldValue::opt_text(f.endereco.as_deref())
            })
            .text_filter(),
            Column::new("status", "Status", |f: &Fornecedor| {
                FieldValue::opt_text(f.status.as_deref())
            })
            .category_filter(FORNECEDOR_STATUS),
        ]
    }

    fn status_options() -> &'static [&'static str] {
        FORNECEDOR_STATUS
    }

    fn set_status(&mut self, status: &str) -> bool {
        self.status = Some(status.to_string());
        true
    }
}
