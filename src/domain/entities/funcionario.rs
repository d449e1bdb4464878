use serde::Deserialize;

use crate::domain::entities::record::{de, Record};
use crate::domain::view::column::Column;
use crate::domain::view::value::FieldValue;

pub const FUNCIONARIO_STATUS: &[&str] = &["Ativo", "Inativo", "Férias"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Funcionario {
    #[serde(deserialize_with = "de::id", alias = "Id", alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de::text", alias = "Nome")]
    pub nome: String,
    #[serde(default, deserialize_with = "de::opt_text", alias = "CPF", alias = "Cpf")]
    pub cpf: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Cargo")]
    pub cargo: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Telefone")]
    pub telefone: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Email")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de::opt_number", alias = "Salario")]
    pub salario: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Status")]
    pub status: Option<String>,
}

impl Record for Funcionario {
    const RESOURCE: &'static str = "funcionarios";
    const TITLE: &'static str = "Funcionários";

    fn key(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("funcionário {}", self.nome)
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("nome", "Nome", |f: &Funcionario| FieldValue::text(&f.nome))
                .searchable()
                .text_filter(),
            Column::new("cpf", "CPF", |f: &Funcionario| FieldValue::opt_text(f.cpf.as_deref()))
                .searchable(),
            Column::new("cargo", "Cargo", |f: &Funcionario| {
                FieldValue::opt_text(f.cargo.as_deref())
            })
            .searchable()
            .text_filter(),
            Column::new("telefone", "Telefone", |f: &Funcionario| {
                FieldValue::opt_text(f.telefone.as_deref())
            })
            .unsortable(),
            Column::new("email", "E-mail", |f: &Funcionario| {
                FieldValue::opt_text(f.email.as_deref())
            })
            .searchable(),
            Column::new("salario", "Salário", |f: &Funcionario| FieldValue::number(f.salario))
                .currency(),
            Column::new("status", "Status", |f: &Funcionario| {
                FieldValue::opt_text(f.status.as_deref())
            })
            .category_filter(FUNCIONARIO_STATUS),
        ]
    }

    fn status_options() -> &'static [&'static str] {
        FUNCIONARIO_STATUS
    }

    fn set_status(&mut self, status: &str) -> bool {
        self.status = Some(status.to_string());
        true
    }
}
