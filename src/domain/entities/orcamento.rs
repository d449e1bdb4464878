use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::entities::record::{de, Record};
use crate::domain::view::column::Column;
use crate::domain::view::value::FieldValue;

pub const ORCAMENTO_STATUS: &[&str] = &["Pendente", "Aprovado", "Rejeitado"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Orcamento {
    #[serde(deserialize_with = "de::id", alias = "Id", alias = "_id")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "de::text",
        alias = "Cliente",
        alias = "nomeCliente"
    )]
    pub cliente: String,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Obra")]
    pub obra: Option<String>,
    #[serde(
        default,
        rename = "valorTotal",
        deserialize_with = "de::opt_number",
        alias = "valor_total",
        alias = "ValorTotal"
    )]
    pub valor_total: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Status")]
    pub status: Option<String>,
    #[serde(
        default,
        rename = "dataCriacao",
        deserialize_with = "de::opt_date",
        alias = "data_criacao",
        alias = "createdAt"
    )]
    pub data_criacao: Option<NaiveDate>,
}

impl Record for Orcamento {
    const RESOURCE: &'static str = "orcamentos";
    const TITLE: &'static str = "Orçamentos";

    fn key(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        match &self.obra {
            Some(obra) => format!("orçamento #{} ({obra})", self.id),
            None => format!("orçamento #{}", self.id),
        }
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "Nº", |o: &Orcamento| FieldValue::text(&o.id)).searchable(),
            Column::new("cliente", "Cliente", |o: &Orcamento| FieldValue::text(&o.cliente))
                .searchable()
                .text_filter(),
            Column::new("obra", "Obra", |o: &Orcamento| {
                FieldValue::opt_text(o.obra.as_deref())
            })
            .searchable()
            .text_filter(),
            Column::new("valorTotal", "Valor total", |o: &Orcamento| {
                FieldValue::number(o.valor_total)
            })
            .currency(),
            Column::new("status", "Status", |o: &Orcamento| {
                FieldValue::opt_text(o.status.as_deref())
            })
            .category_filter(ORCAMENTO_STATUS),
            Column::new("dataCriacao", "Criado em", |o: &Orcamento| {
                FieldValue::date(o.data_criacao)
            }),
        ]
    }

    fn status_options() -> &'static [&'static str] {
        ORCAMENTO_STATUS
    }

    fn set_status(&mut self, status: &str) -> bool {
        self.status = Some(status.to_string());
        true
    }
}
