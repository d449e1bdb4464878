use serde::Deserialize;

use crate::domain::entities::record::{de, Record};
use crate::domain::view::column::Column;
use crate::domain::view::value::FieldValue;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Material {
    #[serde(deserialize_with = "de::id", alias = "Id", alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de::text", alias = "Nome")]
    pub nome: String,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Categoria")]
    pub categoria: Option<String>,
    #[serde(
        default,
        deserialize_with = "de::opt_text",
        alias = "Unidade",
        alias = "unidadeMedida"
    )]
    pub unidade: Option<String>,
    #[serde(
        default,
        rename = "precoUnitario",
        deserialize_with = "de::opt_number",
        alias = "preco_unitario",
        alias = "PrecoUnitario"
    )]
    pub preco_unitario: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_text", alias = "Fornecedor")]
    pub fornecedor: Option<String>,
}

impl Record for Material {
    const RESOURCE: &'static str = "materiais";
    const TITLE: &'static str = "Materiais";

    fn key(&self) -> &str {
        &self.id
    }

    fn describe(&self) -> String {
        format!("material {}", self.nome)
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("nome", "Nome", |m: &Material| FieldValue::text(&m.nome))
                .searchable()
                .text_filter(),
            Column::new("categoria", "Categoria", |m: &Material| {
                FieldValue::opt_text(m.categoria.as_deref())
            })
            .searchable()
            .text_filter(),
            Column::new("unidade", "Unidade", |m: &Material| {
                FieldValue::opt_text(m.unidade.as_deref())
            }),
            Column::new("precoUnitario", "Preço unitário", |m: &Material| {
                FieldValue::number(m.preco_unitario)
            })
            .currency(),
            Column::new("fornecedor", "Fornecedor", |m: &Material| {
                FieldValue::opt_text(m.fornecedor.as_deref())
            })
            .searchable()
            .text_filter(),
        ]
    }
}
