use crate::value::Scalar;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `clientes` table. JSON keys are the column names.
///
/// The two numeric columns are `Scalar`: rows written by older clients can
/// hold text there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    #[serde(rename = "idUsuario")]
    #[sqlx(rename = "idUsuario")]
    pub owner_user_id: Option<Scalar>,
    #[serde(rename = "DataHoraCadastro")]
    #[sqlx(rename = "DataHoraCadastro")]
    pub registered_at: Option<String>,
    #[serde(rename = "Codigo")]
    #[sqlx(rename = "Codigo")]
    pub code: Option<String>,
    #[serde(rename = "Nome")]
    #[sqlx(rename = "Nome")]
    pub name: Option<String>,
    #[serde(rename = "CPF_CNPJ")]
    #[sqlx(rename = "CPF_CNPJ")]
    pub tax_id: Option<String>,
    #[serde(rename = "CEP")]
    #[sqlx(rename = "CEP")]
    pub postal_code: Option<String>,
    #[serde(rename = "Logradouro")]
    #[sqlx(rename = "Logradouro")]
    pub street: Option<String>,
    #[serde(rename = "Endereco")]
    #[sqlx(rename = "Endereco")]
    pub address: Option<String>,
    #[serde(rename = "Numero")]
    #[sqlx(rename = "Numero")]
    pub number: Option<String>,
    #[serde(rename = "Bairro")]
    #[sqlx(rename = "Bairro")]
    pub neighborhood: Option<String>,
    #[serde(rename = "Cidade")]
    #[sqlx(rename = "Cidade")]
    pub city: Option<String>,
    #[serde(rename = "UF")]
    #[sqlx(rename = "UF")]
    pub state: Option<String>,
    #[serde(rename = "Complemento")]
    #[sqlx(rename = "Complemento")]
    pub complement: Option<String>,
    #[serde(rename = "Fone")]
    #[sqlx(rename = "Fone")]
    pub phone: Option<String>,
    #[serde(rename = "LimiteCredito")]
    #[sqlx(rename = "LimiteCredito")]
    pub credit_limit: Option<Scalar>,
    #[serde(rename = "Validade")]
    #[sqlx(rename = "Validade")]
    pub valid_until: Option<String>,
}

#[derive(Debug, FromRow)]
pub struct CustomerCount {
    pub total: i64,
}

impl Customer {
    /// Columns a list request may filter on. Query keys outside this list
    /// never reach the SQL text.
    pub const COLUMNS: [&'static str; 17] = [
        "id",
        "idUsuario",
        "DataHoraCadastro",
        "Codigo",
        "Nome",
        "CPF_CNPJ",
        "CEP",
        "Logradouro",
        "Endereco",
        "Numero",
        "Bairro",
        "Cidade",
        "UF",
        "Complemento",
        "Fone",
        "LimiteCredito",
        "Validade",
    ];

    #[inline]
    pub fn create_table() -> &'static str {
        include_str!("../../../SQL/clientes/create_table.sql")
    }

    #[inline]
    pub fn select_base() -> &'static str {
        include_str!("../../../SQL/clientes/select_base.sql")
    }

    #[inline]
    pub fn count_base() -> &'static str {
        include_str!("../../../SQL/clientes/count_base.sql")
    }

    #[inline]
    pub fn insert_query() -> &'static str {
        include_str!("../../../SQL/clientes/insert.sql")
    }

    #[inline]
    pub fn update_query() -> &'static str {
        include_str!("../../../SQL/clientes/update.sql")
    }

    #[inline]
    pub fn delete_query() -> &'static str {
        include_str!("../../../SQL/clientes/delete.sql")
    }

    /// Paged listing, ordered by id so pages do not shift between requests.
    pub fn page_query(where_clause: &str) -> String {
        format!(
            "{} {} ORDER BY id ASC LIMIT ? OFFSET ?",
            Self::select_base().trim_end(),
            where_clause
        )
    }

    pub fn count_query(where_clause: &str) -> String {
        format!("{} {}", Self::count_base().trim_end(), where_clause)
    }
}
