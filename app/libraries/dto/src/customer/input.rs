use app_schema::value::Scalar;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /clientes` and `PUT /clientes/{id}`.
///
/// Every field is optional. `id` and `DataHoraCadastro` are not part of the
/// payload; any other unknown keys are ignored. Text fields also take JSON
/// numbers and booleans; the numeric fields take strings and leave the
/// conversion to the column affinity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CustomerInput {
    #[serde(rename = "idUsuario")]
    pub owner_user_id: Option<Scalar>,
    #[serde(rename = "Codigo", deserialize_with = "loose_text")]
    pub code: Option<String>,
    #[serde(rename = "Nome", deserialize_with = "loose_text")]
    pub name: Option<String>,
    #[serde(rename = "CPF_CNPJ", deserialize_with = "loose_text")]
    pub tax_id: Option<String>,
    #[serde(rename = "CEP", deserialize_with = "loose_text")]
    pub postal_code: Option<String>,
    #[serde(rename = "Logradouro", deserialize_with = "loose_text")]
    pub street: Option<String>,
    #[serde(rename = "Endereco", deserialize_with = "loose_text")]
    pub address: Option<String>,
    #[serde(rename = "Numero", deserialize_with = "loose_text")]
    pub number: Option<String>,
    #[serde(rename = "Bairro", deserialize_with = "loose_text")]
    pub neighborhood: Option<String>,
    #[serde(rename = "Cidade", deserialize_with = "loose_text")]
    pub city: Option<String>,
    #[serde(rename = "UF", deserialize_with = "loose_text")]
    pub state: Option<String>,
    #[serde(rename = "Complemento", deserialize_with = "loose_text")]
    pub complement: Option<String>,
    #[serde(rename = "Fone", deserialize_with = "loose_text")]
    pub phone: Option<String>,
    #[serde(rename = "LimiteCredito")]
    pub credit_limit: Option<Scalar>,
    #[serde(rename = "Validade", deserialize_with = "loose_text")]
    pub valid_until: Option<String>,
}

pub const DEFAULT_OWNER_USER_ID: i64 = 1;

impl CustomerInput {
    /// Owner recorded on insert: a missing, zero or empty `idUsuario` falls
    /// back to the default user.
    pub fn owner_or_default(&self) -> Scalar {
        match &self.owner_user_id {
            Some(owner) if !owner.is_falsy() => owner.clone(),
            _ => Scalar::Integer(DEFAULT_OWNER_USER_ID),
        }
    }
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
