//! Substring filters for list endpoints.
//!
//! Each `(key, value)` pair becomes `<column> LIKE ? ESCAPE '\'` bound to
//! `%value%`, AND-combined in the order given. `%`, `_` and `\` inside the
//! value match literally. Keys are checked against an allow-list
//! of column names before they are written into the SQL text; values are
//! only ever bound.

use app_error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    pub conditions: Vec<String>,
    pub params: Vec<String>,
}

impl WhereClause {
    pub fn build<K, V, I>(filters: I, columns: &[&'static str]) -> Result<Self, AppError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut clause = Self::default();
        for (key, value) in filters {
            let (key, value) = (key.as_ref(), value.as_ref());
            let column = columns
                .iter()
                .find(|column| **column == key)
                .ok_or_else(|| AppError::bad_request(format!("unknown filter field: {}", key)))?;
            if value.is_empty() {
                continue;
            }
            clause
                .conditions
                .push(format!("{} LIKE ? ESCAPE '\\'", column));
            clause.params.push(format!("%{}%", escape_like(value)));
        }
        Ok(clause)
    }

    /// `WHERE a LIKE ? ESCAPE '\' AND ...`, or an empty string when unfiltered.
    pub fn to_sql(&self) -> String {
        match self.conditions.len() {
            0 => "".to_owned(),
            _ => format!("WHERE {}", self.conditions.join(" AND ")),
        }
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::customer::Customer;

    #[test]
    fn no_filters_match_everything() {
        let clause = WhereClause::build(Vec::<(&str, &str)>::new(), &Customer::COLUMNS).unwrap();
        assert_eq!(clause.to_sql(), "");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn filters_keep_request_order() {
        let clause = WhereClause::build(
            vec![("Nome", "Jo"), ("Cidade", "Paulo")],
            &Customer::COLUMNS,
        )
        .unwrap();
        assert_eq!(clause.to_sql(), r"WHERE Nome LIKE ? ESCAPE '\' AND Cidade LIKE ? ESCAPE '\'");
        assert_eq!(clause.params, vec!["%Jo%", "%Paulo%"]);
    }

    #[test]
    fn empty_values_are_skipped() {
        let clause =
            WhereClause::build(vec![("Nome", ""), ("UF", "SP")], &Customer::COLUMNS).unwrap();
        assert_eq!(clause.to_sql(), r"WHERE UF LIKE ? ESCAPE '\'");
        assert_eq!(clause.params, vec!["%SP%"]);
    }

    #[test]
    fn wildcards_in_values_are_literal() {
        let clause = WhereClause::build(
            vec![("Nome", "_"), ("Codigo", r"50%\off")],
            &Customer::COLUMNS,
        )
        .unwrap();
        assert_eq!(clause.params, vec![r"%\_%", r"%50\%\\off%"]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = WhereClause::build(
            vec![("Nome", "x"), ("1=1; DROP TABLE clientes; --", "x")],
            &Customer::COLUMNS,
        )
        .unwrap_err();
        assert_eq!(err.status.as_u16(), 400);
        assert!(err.message.starts_with("unknown filter field"));
    }

    #[test]
    fn unknown_keys_are_rejected_even_when_empty() {
        assert!(WhereClause::build(vec![("nome", "")], &Customer::COLUMNS).is_err());
    }
}
