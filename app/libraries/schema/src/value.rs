//! Loosely typed column values.
//!
//! SQLite keeps whatever storage class a value arrived with when the
//! column affinity cannot convert it, so a REAL column may hold `''`.
//! `Scalar` reads and writes such columns as INTEGER, REAL or TEXT
//! without failing on the mismatch.

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Sqlite, Type, TypeInfo, ValueRef,
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteTypeInfo, SqliteValueRef},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Scalar {
    /// `0`, `0.0` and the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Scalar::Integer(v) => *v == 0,
            Scalar::Real(v) => *v == 0.0 || v.is_nan(),
            Scalar::Text(v) => v.is_empty(),
        }
    }
}

impl Type<Sqlite> for Scalar {
    fn type_info() -> SqliteTypeInfo {
        <f64 as Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}

impl<'q> Encode<'q, Sqlite> for Scalar {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self {
            Scalar::Integer(v) => <i64 as Encode<'q, Sqlite>>::encode_by_ref(v, buf),
            Scalar::Real(v) => <f64 as Encode<'q, Sqlite>>::encode_by_ref(v, buf),
            Scalar::Text(v) => <String as Encode<'q, Sqlite>>::encode_by_ref(v, buf),
        }
    }
}

impl<'r> Decode<'r, Sqlite> for Scalar {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        // Storage class of this value, not the declared column type
        let storage = value.type_info().name().to_owned();
        match storage.as_str() {
            "INTEGER" => Ok(Scalar::Integer(<i64 as Decode<Sqlite>>::decode(value)?)),
            "REAL" => Ok(Scalar::Real(<f64 as Decode<Sqlite>>::decode(value)?)),
            _ => Ok(Scalar::Text(<String as Decode<Sqlite>>::decode(value)?)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn json_numbers_and_strings_are_accepted() {
        let values: Vec<Scalar> = serde_json::from_str(r#"[5, 2.5, "5", ""]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Scalar::Integer(5),
                Scalar::Real(2.5),
                Scalar::Text("5".to_owned()),
                Scalar::Text("".to_owned()),
            ]
        );
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[5,2.5,"5",""]"#);
    }

    #[test]
    fn falsy_values() {
        assert!(Scalar::Integer(0).is_falsy());
        assert!(Scalar::Real(0.0).is_falsy());
        assert!(Scalar::Text("".to_owned()).is_falsy());
        assert!(!Scalar::Text("0".to_owned()).is_falsy());
        assert!(!Scalar::Integer(7).is_falsy());
    }
}
