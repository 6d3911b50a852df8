use app_error::AppError;
use app_schema::customer::Customer;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Query string of `GET /clientes`, split into paging and filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCustomersInput {
    pub page: i64,
    pub limit: i64,
    pub filters: Vec<(String, String)>,
}

impl ListCustomersInput {
    /// `page` and `limit` are reserved; every other pair is a filter, kept in
    /// request order. Both are clamped to at least 1 and `limit` to at most
    /// `max_limit`.
    pub fn from_pairs(pairs: Vec<(String, String)>, max_limit: i64) -> Result<Self, AppError> {
        let mut page = DEFAULT_PAGE;
        let mut limit = DEFAULT_LIMIT;
        let mut filters = Vec::new();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => page = parse_positive(&key, &value, DEFAULT_PAGE)?,
                "limit" => limit = parse_positive(&key, &value, DEFAULT_LIMIT)?,
                _ => filters.push((key, value)),
            }
        }
        Ok(Self {
            page,
            limit: limit.min(max_limit.max(1)),
            filters,
        })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Integer coercion of a query value: leading whitespace and sign, then the
/// longest run of digits (`"2.5"` is 2, `"10abc"` is 10). Overflow saturates.
fn parse_positive(key: &str, value: &str, default: i64) -> Result<i64, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(default);
    }
    leading_integer(value)
        .map(|n| n.max(1))
        .ok_or_else(|| AppError::bad_request(format!("{} must be an integer, got {:?}", key, value)))
}

fn leading_integer(value: &str) -> Option<i64> {
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let n = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -n } else { n })
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomersOutput {
    pub items: Vec<Customer>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl ListCustomersOutput {
    pub fn new(items: Vec<Customer>, total: i64, input: &ListCustomersInput) -> Self {
        Self {
            items,
            total,
            page: input.page,
            limit: input.limit,
            total_pages: total_pages(total, input.limit),
        }
    }
}

pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}
