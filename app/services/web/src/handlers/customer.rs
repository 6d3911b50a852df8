use app_dto::customer::{
    PostCustomerOutput, SuccessOutput,
    input::CustomerInput,
    list::{ListCustomersInput, ListCustomersOutput},
};
use app_error::AppError;
use app_schema::{
    customer::{Customer, CustomerCount},
    filter::WhereClause,
};
use app_state::AppState;
use axum::extract::{
    Json, Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tracing::*;

pub async fn get_customers(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListCustomersOutput>, AppError> {
    let db = state.db.clone();
    let Query(pairs) = query?;
    let input = ListCustomersInput::from_pairs(pairs, state.config.max_page_size)?;
    let filter = WhereClause::build(
        input.filters.iter().map(|(k, v)| (k, v)),
        &Customer::COLUMNS,
    )?;
    let where_sql = filter.to_sql();

    // Count and page are separate reads; a concurrent write can make them disagree.
    let count_sql = Customer::count_query(&where_sql);
    let mut count = sqlx::query_as::<_, CustomerCount>(&count_sql);
    for param in &filter.params {
        count = count.bind(param);
    }
    let total = count.fetch_one(&db).await?.total;

    let page_sql = Customer::page_query(&where_sql);
    let mut page = sqlx::query_as::<_, Customer>(&page_sql);
    for param in &filter.params {
        page = page.bind(param);
    }
    let items = page
        .bind(input.limit)
        .bind(input.offset())
        .fetch_all(&db)
        .await?;
    debug!(
        "GET clientes page={} limit={} filters={:?} -> {}/{}",
        input.page,
        input.limit,
        &input.filters,
        items.len(),
        total
    );
    Ok(Json(ListCustomersOutput::new(items, total, &input)))
}

pub async fn post_customer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<Json<PostCustomerOutput>, AppError> {
    let db = state.db.clone();
    let Json(args) = payload?;
    let registered_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let res = sqlx::query(Customer::insert_query())
        .bind(args.owner_or_default())
        .bind(&registered_at)
        .bind(&args.code)
        .bind(&args.name)
        .bind(&args.tax_id)
        .bind(&args.postal_code)
        .bind(&args.street)
        .bind(&args.address)
        .bind(&args.number)
        .bind(&args.neighborhood)
        .bind(&args.city)
        .bind(&args.state)
        .bind(&args.complement)
        .bind(&args.phone)
        .bind(&args.credit_limit)
        .bind(&args.valid_until)
        .execute(&db)
        .await?;
    let id = res.last_insert_rowid();
    debug!("INSERT clientes id={}: {:?}", id, &args);
    Ok(Json(PostCustomerOutput { id }))
}

/// Full replace: fields missing from the body are written as NULL.
pub async fn put_customer(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<Json<SuccessOutput>, AppError> {
    let db = state.db.clone();
    let Path(id) = id?;
    let Json(args) = payload?;
    let res = sqlx::query(Customer::update_query())
        .bind(&args.owner_user_id)
        .bind(&args.code)
        .bind(&args.name)
        .bind(&args.tax_id)
        .bind(&args.postal_code)
        .bind(&args.street)
        .bind(&args.address)
        .bind(&args.number)
        .bind(&args.neighborhood)
        .bind(&args.city)
        .bind(&args.state)
        .bind(&args.complement)
        .bind(&args.phone)
        .bind(&args.credit_limit)
        .bind(&args.valid_until)
        .bind(id)
        .execute(&db)
        .await?;
    debug!("UPDATE clientes id={}: {} row(s)", id, res.rows_affected());
    Ok(Json(SuccessOutput::ok()))
}

pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessOutput>, AppError> {
    let db = state.db.clone();
    let Path(id) = id?;
    let res = sqlx::query(Customer::delete_query())
        .bind(id)
        .execute(&db)
        .await?;
    debug!("DELETE clientes id={}: {} row(s)", id, res.rows_affected());
    Ok(Json(SuccessOutput::ok()))
}
