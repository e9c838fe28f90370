use crate::{
    error::ApiResult,
    extract::RecordId,
    form::{CreateBakedGoodForm, UpdateBakeryForm},
    AppState,
};
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};
use bakery_service::{Mutation, Query, ServiceError};
use entity::{baked_good, bakery};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn home() -> Html<&'static str> {
    Html("<h1>Bakery GET-POST-PATCH-DELETE API</h1>")
}

pub async fn create_baked_good(
    state: State<AppState>,
    form: Result<Form<CreateBakedGoodForm>, FormRejection>,
) -> ApiResult<(StatusCode, Json<baked_good::Model>)> {
    let Form(form) = form.map_err(|rejection| {
        tracing::debug!(%rejection, "undecodable baked good form");
        CreateBakedGoodForm::missing()
    })?;
    let new_good = form.validate()?;

    let baked_good = Mutation::create_baked_good(&state.conn, new_good).await?;

    Ok((StatusCode::CREATED, Json(baked_good)))
}

pub async fn delete_baked_good(
    state: State<AppState>,
    id: RecordId,
) -> ApiResult<Json<MessageResponse>> {
    let id = id.resolve(ServiceError::baked_good_not_found)?;
    Mutation::delete_baked_good(&state.conn, id).await?;

    Ok(Json(MessageResponse {
        message: format!("Baked good with id {id} was successfully deleted."),
    }))
}

pub async fn list_bakeries(state: State<AppState>) -> ApiResult<Json<Vec<bakery::Model>>> {
    Ok(Json(Query::list_bakeries(&state.conn).await?))
}

pub async fn get_bakery(
    state: State<AppState>,
    id: RecordId,
) -> ApiResult<Json<bakery::Model>> {
    let id = id.resolve(ServiceError::bakery_not_found)?;
    Ok(Json(Query::get_bakery(&state.conn, id).await?))
}

pub async fn update_bakery(
    state: State<AppState>,
    id: RecordId,
    form: Result<Form<UpdateBakeryForm>, FormRejection>,
) -> ApiResult<Json<bakery::Model>> {
    let id = id.resolve(ServiceError::bakery_not_found)?;
    // A PATCH without a form body behaves like one without a name
    let form = form.map(|Form(form)| form).unwrap_or_default();

    let bakery = Mutation::update_bakery_name(&state.conn, id, form.into_name()).await?;

    Ok(Json(bakery))
}

pub async fn baked_goods_by_price(
    state: State<AppState>,
) -> ApiResult<Json<Vec<baked_good::Model>>> {
    Ok(Json(Query::list_baked_goods_by_price_desc(&state.conn).await?))
}

pub async fn most_expensive_baked_good(
    state: State<AppState>,
) -> ApiResult<Json<baked_good::Model>> {
    Ok(Json(Query::most_expensive_baked_good(&state.conn).await?))
}
