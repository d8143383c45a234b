use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::{
    api::handlers::AppState,
    catalog::PizzaView,
    error::Error,
    utils::sanitize::{collapse_whitespace, truncate},
    web::state::{ViewEvent, ViewState},
    Result,
};

pub const LIST_FETCH_FAILED: &str = "Nem sikerült lekérni a pizzákat.";
pub const DETAIL_FETCH_FAILED: &str = "Nem sikerült lekérni a pizza részleteit.";
pub const EMPTY_LIST: &str = "Nincsenek pizzák a lista lekérésekor.";

const CARD_SUMMARY_CHARS: usize = 120;

/// Deserialize optional string, treating empty strings as None
fn deserialize_optional_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(s.to_string())),
    }
}

/// List page template
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    pizzas: Vec<PizzaCardData>,
    error: Option<String>,
    empty_message: Option<String>,
    selected: Option<PizzaDetailData>,
    selected_error: Option<String>,
    swagger_url: String,
    placeholder: String,
}

#[derive(Clone)]
#[allow(dead_code)] // Fields are used by Askama templates
struct PizzaCardData {
    id: String,
    name: String,
    summary: String,
    price_label: String,
    image_url: String,
    detail_path: String,
    select_path: String,
}

impl From<PizzaView> for PizzaCardData {
    fn from(pizza: PizzaView) -> Self {
        let summary = truncate(&collapse_whitespace(&pizza.description), CARD_SUMMARY_CHARS);
        let price_label = pizza.price_label().unwrap_or_default();
        let detail_path = pizza.detail_path();
        let select_path = format!("/?selected={}", urlencoding::encode(&pizza.id));

        Self {
            id: pizza.id,
            name: pizza.name,
            summary,
            price_label,
            image_url: pizza.image_url,
            detail_path,
            select_path,
        }
    }
}

#[derive(Clone)]
#[allow(dead_code)] // Fields are used by Askama templates
struct PizzaDetailData {
    id: String,
    name: String,
    description: String,
    price_label: String,
    image_url: String,
}

impl From<PizzaView> for PizzaDetailData {
    fn from(pizza: PizzaView) -> Self {
        let price_label = pizza.price_label().unwrap_or_default();

        Self {
            id: pizza.id,
            name: pizza.name,
            description: pizza.description,
            price_label,
            image_url: pizza.image_url,
        }
    }
}

#[derive(Deserialize)]
pub struct IndexParams {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    selected: Option<String>,
}

/// Run one fetch through the view-state transitions, logging failures
async fn load<T, F>(fetch: F, failure_message: &str) -> ViewState<T>
where
    F: std::future::Future<Output = Result<T>>,
{
    let state = ViewState::Idle.apply(ViewEvent::Start);
    let outcome = fetch.await;
    if let Err(e) = &outcome {
        warn!("{} ({})", failure_message, e.log_safe());
    }
    state.settle(outcome, failure_message)
}

/// GET / - Pizza list, optionally with a detail panel for `?selected=<id>`
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse> {
    let list = load(state.fetch_pizzas(), LIST_FETCH_FAILED).await;

    let selected = match params.selected.as_deref() {
        Some(id) => load(state.fetch_pizza(id), DETAIL_FETCH_FAILED).await,
        None => ViewState::Idle,
    };

    let error = list.error().map(str::to_string);
    let pizzas: Vec<PizzaCardData> = list
        .loaded()
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .map(PizzaCardData::from)
        .collect();
    let empty_message =
        (error.is_none() && pizzas.is_empty()).then(|| EMPTY_LIST.to_string());

    let template = IndexTemplate {
        pizzas,
        error,
        empty_message,
        selected_error: selected.error().map(str::to_string),
        selected: selected.loaded().cloned().map(PizzaDetailData::from),
        swagger_url: state.settings.display.swagger_url.clone(),
        placeholder: state.images.placeholder().to_string(),
    };

    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template render failed: {e}"))
    })?))
}

/// Pizza detail page template
#[derive(Template)]
#[template(path = "pizza.html")]
struct PizzaTemplate {
    pizza: Option<PizzaDetailData>,
    error: Option<String>,
    placeholder: String,
}

/// GET /pizzas/:id - Pizza detail page
pub async fn pizza_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let detail = load(state.fetch_pizza(&id), DETAIL_FETCH_FAILED).await;

    let template = PizzaTemplate {
        error: detail.error().map(str::to_string),
        pizza: detail.loaded().cloned().map(PizzaDetailData::from),
        placeholder: state.images.placeholder().to_string(),
    };

    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template render failed: {e}"))
    })?))
}

/// GET /pizzas - Redirect to the list
pub async fn pizzas_redirect() -> impl IntoResponse {
    axum::response::Redirect::permanent("/")
}
