use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::{
    api::models::*,
    catalog::{normalize_list, PizzaView},
    client::PizzaClient,
    config::Settings,
    resolve::ImageResolver,
    Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub client: PizzaClient,
    pub images: ImageResolver,
    pub settings: Settings,
}

impl AppState {
    pub fn from_settings(settings: Settings) -> Result<Self> {
        Ok(Self {
            client: PizzaClient::new(&settings.upstream)?,
            images: ImageResolver::from_settings(&settings),
            settings,
        })
    }

    /// Fetch and normalize the whole list
    pub async fn fetch_pizzas(&self) -> Result<Vec<PizzaView>> {
        let raw = self.client.list_pizzas().await?;
        Ok(normalize_list(&raw, &self.images))
    }

    /// Fetch and normalize one pizza
    pub async fn fetch_pizza(&self, id: &str) -> Result<PizzaView> {
        let raw = self.client.get_pizza(id).await?;
        PizzaView::from_value(&raw, &self.images)
    }
}

/// GET /api/pizzas - Normalized pizza list
pub async fn list_pizzas(State(state): State<AppState>) -> Result<Json<PizzaListResponse>> {
    debug!("List pizzas request");

    let pizzas = state.fetch_pizzas().await?;
    Ok(Json(PizzaListResponse {
        total: pizzas.len(),
        pizzas,
    }))
}

/// GET /api/pizzas/:id - Normalized pizza details
pub async fn get_pizza(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PizzaView>> {
    debug!("Get pizza request: {}", id);

    Ok(Json(state.fetch_pizza(&id).await?))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
