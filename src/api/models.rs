use serde::{Deserialize, Serialize};

use crate::catalog::PizzaView;

/// Pizza list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaListResponse {
    pub pizzas: Vec<PizzaView>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
