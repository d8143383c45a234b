use tracing::warn;

use crate::api::handlers::AppState;
use crate::catalog::PizzaView;
use crate::utils::sanitize::{collapse_whitespace, truncate};
use crate::web::handlers::{DETAIL_FETCH_FAILED, EMPTY_LIST, LIST_FETCH_FAILED};
use crate::web::state::{ViewEvent, ViewState};
use crate::{Error, Result};

const TABLE_NAME_CHARS: usize = 28;
const TABLE_DESCRIPTION_CHARS: usize = 48;

/// Print every pizza
pub async fn list(state: &AppState, json: bool) -> Result<()> {
    let view = ViewState::Idle.apply(ViewEvent::Start);
    let outcome = state.fetch_pizzas().await;
    if let Err(e) = &outcome {
        warn!("List fetch failed: {}", e.log_safe());
    }

    match view.settle(outcome, LIST_FETCH_FAILED) {
        ViewState::Loaded(pizzas) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&pizzas)?);
            } else {
                print!("{}", format_table(&pizzas));
            }
            Ok(())
        }
        other => Err(Error::Internal(
            other.error().unwrap_or(LIST_FETCH_FAILED).to_string(),
        )),
    }
}

/// Print one pizza
pub async fn show(state: &AppState, id: &str, json: bool) -> Result<()> {
    let view = ViewState::Idle.apply(ViewEvent::Start);
    let outcome = state.fetch_pizza(id).await;
    if let Err(e) = &outcome {
        warn!("Detail fetch for {} failed: {}", id, e.log_safe());
    }

    match view.settle(outcome, DETAIL_FETCH_FAILED) {
        ViewState::Loaded(pizza) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&pizza)?);
            } else {
                print!("{}", format_detail(&pizza));
            }
            Ok(())
        }
        other => Err(Error::Internal(
            other.error().unwrap_or(DETAIL_FETCH_FAILED).to_string(),
        )),
    }
}

/// Render pizzas as a plain-text table
pub fn format_table(pizzas: &[PizzaView]) -> String {
    if pizzas.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }

    let id_width = pizzas
        .iter()
        .map(|p| p.id.chars().count())
        .max()
        .unwrap_or(2)
        .clamp(2, 24);
    let name_width = TABLE_NAME_CHARS;

    let mut out = format!(
        "{:<id_width$}  {:<name_width$}  {:>10}  {}\n",
        "ID", "Név", "Ár", "Leírás"
    );
    for pizza in pizzas {
        out.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:>10}  {}\n",
            truncate(&pizza.id, id_width),
            truncate(&pizza.name, TABLE_NAME_CHARS),
            pizza.price_label().unwrap_or_default(),
            truncate(
                &collapse_whitespace(&pizza.description),
                TABLE_DESCRIPTION_CHARS
            ),
        ));
    }
    out.push_str(&format!("\n{} pizza\n", pizzas.len()));
    out
}

/// Render one pizza as labelled lines
pub fn format_detail(pizza: &PizzaView) -> String {
    let mut out = format!("{}\n", pizza.name);
    if !pizza.description.is_empty() {
        out.push_str(&format!("  {}\n", pizza.description));
    }
    out.push_str(&format!("  ID:  {}\n", pizza.id));
    if let Some(price) = pizza.price_label() {
        out.push_str(&format!("  Ár:  {price}\n"));
    }
    out.push_str(&format!("  Kép: {}\n", pizza.image_url));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza(id: &str, name: &str, price: Option<&str>) -> PizzaView {
        PizzaView {
            id: id.to_string(),
            name: name.to_string(),
            description: "Paradicsom,\nmozzarella".to_string(),
            price: price.map(str::to_string),
            image_url: "https://pizza.example.com/a.png".to_string(),
        }
    }

    #[test]
    fn test_format_table() {
        let table = format_table(&[
            pizza("1", "Margherita", Some("1990")),
            pizza("2", "Hawaii", None),
        ]);

        assert!(table.starts_with("ID"));
        assert!(table.contains("Margherita"));
        assert!(table.contains("1990 Ft"));
        assert!(table.contains("Paradicsom, mozzarella"));
        assert!(table.ends_with("2 pizza\n"));
    }

    #[test]
    fn test_format_table_empty() {
        assert_eq!(format_table(&[]), format!("{EMPTY_LIST}\n"));
    }

    #[test]
    fn test_format_detail() {
        let detail = format_detail(&pizza("7", "Songoku", Some("2590")));
        assert!(detail.starts_with("Songoku\n"));
        assert!(detail.contains("ID:  7"));
        assert!(detail.contains("Ár:  2590 Ft"));

        let detail = format_detail(&pizza("8", "Bolognai", None));
        assert!(!detail.contains("Ár:"));
    }
}
