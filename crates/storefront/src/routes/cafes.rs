//! Catalog page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use cafe_catalog_core::CoffeeItem;

use crate::db::CoffeeItemRepository;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Catalog entry display data for templates.
#[derive(Debug, Clone)]
pub struct CafeView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub image_reference: String,
}

impl From<&CoffeeItem> for CafeView {
    fn from(item: &CoffeeItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: item.price.to_string(),
            quantity: item.quantity.to_string(),
            image_reference: item.image_reference.clone(),
        }
    }
}

/// Catalog page template. Entries are bound under `cafes`.
#[derive(Template, WebTemplate)]
#[template(path = "cafes.html")]
pub struct CafesTemplate {
    pub cafes: Vec<CafeView>,
}

impl CafesTemplate {
    /// Build the page for a set of entries, keeping their order.
    #[must_use]
    pub fn from_items(items: &[CoffeeItem]) -> Self {
        Self {
            cafes: items.iter().map(CafeView::from).collect(),
        }
    }
}

/// Render every catalog entry.
#[instrument(skip(state))]
pub async fn list_page(State(state): State<AppState>) -> Result<CafesTemplate> {
    let items = CoffeeItemRepository::new(state.pool()).list_all().await?;
    tracing::debug!(count = items.len(), "Rendering catalog");
    Ok(CafesTemplate::from_items(&items))
}
