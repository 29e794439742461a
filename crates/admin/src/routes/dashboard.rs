//! Console index.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::db::CoffeeItemRepository;
use crate::error::Result;
use crate::registration::{ModelAdmin, REGISTRY};
use crate::state::AppState;

/// One registered model on the index page.
#[derive(Debug, Clone)]
pub struct ModelSummaryView {
    pub verbose_name_plural: &'static str,
    pub changelist_url: String,
    pub add_url: String,
    pub count_label: String,
}

impl ModelSummaryView {
    fn new(admin: &ModelAdmin, count: u64) -> Self {
        Self {
            verbose_name_plural: admin.verbose_name_plural,
            changelist_url: admin.changelist_url(),
            add_url: admin.add_url(),
            count_label: admin.count_label(count),
        }
    }
}

/// Index template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub models: Vec<ModelSummaryView>,
}

/// Index page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let count = CoffeeItemRepository::new(state.pool()).count().await?;
    let models = REGISTRY
        .iter()
        .map(|admin| ModelSummaryView::new(admin, count))
        .collect();

    Ok(Html(IndexTemplate { models }.render()?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::registration::CAFE_ADMIN;

    #[test]
    fn test_index_links_each_model() {
        let html = IndexTemplate {
            models: vec![ModelSummaryView::new(&CAFE_ADMIN, 2)],
        }
        .render()
        .unwrap();
        assert!(html.contains("href=\"/cafes\""));
        assert!(html.contains("href=\"/cafes/add\""));
        assert!(html.contains("2 cafes"));
    }
}
