//! Catalog management views: list, add, change, delete.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::instrument;

use cafe_catalog_core::{CoffeeItem, CoffeeItemId};

use crate::components::data_table::DataTableConfig;
use crate::db::{CoffeeItemRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::models::coffee_form::{CoffeeItemForm, FieldErrors, FormFieldView};
use crate::registration::{CAFE_ADMIN, ChangeListRow, ModelAdmin};
use crate::state::AppState;

const ADMIN: ModelAdmin = CAFE_ADMIN;

/// List view template.
#[derive(Template)]
#[template(path = "cafes/changelist.html")]
pub struct ChangeListTemplate {
    pub verbose_name: &'static str,
    pub add_url: String,
    pub table: DataTableConfig,
    pub rows: Vec<ChangeListRow>,
    pub count_label: String,
}

impl ChangeListTemplate {
    #[must_use]
    pub fn from_items(items: &[CoffeeItem]) -> Self {
        Self {
            verbose_name: ADMIN.verbose_name,
            add_url: ADMIN.add_url(),
            table: ADMIN.table(),
            rows: items.iter().map(|item| ADMIN.row(item)).collect(),
            count_label: ADMIN.count_label(items.len() as u64),
        }
    }
}

/// Add/change form template.
#[derive(Template)]
#[template(path = "cafes/form.html")]
pub struct FormTemplate {
    pub heading: String,
    pub action: String,
    pub changelist_url: String,
    pub delete_url: Option<String>,
    pub has_errors: bool,
    pub fields: Vec<FormFieldView>,
}

impl FormTemplate {
    fn add(form: &CoffeeItemForm, errors: &FieldErrors) -> Self {
        Self {
            heading: format!("Add {}", ADMIN.verbose_name),
            action: ADMIN.add_url(),
            changelist_url: ADMIN.changelist_url(),
            delete_url: None,
            has_errors: !errors.is_empty(),
            fields: form.fields(errors),
        }
    }

    fn change(id: CoffeeItemId, form: &CoffeeItemForm, errors: &FieldErrors) -> Self {
        Self {
            heading: format!("Change {}", ADMIN.verbose_name),
            action: ADMIN.change_url(id),
            changelist_url: ADMIN.changelist_url(),
            delete_url: Some(ADMIN.delete_url(id)),
            has_errors: !errors.is_empty(),
            fields: form.fields(errors),
        }
    }
}

/// Delete confirmation template.
#[derive(Template)]
#[template(path = "cafes/delete.html")]
pub struct DeleteTemplate {
    pub verbose_name: &'static str,
    pub name: String,
    pub action: String,
    pub change_url: String,
}

/// List every entry with the registered columns.
#[instrument(skip(state))]
pub async fn changelist(State(state): State<AppState>) -> Result<Html<String>> {
    let items = CoffeeItemRepository::new(state.pool()).list_all().await?;
    Ok(Html(ChangeListTemplate::from_items(&items).render()?))
}

/// Empty add form.
#[instrument]
pub async fn add_form() -> Result<Html<String>> {
    let template = FormTemplate::add(&CoffeeItemForm::default(), &FieldErrors::default());
    Ok(Html(template.render()?))
}

/// Create an entry, or re-render the form with messages.
#[instrument(skip(state, form))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<CoffeeItemForm>,
) -> Result<Response> {
    let input = match form.parse() {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(errors = errors.len(), "Rejected add form");
            let html = FormTemplate::add(&form, &errors).render()?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    let item = CoffeeItemRepository::new(state.pool())
        .create(&input)
        .await?;
    tracing::info!(id = %item.id, name = %item.name, "Catalog entry added");

    Ok(Redirect::to(&ADMIN.changelist_url()).into_response())
}

/// Pre-filled change form.
#[instrument(skip(state))]
pub async fn change_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let id = CoffeeItemId::new(id);
    let item = fetch(&state, id).await?;
    let template = FormTemplate::change(
        id,
        &CoffeeItemForm::from_item(&item),
        &FieldErrors::default(),
    );
    Ok(Html(template.render()?))
}

/// Update an entry, or re-render the form with messages.
///
/// A missing entry is a 404 whatever the submission holds.
#[instrument(skip(state, form))]
pub async fn change(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<CoffeeItemForm>,
) -> Result<Response> {
    let id = CoffeeItemId::new(id);
    fetch(&state, id).await?;

    let input = match form.parse() {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(%id, errors = errors.len(), "Rejected change form");
            let html = FormTemplate::change(id, &form, &errors).render()?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    let item = CoffeeItemRepository::new(state.pool())
        .update(id, &input)
        .await
        .map_err(|e| not_found_or(e, id))?;
    tracing::info!(id = %item.id, name = %item.name, "Catalog entry changed");

    Ok(Redirect::to(&ADMIN.changelist_url()).into_response())
}

/// Ask before deleting.
#[instrument(skip(state))]
pub async fn delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let id = CoffeeItemId::new(id);
    let item = fetch(&state, id).await?;
    let template = DeleteTemplate {
        verbose_name: ADMIN.verbose_name,
        name: item.name,
        action: ADMIN.delete_url(id),
        change_url: ADMIN.change_url(id),
    };
    Ok(Html(template.render()?))
}

/// Delete an entry.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect> {
    let id = CoffeeItemId::new(id);
    CoffeeItemRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| not_found_or(e, id))?;
    tracing::info!(%id, "Catalog entry deleted");

    Ok(Redirect::to(&ADMIN.changelist_url()))
}

async fn fetch(state: &AppState, id: CoffeeItemId) -> Result<CoffeeItem> {
    CoffeeItemRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {id}", ADMIN.verbose_name)))
}

fn not_found_or(err: RepositoryError, id: CoffeeItemId) -> AppError {
    match err {
        RepositoryError::NotFound => AppError::NotFound(format!("{} {id}", ADMIN.verbose_name)),
        other => AppError::Database(other),
    }
}
