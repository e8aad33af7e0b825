//! Page Handlers

use std::collections::{BTreeMap, HashMap};

use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Serialize;
use tower_cookies::Cookies;

use super::flash::{FlashData, flash_redirect, take_flash};
use crate::core::ServerState;
use crate::db::models::Candy;
use crate::db::repository::{
    CandyRepository, ManufacturerRepository, Repository, numeric_id,
};
use crate::forms::{FORM_WIDE_KEY, FieldErrors};
use crate::forms::candy::{CANDY_FORM, to_payload};
use crate::utils::{AppError, AppResult};

/// Candy as rendered in the templates: numeric id, derived price-per-kilo
/// and the manufacturer's display label instead of a record link.
///
/// The per-kilo price is pre-formatted: a bare `Option<f64>` would let a
/// computed 0 fall into the template's absent branch, since the templates
/// test the value for truthiness. A formatted "0" stays truthy.
#[derive(Debug, Serialize)]
struct CandyView {
    id: i64,
    name: String,
    brand: String,
    flavor: String,
    price: f64,
    weight: i64,
    created: NaiveDate,
    price_per_kilo: Option<String>,
    manufacturer: Option<String>,
}

impl CandyView {
    fn new(candy: Candy, manufacturer_names: &HashMap<i64, String>) -> Self {
        Self {
            id: candy.id.as_ref().map(numeric_id).unwrap_or(0),
            price_per_kilo: candy.price_per_kilo().map(|v| v.to_string()),
            manufacturer: candy
                .manufacturer
                .as_ref()
                .map(|m| numeric_id(m))
                .and_then(|id| manufacturer_names.get(&id).cloned()),
            name: candy.name,
            brand: candy.brand,
            flavor: candy.flavor,
            price: candy.price,
            weight: candy.weight,
            created: candy.created,
        }
    }
}

async fn manufacturer_names(state: &ServerState) -> AppResult<HashMap<i64, String>> {
    let repo = ManufacturerRepository::new(state.db.clone());
    let names = repo
        .find_all()
        .await?
        .into_iter()
        .filter_map(|m| {
            let id = m.id.as_ref().map(numeric_id)?;
            Some((id, m.to_string()))
        })
        .collect();
    Ok(names)
}

fn render(state: &ServerState, template: &str, ctx: &mut tera::Context) -> AppResult<Html<String>> {
    // The base template's notification banner tests `flash` on every page
    if ctx.get("flash").is_none() {
        ctx.insert("flash", &false);
    }
    let body = state.templates.render(template, ctx)?;
    Ok(Html(body))
}

/// GET / and GET /view_all - list every candy in the catalog
pub async fn view_all(
    State(state): State<ServerState>,
    cookies: Cookies,
) -> AppResult<Html<String>> {
    let repo = CandyRepository::new(state.db.clone());
    let candies = repo.find_all().await?;
    let names = manufacturer_names(&state).await?;

    let views: Vec<CandyView> = candies
        .into_iter()
        .map(|c| CandyView::new(c, &names))
        .collect();

    let mut ctx = tera::Context::new();
    ctx.insert("candies", &views);
    if let Some(flash) = take_flash(&cookies) {
        ctx.insert("flash", &flash);
    }

    render(&state, "view_all.html.tera", &mut ctx)
}

/// GET /view_one/:id - candy detail page; 404 when the id is unknown
pub async fn view_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let repo = CandyRepository::new(state.db.clone());
    let candy = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Candy {id} not found")))?;
    let names = manufacturer_names(&state).await?;

    let mut ctx = tera::Context::new();
    ctx.insert("candy", &CandyView::new(candy, &names));

    render(&state, "view_one.html.tera", &mut ctx)
}

/// Build the formulaire rendering context. Every field key is present in
/// both maps so the template never touches an undefined variable.
fn form_context(
    values: &BTreeMap<String, String>,
    errors: &BTreeMap<String, Vec<String>>,
) -> tera::Context {
    let mut all_values = BTreeMap::new();
    let mut all_errors = BTreeMap::new();
    for field in CANDY_FORM.fields {
        all_values.insert(
            field.name,
            values.get(field.name).cloned().unwrap_or_default(),
        );
        all_errors.insert(
            field.name,
            errors.get(field.name).cloned().unwrap_or_default(),
        );
    }

    let mut ctx = tera::Context::new();
    ctx.insert("values", &all_values);
    ctx.insert("errors", &all_errors);
    ctx.insert(
        "form_errors",
        errors.get(FORM_WIDE_KEY).map(Vec::as_slice).unwrap_or(&[]),
    );
    ctx
}

/// GET /formulaire - blank creation form
pub async fn formulaire_page(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let mut ctx = form_context(&BTreeMap::new(), &BTreeMap::new());
    render(&state, "formulaire.html.tera", &mut ctx)
}

/// POST /formulaire - validate and persist a new candy
///
/// On success: persist, flash a success notification and redirect home.
/// On failure: re-render the form with the submitted values and the
/// per-field messages inline.
pub async fn formulaire_submit(
    State(state): State<ServerState>,
    cookies: Cookies,
    Form(input): Form<BTreeMap<String, String>>,
) -> AppResult<Response> {
    match CANDY_FORM.validate(&input) {
        Ok(cleaned) => {
            let payload = to_payload(&cleaned);

            // The schema only checks that the manufacturer id is a positive
            // integer; the linked record must actually exist.
            if let Some(maker_id) = payload.manufacturer {
                let makers = ManufacturerRepository::new(state.db.clone());
                if makers.find_by_id(maker_id).await?.is_none() {
                    let mut errors = FieldErrors::new();
                    errors.insert(
                        "manufacturer".to_string(),
                        vec!["Select a valid manufacturer.".to_string()],
                    );
                    let mut ctx = form_context(&input, &errors);
                    return Ok(render(&state, "formulaire.html.tera", &mut ctx)?.into_response());
                }
            }

            let repo = CandyRepository::new(state.db.clone());
            let candy = repo.create(payload).await?;
            tracing::info!(name = %candy.name, "Candy added through the creation form");

            let redirect = flash_redirect(&cookies, FlashData::success("Candy successfully added"));
            Ok(redirect.into_response())
        }
        Err(errors) => {
            let mut ctx = form_context(&input, &errors);
            Ok(render(&state, "formulaire.html.tera", &mut ctx)?.into_response())
        }
    }
}
