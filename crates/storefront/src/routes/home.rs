//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::layout::PageContext;
use crate::routes::products::{CategoryLink, ProductCard, category_links};
use crate::state::AppState;

/// Number of products featured on the home page.
const FEATURED_COUNT: usize = 4;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub featured: Vec<ProductCard>,
    pub categories: Vec<CategoryLink>,
}

/// Display the home page.
#[instrument(skip(state, page))]
pub async fn home(State(state): State<AppState>, page: PageContext) -> impl IntoResponse {
    let locale = page.locale;
    let featured = state
        .catalog()
        .retail()
        .filter(|p| p.in_stock())
        .take(FEATURED_COUNT)
        .map(|p| ProductCard::new(p, locale))
        .collect();

    HomeTemplate {
        featured,
        categories: category_links(&state, locale, None),
        page,
    }
}
