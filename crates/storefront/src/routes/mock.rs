//! Mock access controls.
//!
//! Lets a demo visitor pick the `(user type, verification status)` pair the
//! access gate sees. Only routed when `STOREFRONT_MOCK_CONTROLS` is on.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use tradehub_core::{AccessState, UserType, VerificationStatus};

use crate::error::Result;
use crate::filters;
use crate::routes::layout::{PageContext, safe_return_path};
use crate::state::AppState;

/// One `<option>` of a select box.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Mock access form data. Empty strings clear the value.
#[derive(Debug, Deserialize)]
pub struct MockAccessForm {
    #[serde(default)]
    pub user_type: String,
    #[serde(default)]
    pub verification_status: String,
    pub return_to: Option<String>,
}

/// Mock access controls template.
#[derive(Template, WebTemplate)]
#[template(path = "mock/access.html")]
pub struct MockAccessTemplate {
    pub page: PageContext,
    pub user_types: Vec<SelectOption>,
    pub statuses: Vec<SelectOption>,
}

/// Display the mock access controls.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
) -> impl IntoResponse {
    let access = state.access().load(&session).await;
    let t = page.t;

    let user_types = [None, Some(UserType::Business), Some(UserType::Personal)]
        .into_iter()
        .map(|option| SelectOption {
            value: option.map_or("", UserType::as_str),
            label: t.user_type(option),
            selected: option == access.user_type,
        })
        .collect();

    let statuses = [
        None,
        Some(VerificationStatus::Pending),
        Some(VerificationStatus::Verified),
        Some(VerificationStatus::Rejected),
    ]
    .into_iter()
    .map(|option| SelectOption {
        value: option.map_or("", VerificationStatus::as_str),
        label: t.verification_status(option),
        selected: option == access.verification_status,
    })
    .collect();

    MockAccessTemplate {
        page,
        user_types,
        statuses,
    }
}

/// Apply a new mocked access state.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<MockAccessForm>,
) -> Result<impl IntoResponse> {
    let access = AccessState::new(
        UserType::parse(&form.user_type),
        VerificationStatus::parse(&form.verification_status),
    );
    state.access().store(&session, access).await?;

    let target = match form.return_to.as_deref() {
        Some(path) => safe_return_path(Some(path)),
        None => "/mock/access",
    };
    Ok(Redirect::to(target))
}
