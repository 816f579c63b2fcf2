//! Login and registration route handlers.
//!
//! There are no real accounts. Registration validates the form and writes
//! the mocked access state that the gate reads: personal sign-ups become
//! `(personal, verified)`, business sign-ups `(business, pending)`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use tradehub_core::{AccessState, UserType, VerificationStatus};

use crate::error::Result;
use crate::filters;
use crate::routes::layout::PageContext;
use crate::services::FormErrors;
use crate::services::validation;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Personal registration form data.
#[derive(Debug, Default, Deserialize)]
pub struct PersonalForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirm: String,
}

/// Business registration form data.
#[derive(Debug, Default, Deserialize)]
pub struct BusinessForm {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub business_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirm: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
    pub email: String,
    pub errors: FormErrors,
}

/// Registration chooser template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub page: PageContext,
}

/// Personal registration template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register_personal.html")]
pub struct RegisterPersonalTemplate {
    pub page: PageContext,
    pub name: String,
    pub email: String,
    pub errors: FormErrors,
}

/// Personal registration success template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register_done.html")]
pub struct RegisterDoneTemplate {
    pub page: PageContext,
}

/// Business registration template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register_business.html")]
pub struct RegisterBusinessTemplate {
    pub page: PageContext,
    pub company: String,
    pub business_number: String,
    pub email: String,
    pub errors: FormErrors,
}

/// Verification status template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/business_status.html")]
pub struct BusinessStatusTemplate {
    pub page: PageContext,
    pub user_type: &'static str,
    pub status: &'static str,
    pub is_pending: bool,
    pub is_verified: bool,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(page: PageContext) -> impl IntoResponse {
    LoginTemplate {
        email: String::new(),
        errors: FormErrors::new(page.t),
        page,
    }
}

/// Handle the login form. Valid input simply returns home.
#[instrument(skip_all)]
pub async fn login(page: PageContext, Form(form): Form<LoginForm>) -> Response {
    let mut errors = FormErrors::new(page.t);
    errors.check("email", validation::email(&form.email));
    errors.check("password", validation::required(&form.password));

    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            LoginTemplate {
                email: form.email,
                errors,
                page,
            },
        )
            .into_response();
    }

    tracing::info!("Mock login accepted");
    Redirect::to("/").into_response()
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration chooser.
pub async fn register_page(page: PageContext) -> impl IntoResponse {
    RegisterTemplate { page }
}

fn check_passwords(errors: &mut FormErrors, password: &str, confirmation: &str) {
    if errors
        .check("password", validation::password(password))
        .is_some()
    {
        errors.check(
            "password_confirm",
            validation::password_confirmation(password, confirmation),
        );
    }
}

/// Display the personal registration form.
pub async fn register_personal_page(page: PageContext) -> impl IntoResponse {
    RegisterPersonalTemplate {
        name: String::new(),
        email: String::new(),
        errors: FormErrors::new(page.t),
        page,
    }
}

/// Handle personal registration.
#[instrument(skip_all)]
pub async fn register_personal(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Form(form): Form<PersonalForm>,
) -> Result<Response> {
    let mut errors = FormErrors::new(page.t);
    errors.check("name", validation::required(&form.name));
    errors.check("email", validation::email(&form.email));
    check_passwords(&mut errors, &form.password, &form.password_confirm);

    if !errors.is_empty() {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            RegisterPersonalTemplate {
                name: form.name,
                email: form.email,
                errors,
                page,
            },
        )
            .into_response());
    }

    let access = AccessState::new(Some(UserType::Personal), Some(VerificationStatus::Verified));
    state.access().store(&session, access).await?;
    tracing::info!("Personal account registered (mock)");

    Ok(RegisterDoneTemplate { page }.into_response())
}

/// Display the business registration form.
pub async fn register_business_page(page: PageContext) -> impl IntoResponse {
    RegisterBusinessTemplate {
        company: String::new(),
        business_number: String::new(),
        email: String::new(),
        errors: FormErrors::new(page.t),
        page,
    }
}

/// Handle business registration; the account starts out pending review.
#[instrument(skip_all)]
pub async fn register_business(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Form(form): Form<BusinessForm>,
) -> Result<Response> {
    let mut errors = FormErrors::new(page.t);
    errors.check("company", validation::required(&form.company));
    errors.check(
        "business_number",
        validation::business_number(&form.business_number),
    );
    errors.check("email", validation::email(&form.email));
    check_passwords(&mut errors, &form.password, &form.password_confirm);

    if !errors.is_empty() {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            RegisterBusinessTemplate {
                company: form.company,
                business_number: form.business_number,
                email: form.email,
                errors,
                page,
            },
        )
            .into_response());
    }

    let access = AccessState::new(Some(UserType::Business), Some(VerificationStatus::Pending));
    state.access().store(&session, access).await?;
    tracing::info!("Business account registered (mock), pending verification");

    Ok(Redirect::to("/register/business/status").into_response())
}

/// Display the visitor's verification status.
#[instrument(skip_all)]
pub async fn business_status(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
) -> impl IntoResponse {
    let access = state.access().load(&session).await;
    let t = page.t;

    BusinessStatusTemplate {
        user_type: t.user_type(access.user_type),
        status: t.verification_status(access.verification_status),
        is_pending: access.verification_status == Some(VerificationStatus::Pending),
        is_verified: access.can_access_wholesale(),
        page,
    }
}
