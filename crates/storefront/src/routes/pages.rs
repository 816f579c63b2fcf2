//! Static information pages and the contact form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::routes::layout::PageContext;
use crate::services::FormErrors;
use crate::services::validation;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub page: PageContext,
}

/// Contact form data.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub page: PageContext,
    pub form: ContactForm,
    pub errors: FormErrors,
    pub sent: bool,
}

/// Display the about page.
pub async fn about(page: PageContext) -> impl IntoResponse {
    AboutTemplate { page }
}

/// Display the contact form.
pub async fn contact_page(page: PageContext) -> impl IntoResponse {
    ContactTemplate {
        form: ContactForm::default(),
        errors: FormErrors::new(page.t),
        sent: false,
        page,
    }
}

/// Handle a contact form submission.
#[instrument(skip(page, form))]
pub async fn contact(page: PageContext, Form(form): Form<ContactForm>) -> Response {
    let mut errors = FormErrors::new(page.t);
    errors.check("name", validation::required(&form.name));
    let email = errors.check("email", validation::email(&form.email));
    errors.check("message", validation::required(&form.message));

    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactTemplate {
                form,
                errors,
                sent: false,
                page,
            },
        )
            .into_response();
    }

    if let Some(email) = email {
        tracing::info!(sender_domain = email.domain(), "Contact message received");
    }

    ContactTemplate {
        form: ContactForm::default(),
        errors,
        sent: true,
        page,
    }
    .into_response()
}
