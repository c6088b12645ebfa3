//! Static pages: about, contact, and the not-found fallback.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use renew_rubber_core::Email;

use crate::filters;

/// Contact subjects offered in the form's select.
pub const CONTACT_SUBJECTS: [&str; 5] = [
    "General Inquiry",
    "Pricing Question",
    "Order Status",
    "Partnership",
    "Other",
];

/// A frequently asked question shown next to the contact form.
#[derive(Clone)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

const FAQS: [Faq; 3] = [
    Faq {
        question: "How long does resoling take?",
        answer: "Standard resoling takes 2-3 weeks. Express service available for 5 business days.",
    },
    Faq {
        question: "What rubber options do you offer?",
        answer: "We resole with Vibram XS Edge, Vibram XS Grip 2 and Unparallel RH, matched to your climbing style.",
    },
    Faq {
        question: "When should I resole my shoes?",
        answer: "As soon as the sole wears thin at the toe but before the rand is damaged - that keeps the repair small and cheap.",
    },
];

/// Contact form payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Validate the form; name, a well-formed email, and a message are
    /// required.
    #[must_use]
    pub fn validate(&self) -> BTreeMap<&'static str, &'static str> {
        let mut errors = BTreeMap::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else if Email::parse(self.email.trim()).is_err() {
            errors.insert("email", "Please enter a valid email");
        }
        if self.message.trim().is_empty() {
            errors.insert("message", "Message is required");
        }
        errors
    }
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub form: ContactForm,
    pub errors: BTreeMap<&'static str, &'static str>,
    pub subjects: Vec<String>,
    pub faqs: Vec<Faq>,
    pub submitted: bool,
}

fn subjects() -> Vec<String> {
    CONTACT_SUBJECTS.iter().map(|&s| s.to_owned()).collect()
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate;

/// Display the about page.
pub async fn about() -> impl IntoResponse {
    AboutTemplate
}

/// Display the contact page.
pub async fn contact_page() -> impl IntoResponse {
    ContactTemplate {
        form: ContactForm::default(),
        errors: BTreeMap::new(),
        subjects: subjects(),
        faqs: FAQS.to_vec(),
        submitted: false,
    }
}

/// Handle contact form submission.
///
/// There is no backend to deliver the message to; a valid submission renders
/// the thank-you state in place of the form.
#[instrument(skip(form))]
pub async fn contact_submit(Form(form): Form<ContactForm>) -> Response {
    let errors = form.validate();
    let submitted = errors.is_empty();
    ContactTemplate {
        form,
        errors,
        subjects: subjects(),
        faqs: FAQS.to_vec(),
        submitted,
    }
    .into_response()
}

/// Fallback handler: render the not-found view for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate)
}
