//! Contact form with client-side validation only.
//!
//! Nothing is ever sent: a valid submission shows a confirmation and clears
//! the form. Validation runs on submit and whenever any field loses focus,
//! and always recomputes all three fields.

use std::sync::LazyLock;

use dioxus::prelude::*;
use regex::Regex;

use crate::i18n::{t, Lang};

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern compiles")
});

/// Minimum trimmed message length, in UTF-16 code units like a browser's
/// `String.length`; an emoji outside the BMP counts twice.
const MIN_MESSAGE_UNITS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
    MessageTooShort,
}

impl FieldError {
    pub fn key(self) -> &'static str {
        match self {
            FieldError::NameRequired => "contact.error.name_required",
            FieldError::EmailRequired => "contact.error.email_required",
            FieldError::EmailInvalid => "contact.error.email_invalid",
            FieldError::MessageRequired => "contact.error.message_required",
            FieldError::MessageTooShort => "contact.error.message_too_short",
        }
    }

    /// Field feedback is always French, whatever the page language.
    pub fn message(self) -> String {
        t(Lang::Fr, self.key())
    }
}

/// Result of one validation pass; `None` means the field is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Strip the whitespace a browser's `trim()` strips, byte order mark included.
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Check every field independently.
pub fn validate_contact(input: &ContactInput) -> FieldErrors {
    let name = trim_field(&input.name);
    let email = trim_field(&input.email);
    let message = trim_field(&input.message);

    FieldErrors {
        name: name.is_empty().then_some(FieldError::NameRequired),
        email: if email.is_empty() {
            Some(FieldError::EmailRequired)
        } else if !is_valid_email(email) {
            Some(FieldError::EmailInvalid)
        } else {
            None
        },
        message: if message.is_empty() {
            Some(FieldError::MessageRequired)
        } else if utf16_len(message) < MIN_MESSAGE_UNITS {
            Some(FieldError::MessageTooShort)
        } else {
            None
        },
    }
}

/// Overall outcome shown under the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    None,
    Success,
    Error,
}

impl FormStatus {
    pub fn class(self) -> &'static str {
        match self {
            FormStatus::None => "form_status",
            FormStatus::Success => "form_status is-success",
            FormStatus::Error => "form_status is-error",
        }
    }

    pub fn message(self) -> String {
        match self {
            FormStatus::None => String::new(),
            FormStatus::Success => t(Lang::Fr, "contact.status.success"),
            FormStatus::Error => t(Lang::Fr, "contact.status.error"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub input: ContactInput,
    pub errors: FieldErrors,
    pub status: FormStatus,
}

impl ContactFormState {
    /// Clear the overall status, then recompute all field errors.
    pub fn validate(&mut self) -> bool {
        self.status = FormStatus::None;
        self.errors = validate_contact(&self.input);
        self.errors.is_valid()
    }

    /// Validate and, when everything passes, pretend to send the message.
    pub fn submit(&mut self) -> FormStatus {
        if !self.validate() {
            self.status = FormStatus::Error;
            return self.status;
        }

        tracing::info!(
            message_units = utf16_len(trim_field(&self.input.message)),
            "contact message accepted, delivery simulated"
        );
        self.status = FormStatus::Success;
        self.input = ContactInput::default();
        self.errors = FieldErrors::default();
        self.status
    }
}

fn aria_invalid(error: Option<FieldError>) -> &'static str {
    if error.is_some() {
        "true"
    } else {
        "false"
    }
}

#[component]
fn ContactField(
    id: &'static str,
    label: String,
    value: String,
    #[props(!optional)] error: Option<FieldError>,
    #[props(default)] multiline: bool,
    #[props(default = "text")] kind: &'static str,
    oninput: EventHandler<FormEvent>,
    onblur: EventHandler<FocusEvent>,
) -> Element {
    let error_id = format!("{id}Error");
    let error_text = error.map(FieldError::message).unwrap_or_default();
    let invalid = aria_invalid(error);

    rsx! {
        div { class: "field",
            label { r#for: id, "{label}" }
            if multiline {
                textarea {
                    id: id,
                    name: id,
                    rows: "6",
                    value: "{value}",
                    "aria-invalid": invalid,
                    "aria-describedby": "{error_id}",
                    oninput: move |evt| oninput.call(evt),
                    onblur: move |evt| onblur.call(evt),
                }
            } else {
                input {
                    id: id,
                    name: id,
                    r#type: kind,
                    value: "{value}",
                    "aria-invalid": invalid,
                    "aria-describedby": "{error_id}",
                    oninput: move |evt| oninput.call(evt),
                    onblur: move |evt| onblur.call(evt),
                }
            }
            p { id: "{error_id}", class: "field_error", "{error_text}" }
        }
    }
}

/// `#contactForm` with its three fields, error slots and `#formStatus`.
#[component]
pub fn ContactForm() -> Element {
    let lang = crate::use_lang()();
    let mut state = use_signal(ContactFormState::default);
    let current = state();

    let revalidate = move |_: FocusEvent| {
        state.with_mut(|f| {
            f.validate();
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }

        form {
            id: "contactForm",
            class: "contact_form",
            "novalidate": "true",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                state.with_mut(|f| {
                    f.submit();
                });
            },
            ContactField {
                id: "name",
                label: t(lang, "contact.name"),
                value: current.input.name.clone(),
                error: current.errors.name,
                oninput: move |evt: FormEvent| state.with_mut(|f| f.input.name = evt.value()),
                onblur: revalidate,
            }
            ContactField {
                id: "email",
                kind: "email",
                label: t(lang, "contact.email"),
                value: current.input.email.clone(),
                error: current.errors.email,
                oninput: move |evt: FormEvent| state.with_mut(|f| f.input.email = evt.value()),
                onblur: revalidate,
            }
            ContactField {
                id: "message",
                multiline: true,
                label: t(lang, "contact.message"),
                value: current.input.message.clone(),
                error: current.errors.message,
                oninput: move |evt: FormEvent| state.with_mut(|f| f.input.message = evt.value()),
                onblur: revalidate,
            }
            button { class: "btn primary", r#type: "submit",
                i { class: "fa-solid fa-paper-plane", "aria-hidden": "true" }
                " "
                {t(lang, "contact.send")}
            }
            p {
                id: "formStatus",
                class: current.status.class(),
                role: "status",
                "aria-live": "polite",
                {current.status.message()}
            }
        }
    }
}
