//! Contact form state: field values, validation, and the submission
//! lifecycle. The form never talks to the network itself; `submit` hands a
//! payload to the host and the transport outcome comes back through
//! `resolve_success` / `resolve_failure`.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;

/// How long the success panel stays up before the host closes the modal.
pub const SUCCESS_CLOSE_DELAY_MS: u32 = 2_000;

pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Country codes offered by the phone field, with display flags.
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("+1", "🇺🇸"),
    ("+44", "🇬🇧"),
    ("+91", "🇮🇳"),
    ("+61", "🇦🇺"),
    ("+86", "🇨🇳"),
    ("+49", "🇩🇪"),
    ("+33", "🇫🇷"),
    ("+81", "🇯🇵"),
];

const SUBMIT_ERROR_MESSAGE: &str = "Failed to submit form. Please try again.";

/// Validated fields. Country code and service selection carry no rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
}

impl FieldError {
    pub fn message(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, _) => "Name is required",
            (Field::Email, FieldError::Required) => "Email is required",
            (Field::Email, FieldError::InvalidFormat) => "Email is invalid",
            (Field::Phone, FieldError::Required) => "Phone number is required",
            (Field::Phone, FieldError::InvalidFormat) => "Phone number must be 10 digits",
            (Field::Message, _) => "Message is required",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Submitting,
    Succeeded,
}

/// Wire shape expected by the form API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub country_code: String,
    pub phone_no: String,
    pub service: Vec<String>,
    pub message: String,
    pub promotion: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    service_options: Rc<Vec<String>>,
    name: String,
    email: String,
    phone: String,
    country_code: String,
    service_index: usize,
    message: String,
    field_errors: BTreeMap<Field, FieldError>,
    submit_error: Option<&'static str>,
    lifecycle: Lifecycle,
}

impl ContactForm {
    /// A fresh form, seeded with the carousel's active card as the selected
    /// service.
    pub fn new(service_options: Rc<Vec<String>>, selected_service: usize) -> Self {
        Self {
            service_options,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            service_index: selected_service,
            message: String::new(),
            field_errors: BTreeMap::new(),
            submit_error: None,
            lifecycle: Lifecycle::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn service_index(&self) -> usize {
        self.service_index
    }

    pub fn service_options(&self) -> &[String] {
        &self.service_options
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_submitting(&self) -> bool {
        self.lifecycle == Lifecycle::Submitting
    }

    /// User-facing message for a field's current error, if any.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.field_errors
            .get(&field)
            .map(|error| error.message(field))
    }

    /// Banner message from the last failed transport attempt.
    pub fn submit_error(&self) -> Option<&'static str> {
        self.submit_error
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
        self.field_errors.remove(&Field::Name);
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.field_errors.remove(&Field::Email);
    }

    pub fn set_phone(&mut self, value: String) {
        self.phone = value;
        self.field_errors.remove(&Field::Phone);
    }

    pub fn set_message(&mut self, value: String) {
        self.message = value;
        self.field_errors.remove(&Field::Message);
    }

    pub fn set_country_code(&mut self, value: String) {
        self.country_code = value;
    }

    pub fn set_service_index(&mut self, index: usize) {
        self.service_index = index.min(self.service_options.len().saturating_sub(1));
    }

    /// Check every field against its rules. Pure; does not touch stored
    /// errors.
    pub fn validate(&self) -> BTreeMap<Field, FieldError> {
        let mut errors = BTreeMap::new();
        if self.name.trim().is_empty() {
            errors.insert(Field::Name, FieldError::Required);
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, FieldError::Required);
        } else if !is_valid_email(&self.email) {
            errors.insert(Field::Email, FieldError::InvalidFormat);
        }
        if self.phone.trim().is_empty() {
            errors.insert(Field::Phone, FieldError::Required);
        } else if digits_of(&self.phone).len() != 10 {
            errors.insert(Field::Phone, FieldError::InvalidFormat);
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, FieldError::Required);
        }
        errors
    }

    /// Validate and, if everything passes, move to `Submitting` and return
    /// the payload for the transport. Invalid fields populate the error map
    /// and yield `None`; so does calling while already submitting or after
    /// success.
    pub fn submit(&mut self) -> Option<SubmissionPayload> {
        if self.lifecycle != Lifecycle::Idle {
            return None;
        }
        let errors = self.validate();
        if !errors.is_empty() {
            self.field_errors = errors;
            return None;
        }
        self.field_errors.clear();
        self.submit_error = None;
        self.lifecycle = Lifecycle::Submitting;
        Some(SubmissionPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            country_code: self.country_code.clone(),
            phone_no: digits_of(&self.phone),
            service: self
                .service_options
                .get(self.service_index)
                .cloned()
                .into_iter()
                .collect(),
            message: self.message.clone(),
            promotion: false,
        })
    }

    /// Transport reported success. Returns `true` when the host should
    /// schedule the delayed close, which happens at most once per form.
    pub fn resolve_success(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Submitting {
            return false;
        }
        self.lifecycle = Lifecycle::Succeeded;
        true
    }

    /// Transport reported failure (network error or non-2xx status). Field
    /// values stay untouched so the user can retry.
    pub fn resolve_failure(&mut self) {
        if self.lifecycle != Lifecycle::Submitting {
            return;
        }
        self.lifecycle = Lifecycle::Idle;
        self.submit_error = Some(SUBMIT_ERROR_MESSAGE);
    }
}

fn digits_of(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Shape check for local@domain.tld: no whitespace or extra `@`, and the
/// domain carries at least one dot with characters on both sides.
fn is_valid_email(email: &str) -> bool {
    fn clean(part: &str) -> bool {
        !part.is_empty() && !part.chars().any(|c| c == '@' || c.is_whitespace())
    }
    match email.split_once('@') {
        Some((local, domain)) => match domain.rsplit_once('.') {
            Some((host, tld)) => clean(local) && clean(host) && clean(tld),
            None => false,
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Rc<Vec<String>> {
        Rc::new(vec![
            "Web Development".to_string(),
            "App Development".to_string(),
            "Digital Marketing".to_string(),
        ])
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new(options(), 1);
        form.set_name("Ada Lovelace".to_string());
        form.set_email("ada@example.com".to_string());
        form.set_phone("(123) 456-7890".to_string());
        form.set_message("Need an app built.".to_string());
        form
    }

    #[test]
    fn empty_form_fails_every_required_rule() {
        let form = ContactForm::new(options(), 0);
        let errors = form.validate();
        assert_eq!(errors.get(&Field::Name), Some(&FieldError::Required));
        assert_eq!(errors.get(&Field::Email), Some(&FieldError::Required));
        assert_eq!(errors.get(&Field::Phone), Some(&FieldError::Required));
        assert_eq!(errors.get(&Field::Message), Some(&FieldError::Required));
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        let mut form = filled_form();
        form.set_email("a@b".to_string());
        assert_eq!(
            form.validate().get(&Field::Email),
            Some(&FieldError::InvalidFormat)
        );
        form.set_email("a@b.com".to_string());
        assert!(form.validate().is_empty());
        form.set_email("a b@c.com".to_string());
        assert_eq!(
            form.validate().get(&Field::Email),
            Some(&FieldError::InvalidFormat)
        );
        form.set_email("a@b.".to_string());
        assert_eq!(
            form.validate().get(&Field::Email),
            Some(&FieldError::InvalidFormat)
        );
    }

    #[test]
    fn phone_needs_ten_digits_after_stripping() {
        let mut form = filled_form();
        form.set_phone("123".to_string());
        assert_eq!(
            form.validate().get(&Field::Phone),
            Some(&FieldError::InvalidFormat)
        );
        form.set_phone("(123) 456-7890".to_string());
        assert!(form.validate().is_empty());
        form.set_phone("12345678901".to_string());
        assert_eq!(
            form.validate().get(&Field::Phone),
            Some(&FieldError::InvalidFormat)
        );
    }

    #[test]
    fn whitespace_only_name_is_required() {
        let mut form = filled_form();
        form.set_name("   ".to_string());
        assert_eq!(
            form.validate().get(&Field::Name),
            Some(&FieldError::Required)
        );
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = ContactForm::new(options(), 0);
        assert!(form.submit().is_none());
        assert!(form.field_error(Field::Name).is_some());
        assert!(form.field_error(Field::Email).is_some());

        form.set_name("Ada".to_string());
        assert!(form.field_error(Field::Name).is_none());
        assert!(form.field_error(Field::Email).is_some());
    }

    #[test]
    fn invalid_submit_stores_errors_and_stays_idle() {
        let mut form = ContactForm::new(options(), 0);
        assert!(form.submit().is_none());
        assert_eq!(form.lifecycle(), Lifecycle::Idle);
        assert_eq!(form.field_error(Field::Name), Some("Name is required"));
        assert_eq!(
            form.field_error(Field::Phone),
            Some("Phone number is required")
        );
    }

    #[test]
    fn valid_submit_yields_payload_and_enters_submitting() {
        let mut form = filled_form();
        let payload = form.submit().expect("payload");
        assert_eq!(form.lifecycle(), Lifecycle::Submitting);
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.country_code, "+91");
        assert_eq!(payload.phone_no, "1234567890");
        assert_eq!(payload.service, vec!["App Development".to_string()]);
        assert!(!payload.promotion);
    }

    #[test]
    fn payload_serializes_to_the_wire_shape() {
        let mut form = filled_form();
        let payload = form.submit().expect("payload");
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "country_code": "+91",
                "phone_no": "1234567890",
                "service": ["App Development"],
                "message": "Need an app built.",
                "promotion": false,
            })
        );
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = filled_form();
        assert!(form.submit().is_some());
        assert!(form.submit().is_none());
        assert_eq!(form.lifecycle(), Lifecycle::Submitting);
    }

    #[test]
    fn success_outcome_signals_close_exactly_once() {
        let mut form = filled_form();
        form.submit().expect("payload");
        assert!(form.resolve_success());
        assert_eq!(form.lifecycle(), Lifecycle::Succeeded);
        // The form instance is done; nothing resolves twice.
        assert!(!form.resolve_success());
        assert!(form.submit().is_none());
    }

    #[test]
    fn failure_outcome_returns_to_idle_and_keeps_fields() {
        let mut form = filled_form();
        form.submit().expect("payload");
        form.resolve_failure();
        assert_eq!(form.lifecycle(), Lifecycle::Idle);
        assert_eq!(
            form.submit_error(),
            Some("Failed to submit form. Please try again.")
        );
        assert_eq!(form.name(), "Ada Lovelace");
        assert_eq!(form.email(), "ada@example.com");
        assert_eq!(form.phone(), "(123) 456-7890");
        assert_eq!(form.message(), "Need an app built.");
        // Retry is a plain submit from Idle and clears the banner.
        assert!(form.submit().is_some());
        assert!(form.submit_error().is_none());
    }

    #[test]
    fn outcomes_outside_submitting_are_ignored() {
        let mut form = filled_form();
        assert!(!form.resolve_success());
        form.resolve_failure();
        assert!(form.submit_error().is_none());
        assert_eq!(form.lifecycle(), Lifecycle::Idle);
    }

    #[test]
    fn service_index_is_clamped_to_options() {
        let mut form = filled_form();
        form.set_service_index(99);
        assert_eq!(form.service_index(), 2);
    }
}
