use crate::contact::form::{ContactFormState, Field, ValidationErrors};

/// Runs every rule against the form, collecting one message per failing field.
/// An empty map means the form may be submitted.
pub fn validate_form(form: &ContactFormState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.full_name.trim().is_empty() {
        errors.insert(Field::FullName, "Full name is required".to_string());
    }

    if form.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, "Invalid email format".to_string());
    }

    if form.inquiry_type.trim().is_empty() {
        errors.insert(Field::InquiryType, "Please select inquiry type".to_string());
    }

    if form.message.trim().is_empty() {
        errors.insert(Field::Message, "Message is required".to_string());
    }

    errors
}

/// Shape check for `local@domain.tld`.
///
/// Accepts exactly one `@`, no whitespace anywhere, a non-empty local part,
/// and a domain holding at least one `.` with characters on both sides.
/// The value is not trimmed first, so surrounding spaces fail.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
