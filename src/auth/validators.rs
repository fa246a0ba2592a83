//! Registration form validation

use super::models::RegisterForm;

/// Validate a registration form submission
///
/// All three fields are required; the email must at least look like an
/// address. Returns the message shown to the user on the first failure.
pub fn validate_registration(form: &RegisterForm) -> Result<(), String> {
    if form.username.trim().is_empty() {
        return Err("Username is required".to_string());
    }

    if form.email.trim().is_empty() {
        return Err("Email is required".to_string());
    }

    if !is_plausible_email(form.email.trim()) {
        return Err("Please enter a valid email address".to_string());
    }

    if form.password.is_empty() {
        return Err("Password is required".to_string());
    }

    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}
