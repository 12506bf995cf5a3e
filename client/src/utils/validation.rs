//! Validation utilities for form input

use shared::{ContactRequest, PaymentRequest};

/// Message shown when a payment form field is missing.
pub const FILL_ALL_FIELDS: &str = "Please fill all fields";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// All four payment fields must be filled in before initiating a payment.
pub fn validate_payment(payment: &PaymentRequest) -> ValidationResult {
    let fields = [
        &payment.phone,
        &payment.amount,
        &payment.payment_type,
        &payment.payer_name,
    ];
    if fields.iter().any(|field| field.trim().is_empty()) {
        return ValidationResult::err(FILL_ALL_FIELDS);
    }

    ValidationResult::ok()
}

/// Validate an M-Pesa amount: a positive number of shillings
pub fn validate_amount(amount: &str) -> ValidationResult {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => ValidationResult::ok(),
        Ok(_) => ValidationResult::err("Amount must be greater than 0"),
        Err(_) => ValidationResult::err("Amount must be a number"),
    }
}

/// Validate a phone number: digits with an optional leading `+`
pub fn validate_phone(phone: &str) -> ValidationResult {
    let phone = phone.trim();
    if phone.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number can only contain digits");
    }

    if !(9..=13).contains(&digits.len()) {
        return ValidationResult::err("Phone number must be 9 to 13 digits");
    }

    ValidationResult::ok()
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Contact form: name, email and message are required, email must look valid
pub fn validate_contact(form: &ContactRequest) -> ValidationResult {
    if form.name.trim().is_empty() {
        return ValidationResult::err("Name is required");
    }

    let email = validate_email(form.email.trim());
    if !email.is_valid {
        return email;
    }

    if form.message.trim().is_empty() {
        return ValidationResult::err("Message is required");
    }

    ValidationResult::ok()
}
