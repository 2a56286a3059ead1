//! Sign-in and registration form checks. Nothing here touches the network.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("static email pattern"));

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>?";

/// Body for both `/api/token/` and `/api/auth/register/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your first and last name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter your password.")]
    PasswordRequired,
    #[error("Please ensure your password meets all requirements.")]
    WeakPassword(PasswordCheck),
    #[error("Passwords do not match. Please try again.")]
    PasswordMismatch,
    #[error("Please agree to the Terms of Service and Privacy Policy.")]
    TermsNotAccepted,
}

impl ValidationError {
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingName => "Invalid Input",
            Self::InvalidEmail => "Invalid Email",
            Self::PasswordRequired => "Password Required",
            Self::WeakPassword(_) => "Invalid Password",
            Self::PasswordMismatch => "Password Mismatch",
            Self::TermsNotAccepted => "Terms Required",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCheck {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special: bool,
}

impl PasswordCheck {
    pub fn of(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= 8,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_number: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    pub fn passes(&self) -> bool {
        self.min_length && self.has_uppercase && self.has_lowercase && self.has_number && self.has_special
    }

    /// Human-readable list of the requirements that are not met.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.min_length, "at least 8 characters"),
            (self.has_uppercase, "an uppercase letter"),
            (self.has_lowercase, "a lowercase letter"),
            (self.has_number, "a number"),
            (self.has_special, "a special character"),
        ]
        .into_iter()
        .filter_map(|(ok, label)| (!ok).then_some(label))
        .collect()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && EMAIL_RE.is_match(email)
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.trim().is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        Ok(Credentials {
            username: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

impl RegisterForm {
    /// Reports the first failing check in form order.
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        let check = PasswordCheck::of(&self.password);
        if !check.passes() {
            return Err(ValidationError::WeakPassword(check));
        }
        if self.confirm_password.is_empty() || self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.agree_to_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(Credentials {
            username: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    SignedOut,
    Authenticating,
    SignedIn,
}
