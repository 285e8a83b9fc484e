//! Registration form record.
//!
//! Lives as long as the registration view. Mutated on every edit, discarded
//! on navigation away.

use serde::Serialize;

use super::password::PasswordAssessment;
use super::state_machine::SubmitCheck;
use crate::security::secret::{expose_secret, SecretString};

/// Text inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Checkbox and visibility toggles of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormToggle {
    AgreeToTerms,
    SubscribeNewsletter,
    ShowPassword,
    ShowConfirmPassword,
}

#[derive(Debug, Default)]
pub struct RegistrationForm {
    name: String,
    email: String,
    password: SecretString,
    confirm_password: SecretString,
    agree_to_terms: bool,
    subscribe_newsletter: bool,
    show_password: bool,
    show_confirm_password: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password.replace(value),
            FormField::ConfirmPassword => self.confirm_password.replace(value),
        }
    }

    pub fn set_toggle(&mut self, toggle: FormToggle, checked: bool) {
        *self.toggle_slot(toggle) = checked;
    }

    /// Flip a toggle and return its new value.
    pub fn flip(&mut self, toggle: FormToggle) -> bool {
        let slot = self.toggle_slot(toggle);
        *slot = !*slot;
        *slot
    }

    fn toggle_slot(&mut self, toggle: FormToggle) -> &mut bool {
        match toggle {
            FormToggle::AgreeToTerms => &mut self.agree_to_terms,
            FormToggle::SubscribeNewsletter => &mut self.subscribe_newsletter,
            FormToggle::ShowPassword => &mut self.show_password,
            FormToggle::ShowConfirmPassword => &mut self.show_confirm_password,
        }
    }

    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => self.password.expose(),
            FormField::ConfirmPassword => self.confirm_password.expose(),
        }
    }

    pub fn is_toggled(&self, toggle: FormToggle) -> bool {
        match toggle {
            FormToggle::AgreeToTerms => self.agree_to_terms,
            FormToggle::SubscribeNewsletter => self.subscribe_newsletter,
            FormToggle::ShowPassword => self.show_password,
            FormToggle::ShowConfirmPassword => self.show_confirm_password,
        }
    }

    /// All four text fields are non-empty. Checkboxes play no part.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
    }

    pub fn passwords_match(&self) -> bool {
        self.password.expose() == self.confirm_password.expose()
    }

    /// Strength of the current password; `None` while the password is empty.
    pub fn password_assessment(&self) -> Option<PasswordAssessment> {
        if self.password.is_empty() {
            None
        } else {
            Some(PasswordAssessment::assess(self.password.expose()))
        }
    }

    pub fn submit_check(&self) -> SubmitCheck {
        SubmitCheck {
            complete: self.is_complete(),
            passwords_match: self.passwords_match(),
            agreed_to_terms: self.agree_to_terms,
        }
    }

    /// Snapshot of the fields sent to the backend.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.duplicate(),
        }
    }
}

/// Outbound registration body: `{ name, email, password }`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "expose_secret")]
    pub password: SecretString,
}
