//! Read model of the registration form, as drawn by a front-end.

use serde::Serialize;
use sf_core::registration::{
    FormField, FormToggle, PasswordAssessment, RegistrationForm, RegistrationState, StrengthColor,
    StrengthLevel,
};

pub const SUBMIT_LABEL: &str = "Register";
pub const SUBMIT_BUSY_LABEL: &str = "Creating Account...";
const MASK_CHAR: char = '•';

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationView {
    pub name: String,
    pub email: String,
    pub password: SecretInputView,
    pub confirm_password: SecretInputView,
    pub agree_to_terms: bool,
    pub subscribe_newsletter: bool,
    /// Present only while the password is non-empty.
    pub strength: Option<StrengthMeterView>,
    pub submit: SubmitControlView,
    pub state: RegistrationState,
}

/// A password input: masked unless its visibility toggle is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretInputView {
    pub display: String,
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthMeterView {
    pub score: u8,
    pub level: StrengthLevel,
    pub label: &'static str,
    pub color: StrengthColor,
    /// Bar fill in `0.0..=1.0`.
    pub fill: f32,
    pub checklist: Vec<RequirementView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementView {
    pub label: &'static str,
    pub met: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitControlView {
    pub enabled: bool,
    /// Drawn in the "ready" colour; follows field completeness only.
    pub highlighted: bool,
    pub label: &'static str,
}

impl RegistrationView {
    pub fn project(form: &RegistrationForm, state: RegistrationState, busy: bool) -> Self {
        let complete = form.is_complete();
        Self {
            name: form.text(FormField::Name).to_string(),
            email: form.text(FormField::Email).to_string(),
            password: SecretInputView::new(
                form.text(FormField::Password),
                form.is_toggled(FormToggle::ShowPassword),
            ),
            confirm_password: SecretInputView::new(
                form.text(FormField::ConfirmPassword),
                form.is_toggled(FormToggle::ShowConfirmPassword),
            ),
            agree_to_terms: form.is_toggled(FormToggle::AgreeToTerms),
            subscribe_newsletter: form.is_toggled(FormToggle::SubscribeNewsletter),
            strength: form
                .password_assessment()
                .map(|assessment| StrengthMeterView::from_assessment(&assessment)),
            submit: SubmitControlView {
                enabled: complete && !busy,
                highlighted: complete,
                label: if busy {
                    SUBMIT_BUSY_LABEL
                } else {
                    SUBMIT_LABEL
                },
            },
            state,
        }
    }
}

impl SecretInputView {
    fn new(value: &str, revealed: bool) -> Self {
        let display = if revealed {
            value.to_string()
        } else {
            std::iter::repeat(MASK_CHAR)
                .take(value.chars().count())
                .collect()
        };
        Self { display, revealed }
    }
}

impl StrengthMeterView {
    pub fn from_assessment(assessment: &PasswordAssessment) -> Self {
        let level = assessment.level();
        Self {
            score: assessment.score,
            level,
            label: level.label(),
            color: level.color(),
            fill: assessment.fill_ratio(),
            checklist: assessment
                .requirements
                .checklist()
                .map(|(requirement, met)| RequirementView {
                    label: requirement.label(),
                    met,
                })
                .collect(),
        }
    }

    pub fn percent(&self) -> u8 {
        (self.fill * 100.0).round() as u8
    }
}
