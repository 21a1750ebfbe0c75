//! Contact form model and submission to the forms relay.

use chrono::{Datelike, Timelike, Weekday};
use gloo_net::http::Request;
use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

/// `<select>` options: (value, label).
pub const SUBJECTS: [(&str, &str); 5] = [
    ("", "Select an option"),
    ("general", "General Inquiry"),
    ("demo", "Request a Demo"),
    ("quote", "Request a Quote"),
    ("support", "Technical Support"),
];

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => return Err(ContactError::InvalidEmail),
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Submission<'a> {
    access_key: &'a str,
    #[serde(flatten)]
    form: &'a ContactForm,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Could not reach the form service: {0}")]
    Network(String),
    #[error("Unexpected response from the form service: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
}

impl RelayResponse {
    pub fn into_result(self) -> Result<(), ContactError> {
        if self.success {
            Ok(())
        } else if self.message.is_empty() {
            Err(ContactError::Rejected("Submission failed".to_string()))
        } else {
            Err(ContactError::Rejected(self.message))
        }
    }
}

pub async fn submit(form: &ContactForm) -> Result<(), ContactError> {
    form.validate()?;

    let body = Submission {
        access_key: config::get_forms_access_key(),
        form,
    };
    let request = Request::post(config::get_forms_endpoint())
        .header("Accept", "application/json")
        .json(&body)
        .map_err(|e| ContactError::Decode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    let status = response.status();
    let relay = response
        .json::<RelayResponse>()
        .await
        .map_err(|e| ContactError::Decode(format!("status {}: {}", status, e)))?;

    match relay.into_result() {
        Ok(()) => {
            info!("Contact form submitted");
            Ok(())
        }
        Err(e) => {
            error!("Contact form rejected: {}", e);
            Err(e)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Submitted,
    Failed(String),
}

impl SubmitStatus {
    pub fn from_result(result: Result<(), ContactError>) -> Self {
        match result {
            Ok(()) => SubmitStatus::Submitted,
            Err(e) => SubmitStatus::Failed(e.to_string()),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Sending => Some("Sending....".to_string()),
            SubmitStatus::Submitted => Some("Form Submitted Successfully".to_string()),
            SubmitStatus::Failed(message) => Some(message.clone()),
        }
    }

    pub fn is_sending(&self) -> bool {
        *self == SubmitStatus::Sending
    }
}

/// "Today" row of the office hours table. Weekdays open from 10:00 and
/// stay open until 4:00 the next morning.
pub fn office_status<T: Datelike + Timelike>(now: &T) -> &'static str {
    if matches!(now.weekday(), Weekday::Sat | Weekday::Sun) {
        return "Closed";
    }
    if now.hour() >= 10 {
        "Open - Closes at 4:00 AM"
    } else {
        "Closed - Opens at 10:00 AM"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "".into(),
            subject: "demo".into(),
            message: "Show me SecureVault".into(),
        }
    }

    #[test]
    fn submission_flattens_fields_next_to_access_key() {
        let form = filled();
        let value = serde_json::to_value(Submission {
            access_key: "key-123",
            form: &form,
        })
        .unwrap();
        assert_eq!(value["access_key"], "key-123");
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["subject"], "demo");
        assert_eq!(value["phone"], "");
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut form = filled();
        form.set(Field::Name, "  ".into());
        assert_eq!(form.validate(), Err(ContactError::MissingField("name")));

        let mut form = filled();
        form.set(Field::Email, "ada.example.com".into());
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));

        let mut form = filled();
        form.set(Field::Message, String::new());
        assert_eq!(form.validate(), Err(ContactError::MissingField("message")));

        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn relay_rejection_carries_its_message() {
        let response: RelayResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid access key"}"#).unwrap();
        let status = SubmitStatus::from_result(response.into_result());
        assert_eq!(status, SubmitStatus::Failed("Invalid access key".into()));
        assert_eq!(status.message().as_deref(), Some("Invalid access key"));
    }

    #[test]
    fn relay_success_without_message_field() {
        let response: RelayResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let status = SubmitStatus::from_result(response.into_result());
        assert_eq!(status.message().as_deref(), Some("Form Submitted Successfully"));
    }

    #[test]
    fn status_lines_match_the_form_states() {
        assert_eq!(SubmitStatus::Idle.message(), None);
        assert!(SubmitStatus::Sending.is_sending());
        assert_eq!(SubmitStatus::Sending.message().as_deref(), Some("Sending...."));
        let failed = SubmitStatus::from_result(Err(ContactError::Network("offline".into())));
        assert_eq!(
            failed.message().as_deref(),
            Some("Could not reach the form service: offline")
        );
    }

    #[test]
    fn office_status_follows_weekday_hours() {
        // 2025-05-12 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2025, 5, 17).unwrap();
        assert_eq!(
            office_status(&monday.and_hms_opt(9, 59, 0).unwrap()),
            "Closed - Opens at 10:00 AM"
        );
        assert_eq!(
            office_status(&monday.and_hms_opt(10, 0, 0).unwrap()),
            "Open - Closes at 4:00 AM"
        );
        assert_eq!(office_status(&saturday.and_hms_opt(12, 0, 0).unwrap()), "Closed");
    }
}
