//! Contact form state and submission
//!
//! The page has no backend of its own. Sending a message is delegated to a
//! [`ContactSubmitter`]; [`LogSubmitter`] just records the message in the log.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::error::{SubmitError, ValidationError};

/// Form fields
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// `name` attribute of the input
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Visible label
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "you@example.com",
            Self::Message => "Tell me about your project...",
        }
    }

    pub fn all() -> [ContactField; 3] {
        [Self::Name, Self::Email, Self::Message]
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("unknown contact field `{s}`"))
    }
}

/// A validated message, ready to hand to a submitter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Delivery of contact messages (mail relay, form service, ...)
pub trait ContactSubmitter {
    fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Submitter that only logs the message
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmitter;

impl ContactSubmitter for LogSubmitter {
    fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        info!(
            name = %message.name,
            email = %message.email,
            chars = message.message.chars().count(),
            "contact form submitted"
        );
        Ok(())
    }
}

/// Field values as typed by the visitor
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Check every field is filled and the email looks like one
    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        for field in ContactField::all() {
            if self.value(field).trim().is_empty() {
                return Err(ValidationError::Missing(field));
            }
        }

        let email = self.email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
            None => false,
        };
        if !valid_email {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validate and submit; the form is cleared only when delivery succeeds
    pub fn submit(&mut self, submitter: &dyn ContactSubmitter) -> Result<ContactMessage, SubmitError> {
        let message = self.validate()?;
        submitter.submit(&message)?;
        *self = Self::default();
        Ok(message)
    }
}
