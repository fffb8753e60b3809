//! Contact form and the `mailto:` hand-off
//!
//! Nothing is sent from here: a validated message becomes a `mailto:` link that
//! the visitor's mail client opens.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Por favor completa todos los campos")]
    MissingFields,

    #[error("'{0}' no parece un email válido")]
    InvalidEmail(String),
}

/// Editable fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Email, ContactField::Subject, ContactField::Message];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Email => "Email",
            ContactField::Subject => "Asunto",
            ContactField::Message => "Mensaje",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Email => "tu@email.com",
            ContactField::Subject => "¿De qué querés hablar?",
            ContactField::Message => "Escribí tu mensaje acá...",
        }
    }
}

/// Raw form state as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.field(*f).trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        if email.is_empty() || subject.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        Ok(ContactMessage {
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

/// A validated message, ready to become a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    email: String,
    subject: String,
    message: String,
}

impl ContactMessage {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> String {
        format!("De: {}\n\nMensaje:\n{}", self.email, self.message)
    }

    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body())
        )
    }
}

/// `local@domain` with no whitespace; the mail client does the real check.
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
