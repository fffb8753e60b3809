//! Contact form state for the interactive page

use folio::domain::entities::{ContactField, ContactForm};
use folio::{FolioError, LinkOpener};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(ContactField),
    Send,
}

impl FormFocus {
    const ORDER: [FormFocus; 4] = [
        FormFocus::Field(ContactField::Email),
        FormFocus::Field(ContactField::Subject),
        FormFocus::Field(ContactField::Message),
        FormFocus::Send,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Outcome of the last submit, shown under the button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContactFormView {
    pub form: ContactForm,
    pub focus: Option<FormFocus>,
    pub notice: Option<Notice>,
}

impl ContactFormView {
    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(match self.focus {
            None => FormFocus::ORDER[0],
            Some(f) => FormFocus::ORDER[(f.index() + 1) % FormFocus::ORDER.len()],
        });
    }

    pub fn focus_prev(&mut self) {
        let len = FormFocus::ORDER.len();
        self.focus = Some(match self.focus {
            None => FormFocus::ORDER[len - 1],
            Some(f) => FormFocus::ORDER[(f.index() + len - 1) % len],
        });
    }

    pub fn leave(&mut self) {
        self.focus = None;
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(FormFocus::Field(field)) = self.focus {
            self.form.field_mut(field).push(c);
            self.notice = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(FormFocus::Field(field)) = self.focus {
            self.form.field_mut(field).pop();
        }
    }

    /// Validate, hand the mailto link to `opener` and reset on success.
    pub fn submit(&mut self, recipient: &str, opener: &dyn LinkOpener) -> Result<String, FolioError> {
        let result = self
            .form
            .validate()
            .map_err(FolioError::from)
            .map(|message| message.mailto(recipient))
            .and_then(|link| opener.open(&link).map(|()| link));

        match &result {
            Ok(_) => {
                self.form.clear();
                self.focus = Some(FormFocus::ORDER[0]);
                self.notice = Some(Notice::Sent);
            }
            Err(err) => self.notice = Some(Notice::Error(err.to_string())),
        }
        result
    }
}
