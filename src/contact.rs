use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use url::Url;

use crate::notify::NoticeKind;

pub const SENDING_LABEL: &str = "Sending...";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again or email directly.";

pub const VISIBLE_FIELDS: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(ContactField),
    #[error("a submission is already in flight")]
    AlreadySending,
    #[error("contact endpoint answered with status {0}")]
    Status(u16),
    #[error("contact request failed: {0}")]
    Transport(String),
}

impl ContactError {
    /// Toast text for the user, or `None` when the error stays silent.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(_) => Some(MISSING_FIELDS_MESSAGE),
            Self::AlreadySending => None,
            Self::Status(_) | Self::Transport(_) => Some(FAILED_MESSAGE),
        }
    }
}

/// Form body as posted: the three visible fields plus any hidden inputs
/// (`_subject`, `_captcha`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub hidden: BTreeMap<String, String>,
}

impl ContactSubmission {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Name/value pairs in posting order, visible fields first.
    pub fn form_fields(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        VISIBLE_FIELDS
            .into_iter()
            .map(move |field| (field.as_str(), self.field(field)))
            .chain(
                self.hidden
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str())),
            )
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        VISIBLE_FIELDS
            .into_iter()
            .find(|field| self.field(*field).is_empty())
            .map_or(Ok(()), |field| Err(ContactError::MissingField(field)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    fields: ContactSubmission,
    button: SubmitButton,
    saved_label: Option<String>,
}

impl ContactForm {
    pub fn new(label: impl Into<String>, hidden: BTreeMap<String, String>) -> Self {
        Self {
            fields: ContactSubmission {
                hidden,
                ..ContactSubmission::default()
            },
            button: SubmitButton {
                label: label.into(),
                disabled: false,
            },
            saved_label: None,
        }
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn is_sending(&self) -> bool {
        self.saved_label.is_some()
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    /// Validates and, on success, flips the button into its sending state.
    /// The returned snapshot is what goes over the wire.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, ContactError> {
        if self.is_sending() {
            return Err(ContactError::AlreadySending);
        }
        self.fields.validate()?;

        let label = std::mem::replace(&mut self.button.label, SENDING_LABEL.to_string());
        self.saved_label = Some(label);
        self.button.disabled = true;

        Ok(self.fields.clone())
    }

    /// Restores the button whatever the outcome; clears the visible fields
    /// after a successful send.
    pub fn finish_submit(&mut self, result: &Result<(), ContactError>) -> (NoticeKind, &'static str) {
        if let Some(label) = self.saved_label.take() {
            self.button.label = label;
        }
        self.button.disabled = false;

        match result {
            Ok(()) => {
                self.fields.name.clear();
                self.fields.email.clear();
                self.fields.message.clear();
                (NoticeKind::Success, SENT_MESSAGE)
            }
            Err(err) => (NoticeKind::Error, err.user_message().unwrap_or(FAILED_MESSAGE)),
        }
    }
}

/// Outbound POST of a contact submission as form fields (see
/// [`ContactSubmission::form_fields`]). Implementations return the HTTP
/// status; a network failure is a [`ContactError::Transport`].
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn post(&self, endpoint: &Url, submission: &ContactSubmission) -> Result<u16, ContactError>;
}

/// One attempt, no retry. Any non-2xx status is a failure.
pub async fn deliver<T: ContactTransport>(
    transport: &T,
    endpoint: &Url,
    submission: &ContactSubmission,
) -> Result<(), ContactError> {
    let status = transport.post(endpoint, submission).await?;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct ScriptedTransport {
        reply: Result<u16, ContactError>,
        calls: RefCell<Vec<ContactSubmission>>,
    }

    impl ContactTransport for ScriptedTransport {
        async fn post(&self, _endpoint: &Url, submission: &ContactSubmission) -> Result<u16, ContactError> {
            self.calls.borrow_mut().push(submission.clone());
            self.reply.clone()
        }
    }

    fn endpoint() -> Url {
        Url::parse("https://forms.example.com/ajax/me").expect("valid URL")
    }

    fn filled_form() -> ContactForm {
        let mut hidden = BTreeMap::new();
        hidden.insert("_captcha".to_string(), "false".to_string());
        let mut form = ContactForm::new("Send Message", hidden);
        form.set_field(ContactField::Name, "Ada");
        form.set_field(ContactField::Email, "ada@example.com");
        form.set_field(ContactField::Message, "Hello");
        form
    }

    #[test]
    fn blank_email_fails_validation_without_touching_button() {
        let mut form = filled_form();
        form.set_field(ContactField::Email, "");

        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(ContactField::Email))
        );
        assert_eq!(form.button().label, "Send Message");
        assert!(!form.button().disabled);
    }

    #[test]
    fn second_submit_while_sending_is_rejected() {
        let mut form = filled_form();
        form.begin_submit().expect("valid form");

        assert_eq!(form.button(), &SubmitButton { label: SENDING_LABEL.to_string(), disabled: true });
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySending));
    }

    #[test]
    fn failure_restores_button_and_keeps_fields() {
        let mut form = filled_form();
        form.begin_submit().expect("valid form");

        let notice = form.finish_submit(&Err(ContactError::Status(500)));

        assert_eq!(notice, (NoticeKind::Error, FAILED_MESSAGE));
        assert_eq!(form.button(), &SubmitButton { label: "Send Message".to_string(), disabled: false });
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn success_clears_visible_fields_but_keeps_hidden_ones() {
        let mut form = filled_form();
        form.begin_submit().expect("valid form");

        assert_eq!(form.finish_submit(&Ok(())), (NoticeKind::Success, SENT_MESSAGE));
        assert!(form.fields().name.is_empty());
        assert_eq!(form.fields().hidden.get("_captcha").map(String::as_str), Some("false"));
        assert!(!form.is_sending());
    }

    #[test]
    fn whitespace_only_field_counts_as_filled() {
        let mut form = filled_form();
        form.set_field(ContactField::Name, " ");

        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn form_fields_list_visible_then_hidden_fields() {
        let submission = filled_form().fields().clone();
        let fields: Vec<(&str, &str)> = submission.form_fields().collect();

        assert_eq!(
            fields,
            vec![
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("message", "Hello"),
                ("_captcha", "false"),
            ]
        );
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let transport = ScriptedTransport { reply: Ok(422), calls: RefCell::new(Vec::new()) };
        let submission = filled_form().fields().clone();

        let result = deliver(&transport, &endpoint(), &submission).await;

        assert_eq!(result, Err(ContactError::Status(422)));
        assert_eq!(transport.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_is_passed_through() {
        let transport = ScriptedTransport {
            reply: Err(ContactError::Transport("offline".to_string())),
            calls: RefCell::new(Vec::new()),
        };

        let result = deliver(&transport, &endpoint(), &filled_form().fields().clone()).await;

        assert_eq!(result, Err(ContactError::Transport("offline".to_string())));
        assert_eq!(result.unwrap_err().user_message(), Some(FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn created_status_counts_as_success() {
        let transport = ScriptedTransport { reply: Ok(201), calls: RefCell::new(Vec::new()) };

        assert_eq!(deliver(&transport, &endpoint(), &filled_form().fields().clone()).await, Ok(()));
    }
}
