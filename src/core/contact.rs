// Contact form state machine: Idle <-> Submitting, with the four required fields.

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! I'll get back to you soon.";
pub const SUBMIT_LABEL_IDLE: &str = "Send Message";
pub const SUBMIT_LABEL_BUSY: &str = "Sending";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Element id and form `name` attribute.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.id() == id)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("a message is already being sent")]
    Busy,
    #[error("{0} is required")]
    MissingField(Field),
}

/// The delivery endpoint rejected or never received the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("message could not be delivered: {0}")]
pub struct SubmitError(pub String);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Delivered; fields were cleared.
    Acknowledged(&'static str),
    /// Not delivered; fields are kept so the visitor can retry.
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    fields: ContactFields,
    phase: FormPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            phase: FormPhase::Idle,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Refresh every field from the page controls.
    pub fn sync_fields(&mut self, mut read: impl FnMut(Field) -> String) {
        for field in Field::ALL {
            self.fields.set(field, read(field));
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Idle => SUBMIT_LABEL_IDLE,
            FormPhase::Submitting => SUBMIT_LABEL_BUSY,
        }
    }

    /// Enter `Submitting` and hand back the fields to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactFields, FormError> {
        if self.is_submitting() {
            return Err(FormError::Busy);
        }
        if let Some(field) = self.fields.first_missing() {
            return Err(FormError::MissingField(field));
        }
        self.phase = FormPhase::Submitting;
        Ok(self.fields.clone())
    }

    /// Leave `Submitting`. Success clears the fields; failure keeps them.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        self.phase = FormPhase::Idle;
        match result {
            Ok(()) => {
                self.fields.clear();
                SubmitOutcome::Acknowledged(ACKNOWLEDGEMENT)
            }
            Err(e) => SubmitOutcome::Failed(e.to_string()),
        }
    }
}
