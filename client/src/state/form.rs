//! Contact-form field state and declarative validation rules.
//!
//! DESIGN
//! ======
//! Each validated field maps to one static `FieldRules` entry. Rules are
//! evaluated in fixed precedence (required, then min length, max length,
//! pattern) and the first failure wins. The same table is used by the server
//! to re-validate submitted payloads, so client and server never disagree on
//! what a valid message looks like.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::ContactRequest;

/// Upper bound on message length; also drives the character counter.
pub const MESSAGE_MAX_CHARS: usize = 1000;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern compiles"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// =============================================================================
// RULES
// =============================================================================

/// Fields that carry validation rules. `subject` and `newsletter` do not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// Form control `name`/`id`, matching the JSON key of `ContactRequest`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Message => "Message",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::Message => 3,
        }
    }
}

/// Per-violation user-facing messages. Unused slots are empty.
#[derive(Debug)]
pub struct RuleMessages {
    pub required: &'static str,
    pub min_length: &'static str,
    pub max_length: &'static str,
    pub pattern: &'static str,
}

/// Constraint set for one field.
#[derive(Debug)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static LazyLock<Regex>>,
    pub messages: RuleMessages,
}

static FIRST_NAME_RULES: FieldRules = FieldRules {
    required: true,
    min_length: Some(2),
    max_length: Some(50),
    pattern: Some(&NAME_PATTERN),
    messages: RuleMessages {
        required: "First name is required",
        min_length: "First name must be at least 2 characters",
        max_length: "First name cannot exceed 50 characters",
        pattern: "First name can only contain letters and spaces",
    },
};

static LAST_NAME_RULES: FieldRules = FieldRules {
    required: true,
    min_length: Some(2),
    max_length: Some(50),
    pattern: Some(&NAME_PATTERN),
    messages: RuleMessages {
        required: "Last name is required",
        min_length: "Last name must be at least 2 characters",
        max_length: "Last name cannot exceed 50 characters",
        pattern: "Last name can only contain letters and spaces",
    },
};

static EMAIL_RULES: FieldRules = FieldRules {
    required: true,
    min_length: None,
    max_length: None,
    pattern: Some(&EMAIL_PATTERN),
    messages: RuleMessages {
        required: "Email address is required",
        min_length: "",
        max_length: "",
        pattern: "Please enter a valid email address",
    },
};

static MESSAGE_RULES: FieldRules = FieldRules {
    required: true,
    min_length: Some(10),
    max_length: Some(MESSAGE_MAX_CHARS),
    pattern: None,
    messages: RuleMessages {
        required: "Message is required",
        min_length: "Message must be at least 10 characters",
        max_length: "Message cannot exceed 1000 characters",
        pattern: "",
    },
};

#[must_use]
pub fn rules_for(field: FieldName) -> &'static FieldRules {
    match field {
        FieldName::FirstName => &FIRST_NAME_RULES,
        FieldName::LastName => &LAST_NAME_RULES,
        FieldName::Email => &EMAIL_RULES,
        FieldName::Message => &MESSAGE_RULES,
    }
}

/// Validate one raw field value. Returns the first violated rule's message.
///
/// # Errors
///
/// Returns the user-facing message of the first failing rule.
pub fn validate_value(rules: &FieldRules, raw: &str) -> Result<(), &'static str> {
    let value = raw.trim();

    if value.is_empty() {
        if rules.required {
            return Err(rules.messages.required);
        }
        return Ok(());
    }

    let len = value.chars().count();
    if rules.min_length.is_some_and(|min| len < min) {
        return Err(rules.messages.min_length);
    }
    if rules.max_length.is_some_and(|max| len > max) {
        return Err(rules.messages.max_length);
    }
    if rules.pattern.is_some_and(|pattern| !pattern.is_match(value)) {
        return Err(rules.messages.pattern);
    }
    Ok(())
}

/// Validate `raw` against the rules registered for `field`.
///
/// # Errors
///
/// Returns the user-facing message of the first failing rule.
pub fn validate_field(field: FieldName, raw: &str) -> Result<(), &'static str> {
    validate_value(rules_for(field), raw)
}

/// Every violation in a submitted request, in field order.
#[must_use]
pub fn request_violations(request: &ContactRequest) -> Vec<(FieldName, &'static str)> {
    FieldName::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, request_value(request, field))
                .err()
                .map(|msg| (field, msg))
        })
        .collect()
}

fn request_value(request: &ContactRequest, field: FieldName) -> &str {
    match field {
        FieldName::FirstName => &request.first_name,
        FieldName::LastName => &request.last_name,
        FieldName::Email => &request.email,
        FieldName::Message => &request.message,
    }
}

// =============================================================================
// FIELD STATE
// =============================================================================

/// Validation status of a single field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Unvalidated,
    Valid,
    Invalid(&'static str),
}

impl FieldState {
    /// CSS modifier for the input: `error`, `success`, or none.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Unvalidated => "",
            Self::Valid => "success",
            Self::Invalid(_) => "error",
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Invalid(msg) => Some(*msg),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Character-counter severity under the message field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CharCountLevel {
    #[default]
    Normal,
    Warning,
    Error,
}

impl CharCountLevel {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Warning above 80% of the limit, error above the limit.
#[must_use]
pub fn char_count_level(len: usize) -> CharCountLevel {
    if len > MESSAGE_MAX_CHARS {
        CharCountLevel::Error
    } else if len * 5 > MESSAGE_MAX_CHARS * 4 {
        CharCountLevel::Warning
    } else {
        CharCountLevel::Normal
    }
}

// =============================================================================
// FORM
// =============================================================================

/// Contact form values plus per-field validation status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub newsletter: bool,
    states: [FieldState; 4],
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    #[must_use]
    pub fn state(&self, field: FieldName) -> &FieldState {
        &self.states[field.index()]
    }

    /// Store a new input value. A field already showing an error is
    /// re-validated immediately so the error clears as soon as it is fixed.
    pub fn input(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        };
        *slot = value;
        if self.state(field).is_invalid() {
            self.validate(field);
        }
    }

    /// Validate one field (blur) and record the outcome.
    pub fn validate(&mut self, field: FieldName) -> bool {
        let next = match validate_field(field, self.value(field)) {
            Ok(()) => FieldState::Valid,
            Err(msg) => FieldState::Invalid(msg),
        };
        let ok = next == FieldState::Valid;
        self.states[field.index()] = next;
        ok
    }

    /// Validate every field without short-circuiting so all errors show at once.
    pub fn validate_form(&mut self) -> bool {
        FieldName::ALL
            .into_iter()
            .fold(true, |all_ok, field| self.validate(field) && all_ok)
    }

    /// Snapshot the submission record. Text fields are trimmed except `subject`.
    #[must_use]
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.clone(),
            message: self.message.trim().to_owned(),
            newsletter: self.newsletter,
        }
    }

    /// Clear all values and validation states.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn message_len(&self) -> usize {
        self.message.chars().count()
    }
}
