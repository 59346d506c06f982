//! Form input and the validation gate
//!
//! Validation is all-or-nothing: either every field passes and an
//! [`InputBundle`] comes out, or the first offending field is reported and
//! nothing is computed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{AnalyzerError, AnalyzerResult};

/// The six fields of the analysis form, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    /// User name
    Name,
    /// Number to analyze
    Number,
    /// Free-form sentence
    Sentence,
    /// First tag
    Tag1,
    /// Second tag
    Tag2,
    /// Third tag
    Tag3,
}

impl InputField {
    /// All fields in the order they are validated
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Number,
        Self::Sentence,
        Self::Tag1,
        Self::Tag2,
        Self::Tag3,
    ];

    /// Element id of the matching input on the page
    #[must_use]
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::Name => "userName",
            Self::Number => "userNumber",
            Self::Sentence => "userSentence",
            Self::Tag1 => "fruit1",
            Self::Tag2 => "fruit2",
            Self::Tag3 => "fruit3",
        }
    }

    /// Human-readable field name
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Number => "number",
            Self::Sentence => "sentence",
            Self::Tag1 => "tag 1",
            Self::Tag2 => "tag 2",
            Self::Tag3 => "tag 3",
        }
    }

    /// Looks a field up by its element id
    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.element_id() == id)
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unvalidated form values exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    /// Name field
    pub name: String,
    /// Number field (still text)
    pub number: String,
    /// Sentence field
    pub sentence: String,
    /// The three tag fields
    pub tags: [String; 3],
}

impl RawInput {
    /// Creates raw input from the six field values
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        sentence: impl Into<String>,
        tags: [&str; 3],
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            sentence: sentence.into(),
            tags: tags.map(str::to_string),
        }
    }

    /// Gets the value of a field
    #[must_use]
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Name => &self.name,
            InputField::Number => &self.number,
            InputField::Sentence => &self.sentence,
            InputField::Tag1 => &self.tags[0],
            InputField::Tag2 => &self.tags[1],
            InputField::Tag3 => &self.tags[2],
        }
    }

    /// Sets the value of a field
    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let slot = match field {
            InputField::Name => &mut self.name,
            InputField::Number => &mut self.number,
            InputField::Sentence => &mut self.sentence,
            InputField::Tag1 => &mut self.tags[0],
            InputField::Tag2 => &mut self.tags[1],
            InputField::Tag3 => &mut self.tags[2],
        };
        *slot = value.into();
    }

    /// Runs the validation gate
    pub fn validate(&self) -> AnalyzerResult<InputBundle> {
        let result = self.check();
        if let Err(e) = &result {
            warn!(field = %e.field(), error = %e, "form input rejected");
        }
        result
    }

    fn check(&self) -> AnalyzerResult<InputBundle> {
        for field in InputField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(AnalyzerError::validation(field, "must not be empty"));
            }
        }

        let number = match parse_leading_float(&self.number) {
            None => {
                return Err(AnalyzerError::validation(
                    InputField::Number,
                    format!("'{}' is not a number", self.number.trim()),
                ))
            }
            Some(n) if !n.is_finite() => {
                return Err(AnalyzerError::validation(
                    InputField::Number,
                    "must be a finite number",
                ))
            }
            Some(n) => n,
        };

        Ok(InputBundle {
            name: self.name.trim().to_string(),
            number,
            sentence: self.sentence.trim().to_string(),
            tags: self.tags.iter().map(|t| t.trim().to_string()).collect(),
        })
    }
}

/// Validated input consumed by the computer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputBundle {
    /// Trimmed name
    pub name: String,
    /// Finite number
    pub number: f64,
    /// Trimmed sentence
    pub sentence: String,
    /// Trimmed tags, in form order
    pub tags: Vec<String>,
}

/// Parses the longest leading decimal literal of `text`
///
/// Leading whitespace is skipped and anything after the literal is ignored,
/// so `"12px"` gives 12. A leading `Infinity` is recognised and returned as an
/// infinite value; callers decide whether to accept it. Returns `None` when no
/// digits are found.
#[must_use]
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if end == 0 || !bytes[..end].iter().any(u8::is_ascii_digit) {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
