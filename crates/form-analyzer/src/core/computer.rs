//! Result computation: the pure input-to-results pipeline

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::core::display::to_fixed;
use crate::core::{InputBundle, BASE_NUMBER, SEQUENCE_CAP};

/// Quotient of the base value by the input number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quotient {
    /// A regular quotient
    Finite(f64),
    /// Sentinel used when the input number is zero
    Infinite,
}

impl Quotient {
    /// Display text for the sentinel
    pub const SENTINEL: &'static str = "∞";

    /// Returns true for the division-by-zero sentinel
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        matches!(self, Self::Infinite)
    }
}

impl std::fmt::Display for Quotient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(v) => f.write_str(&to_fixed(*v, 2)),
            Self::Infinite => f.write_str(Self::SENTINEL),
        }
    }
}

impl Serialize for Quotient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sum, difference, product and quotient against the base value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArithmeticResult {
    /// base + number
    pub sum: f64,
    /// base - number
    pub difference: f64,
    /// base * number
    pub product: f64,
    /// base / number, or the sentinel
    pub quotient: Quotient,
}

/// Case-folded sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringResult {
    /// Upper-cased sentence
    pub uppercase: String,
    /// Lower-cased sentence
    pub lowercase: String,
}

/// Sign of the input number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Strictly greater than zero
    Positive,
    /// Strictly less than zero
    Negative,
    /// Zero (either sign)
    Zero,
}

impl Classification {
    /// Sentence shown to the user
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Positive => "The number is positive",
            Self::Negative => "The number is negative",
            Self::Zero => "The number is zero",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of the sign check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionResult {
    /// The one classification that holds
    pub classification: Classification,
}

/// Ascending integers starting at 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SequenceResult(pub Vec<u32>);

impl SequenceResult {
    /// The numbers in order
    #[must_use]
    pub fn numbers(&self) -> &[u32] {
        &self.0
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything derived from one validated form submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultBundle {
    /// The number the results were computed from
    pub number: f64,
    /// The sentence the case transforms were applied to
    pub sentence: String,
    /// Arithmetic against the base value
    pub arithmetic: ArithmeticResult,
    /// Case transforms
    pub strings: StringResult,
    /// Sign classification
    pub condition: ConditionResult,
    /// Bounded counting sequence (before the display override)
    pub sequence: SequenceResult,
    /// Greeting for the user
    pub greeting: String,
    /// Tags in form order
    pub tags: Vec<String>,
    /// Number of tags
    pub tag_count: usize,
}

/// Tunable constants of the computer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputerSettings {
    /// Value combined with the input number
    pub base_number: f64,
    /// Upper bound of the generated sequence
    pub sequence_cap: u32,
}

impl Default for ComputerSettings {
    fn default() -> Self {
        Self {
            base_number: BASE_NUMBER,
            sequence_cap: SEQUENCE_CAP,
        }
    }
}

/// Pure transformation from [`InputBundle`] to [`ResultBundle`]
///
/// Holds no state beyond its settings, so one instance can serve any number
/// of submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultComputer {
    settings: ComputerSettings,
}

impl ResultComputer {
    /// Creates a computer with base 42 and a sequence cap of 20
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a computer with custom settings
    #[must_use]
    pub const fn with_settings(settings: ComputerSettings) -> Self {
        Self { settings }
    }

    /// Returns the active settings
    #[must_use]
    pub const fn settings(&self) -> &ComputerSettings {
        &self.settings
    }

    /// Computes every result for a validated submission
    #[must_use]
    pub fn compute(&self, input: &InputBundle) -> ResultBundle {
        let bundle = ResultBundle {
            number: input.number,
            sentence: input.sentence.clone(),
            arithmetic: self.compute_arithmetic(input.number),
            strings: Self::compute_strings(&input.sentence),
            condition: Self::classify(input.number),
            sequence: self.generate_sequence(input.number),
            greeting: Self::build_greeting(&input.name),
            tags: input.tags.clone(),
            tag_count: Self::count_tags(&input.tags),
        };
        debug!(
            number = input.number,
            classification = ?bundle.condition.classification,
            sequence_len = bundle.sequence.len(),
            tag_count = bundle.tag_count,
            "computed result bundle"
        );
        bundle
    }

    /// Combines the base value with `number`
    ///
    /// Division by zero yields [`Quotient::Infinite`] instead of failing.
    #[must_use]
    pub fn compute_arithmetic(&self, number: f64) -> ArithmeticResult {
        let base = self.settings.base_number;
        let quotient = if number == 0.0 {
            Quotient::Infinite
        } else {
            Quotient::Finite(base / number)
        };
        ArithmeticResult {
            sum: base + number,
            difference: base - number,
            product: base * number,
            quotient,
        }
    }

    /// Upper- and lower-cases the sentence
    #[must_use]
    pub fn compute_strings(sentence: &str) -> StringResult {
        StringResult {
            uppercase: sentence.to_uppercase(),
            lowercase: sentence.to_lowercase(),
        }
    }

    /// Classifies the sign of `number`
    #[must_use]
    pub fn classify(number: f64) -> ConditionResult {
        let classification = if number > 0.0 {
            Classification::Positive
        } else if number < 0.0 {
            Classification::Negative
        } else {
            Classification::Zero
        };
        ConditionResult { classification }
    }

    /// Counts from 1 up to `min(floor(|number|), cap)`
    ///
    /// This is magnitude-based: a negative number still produces a
    /// non-empty sequence here. Hiding it is the display layer's job.
    #[must_use]
    pub fn generate_sequence(&self, number: f64) -> SequenceResult {
        let cap = self.settings.sequence_cap;
        let magnitude = number.abs().floor();
        let n = if magnitude >= f64::from(cap) {
            cap
        } else {
            magnitude as u32
        };
        SequenceResult((1..=n).collect())
    }

    /// Formats the greeting
    #[must_use]
    pub fn build_greeting(name: &str) -> String {
        format!("Hello, {name}!")
    }

    /// Counts the tags
    #[must_use]
    pub fn count_tags(tags: &[String]) -> usize {
        tags.len()
    }
}
