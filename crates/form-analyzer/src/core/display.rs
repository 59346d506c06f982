//! Display formatting shared by every front end
//!
//! Number formatting follows the rules of the page the analyzer grew out of:
//! integers print without a fraction, the quotient is fixed to two places
//! with ties rounded away from zero.

use serde::Serialize;

use crate::core::{ResultBundle, SequenceResult};

/// Shown in place of the sequence when there is nothing to count
pub const EMPTY_SEQUENCE_MESSAGE: &str = "No numbers to display (enter a positive number)";

/// Extra digits requested before rounding, enough to see exact ties
const GUARD_DIGITS: usize = 30;

/// Formats a number the way the page shows it
///
/// Integers print without a fraction (`49`), other values with the shortest
/// exact representation (`3.5`). Very large and very small magnitudes switch
/// to exponent form (`1e+21`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return non_finite(value).to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let s = format!("{value:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{value}")
}

/// Formats `value` with exactly `digits` fraction digits
///
/// Ties round away from zero (`0.125` gives `0.13`), and a negative value
/// that rounds to zero keeps its sign (`-0.00`). Magnitudes of `1e21` and
/// above fall back to [`format_number`].
#[must_use]
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }
    if value.abs() >= 1e21 {
        return format_number(value);
    }

    let expanded = format!("{:.*}", digits + GUARD_DIGITS, value.abs());
    let (int_part, frac_part) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    if round_up {
        increment_decimal(&mut kept);
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(&kept[..split]));
    if digits > 0 {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(&kept[split..]));
    }
    out
}

fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

/// How the counting sequence is shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SequenceDisplay {
    /// Nothing to show
    Empty {
        /// Placeholder text
        message: String,
    },
    /// Numbers to show, one per line
    Numbers {
        /// The numbers, ascending
        numbers: Vec<u32>,
        /// Trailing "... and N more numbers" note when the cap cut the list
        overflow: Option<String>,
    },
}

impl SequenceDisplay {
    /// Applies the display rules to a computed sequence
    ///
    /// A non-positive `original_number` always shows as empty, even though
    /// the computed sequence for a negative number is not.
    #[must_use]
    pub fn from_sequence(sequence: &SequenceResult, original_number: f64, cap: u32) -> Self {
        if sequence.is_empty() || original_number <= 0.0 {
            return Self::Empty {
                message: EMPTY_SEQUENCE_MESSAGE.to_string(),
            };
        }
        let cap = f64::from(cap);
        let overflow = (original_number > cap).then(|| {
            format!(
                "... and {} more numbers",
                format_number(original_number - cap)
            )
        });
        Self::Numbers {
            numbers: sequence.numbers().to_vec(),
            overflow,
        }
    }

    /// Returns true for the empty placeholder
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Text lines in display order
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Empty { message } => vec![message.clone()],
            Self::Numbers { numbers, overflow } => numbers
                .iter()
                .map(u32::to_string)
                .chain(overflow.iter().cloned())
                .collect(),
        }
    }
}

/// Label shown for a tag chip
#[must_use]
pub fn tag_label(tag: &str) -> String {
    format!("🍎 {tag}")
}

/// Counts down from `start` to zero inclusive
pub fn countdown(start: u32) -> impl Iterator<Item = u32> {
    (0..=start).rev()
}

/// Page element ids the results are written to
pub mod ids {
    /// Echo of the input number
    pub const USER_NUMBER: &str = "displayUserNumber";
    /// Sum
    pub const SUM: &str = "sumResult";
    /// Difference
    pub const DIFFERENCE: &str = "differenceResult";
    /// Product
    pub const PRODUCT: &str = "productResult";
    /// Quotient
    pub const QUOTIENT: &str = "quotientResult";
    /// Echo of the sentence
    pub const ORIGINAL_SENTENCE: &str = "originalSentence";
    /// Upper-cased sentence
    pub const UPPERCASE: &str = "uppercaseResult";
    /// Lower-cased sentence
    pub const LOWERCASE: &str = "lowercaseResult";
    /// Classification, if/else form
    pub const IF_RESULT: &str = "ifResult";
    /// Classification, conditional-expression form
    pub const TERNARY_RESULT: &str = "ternaryResult";
    /// Container for the counting sequence
    pub const SEQUENCE: &str = "forLoopResult";
    /// Greeting
    pub const GREETING: &str = "greetingResult";
    /// Container for the tag chips
    pub const TAGS: &str = "fruitsDisplay";
    /// Tag count
    pub const TAG_COUNT: &str = "arrayLength";
    /// Section revealed once results exist
    pub const RESULTS_SECTION: &str = "resultsSection";
    /// Analyze button
    pub const ANALYZE_BUTTON: &str = "analyzeBtn";
}

/// Display texts for one result bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    /// Input number
    pub user_number: String,
    /// Sum
    pub sum: String,
    /// Difference
    pub difference: String,
    /// Product
    pub product: String,
    /// Quotient or sentinel
    pub quotient: String,
    /// Sentence as entered (trimmed)
    pub original_sentence: String,
    /// Upper-cased sentence
    pub uppercase: String,
    /// Lower-cased sentence
    pub lowercase: String,
    /// Classification sentence
    pub classification: String,
    /// Counting sequence after the display rules
    pub sequence: SequenceDisplay,
    /// Greeting
    pub greeting: String,
    /// Tag chip labels
    pub tag_labels: Vec<String>,
    /// Tag count
    pub tag_count: String,
}

impl ResultView {
    /// Renders a bundle, applying the sequence display rules with `cap`
    #[must_use]
    pub fn from_bundle(bundle: &ResultBundle, cap: u32) -> Self {
        let arithmetic = &bundle.arithmetic;
        Self {
            user_number: format_number(bundle.number),
            sum: format_number(arithmetic.sum),
            difference: format_number(arithmetic.difference),
            product: format_number(arithmetic.product),
            quotient: arithmetic.quotient.to_string(),
            original_sentence: bundle.sentence.clone(),
            uppercase: bundle.strings.uppercase.clone(),
            lowercase: bundle.strings.lowercase.clone(),
            classification: bundle.condition.classification.to_string(),
            sequence: SequenceDisplay::from_sequence(&bundle.sequence, bundle.number, cap),
            greeting: bundle.greeting.clone(),
            tag_labels: bundle.tags.iter().map(|t| tag_label(t)).collect(),
            tag_count: bundle.tag_count.to_string(),
        }
    }

    /// Plain-text elements as `(element id, text)` pairs
    ///
    /// The sequence and tag containers hold child elements and are not
    /// listed here.
    #[must_use]
    pub fn text_entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            (ids::USER_NUMBER, self.user_number.as_str()),
            (ids::SUM, self.sum.as_str()),
            (ids::DIFFERENCE, self.difference.as_str()),
            (ids::PRODUCT, self.product.as_str()),
            (ids::QUOTIENT, self.quotient.as_str()),
            (ids::ORIGINAL_SENTENCE, self.original_sentence.as_str()),
            (ids::UPPERCASE, self.uppercase.as_str()),
            (ids::LOWERCASE, self.lowercase.as_str()),
            (ids::IF_RESULT, self.classification.as_str()),
            (ids::TERNARY_RESULT, self.classification.as_str()),
            (ids::GREETING, self.greeting.as_str()),
            (ids::TAG_COUNT, self.tag_count.as_str()),
        ]
    }

    /// Text of one element by id
    #[must_use]
    pub fn text(&self, element_id: &str) -> Option<&str> {
        self.text_entries()
            .into_iter()
            .find(|(id, _)| *id == element_id)
            .map(|(_, text)| text)
    }
}
