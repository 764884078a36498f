//! Field-level name validation, applied after shape validation on create and
//! as the only validation on update.

use thiserror::Error;

/// Hard floor on name lengths, independent of the configured minimum.
pub const NAME_MIN_CHARS: usize = 3;

/// Configured character-length bounds for entity names.
#[derive(Debug, Clone, Copy)]
pub struct TextLimits {
    pub min: usize,
    pub max: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    // Upstream wording, kept so clients see a stable message.
    #[error("param cannot be empty")]
    TooShort,
    #[error("value must be at least {0} characters")]
    BelowMinimum(usize),
    #[error("value must be no longer than {0} characters")]
    AboveMaximum(usize),
}

/// Validates an entity name against the hard floor and the configured bounds.
///
/// Returns an explicit result rather than signalling through a panic or a
/// shared error sink, so every handler consumes failures uniformly.
pub fn validate_name(value: &str, limits: &TextLimits) -> Result<(), NameError> {
    let chars = value.chars().count();
    if chars < NAME_MIN_CHARS {
        return Err(NameError::TooShort);
    }
    if chars < limits.min {
        return Err(NameError::BelowMinimum(limits.min));
    }
    if chars > limits.max {
        return Err(NameError::AboveMaximum(limits.max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: TextLimits = TextLimits { min: 3, max: 10 };

    #[test]
    fn rejects_names_below_the_hard_floor() {
        assert_eq!(validate_name("", &LIMITS), Err(NameError::TooShort));
        assert_eq!(validate_name("ab", &LIMITS), Err(NameError::TooShort));
    }

    #[test]
    fn accepts_names_within_bounds() {
        assert_eq!(validate_name("Salt", &LIMITS), Ok(()));
        assert_eq!(validate_name("abc", &LIMITS), Ok(()));
        assert_eq!(validate_name("abcdefghij", &LIMITS), Ok(()));
    }

    #[test]
    fn configured_minimum_applies_above_the_floor() {
        let limits = TextLimits { min: 5, max: 10 };
        assert_eq!(
            validate_name("Salt", &limits),
            Err(NameError::BelowMinimum(5))
        );
    }

    #[test]
    fn rejects_names_above_the_maximum() {
        assert_eq!(
            validate_name("abcdefghijk", &LIMITS),
            Err(NameError::AboveMaximum(10))
        );
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // Three Cyrillic characters, six bytes.
        assert_eq!(validate_name("щих", &LIMITS), Ok(()));
    }
}
