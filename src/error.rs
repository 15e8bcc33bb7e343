//! Structured failure descriptor.
//!
//! This module provides [`ErrorInfo`], the immutable error value carried by
//! the failure side of [`Outcome`](crate::outcome::Outcome). An `ErrorInfo`
//! holds a positive numeric `code`, a short `name`, a human-readable
//! `message`, and optionally the underlying error it was captured from.
//!
//! Expected failures travel as `ErrorInfo` data through combinator chains;
//! they are never raised. Violating an `ErrorInfo` precondition (blank
//! message or name, zero code) is a programming error and panics at the
//! violating call instead of producing a failure value.
//!
//! # Examples
//!
//! ```rust
//! use combinar::error::ErrorInfo;
//!
//! let original = ErrorInfo::new("boom");
//! let updated = original.with_code(42);
//!
//! assert_eq!(updated.code(), 42);
//! assert_eq!(updated.message(), "boom");
//! // Functional update: the original is untouched.
//! assert_eq!(original.code(), ErrorInfo::DEFAULT_CODE);
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::maybe::Maybe;

/// An immutable failure descriptor.
///
/// `ErrorInfo` describes one failure: a positive `code`, a non-empty `name`
/// classifying the failure, a non-empty `message`, and optionally the
/// underlying error (`cause`) it was derived from.
///
/// Instances are created through factories and updated through the `with_*`
/// family, which returns a new instance with one field replaced and the
/// changed field re-validated.
///
/// # Equality
///
/// `code`, `name`, and `message` compare structurally. Causes compare by
/// `Arc` pointer identity, so clones of the same descriptor compare equal,
/// and two descriptors capturing distinct underlying errors do not.
///
/// # Examples
///
/// ```rust
/// use combinar::error::ErrorInfo;
///
/// let not_found = ErrorInfo::coded(404, "user not found").with_name("NotFound");
/// assert_eq!(not_found.code(), 404);
/// assert_eq!(not_found.name(), "NotFound");
/// ```
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    code: u32,
    name: String,
    message: String,
    cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl ErrorInfo {
    /// The sentinel code used when no specific code is supplied.
    pub const DEFAULT_CODE: u32 = 1;

    /// The name used when no specific name is supplied.
    pub const DEFAULT_NAME: &'static str = "Error";

    // =========================================================================
    // Factories
    // =========================================================================

    /// Creates an `ErrorInfo` from a message, with the default code and name.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty or blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    ///
    /// let error = ErrorInfo::new("boom");
    /// assert_eq!(error.code(), ErrorInfo::DEFAULT_CODE);
    /// assert_eq!(error.name(), ErrorInfo::DEFAULT_NAME);
    /// assert_eq!(error.message(), "boom");
    /// ```
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: Self::DEFAULT_CODE,
            name: Self::DEFAULT_NAME.to_string(),
            message: validated_text("message", message.into()),
            cause: None,
        }
    }

    /// Creates an `ErrorInfo` from a code and a message.
    ///
    /// # Panics
    ///
    /// Panics if `code` is zero or `message` is empty or blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    ///
    /// let error = ErrorInfo::coded(500, "internal failure");
    /// assert_eq!(error.code(), 500);
    /// ```
    #[must_use]
    pub fn coded(code: u32, message: impl Into<String>) -> Self {
        Self::new(message).with_code(code)
    }

    /// Creates an `ErrorInfo` from a name and a message.
    ///
    /// # Panics
    ///
    /// Panics if `name` or `message` is empty or blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    ///
    /// let error = ErrorInfo::named("Validation", "age must be positive");
    /// assert_eq!(error.name(), "Validation");
    /// ```
    #[must_use]
    pub fn named(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(message).with_name(name)
    }

    /// Creates an `ErrorInfo` capturing an underlying error.
    ///
    /// The message is taken from the error's `Display` output and the error
    /// itself is retained as the cause, observable through
    /// [`try_cause`](Self::try_cause) and [`Error::source`].
    ///
    /// # Panics
    ///
    /// Panics if the error's `Display` output is empty or blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    ///
    /// let parse_error = "abc".parse::<i32>().unwrap_err();
    /// let error = ErrorInfo::from_cause(parse_error);
    /// assert!(error.has_cause());
    /// assert_eq!(error.message(), "invalid digit found in string");
    /// ```
    #[must_use]
    pub fn from_cause<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let message = error.to_string();
        Self {
            code: Self::DEFAULT_CODE,
            name: Self::DEFAULT_NAME.to_string(),
            message: validated_text("message", message),
            cause: Some(Arc::new(error)),
        }
    }

    /// Creates an `ErrorInfo` from an I/O error, deriving the code from the
    /// error's native OS error code when one is present.
    ///
    /// # Panics
    ///
    /// Panics if the error's `Display` output is empty or blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::io;
    /// use combinar::error::ErrorInfo;
    ///
    /// let io_error = io::Error::from_raw_os_error(2);
    /// let error = ErrorInfo::from_io(io_error);
    /// assert_eq!(error.code(), 2);
    /// assert!(error.has_cause());
    /// ```
    #[must_use]
    pub fn from_io(error: std::io::Error) -> Self {
        let code = error
            .raw_os_error()
            .and_then(|raw| u32::try_from(raw).ok())
            .filter(|raw| *raw > 0)
            .unwrap_or(Self::DEFAULT_CODE);
        Self::from_cause(error).with_code(code)
    }

    /// Creates an `ErrorInfo` from a panic payload.
    ///
    /// The message is extracted from `&str` and `String` payloads, the two
    /// shapes produced by `panic!`; any other payload, and any blank payload
    /// text, maps to a fixed message. This is the conversion applied at the
    /// deferred-computation trap boundary, so it never panics itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use combinar::error::ErrorInfo;
    ///
    /// let payload: Box<dyn Any + Send> = Box::new("exploded");
    /// let error = ErrorInfo::from_panic(payload.as_ref());
    /// assert_eq!(error.name(), "Panic");
    /// assert_eq!(error.message(), "exploded");
    /// ```
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let text = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            String::new()
        };
        // A blank payload would trip the message guard inside a trap arm.
        let message = if text.trim().is_empty() {
            "unknown panic payload".to_string()
        } else {
            text
        };
        Self::new(message).with_name("Panic")
    }

    // =========================================================================
    // Functional Updates
    // =========================================================================

    /// Returns a copy of this descriptor with the code replaced.
    ///
    /// # Panics
    ///
    /// Panics if `code` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    ///
    /// let error = ErrorInfo::new("boom").with_code(42);
    /// assert_eq!(error.code(), 42);
    /// assert_eq!(error.message(), "boom");
    /// ```
    #[must_use]
    pub fn with_code(&self, code: u32) -> Self {
        Self {
            code: validated_code(code),
            ..self.clone()
        }
    }

    /// Returns a copy of this descriptor with the name replaced.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or blank.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: validated_text("name", name.into()),
            ..self.clone()
        }
    }

    /// Returns a copy of this descriptor with the message replaced.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty or blank.
    #[must_use]
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            message: validated_text("message", message.into()),
            ..self.clone()
        }
    }

    /// Returns a copy of this descriptor with the cause replaced.
    #[must_use]
    pub fn with_cause<E>(&self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            cause: Some(Arc::new(error)),
            ..self.clone()
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The numeric code classifying this failure. Always positive.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// The short name classifying this failure. Never empty.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human-readable message. Never empty.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this descriptor carries an underlying error.
    #[inline]
    #[must_use]
    pub const fn has_cause(&self) -> bool {
        self.cause.is_some()
    }

    /// Returns the captured underlying error, if one is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinar::error::ErrorInfo;
    ///
    /// let plain = ErrorInfo::new("boom");
    /// assert!(plain.try_cause().is_none());
    ///
    /// let captured = ErrorInfo::from_cause("abc".parse::<i32>().unwrap_err());
    /// assert!(captured.try_cause().is_some());
    /// ```
    #[must_use]
    pub fn try_cause(&self) -> Maybe<Arc<dyn Error + Send + Sync>> {
        match &self.cause {
            Some(cause) => Maybe::Some(Arc::clone(cause)),
            None => Maybe::None,
        }
    }
}

impl PartialEq for ErrorInfo {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (&self.cause, &other.cause) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        };
        self.code == other.code
            && self.name == other.name
            && self.message == other.message
            && same_cause
    }
}

impl Eq for ErrorInfo {}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}({}): {}", self.name, self.code, self.message)
    }
}

impl Error for ErrorInfo {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn Error + 'static))
    }
}

// Descriptors cross combinator chains and async boundaries freely.
static_assertions::assert_impl_all!(ErrorInfo: Send, Sync, Clone);

// =============================================================================
// Validation Guards
// =============================================================================

fn validated_code(code: u32) -> u32 {
    assert!(code > 0, "ErrorInfo code must be positive, got 0");
    code
}

fn validated_text(field: &str, value: String) -> String {
    assert!(
        !value.trim().is_empty(),
        "ErrorInfo {field} must not be empty or blank"
    );
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_applies_defaults() {
        let error = ErrorInfo::new("boom");
        assert_eq!(error.code(), ErrorInfo::DEFAULT_CODE);
        assert_eq!(error.name(), ErrorInfo::DEFAULT_NAME);
        assert_eq!(error.message(), "boom");
        assert!(!error.has_cause());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[should_panic(expected = "message must not be empty")]
    fn test_blank_message_panics(#[case] message: &str) {
        let _ = ErrorInfo::new(message);
    }

    #[rstest]
    #[should_panic(expected = "code must be positive")]
    fn test_zero_code_panics() {
        let _ = ErrorInfo::new("boom").with_code(0);
    }

    #[rstest]
    #[should_panic(expected = "name must not be empty")]
    fn test_blank_name_panics() {
        let _ = ErrorInfo::new("boom").with_name(" ");
    }

    #[rstest]
    fn test_with_code_leaves_original_unmodified() {
        let original = ErrorInfo::new("boom");
        let updated = original.with_code(42);

        assert_eq!(updated.code(), 42);
        assert_eq!(updated.name(), original.name());
        assert_eq!(updated.message(), original.message());
        assert_eq!(original.code(), ErrorInfo::DEFAULT_CODE);
    }

    #[rstest]
    fn test_clone_compares_equal() {
        let error = ErrorInfo::from_cause("abc".parse::<i32>().unwrap_err());
        assert_eq!(error, error.clone());
    }

    #[rstest]
    fn test_distinct_causes_compare_unequal() {
        let first = ErrorInfo::from_cause("abc".parse::<i32>().unwrap_err());
        let second = ErrorInfo::from_cause("abc".parse::<i32>().unwrap_err());
        assert_ne!(first, second);
    }

    #[rstest]
    fn test_from_io_derives_native_code() {
        let error = ErrorInfo::from_io(std::io::Error::from_raw_os_error(13));
        assert_eq!(error.code(), 13);
        assert!(error.has_cause());
    }

    #[rstest]
    fn test_from_io_without_native_code_uses_default() {
        let error = ErrorInfo::from_io(std::io::Error::other("no raw code"));
        assert_eq!(error.code(), ErrorInfo::DEFAULT_CODE);
    }

    #[rstest]
    fn test_from_panic_extracts_string_payload() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("kaput".to_string());
        let error = ErrorInfo::from_panic(payload.as_ref());
        assert_eq!(error.message(), "kaput");
        assert_eq!(error.name(), "Panic");
    }

    #[derive(Debug)]
    struct SilentError;

    impl fmt::Display for SilentError {
        fn fmt(&self, _formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }

    impl Error for SilentError {}

    #[rstest]
    #[should_panic(expected = "message must not be empty")]
    fn test_from_cause_panics_on_a_blank_display_output() {
        let _ = ErrorInfo::from_cause(SilentError);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_from_panic_maps_blank_payload_to_fixed_message(#[case] text: &'static str) {
        let payload: Box<dyn std::any::Any + Send> = Box::new(text);
        let error = ErrorInfo::from_panic(payload.as_ref());
        assert_eq!(error.message(), "unknown panic payload");
        assert_eq!(error.name(), "Panic");
    }

    #[rstest]
    fn test_source_exposes_cause() {
        let error = ErrorInfo::from_cause("abc".parse::<i32>().unwrap_err());
        assert!(std::error::Error::source(&error).is_some());
    }
}
