//! Presence/absence helpers over [`Option`] and [`Result`].
//!
//! Lookups in this crate report a missing value with `None`. The
//! `value_or_panic` accessors are for callers that treat absence as a bug;
//! they panic with a fixed [`Violation`] message instead of an ad hoc one.

use core::fmt;

/// A contract violation. Each variant carries a fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// An index or stride outside the valid range.
    OutOfBounds,
    /// A value was required but absent.
    EmptyValue,
    /// A success value was required but the result held an error.
    ResultIsError,
    /// A key was required to be present in a map.
    KeyNotFound,
}

impl Violation {
    /// Returns the message for this violation.
    pub const fn message(self) -> &'static str {
        match self {
            Violation::OutOfBounds => "index out of bounds",
            Violation::EmptyValue => "empty value",
            Violation::ResultIsError => "result is error",
            Violation::KeyNotFound => "key not found",
        }
    }

    /// Panics with this violation's message.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{}", self.message())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Violation {}

/// Extension methods for [`Option`].
///
/// # Examples
///
/// ```rust
/// use chain_hash::value::OptionExt;
///
/// let present = Some(3);
/// assert!(present.is_present());
/// assert_eq!(present.value_or_panic(), 3);
///
/// let absent: Option<i32> = None;
/// assert_eq!(absent.value_or(7), 7);
/// ```
pub trait OptionExt<T> {
    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with [`Violation::EmptyValue`] if the option is `None`.
    fn value_or_panic(self) -> T;

    /// Returns the contained value or `default`.
    fn value_or(self, default: T) -> T;

    /// Returns the contained value or computes one from `f`.
    fn value_or_else(self, f: impl FnOnce() -> T) -> T;

    /// Returns `true` if a value is present.
    fn is_present(&self) -> bool;

    /// Returns `true` if no value is present.
    fn is_absent(&self) -> bool;

    /// Calls `f` with the value if one is present.
    fn if_present(self, f: impl FnOnce(T));

    /// Calls `f` if no value is present.
    fn if_absent(self, f: impl FnOnce());
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn value_or_panic(self) -> T {
        match self {
            Some(value) => value,
            None => Violation::EmptyValue.raise(),
        }
    }

    fn value_or(self, default: T) -> T {
        self.unwrap_or(default)
    }

    fn value_or_else(self, f: impl FnOnce() -> T) -> T {
        self.unwrap_or_else(f)
    }

    fn is_present(&self) -> bool {
        self.is_some()
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn if_present(self, f: impl FnOnce(T)) {
        if let Some(value) = self {
            f(value);
        }
    }

    fn if_absent(self, f: impl FnOnce()) {
        if self.is_none() {
            f();
        }
    }
}

/// Extension methods for [`Result`], mirroring [`OptionExt`] with success in
/// place of presence.
pub trait ResultExt<T, E> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`Violation::ResultIsError`] if the result is an error.
    fn value_or_panic(self) -> T;

    /// Returns the success value or `default`.
    fn value_or(self, default: T) -> T;

    /// Returns the success value or computes one from the error.
    fn value_or_else(self, f: impl FnOnce(E) -> T) -> T;

    /// Returns `true` for a success.
    fn is_success(&self) -> bool;

    /// Returns `true` for an error.
    fn is_error(&self) -> bool;

    /// Calls `f` with the success value, if any.
    fn if_success(self, f: impl FnOnce(T));

    /// Calls `f` with a reference to the error, if any.
    fn if_error(&self, f: impl FnOnce(&E));
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    fn value_or_panic(self) -> T {
        match self {
            Ok(value) => value,
            Err(_) => Violation::ResultIsError.raise(),
        }
    }

    fn value_or(self, default: T) -> T {
        self.unwrap_or(default)
    }

    fn value_or_else(self, f: impl FnOnce(E) -> T) -> T {
        self.unwrap_or_else(f)
    }

    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn is_error(&self) -> bool {
        self.is_err()
    }

    fn if_success(self, f: impl FnOnce(T)) {
        if let Ok(value) = self {
            f(value);
        }
    }

    fn if_error(&self, f: impl FnOnce(&E)) {
        if let Err(error) = self {
            f(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn option_accessors() {
        let present = Some(5);
        let absent: Option<i32> = None;

        assert!(present.is_present());
        assert!(absent.is_absent());
        assert_eq!(present.value_or(1), 5);
        assert_eq!(absent.value_or(1), 1);
        assert_eq!(absent.value_or_else(|| 9), 9);
    }

    #[test]
    fn option_side_effects() {
        let mut seen = 0;
        Some(4).if_present(|v| seen = v);
        assert_eq!(seen, 4);

        let mut called = false;
        Some(4).if_absent(|| called = true);
        assert!(!called);
        None::<i32>.if_absent(|| called = true);
        assert!(called);
    }

    #[test]
    #[should_panic(expected = "empty value")]
    fn empty_option_panics() {
        let absent: Option<u8> = None;
        absent.value_or_panic();
    }

    #[test]
    fn result_accessors() {
        let ok: Result<i32, &str> = Ok(2);
        let err: Result<i32, &str> = Err("boom");

        assert!(ok.is_success());
        assert!(err.is_error());
        assert_eq!(ok.value_or_panic(), 2);
        assert_eq!(err.value_or(0), 0);
        assert_eq!(err.value_or_else(|e| e.len() as i32), 4);

        let mut message = None;
        err.if_error(|e| message = Some(e.to_string()));
        assert_eq!(message.as_deref(), Some("boom"));

        let mut value = 0;
        ok.if_success(|v| value = v);
        assert_eq!(value, 2);
    }

    #[test]
    #[should_panic(expected = "result is error")]
    fn error_result_panics() {
        let err: Result<u8, ()> = Err(());
        err.value_or_panic();
    }

    #[test]
    fn violation_messages() {
        assert_eq!(Violation::OutOfBounds.to_string(), "index out of bounds");
        assert_eq!(Violation::KeyNotFound.to_string(), "key not found");
    }
}
