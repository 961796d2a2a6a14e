//! Three-state outcome abstraction
//!
//! [`Outcome`] is the single vocabulary every layer above the orchestrator
//! uses to report results across the simulated asynchronous boundary: an
//! operation is pending, succeeded with a payload, or failed with a
//! [`MissionError`] and a display message. No layer re-invents its own
//! success/failure representation.
//!
//! It is a plain sum type with transform combinators, not a hierarchy:
//! `map` reshapes a success payload, `and_then` chains fallible steps
//! without nested unwrapping, and `fold` dispatches to exactly one handler.

use std::future::Future;

use roverlink_domain::MissionError;

/// Outcome of an operation that resolves asynchronously.
///
/// `Pending` is only ever a transient state; every mission eventually
/// resolves to `Success` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Operation not yet complete.
    Pending,
    /// Operation completed with a payload.
    Success(T),
    /// Operation failed; `message` defaults to the cause's own display.
    Error {
        cause: MissionError,
        message: String,
    },
}

impl<T> Outcome<T> {
    /// Failed outcome with the message taken from the cause.
    #[must_use]
    pub fn error(cause: MissionError) -> Self {
        let message = cause.to_string();
        Outcome::Error { cause, message }
    }

    /// Failed outcome with an explicit display message.
    #[must_use]
    pub fn error_with_message(cause: MissionError, message: impl Into<String>) -> Self {
        Outcome::Error {
            cause,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }

    /// The success payload, if any.
    #[must_use]
    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure cause, if any.
    #[must_use]
    pub fn error_cause(&self) -> Option<&MissionError> {
        match self {
            Outcome::Error { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// Transform a success payload; `Error` and `Pending` pass through
    /// unchanged.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Pending => Outcome::Pending,
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Error { cause, message } => Outcome::Error { cause, message },
        }
    }

    /// Replace a success with an entirely new outcome, chaining fallible
    /// steps without nested unwrapping.
    #[must_use]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Pending => Outcome::Pending,
            Outcome::Success(value) => f(value),
            Outcome::Error { cause, message } => Outcome::Error { cause, message },
        }
    }

    /// Dispatch to exactly one handler based on the state.
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_error: impl FnOnce(MissionError, String) -> R,
        on_pending: impl FnOnce() -> R,
    ) -> R {
        match self {
            Outcome::Pending => on_pending(),
            Outcome::Success(value) => on_success(value),
            Outcome::Error { cause, message } => on_error(cause, message),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<MissionError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::error(err.into()),
        }
    }
}

/// Await a fallible operation and convert its result into an [`Outcome`].
///
/// Any returned failure becomes `Outcome::Error`; I/O and parse failures
/// arrive here already classified into the transport-flavoured
/// `MissionError` kinds via their `From` conversions, so nothing escapes
/// as an unhandled fault.
pub async fn guard<T, E, F>(operation: F) -> Outcome<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<MissionError>,
{
    operation.await.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_error() -> MissionError {
        MissionError::InvalidDirectionChar { raw: "X".into() }
    }

    #[test]
    fn test_error_message_defaults_to_cause_display() {
        let outcome: Outcome<()> = Outcome::error(sample_error());
        let Outcome::Error { cause, message } = outcome else {
            panic!("expected error state");
        };
        assert_eq!(message, cause.to_string());
    }

    #[test]
    fn test_map_transforms_only_success() {
        let success = Outcome::Success(2).map(|n| n * 10);
        assert_eq!(success, Outcome::Success(20));

        let pending: Outcome<i32> = Outcome::Pending;
        assert!(pending.map(|n| n * 10).is_pending());

        let error: Outcome<i32> = Outcome::error(sample_error());
        let mapped = error.map(|n| n * 10);
        assert_eq!(mapped.error_cause(), Some(&sample_error()));
    }

    #[test]
    fn test_and_then_chains_and_short_circuits() {
        let chained = Outcome::Success(3).and_then(|n| Outcome::Success(n + 1));
        assert_eq!(chained, Outcome::Success(4));

        let failed = Outcome::Success(3).and_then(|_: i32| Outcome::<i32>::error(sample_error()));
        assert!(failed.is_error());

        let from_error: Outcome<i32> =
            Outcome::<i32>::error(sample_error()).and_then(|n| Outcome::Success(n));
        assert!(from_error.is_error());
    }

    #[test]
    fn test_fold_dispatches_to_exactly_one_handler() {
        let describe = |outcome: Outcome<i32>| {
            outcome.fold(
                |v| format!("success {v}"),
                |_, msg| format!("error {msg}"),
                || "pending".to_string(),
            )
        };
        assert_eq!(describe(Outcome::Success(7)), "success 7");
        assert_eq!(describe(Outcome::Pending), "pending");
        assert!(describe(Outcome::error(sample_error())).starts_with("error "));
    }

    #[test]
    fn test_from_result() {
        let ok: Outcome<i32> = Ok::<_, MissionError>(5).into();
        assert_eq!(ok, Outcome::Success(5));
        let err: Outcome<i32> = Err::<i32, _>(sample_error()).into();
        assert!(err.is_error());
    }

    #[tokio::test]
    async fn test_guard_wraps_async_results() {
        let ok = guard(async { Ok::<_, MissionError>(41) }).await;
        assert_eq!(ok, Outcome::Success(41));

        let err = guard(async { Err::<i32, _>(sample_error()) }).await;
        assert_eq!(err.error_cause(), Some(&sample_error()));
    }

    #[tokio::test]
    async fn test_guard_classifies_io_failures() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer gone");
        let outcome = guard(async { Err::<(), _>(io_err) }).await;
        assert!(matches!(
            outcome.error_cause(),
            Some(MissionError::ExecutionFailure { .. })
        ));
    }
}
