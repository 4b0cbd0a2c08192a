use std::fmt;
use std::panic::Location;

/// Stable application error codes exposed to API clients.
pub const AUTHENTICATION_FAIL_CODE: u16 = 0x0041;
pub const UNKNOWN_RESOURCE_CODE: u16 = 0x0044;
/// Shares its value with [`AUTHENTICATION_FAIL_CODE`]. Existing clients already
/// read `0x0041` for bad input, so the value is kept as published.
pub const INVALID_PARAM_CODE: u16 = 0x0041;
pub const OPERATION_UNSUPPORTED_CODE: u16 = 0x0043;
pub const INTERNAL_ERROR_CODE: u16 = 0x0050;

/// Closed catalog of application failures.
///
/// Each kind fixes its HTTP status, stable code and client-safe summary. Individual
/// failures are [`AppError`] values derived from a kind; the kind itself never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognized credentials or keys.
    AuthenticationFail,
    /// Requested entity is absent or not publicly available.
    UnknownResource,
    /// Malformed client input.
    InvalidParam,
    /// Caller lacks the permission for the operation.
    OperationUnsupported,
    /// Unclassified or system failure.
    InternalError,
}

impl ErrorKind {
    pub const fn http_status(self) -> u16 {
        match self {
            ErrorKind::AuthenticationFail => 401,
            ErrorKind::UnknownResource => 404,
            ErrorKind::InvalidParam => 400,
            ErrorKind::OperationUnsupported => 403,
            ErrorKind::InternalError => 500,
        }
    }

    pub const fn code(self) -> u16 {
        match self {
            ErrorKind::AuthenticationFail => AUTHENTICATION_FAIL_CODE,
            ErrorKind::UnknownResource => UNKNOWN_RESOURCE_CODE,
            ErrorKind::InvalidParam => INVALID_PARAM_CODE,
            ErrorKind::OperationUnsupported => OPERATION_UNSUPPORTED_CODE,
            ErrorKind::InternalError => INTERNAL_ERROR_CODE,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::AuthenticationFail => "Invalid credentials or unrecognized keys",
            ErrorKind::UnknownResource => "Requested resource not available",
            ErrorKind::InvalidParam => "Invalid request parameters",
            ErrorKind::OperationUnsupported => "Insufficient Permission Required",
            ErrorKind::InternalError => "Internal Server Error",
        }
    }

    /// Fresh error of this kind carrying only the catalog message.
    pub fn error(self) -> AppError {
        AppError {
            kind: self,
            message: self.message().to_string(),
            cause: None,
        }
    }

    #[track_caller]
    pub fn wrap<E>(self, err: E, debug: impl fmt::Display) -> AppError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.error().wrap(err, debug)
    }

    /// Converts the error branch of `result` into this kind. `Ok` is returned untouched.
    #[track_caller]
    pub fn wrap_result<T, E>(self, result: Result<T, E>, debug: impl fmt::Display) -> Result<T, AppError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Ok(value),
            Err(err) => Err(self.wrap(err, debug)),
        }
    }

    pub fn with_message(self, extra: impl fmt::Display) -> AppError {
        self.error().with_message(extra)
    }
}

/// A single application-level failure.
///
/// `message` is safe to show to clients. `cause` keeps the underlying error with its
/// debug context and call site for server-side diagnostics only.
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    cause: Option<anyhow::Error>,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn http_status(&self) -> u16 {
        self.kind.http_status()
    }

    pub fn code(&self) -> u16 {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&anyhow::Error> {
        self.cause.as_ref()
    }

    /// Replaces the cause with `err`, annotated with `debug` and the caller location.
    #[track_caller]
    pub fn wrap<E>(self, err: E, debug: impl fmt::Display) -> AppError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let location = Location::caller();
        let cause = anyhow::Error::new(err).context(format!(
            "{debug} (at {}:{})",
            location.file(),
            location.line()
        ));
        AppError {
            kind: self.kind,
            message: self.message,
            cause: Some(cause),
        }
    }

    /// Appends `": extra"` to the client message.
    pub fn with_message(self, extra: impl fmt::Display) -> AppError {
        AppError {
            kind: self.kind,
            message: format!("{}: {}", self.message, extra),
            cause: self.cause,
        }
    }
}

impl From<ErrorKind> for AppError {
    fn from(kind: ErrorKind) -> Self {
        kind.error()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {:#}", self.message, cause),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io;

    fn io_error(msg: &str) -> io::Error {
        io::Error::other(msg.to_string())
    }

    #[test]
    fn should_expose_catalog_status_and_code_per_kind() {
        let table = [
            (ErrorKind::AuthenticationFail, 401, 0x0041),
            (ErrorKind::UnknownResource, 404, 0x0044),
            (ErrorKind::InvalidParam, 400, 0x0041),
            (ErrorKind::OperationUnsupported, 403, 0x0043),
            (ErrorKind::InternalError, 500, 0x0050),
        ];

        for (kind, status, code) in table {
            let err = kind.error();
            assert_eq!(err.http_status(), status);
            assert_eq!(err.code(), code);
            assert_eq!(err.message(), kind.message());
            assert!(err.cause().is_none());
        }
    }

    #[test]
    fn should_keep_invalid_param_code_equal_to_authentication_fail_code() {
        assert_eq!(
            ErrorKind::InvalidParam.code(),
            ErrorKind::AuthenticationFail.code()
        );
        assert_ne!(
            ErrorKind::InvalidParam.http_status(),
            ErrorKind::AuthenticationFail.http_status()
        );
    }

    #[test]
    fn should_append_extra_message_without_touching_catalog() {
        let err = ErrorKind::UnknownResource.with_message("user 42");

        assert_eq!(err.message(), "Requested resource not available: user 42");
        assert_eq!(
            ErrorKind::UnknownResource.message(),
            "Requested resource not available"
        );
    }

    #[test]
    fn should_format_appended_message() {
        let field = "idx_email";
        let err = ErrorKind::InvalidParam.with_message(format_args!("conflict duplicate {field}"));

        assert_eq!(
            err.message(),
            "Invalid request parameters: conflict duplicate idx_email"
        );
    }

    #[test]
    fn should_wrap_cause_with_debug_context_and_call_site() {
        let err = ErrorKind::InternalError.wrap(io_error("disk gone"), "userrepo: load fail");

        assert_eq!(err.kind(), ErrorKind::InternalError);
        assert_eq!(err.message(), "Internal Server Error");
        let cause = err.cause().map(|c| format!("{c:#}")).unwrap_or_default();
        assert!(cause.starts_with("userrepo: load fail (at "));
        assert!(cause.contains("errors.rs"));
        assert!(cause.ends_with("disk gone"));
    }

    #[test]
    fn should_keep_appended_message_when_wrapping() {
        let err = ErrorKind::InvalidParam
            .with_message("bad email")
            .wrap(io_error("boom"), "ctx");

        assert_eq!(err.message(), "Invalid request parameters: bad email");
        assert!(err.cause().is_some());
    }

    #[test]
    fn should_expose_cause_as_error_source() {
        use std::error::Error;

        let wrapped = ErrorKind::InternalError.wrap(io_error("inner"), "outer");
        let plain = ErrorKind::UnknownResource.error();

        assert!(wrapped.source().is_some());
        assert!(plain.source().is_none());
    }

    #[test]
    fn should_display_message_then_cause_chain() {
        let err = ErrorKind::InternalError.wrap(io_error("inner"), "outer");
        let rendered = err.to_string();

        assert!(rendered.starts_with("Internal Server Error: outer (at "));
        assert!(rendered.ends_with(": inner"));
        assert_eq!(
            ErrorKind::UnknownResource.error().to_string(),
            "Requested resource not available"
        );
    }

    proptest! {
        #[test]
        fn should_pass_ok_through_wrap_result_for_every_kind(value in any::<i64>(), debug in ".*") {
            for kind in [
                ErrorKind::AuthenticationFail,
                ErrorKind::UnknownResource,
                ErrorKind::InvalidParam,
                ErrorKind::OperationUnsupported,
                ErrorKind::InternalError,
            ] {
                let result = kind.wrap_result(Ok::<_, io::Error>(value), &debug);
                prop_assert!(matches!(result, Ok(v) if v == value));
            }
        }
    }

    #[test]
    fn should_wrap_error_branch_of_result() {
        let result: Result<(), AppError> =
            ErrorKind::InternalError.wrap_result(Err(io_error("nope")), "ctx");

        let err = result.expect_err("error branch must be wrapped");
        assert_eq!(err.kind(), ErrorKind::InternalError);
        assert!(err.cause().is_some());
    }
}
