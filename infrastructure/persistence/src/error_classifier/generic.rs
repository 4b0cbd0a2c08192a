use business::domain::errors::{AppError, ErrorKind};

/// Client detail attached to every not-found failure.
pub const NOT_FOUND_DETAIL: &str = "item not found with specified identifier/field";

const ROW_MAPPING_HINT: &str =
    "repository: fatal programming error: row type does not match the selected columns";
const UNCAUGHT_HINT: &str = "repository: fatal uncaught db error";

/// Converts driver failures into application errors at the repository boundary.
pub trait DbErrorClassifier: Send + Sync {
    fn classify(&self, err: sqlx::Error, debug: &str) -> AppError;
}

/// Classifies the error branch of a driver result, leaving `Ok` untouched.
pub trait ClassifyExt<T> {
    fn classify_err(self, classifier: &dyn DbErrorClassifier, debug: &str) -> Result<T, AppError>;
}

impl<T> ClassifyExt<T> for Result<T, sqlx::Error> {
    fn classify_err(self, classifier: &dyn DbErrorClassifier, debug: &str) -> Result<T, AppError> {
        self.map_err(|err| classifier.classify(err, debug))
    }
}

pub fn not_found() -> AppError {
    ErrorKind::UnknownResource.with_message(NOT_FOUND_DETAIL)
}

/// Outcome of the driver-level pass. Unrecognized errors are handed back untouched so a
/// more specific classifier can inspect them.
#[derive(Debug)]
pub enum Classified {
    Recognized(AppError),
    Unrecognized(sqlx::Error),
}

/// Driver failure categories shared by every sqlx backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverFailure {
    RecordNotFound,
    Transaction,
    InvalidStatement,
    RowMapping,
}

impl DriverFailure {
    fn of(err: &sqlx::Error) -> Option<Self> {
        match err {
            sqlx::Error::RowNotFound => Some(DriverFailure::RecordNotFound),
            sqlx::Error::BeginFailed | sqlx::Error::InvalidSavePointStatement => {
                Some(DriverFailure::Transaction)
            }
            sqlx::Error::TypeNotFound { .. } | sqlx::Error::Encode(_) => {
                Some(DriverFailure::InvalidStatement)
            }
            sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_) => Some(DriverFailure::RowMapping),
            _ => None,
        }
    }
}

/// Backend-independent classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlxErrorClassifier;

impl SqlxErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Recognizes the shared driver categories, first match wins.
    ///
    /// A missing record drops the driver error entirely; the remaining categories keep it
    /// as the cause. Row mapping failures are caller defects and carry a fixed hint
    /// instead of `debug`.
    pub fn try_classify(&self, err: sqlx::Error, debug: &str) -> Classified {
        let Some(failure) = DriverFailure::of(&err) else {
            return Classified::Unrecognized(err);
        };

        let app_err = match failure {
            DriverFailure::RecordNotFound => not_found(),
            DriverFailure::Transaction | DriverFailure::InvalidStatement => {
                ErrorKind::InternalError.wrap(err, debug)
            }
            DriverFailure::RowMapping => ErrorKind::InternalError.wrap(err, ROW_MAPPING_HINT),
        };
        Classified::Recognized(app_err)
    }
}

impl DbErrorClassifier for SqlxErrorClassifier {
    fn classify(&self, err: sqlx::Error, debug: &str) -> AppError {
        match self.try_classify(err, debug) {
            Classified::Recognized(app_err) => app_err,
            Classified::Unrecognized(err) => ErrorKind::InternalError.wrap(err, UNCAUGHT_HINT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cause_text(err: &AppError) -> String {
        err.cause().map(|c| format!("{c:#}")).unwrap_or_default()
    }

    #[test]
    fn should_map_missing_row_to_unknown_resource_without_cause() {
        for debug in ["", "userrepo: find user by id fail", "anything"] {
            let err = SqlxErrorClassifier.classify(sqlx::Error::RowNotFound, debug);

            assert_eq!(err.kind(), ErrorKind::UnknownResource);
            assert_eq!(
                err.message(),
                "Requested resource not available: item not found with specified identifier/field"
            );
            assert!(err.cause().is_none());
        }
    }

    #[test]
    fn should_wrap_transaction_failure_with_debug_message() {
        let err = SqlxErrorClassifier.classify(sqlx::Error::BeginFailed, "userrepo: follow fail");

        assert_eq!(err.kind(), ErrorKind::InternalError);
        assert_eq!(err.message(), "Internal Server Error");
        assert!(cause_text(&err).starts_with("userrepo: follow fail"));
    }

    #[test]
    fn should_wrap_invalid_statement_with_debug_message() {
        let err = SqlxErrorClassifier.classify(
            sqlx::Error::TypeNotFound {
                type_name: "citext".to_string(),
            },
            "userrepo: insert one user fail",
        );

        assert_eq!(err.kind(), ErrorKind::InternalError);
        assert!(cause_text(&err).starts_with("userrepo: insert one user fail"));
    }

    #[test]
    fn should_mark_row_mapping_failure_as_programming_defect() {
        let err = SqlxErrorClassifier.classify(
            sqlx::Error::ColumnNotFound("profile_img_url".to_string()),
            "userrepo: find user by id fail",
        );

        assert_eq!(err.kind(), ErrorKind::InternalError);
        let cause = cause_text(&err);
        assert!(cause.starts_with(ROW_MAPPING_HINT));
        assert!(!cause.contains("find user by id fail"));
    }

    #[test]
    fn should_wrap_unrecognized_error_with_uncaught_hint() {
        let err = SqlxErrorClassifier.classify(sqlx::Error::PoolTimedOut, "userrepo: whatever");

        assert_eq!(err.kind(), ErrorKind::InternalError);
        assert!(cause_text(&err).starts_with(UNCAUGHT_HINT));
    }

    #[test]
    fn should_hand_back_unrecognized_error_untouched() {
        let classified =
            SqlxErrorClassifier.try_classify(sqlx::Error::Protocol("bad packet".to_string()), "x");

        match classified {
            Classified::Unrecognized(sqlx::Error::Protocol(msg)) => assert_eq!(msg, "bad packet"),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn should_pass_ok_through_classify_err() {
        let ok: Result<u64, sqlx::Error> = Ok(7);
        assert_eq!(ok.classify_err(&SqlxErrorClassifier, "unused").unwrap(), 7);

        let missing: Result<u64, sqlx::Error> = Err(sqlx::Error::RowNotFound);
        let err = missing
            .classify_err(&SqlxErrorClassifier, "unused")
            .unwrap_err();
        assert_eq!(err.http_status(), 404);
    }
}
