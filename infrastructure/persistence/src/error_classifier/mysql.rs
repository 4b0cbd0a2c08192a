use std::sync::LazyLock;

use regex::{Captures, Regex};
use sqlx::mysql::MySqlDatabaseError;

use business::domain::errors::{AppError, ErrorKind};

use super::generic::{Classified, DbErrorClassifier, SqlxErrorClassifier};

/// `Error 1062: Duplicate entry '<value>' for key '<field>'`
static DUPLICATE_ENTRY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^Error (?P<code>\d{4}): Duplicate entry '(?P<value>.*)' for key '(?P<field>[^']+)'$")
        .ok()
});

/// `Error 1406: Data too long for column '<field>' at row <n>`
static DATA_TOO_LONG: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"Error (?P<code>\d{4}): Data too long for column '(?P<field>[^']*)' at row (?P<row>\d+)$")
        .ok()
});

/// MySQL classifier. Runs the backend-independent pass first and only inspects the
/// server message when that pass does not recognize the failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlErrorClassifier {
    generic: SqlxErrorClassifier,
}

impl MySqlErrorClassifier {
    pub fn new() -> Self {
        Self {
            generic: SqlxErrorClassifier::new(),
        }
    }

    /// Matches a rendered server message against the known constraint violations.
    pub fn classify_message(&self, message: &str) -> Option<AppError> {
        if let Some(caps) = captures(Option::as_ref(&DUPLICATE_ENTRY), message) {
            let field = named_group(&caps, "field");
            return Some(
                ErrorKind::InvalidParam.with_message(format_args!("conflict duplicate {field}")),
            );
        }

        if let Some(caps) = captures(Option::as_ref(&DATA_TOO_LONG), message) {
            let field = named_group(&caps, "field");
            return Some(
                ErrorKind::InvalidParam
                    .with_message(format_args!("data too long for {field} field")),
            );
        }

        None
    }
}

impl DbErrorClassifier for MySqlErrorClassifier {
    fn classify(&self, err: sqlx::Error, debug: &str) -> AppError {
        let err = match self.generic.try_classify(err, debug) {
            Classified::Recognized(app_err) => return app_err,
            Classified::Unrecognized(err) => err,
        };

        if let Some(message) = server_message(&err)
            && let Some(app_err) = self.classify_message(&message)
        {
            return app_err;
        }

        ErrorKind::InternalError.wrap(err, debug)
    }
}

fn captures<'t>(pattern: Option<&Regex>, text: &'t str) -> Option<Captures<'t>> {
    pattern.and_then(|re| re.captures(text))
}

/// A group that did not participate in the match reads as an empty string.
fn named_group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Renders a database error as `Error <number>: <message>`.
///
/// MySQL reports its numeric code through [`MySqlDatabaseError::number`]; other
/// implementations fall back to their generic code.
fn server_message(err: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };

    let number = db_err
        .try_downcast_ref::<MySqlDatabaseError>()
        .map(|mysql| mysql.number().to_string())
        .or_else(|| db_err.code().map(|code| code.into_owned()))
        .unwrap_or_default();

    Some(format!("Error {}: {}", number, db_err.message()))
}
