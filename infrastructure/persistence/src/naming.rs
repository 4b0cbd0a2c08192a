use std::sync::LazyLock;

use regex::Regex;

/// An uppercase letter opening a lowercase run, preceded by anything.
static FIRST_CAP: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").ok());
/// An uppercase letter right after a lowercase letter or digit.
static ALL_CAP: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").ok());

/// Converts a mixed-case identifier to its column name, `ProfileImgURL` -> `profile_img_url`.
///
/// An uppercase run is kept together until the letter that opens the next lowercase word.
pub fn to_snake_case(ident: &str) -> String {
    let mut snake = ident.to_string();
    for pattern in [&FIRST_CAP, &ALL_CAP] {
        if let Some(re) = Option::as_ref(pattern) {
            snake = re.replace_all(&snake, "${1}_${2}").into_owned();
        }
    }
    snake.to_lowercase()
}
