//! Input validators for the interactive prompts
//!
//! Validators come in two flavors: plain predicates for callers that only
//! need a yes/no, and prompt-facing variants returning `Result<(), String>`
//! so the prompt can show a message and re-ask.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// npm-style package name: optional `@scope/` prefix, then lowercase
/// alphanumerics with `-`, `.`, `_`, `~`.
const PACKAGE_NAME_PATTERN: &str = r"^(@[a-z0-9-*~][a-z0-9-*._~]*/)?[a-z0-9-~][a-z0-9-._~]*$";

fn package_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PACKAGE_NAME_PATTERN).expect("pattern compiles"))
}

/// True when no directory already exists at `name` resolved against the
/// current directory. A plain file at the path does not block the name.
pub fn is_dir_name_free(name: &str) -> bool {
    !Path::new(name).is_dir()
}

/// True when `name` is a syntactically valid package identifier.
pub fn is_valid_package_name(name: &str) -> bool {
    package_name_regex().is_match(name)
}

/// Prompt validator: the value must name a directory that does not exist yet.
pub fn dir_name_free(input: &str) -> Result<(), String> {
    if is_dir_name_free(input) {
        Ok(())
    } else {
        Err(format!("'{input}' already exists here"))
    }
}

/// Prompt validator: the value must be a valid package identifier.
pub fn package_name(input: &str) -> Result<(), String> {
    if is_valid_package_name(input) {
        Ok(())
    } else {
        Err(format!(
            "'{input}' is not a valid package name \
            (lowercase letters, digits, `-._~`, optionally `@scope/name`)"
        ))
    }
}

/// Combine two validators into one that requires both to accept.
///
/// The first failure wins; the second validator is not consulted for an
/// input the first already rejected.
pub fn all_of<A, B>(first: A, second: B) -> impl Fn(&str) -> Result<(), String>
where
    A: Fn(&str) -> Result<(), String>,
    B: Fn(&str) -> Result<(), String>,
{
    move |input| first(input).and_then(|()| second(input))
}
