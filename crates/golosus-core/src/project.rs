//! The two-string input that drives a generation run.
//!
//! A [`ProjectSpec`] can only be built through [`ProjectSpec::new`], which
//! validates both fields. Values are then embedded verbatim into paths and
//! generated sources, so validation is the whole sanitization policy:
//! unsafe input is rejected, never escaped or rewritten.
//!
//! ## Rules
//!
//! - **name**: 1–100 characters from `[A-Za-z0-9._-]`, not starting with `.`
//!   or `-`, not ending with `.`, and not a Windows device name (`con`, `nul`,
//!   `com1`, ...). It becomes a single directory component and the last segment
//!   of the Go module path. Case is kept; the npm package name is lowercased
//!   by the catalog.
//! - **author**: 1–39 characters from `[A-Za-z0-9-]`, not starting or ending
//!   with `-` (the shape of a GitHub account name). It becomes the middle
//!   segment of the Go module path.

use crate::error::{GolosusError, Result};

/// Maximum length of a project name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of an author identifier.
pub const MAX_AUTHOR_LEN: usize = 39;

/// Validated project name and author identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    author: String,
}

impl ProjectSpec {
    /// Validate and build a spec. Surrounding whitespace is trimmed first.
    pub fn new(name: impl AsRef<str>, author: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        let author = author.as_ref().trim();
        validate_name(name)?;
        validate_author(author)?;
        Ok(Self {
            name: name.to_string(),
            author: author.to_string(),
        })
    }

    /// Project name; also the root directory of the generated tree.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Author identifier (GitHub account).
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Go module path of the generated project: `github.com/<author>/<name>`.
    pub fn module_path(&self) -> String {
        format!("github.com/{}/{}", self.author, self.name)
    }
}

/// Check a project name against the naming rules.
pub fn validate_name(name: &str) -> Result<()> {
    let reject = |reason: &str| {
        Err(GolosusError::InvalidInput {
            field: "project name",
            value: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if name.is_empty() {
        return reject("must not be empty");
    }
    if name.len() > MAX_NAME_LEN {
        return reject(&format!("must be at most {MAX_NAME_LEN} characters"));
    }
    if name.starts_with('.') || name.starts_with('-') {
        return reject("must not start with '.' or '-'");
    }
    if name.ends_with('.') {
        return reject("must not end with '.'");
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return reject(&format!(
            "contains '{}'; only letters, digits, '-', '_' and '.' are allowed",
            c.escape_default()
        ));
    }
    if is_reserved_device_name(name) {
        return reject("is a reserved device name on Windows");
    }
    Ok(())
}

/// Windows device names, reserved with any extension and in any case.
const RESERVED_DEVICE_NAMES: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7",
    "com8", "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

fn is_reserved_device_name(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or(name);
    RESERVED_DEVICE_NAMES
        .iter()
        .any(|reserved| stem.eq_ignore_ascii_case(reserved))
}

/// Check an author identifier against the naming rules.
pub fn validate_author(author: &str) -> Result<()> {
    let reject = |reason: &str| {
        Err(GolosusError::InvalidInput {
            field: "author",
            value: author.to_string(),
            reason: reason.to_string(),
        })
    };

    if author.is_empty() {
        return reject("must not be empty");
    }
    if author.len() > MAX_AUTHOR_LEN {
        return reject(&format!("must be at most {MAX_AUTHOR_LEN} characters"));
    }
    if author.starts_with('-') || author.ends_with('-') {
        return reject("must not start or end with '-'");
    }
    if let Some(c) = author
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
    {
        return reject(&format!(
            "contains '{}'; only letters, digits and '-' are allowed",
            c.escape_default()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_spec() {
        let spec = ProjectSpec::new("demo", "octocat").unwrap();
        assert_eq!(spec.name(), "demo");
        assert_eq!(spec.author(), "octocat");
        assert_eq!(spec.module_path(), "github.com/octocat/demo");
    }

    #[test]
    fn test_trims_whitespace() {
        let spec = ProjectSpec::new("  my-app\n", " octo-cat ").unwrap();
        assert_eq!(spec.name(), "my-app");
        assert_eq!(spec.author(), "octo-cat");
    }

    #[test]
    fn test_name_accepts_dots_and_underscores() {
        assert!(validate_name("web_app.v2").is_ok());
        assert!(validate_name("A1").is_ok());
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(matches!(
            ProjectSpec::new("", "octocat"),
            Err(GolosusError::InvalidInput { field: "project name", .. })
        ));
        assert!(matches!(
            ProjectSpec::new("demo", "   "),
            Err(GolosusError::InvalidInput { field: "author", .. })
        ));
    }

    #[test]
    fn test_name_rejects_path_components() {
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name(".").is_err());
        assert!(validate_name(".hidden").is_err());
        assert!(validate_name("-flag").is_err());
        assert!(validate_name("demo.").is_err());
        assert!(validate_name("demo..").is_err());
    }

    #[test]
    fn test_name_rejects_device_names() {
        for bad in ["con", "NUL", "Aux", "com1", "lpt9", "con.app", "PRN.web"] {
            assert!(validate_name(bad).is_err(), "accepted {bad:?}");
        }
        for ok in ["console", "nulls", "com10", "my-con", "auxiliary"] {
            assert!(validate_name(ok).is_ok(), "rejected {ok:?}");
        }
    }

    #[test]
    fn test_trailing_dot_never_reaches_module_path() {
        let err = ProjectSpec::new("demo.", "octocat").unwrap_err();
        assert!(err.to_string().contains("must not end with '.'"));
    }

    #[test]
    fn test_name_rejects_reserved_characters() {
        for bad in ["my app", "a:b", "a*b", "a?b", "a<b", "a|b", "a\"b", "né"] {
            assert!(validate_name(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_name_length_limit() {
        assert!(validate_name(&"a".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_name(&"a".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_author_rules() {
        assert!(validate_author("octo-cat").is_ok());
        assert!(validate_author("-octocat").is_err());
        assert!(validate_author("octocat-").is_err());
        assert!(validate_author("octo_cat").is_err());
        assert!(validate_author("octo.cat").is_err());
        assert!(validate_author("octo/cat").is_err());
        assert!(validate_author(&"a".repeat(MAX_AUTHOR_LEN + 1)).is_err());
    }

    #[test]
    fn test_error_message_names_offending_char() {
        let err = validate_name("a b").unwrap_err();
        assert!(err.to_string().contains("project name 'a b'"));
        assert!(err.to_string().contains("' '"));
    }
}
