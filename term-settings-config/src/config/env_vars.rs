//! Environment variable substitution for settings documents and path expansion
//! for profile paths.
//!
//! Only allowlisted variables (and `TERM_SETTINGS_*` / `LC_*` prefixed ones)
//! are resolved, so that a shared settings file cannot exfiltrate secrets
//! through `${SECRET_KEY}`. The same rule covers whole-document substitution
//! and profile path expansion ([`expand_path_with_allowlist`]); a document
//! lifts it for both with `allow_all_env_vars: true`.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `${VAR_NAME}` or `${VAR_NAME:-default_value}`.
static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-((?:[^}\\]|\\.)*))?}")
        .expect("env-var substitution regex is a compile-time constant and must be valid")
});

/// Matches Windows-style `%VAR_NAME%`.
static PERCENT_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([A-Za-z_][A-Za-z0-9_]*)%")
        .expect("percent-var regex is a compile-time constant and must be valid")
});

/// Matches `allow_all_env_vars: true` at the top level of a YAML document.
static ALLOW_ALL_ENV_VARS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^allow_all_env_vars:\s*true\s*$")
        .expect("allow_all_env_vars pre-scan regex is a compile-time constant and must be valid")
});

/// Environment variables that are safe to substitute in settings documents.
pub const ALLOWED_ENV_VARS: &[&str] = &[
    // User / home
    "HOME",
    "USER",
    "USERNAME",
    "LOGNAME",
    "USERPROFILE", // Windows
    // Shell / terminal
    "SHELL",
    "TERM",
    "LANG",
    "COLORTERM",
    // XDG directories
    "XDG_CONFIG_HOME",
    "XDG_DATA_HOME",
    "XDG_STATE_HOME",
    "XDG_CACHE_HOME",
    "XDG_RUNTIME_DIR",
    // System paths
    "PATH",
    "TMPDIR",
    "TEMP",
    "TMP",
    // Host
    "HOSTNAME",
    "HOST",
    // Windows paths
    "APPDATA",
    "LOCALAPPDATA",
    "SYSTEMROOT",
];

/// Check whether a variable name is on the substitution allowlist.
pub fn is_env_var_allowed(var_name: &str) -> bool {
    ALLOWED_ENV_VARS.contains(&var_name)
        || var_name.starts_with("TERM_SETTINGS_")
        || var_name.starts_with("LC_")
}

/// Substitute `${VAR}` patterns using the allowlist.
///
/// - `${VAR}` is replaced with the value of `VAR`; unset variables are left as-is.
/// - `${VAR:-default}` falls back to `default` when `VAR` is unset.
/// - `$${VAR}` is an escape and produces the literal `${VAR}`.
pub fn substitute_variables(input: &str) -> String {
    substitute_variables_with_allowlist(input, false)
}

/// Substitute variables with explicit allowlist control.
///
/// When `allow_all` is `true` every environment variable is resolved;
/// otherwise non-allowlisted references stay literal and a warning is logged.
pub fn substitute_variables_with_allowlist(input: &str, allow_all: bool) -> String {
    let escaped_placeholder = "\x00ESC_DOLLAR\x00";
    let working = input.replace("$${", escaped_placeholder);

    let result = ENV_VAR_PATTERN.replace_all(&working, |caps: &regex::Captures| {
        let var_name = &caps[1];

        if !allow_all && !is_env_var_allowed(var_name) {
            log::warn!(
                "Settings reference non-allowlisted environment variable ${{{var_name}}}, skipped. \
                 Add `allow_all_env_vars: true` to allow all variables."
            );
            return caps[0].to_string();
        }

        match std::env::var(var_name) {
            Ok(val) => val,
            Err(_) => caps
                .get(2)
                .map(|m| m.as_str().replace("\\}", "}"))
                .unwrap_or_else(|| caps[0].to_string()),
        }
    });

    result.replace(escaped_placeholder, "${")
}

/// Expand a raw profile path using the allowlist.
///
/// See [`expand_path_with_allowlist`].
pub fn expand_path(raw: &str) -> String {
    expand_path_with_allowlist(raw, false)
}

/// Expand a raw profile path into its evaluated form.
///
/// Resolves a leading `~` to the home directory, then `${VAR}`,
/// `${VAR:-default}` and `%VAR%` references. Unless `allow_all` is set, only
/// allowlisted variables are resolved. Unset or skipped variables are left as
/// written.
pub fn expand_path_with_allowlist(raw: &str, allow_all: bool) -> String {
    let with_home = expand_tilde(raw);
    let with_braces = substitute_variables_with_allowlist(&with_home, allow_all);
    PERCENT_VAR_PATTERN
        .replace_all(&with_braces, |caps: &regex::Captures| {
            let var_name = &caps[1];
            if !allow_all && !is_env_var_allowed(var_name) {
                log::warn!("Path references non-allowlisted environment variable %{var_name}%, skipped");
                return caps[0].to_string();
            }
            std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

fn expand_tilde(raw: &str) -> String {
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        rest
    } else {
        return raw.to_string();
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home.to_string_lossy().into_owned(),
        Some(home) => home.join(rest).to_string_lossy().into_owned(),
        None => raw.to_string(),
    }
}

/// Pre-scan raw YAML for the top-level `allow_all_env_vars: true` key.
///
/// The answer is needed before substitution runs, so this does not parse.
pub(crate) fn pre_scan_allow_all_env_vars(raw_yaml: &str) -> bool {
    ALLOW_ALL_ENV_VARS_PATTERN.is_match(raw_yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_is_unchanged() {
        assert_eq!(expand_path("/usr/local/src"), "/usr/local/src");
        assert_eq!(expand_path(""), "");
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_path("~"), home.to_string_lossy());
        assert_eq!(
            expand_path("~/projects"),
            home.join("projects").to_string_lossy()
        );
        // Only a leading tilde is special
        assert_eq!(expand_path("/tmp/~/x"), "/tmp/~/x");
    }

    #[test]
    fn test_unset_variables_left_as_written() {
        let raw = "${TERM_SETTINGS_TEST_SURELY_UNSET_1}/%TERM_SETTINGS_TEST_SURELY_UNSET_2%";
        assert_eq!(expand_path(raw), raw);
    }

    #[test]
    fn test_default_value_syntax() {
        assert_eq!(
            expand_path("${TERM_SETTINGS_TEST_SURELY_UNSET_3:-/fallback}/bin"),
            "/fallback/bin"
        );
    }

    #[test]
    fn test_set_variables_expand_both_styles() {
        // SAFETY: `set_var` is `unsafe` in Rust 2024 because it races with other
        // threads reading the environment. The variable name is unique to this
        // test, so no other test observes it.
        unsafe {
            std::env::set_var("TERM_SETTINGS_TEST_EXPAND_DIR", "/srv/work");
        }
        assert_eq!(
            expand_path("${TERM_SETTINGS_TEST_EXPAND_DIR}/a"),
            "/srv/work/a"
        );
        assert_eq!(
            expand_path("%TERM_SETTINGS_TEST_EXPAND_DIR%\\b"),
            "/srv/work\\b"
        );
    }

    #[test]
    fn test_document_substitution_respects_allowlist() {
        // SAFETY: see test_set_variables_expand_both_styles.
        unsafe {
            std::env::set_var("TERM_SETTINGS_TEST_SECRETISH", "visible");
            std::env::set_var("SECRET_TOKEN_FOR_TERM_SETTINGS_TEST", "hidden");
        }
        let input = "a: ${TERM_SETTINGS_TEST_SECRETISH}\nb: ${SECRET_TOKEN_FOR_TERM_SETTINGS_TEST}";
        let output = substitute_variables(input);
        assert_eq!(
            output,
            "a: visible\nb: ${SECRET_TOKEN_FOR_TERM_SETTINGS_TEST}"
        );

        let all = substitute_variables_with_allowlist(input, true);
        assert_eq!(all, "a: visible\nb: hidden");
    }

    #[test]
    fn test_path_expansion_respects_allowlist() {
        // SAFETY: see test_set_variables_expand_both_styles.
        unsafe {
            std::env::set_var("PATH_SECRET_FOR_TERM_SETTINGS_TEST", "hunter2");
        }
        let raw = "/home/${PATH_SECRET_FOR_TERM_SETTINGS_TEST}/%PATH_SECRET_FOR_TERM_SETTINGS_TEST%";
        assert_eq!(expand_path(raw), raw);
        assert_eq!(expand_path_with_allowlist(raw, false), raw);
        assert_eq!(
            expand_path_with_allowlist(raw, true),
            "/home/hunter2/hunter2"
        );
    }

    #[test]
    fn test_escaped_dollar_is_literal() {
        assert_eq!(substitute_variables("$${HOME}"), "${HOME}");
    }

    #[test]
    fn test_pre_scan() {
        assert!(pre_scan_allow_all_env_vars("globals: {}\nallow_all_env_vars: true\n"));
        assert!(!pre_scan_allow_all_env_vars("  allow_all_env_vars: true\n"));
    }
}
