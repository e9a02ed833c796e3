//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on Windows, so tests cannot redirect it
//! through the usual variables. `layer_maker_home_dir()` checks
//! `LAYER_MAKER_TEST_HOME` first and falls back to `dirs::home_dir()`.
//!
//! Use it for every functional path under the home directory (currently the
//! preferences file).

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const LAYER_MAKER_TEST_HOME_VAR: &str = "LAYER_MAKER_TEST_HOME";

/// Home directory for tool-owned files.
///
/// Returns `None` only if the override is unset and the system home cannot
/// be resolved.
pub fn layer_maker_home_dir() -> Option<PathBuf> {
    home_dir_impl(|name| std::env::var(name).ok())
}

fn home_dir_impl<F>(get_env: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(LAYER_MAKER_TEST_HOME_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_system_home() {
        let home = home_dir_impl(|name| {
            (name == LAYER_MAKER_TEST_HOME_VAR).then(|| "/test/fake/home".to_string())
        });
        assert_eq!(home, Some(PathBuf::from("/test/fake/home")));
    }

    #[test]
    fn empty_override_is_ignored() {
        let home = home_dir_impl(|_| Some(String::new()));
        assert_eq!(home, dirs::home_dir());
    }

    #[test]
    fn falls_back_to_system_home() {
        assert_eq!(home_dir_impl(|_| None), dirs::home_dir());
    }
}
