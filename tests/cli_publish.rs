mod common;

use common::{TestEnv, CREDENTIAL_VARS};

#[test]
fn missing_credentials_lists_every_variable() {
    let env = TestEnv::new();

    let result = env.run(&["publish"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("missing required AWS credentials"));
    for var in CREDENTIAL_VARS {
        assert!(result.stderr.contains(var), "missing {var} in:\n{}", result.stderr);
    }
}

#[test]
fn only_absent_variables_are_listed() {
    let env = TestEnv::new();

    let result = env.run_with_env(
        &["publish"],
        &[
            ("AWS_ACCESS_KEY_ID", "AKIAEXAMPLE"),
            ("AWS_SESSION_TOKEN", ""),
        ],
    );

    assert_eq!(result.exit_code, 1);
    assert!(!result.stderr.contains("AWS_ACCESS_KEY_ID"));
    assert!(result.stderr.contains("AWS_SECRET_ACCESS_KEY"));
    assert!(result.stderr.contains("AWS_SESSION_TOKEN"));
}

#[test]
fn non_interactive_stdin_fails_without_saving_preferences() {
    let env = TestEnv::new();

    let result = env.run_with_credentials(&["publish"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("needs a terminal"));
    assert!(!env.preferences_file().exists());
}
