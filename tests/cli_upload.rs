mod common;

use common::TestEnv;

#[test]
fn missing_credentials_fail_first() {
    let env = TestEnv::new();

    let result = env.run(&["upload-to-s3"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("AWS_SECRET_ACCESS_KEY"));
}

#[test]
fn no_archives_fails_before_prompting() {
    let env = TestEnv::new();

    let result = env.run_with_credentials(&["upload-to-s3"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("no zip files available in"));
    assert!(result.stderr.contains("Run the build command first."));
    assert!(!result.stderr.contains("needs a terminal"));
}

#[test]
fn non_zip_files_do_not_count_as_archives() {
    let env = TestEnv::new();
    env.write_project_file("output/requirements.txt", b"requests\n");

    let result = env.run_with_credentials(&["upload-to-s3"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("no zip files available in"));
}

#[test]
fn archives_present_but_no_terminal() {
    let env = TestEnv::new();
    env.write_project_file(
        "output/python3-12-amd64-layer-2025-03-01T12-00-00-000Z.zip",
        b"PK",
    );

    let result = env.run_with_credentials(&["--json", "upload-to-s3"]);

    assert_eq!(result.exit_code, 1);
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["event"], "error");
    assert!(event["message"].as_str().unwrap().contains("needs a terminal"));
}

#[test]
fn finds_archives_in_custom_output_dir() {
    let env = TestEnv::new();
    env.write_project_file(
        "dist/python3-12-amd64-layer-2025-03-01T12-00-00-000Z.zip",
        b"PK",
    );

    let default_dir = env.run_with_credentials(&["upload-to-s3"]);
    assert_eq!(default_dir.exit_code, 1);
    assert!(default_dir.stderr.contains("no zip files available in"));

    let custom_dir = env.run_with_credentials(&["upload-to-s3", "--output-dir", "dist"]);
    assert_eq!(custom_dir.exit_code, 1);
    assert!(!custom_dir.stderr.contains("no zip files available in"));
    assert!(custom_dir.stderr.contains("needs a terminal"));
}
