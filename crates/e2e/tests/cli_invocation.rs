//! Invalid invocations of the scaffolder must fail with exit code 1 and an
//! error attributable to the command by name.

mod common;

use atoll_e2e::{process, workspace};

async fn assert_rejected(args: &[&str]) {
    common::init_logging();
    if !workspace::ensure_binaries() {
        eprintln!("Skipping: cargo not available to build the workspace binaries");
        return;
    }

    let result = process::run(workspace::init_bin(), args.iter().copied())
        .await
        .unwrap();

    // exactly 1, the documented failure code, not just "non-zero"
    assert_eq!(
        result.code,
        1,
        "args {args:?}; stderr:\n{}",
        result.stderr_utf8()
    );
    assert!(
        result.stderr_utf8().contains("atoll-init"),
        "stderr does not name the command; stderr:\n{}",
        result.stderr_utf8()
    );
}

#[tokio::test]
async fn zero_arguments_are_rejected() {
    assert_rejected(&[]).await;
}

#[tokio::test]
async fn unknown_short_flag_is_rejected() {
    assert_rejected(&["-f"]).await;
}

#[tokio::test]
async fn unknown_long_flag_is_rejected() {
    assert_rejected(&["--foo"]).await;
}
