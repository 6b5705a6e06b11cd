mod common;

use common::TestContext;
use serial_test::serial;
use std::io;

#[test]
#[serial]
fn setup_uses_current_directory() {
    let ctx = TestContext::new();

    let outcome = ctx.with_work_dir(|| pwagen::setup(&pwagen::PwaConfig::default()))
        .expect("setup should succeed");

    assert_eq!(outcome.files.len(), 3);
    assert_eq!(ctx.read_manifest()["start_url"], "/");
}

#[test]
#[serial]
fn init_twice_fails_with_already_exists() {
    let ctx = TestContext::new();

    ctx.with_work_dir(|| {
        pwagen::init().expect("first init should succeed");
        let err = pwagen::init().expect_err("second init should fail");
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    });
}

#[test]
#[serial]
fn relative_root_reports_absolute_paths() {
    let ctx = TestContext::new();

    let outcome = ctx
        .with_work_dir(|| pwagen::setup_at("site", &pwagen::PwaConfig::default()))
        .expect("setup should succeed");

    for file in &outcome.files {
        assert!(file.path.is_absolute(), "{} should be absolute", file.path.display());
        assert!(file.path.is_file(), "{} should exist", file.path.display());
    }
    assert!(ctx.work_dir().join("site/public/manifest.json").is_file());
}
