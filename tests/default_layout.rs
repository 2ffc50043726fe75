// Exercises the process-wide functions against the real `testdata/`
// directory of this crate, cleaning up every fixture it creates.

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use golden::TestReporter;

use common::Captured;

fn cleanup(file: &Path) {
    fs::remove_file(file).expect("remove temporary golden file");
    // Leave directories other tests may still be using.
    if let Some(parent) = file.parent() {
        let _ = fs::remove_dir(parent);
    }
}

#[test]
fn facade_set_then_get_uses_testdata() {
    let tb = Captured::new("FacadeSet/hello_world");
    let file = PathBuf::from("testdata/FacadeSet/hello_world.golden");

    golden::set(&tb, b"hello world!!!1 :)");

    assert!(file.is_file());
    assert_eq!(fs::read(&file).expect("read fixture"), b"hello world!!!1 :)");
    assert_eq!(golden::get(&tb), b"hello world!!!1 :)");
    assert_eq!(
        *tb.logs.borrow(),
        vec![format!("updating .golden file: {}", file.display())]
    );
    assert!(tb.fatals.borrow().is_empty());

    cleanup(&file);
}

#[test]
fn facade_get_existing_file() {
    let file = PathBuf::from("testdata/FacadeGet/existing_file.golden");
    fs::create_dir_all(file.parent().expect("parent")).expect("mkdir");
    fs::write(&file, "hello world!!!1 :)").expect("seed fixture");

    let tb = Captured::new("FacadeGet/existing_file");
    assert_eq!(golden::get(&tb), b"hello world!!!1 :)");

    cleanup(&file);
}

#[test]
fn reporter_names_fixture_after_test_thread() {
    let tb = TestReporter::current();
    assert_eq!(
        golden::filename(&tb),
        Some(PathBuf::from(
            "testdata/reporter_names_fixture_after_test_thread.golden"
        ))
    );

    // Checked-in fixture under testdata/.
    let case = tb.subtest("first_case");
    assert_eq!(golden::get(&case), b"subtest fixture\n");
}

#[test]
#[should_panic(expected = "failed reading .golden file")]
fn reporter_halts_on_missing_fixture() {
    let tb = TestReporter::new("FacadeLayout/definitely_missing");
    golden::get(&tb);
}

#[cfg(unix)]
#[test]
fn fatal_messages_are_stage_specific() {
    let missing = Captured::new("FacadeLayout/missing_file");
    golden::get(&missing);
    let msg = missing.fatals.borrow()[0].clone();
    insta::assert_snapshot!(
        msg,
        @"failed reading .golden file: No such file or directory (os error 2)"
    );

    let unnamed = Captured::new("");
    golden::get(&unnamed);
    let msg = unnamed.fatals.borrow()[0].clone();
    insta::assert_snapshot!(
        msg,
        @r#"could not determine golden file path for: Captured("")"#
    );
}
