#![cfg(feature = "cli")]

mod common;

use std::process::Command;

use common::build_bmp8;

fn zencrop_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_zencrop"))
}

#[test]
fn result_line_goes_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.bmp");
    std::fs::write(&input, build_bmp8(&[&[0, 0, 0], &[0, 3, 0], &[0, 0, 0]], 0)).unwrap();

    let run = zencrop_bin().arg(&input).arg(&output).output().unwrap();
    assert!(run.status.success(), "{}", String::from_utf8_lossy(&run.stderr));
    let stdout = String::from_utf8(run.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        format!("Cropped image saved as: {}", output.display())
    );
    assert_eq!(zencrop::load(&output).unwrap().width(), 1);
}

#[test]
fn quiet_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.bmp");
    std::fs::write(&input, build_bmp8(&[&[0, 0, 0], &[0, 3, 0], &[0, 0, 0]], 0)).unwrap();

    let run = zencrop_bin().arg("-q").arg(&input).arg(&output).output().unwrap();
    assert!(run.status.success());
    assert!(run.stdout.is_empty());
    assert!(output.exists());
}

#[test]
fn failures_exit_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let run = zencrop_bin()
        .arg(dir.path().join("missing.bmp"))
        .arg(dir.path().join("out.bmp"))
        .output()
        .unwrap();
    assert_eq!(run.status.code(), Some(1));
    assert!(run.stdout.is_empty());

    let usage = zencrop_bin().arg("only-one-arg").output().unwrap();
    assert_eq!(usage.status.code(), Some(1));
}
