#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

#[cfg(windows)]
pub const BINARY_NAME: &str = "kmlview.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "kmlview";

/// Helper to get a testdata file path.
pub fn get_testdata(filename: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.parent()
		.unwrap()
		.join("testdata")
		.join(filename)
}

/// Helper to write a file into a fresh temp dir.
pub fn write_temp_file(filename: &str, content: &str) -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let path = dir.path().join(filename);
	std::fs::write(&path, content).expect("failed to write temp file");
	(dir, path)
}

/// Helper to create a Command for the kmlview binary.
pub fn kmlview_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Runs kmlview with the given arguments and returns stdout, asserting success.
pub fn kmlview_stdout(args: &[&str]) -> String {
	let output = kmlview_cmd().args(args).assert().success().get_output().stdout.clone();
	String::from_utf8(output).unwrap()
}
