//! Helpers for driving the compiled binary.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

pub struct Run {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

/// Run profile-guesser with `args`, feeding `stdin`, isolated from any user
/// config under `home`.
pub fn run(home: &Path, args: &[&str], stdin: &str) -> Run {
    let mut child = Command::new(env!("CARGO_BIN_EXE_profile-guesser"))
        .args(args)
        .env("HOME", home)
        .env_remove("NO_COLOR")
        .env_remove("PROFILE_GUESSER_CONFIG")
        .env_remove("PROFILE_GUESSER_DATA")
        .env_remove("PROFILE_GUESSER_SEED")
        .env_remove("PROFILE_GUESSER_LOG")
        .env_remove("RUST_LOG")
        .current_dir(home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute profile-guesser");

    // The process may exit before reading anything (e.g. `--help`).
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    let output = child.wait_with_output().expect("Failed to wait for profile-guesser");
    Run {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code().unwrap_or(-1),
    }
}

/// Write `json` to `options.json` inside `dir` and return its path as a string.
pub fn write_data(dir: &Path, json: &str) -> String {
    let path = dir.join("options.json");
    std::fs::write(&path, json).expect("Failed to write data file");
    path.to_string_lossy().to_string()
}

pub const TWO_PEOPLE: &str = r#"[
    {"full_name": "A", "linkedin_url": "https://www.linkedin.com/in/a",
     "experiences": [{"company": "Acme", "role": "Engineer"}]},
    {"full_name": "B", "linkedin_url": "https://www.linkedin.com/in/b",
     "experiences": [{"company": "Globex", "role": "Manager"}]}
]"#;
