//! Build script for pull-request-closer - embeds version information.
//!
//! Emits `BUILD_INFO_HUMAN`, shown by `--version`. It is made of the
//! package version, the output of `git describe --tags --always --dirty`
//! when git is available, and the rustc version. Outside a git checkout
//! (e.g. a crates.io install) the git part falls back to the build date.

use std::{env, process::Command};

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let info = [
        Some(env!("CARGO_PKG_VERSION").to_string()),
        Some(format!("({})", describe_source())),
        rustc_version(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");

    println!("cargo:rustc-env=BUILD_INFO_HUMAN={info}");
}

fn run(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn describe_source() -> String {
    run("git", &["describe", "--tags", "--always", "--dirty"])
        .unwrap_or_else(|| format!("built {}", Utc::now().format("%Y-%m-%d")))
}

fn rustc_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    run(&rustc, &["--version"])
}
