use std::env;
use std::process::Command;

/// Short commit hash of the checkout, if this is a git checkout at all.
fn head_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=10", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let sha = String::from_utf8(output.stdout).ok()?;
    Some(sha.trim().to_owned()).filter(|sha| !sha.is_empty())
}

fn main() {
    // Source tarballs have no .git, packagers can pin the revision instead
    let sha = env::var("POLYRPC_GIT_SHA")
        .ok()
        .or_else(head_commit)
        .unwrap_or_else(|| "unknown".to_owned());

    println!("cargo:rustc-env=GIT_SHA={sha}");
    println!("cargo:rerun-if-env-changed=POLYRPC_GIT_SHA");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
}
