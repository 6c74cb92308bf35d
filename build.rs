use chrono::{DateTime, Local};
use std::{process::Command, time::SystemTime};

fn exe_cmd(cmd: &mut Command) -> anyhow::Result<String> {
    let output = cmd.output()?;
    anyhow::ensure!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr).trim()
    );

    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

fn main() {
    // builds outside a git checkout get an empty git info
    let git_commit_hash = exe_cmd(Command::new("git").args([
        "log",
        "-n",
        "1",
        "--pretty=format:%H",
    ]))
    .map(|s| s[..8.min(s.len())].to_string())
    .unwrap_or_default();

    let git_branch = exe_cmd(Command::new("git").args(["branch", "--show-current"]))
        .unwrap_or_default();

    println!(
        "cargo:rustc-env=TRIPLES_VERSION_INFO={}-{}",
        env!("CARGO_PKG_VERSION"),
        DateTime::<Local>::from(SystemTime::now()).format("%Y/%m/%d-%H:%M:%S")
    );

    println!(
        "cargo:rustc-env=TRIPLES_GIT_INFO={}-{}",
        git_branch, git_commit_hash
    );
}
