// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Validate the uinit binary end to end.
// Author: Lukas Bower
#![cfg(unix)]
#![forbid(unsafe_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use anyhow::{Context, Result};

fn write_config(lines: &[&str]) -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    let quoted: Vec<String> = lines.iter().map(|line| format!("{line:?}")).collect();
    writeln!(file, "commands = [{}]", quoted.join(", "))?;
    Ok(file)
}

fn run_uinit(args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_uinit"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .context("spawn uinit")
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in:\n{haystack}"))
}

#[test]
fn runs_config_and_always_succeeds() -> Result<()> {
    let config = write_config(&["/bin/true", "", "/bin/false", "/bin/echo hello"])?;
    let path = config.path().to_str().context("temp path is not UTF-8")?;
    let output = run_uinit(&["--config", path])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stdout, "hello\n");

    let first = position(&stderr, "Executing Command: /bin/true");
    let second = position(&stderr, "Executing Command: /bin/false");
    let failure = position(&stderr, "/bin/false: /bin/false exited with status 1");
    let third = position(&stderr, "Executing Command: /bin/echo hello");
    let done = position(&stderr, "Uinit Done!");
    assert!(first < second && second < failure && failure < third && third < done);

    assert!(stderr.contains("boot commands overridden by"), "{stderr}");
    assert_eq!(stderr.matches("Executing Command:").count(), 3);
    assert_eq!(stderr.matches("Uinit Done!").count(), 1);
    assert!(!stderr.contains("/bin/true: "));
    Ok(())
}

#[test]
fn unreadable_config_falls_back_to_builtin_list() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.toml");
    let missing = missing.to_str().context("temp path is not UTF-8")?;
    let output = run_uinit(&["--config", missing])?;

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("using built-in commands"), "{stderr}");
    assert!(stderr.contains("Executing Command: /bbin/insmod /lib/modules/nvme-core.ko"));
    assert_eq!(stderr.matches("Executing Command:").count(), 6);
    assert!(stderr.trim_end().ends_with("Uinit Done!"), "{stderr}");
    Ok(())
}

#[test]
fn check_prints_plan_without_running() -> Result<()> {
    let config = write_config(&["/bin/echo  hello", "  "])?;
    let path = config.path().to_str().context("temp path is not UTF-8")?;
    let output = run_uinit(&["--config", path, "--check"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, "/bin/echo [\"hello\"]\n(skip blank entry)\n");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(!stderr.contains("Executing Command:"));
    Ok(())
}

#[test]
fn unknown_arguments_do_not_block_boot() -> Result<()> {
    let output = run_uinit(&["console=ttyS0", "--quiet"])?;

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("ignoring arguments"), "{stderr}");
    assert_eq!(stderr.matches("Executing Command:").count(), 6);
    assert_eq!(stderr.matches("Uinit Done!").count(), 1);
    Ok(())
}

#[test]
fn environment_does_not_override_builtin_list() -> Result<()> {
    let config = write_config(&["/bin/echo from-env"])?;
    let path = config.path().to_str().context("temp path is not UTF-8")?;
    let output = Command::new(env!("CARGO_BIN_EXE_uinit"))
        .env_remove("RUST_LOG")
        .env("UINIT_CONFIG", path)
        .output()
        .context("spawn uinit")?;

    assert!(output.status.success());
    assert!(!String::from_utf8(output.stdout)?.contains("from-env"));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(!stderr.contains("overridden"), "{stderr}");
    assert_eq!(stderr.matches("Executing Command:").count(), 6);
    Ok(())
}

#[test]
fn check_survives_closed_stdout() -> Result<()> {
    let lines: Vec<String> = (0..2000).map(|i| format!("/bin/echo entry-{i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let config = write_config(&refs)?;
    let path = config.path().to_str().context("temp path is not UTF-8")?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_uinit"))
        .args(["--config", path, "--check"])
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn uinit")?;
    drop(child.stdout.take());

    let status = child.wait()?;
    assert!(status.success(), "{status:?}");
    Ok(())
}
