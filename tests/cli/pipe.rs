use std::{io::Write, process::Stdio};

use anyhow::{Context, Result};
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn run_with_stdin(test: &CliTest, args: &[&str], input: &str) -> Result<std::process::Output> {
    let mut child = test
        .command()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .context("stdin is piped")?
        .write_all(input.as_bytes())?;
    Ok(child.wait_with_output()?)
}

#[test]
fn test_piped_sources_follow_swf_sources() -> Result<()> {
    let test = CliTest::with_two_swfs()?;

    let output = run_with_stdin(
        &test,
        &["--swf", "b.swf", "--swfpipe", "--classlistout"],
        "a.swf\r\n\n",
    )?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "#b.swf\nBar\nBaz\n#a.swf\nBar\nFoo\n");

    Ok(())
}

#[test]
fn test_pipe_alone_is_valid_input() -> Result<()> {
    let test = CliTest::with_two_swfs()?;

    let output = run_with_stdin(
        &test,
        &["--swfpipe", "--merge", "--classlistout"],
        "a.swf\nb.swf\n",
    )?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "Bar\nBaz\nFoo\n");

    Ok(())
}

#[test]
fn test_repeated_source_is_read_once() -> Result<()> {
    let test = CliTest::with_two_swfs()?;

    let output = run_with_stdin(
        &test,
        &["--swf", "a.swf", "--swfpipe", "--classlistout"],
        "a.swf\n",
    )?;

    assert!(output.status.success(), "{}", stderr(&output));
    // One distinct source, so no markers.
    assert_eq!(stdout(&output), "Bar\nFoo\n");

    Ok(())
}
