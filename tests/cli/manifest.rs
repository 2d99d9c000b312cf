use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_exclude_is_always_merged() -> Result<()> {
    let test = CliTest::with_two_swfs()?;

    let output = test
        .command()
        .args(["--swf", "a.swf", "b.swf", "--exclude", "exclude.xml"])
        .output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert_snapshot!(test.read_file("exclude.xml")?.trim_end(), @r#"
    <?xml version="1.0" encoding="utf-8"?>
    <excludeAssets>
      <asset name="Bar"/>
      <asset name="Baz"/>
      <asset name="Foo"/>
    </excludeAssets>
    "#);
    assert!(stdout(&output).contains("Wrote exclude XML to exclude.xml."));

    Ok(())
}

#[test]
fn test_exclude_runs_alongside_per_source_list() -> Result<()> {
    let test = CliTest::with_two_swfs()?;

    let output = test
        .command()
        .args([
            "--swf",
            "a.swf",
            "b.swf",
            "--exclude",
            "exclude.xml",
            "--classlist",
            "classes.txt",
        ])
        .output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(!test.read_file("exclude.xml")?.contains('#'));
    assert_eq!(
        test.read_file("classes.txt")?,
        "#a.swf\nBar\nFoo\n#b.swf\nBar\nBaz\n"
    );

    Ok(())
}
