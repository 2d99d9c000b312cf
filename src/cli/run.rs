//! Runs a validated invocation: resolve sources, then execute every action
//! in order. The first failing action stops the run; outputs written by
//! earlier actions are kept.

use std::{env, fs, io, path::Path};

use anyhow::{Context, Result};

use super::{
    args::Arguments,
    plan::{Action, default_merge},
};
use crate::{
    config::{CONFIG_FILE_NAME, Config, default_config_json, load_config},
    core::{
        ItemQuery, compute_item_list,
        source_scanner::{ScanRules, read_piped_sources, resolve_sources},
    },
    reporter::Reporter,
    sinks::Sink,
    swf::SwfSource,
};

pub fn run(args: &Arguments, actions: &[Action], reporter: &Reporter) -> Result<()> {
    let cwd = env::current_dir().context("Failed to resolve the current directory")?;
    let loaded = load_config(&cwd)?;
    if let Some(path) = &loaded.path {
        reporter.config(path);
    }
    let config = loaded.config;

    let mut entries = args.swf.clone();
    if args.swfpipe {
        let piped = read_piped_sources(io::stdin().lock())
            .context("Failed to read source paths from standard input")?;
        entries.extend(piped);
    }

    let sources = resolve(&entries, &config, reporter);
    let omit_from = resolve(args.omititemsfrom.as_deref().unwrap_or_default(), &config, reporter);
    let only_from = resolve(args.onlyitemsfrom.as_deref().unwrap_or_default(), &config, reporter);

    let merge = default_merge(args, sources.len());
    let source = SwfSource::new(reporter);

    for action in actions {
        let query = ItemQuery::new(&sources, action.category, action.merge(merge))
            .omit_from(&omit_from)
            .only_from(&only_from);
        let items = compute_item_list(&source, &query)?;
        action.output.emit(&items, reporter)?;
    }

    Ok(())
}

fn resolve(entries: &[String], config: &Config, reporter: &Reporter) -> Vec<String> {
    let rules = ScanRules {
        extensions: &config.extensions,
        ignores: &config.ignores,
    };
    let scan = resolve_sources(entries, rules, reporter);
    if scan.skipped_count > 0 {
        reporter.warning(&format!(
            "{} path(s) could not be accessed and were skipped",
            scan.skipped_count
        ));
    }
    scan.sources
}

/// Write a default config file into the current directory.
pub fn init(reporter: &Reporter) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    reporter.wrote("default config", config_path);
    Ok(())
}
