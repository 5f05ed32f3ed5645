// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! rprefs inspector.
//!
//! Loads a preferences payload (from a file, stdin, or the config directory)
//! and prints the requested section as pretty JSON. Absent sections print
//! `null`.
//!
//! # Usage
//! ```text
//! rprefs [--file PATH | --key NAME [--config-dir DIR]] [--strict] <general|history|all>
//! ```

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use rprefs_core::{
    BundleLoader, PrefsBundle, PrefsView, GENERAL_PREFS_FIELD, HISTORY_PREFS_FIELD,
};
use rprefs_source_fs::FsBundleSource;
use serde_json::{json, Value};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print general/history prefs from a payload")]
struct Args {
    /// Section to print
    #[arg(value_enum)]
    section: Which,
    /// Read the payload from a JSON file (`-` for stdin) instead of the config directory
    #[arg(long, conflicts_with_all = ["key", "config_dir"])]
    file: Option<PathBuf>,
    /// Payload key under the config directory (reads `<key>.json`)
    #[arg(long, default_value = "prefs")]
    key: String,
    /// Override the config directory
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Fail when a section is present but not an object
    #[arg(long)]
    strict: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Which {
    /// `general_prefs`
    General,
    /// `history_prefs`
    History,
    /// Both sections
    All,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let bundle = load_bundle(&args)?;
    let value = render(bundle.view(), args.section, args.strict)?;

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &value)?;
    writeln!(out)?;
    Ok(())
}

fn load_bundle(args: &Args) -> Result<PrefsBundle> {
    if let Some(path) = &args.file {
        let bytes = read_payload(path)?;
        return PrefsBundle::from_slice(&bytes)
            .with_context(|| format!("parsing {}", path.display()));
    }

    let source = match &args.config_dir {
        Some(dir) => FsBundleSource::with_base(dir),
        None => FsBundleSource::new().context("resolving config dir")?,
    };
    info!(base = %source.base().display(), key = %args.key, "loading prefs");
    BundleLoader::new(source)
        .load(&args.key)
        .with_context(|| format!("loading prefs key {:?}", args.key))?
        .ok_or_else(|| anyhow!("no prefs payload for key {:?}", args.key))
}

fn read_payload(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("reading stdin")?;
        return Ok(bytes);
    }
    std::fs::read(path).with_context(|| format!("reading {}", path.display()))
}

fn render(view: PrefsView<'_>, which: Which, strict: bool) -> Result<Value> {
    let general = || -> Result<Value> {
        let section = if strict {
            view.try_general_prefs()?
        } else {
            view.general_prefs()
        };
        Ok(section.map_or(Value::Null, |s| s.as_value().clone()))
    };
    let history = || -> Result<Value> {
        let section = if strict {
            view.try_history_prefs()?
        } else {
            view.history_prefs()
        };
        Ok(section.map_or(Value::Null, |s| s.as_value().clone()))
    };

    debug!(?which, strict, "rendering prefs");
    Ok(match which {
        Which::General => general()?,
        Which::History => history()?,
        Which::All => json!({
            GENERAL_PREFS_FIELD: general()?,
            HISTORY_PREFS_FIELD: history()?,
        }),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn render_all_fills_missing_with_null() {
        let root = json!({ "general_prefs": { "theme": "dark" } });
        let value = render(PrefsView::new(&root), Which::All, false).unwrap();
        assert_eq!(
            value,
            json!({ "general_prefs": { "theme": "dark" }, "history_prefs": null })
        );
    }

    #[test]
    fn render_strict_rejects_mismatch() {
        let root = json!({ "history_prefs": [50] });
        assert_eq!(
            render(PrefsView::new(&root), Which::History, false).unwrap(),
            Value::Null
        );
        assert!(render(PrefsView::new(&root), Which::History, true).is_err());
        assert_eq!(
            render(PrefsView::new(&root), Which::General, true).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn args_reject_file_with_key() {
        let parsed = Args::try_parse_from(["rprefs", "--file", "a.json", "--key", "x", "all"]);
        assert!(parsed.is_err());
        let parsed = Args::try_parse_from(["rprefs", "history"]).unwrap();
        assert_eq!(parsed.section, Which::History);
        assert_eq!(parsed.key, "prefs");
    }
}
