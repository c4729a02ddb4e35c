//! assertdoc — generate the README for a library of test-assertion
//! helpers from its documentation-comment manifest.
//!
//! Two modes:
//!
//! - **stdin mode** (no file arguments): `assertdoc < manifest.json`
//!   writes the document to stdout.
//! - **file mode**: `assertdoc manifests/*.json -o README.md` merges the
//!   manifests and writes — or, with `--check`, verifies — the document.

mod error;
mod generator;
mod model;
mod parser;
mod reflect;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use reflect::{Manifest, ManifestReflector, Reflect};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "assertdoc",
    about = "Generate the assertion-helpers README from documentation manifests"
)]
struct Cli {
    /// Manifest files (glob patterns supported). If omitted, a single
    /// manifest is read from stdin.
    manifests: Vec<String>,

    /// Write the document to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Verify that the output file is up to date instead of writing it
    #[arg(long, requires = "output")]
    check: bool,

    /// Restrict generation to the given fully-qualified class names.
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "class")]
    classes: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let manifest = if cli.manifests.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        Manifest::from_json(&input).context("invalid manifest on stdin")?
    } else {
        load_manifests(&cli.manifests)?
    };

    let reflector = ManifestReflector::new(manifest);
    let classes = if cli.classes.is_empty() {
        reflector.classes()
    } else {
        cli.classes.clone()
    };

    let document = generator::generate(&reflector, &classes)?;

    match &cli.output {
        Some(path) if cli.check => check_document(path, &document),
        Some(path) => fs::write(path, &document)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{document}");
            Ok(())
        }
    }
}

/// Expand glob patterns, read every manifest and fold them into one.
/// Manifests are expected to partition the class space; a class defined
/// twice is an error.
fn load_manifests(patterns: &[String]) -> Result<Manifest> {
    let mut manifest = Manifest::default();

    for path in expand_globs(patterns)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let parsed = Manifest::from_json(&content)
            .with_context(|| format!("invalid manifest: {}", path.display()))?;
        for (class, entry) in parsed.classes {
            if manifest.classes.insert(class.clone(), entry).is_some() {
                bail!("class \"{class}\" is defined in more than one manifest");
            }
        }
    }

    Ok(manifest)
}

/// Expand glob patterns into a sorted, deduplicated list of files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Compare the generated document with the file on disk.
fn check_document(path: &Path, document: &str) -> Result<()> {
    let current = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if current != document {
        bail!(
            "{} is out of date, regenerate it with assertdoc",
            path.display()
        );
    }
    Ok(())
}
