//! The `tree` subcommand.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rbdict::RedBlackTree;
use tracing::{info, warn};

use crate::settings;

/// Arguments for the tree subcommand
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Tree configuration YAML file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Keys to insert, in order
    #[arg(required = true)]
    pub keys: Vec<String>,
}

/// Run the tree subcommand
pub fn run(args: &TreeArgs) -> Result<()> {
    let config = settings::load(args.config.as_deref())?;
    let tree = build(&args.keys, config);

    let black_height = tree
        .validate()
        .context("Tree failed its own invariant check")?;
    info!(
        keys = tree.len(),
        height = tree.height(),
        black_height,
        "tree built"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(&tree, &mut out)?;
    out.flush()?;
    Ok(())
}

fn build(keys: &[String], config: rbdict::TreeConfig) -> RedBlackTree {
    let mut tree = RedBlackTree::with_config(config);
    for key in keys {
        match tree.insert(key.clone()) {
            Ok(true) => {}
            Ok(false) => info!(%key, "duplicate key"),
            Err(error) => warn!(%key, %error, "key skipped"),
        }
    }
    tree
}

/// Writes one tab-separated `key color parent` line per node in pre-order.
/// The root's parent is written as an empty field.
fn write_listing(tree: &RedBlackTree, out: &mut impl Write) -> io::Result<()> {
    let mut result = Ok(());
    tree.traverse_pre_order(|node| {
        if result.is_ok() {
            result = writeln!(
                out,
                "{}\t{}\t{}",
                node.key(),
                node.color(),
                node.parent_key().map_or("", String::as_str)
            );
        }
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbdict::{EmptyKeyPolicy, TreeConfig};
    use rstest::rstest;

    fn keys(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    fn test_listing_for_letters() {
        let tree = build(
            &keys(&["D", "B", "A", "C", "F", "E", "H", "G", "I", "J"]),
            TreeConfig::default(),
        );
        let mut out = Vec::new();
        write_listing(&tree, &mut out).unwrap();
        let listing = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "D\tBLACK\t");
        assert_eq!(lines[6], "H\tRED\tF");
        assert_eq!(lines[9], "J\tRED\tI");
    }

    #[rstest]
    #[case(TreeConfig::default(), 2)]
    #[case(TreeConfig::new().with_empty_keys(EmptyKeyPolicy::Allow), 3)]
    fn test_build_applies_config(#[case] config: TreeConfig, #[case] expected: usize) {
        let tree = build(&keys(&["b", "", "a", "b"]), config);
        assert_eq!(tree.len(), expected);
    }
}
