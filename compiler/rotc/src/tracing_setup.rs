//! Tracing subscriber setup for the `rotc` binary.
//!
//! Output is hierarchical (`tracing-tree`) and goes to stderr so it never
//! mixes with token dumps on stdout.
//!
//! ```bash
//! RUST_LOG=debug rotc main.rot
//! RUST_LOG=rot_lexer=trace rotc main.rot --lex-only
//! ```

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = tracing_tree::HierarchicalLayer::default()
            .with_writer(std::io::stderr)
            .with_indent_amount(2)
            .with_indent_lines(true)
            .with_targets(true);
        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = Registry::default().with(filter).with(tree).try_init();
    });
}
