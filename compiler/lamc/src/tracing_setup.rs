use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=lam_eval=debug`.
/// With `LAM_LOG_TREE` also set, spans are printed as an indented tree,
/// which is easier to follow for nested applications.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let tree = std::env::var_os("LAM_LOG_TREE").is_some();
        let filter = EnvFilter::from_default_env();

        tracing_subscriber::registry()
            .with(filter)
            .with(tree.then(|| HierarchicalLayer::new(2).with_targets(true)))
            .with((!tree).then(|| {
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
            }))
            .init();
    });
}
