use std::process;

use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let code = dfs_report::app::run();
    if code != 0 {
        process::exit(code);
    }
}
