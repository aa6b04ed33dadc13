use clap::Parser;
use std::path::PathBuf;

use zest::io::storage::FileStorage;

#[derive(Parser)]
#[command(
    name = "zt",
    about = concat!("[*] zest v", env!("CARGO_PKG_VERSION"), " - your tasks, in the terminal"),
    version
)]
struct Cli {
    /// Keep data in a different directory (default: $XDG_DATA_HOME/zest)
    #[arg(short = 'C', long = "data-dir")]
    data_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let dir = cli.data_dir.unwrap_or_else(FileStorage::default_dir);

    let storage = match FileStorage::open(&dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot open data directory {}: {}", dir.display(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = zest::tui::run(Box::new(storage)) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
