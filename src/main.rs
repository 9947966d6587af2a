use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use addrbook::store::DEFAULT_DATA_FILE;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut data_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                data_path = args.next().map(PathBuf::from);
                if data_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("addrbook - command-line address book");
                println!();
                println!("Usage: addrbook [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  -f, --file <PATH>   Snapshot file path (default: {})",
                    DEFAULT_DATA_FILE
                );
                println!("  -h, --help          Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let data_path = data_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    addrbook::cli::run(&data_path);
}
