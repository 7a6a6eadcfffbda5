use clap::Parser;
use librarian::api::LibraryApi;
use librarian::config::{default_config_dir, LibraryConfig};
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::args::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "librarian=debug"
    } else {
        "librarian=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config() -> LibraryConfig {
    let Some(dir) = default_config_dir() else {
        return LibraryConfig::default();
    };
    LibraryConfig::load(&dir).unwrap_or_else(|e| {
        tracing::warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
        LibraryConfig::default()
    })
}

fn run(cli: Cli) -> io::Result<()> {
    let mut config = load_config();
    if let Some(data_file) = cli.data_file {
        config = config.with_data_file(data_file);
    }
    tracing::debug!(data_file = %config.data_file.display(), "opening library");

    let mut api = LibraryApi::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    cli::print::print_messages(&mut out, &api.load_warnings())?;
    cli::menu::run(&mut api, &mut input, &mut out)
}
