use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::debug;
use std::process::ExitCode;

use devref_cli::cli_args::{tab_index, Args};
use devref_cli::{browser, listing};
use devref_core::catalog::Catalog;
use devref_core::clipboard::SystemClipboard;
use devref_core::error::Result;

/// Sets up logging from `RUST_LOG`.
///
/// The browser draws on the terminal that stderr points at, so its log
/// records are discarded.
fn init_logging(args: &Args) {
    let mut builder = Builder::from_env(Env::default());
    if args.is_interactive() {
        builder.target(Target::Pipe(Box::new(std::io::sink())));
    }
    builder.init();
}

fn execute(args: Args) -> Result<()> {
    let catalog = Catalog::builtin();
    debug!(
        "Loaded {} commands in {} categories",
        catalog.len(),
        catalog.categories().count()
    );

    if args.categories {
        for category in catalog.categories() {
            println!("{category}");
        }
        return Ok(());
    }

    let scope = args.scope(&catalog)?;
    let query = args.query_text();

    if args.list {
        print!(
            "{}",
            listing::render_listing(&catalog, &scope, &query, args.format)?
        );

        if args.copy {
            let mut clipboard = SystemClipboard::new();
            eprintln!(
                "{}",
                listing::copy_first_match(&catalog, &scope, &query, &mut clipboard)
            );
        }
        return Ok(());
    }

    let mut clipboard = SystemClipboard::new();
    browser::browse(
        &catalog,
        tab_index(&catalog, &scope),
        query,
        &mut clipboard,
    )
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
