//! Static export of the storefront product grid.
//!
//! Examples:
//!   manani-export
//!   manani-export --catalog products.json --out grid.html
//!   manani-export --catalog products.json --check
//!
//! Log verbosity follows `RUST_LOG` (defaults to `info`).

use std::fs;
use std::path::PathBuf;
use std::process;

use manani::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

struct Args {
    catalog: Option<PathBuf>,
    out: Option<PathBuf>,
    check: bool,
}

fn usage() -> ! {
    eprintln!("manani-export (renders the product grid to static HTML)");
    eprintln!("Usage: manani-export [--catalog <file.json>] [--out <file.html>] [--check]\n");
    eprintln!("Options:");
    eprintln!("  --catalog <file.json>       Product list to render (default: built-in collection)");
    eprintln!("  --out <file.html>           Write the fragment here instead of stdout");
    eprintln!("  --check                     Validate the catalog and print its product count");
    process::exit(2);
}

fn parse_args() -> Args {
    let mut args = Args {
        catalog: None,
        out: None,
        check: false,
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--catalog" => match it.next() {
                Some(v) => args.catalog = Some(PathBuf::from(v)),
                None => usage(),
            },
            "--out" => match it.next() {
                Some(v) => args.out = Some(PathBuf::from(v)),
                None => usage(),
            },
            "--check" => args.check = true,
            "-h" | "--help" => usage(),
            _ => {
                eprintln!("unknown argument: {arg}\n");
                usage();
            }
        }
    }
    args
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(p) => {
            let raw = fs::read_to_string(p)?;
            let catalog = Catalog::from_json(&raw)?;
            info!(path = %p.display(), products = catalog.len(), "loaded catalog");
            Ok(catalog)
        }
        None => Ok(Catalog::collection()),
    }
}

fn run(args: &Args) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_ref())?;

    if args.check {
        println!("ok: {} products", catalog.len());
        return Ok(());
    }

    let mut grid = HtmlGrid::new();
    render_products(&catalog, &mut grid)?;
    let html = grid.to_html();

    match &args.out {
        Some(path) => {
            fs::write(path, &html)?;
            info!(path = %path.display(), cards = grid.len(), "wrote product grid");
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    if let Err(e) = run(&args) {
        error!("export failed: {e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
