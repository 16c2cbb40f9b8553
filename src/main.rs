mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use std::path::Path;
use wavegen::export::{download_svg, write_document};

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.wave_config()?;
    let mut rng = cli.rng();

    if cli.download {
        let path = download_svg(&config, Path::new("."), &mut rng).context("downloading wave")?;
        eprintln!("[wavegen] saved {}", path.display());
        return Ok(());
    }

    let output = cli.render(&config, &mut rng);

    match &cli.output {
        Some(path) => {
            write_document(&output, path).context("writing output")?;
            eprintln!("[wavegen] saved {}", path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}

fn main() {
    cli::init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
