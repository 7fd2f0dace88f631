use clap::Parser;
use color_eyre::eyre::bail;
use color_eyre::Result;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use address_inspector::ui::Menu;

#[derive(Parser, Debug)]
#[command(name = "address-inspector")]
#[command(about = "Address Inspector - duplicate records and floor statistics from CSV and XML files")]
#[command(version)]
struct Args {
    /// Files to analyze without entering the menu
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let stdout = io::stdout();
    let color = !args.no_color && stdout.is_terminal();
    let mut menu = Menu::new(io::stdin().lock(), stdout.lock()).with_color(color);

    if args.files.is_empty() {
        menu.run()?;
        return Ok(());
    }

    let failed = menu.analyze_all(&args.files)?;
    if failed > 0 {
        bail!("{failed} of {} files could not be analyzed", args.files.len());
    }
    Ok(())
}
