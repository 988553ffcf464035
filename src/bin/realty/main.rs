mod prompt;
mod session;

use clap::Parser;
use log::info;
use prompt::Prompter;
use realty_index::{Config, IndexBuilder, RootLayout};
use session::{Output, Session};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive real estate property index", long_about = None)]
struct Args {
    /// JSON or TOML file with the universe bound and root layout
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the root layout: `leaf` or `internal`
    #[arg(short, long)]
    layout: Option<RootLayout>,

    /// Print query results as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    let mut builder = IndexBuilder::new().config(config);
    if let Some(layout) = args.layout {
        builder = builder.root_layout(layout);
    }
    let mut index = builder.build()?;

    let output = if args.json { Output::Json } else { Output::Text };
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    Session::new(&mut index, prompter, output).run()?;

    info!("Session ended with {} listings", index.len());
    Ok(())
}
