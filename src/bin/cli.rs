//! dom2scene command line interface
//!
//! `extract` navigates a browser to a URL and prints the canonical node tree
//! as JSON; `import` reads such a payload and rebuilds the scene graph with
//! the default font catalog, reporting the created-object count.

use anyhow::Context;
use clap::{Parser, Subcommand};
use dom2scene::plugin;
use dom2scene::scene::{FontCatalog, FontResolver};
use dom2scene::{BrowserSession, LaunchOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dom2scene", version, about = "Convert rendered pages into design-tool scene graphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Capture a page and print its canonical node tree as JSON
    Extract {
        /// URL to load before extracting
        #[arg(long)]
        url: String,

        /// Launch the browser with a visible window
        #[arg(long)]
        headed: bool,

        /// Write the payload to a file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Rebuild a scene graph from a canonical tree payload
    Import {
        /// File holding the serialized canonical tree
        file: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract { url, headed, out } => {
            let session = BrowserSession::launch(LaunchOptions::new().headless(!headed))
                .context("Failed to launch browser")?;

            session.navigate(&url)?;
            session.wait_for_navigation()?;

            let tree = session.extract_scene_tree()?;
            let payload = serde_json::to_string_pretty(&tree)?;

            match out {
                Some(path) => {
                    std::fs::write(&path, payload)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    eprintln!("Wrote canonical tree to {}", path.display());
                }
                None => println!("{}", payload),
            }
        }

        Command::Import { file } => {
            let payload = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let fonts = FontResolver::new(FontCatalog::default());
            let scene = plugin::import(&payload, &fonts).await?;

            println!(
                "Created {} objects on a {}x{} canvas",
                scene.count, scene.root.width, scene.root.height
            );
        }
    }

    Ok(())
}
