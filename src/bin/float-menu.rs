use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::error;

use float_menu::data::loader::{encode_nodes_toon, load_options};
use float_menu::logging::init_logging;
use float_menu::{FloatMenu, HtmlContainer, MenuError, MenuId, PointerEvent};

#[derive(Parser)]
#[command(name = "float-menu", about = "Render and query floating nested menus")]
struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the menu markup.
    Render(MenuArgs),
    /// Click an item and print the callback payload as JSON.
    Click {
        #[command(flatten)]
        menu: MenuArgs,
        /// Id of the clicked item.
        #[arg(long)]
        id: String,
    },
    /// Print the active node list as TOON.
    Export(MenuArgs),
}

#[derive(Args)]
struct MenuArgs {
    /// Menu data file (.toon or .json).
    file: PathBuf,
    /// Override the root id from the file.
    #[arg(long)]
    root: Option<String>,
    /// Filter with this pattern before acting.
    #[arg(long)]
    search: Option<String>,
    /// Keep the hierarchy of search results.
    #[arg(long)]
    tree: bool,
    /// Caption of the header row.
    #[arg(long)]
    header: Option<String>,
}

impl MenuArgs {
    fn open(&self) -> Result<FloatMenu, MenuError> {
        let mut opts = load_options(&self.file)?;
        if let Some(root) = &self.root {
            opts.menu_root_id = MenuId::new(root.as_str());
        }
        if let Some(header) = &self.header {
            opts.header = header.clone();
        }
        opts.search_result_to_tree |= self.tree;

        let mut menu = FloatMenu::new(opts);
        if let Some(text) = &self.search {
            menu.search(text)?;
        }
        Ok(menu)
    }
}

fn run(cli: Cli) -> Result<(), MenuError> {
    match cli.command {
        Command::Render(args) => {
            let menu = args.open()?;
            let mut out = HtmlContainer::new();
            menu.render_into(Some(&mut out));
            println!("{}", out.html());
        }
        Command::Click { menu, id } => {
            let mut menu = menu.open()?;
            let click = menu.click(&MenuId::new(id), PointerEvent::default())?;
            println!("{}", serde_json::to_string_pretty(&click)?);
        }
        Command::Export(args) => {
            let menu = args.open()?;
            println!("{}", encode_nodes_toon(menu.active_data())?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(Some(cli.log.as_str()));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "float-menu failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
