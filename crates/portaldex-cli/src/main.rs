//! Portaldex CLI — browse the Rick and Morty character catalog

use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use portaldex::catalog::{CatalogPager, CatalogSource, Character, RickAndMortyClient, STATUS_ALL};
use portaldex::data::{FavoritesCommand, FavoritesStore, FileStore, KvStore, ThemeMode, ThemeStore};
use portaldex::error::Result;
use portaldex::network::{Connectivity, SharedConnectivity};
use portaldex::telemetry::{NullSink, StderrSink, TelemetrySink};

#[derive(Parser)]
#[command(name = "portaldex", about = "Rick and Morty character catalog browser", version)]
struct Cli {
    /// Log telemetry events to stderr
    #[arg(long, global = true)]
    verbose: bool,

    /// Treat the network as unreachable
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List characters from the catalog
    List {
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// Filter by exact status ("Alive", "Dead", "unknown"), or "All"
        #[arg(long, default_value = STATUS_ALL)]
        status: String,
    },
    /// Show one character in detail, with episodes
    Show {
        /// Character id
        id: u64,
    },
    /// Manage the favorites set
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
    /// Show or toggle the color theme
    Theme {
        /// Flip between light and dark
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(Subcommand)]
enum FavAction {
    /// List saved favorites
    List,
    /// Add a character by id
    Add { id: u64 },
    /// Remove a character by id
    Remove { id: u64 },
    /// Wipe all stored data
    Clear,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let telemetry: Box<dyn TelemetrySink> = if cli.verbose {
        Box::new(StderrSink)
    } else {
        Box::new(NullSink)
    };

    let connectivity: Box<dyn Connectivity> = Box::new(SharedConnectivity::new(!cli.offline));

    match cli.command {
        Command::List { pages, status } => list(pages, &status, connectivity, telemetry),
        Command::Show { id } => show(id),
        Command::Fav { action } => fav(action, telemetry),
        Command::Theme { toggle } => theme(toggle),
    }
}

fn list(
    pages: u32,
    status: &str,
    connectivity: Box<dyn Connectivity>,
    telemetry: Box<dyn TelemetrySink>,
) -> Result<()> {
    let source = RickAndMortyClient::new()?;
    let mut pager = CatalogPager::new(Box::new(source), connectivity, telemetry);

    pager.load_page(portaldex::config::api::FIRST_PAGE)?;
    for _ in 1..pages {
        pager.advance_page()?;
    }

    let filtered = pager.render_by_status(status);
    for character in &filtered {
        print_row(character);
    }
    println!("{} character(s)", filtered.len());
    Ok(())
}

fn show(id: u64) -> Result<()> {
    let client = RickAndMortyClient::new()?;
    let character = client.character(id)?;

    println!("{} (#{})", character.name, character.id);
    println!("  Status:   {}", character.status);
    println!("  Species:  {}", character.species);
    println!("  Gender:   {}", character.gender);
    println!("  Origin:   {}", character.origin.name);
    println!("  Location: {}", character.location.name);

    if !character.episode.is_empty() {
        println!("  Episodes:");
        for url in &character.episode {
            match client.episode(url) {
                Ok(episode) => println!("    {} — {}", episode.episode, episode.name),
                // Fall back to the URL tail rather than aborting the listing
                Err(_) => {
                    let tail = url.rsplit('/').next().unwrap_or(url);
                    println!("    episode {tail}");
                }
            }
        }
    }
    Ok(())
}

fn fav(action: FavAction, telemetry: Box<dyn TelemetrySink>) -> Result<()> {
    let store: Arc<dyn KvStore> = Arc::new(FileStore::new()?);
    let mut favorites = FavoritesStore::load(store);

    match action {
        FavAction::List => {
            if favorites.is_empty() {
                println!("No favorites saved");
            } else {
                for character in favorites.favorites() {
                    print_row(character);
                }
            }
        }
        FavAction::Add { id } => {
            if favorites.contains(id) {
                println!("#{id} is already a favorite");
            } else {
                let client = RickAndMortyClient::new()?;
                let character = client.character(id)?;
                telemetry.log_event(
                    "Add Favorite",
                    serde_json::json!({
                        "characterId": character.id,
                        "characterName": character.name,
                    }),
                );
                println!("Added {} (#{})", character.name, character.id);
                favorites.dispatch(FavoritesCommand::Add(character));
            }
        }
        FavAction::Remove { id } => match favorites.remove_by_id(id) {
            Some(character) => {
                telemetry.log_event(
                    "Remove Favorite",
                    serde_json::json!({
                        "characterId": character.id,
                        "characterName": character.name,
                    }),
                );
                println!("Removed {} (#{})", character.name, character.id);
            }
            None => println!("#{id} is not a favorite"),
        },
        FavAction::Clear => {
            favorites.clear_all();
            println!("All stored data cleared");
        }
    }

    favorites.flush();
    Ok(())
}

fn theme(toggle: bool) -> Result<()> {
    let store: Arc<dyn KvStore> = Arc::new(FileStore::new()?);
    let mut theme = ThemeStore::load(store, ThemeMode::Light);

    if toggle {
        let mode = theme.toggle();
        println!("Theme set to {mode}");
    } else {
        println!("Theme: {}", theme.mode());
    }
    Ok(())
}

fn print_row(character: &Character) {
    println!(
        "#{:<4} {:<28} {:<8} {}",
        character.id, character.name, character.status, character.species
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_flag_parses_globally() {
        let cli = Cli::try_parse_from(["portaldex", "--offline", "list"]).unwrap();
        assert!(cli.offline);

        let cli = Cli::try_parse_from(["portaldex", "list", "--offline"]).unwrap();
        assert!(cli.offline);

        let cli = Cli::try_parse_from(["portaldex", "list"]).unwrap();
        assert!(!cli.offline);
    }

    #[test]
    fn test_offline_flag_reaches_the_pager_gate() {
        use portaldex::error::AppError;

        // The same connectivity wiring run() builds, with offline set
        let connectivity: Box<dyn Connectivity> = Box::new(SharedConnectivity::new(false));
        let source = RickAndMortyClient::with_base_url("http://localhost:1").unwrap();
        let mut pager = CatalogPager::new(Box::new(source), connectivity, Box::new(NullSink));

        let err = pager.load_page(portaldex::config::api::FIRST_PAGE).unwrap_err();
        assert!(matches!(err, AppError::Offline(_)));
    }
}
