//! Command-line interface for the listings tools.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use foundation_listings::config::{load_settings, Settings};
use foundation_listings::index::{HttpClient, IndexLoader};
use foundation_listings::listing::{visible_items, Facets, FilterState, SortDirection};
use foundation_listings::render::templates::base_template;
use foundation_listings::server::{self, load_labels};
use foundation_listings::{ContentItem, Language, ListingPage, Section};

#[derive(Parser, Debug)]
#[command(name = "listings", version, about = "Foundation news and projects listings")]
pub struct Cli {
    /// Origin the content index is read from.
    #[arg(long, global = true, env = "LISTINGS_BASE_URL")]
    base_url: Option<String>,

    /// Hostname used to pick the site variant.
    #[arg(long, global = true, env = "LISTINGS_HOSTNAME")]
    hostname: Option<String>,

    /// Content language (en or fr).
    #[arg(long = "lang", global = true, env = "LISTINGS_LANGUAGE")]
    language: Option<Language>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the category and location values of a section.
    Facets {
        #[arg(default_value = "news")]
        section: Section,
    },
    /// Print the items a filter combination shows, in display order.
    List {
        #[arg(default_value = "news")]
        section: Section,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        search: Option<String>,
        /// Oldest first.
        #[arg(long)]
        ascending: bool,
        /// Output machine-readable JSON.
        #[arg(long)]
        json: bool,
    },
    /// Render a landing page to HTML.
    Render {
        #[arg(default_value = "news")]
        section: Section,
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Serve the landing pages over HTTP.
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value_t = 3030)]
        port: u16,
    },
}

#[derive(Serialize)]
struct FacetsOut<'a> {
    section: Section,
    language: Language,
    categories: &'a [String],
    locations: &'a [String],
}

impl Cli {
    fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref base_url) = self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(ref hostname) = self.hostname {
            settings.hostname = Some(hostname.clone());
        }
        if let Some(language) = self.language {
            settings.language = language;
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = load_settings().await;
    cli.apply_to_settings(&mut settings);

    match cli.command {
        Commands::Facets { section } => {
            let items = load_section(&settings, section).await?;
            let facets = Facets::for_section(section, &items);
            let out = FacetsOut {
                section,
                language: settings.language,
                categories: &facets.categories,
                locations: &facets.locations,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::List {
            section,
            category,
            location,
            search,
            ascending,
            json,
        } => {
            let items = load_section(&settings, section).await?;
            let mut state = FilterState::default();
            state.select_category(category.unwrap_or_default());
            if section.has_location() {
                state.select_location(location.unwrap_or_default());
            }
            state.set_search(search.unwrap_or_default());
            if ascending {
                state.sort = SortDirection::Ascending;
            }

            let visible = visible_items(section, &items, &state);
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                for item in &visible {
                    let key = match section {
                        Section::News => &item.date,
                        Section::Projects => &item.duration,
                    };
                    println!("{:<14} {}  {}", key, item.title, item.path);
                }
                info!("{} of {} items", visible.len(), items.len());
            }
        }
        Commands::Render { section, output } => {
            let items = load_section(&settings, section).await?;
            let page = ListingPage::new(
                section,
                items,
                load_labels(&settings, settings.language),
                settings.page_options(section),
            );
            let html = base_template(
                section.as_str(),
                settings.language,
                &format!("{}-landing", section),
                &page.view().to_html(),
            );
            match output {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    info!("Wrote {}", path.display());
                }
                None => println!("{}", html),
            }
        }
        Commands::Serve { host, port } => {
            server::serve(settings, &host, port).await?;
        }
    }

    Ok(())
}

async fn load_section(settings: &Settings, section: Section) -> anyhow::Result<Vec<ContentItem>> {
    let client = HttpClient::with_user_agent(
        &settings.base_url,
        settings.request_timeout(),
        settings.user_agent.as_deref(),
    )?;
    let loader = IndexLoader::new(Arc::new(client))
        .with_chunk_size(settings.chunk_size)
        .with_sheet(settings.sheet.clone());
    Ok(loader
        .load(section, settings.site_variant(), settings.language)
        .await)
}
