//! page-prompt CLI
//!
//! Extract readable content from a URL, print it, or assemble a prompt and
//! deliver it into a chat page.

use anyhow::Context;
use clap::{Parser, Subcommand};
use page_prompt::browser::{BrowserSession, LaunchOptions};
use page_prompt::deliver::{ChatTarget, deliver_prompt};
use page_prompt::extract::{ContentBlock, extract_page_content};
use page_prompt::prompt::{TemplateStore, build_prompt};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "page-prompt", version, about = "Extract readable page content and prompt an AI chat with it")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the readable content of a page and print it
    Extract {
        /// URL of the page to extract
        url: String,

        /// Print the raw extraction result as JSON
        #[arg(long)]
        json: bool,

        /// Launch the browser with a visible window
        #[arg(long)]
        headed: bool,
    },

    /// Extract a page, build a prompt, and deliver it into a chat page
    Send {
        /// URL of the page to extract
        url: String,

        /// Chat target to deliver to
        #[arg(long, default_value = "gemini")]
        target: String,

        /// Template id to use instead of the active one
        #[arg(long)]
        template: Option<String>,

        /// Path to a template store JSON file
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// List the configured prompt templates
    Templates {
        /// Path to a template store JSON file
        #[arg(long)]
        store: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Commands::Extract { url, json, headed } => extract(&url, json, headed),
        Commands::Send { url, target, template, store } => send(&url, &target, template.as_deref(), store),
        Commands::Templates { store } => templates(store),
    }
}

fn load_store(path: Option<PathBuf>) -> anyhow::Result<TemplateStore> {
    match path {
        Some(path) => TemplateStore::load(&path)
            .with_context(|| format!("failed to load templates from {}", path.display())),
        None => Ok(TemplateStore::with_defaults()),
    }
}

fn capture(url: &str, headless: bool) -> anyhow::Result<page_prompt::ExtractionResult> {
    let session = BrowserSession::launch(LaunchOptions::new().headless(headless))
        .context("failed to launch browser")?;

    session.navigate(url).with_context(|| format!("failed to open {}", url))?;
    session.wait_for_navigation().context("page did not finish loading")?;

    // Let late-running scripts fill in dynamic content
    std::thread::sleep(Duration::from_millis(1000));

    let snapshot = session.capture_snapshot().context("failed to capture page snapshot")?;
    Ok(extract_page_content(&snapshot))
}

fn extract(url: &str, json: bool, headed: bool) -> anyhow::Result<()> {
    let result = capture(url, !headed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("# {}\n", result.title);
    for block in &result.blocks {
        match block {
            ContentBlock::Heading { level, text } => {
                println!("{} {}\n", "#".repeat(*level as usize), text);
            }
            ContentBlock::Text { text } => println!("{}\n", text),
        }
    }
    if !result.images.is_empty() {
        println!("Images:");
        for image in &result.images {
            println!("  {} ({}x{})", image.src, image.width, image.height);
        }
    }
    Ok(())
}

fn send(url: &str, target: &str, template_id: Option<&str>, store: Option<PathBuf>) -> anyhow::Result<()> {
    let chat = ChatTarget::by_name(target)
        .with_context(|| format!("unknown chat target '{}'", target))?;

    let store = load_store(store)?;
    let template = match template_id {
        Some(id) => store.get(id).with_context(|| format!("no template with id '{}'", id))?,
        None => store.active().context("template store has no active template")?,
    };

    // Delivery needs a visible window: the user takes over the chat from here
    let session = BrowserSession::launch(LaunchOptions::new().headless(false))
        .context("failed to launch browser")?;

    session.navigate(url).with_context(|| format!("failed to open {}", url))?;
    session.wait_for_navigation().context("page did not finish loading")?;
    std::thread::sleep(Duration::from_millis(1000));

    let snapshot = session.capture_snapshot().context("failed to capture page snapshot")?;
    let result = extract_page_content(&snapshot);
    if result.is_empty() {
        log::warn!("no content blocks extracted; prompting with title and URL only");
    }

    let prompt = build_prompt(&result, template);
    deliver_prompt(&session, &chat, &prompt).context("failed to deliver prompt")?;

    println!("Prompt delivered to {}.", chat.name);
    Ok(())
}

fn templates(store: Option<PathBuf>) -> anyhow::Result<()> {
    let store = load_store(store)?;
    for template in store.iter() {
        let marker = if template.is_active { "*" } else { " " };
        println!("{} {}  {}", marker, template.id, template.name);
    }
    Ok(())
}
