//! Command-line runtime and entry point.
//!
//! This module provides the thin integration layer between the Wandernotes
//! library and a terminal. It parses arguments with `clap`, translates each
//! subcommand into library events, and executes the actions the library
//! returns.
//!
//! # Lifecycle
//!
//! 1. **Configure**: Merge the config file with command-line overrides
//! 2. **Observe**: Initialize logging to `<data_dir>/wandernotes.log`
//! 3. **Load**: Open the slot store and load (or seed) the posts
//! 4. **Dispatch**: Feed events to `handle_event` / `submit_post`
//! 5. **Execute**: Run returned actions (prompts, file writes)
//!
//! # Event Mapping
//!
//! - `post` → `Event::FormEdited`, `select_photo`, then `submit_post` with the photo path
//! - `render --query Q --mood M --open ID` → `SearchInput`, `MoodFilterChanged`, `OpenPost`
//! - `render --focus-search` → `Event::Key { key: "k", ctrl: true }`
//! - `delete ID` → `Event::DeleteRequested`, then `Confirm` / `Cancel`
//! - `clear` → `Event::ClearAllRequested`, then `Confirm` / `Cancel`
//! - `export` → `Event::Export`
//!
//! # Actions
//!
//! - `RequestConfirmation`: asks on stderr, reads y/N from stdin (skipped by `--yes`)
//! - `ExportFile`: writes the file into the export directory
//! - `FocusSearch`: nothing to do; the rendered page carries `autofocus`

#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wandernotes::feed;
use wandernotes::photo::{FilePhotoReader, PhotoSelection};
use wandernotes::storage::KeyValueStore;
use wandernotes::ui::helpers::card_date_label;
use wandernotes::{
    handle_event, select_photo, submit_post, Action, AppState, Config, Event, Mood, MoodFilter,
    Result,
};

/// A local travel journal: mood-tagged posts, a searchable HTML feed, JSON export.
#[derive(Debug, Parser)]
#[command(name = "wandernotes", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding posts and logs (overrides the config file).
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Built-in theme name (overrides the config file).
    #[arg(long, global = true, value_name = "NAME")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a post.
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        content: String,
        /// One of relax, food, adventure, culture.
        #[arg(long, default_value = "relax")]
        mood: Mood,
        /// Image file to attach.
        #[arg(long, value_name = "PATH")]
        photo: Option<PathBuf>,
    },

    /// Render the feed as a standalone HTML page.
    Render {
        /// Search text.
        #[arg(long, short)]
        query: Option<String>,
        /// Mood filter: all, relax, food, adventure, culture.
        #[arg(long, default_value = "all")]
        mood: MoodFilter,
        /// Open the detail view for this post id.
        #[arg(long, value_name = "ID")]
        open: Option<String>,
        /// Give the search box focus when the page loads.
        #[arg(long)]
        focus_search: bool,
        /// Output file (stdout when omitted).
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Print the feed as text, newest first.
    List {
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long, default_value = "all")]
        mood: MoodFilter,
    },

    /// Delete a post by id.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },

    /// Remove every post.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },

    /// Write all posts to wandernotes_posts.json.
    Export {
        /// Target directory (current directory when omitted).
        #[arg(long, short, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

/// How actions are executed for the current command.
struct Runtime {
    assume_yes: bool,
    export_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("wandernotes: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Merges the config file (if any) with command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(dir) = &cli.data_dir {
        config.data_dir.clone_from(dir);
    }
    if let Some(theme) = &cli.theme {
        config.theme_name.clone_from(theme);
        config.theme_file = None;
    }

    Ok(config)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    wandernotes::observability::init_tracing(&config);

    let span = tracing::debug_span!("run", command = ?cli.command);
    let _guard = span.entered();

    let mut state = wandernotes::initialize(&config)?;

    match cli.command {
        Command::Post {
            title,
            location,
            content,
            mood,
            photo,
        } => {
            handle_event(
                &mut state,
                &Event::FormEdited {
                    title,
                    location,
                    content,
                    mood,
                },
            )?;

            let before = state.store.list().len();
            let runtime = tokio::runtime::Builder::new_current_thread().build()?;
            let selection = PhotoSelection::from(photo);
            runtime.block_on(async {
                select_photo(&mut state, &FilePhotoReader, &selection).await?;
                if selection != PhotoSelection::NotSelected && state.form.photo_preview.is_none() {
                    return Ok((false, vec![]));
                }
                submit_post(&mut state, &FilePhotoReader, &selection).await
            })?;

            report_status(&state);
            if state.store.list().len() == before {
                return Ok(ExitCode::FAILURE);
            }
            if let Some(post) = state.store.list().first() {
                println!("{}", post.id);
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Render {
            query,
            mood,
            open,
            focus_search,
            out,
        } => {
            let mut events = vec![Event::MoodFilterChanged(mood)];
            events.extend(query.map(Event::SearchInput));
            events.extend(open.map(Event::OpenPost));
            if focus_search {
                events.push(Event::Key {
                    key: "k".to_string(),
                    ctrl: true,
                    meta: false,
                });
            }

            let runtime = Runtime {
                assume_yes: false,
                export_dir: config.data_dir.clone(),
            };
            for event in &events {
                let (_, actions) = handle_event(&mut state, event)?;
                execute_actions(&mut state, actions, &runtime)?;
            }

            let page = wandernotes::ui::render(&state);
            match out {
                Some(path) => {
                    std::fs::write(&path, page)?;
                    eprintln!("Wrote {}", path.display());
                }
                None => io::stdout().write_all(page.as_bytes())?,
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::List { query, mood } => {
            let query = query.unwrap_or_default();
            let posts = feed::derive(state.store.list(), &query, mood);
            let mut stdout = io::stdout().lock();
            for post in posts {
                writeln!(
                    stdout,
                    "{}  {:<9}  {}  ({})  [{}]",
                    card_date_label(post.created_at()),
                    post.mood,
                    post.title,
                    post.location,
                    post.id
                )?;
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Delete { id, yes } => {
            let (_, actions) = handle_event(&mut state, &Event::DeleteRequested(id.clone()))?;
            if actions.is_empty() {
                eprintln!("No post with id '{id}'.");
                return Ok(ExitCode::FAILURE);
            }
            let runtime = Runtime {
                assume_yes: yes,
                export_dir: config.data_dir.clone(),
            };
            execute_actions(&mut state, actions, &runtime)?;
            report_status(&state);
            Ok(ExitCode::SUCCESS)
        }

        Command::Clear { yes } => {
            let (_, actions) = handle_event(&mut state, &Event::ClearAllRequested)?;
            let runtime = Runtime {
                assume_yes: yes,
                export_dir: config.data_dir.clone(),
            };
            execute_actions(&mut state, actions, &runtime)?;
            report_status(&state);
            Ok(ExitCode::SUCCESS)
        }

        Command::Export { out } => {
            let (_, actions) = handle_event(&mut state, &Event::Export)?;
            let runtime = Runtime {
                assume_yes: false,
                export_dir: out.unwrap_or_else(|| PathBuf::from(".")),
            };
            execute_actions(&mut state, actions, &runtime)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Executes actions in order, including those produced by answering prompts.
fn execute_actions<S: KeyValueStore>(
    state: &mut AppState<S>,
    actions: Vec<Action>,
    runtime: &Runtime,
) -> Result<()> {
    let mut queue: VecDeque<Action> = actions.into();

    while let Some(action) = queue.pop_front() {
        tracing::debug!(action = ?action_name(&action), "executing action");
        match action {
            Action::RequestConfirmation { prompt } => {
                let answer = if runtime.assume_yes || ask(&prompt)? {
                    Event::Confirm
                } else {
                    Event::Cancel
                };
                let (_, follow_up) = handle_event(state, &answer)?;
                queue.extend(follow_up);
            }
            Action::ExportFile { filename, contents } => {
                let path = write_export(&runtime.export_dir, &filename, &contents)?;
                eprintln!("Exported to {}", path.display());
            }
            Action::FocusSearch => {}
        }
    }

    Ok(())
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::RequestConfirmation { .. } => "request_confirmation",
        Action::ExportFile { .. } => "export_file",
        Action::FocusSearch => "focus_search",
    }
}

/// Asks a yes/no question on stderr and reads the answer from stdin.
fn ask(prompt: &str) -> Result<bool> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "{prompt} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn write_export(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, contents)?;
    Ok(path)
}

fn report_status<S: KeyValueStore>(state: &AppState<S>) {
    if let Some(status) = &state.status {
        eprintln!("{status}");
    }
}
