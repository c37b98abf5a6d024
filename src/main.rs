//! Terminal front-end and entry point.
//!
//! This binary is the thin integration layer between the FridgeChef library
//! and an interactive terminal. It reads commands line by line, hands them to
//! the [`Session`], and redraws the recipe card whenever state changes.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────┐
//! │   main task (select! loop)    │
//! │  stdin lines ──► Session      │  ← parsing, event handling, redraw
//! │        ▲           │          │
//! │        │     tokio::spawn     │
//! │   mpsc │           ▼          │
//! │  ┌──────────────────────┐     │
//! │  │ RecipeWorker tasks   │     │  ← Gemini text and image calls
//! │  └──────────────────────┘     │
//! └───────────────────────────────┘
//! ```
//!
//! # Commands
//!
//! - `egg, spinach`: Add ingredients (comma separated)
//! - `/rm <n>`: Remove ingredient number `n`
//! - `/meal <salad|main|appetizer>`: Choose the kind of dish
//! - `/go`: Generate a recipe
//! - `/back`: Return to the inventory
//! - `/quit`: Leave

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

use fridgechef::ui::{render, CLEAR_SCREEN};
use fridgechef::{parse_line, Config, Input, MealType, Result, Session, Theme};

/// Turn what's in your fridge into a recipe.
#[derive(Debug, Parser)]
#[command(name = "fridgechef", version, about)]
struct Args {
    /// Configuration file (default: ~/.config/fridgechef/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Built-in theme name
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Meal type to start with: salad, main or appetizer
    #[arg(long, value_name = "TYPE")]
    meal: Option<MealType>,

    /// Tracing filter, e.g. `debug` or `fridgechef=trace`
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,
}

impl Args {
    /// Flags take precedence over file and environment settings.
    fn apply(self, config: &mut Config) {
        if let Some(theme) = self.theme {
            config.theme_name = Some(theme);
            config.theme_file = None;
        }
        if let Some(meal) = self.meal {
            config.meal_type = meal;
        }
        if self.trace_level.is_some() {
            config.trace_level = self.trace_level;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fridgechef: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config_path = args.config.clone();
    let mut config = Config::load(config_path.as_deref())?;
    args.apply(&mut config);

    let trace_file = fridgechef::observability::init_tracing(&config);
    tracing::info!(
        trace_file = ?trace_file,
        theme = config.theme_name.as_deref().unwrap_or(fridgechef::ui::theme::DEFAULT_THEME),
        meal_type = %config.meal_type,
        "fridgechef starting"
    );

    if let Some(name) = &config.theme_name {
        if config.theme_file.is_none() && Theme::from_name(name).is_none() {
            eprintln!(
                "fridgechef: unknown theme '{name}' (available: {}), using default",
                Theme::BUILT_IN.join(", ")
            );
        }
    }

    let mut session = Session::from_config(&config)?;
    let mut notice: Option<String> = None;
    draw(&session, notice.as_deref())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let should_draw = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed");
                    break;
                };
                handle_line(&mut session, &line, &mut notice)?
            }
            response = session.next_response() => session.apply_response(response?)?,
        };

        if session.should_quit() {
            tracing::info!("quit requested");
            break;
        }
        if should_draw {
            draw(&session, notice.as_deref())?;
        }
    }

    println!();
    Ok(())
}

/// Parses and dispatches one input line. Returns whether to redraw.
fn handle_line(session: &mut Session, line: &str, notice: &mut Option<String>) -> Result<bool> {
    match parse_line(line) {
        Input::Events(events) => {
            *notice = None;
            for event in &events {
                session.dispatch(event)?;
            }
            // typed input scrolls the frame
            Ok(true)
        }
        Input::Empty => Ok(true),
        Input::Unknown(message) => {
            tracing::debug!(input = %line, "unrecognized input");
            *notice = Some(message);
            Ok(true)
        }
    }
}

fn draw(session: &Session, notice: Option<&str>) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{CLEAR_SCREEN}{}", render(session.state()))?;
    if let Some(notice) = notice {
        let theme = &session.state().theme;
        writeln!(
            stdout,
            "  {}{notice}{}",
            Theme::fg(&theme.colors.error_fg),
            Theme::reset()
        )?;
    }
    write!(stdout, "  › ")?;
    stdout.flush()?;
    Ok(())
}
