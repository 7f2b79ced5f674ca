mod app;
mod config;
mod dataset;
mod engine;
mod event;
mod session;
mod ui;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};

use app::App;
use config::Config;
use engine::store::EntryStore;
use event::{AppEvent, EventHandler};
use ui::components::card::Card;
use ui::components::level_bar::LevelBar;
use ui::components::status_line::StatusLine;

#[derive(Parser)]
#[command(
    name = "hskdr",
    version,
    about = "Terminal HSK flashcard drills with adaptive practice"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Path to a JSON word list")]
    dataset: Option<PathBuf>,

    #[arg(long, help = "Lowest HSK level to draw from (1-6)")]
    min_level: Option<u8>,

    #[arg(long, help = "Highest HSK level to draw from (1-6)")]
    max_level: Option<u8>,

    #[arg(long, help = "Seed the sampler for a reproducible session")]
    seed: Option<u64>,

    #[arg(long, help = "Print per-level entry counts and exit")]
    stats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(path) = cli.dataset {
        config.dataset = Some(path.display().to_string());
    }
    if let Some(min) = cli.min_level {
        config.min_level = min;
    }
    if let Some(max) = cli.max_level {
        config.max_level = max;
    }

    if cli.stats {
        return print_stats(&config);
    }

    let mut app = App::new(config, cli.seed)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Remember the level range the learner settled on.
    app.config.min_level = app.session.range().min();
    app.config.max_level = app.session.range().max();
    if let Err(err) = app.config.save() {
        eprintln!("Warning: could not save config: {err}");
    }

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn print_stats(config: &Config) -> Result<()> {
    let rows = match &config.dataset {
        Some(path) => dataset::load_from_path(Path::new(path))?,
        None => dataset::load_default()?,
    };
    let store = EntryStore::from_rows(rows)?;
    for (i, count) in store.level_counts().iter().enumerate() {
        println!("HSK{}: {count} entries", i + 1);
    }
    println!("total: {} entries", store.len());
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut Frame, app: &App) {
    let [level_area, card_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    frame.render_widget(LevelBar::new(app.session.range(), app.theme), level_area);

    if let Ok(entry) = app.session.current() {
        frame.render_widget(Card::new(entry, app.reveal, app.theme), card_area);
    }

    let timeline = app.session.timeline();
    let weight = app
        .session
        .current()
        .ok()
        .map(|entry| app.session.weights().get(entry.id));
    frame.render_widget(
        StatusLine::new(
            timeline.cursor() + 1,
            timeline.len(),
            weight,
            app.session.pending_feedback(),
            app.status.as_deref(),
            app.theme,
        ),
        status_area,
    );
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore Repeat/Release so one keypress means one action
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(' ') => app.toggle_reveal(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => app.next_entry(),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('p') => app.prev_entry(),
        KeyCode::Home => app.first_entry(),
        KeyCode::End => app.newest_entry(),
        KeyCode::Up => app.toggle_mark_more(),
        KeyCode::Down => app.toggle_mark_less(),
        KeyCode::Char('[') => app.lower_min_level(),
        KeyCode::Char(']') => app.raise_min_level(),
        KeyCode::Char(ch @ '1'..='6') => app.set_max_level(ch as u8 - b'0'),
        _ => {}
    }
}
