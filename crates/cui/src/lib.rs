mod actions;
mod app;
mod input;
pub mod script;
mod view;

use anyhow::{Context, Result};
use app::App;
use crossterm::event::{self, Event as CEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use memoria_core::{GameConfig, PairCount};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use script::{load_config_file, load_script_file};
use std::io::{self, stdout, IsTerminal};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const DEFAULT_SEED: u64 = 0xCAFE;

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub seed: Option<u64>,
    pub pairs: Option<PairCount>,
    pub config_path: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let config = match options.config_path.as_ref() {
        Some(path) => load_config_file(path)
            .map_err(|err| anyhow::anyhow!(err))
            .with_context(|| format!("load game config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let mut seed_value = options.seed;
    let mut pairs_value = options.pairs;
    let mut scripted = None;
    if let Some(path) = options.script_path.as_ref() {
        let script = load_script_file(path)
            .map_err(|err| anyhow::anyhow!(err))
            .with_context(|| format!("load action script from {}", path.display()))?;
        if seed_value.is_none() {
            seed_value = Some(script.seed);
        }
        if pairs_value.is_none() {
            pairs_value = PairCount::from_pairs(script.pairs);
        }
        scripted = Some(script.actions);
    }

    let seed = seed_value.unwrap_or(DEFAULT_SEED);
    let pairs = pairs_value.unwrap_or_default();
    let mut app = App::bootstrap(config, pairs, seed)?;
    if let Some(actions) = scripted {
        app.auto_perform_actions(&actions)
            .map_err(|err| anyhow::anyhow!(err))
            .context("apply scripted actions")?;
    }

    ensure_interactive_terminal()?;

    enable_raw_mode().map_err(|err| {
        anyhow::anyhow!(
            "failed to enable raw mode; ensure the process owns an interactive terminal: {err}"
        )
    })?;
    let mut stdout = stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let run_result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    run_result
}

pub fn run_with_args(args: &[String]) -> Result<()> {
    let options = parse_options(args);
    run(options)
}

fn parse_options(args: &[String]) -> LaunchOptions {
    let mut seed = std::env::var("MEMORIA_SEED")
        .ok()
        .and_then(|value| value.parse::<u64>().ok());
    let mut pairs = None;
    let mut config_path = None;
    let mut script_path = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--pairs" | "-p" => {
                if let Some(value) = args.get(idx + 1) {
                    pairs = value
                        .parse::<usize>()
                        .ok()
                        .and_then(PairCount::from_pairs);
                    idx += 1;
                }
            }
            "--config" => {
                if let Some(value) = args.get(idx + 1) {
                    config_path = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--script" => {
                if let Some(value) = args.get(idx + 1) {
                    script_path = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    LaunchOptions {
        seed,
        pairs,
        config_path,
        script_path,
    }
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Short poll window keeps the clock and pending resolutions moving
    // between key presses.
    let tick_rate = Duration::from_millis(33);
    let mut last_tick = Instant::now();
    while !app.should_quit {
        terminal.draw(|frame| view::draw(frame, app))?;
        if event::poll(tick_rate)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = input::map_key(key);
                actions::dispatch(app, action);
            }
        }
        let now = Instant::now();
        app.on_tick(now.duration_since(last_tick));
        last_tick = now;
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn ensure_interactive_terminal() -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Ok(());
    }
    anyhow::bail!(
        "memoria-cui requires an interactive TTY (run directly in a terminal, not a piped/headless shell)"
    );
}
