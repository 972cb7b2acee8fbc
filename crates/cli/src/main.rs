use memoria_core::{
    CardState, EventBus, FlipOutcome, GameConfig, PairCount, Session, TokenKind,
};
use memoria_cui::script::{
    load_script_file, save_script_file, ActionScript, ScriptedAction, SCRIPT_SCHEMA_VERSION,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const DEFAULT_SEED: u64 = memoria_cui::DEFAULT_SEED;
const DEFAULT_REPLAY_PATH: &str = "memoria_replay.json";

#[derive(Debug, Clone, Default)]
struct CliOptions {
    auto: bool,
    cui: bool,
    seed: Option<u64>,
    pairs: Option<PairCount>,
    script: Option<PathBuf>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => options.auto = true,
            "--cui" => options.cui = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--pairs" | "-p" => {
                if let Some(value) = args.get(idx + 1) {
                    options.pairs = value
                        .parse::<usize>()
                        .ok()
                        .and_then(PairCount::from_pairs);
                    idx += 1;
                }
            }
            "--script" => {
                if let Some(value) = args.get(idx + 1) {
                    options.script = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    options
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if options.cui {
        let launch = memoria_cui::LaunchOptions {
            seed: options.seed,
            pairs: options.pairs,
            config_path: None,
            script_path: options.script.clone(),
        };
        if let Err(err) = memoria_cui::run(launch) {
            eprintln!("cui launch error: {err}");
            std::process::exit(1);
        }
        return;
    }
    if options.auto {
        run_auto(&options);
        return;
    }
    run_repl(&options);
}

fn build_session(seed: u64, pairs: PairCount) -> Session {
    match Session::new(GameConfig::default(), pairs, seed) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("config error: {err}");
            std::process::exit(1);
        }
    }
}

/// Non-interactive demo: plays a seeded session to the win. The demo
/// cheats by reading the deck, so every evaluation is a match.
fn run_auto(options: &CliOptions) {
    if let Some(path) = options.script.as_ref() {
        replay_script(path);
        return;
    }
    let seed = options.seed.unwrap_or(DEFAULT_SEED);
    let pairs = options.pairs.unwrap_or_default();
    let mut events = EventBus::default();
    let mut session = build_session(seed, pairs);
    println!("seed: {seed}");
    println!("pairs: {} ({} cards)", pairs.pairs(), pairs.deck_len());

    let mut order: Vec<(TokenKind, Vec<u32>)> = Vec::new();
    for card in &session.deck.cards {
        match order.iter_mut().find(|(token, _)| *token == card.token) {
            Some((_, ids)) => ids.push(card.id),
            None => order.push((card.token, vec![card.id])),
        }
    }

    let step = session.config.mismatch_cooldown;
    for (token, ids) in order {
        session.flip(ids[0], &mut events);
        session.flip(ids[1], &mut events);
        session.tick(step, &mut events);
        println!("paired {}", token.key());
    }
    for event in events.drain() {
        println!("event: {event:?}");
    }
    print_summary(&session);
}

fn replay_script(path: &Path) {
    let script = match load_script_file(path) {
        Ok(script) => script,
        Err(err) => {
            eprintln!("script error: {err}");
            std::process::exit(1);
        }
    };
    let Some(pairs) = PairCount::from_pairs(script.pairs) else {
        eprintln!("script error: unsupported pair count {}", script.pairs);
        std::process::exit(1);
    };
    let mut events = EventBus::default();
    let mut session = build_session(script.seed, pairs);
    println!("replaying {} actions from {}", script.actions.len(), path.display());
    for action in &script.actions {
        if let Err(err) = apply_scripted_action(&mut session, &mut events, action) {
            eprintln!("replay error: {err}");
            std::process::exit(1);
        }
    }
    for event in events.drain() {
        println!("event: {event:?}");
    }
    print_summary(&session);
}

fn apply_scripted_action(
    session: &mut Session,
    events: &mut EventBus,
    action: &ScriptedAction,
) -> Result<(), String> {
    match action.action.as_str() {
        "flip" => {
            let id = action.card.ok_or("flip action needs a card id")?;
            session.flip(id, events);
        }
        "start" => session.start(events),
        "pause" => session.pause(events),
        "reset" => {
            let pairs = match action.pairs {
                Some(raw) => PairCount::from_pairs(raw)
                    .ok_or_else(|| format!("unsupported pair count {raw}"))?,
                None => session.pairs,
            };
            session.reset(pairs, events);
        }
        "tick" => {
            let millis = action.millis.ok_or("tick action needs millis")?;
            session.tick(Duration::from_millis(millis), events);
        }
        other => return Err(format!("unknown scripted action '{other}'")),
    }
    Ok(())
}

fn run_repl(options: &CliOptions) {
    let mut seed = options.seed.unwrap_or(DEFAULT_SEED);
    let mut pairs = options.pairs.unwrap_or_default();
    let mut events = EventBus::default();
    let mut session = build_session(seed, pairs);
    let mut recorded: Vec<ScriptedAction> = Vec::new();
    let mut last_command = Instant::now();

    println!("memoria repl (seed {seed})");
    print_help();
    print_board(&session);
    loop {
        let Some(line) = read_line("> ") else {
            break;
        };
        // Wall time between commands drives the session clock and lets
        // pending resolutions land. Record it so replays stay faithful.
        let now = Instant::now();
        let dt = now.duration_since(last_command);
        last_command = now;
        session.tick(dt, &mut events);
        if dt.as_millis() >= 1 {
            recorded.push(ScriptedAction {
                action: "tick".to_string(),
                card: None,
                pairs: None,
                millis: Some(dt.as_millis() as u64),
            });
        }

        let input = line.trim();
        if input.is_empty() {
            drain_events(&mut events);
            continue;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        match cmd {
            "help" | "h" | "?" => print_help(),
            "quit" | "exit" | "q" => break,
            "board" | "b" | "ls" => print_board(&session),
            "state" | "s" => print_summary(&session),
            "flip" | "f" => match args.first().and_then(|value| value.parse::<u32>().ok()) {
                Some(id) => {
                    let outcome = session.flip(id, &mut events);
                    recorded.push(ScriptedAction {
                        action: "flip".to_string(),
                        card: Some(id),
                        pairs: None,
                        millis: None,
                    });
                    match outcome {
                        FlipOutcome::Ignored => println!("no flip (locked, won, or card unavailable)"),
                        FlipOutcome::Opened => println!("card {id} opened"),
                        FlipOutcome::MatchPending => println!("pair found"),
                        FlipOutcome::MismatchPending => {
                            println!("no match; cards close after the cooldown")
                        }
                    }
                    print_board(&session);
                }
                None => println!("usage: flip <card id>"),
            },
            "start" => {
                session.start(&mut events);
                recorded.push(ScriptedAction {
                    action: "start".to_string(),
                    card: None,
                    pairs: None,
                    millis: None,
                });
            }
            "pause" | "p" => {
                session.pause(&mut events);
                recorded.push(ScriptedAction {
                    action: "pause".to_string(),
                    card: None,
                    pairs: None,
                    millis: None,
                });
            }
            "reset" | "r" => {
                let pairs = match args.first() {
                    Some(raw) => match raw.parse::<usize>().ok().and_then(PairCount::from_pairs) {
                        Some(pairs) => pairs,
                        None => {
                            println!("pair count must be 6, 8 or 10");
                            drain_events(&mut events);
                            continue;
                        }
                    },
                    None => session.pairs,
                };
                session.reset(pairs, &mut events);
                recorded.push(ScriptedAction {
                    action: "reset".to_string(),
                    card: None,
                    pairs: Some(pairs.pairs()),
                    millis: None,
                });
                print_board(&session);
            }
            "wait" | "w" => match args.first().and_then(|value| value.parse::<u64>().ok()) {
                Some(millis) => {
                    session.tick(Duration::from_millis(millis), &mut events);
                    recorded.push(ScriptedAction {
                        action: "tick".to_string(),
                        card: None,
                        pairs: None,
                        millis: Some(millis),
                    });
                    print_board(&session);
                }
                None => println!("usage: wait <millis>"),
            },
            "save" => {
                let path = args
                    .first()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_REPLAY_PATH));
                let script = ActionScript {
                    version: SCRIPT_SCHEMA_VERSION,
                    seed,
                    pairs: pairs.pairs(),
                    actions: recorded.clone(),
                };
                match save_script_file(&script, &path) {
                    Ok(_) => println!(
                        "saved replay: {} ({} actions)",
                        path.display(),
                        recorded.len()
                    ),
                    Err(err) => println!("error: {err}"),
                }
            }
            "replay" => match args.first() {
                Some(raw) => {
                    let path = PathBuf::from(raw);
                    match load_script_file(&path) {
                        Ok(script) => match PairCount::from_pairs(script.pairs) {
                            Some(script_pairs) => {
                                let mut restored = build_session(script.seed, script_pairs);
                                let mut restored_events = EventBus::default();
                                let mut failed = None;
                                for action in &script.actions {
                                    if let Err(err) = apply_scripted_action(
                                        &mut restored,
                                        &mut restored_events,
                                        action,
                                    ) {
                                        failed = Some(err);
                                        break;
                                    }
                                }
                                match failed {
                                    Some(err) => println!("error: {err}"),
                                    None => {
                                        session = restored;
                                        events = restored_events;
                                        seed = script.seed;
                                        pairs = script_pairs;
                                        recorded = script.actions;
                                        println!(
                                            "loaded replay: {} ({} actions)",
                                            path.display(),
                                            recorded.len()
                                        );
                                        print_board(&session);
                                    }
                                }
                            }
                            None => println!(
                                "error: unsupported pair count {}",
                                script.pairs
                            ),
                        },
                        Err(err) => println!("error: {err}"),
                    }
                }
                None => println!("usage: replay <path>"),
            },
            _ => println!("unknown command '{cmd}' (try help)"),
        }
        drain_events(&mut events);
        if session.is_won() {
            print_summary(&session);
        }
    }
}

fn drain_events(events: &mut EventBus) {
    for event in events.drain() {
        println!("event: {event:?}");
    }
}

fn print_help() {
    println!("commands:");
    println!("  board | b            show the card grid");
    println!("  flip <id> | f <id>   flip a card");
    println!("  start / pause | p    clock control");
    println!("  reset [6|8|10] | r   reshuffle, optionally changing pairs");
    println!("  wait <millis> | w    advance the session clock explicitly");
    println!("  state | s            moves, time, best");
    println!("  save [path]          write the recorded replay script");
    println!("  replay <path>        load and re-apply a replay script");
    println!("  quit | q             leave");
}

fn print_board(session: &Session) {
    let cols = match session.pairs {
        PairCount::Six | PairCount::Eight => 4,
        PairCount::Ten => 5,
    };
    for row in session.deck.cards.chunks(cols) {
        let mut line = String::new();
        for card in row {
            let face = match card.state {
                CardState::Hidden => "──".to_string(),
                CardState::Open => card.token.glyph().to_string(),
                CardState::Matched => format!("{}*", card.token.glyph()),
            };
            line.push_str(&format!("[{:>2}] {:<4} ", card.id, face));
        }
        println!("{line}");
    }
}

fn print_summary(session: &Session) {
    let best = match session.best_time() {
        Some(best) => format!("{}s", best.as_secs()),
        None => "—".to_string(),
    };
    println!(
        "moves {} | time {}s | best {} | {}{}",
        session.moves(),
        session.elapsed().as_secs(),
        best,
        if session.clock.is_running() {
            "running"
        } else {
            "stopped"
        },
        if session.is_won() { " | won 🎉" } else { "" }
    );
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}
