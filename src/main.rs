mod ai;
mod config;
mod debug;
mod flappy;
mod game;
mod game_modes;
mod highscore;
mod menu;
mod ui;

use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use config::Config;
use menu::{AppState, GameMode, MenuAction, MenuState};

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum CliCommand {
    Play { debug: bool },
    Help,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let debug_enabled = match parse_args(&args) {
        Ok(CliCommand::Play { debug }) => debug,
        Ok(CliCommand::Help) => {
            print_usage(&args[0]);
            return Ok(());
        }
        Err(unknown) => {
            eprintln!("Unknown argument: {}", unknown);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    // Initialize file-based diagnostic logging
    // This runs BEFORE TUI starts and persists throughout the session
    debug::init(debug_enabled).context("failed to open debug log")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "session start");

    let config = config::load_config().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load config file, using defaults");
        Config::default()
    });

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("session end");
    result.context("game loop failed")
}

/// Parse command line arguments; `Err` carries the first unknown argument
fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut debug = false;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--debug" | "-d" => debug = true,
            "--help" | "-h" => return Ok(CliCommand::Help),
            other => return Err(other.to_string()),
        }
    }

    Ok(CliCommand::Play { debug })
}

fn print_usage(program: &str) {
    println!("Carrom Arcade - Terminal Carrom (and a bonus Flappy Bird)");
    println!();
    println!("Usage:");
    println!("  {}            # Start at the main menu", program);
    println!(
        "  {} --debug    # Also log to {}",
        program,
        debug::log_file_path().display()
    );
    println!();
    println!("Config file: {}", config::get_config_path().display());
    println!();
    println!("Note: the board is played with the mouse; use a terminal with");
    println!("      mouse reporting enabled, or the arrow keys and Space.");
}

/// Menu -> game -> menu until the player quits
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), io::Error> {
    let default_bot = ai::BotType::from_name(&config.ai.difficulty).unwrap_or_else(|| {
        tracing::warn!(difficulty = %config.ai.difficulty, "unknown difficulty in config, using medium");
        ai::BotType::Medium
    });
    let mut menu_state = MenuState::with_default_bot(default_bot);
    let mut app_state = AppState::Menu;

    loop {
        match app_state {
            AppState::Menu => {
                terminal.draw(|f| menu::render_menu(f, &menu_state))?;

                match menu::handle_menu_input(&mut menu_state, &config.keybindings)? {
                    MenuAction::None => {}
                    MenuAction::StartGame(mode) => {
                        tracing::info!(?mode, "menu selection");
                        app_state = AppState::Game(mode);
                    }
                    MenuAction::ShowInstructions => app_state = AppState::Instructions,
                    MenuAction::Quit => app_state = AppState::Exiting,
                }
            }
            AppState::Instructions => {
                terminal.draw(menu::render_instructions)?;
                if menu::handle_instructions_input(&config.keybindings)? {
                    app_state = AppState::Menu;
                }
            }
            AppState::Game(mode) => {
                match mode {
                    GameMode::LocalTwoPlayer => game_modes::run_game_local(terminal, config)?,
                    GameMode::SinglePlayerAI(bot_type) => {
                        game_modes::run_game_vs_ai(terminal, config, bot_type)?
                    }
                    GameMode::Flappy => game_modes::run_flappy(terminal, config)?,
                }
                terminal.clear()?;
                app_state = AppState::Menu;
            }
            AppState::Exiting => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(
            parse_args(&args(&["carrom"])),
            Ok(CliCommand::Play { debug: false })
        );
        assert_eq!(
            parse_args(&args(&["carrom", "--debug"])),
            Ok(CliCommand::Play { debug: true })
        );
        assert_eq!(
            parse_args(&args(&["carrom", "-d", "--help"])),
            Ok(CliCommand::Help)
        );
        assert_eq!(
            parse_args(&args(&["carrom", "--listen"])),
            Err("--listen".to_string())
        );
    }
}
