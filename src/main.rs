use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::game::{Game, GameStatus};
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the number of columns
    #[arg(long)]
    width: Option<usize>,

    /// Override the number of rows
    #[arg(long)]
    height: Option<usize>,

    /// Play these 0-based columns without the TUI and print the final board
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    config.validate().context("invalid board size")?;

    // The TUI owns the terminal, so it only logs when given a file.
    let headless = cli.moves.is_some();
    if headless || cli.log_file.is_some() {
        init_logging(&config.logging.level, cli.log_file.as_deref())?;
    }

    let game = Game::new(config.board.width, config.board.height)?;
    info!(
        "new {}x{} game",
        game.board().width(),
        game.board().height()
    );

    match cli.moves {
        Some(moves) => play_script(game, &moves),
        None => run_tui(App::new(game, config.display)),
    }
}

fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("initializing logger")?;
    Ok(())
}

/// Apply `moves` in order and print the resulting board.
fn play_script(mut game: Game, moves: &[usize]) -> Result<()> {
    apply_moves(&mut game, moves);
    println!("{}", script_report(&game));
    Ok(())
}

/// Apply `moves` in order; invalid and post-game moves are skipped.
fn apply_moves(game: &mut Game, moves: &[usize]) {
    for (i, &column) in moves.iter().enumerate() {
        let result = game.drop_token(column);
        if !result.applied {
            debug!("move {} (column {column}) ignored", i + 1);
        }
    }
}

/// Board followed by a status line.
fn script_report(game: &Game) -> String {
    let status = match game.status() {
        GameStatus::InProgress => format!("{} to move", game.current_side().name()),
        GameStatus::Won(side) => format!("{} wins", side.name()),
        GameStatus::Drawn => "Draw".to_string(),
    };
    format!("{}\n{status}", game.board())
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(width: usize, height: usize, moves: &[usize]) -> Game {
        let mut game = Game::new(width, height).unwrap();
        apply_moves(&mut game, moves);
        game
    }

    #[test]
    fn test_winning_script() {
        let game = play(7, 6, &[0, 1, 0, 1, 0, 1, 0]);
        let report = script_report(&game);
        assert!(report.ends_with("\nPlayer A wins"));
        assert_eq!(game.move_count(), 7);
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let game = play(7, 6, &[0, 1, 0, 1, 0, 1, 0, 5, 5]);
        assert_eq!(game.move_count(), 7);
        assert!(script_report(&game).ends_with("Player A wins"));
    }

    #[test]
    fn test_invalid_columns_are_skipped() {
        // 7 is off the board; the third 0 overflows a 2-row column.
        let game = play(4, 2, &[7, 0, 0, 0, 1]);
        assert_eq!(game.move_count(), 3);
        assert_eq!(
            script_report(&game),
            "B . . .\nA A . .\n0 1 2 3\nPlayer B to move"
        );
    }

    #[test]
    fn test_unfinished_game_reports_side_to_move() {
        let game = play(7, 6, &[3]);
        assert!(script_report(&game).ends_with("\nPlayer B to move"));

        let game = play(7, 6, &[]);
        assert!(script_report(&game).ends_with("\nPlayer A to move"));
    }

    #[test]
    fn test_drawn_script() {
        let game = play(2, 2, &[0, 1, 0, 1]);
        assert_eq!(script_report(&game), "A B\nA B\n0 1\nDraw");
    }
}
