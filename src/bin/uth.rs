use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{error, info, LevelFilter};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::process::ExitCode;
use std::time::Duration;
use uth_rs::config::TableConfig;
use uth_rs::game::Game;
use uth_rs::policy::ScriptedPolicy;
use uth_rs::table::Player;
use uth_rs::tui::{app::AppState, controller};

#[derive(Debug, Parser)]
#[clap(version, about = "Ultimate Texas Hold'em table simulator")]
struct Cli {
    /// Number of seats at the table.
    #[clap(long, short, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=6))]
    players: u8,
    /// Number of hands to play.
    #[clap(long, short = 'n', default_value_t = 1)]
    hands: usize,
    /// Starting money per seat.
    #[clap(long, short, default_value_t = Player::DEFAULT_MONEY)]
    money: u64,
    /// Ante stake.
    #[clap(long, default_value_t = 1)]
    ante: u64,
    /// Blind stake.
    #[clap(long, default_value_t = 1)]
    blind: u64,
    /// Base play bet, multiplied 4x pre-flop, 2x on the flop, 1x at the river.
    #[clap(long, default_value_t = 1)]
    bet: u64,
    /// Pre-flop betting threshold for the scripted policy.
    #[clap(long, default_value_t = ScriptedPolicy::DEFAULT_THRESHOLD)]
    threshold: u32,
    /// Shuffle seed; random when omitted.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Open the interactive table instead of printing hands.
    #[clap(long)]
    tui: bool,
    /// More log output (-v info, -vv debug).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn table_config(&self) -> TableConfig {
        TableConfig {
            num_players: usize::from(self.players),
            starting_money: self.money,
            ante: self.ante,
            blind: self.blind,
            base_bet: self.bet,
            seed: self.seed,
        }
    }

    fn log_level(&self) -> LevelFilter {
        match (self.tui, self.verbose) {
            (true, _) => LevelFilter::Off,
            (false, 0) => LevelFilter::Warn,
            (false, 1) => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui(cli: &Cli) -> ExitCode {
    if !io::stdout().is_terminal() {
        println!("uth-rs --tui requires a real terminal (TTY). Version: {}", uth_rs::VERSION);
        return ExitCode::FAILURE;
    }
    let mut app = match AppState::new(cli.table_config()) {
        Ok(app) => app,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    app.policy = ScriptedPolicy::new(cli.threshold);
    let res = setup_terminal().and_then(|mut terminal| {
        let res = controller::run(&mut terminal, &mut app, Duration::from_millis(250));
        // Always attempt to restore terminal
        restore_terminal(terminal)?;
        res
    });
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_console(cli: &Cli) -> ExitCode {
    let mut game = match Game::new(cli.table_config()) {
        Ok(game) => game,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    println!("Seed: {}", game.seed());

    let mut policy = ScriptedPolicy::new(cli.threshold);
    for _ in 0..cli.hands {
        match game.play_hand(&mut policy) {
            Ok(report) => println!("{report}"),
            Err(e) => {
                error!("hand {} failed: {e}", game.hands_played());
                return ExitCode::FAILURE;
            }
        }
    }

    println!("--- Final standings after {} hands ---", game.hands_played());
    for player in game.players() {
        println!("{player}");
    }
    info!("table money ${}", game.total_money());
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::builder()
        .filter_level(cli.log_level())
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if cli.tui {
        run_tui(&cli)
    } else {
        run_console(&cli)
    }
}
