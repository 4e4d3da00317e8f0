//! Play tic-tac-toe against a computer that never loses.
//!
//! The human always plays X and the computer O.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use tictac::{
    board::Board,
    core::{GameEndStatus, Player, PlayerMark},
    game::run_game,
    player::{ConsolePlayer, PerfectAi, RandomAi},
    search::Searcher,
};

/// A Tic-Tac-Toe game for the command line, against an unbeatable AI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How much to log: off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn", global = true)]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game at the console (the default)
    Play {
        /// Let the computer open the game
        #[arg(long)]
        computer_first: bool,
    },
    /// Score every legal move on a board and print the best one
    Analyze {
        /// Nine cells, row by row, rows optionally separated by '/'.
        /// Use x, o and _ (or .) for an empty cell, e.g. "oxo/xx_/o__"
        board: Board,

        /// Who is to move. Defaults to o if x has made more moves, x otherwise
        #[arg(long)]
        to_move: Option<PlayerMark>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Let the computer (O) play a series of games against another AI (X)
    Arena {
        #[arg(short, long, default_value = "100")]
        games: usize,

        #[arg(short, long, default_value = "random")]
        opponent: Opponent,

        /// The seed for the random number generator (when used)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Random,
    Perfect,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    simple_logger::SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .context("could not set up logging")?;
    match args.command.unwrap_or(Commands::Play {
        computer_first: false,
    }) {
        Commands::Play { computer_first } => play(computer_first),
        Commands::Analyze {
            board,
            to_move,
            json,
        } => analyze(&board, to_move, json),
        Commands::Arena {
            games,
            opponent,
            seed,
        } => arena(games, opponent, seed),
    }
}

fn play(computer_first: bool) -> anyhow::Result<()> {
    let mut human = ConsolePlayer::new(PlayerMark::Cross);
    let mut computer = PerfectAi::new(PlayerMark::Naught);
    let first = if computer_first {
        PlayerMark::Naught
    } else {
        PlayerMark::Cross
    };
    let (result, board) = run_game(&mut human, &mut computer, first).context("game aborted")?;
    println!("Final board:");
    print!("{}", board);
    match result {
        GameEndStatus::Won(PlayerMark::Cross) => println!("You won!"),
        GameEndStatus::Won(PlayerMark::Naught) => println!("You lost."),
        GameEndStatus::Draw => println!("It's a draw."),
    }
    Ok(())
}

fn analyze(board: &Board, to_move: Option<PlayerMark>, json: bool) -> anyhow::Result<()> {
    let to_move = to_move.unwrap_or(board.to_move(PlayerMark::Cross));
    let analysis = Searcher::new()
        .analyze(board, to_move)
        .with_context(|| format!("cannot analyze\n{board}"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }
    print!("{}", board);
    for scored in analysis.moves.iter() {
        println!(
            "  {} [{}]: {}",
            scored.mv,
            scored.mv.keypad(),
            scored.score
        );
    }
    println!(
        "Best move for {}: {} [{}], value {}",
        analysis.to_move,
        analysis.best_move,
        analysis.best_move.keypad(),
        analysis.value
    );
    Ok(())
}

fn arena(games: usize, opponent: Opponent, seed: Option<u64>) -> anyhow::Result<()> {
    let seed = seed.unwrap_or(StdRng::from_entropy().gen());
    info!("Arena seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut wins, mut draws, mut losses) = (0, 0, 0);
    for game in 0..games {
        let mut x: Box<dyn Player> = match opponent {
            Opponent::Random => Box::new(RandomAi::new(rng.gen())),
            Opponent::Perfect => Box::new(PerfectAi::new(PlayerMark::Cross)),
        };
        let mut o = PerfectAi::new(PlayerMark::Naught);
        let first = if game % 2 == 0 {
            PlayerMark::Cross
        } else {
            PlayerMark::Naught
        };
        let (result, board) = run_game(x.as_mut(), &mut o, first)?;
        info!("Game {} ({} first): {}", game + 1, first, result);
        match result {
            GameEndStatus::Won(PlayerMark::Naught) => wins += 1,
            GameEndStatus::Draw => draws += 1,
            GameEndStatus::Won(PlayerMark::Cross) => {
                log::error!("The computer lost:\n{}", board);
                losses += 1
            }
        }
    }
    println!("Computer won {wins}, drew {draws}, lost {losses} of {games} games");
    anyhow::ensure!(losses == 0, "the computer lost {losses} games");
    Ok(())
}
