use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use dama::board::create_initial_state;
use dama::piece::Color;
use dama::rules::legal_moves;

struct PlayoutConfig {
    max_moves: u32,
    seed: Option<u64>,
    json: bool,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        PlayoutConfig {
            max_moves: 200,
            seed: None,
            json: false,
        }
    }
}

fn parse_args() -> Result<PlayoutConfig> {
    let mut config = PlayoutConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--max-moves" => {
                let v = args.next().context("--max-moves needs a value")?;
                config.max_moves = v.parse().with_context(|| format!("bad --max-moves {v}"))?;
            }
            "--seed" => {
                let v = args.next().context("--seed needs a value")?;
                config.seed = Some(v.parse().with_context(|| format!("bad --seed {v}"))?);
            }
            "--json" => config.json = true,
            other => bail!("unknown argument {other}; expected --max-moves N, --seed N, --json"),
        }
    }
    Ok(config)
}

/// Plays random legal moves from the opening to exercise the rules. Stops at
/// the move limit or when the side to move has nothing legal.
fn main() -> Result<()> {
    let config = parse_args()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut state = create_initial_state();
    let mut played = 0;
    while played < config.max_moves {
        let moves = legal_moves(&state.board, state.turn);
        let Some(mv) = moves.choose(&mut rng) else {
            eprintln!("{:?} has no legal move after {played} moves", state.turn);
            break;
        };
        state = state.try_move(mv.from, mv.to)?;
        played += 1;
    }

    eprintln!(
        "{played} moves played; White {} pieces, Black {} pieces",
        state.board.count(Color::White),
        state.board.count(Color::Black),
    );
    if config.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", state.board);
    }
    Ok(())
}
