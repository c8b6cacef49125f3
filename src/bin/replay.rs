use anyhow::{Context, Result};
use dama::board::{create_initial_state, GameState};
use dama::moves::Move;
use dama::piece::Color;

/// Apply notation moves to the opening position, printing the board after
/// each. `None` when there was nothing to replay.
fn replay(moves: &[String]) -> Result<Option<GameState>> {
    if moves.is_empty() {
        eprintln!("usage: replay <move> [<move> ...]   e.g. replay c6-d5 b3-a4");
        return Ok(None);
    }

    let mut state = create_initial_state();
    println!("{}\n", state.board);

    for (ply, text) in moves.iter().enumerate() {
        let mv = Move::from_notation(text)?;
        let mover = state.turn;
        state = state
            .try_move(mv.from, mv.to)
            .with_context(|| format!("move {} ({text}) by {mover:?}", ply + 1))?;
        println!("{}. {mover:?} {}", ply + 1, mv.to_notation());
        println!("{}\n", state.board);
    }
    Ok(Some(state))
}

fn main() -> Result<()> {
    let moves: Vec<String> = std::env::args().skip(1).collect();
    let Some(state) = replay(&moves)? else {
        return Ok(());
    };

    eprintln!(
        "{:?} to move; White {} pieces, Black {} pieces",
        state.turn,
        state.board.count(Color::White),
        state.board.count(Color::Black),
    );
    Ok(())
}
