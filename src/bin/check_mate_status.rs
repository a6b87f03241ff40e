use std::env;
use std::process::ExitCode;

use chess_rules::board::Position;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_mate_status [--fen \"<fen>\"] <from,to> <from,to> ...");
        return ExitCode::FAILURE;
    }

    let (mut position, moves) = match args.first().map(String::as_str) {
        Some("--fen") => {
            let Some(fen) = args.get(1) else {
                eprintln!("--fen needs a position");
                return ExitCode::FAILURE;
            };
            match Position::try_from_fen(fen) {
                Ok(position) => (position, &args[2..]),
                Err(err) => {
                    eprintln!("bad position: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => (Position::new(), &args[..]),
    };

    for notation in moves {
        match position.update_notation(notation) {
            Ok(Ok(_)) => {}
            Ok(Err(rejection)) => {
                eprintln!("{notation}: {rejection}");
                return ExitCode::FAILURE;
            }
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let to_move = position.turn();
    let legal_moves = position.generator().all_valid_moves();
    let (phase, end) = position.game_state();
    println!("{}", position.board_view());
    println!("fen: {}", position.to_fen());
    println!("side_to_move: {to_move}");
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", position.is_checkmate(to_move));
    println!("stalemate: {}", position.is_stalemate(to_move));
    println!("state: {phase:?} {end:?}");
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}

