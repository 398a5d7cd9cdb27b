use std::io::{stdin, BufRead};
use rand::seq::SliceRandom;
use chess_rules::board::to_string;
use chess_rules::command::Command;
use chess_rules::game::{create_initial_state, GameState};

fn draw_board(state: &GameState) {
    for line in to_string(state.board()).lines() {
        for c in line.chars() {
            print!("|{}", c);
        }
        println!("|");
    }
    if state.is_in_check() {
        println!("check");
    }
}

fn play(state: &mut GameState, command: Command) {
    match command {
        Command::Move(from, to) => {
            if state.do_move(from, to) {
                draw_board(state);
            } else {
                println!("illegal move");
            }
        }
        Command::Moves(from) => {
            let mut moves: Vec<String> = state.legal_moves(from).iter().map(|to| to.to_string()).collect();
            moves.sort();
            println!("{}", moves.join(" "));
        }
        Command::Random => {
            match state.all_legal_moves().choose(&mut rand::thread_rng()) {
                None => println!("no legal moves"),
                Some(&(from, to)) => {
                    println!("{} {}", from, to);
                    state.do_move(from, to);
                    draw_board(state);
                }
            }
        }
        Command::Json => match serde_json::to_string(state) {
            Ok(msg) => println!("{}", msg),
            Err(e) => log::error!("Cannot serialize state, error: {}", e),
        },
        Command::Quit => {}
    }
}

fn main() {
    let logger_env = env_logger::Env::default().filter_or("LOG_LEVEL", "INFO");
    env_logger::Builder::from_env(logger_env).format_timestamp_millis().init();

    let mut state = create_initial_state();
    draw_board(&state);

    for line in stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::error!("Cannot read stdin, error: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(c) => c,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        log::debug!("Command: {:?}", command);
        if command == Command::Quit {
            break;
        }
        play(&mut state, command);
    }
}
