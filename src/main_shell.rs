// Copyright (C) 2020-2026 Andy Kurnia.

use lexiplace::{
    aggregator, board_state, display, error, expander, game_config, lexicon, placement, rack,
    return_error, strategy,
};
use rand::SeedableRng;

static HELP: &str = "\
lex <file>              load a word list, one word per line
board [<file>]          print the board, or load 15 rows from a file first
reset                   clear the board
play <tiles>            validate, score and commit, e.g. play C@7,7 A@7,8 -@7,9
score <tiles>           validate and score without committing
words <tiles>           list the words a placement forms
rec <rack> [<strategy>]  best placements per strategy, or for one of
                        LongestWord PrizeCells Crossword
longest <rack>          longest-word strategy only
match <pattern> <rack>  words matching a pattern such as (0,2)C_T(0,1)
source <file>           run commands from a file
help                    this
exit                    quit";

struct Shell {
    game_config: game_config::GameConfig,
    lexicon: lexicon::Lexicon,
    board_tiles: Box<[u8]>,
    rng: rand_chacha::ChaCha20Rng,
    expander: expander::PatternExpander,
}

impl Shell {
    fn print_board(&self) {
        display::print_board(self.game_config.board_layout(), &self.board_tiles);
    }

    // Resolves wildcards too, so the tiles printed are the ones scored.
    fn checked(&mut self, args: &[String]) -> error::Returns<(placement::Placement, i64)> {
        let mut play = args.join(" ").parse::<placement::Placement>()?;
        let board_state = board_state::BoardState::with_board_tiles(
            &self.game_config,
            &self.lexicon,
            &self.board_tiles,
        )?;
        board_state.verify_geometry(&play)?;
        board_state.verify_board_rule(&play)?;
        if play.has_wildcards() {
            board_state.resolve_wildcards(&mut play, &mut self.rng)?;
        }
        board_state.validate_dictionary(&play)?;
        let score = board_state.score(&play, false);
        Ok((play, score))
    }

    fn execute(&mut self, strings: &[String]) -> error::Returns<()> {
        let args = &strings[1..];
        match strings[0].as_str() {
            "lex" => {
                let [path] = args else {
                    return_error!("need a file".into());
                };
                self.lexicon = lexicon::Lexicon::from_text(&std::fs::read_to_string(path)?)?;
                println!("{} words", self.lexicon.len());
            }
            "board" => {
                if let [path] = args {
                    let text = std::fs::read_to_string(path)?;
                    let rows = text.lines().collect::<Vec<_>>();
                    let mut board_state = board_state::BoardState::with_board_tiles(
                        &self.game_config,
                        &self.lexicon,
                        &self.board_tiles,
                    )?;
                    board_state.load_rows(&rows)?;
                    self.board_tiles = board_state.board_tiles().into();
                }
                self.print_board();
            }
            "reset" => {
                self.board_tiles.iter_mut().for_each(|m| *m = 0);
                self.print_board();
            }
            "play" => {
                let mut play = args.join(" ").parse::<placement::Placement>()?;
                let mut board_state = board_state::BoardState::with_board_tiles(
                    &self.game_config,
                    &self.lexicon,
                    &self.board_tiles,
                )?;
                let score = board_state.new_move(&mut play, &mut self.rng)?;
                self.board_tiles = board_state.board_tiles().into();
                println!("{play} scores {score}");
                self.print_board();
            }
            "score" => {
                let (play, score) = self.checked(args)?;
                println!("{play} scores {score}");
            }
            "words" => {
                let play = args.join(" ").parse::<placement::Placement>()?;
                let board_state = board_state::BoardState::with_board_tiles(
                    &self.game_config,
                    &self.lexicon,
                    &self.board_tiles,
                )?;
                board_state.verify_geometry(&play)?;
                for word in board_state.affected_words(&play) {
                    println!("{word}");
                }
            }
            "rec" => {
                let (rack, only) = match args {
                    [rack] => (rack, None),
                    [rack, name] => match strategy::Strategy::from_name(name) {
                        Some(s) => (rack, Some(s)),
                        None => {
                            return_error!(format!("unknown strategy {name:?}"));
                        }
                    },
                    _ => {
                        return_error!("need a rack".into());
                    }
                };
                let rack = rack.parse::<rack::Rack>()?;
                let board_state = board_state::BoardState::with_board_tiles(
                    &self.game_config,
                    &self.lexicon,
                    &self.board_tiles,
                )?;
                let all: std::collections::BTreeMap<_, _> = match only {
                    Some(s) => std::iter::once((s, strategy::recommend(s, &board_state, &rack)))
                        .collect(),
                    None => aggregator::recommend_all(&board_state, &rack),
                };
                for (s, found) in all {
                    println!("{s}: {} found", found.len());
                    for c in found.iter() {
                        println!("{c}");
                    }
                }
            }
            "longest" => {
                let [rack] = args else {
                    return_error!("need a rack".into());
                };
                let rack = rack.parse::<rack::Rack>()?;
                let board_state = board_state::BoardState::with_board_tiles(
                    &self.game_config,
                    &self.lexicon,
                    &self.board_tiles,
                )?;
                match strategy::longest_word(&board_state, &rack) {
                    strategy::Recommendation::Words(words) => {
                        println!("{} words", words.len());
                        for word in words.iter() {
                            println!("{word}");
                        }
                    }
                    strategy::Recommendation::Moves(found) => {
                        println!("{} found", found.len());
                        for c in found.iter() {
                            println!("{c}");
                        }
                    }
                }
            }
            "match" => {
                let [pattern, rack] = args else {
                    return_error!("need a pattern and a rack".into());
                };
                let words = self.expander.expand_pattern(pattern, rack, &self.lexicon)?;
                println!("{} words", words.len());
                for word in words.iter() {
                    println!("{word}");
                }
            }
            "help" => {
                println!("{HELP}");
            }
            _ => {
                println!("invalid input, help for help");
            }
        }
        Ok(())
    }
}

pub fn main() -> error::Returns<()> {
    let verbose = std::env::args().skip(1).any(|arg| arg == "-v");
    simplelog::SimpleLogger::init(
        if verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Warn
        },
        simplelog::Config::default(),
    )?;

    let game_config = game_config::make_english_game_config();
    let board_tiles = vec![0u8; game_config.board_layout().dim().num_cells()].into_boxed_slice();
    let mut shell = Shell {
        game_config,
        lexicon: lexicon::Lexicon::default(),
        board_tiles,
        rng: rand_chacha::ChaCha20Rng::from_os_rng(),
        expander: expander::PatternExpander::new(),
    };

    let mut rl = rustyline::DefaultEditor::new()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{filename}:{line_num}> {line}");
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if strings.is_empty() {
                        continue;
                    }
                    match strings[0].as_str() {
                        "exit" => {
                            break;
                        }
                        "source" => {
                            if strings.len() > 1 {
                                match std::fs::read_to_string(&strings[1]) {
                                    Ok(whole_file) => {
                                        let v = cmd_stack.len();
                                        for (line_num, line) in whole_file.lines().enumerate() {
                                            cmd_stack.push((
                                                line.to_string(),
                                                Some((strings[1].clone(), line_num + 1)),
                                            ));
                                        }
                                        cmd_stack[v..].reverse();
                                    }
                                    Err(err) => {
                                        println!("cannot open file: {err:?}");
                                    }
                                }
                            } else {
                                println!("need another arg");
                            }
                        }
                        _ => {
                            if let Err(err) = shell.execute(&strings) {
                                println!("{err}");
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {err:?}");
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    if let Err(err) = rl.add_history_entry(line.as_str()) {
                        log::warn!("cannot add to history: {err}");
                    }
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {err:?}");
                    break;
                }
            }
        }
    }

    Ok(())
}
