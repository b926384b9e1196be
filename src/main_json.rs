// Copyright (C) 2020-2026 Andy Kurnia.

use lexiplace::{
    aggregator, alphabet, board_state, display, error, game_config, lexicon, placement, rack,
    return_error, strategy,
};
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::io::Read;

// lexicon: path to a word list, one word per line.
// rack: letters, '-' for each blank.
// board: 15 strings of 15 cells. '.' for empty, lower case for a blank.
// moves: plays to make before recommending, e.g. "C@7,7 A@7,8 -@7,9".
//   '-' is a wildcard resolved against the lexicon.
// seed: makes wildcard resolution reproducible.
#[derive(serde::Deserialize)]
struct Question {
    lexicon: String,
    rack: String,
    #[serde(default)]
    board: Vec<String>,
    #[serde(default)]
    moves: Vec<String>,
    seed: Option<u64>,
}

// row and col are 0-based. letter is lower case for a blank.
#[derive(serde::Serialize)]
struct JsonTile {
    letter: char,
    row: i8,
    col: i8,
}

#[derive(serde::Serialize)]
struct JsonMove {
    score: i64,
    tiles: Vec<JsonTile>,
}

impl JsonMove {
    fn new(play: &placement::Placement, score: i64) -> Self {
        Self {
            score,
            tiles: play
                .tiles()
                .iter()
                .map(|t| JsonTile {
                    letter: alphabet::tile_to_char(t.tile),
                    row: t.row,
                    col: t.col,
                })
                .collect(),
        }
    }
}

#[derive(serde::Serialize)]
struct Answer {
    moves: Vec<JsonMove>,
    recommendations: BTreeMap<String, Vec<JsonMove>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_words: Option<Vec<String>>,
}

pub fn main() -> error::Returns<()> {
    let mut verbose = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        if arg == "-v" {
            verbose = true;
        } else if path.is_none() {
            path = Some(arg);
        } else {
            return_error!(format!("unexpected argument {arg:?}"));
        }
    }
    simplelog::SimpleLogger::init(
        if verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Warn
        },
        simplelog::Config::default(),
    )?;

    let data = match &path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut data = String::new();
            std::io::stdin().read_to_string(&mut data)?;
            data
        }
    };
    let question = serde_json::from_str::<Question>(&data)?;

    let lexicon = lexicon::Lexicon::from_text(&std::fs::read_to_string(&question.lexicon)?)?;
    log::debug!("{} words in {}", lexicon.len(), question.lexicon);
    let game_config = game_config::make_english_game_config();
    let mut board_state = board_state::BoardState::new(&game_config, &lexicon);
    if !question.board.is_empty() {
        board_state.load_rows(&question.board)?;
    }
    let mut rng = match question.seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };

    let mut moves = Vec::with_capacity(question.moves.len());
    for text in question.moves.iter() {
        let mut play = text.parse::<placement::Placement>()?;
        match board_state.new_move(&mut play, &mut rng) {
            Ok(score) => moves.push(JsonMove::new(&play, score)),
            Err(e) => {
                return_error!(format!("move {text:?}: {e}"));
            }
        }
    }
    log::debug!(
        "\n{}",
        display::fmt_board(game_config.board_layout(), board_state.board_tiles())
    );

    let rack = question.rack.parse::<rack::Rack>()?;
    let recommendations = aggregator::recommend_all(&board_state, &rack)
        .into_iter()
        .map(|(s, found)| {
            (
                s.name().to_string(),
                found
                    .iter()
                    .map(|c| JsonMove::new(&c.placement, c.score))
                    .collect::<Vec<_>>(),
            )
        })
        .collect::<BTreeMap<_, _>>();
    let start_words = board_state
        .is_empty()
        .then(|| strategy::start_words(&lexicon, &rack));

    let answer = Answer {
        moves,
        recommendations,
        start_words,
    };
    println!("{}", serde_json::to_string_pretty(&answer)?);

    Ok(())
}
