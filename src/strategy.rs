// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    alphabet, anchor, board_state, expander, fash, lexicon, materializer, matcher, matrix,
    placement, play_scorer, rack,
};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    LongestWord,
    PrizeCells,
    Crossword,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::LongestWord,
        Strategy::PrizeCells,
        Strategy::Crossword,
    ];

    #[inline(always)]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::LongestWord => "LongestWord",
            Strategy::PrizeCells => "PrizeCells",
            Strategy::Crossword => "Crossword",
        }
    }

    pub fn from_name(name: &str) -> Option<Strategy> {
        Self::ALL.into_iter().find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredPlacement {
    pub placement: placement::Placement,
    pub score: i64,
}

impl std::fmt::Display for ScoredPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:4} {}", self.score, self.placement)
    }
}

// What the longest-word strategy answers. Words only on an empty board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recommendation {
    Words(Vec<String>),
    Moves(Vec<ScoredPlacement>),
}

#[derive(Clone, Copy)]
struct Job {
    row: i8,
    col: i8,
    axis: matrix::Axis,
}

fn jobs_for(strategy: Strategy, board_state: &board_state::BoardState<'_>) -> Vec<Job> {
    let mut jobs = Vec::new();
    match strategy {
        Strategy::LongestWord | Strategy::PrizeCells => {
            for (row, col) in board_state.anchors() {
                for axis in [matrix::Axis::Across, matrix::Axis::Down] {
                    jobs.push(Job { row, col, axis });
                }
            }
        }
        Strategy::Crossword => {
            if board_state.is_empty() {
                return jobs;
            }
            let occupied = |row: i8, col: i8| board_state.tile_at(row, col) != 0;
            for (row, col) in board_state.anchors() {
                // a neighbor across the lane guarantees a cross word
                if occupied(row - 1, col) || occupied(row + 1, col) {
                    jobs.push(Job {
                        row,
                        col,
                        axis: matrix::Axis::Across,
                    });
                }
                if occupied(row, col - 1) || occupied(row, col + 1) {
                    jobs.push(Job {
                        row,
                        col,
                        axis: matrix::Axis::Down,
                    });
                }
            }
        }
    }
    jobs
}

struct Searcher {
    expander: expander::PatternExpander,
    play_scorer: play_scorer::PlayScorer,
}

impl Searcher {
    fn new() -> Self {
        Self {
            expander: expander::PatternExpander::new(),
            play_scorer: play_scorer::PlayScorer::new(),
        }
    }

    // Candidates through one anchor along one axis, validated and scored.
    fn search(
        &mut self,
        strategy: Strategy,
        board_state: &board_state::BoardState<'_>,
        rack: &rack::Rack,
        job: Job,
    ) -> Vec<ScoredPlacement> {
        let board_tiles = board_state.board_tiles();
        let dim = board_state.dim();
        let board_layout = board_state.game_config().board_layout();
        let Job { row, col, axis } = job;
        let mut found = Vec::new();
        for found_with in anchor::build_patterns(board_tiles, dim, row, col, axis, rack.len()) {
            let deck = rack.with_letters(&found_with.fixed_letters);
            let mut words =
                match self
                    .expander
                    .expand_and_match(&found_with.pattern, &deck, board_state.lexicon())
                {
                    Ok(words) => words,
                    Err(e) => {
                        log::trace!("{} at {row},{col} {}: {e}", found_with.pattern, axis.label());
                        continue;
                    }
                };
            match strategy {
                Strategy::LongestWord => {
                    // stable, so equal lengths stay in lexicon order
                    words.sort_by_key(|word| std::cmp::Reverse(word.len()));
                    found.extend(words.iter().find_map(|word| {
                        let play = materializer::materialize(
                            board_tiles,
                            dim,
                            row,
                            col,
                            axis,
                            word,
                            &found_with,
                            rack,
                        )?;
                        board_state.validate(&play).ok().map(|()| play)
                    }));
                }
                Strategy::PrizeCells | Strategy::Crossword => {
                    for play in materializer::materialize_words(
                        board_tiles,
                        dim,
                        row,
                        col,
                        axis,
                        words.iter().copied(),
                        &found_with,
                        rack,
                    ) {
                        if strategy == Strategy::PrizeCells
                            && !play
                                .tiles()
                                .iter()
                                .any(|t| board_layout.premium_at(t.row, t.col).is_prized())
                        {
                            continue;
                        }
                        match board_state.validate(&play) {
                            Ok(()) => found.push(play),
                            Err(e) => log::trace!("rejected {play}: {e}"),
                        }
                    }
                }
            }
        }
        found
            .into_iter()
            .map(|play| {
                let score = self.play_scorer.compute_score(
                    board_state.game_config(),
                    board_tiles,
                    &play,
                    false,
                );
                ScoredPlacement {
                    placement: play,
                    score,
                }
            })
            .collect()
    }
}

// Spreads the jobs over worker threads. Each worker pulls the next job
// index until none remain and hands back everything it found.
fn run_jobs(
    strategy: Strategy,
    board_state: &board_state::BoardState<'_>,
    rack: &rack::Rack,
    jobs: &[Job],
) -> Vec<ScoredPlacement> {
    let num_threads = num_cpus::get().min(jobs.len()).max(1);
    let next_job = AtomicUsize::new(0);
    let next_job = &next_job;
    let mut found = Vec::new();
    std::thread::scope(|s| {
        let threads = (0..num_threads)
            .map(|_| {
                s.spawn(move || {
                    let mut searcher = Searcher::new();
                    let mut found = Vec::new();
                    while let Some(&job) = jobs.get(next_job.fetch_add(1, Ordering::Relaxed)) {
                        found.extend(searcher.search(strategy, board_state, rack, job));
                    }
                    found
                })
            })
            .collect::<Vec<_>>();
        for thread in threads {
            match thread.join() {
                Ok(candidates) => found.extend(candidates),
                Err(e) => log::error!("{strategy} worker failed: {e:?}"),
            }
        }
    });
    found
}

// Keeps the candidates sharing the top score, each placement once, in
// placement key order.
pub fn keep_best(mut candidates: Vec<ScoredPlacement>) -> Vec<ScoredPlacement> {
    let Some(best) = candidates.iter().map(|c| c.score).max() else {
        return candidates;
    };
    candidates.retain(|c| c.score == best);
    let mut seen = fash::TileHashSet::<Vec<placement::PlacedTile>>::default();
    candidates.retain(|c| seen.insert(c.placement.key()));
    candidates.sort_by_cached_key(|c| c.placement.key());
    candidates
}

// Top-scoring placements for one strategy. Never changes the board.
pub fn recommend(
    strategy: Strategy,
    board_state: &board_state::BoardState<'_>,
    rack: &rack::Rack,
) -> Vec<ScoredPlacement> {
    if rack.is_empty() {
        return Vec::new();
    }
    let jobs = jobs_for(strategy, board_state);
    let candidates = run_jobs(strategy, board_state, rack, &jobs);
    let num_candidates = candidates.len();
    let best = keep_best(candidates);
    log::debug!(
        "{strategy}: {} jobs, {num_candidates} candidates, kept {} at {}",
        jobs.len(),
        best.len(),
        best.first().map_or(0, |c| c.score)
    );
    best
}

// Spells a word with rack tiles, taking exact letters before blanks.
fn spell_from_rack(word: &[u8], rack: &rack::Rack) -> String {
    let mut tally = *rack.tally();
    word.iter()
        .map(|&letter| {
            let tile = if tally[letter as usize] > 0 {
                tally[letter as usize] -= 1;
                letter
            } else {
                alphabet::BLANK | letter
            };
            alphabet::tile_to_char(tile)
        })
        .collect()
}

// The longest words the rack alone can spell, trying the full rack length
// first. Letters supplied by a blank are in lower case.
pub fn start_words(lexicon: &lexicon::Lexicon, rack: &rack::Rack) -> Vec<String> {
    let mut matcher = matcher::PatternMatcher::new();
    for len in (1..=rack.len().min(lexicon.max_len())).rev() {
        let cells = vec![0u8; len];
        match matcher.match_cells(&cells, rack, lexicon) {
            Ok(words) if !words.is_empty() => {
                log::debug!("{} start words of length {len}", words.len());
                return words
                    .into_iter()
                    .map(|word| spell_from_rack(word, rack))
                    .collect();
            }
            Ok(_) => {}
            Err(e) => log::trace!("no start words of length {len}: {e}"),
        }
    }
    Vec::new()
}

pub fn longest_word(
    board_state: &board_state::BoardState<'_>,
    rack: &rack::Rack,
) -> Recommendation {
    if board_state.is_empty() {
        Recommendation::Words(start_words(board_state.lexicon(), rack))
    } else {
        Recommendation::Moves(recommend(Strategy::LongestWord, board_state, rack))
    }
}
