// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, row: i8, col: i8) -> char {
    if row == board_layout.star_row() && col == board_layout.star_col() {
        return '*';
    }
    let premium = board_layout.premium_at(row, col);
    match (premium.word_multiplier, premium.letter_multiplier) {
        (3.., _) => '=',
        (2, _) => '-',
        (_, 3..) => '"',
        (_, 2) => '\'',
        _ => ' ',
    }
}

#[inline(always)]
pub fn board_label(
    board_layout: &board_layout::BoardLayout,
    board_tiles: &[u8],
    row: i8,
    col: i8,
) -> char {
    match board_tiles[board_layout.dim().at_row_col(row, col)] {
        0 => empty_label(board_layout, row, col),
        tile => alphabet::tile_to_char(tile),
    }
}

fn write_column_labels(s: &mut String, cols: i8) {
    s.push_str("  ");
    for c in 0..cols {
        s.push(' ');
        s.push((b'a' + c as u8) as char);
    }
    s.push('\n');
}

fn write_border(s: &mut String, cols: i8) {
    s.push_str("  +");
    for _ in 1..cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

// Rows are numbered from 0 to match placement coordinates.
pub fn fmt_board(board_layout: &board_layout::BoardLayout, board_tiles: &[u8]) -> String {
    let dim = board_layout.dim();
    let mut s = String::new();
    write_column_labels(&mut s, dim.cols);
    write_border(&mut s, dim.cols);
    for r in 0..dim.rows {
        // writing to a String cannot fail
        let _ = write!(s, "{r:2}|");
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            s.push(board_label(board_layout, board_tiles, r, c));
        }
        let _ = writeln!(s, "|{r}");
    }
    write_border(&mut s, dim.cols);
    write_column_labels(&mut s, dim.cols);
    s
}

pub fn print_board(board_layout: &board_layout::BoardLayout, board_tiles: &[u8]) {
    print!("{}", fmt_board(board_layout, board_tiles));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_premiums_and_tiles() {
        let board_layout = board_layout::make_standard_board_layout();
        let dim = board_layout.dim();
        let mut board = vec![0u8; dim.num_cells()];
        assert_eq!(board_label(&board_layout, &board, 0, 0), '=');
        assert_eq!(board_label(&board_layout, &board, 1, 1), '-');
        assert_eq!(board_label(&board_layout, &board, 1, 5), '"');
        assert_eq!(board_label(&board_layout, &board, 0, 3), '\'');
        assert_eq!(board_label(&board_layout, &board, 0, 1), ' ');
        assert_eq!(board_label(&board_layout, &board, 7, 7), '*');
        board[dim.at_row_col(7, 7)] = 3;
        board[dim.at_row_col(7, 8)] = alphabet::BLANK | 1;
        assert_eq!(board_label(&board_layout, &board, 7, 7), 'C');
        assert_eq!(board_label(&board_layout, &board, 7, 8), 'a');

        let text = fmt_board(&board_layout, &board);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0], "   a b c d e f g h i j k l m n o");
        assert_eq!(lines[2], " 0|=     '       =       '     =|0");
        assert_eq!(lines[9], " 7|=     '       C a     '     =|7");
    }
}
