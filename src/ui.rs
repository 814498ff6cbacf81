#![cfg(feature = "std")]

//! Terminal rendering and coordinate parsing for the bundled binaries.
//!
//! Rendering runs entirely on the grid's read-only queries, the same
//! surface any other front end would use.

use crate::grid::Grid;

/// Column letter + 1-based row, e.g. `C7`.
pub fn coord_to_string(x: u8, y: u8) -> String {
    let col = (b'A' + x) as char;
    format!("{}{}", col, y + 1)
}

/// Parse `C7`-style input into (`x`, `y`). Case-insensitive.
pub fn parse_coord(input: &str) -> Option<(u8, u8)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let x = col_ch as u8 - b'A';
    let row_str: String = chars.collect();
    let row: u16 = row_str.trim().parse().ok()?;
    if row == 0 || row > 256 {
        return None;
    }
    Some((x, (row - 1) as u8))
}

fn print_header(size: u8) {
    print!("   ");
    for x in 0..size {
        print!(" {}", (b'A' + x) as char);
    }
    println!();
}

/// Render a grid as its owner sees it: own ships revealed, incoming
/// shots marked. `X` hit, `o` miss, `S` intact ship segment, `.` water.
pub fn print_own_view(grid: &Grid) {
    print_header(grid.size());
    for y in 0..grid.size() {
        print!("{:2} ", y + 1);
        for x in 0..grid.size() {
            let ch = match (grid.is_viewable(x, y), grid.is_ship(x, y)) {
                (true, true) => 'X',
                (true, false) => 'o',
                (false, true) => 'S',
                (false, false) => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Render a grid as the opponent sees it: only shot cells are revealed.
pub fn print_target_view(grid: &Grid) {
    print_header(grid.size());
    for y in 0..grid.size() {
        print!("{:2} ", y + 1);
        for x in 0..grid.size() {
            let ch = if grid.is_viewable(x, y) {
                if grid.is_ship(x, y) {
                    'X'
                } else {
                    'o'
                }
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}
