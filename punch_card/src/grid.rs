// grid.rs - The punch card bit matrix

use std::ops::Range;

use log::debug;
use serde::Serialize;

use crate::encode::{ENCODED_BITS, column_bits};
use crate::error::GridError;

// Default card size used by the viewer
pub const DEFAULT_ROWS: usize = 16;
pub const DEFAULT_COLS: usize = 32;

pub type TRow = Vec<u8>;

/// Fixed-size grid of 0/1 cells, stored row-major.
///
/// Serializes as `rows` arrays of `cols` integers, matching the in-memory
/// layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PunchCard {
    bits: Vec<TRow>,
}

impl Default for PunchCard {
    fn default() -> Self {
        Self::blank(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl PunchCard {
    /// Creates an all-zero card. Rows 0..8 must exist to hold an encoded byte.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows < ENCODED_BITS {
            return Err(GridError::TooFewRows { rows, min: ENCODED_BITS });
        }
        if cols == 0 {
            return Err(GridError::NoColumns);
        }
        Ok(Self::blank(rows, cols))
    }

    fn blank(rows: usize, cols: usize) -> Self {
        Self { bits: vec![vec![0; cols]; rows] }
    }

    pub fn rows(&self) -> usize {
        self.bits.len()
    }

    pub fn cols(&self) -> usize {
        self.bits.first().map_or(0, Vec::len)
    }

    /// Reads one cell, `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.bits.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[u8]> {
        self.bits.get(row).map(Vec::as_slice)
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[u8]> {
        self.bits.iter().map(Vec::as_slice)
    }

    pub fn count_set(&self) -> usize {
        self.bits.iter().flatten().filter(|&&b| b == 1).count()
    }

    /// Flips one cell. Out-of-range coordinates are ignored; returns whether
    /// anything changed.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        match self.bits.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell ^= 1;
                debug!("toggled ({row}, {col}) -> {cell}");
                true
            }
            None => {
                debug!(
                    "toggle ({row}, {col}) outside {}x{} card, ignored",
                    self.rows(),
                    self.cols()
                );
                false
            }
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.bits {
            row.fill(0);
        }
    }

    /// Rewrites the card from `text`: one character per column starting at
    /// column 0, MSB in row 0. Characters beyond the last column are dropped.
    pub fn encode_text(&mut self, text: &str) {
        self.clear();
        let cols = self.cols();
        for (col, ch) in text.chars().take(cols).enumerate() {
            for (row, bit) in column_bits(ch).into_iter().enumerate() {
                self.bits[row][col] = bit;
            }
        }
        debug!("encoded {:?} into {} columns", text, text.chars().count().min(cols));
    }

    /// Highest column holding a 1, scanning right to left.
    pub fn last_used_column(&self) -> Option<usize> {
        (0..self.cols())
            .rev()
            .find(|&col| self.bits.iter().any(|row| row[col] == 1))
    }

    /// Copies the occupied prefix `0..=last` into the columns right after it,
    /// as far as the card has room. Returns the written columns, `None` when
    /// the card is empty or already full.
    pub fn repeat_to_right(&mut self) -> Option<Range<usize>> {
        let last = self.last_used_column()?;
        let src_len = last + 1;
        let start = last + 1;
        let cols = self.cols();
        if start >= cols {
            debug!("repeat: no space right of column {last}");
            return None;
        }

        let copy_len = src_len.min(cols - start);
        for row in &mut self.bits {
            row.copy_within(0..copy_len, start);
        }
        debug!("repeat: copied columns 0..{copy_len} to {start}..{}", start + copy_len);
        Some(start..start + copy_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rows: usize, cols: usize) -> PunchCard {
        PunchCard::new(rows, cols).unwrap()
    }

    fn column(card: &PunchCard, col: usize) -> Vec<u8> {
        card.rows_iter().map(|r| r[col]).collect()
    }

    #[test]
    fn new_card_is_blank_with_fixed_size() {
        let c = PunchCard::default();
        assert_eq!(c.rows(), DEFAULT_ROWS);
        assert_eq!(c.cols(), DEFAULT_COLS);
        assert_eq!(c.count_set(), 0);
    }

    #[test]
    fn rejects_cards_too_short_for_a_byte() {
        assert_eq!(
            PunchCard::new(7, 4),
            Err(GridError::TooFewRows { rows: 7, min: 8 })
        );
        assert_eq!(PunchCard::new(8, 0), Err(GridError::NoColumns));
    }

    #[test]
    fn toggle_twice_restores_every_cell() {
        let mut c = card(8, 3);
        c.encode_text("Zq");
        let before = c.clone();
        for row in 0..8 {
            for col in 0..3 {
                assert!(c.toggle(row, col));
                assert_ne!(c.get(row, col), before.get(row, col));
                c.toggle(row, col);
            }
        }
        assert_eq!(c, before);
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut c = card(8, 4);
        assert!(!c.toggle(8, 0));
        assert!(!c.toggle(0, 4));
        assert_eq!(c.count_set(), 0);
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut c = card(10, 5);
        c.encode_text("hello");
        c.toggle(9, 4);
        c.clear();
        assert!(c.rows_iter().all(|r| r.iter().all(|&b| b == 0)));
    }

    #[test]
    fn encode_a_puts_msb_in_row_zero() {
        let mut c = card(16, 32);
        c.encode_text("A");
        assert_eq!(&column(&c, 0)[..8], &[0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(c.count_set(), 2);
        assert!(column(&c, 0)[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn encode_empty_is_clear() {
        let mut c = card(8, 4);
        c.encode_text("AB");
        c.encode_text("");
        assert_eq!(c, card(8, 4));
    }

    #[test]
    fn encode_drops_characters_past_last_column() {
        let mut c = card(8, 4);
        c.encode_text("ABCDEFG");
        let mut expected = card(8, 4);
        expected.encode_text("ABCD");
        assert_eq!(c, expected);
        assert_eq!(c.last_used_column(), Some(3));
    }

    #[test]
    fn encode_wide_codepoints_keep_low_byte() {
        // U+0141 is 0x141, low byte 0x41 == 'A'
        let mut wide = card(8, 2);
        wide.encode_text("\u{141}\u{1F600}");
        let mut narrow = card(8, 2);
        narrow.encode_text("A\u{0}");
        assert_eq!(column(&wide, 0), column(&narrow, 0));
        // U+1F600 low byte is 0x00
        assert_eq!(column(&wide, 1), vec![0; 8]);
    }

    #[test]
    fn encode_counts_characters_not_bytes() {
        let mut c = card(8, 8);
        c.encode_text("éé");
        assert_eq!(c.last_used_column(), Some(1));
        // 'é' is U+00E9
        assert_eq!(column(&c, 1), vec![1, 1, 1, 0, 1, 0, 0, 1]);
    }

    #[test]
    fn last_used_column_none_then_highest() {
        let mut c = card(8, 10);
        assert_eq!(c.last_used_column(), None);
        c.toggle(3, 5);
        assert_eq!(c.last_used_column(), Some(5));
        c.toggle(0, 1);
        assert_eq!(c.last_used_column(), Some(5));
    }

    #[test]
    fn repeat_on_blank_card_is_noop() {
        let mut c = card(8, 4);
        assert_eq!(c.repeat_to_right(), None);
        assert_eq!(c, card(8, 4));
    }

    #[test]
    fn repeat_fills_then_stops() {
        let mut c = card(8, 4);
        c.encode_text("A");
        let a = column(&c, 0);

        assert_eq!(c.repeat_to_right(), Some(1..2));
        assert_eq!(column(&c, 1), a);
        assert_eq!(column(&c, 2), vec![0; 8]);

        assert_eq!(c.repeat_to_right(), Some(2..4));
        for col in 0..4 {
            assert_eq!(column(&c, col), a);
        }

        let full = c.clone();
        assert_eq!(c.repeat_to_right(), None);
        assert_eq!(c, full);
    }

    #[test]
    fn repeat_truncates_to_remaining_space() {
        let mut c = card(8, 5);
        c.encode_text("ABC");
        assert_eq!(c.repeat_to_right(), Some(3..5));
        assert_eq!(column(&c, 3), column(&c, 0));
        assert_eq!(column(&c, 4), column(&c, 1));
    }

    #[test]
    fn repeat_copies_lower_rows_too() {
        let mut c = card(12, 4);
        c.toggle(11, 0);
        c.repeat_to_right();
        assert_eq!(c.get(11, 1), Some(1));
    }
}
