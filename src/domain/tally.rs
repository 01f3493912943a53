//! Tally markers: the position-independent intermediate form of a digit
//!
//! A decimal digit always expands to the same marker sequence no matter
//! which position it sits in; only the glyphs substituted at the end
//! differ between positions.

/// One abstract unit of count for a decimal digit, before a glyph is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyMarker {
    /// The unit glyph of the position (I, X, C or M)
    Single,
    /// The five-glyph of the position (V, L or D)
    Five,
    /// The unit glyph of the next position up, used only for the digit 9
    Ten,
}

/// Glyph triple for one decimal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPosition {
    /// Power of ten this position represents (0 = ones, 3 = thousands)
    pub power: u32,
    /// Unit glyph
    pub single: char,
    /// Five-glyph, absent for the thousands position
    pub five: Option<char>,
    /// Next position's unit glyph, absent for the thousands position
    pub ten: Option<char>,
}

/// The four decimal positions, most significant first.
pub const POSITIONS: [DigitPosition; 4] = [
    DigitPosition {
        power: 3,
        single: 'M',
        five: None,
        ten: None,
    },
    DigitPosition {
        power: 2,
        single: 'C',
        five: Some('D'),
        ten: Some('M'),
    },
    DigitPosition {
        power: 1,
        single: 'X',
        five: Some('L'),
        ten: Some('C'),
    },
    DigitPosition {
        power: 0,
        single: 'I',
        five: Some('V'),
        ten: Some('X'),
    },
];

impl DigitPosition {
    /// Extract this position's decimal digit from `value`.
    pub fn digit_of(&self, value: i32) -> u32 {
        (value as u32 / 10u32.pow(self.power)) % 10
    }

    /// Map a marker to this position's glyph.
    ///
    /// A `Five` or `Ten` marker only ever reaches a position that defines
    /// the glyph: the thousands digit (0..=3 for values up to 3000) never
    /// expands to one. Hitting `None` here is an internal invariant
    /// violation, not a user error.
    pub fn glyph(&self, marker: TallyMarker) -> char {
        match marker {
            TallyMarker::Single => self.single,
            TallyMarker::Five => self.five.expect("five glyph defined for this position"),
            TallyMarker::Ten => self.ten.expect("ten glyph defined for this position"),
        }
    }
}

/// Expand a single decimal digit (0..=9) into its tally markers.
///
/// Subtractive notation falls out of the two special cases: 9 is one
/// short of the next position's unit, 4 is one short of the five-glyph.
pub fn tally_markers(digit: u32) -> Vec<TallyMarker> {
    debug_assert!(digit <= 9, "digit out of range: {digit}");
    match digit {
        9 => vec![TallyMarker::Single, TallyMarker::Ten],
        5..=8 => {
            let mut markers = vec![TallyMarker::Five];
            markers.extend(tally_markers(digit - 5));
            markers
        }
        4 => vec![TallyMarker::Single, TallyMarker::Five],
        d => vec![TallyMarker::Single; d as usize],
    }
}
