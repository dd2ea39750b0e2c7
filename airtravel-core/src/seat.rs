use std::fmt;

/// A validated seat position. Only a [`SeatingPlan`](crate::SeatingPlan) hands
/// these out, so the row and letter always belong to the plan that parsed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seat {
    row: u32,
    letter: char,
}

impl Seat {
    pub(crate) fn new(row: u32, letter: char) -> Self {
        Self { row, letter }
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn letter(&self) -> char {
        self.letter
    }
}

/// Formats as a seat designator, e.g. `12F`.
impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

impl From<Seat> for (u32, char) {
    fn from(seat: Seat) -> Self {
        (seat.row, seat.letter)
    }
}
