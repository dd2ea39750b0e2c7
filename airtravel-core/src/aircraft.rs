use std::ops::RangeInclusive;

use crate::{CoreResult, Seat, SeatingError};

/// Cabin seat letters, left to right. `I` is never used on a boarding card.
pub const SEAT_LETTERS: &str = "ABCDEFGHJK";

/// Highest row number a plan may declare.
pub const MAX_ROWS: u32 = 999;

const ALPHABET_LEN: usize = 26;

/// The valid rows and seat letters of an aircraft cabin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingPlan {
    rows: RangeInclusive<u32>,
    letters: Vec<char>,
    /// `letter - 'A'` -> position in `letters`
    letter_slots: [Option<u8>; ALPHABET_LEN],
}

impl SeatingPlan {
    /// Build a plan from a 1-based inclusive row range and an ordered set of
    /// distinct uppercase ASCII seat letters.
    pub fn new<I>(rows: RangeInclusive<u32>, letters: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = char>,
    {
        if rows.is_empty() || *rows.start() == 0 || *rows.end() > MAX_ROWS {
            return Err(SeatingError::InvalidSeatingPlan(format!(
                "row range {}..={} must be non-empty and lie within 1..={}",
                rows.start(),
                rows.end(),
                MAX_ROWS
            )));
        }

        let letters: Vec<char> = letters.into_iter().collect();
        if letters.is_empty() {
            return Err(SeatingError::InvalidSeatingPlan(
                "at least one seat letter is required".to_string(),
            ));
        }

        let mut letter_slots = [None; ALPHABET_LEN];
        for (position, letter) in letters.iter().enumerate() {
            if !letter.is_ascii_uppercase() {
                return Err(SeatingError::InvalidSeatingPlan(format!(
                    "seat letter '{}' is not an uppercase ASCII letter",
                    letter
                )));
            }
            let slot = &mut letter_slots[alphabet_offset(*letter)];
            if slot.is_some() {
                return Err(SeatingError::InvalidSeatingPlan(format!(
                    "seat letter '{}' appears twice",
                    letter
                )));
            }
            // At most 26 distinct letters, so the position fits.
            *slot = Some(position as u8);
        }

        Ok(Self {
            rows,
            letters,
            letter_slots,
        })
    }

    /// Plan with rows `1..=rows` and the first `seats_per_row` of [`SEAT_LETTERS`].
    pub fn standard(rows: u32, seats_per_row: usize) -> CoreResult<Self> {
        if seats_per_row == 0 || seats_per_row > SEAT_LETTERS.len() {
            return Err(SeatingError::InvalidSeatingPlan(format!(
                "seats per row must be between 1 and {}, got {}",
                SEAT_LETTERS.len(),
                seats_per_row
            )));
        }
        Self::new(1..=rows, SEAT_LETTERS.chars().take(seats_per_row))
    }

    pub fn rows(&self) -> RangeInclusive<u32> {
        self.rows.clone()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn row_count(&self) -> usize {
        (self.rows.end() - self.rows.start()) as usize + 1
    }

    pub fn seat_count(&self) -> usize {
        self.row_count() * self.letters.len()
    }

    /// Position of `letter` within the row, if the plan has it.
    pub fn letter_index(&self, letter: char) -> Option<usize> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        self.letter_slots[alphabet_offset(letter)].map(usize::from)
    }

    /// Flat row-major index of a seat inside this plan.
    pub(crate) fn seat_index(&self, seat: Seat) -> Option<usize> {
        if !self.rows.contains(&seat.row()) {
            return None;
        }
        let letter = self.letter_index(seat.letter())?;
        let row = (seat.row() - self.rows.start()) as usize;
        Some(row * self.letters.len() + letter)
    }

    /// Every seat in row-major order, letters in plan order within a row.
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.rows()
            .flat_map(move |row| self.letters.iter().map(move |&letter| Seat::new(row, letter)))
    }

    /// Parse a designator such as `12F` into a seat of this plan.
    ///
    /// The last character is the seat letter, everything before it the row.
    pub fn parse_seat(&self, designator: &str) -> CoreResult<Seat> {
        let letter = designator
            .chars()
            .last()
            .filter(|letter| self.letter_index(*letter).is_some())
            .ok_or_else(|| SeatingError::InvalidSeatLetter {
                designator: designator.to_string(),
            })?;

        let invalid_row = || SeatingError::InvalidSeatRow {
            designator: designator.to_string(),
        };
        let row_text = &designator[..designator.len() - letter.len_utf8()];
        let row = parse_row(row_text).ok_or_else(invalid_row)?;
        let row = u32::try_from(row)
            .ok()
            .filter(|row| self.rows.contains(row))
            .ok_or_else(invalid_row)?;

        Ok(Seat::new(row, letter))
    }
}

/// Integer row text. Surrounding whitespace, a sign and single underscores
/// between digits are accepted, so `1_2` reads as row 12.
fn parse_row(text: &str) -> Option<i64> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let separators_ok = bytes
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == b'_')
        .all(|(i, _)| {
            i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        });
    if !separators_ok {
        return None;
    }
    text.replace('_', "").parse().ok()
}

fn alphabet_offset(letter: char) -> usize {
    (letter as u8 - b'A') as usize
}

/// Anything that can carry passengers: a registration, a model name and a cabin
/// layout. Variants differ only in the values they return.
pub trait AircraftType: Send + Sync {
    fn registration(&self) -> &str;

    fn model(&self) -> &str;

    fn seating_plan(&self) -> &SeatingPlan;
}

/// Airbus A319: 22 rows, six abreast.
#[derive(Debug, Clone)]
pub struct Airbus319 {
    registration: String,
    plan: SeatingPlan,
}

impl Airbus319 {
    pub const MODEL: &'static str = "Air Bus A319";

    pub fn new(registration: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
            plan: fixed_plan(22, 6),
        }
    }
}

impl AircraftType for Airbus319 {
    fn registration(&self) -> &str {
        &self.registration
    }

    fn model(&self) -> &str {
        Self::MODEL
    }

    fn seating_plan(&self) -> &SeatingPlan {
        &self.plan
    }
}

/// Boeing 777: 55 rows, ten abreast (A-K without I).
#[derive(Debug, Clone)]
pub struct Boeing777 {
    registration: String,
    plan: SeatingPlan,
}

impl Boeing777 {
    pub const MODEL: &'static str = "Boeing 777";

    pub fn new(registration: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
            plan: fixed_plan(55, 10),
        }
    }
}

impl AircraftType for Boeing777 {
    fn registration(&self) -> &str {
        &self.registration
    }

    fn model(&self) -> &str {
        Self::MODEL
    }

    fn seating_plan(&self) -> &SeatingPlan {
        &self.plan
    }
}

/// An aircraft whose model and cabin dimensions are supplied by the caller.
#[derive(Debug, Clone)]
pub struct Aircraft {
    registration: String,
    model: String,
    plan: SeatingPlan,
}

impl Aircraft {
    pub fn new(
        registration: impl Into<String>,
        model: impl Into<String>,
        rows: u32,
        seats_per_row: usize,
    ) -> CoreResult<Self> {
        Ok(Self {
            registration: registration.into(),
            model: model.into(),
            plan: SeatingPlan::standard(rows, seats_per_row)?,
        })
    }
}

impl AircraftType for Aircraft {
    fn registration(&self) -> &str {
        &self.registration
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn seating_plan(&self) -> &SeatingPlan {
        &self.plan
    }
}

// Built-in layouts use constants that always satisfy `SeatingPlan::new`.
fn fixed_plan(rows: u32, seats_per_row: usize) -> SeatingPlan {
    let letters: Vec<char> = SEAT_LETTERS.chars().take(seats_per_row).collect();
    let mut letter_slots = [None; ALPHABET_LEN];
    for (position, letter) in letters.iter().enumerate() {
        letter_slots[alphabet_offset(*letter)] = Some(position as u8);
    }
    SeatingPlan {
        rows: 1..=rows,
        letters,
        letter_slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_plans_match_validated_plans() {
        assert_eq!(
            Airbus319::new("G-EUPT").seating_plan(),
            &SeatingPlan::standard(22, 6).unwrap()
        );
        assert_eq!(
            Boeing777::new("F-GSPS").seating_plan(),
            &SeatingPlan::standard(55, 10).unwrap()
        );
    }

    #[test]
    fn test_variant_accessors() {
        let airbus = Airbus319::new("G-EUPT");
        assert_eq!(airbus.registration(), "G-EUPT");
        assert_eq!(airbus.model(), "Air Bus A319");
        assert_eq!(airbus.seating_plan().letters(), &['A', 'B', 'C', 'D', 'E', 'F']);

        let boeing = Boeing777::new("F-GSPS");
        assert_eq!(boeing.model(), "Boeing 777");
        assert_eq!(boeing.seating_plan().rows(), 1..=55);
        assert_eq!(boeing.seating_plan().letters().len(), 10);
        assert_eq!(boeing.seating_plan().letter_index('I'), None);
        assert_eq!(boeing.seating_plan().letter_index('K'), Some(9));
    }

    #[test]
    fn test_generic_aircraft() {
        let aircraft = Aircraft::new("G-TURS", "Airbus A319", 22, 6).unwrap();
        assert_eq!(aircraft.model(), "Airbus A319");
        assert_eq!(aircraft.seating_plan().rows(), 1..=22);
        assert_eq!(aircraft.seating_plan().seat_count(), 132);

        assert!(matches!(
            Aircraft::new("G-TURS", "Airbus A319", 22, 11),
            Err(SeatingError::InvalidSeatingPlan(_))
        ));
        assert!(matches!(
            Aircraft::new("G-TURS", "Airbus A319", 0, 6),
            Err(SeatingError::InvalidSeatingPlan(_))
        ));
    }

    #[test]
    fn test_plan_rejects_bad_letters() {
        assert!(SeatingPlan::new(1..=10, "ABA".chars()).is_err());
        assert!(SeatingPlan::new(1..=10, "abc".chars()).is_err());
        assert!(SeatingPlan::new(1..=10, std::iter::empty::<char>()).is_err());
        assert!(SeatingPlan::new(0..=10, "AB".chars()).is_err());
    }

    #[test]
    fn test_plan_rejects_oversized_cabin() {
        assert!(SeatingPlan::standard(MAX_ROWS, 10).is_ok());
        assert!(matches!(
            Aircraft::new("G-TURS", "Airbus A319", 4_000_000_000, 6),
            Err(SeatingError::InvalidSeatingPlan(_))
        ));
        assert!(matches!(
            SeatingPlan::new(1..=MAX_ROWS + 1, "AB".chars()),
            Err(SeatingError::InvalidSeatingPlan(_))
        ));
    }

    #[test]
    fn test_parse_seat() {
        let plan = SeatingPlan::standard(23, 6).unwrap();

        let seat = plan.parse_seat("12F").unwrap();
        assert_eq!((seat.row(), seat.letter()), (12, 'F'));

        assert!(matches!(
            plan.parse_seat("99F"),
            Err(SeatingError::InvalidSeatRow { .. })
        ));
        assert!(matches!(
            plan.parse_seat("12Z"),
            Err(SeatingError::InvalidSeatLetter { .. })
        ));
        assert!(matches!(
            plan.parse_seat("XF"),
            Err(SeatingError::InvalidSeatRow { .. })
        ));
        assert!(matches!(
            plan.parse_seat("0A"),
            Err(SeatingError::InvalidSeatRow { .. })
        ));
        assert!(matches!(
            plan.parse_seat("-1A"),
            Err(SeatingError::InvalidSeatRow { .. })
        ));
        assert!(matches!(
            plan.parse_seat(""),
            Err(SeatingError::InvalidSeatLetter { .. })
        ));
    }

    #[test]
    fn test_parse_seat_row_text_forms() {
        let plan = SeatingPlan::standard(23, 6).unwrap();

        for designator in [" 12A", "+12A", "1_2A", "012A"] {
            let seat = plan.parse_seat(designator).unwrap();
            assert_eq!((seat.row(), seat.letter()), (12, 'A'), "{designator}");
        }
        for designator in ["_12A", "12_A", "1__2A", "1 2A", "1.2A"] {
            assert!(
                matches!(plan.parse_seat(designator), Err(SeatingError::InvalidSeatRow { .. })),
                "{designator}"
            );
        }
    }

    #[test]
    fn test_seats_are_row_major() {
        let plan = SeatingPlan::standard(2, 2).unwrap();
        let seats: Vec<String> = plan.seats().map(|s| s.to_string()).collect();
        assert_eq!(seats, vec!["1A", "1B", "2A", "2B"]);

        for (index, seat) in plan.seats().enumerate() {
            assert_eq!(plan.seat_index(seat), Some(index));
        }
    }
}
