use std::io::{self, Write};

use airtravel_shared::Masked;

use crate::BoardingCard;

/// Writes rendered boarding cards to any output, each followed by a blank line.
pub struct CardPrinter<W: Write> {
    out: W,
    printed: usize,
}

impl<W: Write> CardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, printed: 0 }
    }

    pub fn print(
        &mut self,
        passenger: &str,
        seat: &str,
        flight_number: &str,
        model: &str,
    ) -> io::Result<()> {
        let card = BoardingCard::new(passenger, seat, flight_number, model);
        writeln!(self.out, "{}", card)?;
        writeln!(self.out)?;
        self.printed += 1;

        tracing::debug!(
            flight = flight_number,
            seat,
            passenger = %Masked(passenger),
            "Printed boarding card"
        );
        Ok(())
    }

    /// Number of cards written so far.
    pub fn printed(&self) -> usize {
        self.printed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Card printer callback for `Flight::make_boarding_cards` that writes to stdout.
///
/// The callback contract has no error channel, so a failed write is logged
/// and the card skipped.
pub fn console_card_printer(passenger: &str, seat: &str, flight_number: &str, model: &str) {
    let stdout = io::stdout();
    let mut printer = CardPrinter::new(stdout.lock());
    if let Err(e) = printer.print(passenger, seat, flight_number, model) {
        tracing::warn!(seat, error = %e, "Failed to print boarding card");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_separated_by_blank_line() {
        let mut printer = CardPrinter::new(Vec::new());
        printer.print("Aryan", "12A", "BA758", "Air Bus A319").unwrap();
        printer.print("Ravi", "1A", "BA758", "Air Bus A319").unwrap();
        assert_eq!(printer.printed(), 2);

        let output = String::from_utf8(printer.into_inner()).unwrap();
        let first = BoardingCard::new("Aryan", "12A", "BA758", "Air Bus A319").render();
        let second = BoardingCard::new("Ravi", "1A", "BA758", "Air Bus A319").render();
        assert_eq!(output, format!("{first}\n\n{second}\n\n"));
    }
}
