use std::fmt;

/// Everything printed on a boarding card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardingCard<'a> {
    pub passenger: &'a str,
    pub seat: &'a str,
    pub flight_number: &'a str,
    pub model: &'a str,
}

impl<'a> BoardingCard<'a> {
    pub fn new(passenger: &'a str, seat: &'a str, flight_number: &'a str, model: &'a str) -> Self {
        Self {
            passenger,
            seat,
            flight_number,
            model,
        }
    }

    /// The single line carrying all four fields, including its side borders.
    pub fn content_line(&self) -> String {
        format!(
            "|Name:{}  Flight: {} Seat: {} Aircraft: {} |",
            self.passenger, self.flight_number, self.seat, self.model
        )
    }

    /// Five lines: banner, padding, content, padding, banner. The frame is as
    /// wide as the content line.
    pub fn render(&self) -> String {
        let content = self.content_line();
        let inner = content.chars().count().saturating_sub(2);
        let banner = format!("+{}+", "-".repeat(inner));
        let padding = format!("|{}|", " ".repeat(inner));

        [
            banner.as_str(),
            padding.as_str(),
            content.as_str(),
            padding.as_str(),
            banner.as_str(),
        ]
        .join("\n")
    }
}

impl fmt::Display for BoardingCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
