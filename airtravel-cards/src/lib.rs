pub mod card;
pub mod printer;

pub use card::BoardingCard;
pub use printer::{console_card_printer, CardPrinter};
