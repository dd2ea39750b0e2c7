pub mod aircraft;
pub mod flight;
pub mod seat;
mod seat_map;

pub use aircraft::{Aircraft, AircraftType, Airbus319, Boeing777, SeatingPlan};
pub use flight::Flight;
pub use seat::Seat;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatingError {
    #[error("Invalid flight number '{number}': {reason}")]
    InvalidFlightNumber {
        number: String,
        reason: FlightNumberDefect,
    },
    #[error("Invalid seat letter in '{designator}'")]
    InvalidSeatLetter { designator: String },
    #[error("Invalid seat row in '{designator}'")]
    InvalidSeatRow { designator: String },
    #[error("Seat {seat} already occupied")]
    SeatOccupied { seat: String },
    #[error("Invalid seating plan: {0}")]
    InvalidSeatingPlan(String),
}

/// Why a flight number was rejected. All defects surface as
/// [`SeatingError::InvalidFlightNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlightNumberDefect {
    #[error("no airline code")]
    MissingAirlineCode,
    #[error("airline code is not uppercase")]
    AirlineCodeNotUppercase,
    #[error("invalid route number")]
    InvalidRouteNumber,
}

pub type CoreResult<T> = Result<T, SeatingError>;
