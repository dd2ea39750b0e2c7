use std::fmt;
use std::sync::Arc;

use airtravel_shared::Masked;
use tracing::{debug, warn};

use crate::seat_map::SeatMap;
use crate::{AircraftType, CoreResult, FlightNumberDefect, Seat, SeatingError, SeatingPlan};

/// Highest route number an airline can publish.
pub const MAX_ROUTE_NUMBER: u32 = 9999;

const AIRLINE_CODE_LEN: usize = 2;

/// A single flight operated by one aircraft, with the seat allocations made on it.
pub struct Flight {
    number: String,
    aircraft: Arc<dyn AircraftType>,
    seating: SeatMap,
}

impl Flight {
    /// Open a flight with every seat of the aircraft unoccupied.
    ///
    /// `number` is a two letter uppercase airline code followed by a route
    /// number of at most 9999, e.g. `BA758`.
    pub fn new(number: impl Into<String>, aircraft: Arc<dyn AircraftType>) -> CoreResult<Self> {
        let number = number.into();
        if let Err(reason) = validate_flight_number(&number) {
            return Err(SeatingError::InvalidFlightNumber { number, reason });
        }

        let seating = SeatMap::new(aircraft.seating_plan().clone());
        debug!(
            flight = %number,
            registration = aircraft.registration(),
            seats = seating.plan().seat_count(),
            "Opened flight"
        );

        Ok(Self {
            number,
            aircraft,
            seating,
        })
    }

    /// The full flight number, e.g. `BA758`.
    pub fn flight_number(&self) -> &str {
        &self.number
    }

    /// The two letter airline code, e.g. `BA` for `BA758`.
    pub fn airline_code(&self) -> &str {
        // Validation guarantees two alphabetic characters up front.
        let end = self
            .number
            .char_indices()
            .nth(AIRLINE_CODE_LEN)
            .map_or(self.number.len(), |(offset, _)| offset);
        &self.number[..end]
    }

    pub fn model(&self) -> &str {
        self.aircraft.model()
    }

    pub fn aircraft(&self) -> &Arc<dyn AircraftType> {
        &self.aircraft
    }

    pub fn seating_plan(&self) -> &SeatingPlan {
        self.seating.plan()
    }

    /// Validate a seat designator such as `12F` against this flight's aircraft.
    pub fn parse_seat(&self, designator: &str) -> CoreResult<Seat> {
        self.seating.plan().parse_seat(designator)
    }

    /// Who sits in `designator`, if anyone.
    pub fn passenger_at(&self, designator: &str) -> CoreResult<Option<&str>> {
        let seat = self.parse_seat(designator)?;
        Ok(self.seating.occupant(seat))
    }

    /// Give an empty seat to a passenger.
    pub fn allocate_seat(
        &mut self,
        designator: &str,
        passenger: impl Into<String>,
    ) -> CoreResult<()> {
        let seat = self.parse_seat(designator)?;
        if self.seating.occupant(seat).is_some() {
            return Err(SeatingError::SeatOccupied {
                seat: designator.to_string(),
            });
        }

        let passenger = passenger.into();
        debug!(flight = %self.number, %seat, passenger = %Masked(&passenger), "Allocated seat");
        self.seating.replace(seat, Some(passenger));
        Ok(())
    }

    /// Move whoever sits in `from_seat` to the empty `to_seat`.
    ///
    /// The destination is checked first, so a failed move changes nothing.
    /// An empty `from_seat` is not an error: the move goes through and leaves
    /// both seats empty.
    pub fn relocate_passenger(&mut self, from_seat: &str, to_seat: &str) -> CoreResult<()> {
        let to = self.parse_seat(to_seat)?;
        if self.seating.occupant(to).is_some() {
            return Err(SeatingError::SeatOccupied {
                seat: to_seat.to_string(),
            });
        }

        let from = self.parse_seat(from_seat)?;
        let passenger = self.seating.vacate(from);
        match &passenger {
            Some(name) => debug!(
                flight = %self.number,
                %from,
                %to,
                passenger = %Masked(name),
                "Relocated passenger"
            ),
            None => warn!(flight = %self.number, %from, %to, "Relocated from an empty seat"),
        }
        self.seating.replace(to, passenger);
        Ok(())
    }

    /// Occupied seats as `(passenger, designator)` pairs, row by row and in
    /// seat letter order within a row. Each call reads the current allocations.
    pub fn boarding_passenger_seats(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.seating
            .occupied()
            .map(|(seat, passenger)| (passenger, seat.to_string()))
    }

    /// Call `card_printer(passenger, seat, airline_code, model)` once for every
    /// occupied seat. The card carries the airline code (`BA`), not the full
    /// flight number.
    ///
    /// Cards are issued sorted by passenger name, then by seat designator
    /// (compared as text, so `12A` comes before `1A`).
    pub fn make_boarding_cards<F>(&self, mut card_printer: F)
    where
        F: FnMut(&str, &str, &str, &str),
    {
        let mut passenger_seats: Vec<(&str, String)> = self.boarding_passenger_seats().collect();
        passenger_seats.sort();

        for (passenger, seat) in passenger_seats {
            card_printer(passenger, &seat, self.airline_code(), self.model());
        }
    }
}

impl fmt::Debug for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flight")
            .field("number", &self.number)
            .field("registration", &self.aircraft.registration())
            .field("model", &self.aircraft.model())
            .field("occupied", &self.seating.occupied().count())
            .finish()
    }
}

fn validate_flight_number(number: &str) -> Result<(), FlightNumberDefect> {
    let code: Vec<char> = number.chars().take(AIRLINE_CODE_LEN).collect();
    if code.len() < AIRLINE_CODE_LEN || !code.iter().all(|c| c.is_alphabetic()) {
        return Err(FlightNumberDefect::MissingAirlineCode);
    }
    if !code.iter().all(|c| c.is_uppercase()) {
        return Err(FlightNumberDefect::AirlineCodeNotUppercase);
    }

    let route: String = number.chars().skip(AIRLINE_CODE_LEN).collect();
    if route.is_empty() || !route.chars().all(|c| c.is_ascii_digit()) {
        return Err(FlightNumberDefect::InvalidRouteNumber);
    }
    // Leading zeros do not count towards the limit: `BA0758` is route 758.
    let significant = route.trim_start_matches('0');
    let within_limit = significant.is_empty()
        || significant
            .parse::<u32>()
            .map_or(false, |route| route <= MAX_ROUTE_NUMBER);
    if !within_limit {
        return Err(FlightNumberDefect::InvalidRouteNumber);
    }

    Ok(())
}
