use std::sync::Arc;

use airtravel_core::{Aircraft, AircraftType, Airbus319, Boeing777, CoreResult, Flight};
use anyhow::Context;

use crate::app_config::{AircraftConfig, AllocationConfig, FlightConfig};

const DEMO_PASSENGERS: [(&str, &str); 6] = [
    ("12A", "Aryan Bhardwaj"),
    ("12B", "Gargie Bhardwaj"),
    ("12C", "Deep Mala"),
    ("1A", "Ravi Datt Sharma"),
    ("2F", "J N Sharma"),
    ("2A", "Rekha Kumari"),
];

impl AircraftConfig {
    pub fn build(&self) -> CoreResult<Arc<dyn AircraftType>> {
        let aircraft: Arc<dyn AircraftType> = match self {
            AircraftConfig::Airbus319 { registration } => {
                Arc::new(Airbus319::new(registration.as_str()))
            }
            AircraftConfig::Boeing777 { registration } => {
                Arc::new(Boeing777::new(registration.as_str()))
            }
            AircraftConfig::Generic {
                registration,
                model,
                rows,
                seats_per_row,
            } => Arc::new(Aircraft::new(
                registration.as_str(),
                model.as_str(),
                *rows,
                *seats_per_row,
            )?),
        };
        Ok(aircraft)
    }
}

impl FlightConfig {
    /// Open the flight and make every configured allocation, in order.
    pub fn open(&self) -> anyhow::Result<Flight> {
        let aircraft = self
            .aircraft
            .build()
            .with_context(|| format!("Invalid aircraft for flight {}", self.number))?;
        let mut flight = Flight::new(self.number.as_str(), aircraft)?;

        for allocation in &self.allocations {
            flight
                .allocate_seat(&allocation.seat, allocation.passenger.as_str())
                .with_context(|| {
                    format!("Failed to allocate seat {} on flight {}", allocation.seat, self.number)
                })?;
        }

        tracing::info!(
            "Opened flight {} on {} with {} passengers",
            flight.flight_number(),
            flight.aircraft().registration(),
            self.allocations.len()
        );
        Ok(flight)
    }
}

/// The sample fleet: one flight per aircraft variant, same passengers on each.
pub fn demo_flights() -> Vec<FlightConfig> {
    let allocations: Vec<AllocationConfig> = DEMO_PASSENGERS
        .iter()
        .map(|(seat, passenger)| AllocationConfig {
            seat: seat.to_string(),
            passenger: passenger.to_string(),
        })
        .collect();

    vec![
        FlightConfig {
            number: "BA758".into(),
            aircraft: AircraftConfig::Generic {
                registration: "G-TURS".into(),
                model: "Airbus A319".into(),
                rows: 22,
                seats_per_row: 6,
            },
            allocations: allocations.clone(),
        },
        FlightConfig {
            number: "BA758".into(),
            aircraft: AircraftConfig::Airbus319 {
                registration: "G-EUPT".into(),
            },
            allocations: allocations.clone(),
        },
        FlightConfig {
            number: "AF72".into(),
            aircraft: AircraftConfig::Boeing777 {
                registration: "F-GSPS".into(),
            },
            allocations,
        },
    ]
}

/// Open every configured flight, or the demo fleet when none are configured.
pub fn open_flights(configured: &[FlightConfig]) -> anyhow::Result<Vec<Flight>> {
    if configured.is_empty() {
        tracing::info!("No flights configured, opening the demo fleet");
        return demo_flights().iter().map(FlightConfig::open).collect();
    }
    configured.iter().map(FlightConfig::open).collect()
}
