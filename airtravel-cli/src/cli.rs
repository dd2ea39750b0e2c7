use std::path::PathBuf;

use airtravel_cards::console_card_printer;
use airtravel_core::Flight;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::app_config::Config;
use crate::manifest::open_flights;

#[derive(Parser, Debug)]
#[command(
    name = "airtravel",
    version,
    about = "Allocate passenger seats on flights and print boarding cards."
)]
pub struct Cli {
    /// Extra configuration file, layered over config/default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a boarding card for every passenger, sorted by name
    Cards,

    /// List occupied seats of every flight, row by row
    Seats(SeatsArgs),
}

#[derive(Args, Debug)]
pub struct SeatsArgs {
    /// Emit the listing as JSON
    #[arg(long)]
    pub json: bool,
}

/// One line of a seat listing.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SeatListing {
    pub flight: String,
    pub registration: String,
    pub seat: String,
    pub passenger: String,
}

impl Cli {
    pub fn run(self, config: &Config) -> Result<()> {
        let flights = open_flights(&config.flights)?;
        match self.command {
            Commands::Cards => print_cards(&flights),
            Commands::Seats(args) => print_seats(&flights, &args),
        }
    }
}

fn print_cards(flights: &[Flight]) -> Result<()> {
    for flight in flights {
        flight.make_boarding_cards(console_card_printer);
    }
    Ok(())
}

fn print_seats(flights: &[Flight], args: &SeatsArgs) -> Result<()> {
    let listing = seat_listing(flights);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for entry in &listing {
        println!(
            "{:<8}{:<10}{:<5}{}",
            entry.flight, entry.registration, entry.seat, entry.passenger
        );
    }
    Ok(())
}

pub fn seat_listing(flights: &[Flight]) -> Vec<SeatListing> {
    flights
        .iter()
        .flat_map(|flight| {
            flight
                .boarding_passenger_seats()
                .map(move |(passenger, seat)| SeatListing {
                    flight: flight.flight_number().to_string(),
                    registration: flight.aircraft().registration().to_string(),
                    seat,
                    passenger: passenger.to_string(),
                })
        })
        .collect()
}
