use std::sync::Arc;

use airtravel_cards::{BoardingCard, CardPrinter};
use airtravel_core::{Boeing777, Flight};

#[test]
fn test_flight_cards_printed_in_passenger_order() {
    let mut flight = Flight::new("AF72", Arc::new(Boeing777::new("F-GSPS"))).unwrap();
    flight.allocate_seat("12A", "Aryan Bhardwaj").unwrap();
    flight.allocate_seat("2F", "J N Sharma").unwrap();
    flight.allocate_seat("1A", "Ravi Datt Sharma").unwrap();

    let mut printer = CardPrinter::new(Vec::new());
    let mut failures = 0;
    flight.make_boarding_cards(|passenger, seat, number, model| {
        if printer.print(passenger, seat, number, model).is_err() {
            failures += 1;
        }
    });
    assert_eq!(failures, 0);
    assert_eq!(printer.printed(), 3);

    let output = String::from_utf8(printer.into_inner()).unwrap();
    let expected: String = [
        ("Aryan Bhardwaj", "12A"),
        ("J N Sharma", "2F"),
        ("Ravi Datt Sharma", "1A"),
    ]
    .iter()
    .map(|(passenger, seat)| {
        format!(
            "{}\n\n",
            BoardingCard::new(passenger, seat, "AF", "Boeing 777").render()
        )
    })
    .collect();
    assert_eq!(output, expected);
}
