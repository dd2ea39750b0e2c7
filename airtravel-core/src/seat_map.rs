use crate::{Seat, SeatingPlan};

/// Occupancy of every seat in a plan, stored flat in row-major order.
#[derive(Debug, Clone)]
pub(crate) struct SeatMap {
    plan: SeatingPlan,
    cells: Vec<Option<String>>,
}

impl SeatMap {
    /// Every seat of the plan, all unoccupied.
    pub fn new(plan: SeatingPlan) -> Self {
        let cells = vec![None; plan.seat_count()];
        Self { plan, cells }
    }

    pub fn plan(&self) -> &SeatingPlan {
        &self.plan
    }

    pub fn occupant(&self, seat: Seat) -> Option<&str> {
        self.plan
            .seat_index(seat)
            .and_then(|index| self.cells[index].as_deref())
    }

    /// Puts `occupant` in the seat, returning whoever sat there before.
    /// Seats outside the plan are left alone.
    pub fn replace(&mut self, seat: Seat, occupant: Option<String>) -> Option<String> {
        let index = self.plan.seat_index(seat)?;
        std::mem::replace(&mut self.cells[index], occupant)
    }

    pub fn vacate(&mut self, seat: Seat) -> Option<String> {
        self.replace(seat, None)
    }

    /// Occupied seats in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Seat, &str)> + '_ {
        self.plan
            .seats()
            .zip(self.cells.iter())
            .filter_map(|(seat, cell)| cell.as_deref().map(|passenger| (seat, passenger)))
    }
}
