use serde::Serialize;

use crate::{
    define_index_newtype,
    problem::{
        position::{Position, Time},
        ride::RideIdx,
    },
};

use super::ride_move::RideMove;

define_index_newtype!(CarIdx, Car);

/// A vehicle of the fleet and the route it has been given so far.
#[derive(Debug, Clone, Serialize)]
pub struct Car {
    index: CarIdx,
    position: Position,
    time: Time,
    moves: Vec<RideMove>,
}

impl Car {
    /// A car parked at the origin at time 0.
    pub fn new(index: CarIdx) -> Self {
        Car {
            index,
            position: Position::ORIGIN,
            time: 0,
            moves: Vec::new(),
        }
    }

    pub fn index(&self) -> CarIdx {
        self.index
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Time at which the car becomes free.
    pub fn time(&self) -> Time {
        self.time
    }

    pub fn moves(&self) -> &[RideMove] {
        &self.moves
    }

    pub fn ride_ids(&self) -> impl Iterator<Item = RideIdx> + '_ {
        self.moves.iter().map(|ride_move| ride_move.ride)
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn score(&self) -> u64 {
        self.moves.iter().map(|ride_move| ride_move.score).sum()
    }

    /// Time spent driving empty or waiting for passengers.
    pub fn idle_time(&self) -> Time {
        self.moves.iter().map(RideMove::idle_duration).sum()
    }

    /// Appends `ride_move` to the route and moves the car to its dropoff.
    ///
    /// The move must have been evaluated against the current state of this
    /// car. Removing the ride from the pool is the caller's job.
    pub fn commit(&mut self, ride_move: RideMove) {
        debug_assert_eq!(ride_move.car, self.index);
        debug_assert_eq!(ride_move.start, self.time);
        debug_assert_eq!(ride_move.from, self.position);

        self.position = ride_move.to;
        self.time = ride_move.end;
        self.moves.push(ride_move);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_moves_car_to_dropoff() {
        let mut car = Car::new(CarIdx::new(3));

        car.commit(RideMove {
            car: CarIdx::new(3),
            ride: RideIdx::new(7),
            from: Position::ORIGIN,
            to: Position::new(2, 5),
            start: 0,
            begin: 4,
            end: 11,
            score: 9,
            value: 0.5,
        });

        assert_eq!(car.position(), Position::new(2, 5));
        assert_eq!(car.time(), 11);
        assert_eq!(car.ride_ids().collect::<Vec<_>>(), vec![RideIdx::new(7)]);
        assert_eq!(car.score(), 9);
        assert_eq!(car.idle_time(), 4);
        assert!(!car.is_empty());
    }
}
