use thiserror::Error;

use crate::utils::enumerate_idx::EnumerateIdx;

use super::{
    city::City,
    position::{Position, Time},
    ride::{Ride, RideIdx},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProblemError {
    #[error("Simulation horizon must be positive")]
    ZeroSteps,

    #[error("City declares {declared} rides but {actual} were provided")]
    RideCountMismatch { declared: usize, actual: usize },

    #[error("Ride at position {position} has index {index}")]
    RideIndexMismatch { position: usize, index: RideIdx },
}

/// One instance: a city and the rides requested in it.
#[derive(Debug, Clone)]
pub struct RideAssignmentProblem {
    city: City,
    rides: Vec<Ride>,
}

impl RideAssignmentProblem {
    pub fn new(city: City, rides: Vec<Ride>) -> Result<Self, ProblemError> {
        if city.steps == 0 {
            return Err(ProblemError::ZeroSteps);
        }

        if city.rides != rides.len() {
            return Err(ProblemError::RideCountMismatch {
                declared: city.rides,
                actual: rides.len(),
            });
        }

        if let Some((position, ride)) = rides
            .iter()
            .enumerate()
            .find(|(position, ride)| ride.index().get() != *position)
        {
            return Err(ProblemError::RideIndexMismatch {
                position,
                index: ride.index(),
            });
        }

        Ok(RideAssignmentProblem { city, rides })
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    pub fn ride(&self, index: RideIdx) -> &Ride {
        &self.rides[index]
    }

    pub fn ride_ids(&self) -> impl Iterator<Item = RideIdx> + '_ {
        self.rides.iter().enumerate_idx().map(|(index, _)| index)
    }

    pub fn num_cars(&self) -> usize {
        self.city.cars
    }

    pub fn num_rides(&self) -> usize {
        self.rides.len()
    }

    pub fn bonus(&self) -> u64 {
        self.city.bonus
    }

    pub fn steps(&self) -> Time {
        self.city.steps
    }

    /// Upper bound on the score: every ride started on time and finished
    /// before its deadline.
    pub fn max_score(&self) -> u64 {
        self.rides
            .iter()
            .map(|ride| ride.len() + self.city.bonus)
            .sum()
    }
}

#[derive(Default)]
pub struct RideAssignmentProblemBuilder {
    city: Option<City>,
    rides: Vec<Ride>,
}

impl RideAssignmentProblemBuilder {
    pub fn set_city(&mut self, city: City) -> &mut RideAssignmentProblemBuilder {
        self.city = Some(city);
        self
    }

    pub fn set_rides(&mut self, rides: Vec<Ride>) -> &mut RideAssignmentProblemBuilder {
        self.rides = rides;
        self
    }

    /// Appends a ride, assigning it the next index.
    pub fn add_ride(
        &mut self,
        pickup: Position,
        dropoff: Position,
        earliest_start: Time,
        latest_finish: Time,
    ) -> &mut RideAssignmentProblemBuilder {
        let index = RideIdx::new(self.rides.len());
        self.rides.push(Ride::new(
            index,
            pickup,
            dropoff,
            earliest_start,
            latest_finish,
        ));
        self
    }

    /// Builds the problem. When no city was set, the header is derived from
    /// the rides with a single car and no bonus.
    pub fn build(self) -> Result<RideAssignmentProblem, ProblemError> {
        let city = self.city.unwrap_or_else(|| City {
            rows: 0,
            cols: 0,
            cars: 1,
            rides: self.rides.len(),
            bonus: 0,
            steps: self
                .rides
                .iter()
                .map(|ride| ride.latest_finish())
                .max()
                .unwrap_or(0)
                .max(1),
        });

        RideAssignmentProblem::new(city, self.rides)
    }
}
