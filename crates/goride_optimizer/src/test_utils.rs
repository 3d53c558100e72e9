use crate::problem::{
    city::City,
    position::{Position, Time},
    ride_assignment_problem::{RideAssignmentProblem, RideAssignmentProblemBuilder},
};

/// `(a, b, x, y, start, end)` as in the instance format.
pub type RideTuple = (u64, u64, u64, u64, Time, Time);

pub fn create_test_problem(
    cars: usize,
    bonus: u64,
    steps: Time,
    rides: Vec<RideTuple>,
) -> RideAssignmentProblem {
    let mut builder = RideAssignmentProblemBuilder::default();

    builder.set_city(City {
        rows: 100,
        cols: 100,
        cars,
        rides: rides.len(),
        bonus,
        steps,
    });

    for (a, b, x, y, start, end) in rides {
        builder.add_ride(Position::new(a, b), Position::new(x, y), start, end);
    }

    builder.build().unwrap()
}
