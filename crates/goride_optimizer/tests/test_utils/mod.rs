use goride_optimizer::problem::{
    city::City,
    position::{Position, Time},
    ride_assignment_problem::{RideAssignmentProblem, RideAssignmentProblemBuilder},
};

pub struct InstanceShape {
    pub rows: u64,
    pub cols: u64,
    pub cars: usize,
    pub rides: usize,
    pub bonus: u64,
    pub steps: Time,
}

// Small LCG so generated instances are identical on every platform.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound.max(1)
    }
}

pub fn generate_problem(seed: u64, shape: &InstanceShape) -> RideAssignmentProblem {
    let mut rng = Lcg(seed);
    let mut builder = RideAssignmentProblemBuilder::default();

    builder.set_city(City {
        rows: shape.rows,
        cols: shape.cols,
        cars: shape.cars,
        rides: shape.rides,
        bonus: shape.bonus,
        steps: shape.steps,
    });

    for _ in 0..shape.rides {
        let pickup = Position::new(rng.below(shape.rows), rng.below(shape.cols));
        let dropoff = Position::new(rng.below(shape.rows), rng.below(shape.cols));
        let start = rng.below(shape.steps * 3 / 4);
        let slack = rng.below(shape.steps / 4);
        let end = start + pickup.distance_to(&dropoff) + slack;

        builder.add_ride(pickup, dropoff, start, end);
    }

    builder.build().unwrap()
}

pub fn create_problem(
    cars: usize,
    bonus: u64,
    steps: Time,
    rides: &[(u64, u64, u64, u64, Time, Time)],
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

    for &(a, b, x, y, start, end) in rides {
        builder.add_ride(Position::new(a, b), Position::new(x, y), start, end);
    }

    builder.build().unwrap()
}
