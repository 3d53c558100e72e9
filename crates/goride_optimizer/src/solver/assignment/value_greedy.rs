use rayon::prelude::*;
use tracing::{Level, debug, instrument};

use crate::{
    problem::ride_assignment_problem::RideAssignmentProblem,
    solver::{car::Car, evaluation::MoveEvaluator, ride_move::RideMove, ride_pool::RidePool},
};

use super::create_fleet;

/// Below this many remaining rides the scan stays on the calling thread even
/// when a pool is available.
pub const PARALLEL_SCAN_MIN_RIDES: usize = 512;

/// Serves the cars one after the other. Each car repeatedly takes the ride
/// with the highest value from the pool until its clock reaches the horizon
/// or the pool is empty, then the next car starts choosing.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn assign_by_value(
    problem: &RideAssignmentProblem,
    evaluator: &MoveEvaluator,
    thread_pool: Option<&rayon::ThreadPool>,
) -> Vec<Car> {
    let mut pool = RidePool::from_problem(problem);
    let mut cars = create_fleet(problem);

    for car in cars.iter_mut() {
        while problem.city().is_within_horizon(car.time()) && !pool.is_empty() {
            let Some((position, best_move)) =
                find_best_move(problem, evaluator, car, &pool, thread_pool)
            else {
                break;
            };

            pool.take(position);
            car.commit(best_move);
        }

        debug!(
            car = %car.index(),
            rides = car.moves().len(),
            score = car.score(),
            idle = car.idle_time(),
            remaining = pool.len(),
            "Route complete"
        );

        if pool.is_empty() {
            break;
        }
    }

    cars
}

/// Returns the pool position and move of the first candidate with the
/// highest value, in pool iteration order.
pub fn find_best_move(
    problem: &RideAssignmentProblem,
    evaluator: &MoveEvaluator,
    car: &Car,
    pool: &RidePool,
    thread_pool: Option<&rayon::ThreadPool>,
) -> Option<(usize, RideMove)> {
    match thread_pool {
        Some(thread_pool) if pool.len() >= PARALLEL_SCAN_MIN_RIDES => {
            thread_pool.install(|| par_find_best_move(problem, evaluator, car, pool))
        }
        _ => seq_find_best_move(problem, evaluator, car, pool),
    }
}

fn seq_find_best_move(
    problem: &RideAssignmentProblem,
    evaluator: &MoveEvaluator,
    car: &Car,
    pool: &RidePool,
) -> Option<(usize, RideMove)> {
    let mut best: Option<(usize, RideMove)> = None;

    for (position, ride_id) in pool.iter().enumerate() {
        let candidate = evaluator.evaluate(car, problem.ride(ride_id));

        if best
            .as_ref()
            .is_none_or(|(_, best_move)| candidate.value > best_move.value)
        {
            best = Some((position, candidate));
        }
    }

    best
}

fn par_find_best_move(
    problem: &RideAssignmentProblem,
    evaluator: &MoveEvaluator,
    car: &Car,
    pool: &RidePool,
) -> Option<(usize, RideMove)> {
    pool.as_slice()
        .par_iter()
        .enumerate()
        .map(|(position, &ride_id)| (position, evaluator.evaluate(car, problem.ride(ride_id))))
        .reduce_with(|first, second| {
            if is_better(&second, &first) {
                second
            } else {
                first
            }
        })
}

// Equal values go to the lower pool position so the parallel reduction picks
// the same move as the sequential scan.
fn is_better(candidate: &(usize, RideMove), incumbent: &(usize, RideMove)) -> bool {
    candidate.1.value > incumbent.1.value
        || (candidate.1.value == incumbent.1.value && candidate.0 < incumbent.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        problem::{position::Position, ride::RideIdx},
        solver::{car::CarIdx, solver_params::SolverParams},
        test_utils::create_test_problem,
    };

    #[test]
    fn test_single_car_takes_all_reachable_rides() {
        let problem = create_test_problem(
            1,
            2,
            100,
            vec![(0, 0, 0, 3, 0, 50), (0, 3, 0, 6, 3, 50)],
        );
        let evaluator = MoveEvaluator::new(problem.city(), &SolverParams::default());

        let cars = assign_by_value(&problem, &evaluator, None);

        assert_eq!(cars.len(), 1);
        assert_eq!(
            cars[0].ride_ids().collect::<Vec<_>>(),
            vec![RideIdx::new(0), RideIdx::new(1)]
        );
        assert_eq!(cars[0].score(), 2 + 3 + 2 + 3);
        assert_eq!(cars[0].position(), Position::new(0, 6));
    }

    #[test]
    fn test_first_car_takes_everything_before_second_starts() {
        let problem = create_test_problem(
            2,
            0,
            100,
            vec![(0, 0, 1, 0, 0, 100), (1, 0, 2, 0, 1, 100), (2, 0, 3, 0, 2, 100)],
        );
        let evaluator = MoveEvaluator::new(problem.city(), &SolverParams::default());

        let cars = assign_by_value(&problem, &evaluator, None);

        assert_eq!(cars[0].moves().len(), 3);
        assert!(cars[1].is_empty());
    }

    #[test]
    fn test_car_stops_at_horizon() {
        let problem = create_test_problem(
            2,
            0,
            10,
            vec![(0, 0, 0, 12, 0, 20), (5, 5, 5, 6, 0, 100)],
        );
        let evaluator = MoveEvaluator::new(problem.city(), &SolverParams::default());

        let cars = assign_by_value(&problem, &evaluator, None);

        // The first ride pushes the first car's clock to 12, past the horizon.
        assert_eq!(cars[0].ride_ids().collect::<Vec<_>>(), vec![RideIdx::new(0)]);
        assert_eq!(cars[0].time(), 12);
        assert_eq!(cars[1].ride_ids().collect::<Vec<_>>(), vec![RideIdx::new(1)]);
    }

    #[test]
    fn test_ties_go_to_first_in_pool_order() {
        let problem = create_test_problem(
            1,
            0,
            100,
            vec![(0, 0, 0, 2, 0, 100), (0, 0, 2, 0, 0, 100)],
        );
        let evaluator = MoveEvaluator::new(problem.city(), &SolverParams::default());
        let pool = RidePool::from_problem(&problem);
        let car = Car::new(CarIdx::new(0));

        let (position, best_move) = find_best_move(&problem, &evaluator, &car, &pool, None).unwrap();

        assert_eq!(position, 0);
        assert_eq!(best_move.ride, RideIdx::new(0));
    }

    #[test]
    fn test_parallel_scan_matches_sequential() {
        let rides = (0..2000u64)
            .map(|i| {
                let a = i % 17;
                let b = (i * 7) % 23;
                (a, b, (a + i % 5) % 30, (b + i % 3) % 30, i % 50, 60 + i % 40)
            })
            .collect();
        let problem = create_test_problem(1, 3, 200, rides);
        let evaluator = MoveEvaluator::new(problem.city(), &SolverParams::default());
        let pool = RidePool::from_problem(&problem);
        let car = Car::new(CarIdx::new(0));
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap();

        let sequential = seq_find_best_move(&problem, &evaluator, &car, &pool).unwrap();
        let parallel = find_best_move(&problem, &evaluator, &car, &pool, Some(&thread_pool)).unwrap();

        assert_eq!(sequential.0, parallel.0);
        assert_eq!(sequential.1, parallel.1);
    }

    #[test]
    fn test_empty_pool_has_no_best_move() {
        let problem = create_test_problem(1, 0, 10, vec![]);
        let evaluator = MoveEvaluator::new(problem.city(), &SolverParams::default());
        let pool = RidePool::from_problem(&problem);
        let car = Car::new(CarIdx::new(0));

        assert!(find_best_move(&problem, &evaluator, &car, &pool, None).is_none());
    }
}
