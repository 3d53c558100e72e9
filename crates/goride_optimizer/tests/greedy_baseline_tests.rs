mod test_utils;

use goride_optimizer::{
    parsers::{hashcode, submission::parse_submission},
    solver::{
        solver::Solver,
        solver_params::{AssignmentStrategy, SolverParams},
    },
};

use crate::test_utils::{InstanceShape, create_problem, generate_problem};

const EXAMPLE: &str = "3 4 2 3 2 10
0 0 1 3 2 9
1 2 1 0 0 9
2 0 2 2 0 9
";

fn params(strategy: AssignmentStrategy) -> SolverParams {
    SolverParams {
        strategy,
        ..SolverParams::default()
    }
}

#[test]
fn test_example_instance() {
    let problem = hashcode::parse(EXAMPLE).unwrap();

    let greedy = Solver::new(problem.clone(), params(AssignmentStrategy::ValueGreedy))
        .solve()
        .unwrap();
    let baseline = Solver::new(problem, params(AssignmentStrategy::RoundRobin))
        .solve()
        .unwrap();

    assert_eq!(greedy.to_submission(), "0 2 1 0\n1\n");
    assert_eq!(greedy.total_score(), 4);
    assert_eq!(baseline.to_submission(), "0 1 0\n1 2\n");
    assert_eq!(baseline.total_score(), 4);
}

#[test]
fn test_value_greedy_beats_round_robin() {
    let shape = InstanceShape {
        rows: 20,
        cols: 20,
        cars: 5,
        rides: 60,
        bonus: 4,
        steps: 120,
    };
    let problem = generate_problem(7, &shape);

    let greedy = Solver::new(problem.clone(), params(AssignmentStrategy::ValueGreedy))
        .solve()
        .unwrap();
    let baseline = Solver::new(problem, params(AssignmentStrategy::RoundRobin))
        .solve()
        .unwrap();

    assert_eq!(greedy.total_score(), 330);
    assert_eq!(baseline.total_score(), 60);
    assert!(greedy.total_score() >= baseline.total_score());
}

#[test]
fn test_round_robin_assigns_every_ride() {
    let problem = create_problem(
        2,
        0,
        5,
        &[(0, 0, 9, 9, 0, 100), (0, 0, 9, 9, 1, 100), (0, 0, 9, 9, 2, 100)],
    );

    let solution = Solver::new(problem, params(AssignmentStrategy::RoundRobin))
        .solve()
        .unwrap();

    assert_eq!(solution.num_assigned(), 3);
}

#[test]
fn test_no_cars_gives_empty_solution() {
    let problem = create_problem(0, 10, 100, &[(0, 0, 0, 3, 0, 50)]);

    let solution = Solver::new(problem, SolverParams::default())
        .solve()
        .unwrap();

    assert!(solution.cars().is_empty());
    assert_eq!(solution.total_score(), 0);
    assert_eq!(solution.to_submission(), "");
}

#[test]
fn test_weights_change_the_choice() {
    // A one step ride five steps away, or a long ride from the origin. The
    // reward rate favours the long ride, the lateness penalty the short one.
    let problem = create_problem(
        1,
        0,
        100,
        &[(0, 5, 0, 6, 0, 100), (0, 0, 0, 40, 0, 100)],
    );

    let rate_only = Solver::new(
        problem.clone(),
        SolverParams {
            alpha: 1.0,
            beta: 0.0,
            ..SolverParams::default()
        },
    )
    .solve()
    .unwrap();

    assert_eq!(rate_only.to_submission(), "0 1 0\n");

    let penalty_only = Solver::new(
        problem,
        SolverParams {
            alpha: 0.0,
            beta: 1.0,
            ..SolverParams::default()
        },
    )
    .solve()
    .unwrap();

    assert_eq!(penalty_only.to_submission(), "0 0 1\n");
}

#[test]
fn test_submission_replay_matches_solver_score() {
    let shape = InstanceShape {
        rows: 50,
        cols: 50,
        cars: 10,
        rides: 300,
        bonus: 25,
        steps: 400,
    };
    let problem = generate_problem(2018, &shape);

    let solution = Solver::new(problem.clone(), SolverParams::default())
        .solve()
        .unwrap();
    let replayed = parse_submission(&solution.to_submission(), &problem).unwrap();

    assert_eq!(replayed.total_score(), solution.total_score());
    assert_eq!(replayed.total_score(), 4015);
}
