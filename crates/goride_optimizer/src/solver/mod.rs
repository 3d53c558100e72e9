pub mod assignment;
pub mod car;
pub mod evaluation;
pub mod ride_move;
pub mod ride_pool;
pub mod solution;
pub mod solver;
pub mod solver_params;
