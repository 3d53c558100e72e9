pub mod city;
pub mod position;
pub mod ride;
pub mod ride_assignment_problem;
