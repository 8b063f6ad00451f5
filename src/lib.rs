pub mod app;
pub mod flood;
pub mod generators;
pub mod maze;
pub mod session;
pub mod solvers;
