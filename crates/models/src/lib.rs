//! Entity definitions for the school schema plus the connection helpers
//! shared by the service layer and the binaries.

pub mod errors;
pub mod db;
pub mod patch;
pub mod teacher;
pub mod course;
pub mod student;
pub mod student_course;

#[cfg(test)]
mod tests;
