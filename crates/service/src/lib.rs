//! Service layer providing the school CRUD operations on top of `models`.
//! - Every operation takes the store handle explicitly; nothing is global.
//! - Missing primary keys surface as [`errors::ServiceError::NotFound`].

pub mod errors;
pub mod pagination;
pub mod teacher_service;
pub mod course_service;
pub mod student_service;
#[cfg(test)]
pub mod test_support;
