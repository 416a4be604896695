pub mod advice;
pub mod analyze;
pub mod dispatch;
pub mod health;
pub mod quiz;
pub mod result;
pub mod schema;
pub mod shared;
