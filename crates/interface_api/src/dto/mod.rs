//! Request and response data transfer objects

pub mod premium;
