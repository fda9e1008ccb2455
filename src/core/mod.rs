//! Core conversion modules

pub mod expr;
pub mod notation;
