//! Route tables

pub mod catalog;
pub mod ops;

pub use catalog::catalog_routes;
pub use ops::ops_routes;
