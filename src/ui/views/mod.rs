pub mod builder;
pub mod quiz;
pub mod review;
pub mod welcome;
