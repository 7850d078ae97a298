pub mod reset;
pub mod setup;
pub mod stats;
