pub mod presentation;
pub mod sample;
