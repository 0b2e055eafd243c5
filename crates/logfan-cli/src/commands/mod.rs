pub mod demo;
pub mod emit;
