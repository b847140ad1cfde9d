pub mod check;
pub mod deps;
pub mod generate;
pub mod render;
