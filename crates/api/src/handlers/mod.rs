pub mod generate;
pub mod greeting;
