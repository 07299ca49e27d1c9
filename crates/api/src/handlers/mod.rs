pub mod cat;
pub mod mission;
