pub mod attempt;
pub mod generation;
pub mod question;
