pub mod fusion;
pub mod health;
