pub mod game;
pub mod presence;
pub mod steam;
