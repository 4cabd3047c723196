pub mod cosmetics;
pub mod leaderboard;
pub mod lights;
pub mod round;
pub mod session;
pub mod tournament;
