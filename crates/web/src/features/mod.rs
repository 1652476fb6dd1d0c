pub mod admin;
pub mod leaderboard;
pub mod participants;
pub mod settings;
