pub mod challenge;
pub mod flag;
pub mod hackathon;
pub mod language;
pub mod leaderboard;
pub mod run;
pub mod team;
