//! Orchestration of the participant-facing actions on top of the judge and
//! the store.

pub mod flag;
pub mod hackathon;
pub mod leaderboard;
pub mod submission;
pub mod team;

pub use flag::{FlagAttempt, FlagOutcome, FlagVerifier};
pub use hackathon::{assign_challenge, hackathon_challenges, register_team};
pub use leaderboard::{RankedTeam, leaderboard, rank_teams};
pub use submission::{RunCode, RunOutcome, SubmissionRecorder};
pub use team::{TeamProgress, submit_buildathon, team_progress};
