pub mod challenge;
pub mod code_submission;
pub mod flag_submission;
pub mod hackathon;
pub mod team;
