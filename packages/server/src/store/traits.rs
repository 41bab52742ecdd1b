use async_trait::async_trait;
use uuid::Uuid;

use super::error::StoreError;
use super::records::{
    Challenge, CodeSubmission, FlagSubmission, Hackathon, NewChallenge, NewCodeSubmission,
    NewFlagSubmission, NewHackathon, NewTeam, Team,
};

/// Keyed reads, writes and queries over hackathon data.
///
/// The two `award_*` operations are conditional updates: the membership check
/// and the write happen atomically with respect to other awards on the same
/// team, so concurrent first-correct submissions cannot both score.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HackathonStore: Send + Sync {
    async fn challenge(&self, id: Uuid) -> Result<Option<Challenge>, StoreError>;

    /// All challenges, newest first. `active_only` drops inactive ones.
    async fn challenges(&self, active_only: bool) -> Result<Vec<Challenge>, StoreError>;

    /// Challenges with the given ids, in the order of `ids`. Unknown ids are
    /// skipped.
    async fn challenges_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Challenge>, StoreError>;

    async fn team(&self, id: Uuid) -> Result<Option<Team>, StoreError>;

    async fn hackathon(&self, id: Uuid) -> Result<Option<Hackathon>, StoreError>;

    async fn insert_challenge(&self, new: NewChallenge) -> Result<Challenge, StoreError>;

    async fn insert_hackathon(&self, new: NewHackathon) -> Result<Hackathon, StoreError>;

    /// Append `challenge_id` to the hackathon's challenges unless present.
    ///
    /// Returns the hackathon and whether anything changed.
    async fn assign_challenge(
        &self,
        hackathon_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<(Hackathon, bool), StoreError>;

    async fn insert_team(&self, new: NewTeam) -> Result<Team, StoreError>;

    async fn insert_code_submission(
        &self,
        new: NewCodeSubmission,
    ) -> Result<CodeSubmission, StoreError>;

    async fn insert_flag_submission(
        &self,
        new: NewFlagSubmission,
    ) -> Result<FlagSubmission, StoreError>;

    /// Code runs of a team on a challenge, newest first.
    async fn code_submissions(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<Vec<CodeSubmission>, StoreError>;

    /// Flag attempts of a team on a challenge, newest first.
    async fn flag_submissions(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<Vec<FlagSubmission>, StoreError>;

    /// Add `challenge_id` to the team's completed challenges and `points` to
    /// its score, unless the challenge is already completed.
    ///
    /// Returns whether anything changed.
    async fn award_challenge(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
        points: i64,
    ) -> Result<bool, StoreError>;

    /// Add `challenge_id` to the team's solved flags, mark the flag submitted,
    /// unlock the buildathon and add `points`, unless the flag is already
    /// solved.
    ///
    /// Returns whether anything changed.
    async fn award_flag(
        &self,
        team_id: Uuid,
        challenge_id: Uuid,
        points: i64,
    ) -> Result<bool, StoreError>;

    async fn set_github_link(&self, team_id: Uuid, link: String) -> Result<Team, StoreError>;

    async fn teams_by_hackathon(&self, hackathon_id: Uuid) -> Result<Vec<Team>, StoreError>;
}
