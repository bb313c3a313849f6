use crate::errors::Result;
use crate::goals::goals_model::{
    Goal, GoalDetail, GoalWithProgress, NewGoal, NewSavingRecord, SavingRecord,
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for the backend's goal and saving-record endpoints
#[async_trait]
pub trait GoalApiTrait: Send + Sync {
    async fn list_goals(&self) -> Result<Vec<Goal>>;
    async fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    async fn create_goal(&self, new_goal: &NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: &str, goal_update: &NewGoal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<()>;
    async fn list_saving_records(&self, goal_id: &str) -> Result<Vec<SavingRecord>>;
    async fn add_saving_record(
        &self,
        goal_id: &str,
        record: &NewSavingRecord,
    ) -> Result<SavingRecord>;
    async fn delete_saving_record(&self, record_id: &str) -> Result<()>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// All goals with their status as of `today`.
    async fn get_goals_with_progress(&self, today: NaiveDate) -> Result<Vec<GoalWithProgress>>;
    async fn get_goal_detail(&self, goal_id: &str, today: NaiveDate) -> Result<GoalDetail>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: &str, goal_update: NewGoal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<()>;
    async fn add_saving_record(
        &self,
        goal_id: &str,
        record: NewSavingRecord,
    ) -> Result<SavingRecord>;
    async fn delete_saving_record(&self, record_id: &str) -> Result<()>;
}
