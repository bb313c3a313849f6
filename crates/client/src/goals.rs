//! Goal and saving-record endpoints.

use async_trait::async_trait;
use log::info;

use spendsmart_core::errors::Result;
use spendsmart_core::goals::{Goal, GoalApiTrait, NewGoal, NewSavingRecord, SavingRecord};

use crate::client::{segment, SpendSmartApiClient};

#[async_trait]
impl GoalApiTrait for SpendSmartApiClient {
    async fn list_goals(&self) -> Result<Vec<Goal>> {
        let goals: Vec<Goal> = self.get("/api/goals", &[]).await?;
        info!("[SpendSmartApi] Fetched {} goals", goals.len());
        Ok(goals)
    }

    async fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.get(&format!("/api/goals/{}", segment(goal_id)), &[]).await
    }

    async fn create_goal(&self, new_goal: &NewGoal) -> Result<Goal> {
        self.post("/api/goals", new_goal).await
    }

    async fn update_goal(&self, goal_id: &str, goal_update: &NewGoal) -> Result<Goal> {
        self.put(&format!("/api/goals/{}", segment(goal_id)), goal_update).await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        self.delete(&format!("/api/goals/{}", segment(goal_id))).await
    }

    async fn list_saving_records(&self, goal_id: &str) -> Result<Vec<SavingRecord>> {
        self.get(&format!("/api/goals/{}/savings", segment(goal_id)), &[]).await
    }

    async fn add_saving_record(
        &self,
        goal_id: &str,
        record: &NewSavingRecord,
    ) -> Result<SavingRecord> {
        self.post(&format!("/api/goals/{}/savings", segment(goal_id)), record).await
    }

    async fn delete_saving_record(&self, record_id: &str) -> Result<()> {
        self.delete(&format!("/api/savings/{}", segment(record_id))).await
    }
}
