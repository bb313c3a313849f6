use crate::errors::{ensure_not_blank, ensure_positive_amount, Result, ValidationError};
use crate::goals::goals_model::{
    Goal, GoalDetail, GoalWithProgress, NewGoal, NewSavingRecord, SavingRecord,
};
use crate::goals::goals_progress::{self, evaluate, required_daily_saving};
use crate::goals::goals_traits::{GoalApiTrait, GoalServiceTrait};
use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use std::sync::Arc;

pub struct GoalService {
    goal_api: Arc<dyn GoalApiTrait>,
}

impl GoalService {
    pub fn new(goal_api: Arc<dyn GoalApiTrait>) -> Self {
        GoalService { goal_api }
    }

    /// Attaches the derived status to a goal.
    pub fn with_progress(goal: Goal, today: NaiveDate) -> GoalWithProgress {
        let amount_progress =
            goals_progress::amount_progress(goal.current_amount, goal.target_amount)
                .clamp(0.0, 100.0);
        let input = goal.progress_input(today);
        let progress = input.as_ref().map(evaluate);
        let required_daily_saving = input.as_ref().and_then(required_daily_saving);

        GoalWithProgress {
            goal,
            amount_progress,
            progress,
            required_daily_saving,
        }
    }

    fn validate_goal(goal: &NewGoal) -> Result<()> {
        ensure_not_blank("name", &goal.name)?;
        ensure_positive_amount("targetAmount", goal.target_amount)?;
        if !goal.current_amount.is_finite() || goal.current_amount < 0.0 {
            return Err(
                ValidationError::invalid_amount("currentAmount", goal.current_amount).into(),
            );
        }
        if let (Some(start), Some(deadline)) = (goal.start_date, goal.deadline) {
            if deadline <= start {
                return Err(ValidationError::date_window(format!(
                    "deadline {} must be after start date {}",
                    deadline, start
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn get_goals_with_progress(&self, today: NaiveDate) -> Result<Vec<GoalWithProgress>> {
        let goals = self.goal_api.list_goals().await?;
        debug!("Evaluating progress for {} goals", goals.len());
        Ok(goals
            .into_iter()
            .map(|goal| Self::with_progress(goal, today))
            .collect())
    }

    async fn get_goal_detail(&self, goal_id: &str, today: NaiveDate) -> Result<GoalDetail> {
        let (goal, mut records) = futures::try_join!(
            self.goal_api.get_goal(goal_id),
            self.goal_api.list_saving_records(goal_id)
        )?;

        records.sort_by(|a, b| b.date.cmp(&a.date));
        let total_recorded = records.iter().map(|r| r.amount).sum();

        Ok(GoalDetail {
            goal: Self::with_progress(goal, today),
            records,
            total_recorded,
        })
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        if let Err(e) = Self::validate_goal(&new_goal) {
            warn!("Rejected new goal '{}': {}", new_goal.name, e);
            return Err(e);
        }
        self.goal_api.create_goal(&new_goal).await
    }

    async fn update_goal(&self, goal_id: &str, goal_update: NewGoal) -> Result<Goal> {
        Self::validate_goal(&goal_update)?;
        self.goal_api.update_goal(goal_id, &goal_update).await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        self.goal_api.delete_goal(goal_id).await
    }

    async fn add_saving_record(
        &self,
        goal_id: &str,
        record: NewSavingRecord,
    ) -> Result<SavingRecord> {
        ensure_not_blank("goalId", goal_id)?;
        ensure_positive_amount("amount", record.amount)?;
        self.goal_api.add_saving_record(goal_id, &record).await
    }

    async fn delete_saving_record(&self, record_id: &str) -> Result<()> {
        self.goal_api.delete_saving_record(record_id).await
    }
}
