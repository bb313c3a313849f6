//! Goals module - domain models, progress evaluation, services, and traits.

mod goals_model;
pub mod goals_progress;
mod goals_service;
mod goals_traits;

pub use goals_model::{
    Goal, GoalDetail, GoalWithProgress, NewGoal, NewSavingRecord, SavingRecord,
};
pub use goals_progress::{
    evaluate, required_daily_saving, GoalPriority, GoalProgressInput, GoalStatus,
    GoalStatusResult, NEAR_DEADLINE_DAYS,
};
pub use goals_service::GoalService;
pub use goals_traits::{GoalApiTrait, GoalServiceTrait};
