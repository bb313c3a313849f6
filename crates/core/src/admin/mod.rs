//! Admin module - user and administrator management.

mod admin_model;
mod admin_service;
mod admin_traits;

pub use admin_model::{Admin, AdminRole, NewAdmin, User, UserStats, UserStatusUpdate};
pub use admin_service::{is_plausible_email, AdminService};
pub use admin_traits::{AdminApiTrait, AdminServiceTrait};
