use crate::admin::admin_model::{Admin, NewAdmin, User, UserStats};
use crate::admin::admin_traits::{AdminApiTrait, AdminServiceTrait};
use crate::errors::{ensure_not_blank, Result, ValidationError};
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

pub struct AdminService {
    admin_api: Arc<dyn AdminApiTrait>,
}

impl AdminService {
    pub fn new(admin_api: Arc<dyn AdminApiTrait>) -> Self {
        AdminService { admin_api }
    }
}

/// Minimal shape check: exactly one `@` with something on both sides.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[async_trait]
impl AdminServiceTrait for AdminService {
    async fn get_users(&self) -> Result<Vec<User>> {
        let mut users = self.admin_api.list_users().await?;
        users.sort_by_key(|u| u.name.to_lowercase());
        Ok(users)
    }

    async fn get_user(&self, user_id: &str) -> Result<User> {
        self.admin_api.get_user(user_id).await
    }

    async fn set_user_active(&self, user_id: &str, is_active: bool) -> Result<User> {
        info!(
            "{} user {}",
            if is_active { "Activating" } else { "Deactivating" },
            user_id
        );
        self.admin_api.set_user_active(user_id, is_active).await
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.admin_api.delete_user(user_id).await
    }

    async fn get_user_stats(&self) -> Result<UserStats> {
        self.admin_api.get_user_stats().await
    }

    async fn get_admins(&self) -> Result<Vec<Admin>> {
        self.admin_api.list_admins().await
    }

    async fn create_admin(&self, new_admin: NewAdmin) -> Result<Admin> {
        ensure_not_blank("username", &new_admin.username)?;
        if !is_plausible_email(&new_admin.email) {
            return Err(ValidationError::InvalidInput(format!(
                "'{}' is not a valid email address",
                new_admin.email
            ))
            .into());
        }

        let existing = self.admin_api.list_admins().await?;
        let username = new_admin.username.trim();
        if existing
            .iter()
            .any(|a| a.username.eq_ignore_ascii_case(username))
        {
            warn!("Admin username '{}' already taken", username);
            return Err(ValidationError::InvalidInput(format!(
                "admin '{}' already exists",
                username
            ))
            .into());
        }

        self.admin_api.create_admin(&new_admin).await
    }

    async fn delete_admin(&self, admin_id: &str) -> Result<()> {
        self.admin_api.delete_admin(admin_id).await
    }
}
