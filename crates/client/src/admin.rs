//! User and admin management endpoints.

use async_trait::async_trait;
use log::info;

use spendsmart_core::admin::{Admin, AdminApiTrait, NewAdmin, User, UserStats, UserStatusUpdate};
use spendsmart_core::errors::Result;

use crate::client::{segment, SpendSmartApiClient};

#[async_trait]
impl AdminApiTrait for SpendSmartApiClient {
    async fn list_users(&self) -> Result<Vec<User>> {
        let users: Vec<User> = self.get("/api/users", &[]).await?;
        info!("[SpendSmartApi] Fetched {} users", users.len());
        Ok(users)
    }

    async fn get_user(&self, user_id: &str) -> Result<User> {
        self.get(&format!("/api/users/{}", segment(user_id)), &[]).await
    }

    async fn set_user_active(&self, user_id: &str, is_active: bool) -> Result<User> {
        self.put(
            &format!("/api/users/{}/status", segment(user_id)),
            &UserStatusUpdate { is_active },
        )
        .await
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.delete(&format!("/api/users/{}", segment(user_id))).await
    }

    async fn get_user_stats(&self) -> Result<UserStats> {
        self.get("/api/users/stats", &[]).await
    }

    async fn list_admins(&self) -> Result<Vec<Admin>> {
        self.get("/api/admins", &[]).await
    }

    async fn create_admin(&self, new_admin: &NewAdmin) -> Result<Admin> {
        self.post("/api/admins", new_admin).await
    }

    async fn delete_admin(&self, admin_id: &str) -> Result<()> {
        self.delete(&format!("/api/admins/{}", segment(admin_id))).await
    }
}
