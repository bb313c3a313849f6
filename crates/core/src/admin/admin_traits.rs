use crate::admin::admin_model::{Admin, NewAdmin, User, UserStats};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for the backend's user and admin endpoints
#[async_trait]
pub trait AdminApiTrait: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn get_user(&self, user_id: &str) -> Result<User>;
    async fn set_user_active(&self, user_id: &str, is_active: bool) -> Result<User>;
    async fn delete_user(&self, user_id: &str) -> Result<()>;
    async fn get_user_stats(&self) -> Result<UserStats>;
    async fn list_admins(&self) -> Result<Vec<Admin>>;
    async fn create_admin(&self, new_admin: &NewAdmin) -> Result<Admin>;
    async fn delete_admin(&self, admin_id: &str) -> Result<()>;
}

/// Trait for user/admin management operations
#[async_trait]
pub trait AdminServiceTrait: Send + Sync {
    async fn get_users(&self) -> Result<Vec<User>>;
    async fn get_user(&self, user_id: &str) -> Result<User>;
    async fn set_user_active(&self, user_id: &str, is_active: bool) -> Result<User>;
    async fn delete_user(&self, user_id: &str) -> Result<()>;
    async fn get_user_stats(&self) -> Result<UserStats>;
    async fn get_admins(&self) -> Result<Vec<Admin>>;
    async fn create_admin(&self, new_admin: NewAdmin) -> Result<Admin>;
    async fn delete_admin(&self, admin_id: &str) -> Result<()>;
}
