use models::{EntityId, Role, User};
use tracing::{debug, info, instrument};

use super::service::ClassroomService;
use crate::errors::ServiceError;

impl ClassroomService {
    #[instrument(skip(self))]
    pub async fn create_user(&self, name: &str, email: &str, role: Role) -> Result<User, ServiceError> {
        let (name, email) = (name.to_string(), email.to_string());
        let user = self
            .users
            .add_with(Box::new(move |id: EntityId| User { id, name, email, role }))
            .await;
        info!(user_id = user.id, role = ?user.role, "user_created");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: EntityId) -> Result<User, ServiceError> {
        let user = self.users.get(user_id).await?;
        debug!(user_id, "user_loaded");
        Ok(user)
    }

    /// Replace name and email; the role is kept.
    #[instrument(skip(self))]
    pub async fn update_user(&self, user_id: EntityId, name: &str, email: &str) -> Result<User, ServiceError> {
        Self::require(&*self.users, user_id).await?;
        let mut user = self.users.get(user_id).await?;
        user.name = name.to_string();
        user.email = email.to_string();
        self.users.update(user_id, user.clone()).await?;
        info!(user_id, "user_updated");
        Ok(user)
    }

    /// Remove a user. Courses and submissions that reference the id are left as-is.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: EntityId) -> Result<(), ServiceError> {
        Self::require(&*self.users, user_id).await?;
        self.users.delete(user_id).await?;
        info!(user_id, "user_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use models::EntityKind;

    use super::*;
    use crate::classroom::ClassroomPolicy;

    fn svc() -> ClassroomService { ClassroomService::in_memory(ClassroomPolicy::default()) }

    #[tokio::test]
    async fn create_and_get_user() -> Result<(), anyhow::Error> {
        let svc = svc();
        let created = svc.create_user("Test User", "test@testing.ru", Role::Student).await?;
        assert_eq!(created.id, 0);
        assert_eq!(created.name, "Test User");
        assert_eq!(created.email, "test@testing.ru");
        assert_eq!(created.role, Role::Student);

        assert_eq!(svc.get_user(created.id).await?, created);
        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_role() -> Result<(), anyhow::Error> {
        let svc = svc();
        let t = svc.create_user("T", "t@x.io", Role::Teacher).await?;
        let updated = svc.update_user(t.id, "Teach", "teach@x.io").await?;
        assert_eq!(updated.role, Role::Teacher);
        assert_eq!(updated.name, "Teach");
        assert_eq!(svc.get_user(t.id).await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let svc = svc();
        let missing = ServiceError::not_found(EntityKind::User, 9);
        assert_eq!(svc.get_user(9).await, Err(missing.clone()));
        assert_eq!(svc.update_user(9, "a", "b").await, Err(missing.clone()));
        assert_eq!(svc.delete_user(9).await, Err(missing));
    }

    #[tokio::test]
    async fn deleted_user_is_gone_and_id_not_reused() -> Result<(), anyhow::Error> {
        let svc = svc();
        let u = svc.create_user("A", "a@x.io", Role::Student).await?;
        svc.delete_user(u.id).await?;
        assert!(svc.get_user(u.id).await.unwrap_err().is_not_found());

        let next = svc.create_user("B", "b@x.io", Role::Student).await?;
        assert_eq!(next.id, u.id + 1);
        Ok(())
    }
}
