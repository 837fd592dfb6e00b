use std::sync::Arc;

use models::{Assignment, Course, EntityId, EntityKind, Submission, User};

use super::policy::ClassroomPolicy;
use crate::errors::ServiceError;
use crate::storage::{InMemoryStore, Repository};

/// Classroom business service independent of any transport.
///
/// Holds one repository per entity category, each with its own identity
/// space. Operations are split across `users`, `courses` and `assignments`.
pub struct ClassroomService {
    pub(super) users: Arc<dyn Repository<User>>,
    pub(super) courses: Arc<dyn Repository<Course>>,
    pub(super) assignments: Arc<dyn Repository<Assignment>>,
    pub(super) submissions: Arc<dyn Repository<Submission>>,
    pub(super) policy: ClassroomPolicy,
}

impl ClassroomService {
    pub fn new(
        users: Arc<dyn Repository<User>>,
        courses: Arc<dyn Repository<Course>>,
        assignments: Arc<dyn Repository<Assignment>>,
        submissions: Arc<dyn Repository<Submission>>,
        policy: ClassroomPolicy,
    ) -> Self {
        Self { users, courses, assignments, submissions, policy }
    }

    /// Service over fresh in-memory stores.
    ///
    /// # Examples
    /// ```
    /// use service::classroom::{ClassroomPolicy, ClassroomService};
    /// use models::Role;
    /// let svc = ClassroomService::in_memory(ClassroomPolicy::default());
    /// let teacher = tokio_test::block_on(svc.create_user("Ada", "ada@example.com", Role::Teacher)).unwrap();
    /// let course = tokio_test::block_on(svc.create_course("Analysis", teacher.id)).unwrap();
    /// assert_eq!(course.teacher_id, teacher.id);
    /// ```
    pub fn in_memory(policy: ClassroomPolicy) -> Self {
        Self::new(
            InMemoryStore::<User>::shared(EntityKind::User),
            InMemoryStore::<Course>::shared(EntityKind::Course),
            InMemoryStore::<Assignment>::shared(EntityKind::Assignment),
            InMemoryStore::<Submission>::shared(EntityKind::Submission),
            policy,
        )
    }

    pub fn policy(&self) -> ClassroomPolicy { self.policy }

    /// Fail with `NotFound` unless `id` is present in `repo`.
    pub(super) async fn require<T>(repo: &dyn Repository<T>, id: EntityId) -> Result<(), ServiceError>
    where
        T: Clone + Send + Sync + 'static,
    {
        if repo.exists(id).await {
            Ok(())
        } else {
            Err(ServiceError::not_found(repo.kind(), id))
        }
    }
}
