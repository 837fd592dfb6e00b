use models::{Course, EntityId, User};
use tracing::{debug, info, instrument, warn};

use super::service::ClassroomService;
use crate::errors::ServiceError;

impl ClassroomService {
    /// Create a course owned by `teacher_id`.
    ///
    /// With `verify_course_teacher` the teacher must exist and hold the
    /// teacher role; otherwise the id is stored unchecked.
    #[instrument(skip(self))]
    pub async fn create_course(&self, name: &str, teacher_id: EntityId) -> Result<Course, ServiceError> {
        if self.policy.verify_course_teacher {
            let teacher = self.users.get(teacher_id).await?;
            if !teacher.is_teacher() {
                warn!(teacher_id, "course_owner_not_teacher");
                return Err(ServiceError::PermissionDenied(format!("user {teacher_id} is not a teacher")));
            }
        }
        let name = name.to_string();
        let course = self
            .courses
            .add_with(Box::new(move |id: EntityId| Course::new(id, name, teacher_id)))
            .await;
        info!(course_id = course.id, teacher_id, "course_created");
        Ok(course)
    }

    #[instrument(skip(self))]
    pub async fn get_course(&self, course_id: EntityId) -> Result<Course, ServiceError> {
        Ok(self.courses.get(course_id).await?)
    }

    /// Append `student_id` to the course roster. Enrolling twice appends twice.
    #[instrument(skip(self))]
    pub async fn enroll_student(&self, course_id: EntityId, student_id: EntityId) -> Result<(), ServiceError> {
        Self::require(&*self.courses, course_id).await?;
        Self::require(&*self.users, student_id).await?;
        let course = self
            .courses
            .modify(course_id, Box::new(move |c: &mut Course| c.enroll(student_id)))
            .await?;
        info!(course_id, student_id, enrolled = course.enrolled_students.len(), "student_enrolled");
        Ok(())
    }

    /// Drop the first roster entry for `student_id`; a no-op if there is none.
    #[instrument(skip(self))]
    pub async fn unenroll_student(&self, course_id: EntityId, student_id: EntityId) -> Result<(), ServiceError> {
        Self::require(&*self.courses, course_id).await?;
        Self::require(&*self.users, student_id).await?;
        let course = self
            .courses
            .modify(course_id, Box::new(move |c: &mut Course| {
                c.unenroll(student_id);
            }))
            .await?;
        info!(course_id, student_id, enrolled = course.enrolled_students.len(), "student_unenrolled");
        Ok(())
    }

    /// Courses taught by `teacher_id`, in no particular order.
    #[instrument(skip(self))]
    pub async fn list_courses(&self, teacher_id: EntityId) -> Result<Vec<Course>, ServiceError> {
        Self::require(&*self.users, teacher_id).await?;
        let courses: Vec<Course> = self
            .courses
            .values()
            .await
            .into_iter()
            .filter(|c| c.teacher_id == teacher_id)
            .collect();
        debug!(teacher_id, count = courses.len(), "courses_listed");
        Ok(courses)
    }

    /// Resolve the roster in enrollment order. Fails if any enrolled id no
    /// longer names a user.
    #[instrument(skip(self))]
    pub async fn list_students(&self, course_id: EntityId) -> Result<Vec<User>, ServiceError> {
        let course = self.courses.get(course_id).await?;
        let mut students = Vec::with_capacity(course.enrolled_students.len());
        for student_id in course.enrolled_students {
            students.push(self.users.get(student_id).await?);
        }
        debug!(course_id, count = students.len(), "students_listed");
        Ok(students)
    }
}
