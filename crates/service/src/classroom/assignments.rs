use chrono::{DateTime, Utc};
use models::{Assignment, EntityId, Submission};
use tracing::{debug, info, instrument, warn};

use super::service::ClassroomService;
use crate::errors::ServiceError;

impl ClassroomService {
    #[instrument(skip(self, description))]
    pub async fn create_assignment(
        &self,
        course_id: EntityId,
        title: &str,
        description: &str,
        due_date: DateTime<Utc>,
    ) -> Result<Assignment, ServiceError> {
        Self::require(&*self.courses, course_id).await?;
        let (title, description) = (title.to_string(), description.to_string());
        let assignment = self
            .assignments
            .add_with(Box::new(move |id: EntityId| Assignment { id, course_id, title, description, due_date }))
            .await;
        info!(assignment_id = assignment.id, course_id, %due_date, "assignment_created");
        Ok(assignment)
    }

    #[instrument(skip(self))]
    pub async fn get_assignment(&self, assignment_id: EntityId) -> Result<Assignment, ServiceError> {
        Ok(self.assignments.get(assignment_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_assignments(&self, course_id: EntityId) -> Result<Vec<Assignment>, ServiceError> {
        Self::require(&*self.courses, course_id).await?;
        let assignments: Vec<Assignment> = self
            .assignments
            .values()
            .await
            .into_iter()
            .filter(|a| a.course_id == course_id)
            .collect();
        debug!(course_id, count = assignments.len(), "assignments_listed");
        Ok(assignments)
    }

    /// Record a new, ungraded submission. Every call creates a separate
    /// record; earlier submissions by the same student are kept.
    #[instrument(skip(self, file_data), fields(bytes = file_data.len()))]
    pub async fn submit_assignment(
        &self,
        assignment_id: EntityId,
        student_id: EntityId,
        file_data: Vec<u8>,
        file_name: &str,
    ) -> Result<Submission, ServiceError> {
        let assignment = self.assignments.get(assignment_id).await?;
        Self::require(&*self.users, student_id).await?;

        if self.policy.require_enrollment_for_submission {
            let course = self.courses.get(assignment.course_id).await?;
            if !course.is_enrolled(student_id) {
                warn!(assignment_id, student_id, course_id = course.id, "submission_from_unenrolled_student");
                return Err(ServiceError::PermissionDenied(format!(
                    "student {student_id} is not enrolled in course {}",
                    course.id
                )));
            }
        }

        let file_name = file_name.to_string();
        let submission = self
            .submissions
            .add_with(Box::new(move |id: EntityId| Submission::new(id, assignment_id, student_id, file_data, file_name)))
            .await;
        info!(submission_id = submission.id, assignment_id, student_id, "assignment_submitted");
        Ok(submission)
    }

    /// Grade the student's latest submission for the assignment. Re-grading
    /// overwrites grade and feedback.
    #[instrument(skip(self, feedback))]
    pub async fn grade_assignment(
        &self,
        assignment_id: EntityId,
        teacher_id: EntityId,
        student_id: EntityId,
        grade: i32,
        feedback: &str,
    ) -> Result<(), ServiceError> {
        let assignment = self.assignments.get(assignment_id).await?;
        Self::require(&*self.users, student_id).await?;

        if self.policy.verify_grader {
            let course = self.courses.get(assignment.course_id).await?;
            if course.teacher_id != teacher_id {
                warn!(assignment_id, teacher_id, owner = course.teacher_id, "grader_not_course_teacher");
                return Err(ServiceError::PermissionDenied(format!(
                    "user {teacher_id} does not teach course {}",
                    course.id
                )));
            }
        }

        let target = self.latest_submission(assignment_id, student_id).await?;
        let feedback = feedback.to_string();
        let graded = self
            .submissions
            .modify(target.id, Box::new(move |s: &mut Submission| s.apply_grade(grade, feedback)))
            .await?;
        info!(submission_id = graded.id, assignment_id, student_id, grade, "assignment_graded");
        Ok(())
    }

    /// All submissions for the assignment, in no particular order.
    #[instrument(skip(self))]
    pub async fn list_submissions(&self, assignment_id: EntityId) -> Result<Vec<Submission>, ServiceError> {
        Self::require(&*self.assignments, assignment_id).await?;
        let submissions: Vec<Submission> = self
            .submissions
            .values()
            .await
            .into_iter()
            .filter(|s| s.assignment_id == assignment_id)
            .collect();
        debug!(assignment_id, count = submissions.len(), "submissions_listed");
        Ok(submissions)
    }

    /// The student's latest submission for the assignment.
    #[instrument(skip(self))]
    pub async fn get_submission(&self, assignment_id: EntityId, student_id: EntityId) -> Result<Submission, ServiceError> {
        Self::require(&*self.assignments, assignment_id).await?;
        Self::require(&*self.users, student_id).await?;
        self.latest_submission(assignment_id, student_id).await
    }

    async fn latest_submission(&self, assignment_id: EntityId, student_id: EntityId) -> Result<Submission, ServiceError> {
        self.submissions
            .values()
            .await
            .into_iter()
            .filter(|s| s.assignment_id == assignment_id && s.student_id == student_id)
            .max_by_key(|s| s.id)
            .ok_or(ServiceError::SubmissionNotFound { assignment_id, student_id })
    }
}
