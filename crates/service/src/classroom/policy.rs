use configs::PolicyConfig;

/// Checks applied on top of plain existence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassroomPolicy {
    /// `create_course` requires an existing user with the teacher role.
    pub verify_course_teacher: bool,
    /// `grade_assignment` requires the grader to teach the assignment's course.
    pub verify_grader: bool,
    /// `submit_assignment` requires the student to be enrolled in the course.
    pub require_enrollment_for_submission: bool,
}

impl ClassroomPolicy {
    /// No checks beyond existence.
    pub fn permissive() -> Self {
        Self { verify_course_teacher: false, verify_grader: false, require_enrollment_for_submission: false }
    }
}

impl Default for ClassroomPolicy {
    fn default() -> Self { Self::from(&PolicyConfig::default()) }
}

impl From<&PolicyConfig> for ClassroomPolicy {
    fn from(cfg: &PolicyConfig) -> Self {
        Self {
            verify_course_teacher: cfg.verify_course_teacher,
            verify_grader: cfg.verify_grader,
            require_enrollment_for_submission: cfg.require_enrollment_for_submission,
        }
    }
}
