use serde::{Deserialize, Serialize};

use crate::EntityId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: EntityId,
    pub name: String,
    pub teacher_id: EntityId,
    /// Enrollment order is kept; the same student may appear more than once.
    #[serde(default)]
    pub enrolled_students: Vec<EntityId>,
}

impl Course {
    pub fn new(id: EntityId, name: impl Into<String>, teacher_id: EntityId) -> Self {
        Self { id, name: name.into(), teacher_id, enrolled_students: Vec::new() }
    }

    pub fn enroll(&mut self, student_id: EntityId) {
        self.enrolled_students.push(student_id);
    }

    /// Removes the first occurrence of `student_id`. Returns whether anything was removed.
    pub fn unenroll(&mut self, student_id: EntityId) -> bool {
        match self.enrolled_students.iter().position(|id| *id == student_id) {
            Some(idx) => {
                self.enrolled_students.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn is_enrolled(&self, student_id: EntityId) -> bool {
        self.enrolled_students.contains(&student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unenroll_removes_first_match_only() {
        let mut course = Course::new(0, "Algebra", 1);
        for id in [5, 7, 5] {
            course.enroll(id);
        }
        assert!(course.unenroll(5));
        assert_eq!(course.enrolled_students, vec![7, 5]);
    }

    #[test]
    fn unenroll_missing_student_is_noop() {
        let mut course = Course::new(0, "Algebra", 1);
        course.enroll(2);
        assert!(!course.unenroll(9));
        assert_eq!(course.enrolled_students, vec![2]);
    }

    #[test]
    fn wire_shape_uses_snake_case() {
        let course = Course { id: 1, name: "Art".into(), teacher_id: 4, enrolled_students: vec![2, 2] };
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["teacher_id"], 4);
        assert_eq!(json["enrolled_students"], serde_json::json!([2, 2]));
    }
}
