//! Grade statistics.

use crate::error::{ArgumentIssue, InvalidArgument};

/// A student and the grades they received.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    /// The student's name.
    pub name: String,
    /// Every grade the student received.
    pub grades: Vec<f64>,
}

impl Student {
    /// Creates a student.
    pub fn new(name: impl Into<String>, grades: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            grades: grades.into(),
        }
    }
}

/// Returns the mean of every grade of every student.
///
/// Grades are pooled, so a student with more grades carries more weight.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if there are no grades at all.
///
/// # Examples
///
/// ```rust
/// use lazyfn::compute::{Student, average_grade};
///
/// let students = [
///     Student::new("Alice", vec![80.0, 90.0]),
///     Student::new("Bob", vec![70.0]),
/// ];
/// assert_eq!(average_grade(&students).unwrap(), 80.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn average_grade(students: &[Student]) -> Result<f64, InvalidArgument> {
    let (sum, count) = students
        .iter()
        .flat_map(|student| student.grades.iter())
        .fold((0.0_f64, 0_usize), |(sum, count), grade| (sum + grade, count + 1));
    if count == 0 {
        return Err(InvalidArgument::new("students", ArgumentIssue::Empty));
    }
    Ok(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_average_of_single_student() {
        let students = [Student::new("Carol", vec![60.0, 70.0, 80.0])];
        assert_eq!(average_grade(&students), Ok(70.0));
    }

    #[rstest]
    fn test_students_without_grades_are_skipped() {
        let students = [Student::new("Dan", Vec::new()), Student::new("Eve", vec![100.0])];
        assert_eq!(average_grade(&students), Ok(100.0));
    }

    #[rstest]
    fn test_no_grades_is_rejected() {
        assert_eq!(
            average_grade(&[]).unwrap_err().issue(),
            ArgumentIssue::Empty
        );
        assert!(average_grade(&[Student::new("Fay", Vec::new())]).is_err());
    }
}
