use std::io::{self, Write};

use crate::core::course::{Course, CourseSummary};

/// Write one `ID, Title` line per course
pub fn write_course_list<W: Write>(out: &mut W, courses: &[CourseSummary]) -> io::Result<()> {
    for course in courses {
        writeln!(out, "{}, {}", course.id, course.title)?;
    }
    Ok(())
}

/// Write the detail block for a single course
pub fn write_course<W: Write>(out: &mut W, course: &Course) -> io::Result<()> {
    writeln!(out, "Course Information")?;
    writeln!(out, "{}", "-".repeat(18))?;
    writeln!(out, "Course: {}", course.id)?;
    writeln!(out, "Title:  {}", course.title)?;
    writeln!(out, "Prerequisites: {}", course.prerequisites_display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_course_list() {
        let courses = vec![
            Course::new("cs100", "Intro").summary(),
            Course::new("cs200", "Data Structures").summary(),
        ];
        let mut out = Vec::new();
        write_course_list(&mut out, &courses).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "CS100, Intro\nCS200, Data Structures\n"
        );
    }

    #[test]
    fn test_write_course() {
        let course = Course::new("cs300", "Software Design").with_prerequisites(["cs200", "cs101"]);
        let mut out = Vec::new();
        write_course(&mut out, &course).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Course Information\n------------------\n"));
        assert!(text.contains("Course: CS300\n"));
        assert!(text.contains("Title:  Software Design\n"));
        assert!(text.ends_with("Prerequisites: CS200, CS101\n"));
    }

    #[test]
    fn test_write_course_without_prerequisites() {
        let course = Course::new("cs100", "Intro");
        let mut out = Vec::new();
        write_course(&mut out, &course).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Prerequisites: None\n"));
    }
}
