use crate::api::{CmdMessage, CourseDetail, MessageLevel};
use crate::error::CatalogError;
use crate::model::Course;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

pub(super) const MENU: &str = "\
1. Load Data File.
2. Print Course List.
3. Print Course.
4. Add Course.
5. Remove Course.
9. Exit.
";

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{MENU}")
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &CatalogError) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {error}").red())
}

/// `ID, Title` per line, in the order given.
pub(super) fn print_courses<W: Write>(out: &mut W, courses: &[Course]) -> io::Result<()> {
    writeln!(out, "Here is a sample schedule:")?;
    writeln!(out)?;
    for course in courses {
        writeln!(out, "{}, {}", course.id.bold(), course.title)?;
    }
    Ok(())
}

pub(super) fn print_detail<W: Write>(out: &mut W, detail: &CourseDetail) -> io::Result<()> {
    writeln!(out, "{}, {}", detail.course.id.bold(), detail.course.title)?;
    writeln!(out, "Prerequisites: {}", detail.prerequisites_line)
}

pub(super) fn print_dependents<W: Write>(out: &mut W, dependents: &[String]) -> io::Result<()> {
    for dependent in dependents {
        writeln!(out, "  - {dependent}")?;
    }
    Ok(())
}

pub(super) fn print_data_files<W: Write>(out: &mut W, files: &[PathBuf]) -> io::Result<()> {
    writeln!(out, "Available data files:")?;
    for (i, path) in files.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        writeln!(out, "{}. {}", i + 1, name)?;
    }
    writeln!(out)
}

pub(super) fn print_elapsed<W: Write>(
    out: &mut W,
    operation: &str,
    elapsed: Option<Duration>,
) -> io::Result<()> {
    match elapsed {
        Some(d) => writeln!(
            out,
            "{}",
            format!("Time to {operation}: {:.6} seconds", d.as_secs_f64()).dimmed()
        ),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn detail_prints_prerequisites_line() {
        let course = Course::new("CSCI300", "Introduction to Algorithms", ["CSCI200", "MATH201"]);
        let text = render(|out| print_detail(out, &CourseDetail::from(course)));

        assert!(text.contains("CSCI300"));
        assert!(text.contains("Introduction to Algorithms"));
        assert!(text.contains("Prerequisites: CSCI200, MATH201"));
    }

    #[test]
    fn course_list_keeps_given_order() {
        let courses = vec![
            Course::new("CSCI100", "Intro", Vec::<String>::new()),
            Course::new("MATH201", "Discrete Mathematics", Vec::<String>::new()),
        ];
        let text = render(|out| print_courses(out, &courses));

        let intro = text.find("Intro").unwrap();
        let math = text.find("Discrete Mathematics").unwrap();
        assert!(intro < math);
    }

    #[test]
    fn course_list_uses_single_space_after_comma() {
        let courses = vec![
            Course::new("CSCI99", "Short", Vec::<String>::new()),
            Course::new("CSCI1000", "Longer Identifier", Vec::<String>::new()),
        ];
        let text = render(|out| print_courses(out, &courses));

        assert!(text.contains(", Short\n"));
        assert!(text.contains(", Longer Identifier\n"));
        assert!(!text.contains(",  "));
    }

    #[test]
    fn data_files_are_numbered_from_one() {
        let files: Vec<PathBuf> = vec!["/tmp/a.csv".into(), "/tmp/b.csv".into()];
        let text = render(|out| print_data_files(out, &files));
        assert!(text.contains("1. a.csv"));
        assert!(text.contains("2. b.csv"));
    }

    #[test]
    fn elapsed_is_skipped_when_missing() {
        assert!(render(|out| print_elapsed(out, "load", None)).is_empty());
        let text = render(|out| print_elapsed(out, "load", Some(Duration::from_millis(2))));
        assert!(text.contains("Time to load: 0.002000 seconds"));
    }
}
