use super::prompt::Prompter;
use super::render;
use crate::api::CatalogApi;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::store::CourseStore;
use crate::text::{split_fields, trim, DELIMITER};
use std::io::{BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Load,
    List,
    Describe,
    Add,
    Remove,
    Exit,
}

impl MenuChoice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Load),
            2 => Some(MenuChoice::List),
            3 => Some(MenuChoice::Describe),
            4 => Some(MenuChoice::Add),
            5 => Some(MenuChoice::Remove),
            9 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    fn needs_data(self) -> bool {
        !matches!(self, MenuChoice::Load | MenuChoice::Exit)
    }
}

/// The interactive menu. Reads answers from `R`, writes everything to `W`.
pub struct Shell<S: CourseStore, R, W> {
    api: CatalogApi<S>,
    prompter: Prompter<R, W>,
    data_dir: PathBuf,
    config: CatalogConfig,
    loaded: bool,
}

impl<S: CourseStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(
        api: CatalogApi<S>,
        input: R,
        output: W,
        data_dir: PathBuf,
        config: CatalogConfig,
    ) -> Self {
        Self {
            api,
            prompter: Prompter::new(input, output),
            data_dir,
            config,
            loaded: false,
        }
    }

    pub fn api(&self) -> &CatalogApi<S> {
        &self.api
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Loads `path` before the menu starts. Unlike menu loads, failure is
    /// returned to the caller.
    pub fn preload(&mut self, path: &Path) -> Result<()> {
        let result = self.api.load(path)?;
        self.loaded = true;
        let out = self.prompter.output();
        render::print_messages(out, &result.messages)?;
        writeln!(out)?;
        Ok(())
    }

    /// Runs the menu until the operator exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        let out = self.prompter.output();
        writeln!(out, "Welcome to the ABCU Course Management System!")?;
        writeln!(out)?;

        loop {
            render::print_menu(self.prompter.output())?;
            let answer = match self.prompter.ask("What would you like to do? ") {
                Ok(Some(line)) => Ok(line),
                Ok(None) => {
                    debug!("input closed at menu prompt");
                    break;
                }
                // read_line has already consumed the offending line.
                Err(CatalogError::Io(e)) if e.kind() == ErrorKind::InvalidData => Err(()),
                Err(e) => return Err(e),
            };

            let parsed = answer.and_then(|line| trim(&line).parse::<u32>().map_err(drop));
            let choice = match parsed {
                Ok(n) => match MenuChoice::from_number(n) {
                    Some(choice) => choice,
                    None => {
                        let out = self.prompter.output();
                        writeln!(
                            out,
                            "{n} is not a valid option. Please select 1, 2, 3, 4, 5, or 9."
                        )?;
                        writeln!(out)?;
                        continue;
                    }
                },
                Err(_) => {
                    writeln!(
                        self.prompter.output(),
                        "Invalid input. Please enter a number for your menu choice."
                    )?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                writeln!(
                    self.prompter.output(),
                    "Thank you for using the ABCU Course Management System. Goodbye!"
                )?;
                break;
            }
            if choice.needs_data() && !self.loaded {
                writeln!(self.prompter.output(), "Please load data first (Option 1).")?;
                continue;
            }

            let outcome = match choice {
                MenuChoice::Load => self.load(),
                MenuChoice::List => self.list(),
                MenuChoice::Describe => self.describe(),
                MenuChoice::Add => self.add(),
                MenuChoice::Remove => self.remove(),
                MenuChoice::Exit => Ok(()),
            };
            self.report(outcome)?;
            writeln!(self.prompter.output())?;
        }
        Ok(())
    }

    /// Operation errors are shown and the session continues. Only failures
    /// writing to the terminal end it.
    fn report(&mut self, outcome: Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(CatalogError::Io(e)) if is_output_error(&e) => Err(CatalogError::Io(e)),
            Err(e) => {
                render::print_error(self.prompter.output(), &e)?;
                Ok(())
            }
        }
    }

    fn load(&mut self) -> Result<()> {
        let found = self
            .api
            .data_files(&self.data_dir, self.config.get_file_ext())?;
        let out = self.prompter.output();
        if found.data_files.is_empty() {
            render::print_messages(out, &found.messages)?;
            return Ok(());
        }
        render::print_data_files(out, &found.data_files)?;

        let answer = self.prompter.ask("Enter the number of the file to load: ")?;
        let selected = answer
            .and_then(|a| trim(&a).parse::<usize>().ok())
            .filter(|n| (1..=found.data_files.len()).contains(n));
        let Some(n) = selected else {
            writeln!(self.prompter.output(), "Invalid selection.")?;
            return Ok(());
        };

        let result = self.api.load(&found.data_files[n - 1])?;
        self.loaded = true;
        let out = self.prompter.output();
        render::print_messages(out, &result.messages)?;
        self.print_elapsed("load", &result)
    }

    fn list(&mut self) -> Result<()> {
        let result = self.api.list_courses()?;
        render::print_courses(self.prompter.output(), &result.listed_courses)?;
        self.print_elapsed("print", &result)
    }

    fn describe(&mut self) -> Result<()> {
        let query = self
            .prompter
            .require("What course do you want to know about? ", "Course number")?;
        let result = self.api.describe(&query)?;
        if let Some(detail) = &result.detail {
            render::print_detail(self.prompter.output(), detail)?;
        }
        self.print_elapsed("print", &result)
    }

    fn add(&mut self) -> Result<()> {
        let id = self
            .prompter
            .require("Enter course number (e.g., CSCI300): ", "Course number")?;
        self.api.check_new_course(&id)?;
        let title = self.prompter.require("Enter course title: ", "Course title")?;
        let prerequisites = self.prompter.require(
            "Enter prerequisites (comma-separated, leave blank or type 'none' if none): ",
            "Prerequisites",
        )?;

        let tokens = split_fields(&prerequisites, DELIMITER);
        let result = self.api.add_course(&id, &title, &tokens)?;
        render::print_messages(self.prompter.output(), &result.messages)?;
        self.print_elapsed("add", &result)
    }

    fn remove(&mut self) -> Result<()> {
        let id = self
            .prompter
            .require("Enter course number to remove: ", "Course number")?;
        let plan = self.api.plan_removal(&id)?;
        let Some(course) = plan.affected_courses.first() else {
            return Ok(());
        };
        let key = course.id.clone();

        if !plan.dependents.is_empty() {
            let out = self.prompter.output();
            writeln!(out)?;
            render::print_messages(out, &plan.messages)?;
            render::print_dependents(out, &plan.dependents)?;
            writeln!(out)?;
            writeln!(out, "Removing this course will affect these courses.")?;
            if !self
                .prompter
                .confirm("Are you sure you want to continue? (yes/no): ")?
            {
                writeln!(self.prompter.output(), "Course removal cancelled.")?;
                return Ok(());
            }
        }

        let removed = self.api.remove_course(&key)?;
        let out = self.prompter.output();
        writeln!(out)?;
        render::print_messages(out, &removed.messages)?;
        writeln!(
            out,
            "WARNING: All prerequisites referencing this course will be removed from other courses."
        )?;

        if self
            .prompter
            .confirm("Do you want to proceed with prerequisite cleanup? (yes/no): ")?
        {
            let cleaned = self.api.cleanup_prerequisites(&key)?;
            render::print_messages(self.prompter.output(), &cleaned.messages)?;
        } else {
            writeln!(
                self.prompter.output(),
                "Prerequisite cleanup skipped. Some courses may still reference this course as a prerequisite."
            )?;
        }
        self.print_elapsed("remove", &removed)
    }

    fn print_elapsed(&mut self, operation: &str, result: &crate::api::CmdResult) -> Result<()> {
        if self.config.show_timings {
            render::print_elapsed(self.prompter.output(), operation, result.elapsed)?;
        }
        Ok(())
    }
}

fn is_output_error(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::BrokenPipe | std::io::ErrorKind::WriteZero
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ChainedStore;
    use std::fs;
    use std::io::Cursor;

    const SAMPLE: &str = "\
CSCI100, Introduction to Computer Science
CSCI200, Data Structures, CSCI100
MATH201, Discrete Mathematics
CSCI300, Introduction to Algorithms, CSCI200, MATH201
CSCI350, Operating Systems, CSCI100
";

    struct Session {
        _dir: tempfile::TempDir,
        shell: Shell<ChainedStore, Cursor<Vec<u8>>, Vec<u8>>,
    }

    fn session(script: &str) -> Session {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("abcu.csv"), SAMPLE).unwrap();
        let shell = Shell::new(
            CatalogApi::new(ChainedStore::new()),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            dir.path().to_path_buf(),
            CatalogConfig::default(),
        );
        Session { _dir: dir, shell }
    }

    fn run_script(script: &str) -> (String, Session) {
        let mut s = session(script);
        s.shell.run().unwrap();
        let out = String::from_utf8(std::mem::take(s.shell.prompter.output())).unwrap();
        (out, s)
    }

    #[test]
    fn exit_says_goodbye() {
        let (out, _) = run_script("9\n");
        assert!(out.contains("Welcome to the ABCU Course Management System!"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (out, _) = run_script("");
        assert!(out.contains("1. Load Data File."));
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn invalid_menu_input_reprompts() {
        let (out, _) = run_script("abc\n7\n9\n");
        assert!(out.contains("Invalid input. Please enter a number for your menu choice."));
        assert!(out.contains("7 is not a valid option."));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn operations_wait_for_load() {
        let (out, s) = run_script("2\n3\n9\n");
        assert_eq!(out.matches("Please load data first (Option 1).").count(), 2);
        assert!(s.shell.api().store().is_empty());
    }

    #[test]
    fn load_then_list_and_describe() {
        let (out, s) = run_script("1\n1\n2\n3\ncsci300\n9\n");
        assert!(out.contains("1. abcu.csv"));
        assert!(out.contains("abcu.csv loaded successfully!"));
        assert!(out.contains("5 courses loaded."));
        assert!(out.contains("Here is a sample schedule:"));
        assert!(out.contains("Prerequisites: CSCI200, MATH201"));
        assert_eq!(s.shell.api().store().len(), 5);

        let first = out.find("Introduction to Computer Science").unwrap();
        let last = out.find("Operating Systems").unwrap();
        assert!(first < last);
    }

    #[test]
    fn invalid_file_selection_loads_nothing() {
        let (out, s) = run_script("1\n4\n1\nx\n9\n");
        assert_eq!(out.matches("Invalid selection.").count(), 2);
        assert!(s.shell.api().store().is_empty());
    }

    #[test]
    fn describe_unknown_course_reports_error() {
        let (out, _) = run_script("1\n1\n3\nbio101\n3\n\n9\n");
        assert!(out.contains("Course 'bio101' not found."));
        assert!(out.contains("Course number cannot be empty."));
    }

    #[test]
    fn add_with_missing_prerequisite_is_rejected() {
        let (out, s) = run_script("1\n1\n4\ncsci400\nCompilers\nCSCI300, CSCI390\n9\n");
        assert!(out.contains("Prerequisite 'CSCI390' for course 'CSCI400' does not exist"));
        assert!(s.shell.api().store().lookup("CSCI400").is_none());
    }

    #[test]
    fn add_with_none_prerequisites() {
        let (out, s) = run_script("1\n1\n4\nengl101\nComposition\nnone\n9\n");
        assert!(out.contains("Course 'ENGL101' added successfully!"));
        let course = s.shell.api().store().lookup("ENGL101").unwrap();
        assert!(course.prerequisites.is_empty());
    }

    #[test]
    fn add_rejects_existing_number_before_asking_for_title() {
        let (out, s) = run_script("1\n1\n4\ncsci100\n2\n9\n");
        assert!(out.contains("Error: Course CSCI100 already exists."));
        assert!(!out.contains("Enter course title: "));
        assert!(out.contains("Here is a sample schedule:"));
        assert!(out.contains("Goodbye!"));
        assert_eq!(
            s.shell.api().store().lookup("CSCI100").unwrap().title,
            "Introduction to Computer Science"
        );
    }

    #[test]
    fn undecodable_menu_line_is_invalid_input() {
        let mut shell = Shell::new(
            CatalogApi::new(ChainedStore::new()),
            Cursor::new(b"\xff\n9\n".to_vec()),
            Vec::new(),
            PathBuf::from("."),
            CatalogConfig::default(),
        );
        shell.run().unwrap();
        let out = String::from_utf8(shell.into_output()).unwrap();
        assert!(out.contains("Invalid input. Please enter a number for your menu choice."));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn add_interrupted_by_end_of_input() {
        let (out, s) = run_script("1\n1\n4\nengl101\n");
        assert!(out.contains("Course title cannot be empty."));
        assert!(s.shell.api().store().lookup("ENGL101").is_none());
    }

    #[test]
    fn remove_with_dependents_declined() {
        let (out, s) = run_script("1\n1\n5\ncsci100\nno\n9\n");
        assert!(out.contains("WARNING: CSCI100 is a prerequisite for:"));
        assert!(out.contains("  - CSCI200"));
        assert!(out.contains("  - CSCI350"));
        assert!(out.contains("Course removal cancelled."));
        assert!(s.shell.api().store().lookup("CSCI100").is_some());
    }

    #[test]
    fn remove_with_cleanup_confirmed() {
        let (out, s) = run_script("1\n1\n5\ncsci200\nyes\nyes\n9\n");
        assert!(out.contains("Course CSCI200 removed successfully."));
        assert!(out.contains("Prerequisite cleanup completed"));

        let store = s.shell.api().store();
        assert!(store.lookup("CSCI200").is_none());
        assert_eq!(store.lookup("CSCI300").unwrap().prerequisites, vec!["MATH201"]);
    }

    #[test]
    fn remove_with_cleanup_declined_keeps_dangling_reference() {
        let (out, s) = run_script("1\n1\n5\ncsci200\ny\nno\n9\n");
        assert!(out.contains("Prerequisite cleanup skipped."));

        let store = s.shell.api().store();
        assert!(store.lookup("CSCI200").is_none());
        assert_eq!(
            store.lookup("CSCI300").unwrap().prerequisites,
            vec!["CSCI200", "MATH201"]
        );
    }

    #[test]
    fn remove_leaf_course_skips_dependent_prompt() {
        let (out, s) = run_script("1\n1\n5\ncsci300\nno\n5\ncsci300\n9\n");
        assert!(!out.contains("Are you sure you want to continue?"));
        assert!(out.contains("Course CSCI300 removed successfully."));
        assert!(out.contains("Course 'CSCI300' not found."));
        assert_eq!(s.shell.api().store().len(), 4);
    }

    #[test]
    fn list_after_removing_everything_reports_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.csv"), "ENGL101, Composition\n").unwrap();
        let mut shell = Shell::new(
            CatalogApi::new(ChainedStore::new()),
            Cursor::new(b"1\n1\n5\nengl101\nno\n2\n9\n".to_vec()),
            Vec::new(),
            dir.path().to_path_buf(),
            CatalogConfig::default(),
        );
        shell.run().unwrap();
        let out = String::from_utf8(shell.into_output()).unwrap();
        assert!(out.contains("No courses loaded."));
    }

    #[test]
    fn timings_are_opt_in() {
        let (out, _) = run_script("1\n1\n9\n");
        assert!(!out.contains("Time to load"));

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("abcu.csv"), SAMPLE).unwrap();
        let config = CatalogConfig {
            show_timings: true,
            ..CatalogConfig::default()
        };
        let mut shell = Shell::new(
            CatalogApi::new(ChainedStore::new()),
            Cursor::new(b"1\n1\n9\n".to_vec()),
            Vec::new(),
            dir.path().to_path_buf(),
            config,
        );
        shell.run().unwrap();
        let out = String::from_utf8(shell.into_output()).unwrap();
        assert!(out.contains("Time to load:"));
    }

    #[test]
    fn preload_makes_menu_operations_available() {
        let mut s = session("2\n9\n");
        let path = s.shell.data_dir.join("abcu.csv");
        s.shell.preload(&path).unwrap();
        s.shell.run().unwrap();
        let out = String::from_utf8(s.shell.into_output()).unwrap();
        assert!(out.contains("Here is a sample schedule:"));
    }
}
