//! Interactive text menu.
//!
//! The session owns the catalog and the I/O handles, so it can be driven from
//! the terminal or from in-memory buffers in tests.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::catalog::store::{CourseCatalog, Listing, Lookup};
use crate::cli::format::{write_course, write_course_list};

const NO_DATA: &str = "No course data loaded. Please load data first.";
const LOAD_FIRST: &str = "Please load the data first (Option 1).";

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    PrintList,
    PrintCourse,
    Exit,
    Unknown(i64),
}

impl MenuChoice {
    /// Parse a line of user input. Returns `None` for non-numeric input.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<i64>().ok()? {
            1 => Self::Load,
            2 => Self::PrintList,
            3 => Self::PrintCourse,
            9 => Self::Exit,
            other => Self::Unknown(other),
        };
        Some(choice)
    }
}

/// One interactive session over a reader/writer pair
pub struct MenuSession<R, W> {
    catalog: CourseCatalog,
    loaded: bool,
    source: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(source: impl Into<PathBuf>, input: R, output: W) -> Self {
        Self {
            catalog: CourseCatalog::new(),
            loaded: false,
            source: source.into(),
            input,
            output,
        }
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Give back the output handle, e.g. to inspect a captured buffer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Course Planner.")?;

        loop {
            self.write_menu()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(
                    self.output,
                    "Invalid input. Please enter a number from the menu."
                )?;
                continue;
            };

            match choice {
                MenuChoice::Exit => {
                    writeln!(
                        self.output,
                        "Thank you for using the Course Planner. Goodbye."
                    )?;
                    break;
                }
                MenuChoice::Load => self.load()?,
                MenuChoice::PrintList if !self.loaded => writeln!(self.output, "{LOAD_FIRST}")?,
                MenuChoice::PrintList => self.print_list()?,
                MenuChoice::PrintCourse if !self.loaded => writeln!(self.output, "{LOAD_FIRST}")?,
                MenuChoice::PrintCourse => {
                    if !self.print_course()? {
                        break;
                    }
                }
                MenuChoice::Unknown(_) => writeln!(
                    self.output,
                    "Invalid choice. Please select a valid menu option."
                )?,
            }
        }

        self.output.flush()
    }

    fn write_menu(&mut self) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "{}", "=".repeat(26))?;
        writeln!(out, "   Course Planner Menu    ")?;
        writeln!(out, "{}", "=".repeat(26))?;
        writeln!(out, "  1. Load Data Structure")?;
        writeln!(out, "  2. Print Course List")?;
        writeln!(out, "  3. Print Course")?;
        writeln!(out, "  9. Exit")?;
        write!(out, "Please enter your choice: ")?;
        out.flush()
    }

    /// Next line of input without its line ending, or `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn load(&mut self) -> io::Result<()> {
        match self.catalog.load(&self.source) {
            Ok(_) => {
                self.loaded = true;
                writeln!(
                    self.output,
                    "Data loaded successfully from {}.\n",
                    self.source.display()
                )
            }
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn print_list(&mut self) -> io::Result<()> {
        match self.catalog.list_all() {
            Listing::NoData => writeln!(self.output, "{NO_DATA}"),
            Listing::Courses(courses) => {
                writeln!(self.output, "\nHere is a list of courses:\n")?;
                write_course_list(&mut self.output, &courses)?;
                writeln!(self.output)
            }
        }
    }

    /// Returns `false` if input ended while waiting for the course id
    fn print_course(&mut self) -> io::Result<bool> {
        write!(self.output, "Enter the course number (e.g., CSCI400): ")?;
        self.output.flush()?;

        let Some(raw_id) = self.read_line()? else {
            writeln!(self.output)?;
            return Ok(false);
        };

        match self.catalog.get(&raw_id) {
            Lookup::NoData => writeln!(self.output, "{NO_DATA}")?,
            Lookup::NotFound(_) => writeln!(self.output, "Sorry, that course was not found.")?,
            Lookup::Found(course) => {
                writeln!(self.output)?;
                write_course(&mut self.output, course)?;
                writeln!(self.output)?;
            }
        }
        Ok(true)
    }
}

/// Run the interactive menu on stdin/stdout
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn run(catalog_path: &Path) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = MenuSession::new(catalog_path, stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}
