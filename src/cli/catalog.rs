use std::io::{self, Write};
use std::path::Path;

use anyhow::bail;
use clap::Args;

use crate::catalog::store::{CourseCatalog, Listing, Lookup};
use crate::cli::format::{write_course, write_course_list};
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct ShowArgs {
    /// Course ID (case and surrounding whitespace are ignored)
    #[arg(required = true)]
    pub id: String,
}

fn load(path: &Path, verbose: bool) -> anyhow::Result<CourseCatalog> {
    let mut catalog = CourseCatalog::new();
    let summary = catalog.load(path)?;

    if verbose {
        eprintln!(
            "Loaded {} courses from {} ({} lines skipped, {} overwritten)",
            summary.records,
            path.display(),
            summary.skipped,
            summary.overwritten
        );
    }

    Ok(catalog)
}

pub fn run_list(catalog_path: &Path, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load(catalog_path, verbose)?;

    let Listing::Courses(courses) = catalog.list_all() else {
        bail!("No course data loaded from {}", catalog_path.display());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => {
            writeln!(out, "Course Catalog ({} courses)\n", courses.len())?;
            write_course_list(&mut out, &courses)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&courses)?)?;
        }
    }

    Ok(())
}

pub fn run_show(
    args: ShowArgs,
    catalog_path: &Path,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load(catalog_path, verbose)?;

    let course = match catalog.get(&args.id) {
        Lookup::Found(course) => course,
        Lookup::NotFound(id) => bail!("Course '{}' not found", id),
        Lookup::NoData => bail!("No course data loaded from {}", catalog_path.display()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => write_course(&mut out, course)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(course)?)?,
    }

    Ok(())
}
