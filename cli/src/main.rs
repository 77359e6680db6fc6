use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lingo::error::AppResult;
use lingo::model::Catalog;
use lingo::model::entity::Course;
use lingo::progress::{CourseQuery, completion_percentage, filter_courses, level_for};

#[derive(Parser, Debug)]
#[command(about = "Query the course catalog and learner progress from the terminal", long_about = None)]
pub struct Cli {
    /// Fixture file to read instead of the embedded seed
    #[arg(long, global = true)]
    pub fixtures: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog
    Courses {
        /// Text searched in titles and descriptions
        #[arg(long)]
        search: Option<String>,
        /// Difficulty tier or `all`
        #[arg(long)]
        level: Option<String>,
        /// Category or `all`
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one course and the learner's completion
    Course { id: String },

    /// Show the tier for an XP total
    Level { xp: u32 },

    /// Report fixture integrity problems
    Check,
}

fn print_course_line(course: &Course) {
    println!(
        "{:<10} {} {:<40} {:<12} {:<13} ★{:.1}",
        course.id(),
        course.category().icon(),
        course.title(),
        course.level(),
        course.category(),
        course.rating(),
    );
}

fn execute(args: Cli) -> AppResult<ExitCode> {
    let catalog = match &args.fixtures {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::seed()?,
    };

    match args.command {
        Commands::Courses { search, level, category } => {
            let query = CourseQuery::parse(search.as_deref(), level.as_deref(), category.as_deref());
            let found = filter_courses(catalog.courses(), &query);

            println!("Showing {} of {} courses", found.len(), catalog.courses().len());
            for course in found {
                print_course_line(course);
            }
        }

        Commands::Course { id } => {
            let Some(course) = catalog.course(&id) else {
                eprintln!("Course `{id}` not found.");
                return Ok(ExitCode::FAILURE);
            };

            print_course_line(course);
            println!("{}", course.description());
            println!("Instructor: {}, {}", course.instructor(), course.duration());

            let user = catalog.user();
            for lesson in course.lessons() {
                let mark = if user.has_completed_lesson(lesson.id()) { "✓" } else { " " };
                println!(
                    "  [{}] {:>2}. {} ({} min, {} XP)",
                    mark,
                    lesson.order(),
                    lesson.title(),
                    lesson.duration(),
                    lesson.xp_reward()
                );
            }

            match completion_percentage(user.completed_lessons(), course.lessons()) {
                Some(pct) => println!("{} has completed {:.0}%", user.name(), pct),
                None => println!("This course has no lessons yet."),
            }
        }

        Commands::Level { xp } => {
            let info = level_for(xp);
            println!(
                "{} XP: {} ({:.1}% of {}..{}), {} XP to go",
                xp,
                info.tier,
                info.progress_percent(),
                info.xp_floor,
                info.xp_ceiling,
                info.xp_to_next(xp),
            );
        }

        Commands::Check => {
            let warnings = catalog.integrity_warnings();
            for warning in &warnings {
                println!("{warning}");
            }

            if !warnings.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
            println!("Fixtures are consistent.");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    lingo::setup_trace();
    let args = Cli::parse();

    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            lingo::error::log_error(&e);
            ExitCode::FAILURE
        }
    }
}
