//! StudyPlan Planner — study schedules, quiz selection, schedule export.

pub mod export;
pub mod quiz;
pub mod schedule;

pub use export::{download_filename, schedule_to_csv};
pub use quiz::select_quiz;
pub use schedule::{generate_study_plan, parse_hours, MAX_DAYS};
