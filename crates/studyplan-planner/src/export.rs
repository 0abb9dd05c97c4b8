//! CSV export of a study schedule.

use chrono::{DateTime, TimeZone};
use studyplan_core::{Error, Result, ScheduleSession};

/// Render sessions as CSV with a `day,hours,focus` header.
pub fn schedule_to_csv(sessions: &[ScheduleSession]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if sessions.is_empty() {
        writer.write_record(["day", "hours", "focus"])?;
    }
    for session in sessions {
        writer.serialize(session)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// `study_schedule_{subject}_{YYYYMMDDHHMM}.csv`
pub fn download_filename<Tz: TimeZone>(subject: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("study_schedule_{}_{}.csv", subject, now.format("%Y%m%d%H%M"))
}
