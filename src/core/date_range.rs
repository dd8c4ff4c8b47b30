use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::core::{AppError, Result};

/// Inclusive bounds on a timestamp; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// A range with no bounds, matching every timestamp
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Result<Self> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(AppError::validation(format!(
                    "start ({}) must be before or equal to end ({})",
                    start.to_rfc3339(),
                    end.to_rfc3339()
                )));
            }
        }

        Ok(Self { start, end })
    }

    /// Parse query-string bounds.
    ///
    /// Each bound accepts either an RFC 3339 timestamp or a `YYYY-MM-DD`
    /// date. A date-only `start` begins at midnight UTC and a date-only `end`
    /// runs to the last millisecond of that day. Blank values are ignored.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start = non_blank(start)
            .map(|raw| parse_bound(raw, "start", Bound::Start))
            .transpose()?;
        let end = non_blank(end)
            .map(|raw| parse_bound(raw, "end", Bound::End))
            .transpose()?;

        Self::new(start, end)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| *at >= start) && self.end.map_or(true, |end| *at <= end)
    }
}

#[derive(Clone, Copy)]
enum Bound {
    Start,
    End,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bound(raw: &str, name: &str, bound: Bound) -> Result<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!(
            "Invalid {} date: '{}'. Expected YYYY-MM-DD or RFC 3339",
            name, raw
        ))
    })?;

    let midnight = date.and_time(NaiveTime::MIN);
    let at = match bound {
        Bound::Start => midnight,
        Bound::End => midnight + Duration::days(1) - Duration::milliseconds(1),
    };

    Ok(at.and_utc())
}
