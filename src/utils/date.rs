use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Store key for a date, ISO "YYYY-MM-DD".
pub fn to_key(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Monday of the week containing `d`.
pub fn week_start_of(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

/// The 7-day window [start, start+6]. Start does not have to be a Monday.
pub fn week_dates(start: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|i| start + Duration::days(i)).collect()
}

pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {}", p))
}

pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let start_date = *s.first().ok_or_else(|| format!("Invalid period: {}", start))?;
    let end_date = *e.last().ok_or_else(|| format!("Invalid period: {}", end))?;

    let mut out = Vec::new();
    let mut d = start_date;

    while d <= end_date {
        out.push(d);
        d = d.succ_opt().ok_or("Date out of range")?;
    }

    Ok(out)
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return out,
    };

    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();
    let mut d = match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(d) => d,
        None => return v,
    };

    while d.year() == year {
        v.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    v
}

/// Human weekday name for table output.
pub fn weekday_name(d: &NaiveDate) -> &'static str {
    match d.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}
