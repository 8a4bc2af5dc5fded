//! Per-day closest-to-target-hour selection.
//!
//! Timestamps are converted with full IANA rules (chrono-tz), so grouping
//! stays correct across daylight-saving transitions. A fixed UTC offset
//! would silently pick the wrong sample twice a year.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use daycast_domain::{DailyForecastEntry, ForecastPoint};
use std::collections::BTreeMap;

struct Candidate {
    distance: f64,
    timestamp: DateTime<Utc>,
    local_time: String,
    temperature_c: f64,
}

/// Map a raw timeseries into at most one entry per local calendar date.
///
/// For each date the sample minimizing `|local hour − target_hour|`
/// (fractional hours, so 14:30 against target 14 scores 0.5) wins; exact
/// ties go to the earliest timestamp. Samples farther than
/// `tolerance_hours` from the target never qualify, and dates with no
/// qualifying sample are omitted rather than zero-filled. Output is
/// ordered by ascending date. Total over well-formed input; empty in,
/// empty out.
pub fn aggregate(
    points: &[ForecastPoint],
    tz: Tz,
    target_hour: u32,
    tolerance_hours: u32,
) -> Vec<DailyForecastEntry> {
    let target = f64::from(target_hour);
    let tolerance = f64::from(tolerance_hours);

    let mut best_per_day: BTreeMap<NaiveDate, Candidate> = BTreeMap::new();

    for point in points {
        let local = point.timestamp.with_timezone(&tz);
        let hour = f64::from(local.hour()) + f64::from(local.minute()) / 60.0;
        let distance = (hour - target).abs();

        if distance > tolerance {
            continue;
        }

        let candidate = Candidate {
            distance,
            timestamp: point.timestamp,
            local_time: local.format("%H:%M").to_string(),
            temperature_c: point.temperature_c,
        };

        best_per_day
            .entry(local.date_naive())
            .and_modify(|best| {
                if candidate.distance < best.distance
                    || (candidate.distance == best.distance
                        && candidate.timestamp < best.timestamp)
                {
                    *best = Candidate {
                        distance: candidate.distance,
                        timestamp: candidate.timestamp,
                        local_time: candidate.local_time.clone(),
                        temperature_c: candidate.temperature_c,
                    };
                }
            })
            .or_insert(candidate);
    }

    best_per_day
        .into_iter()
        .map(|(date, best)| DailyForecastEntry {
            date,
            time: best.local_time,
            temperature_c: best.temperature_c,
        })
        .collect()
}
