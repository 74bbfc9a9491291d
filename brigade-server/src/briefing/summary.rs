//! Structured summary of one service date
//!
//! Everything a narrator needs, already reduced: the dashboard metrics
//! plus the operational detail (peaks, staffing lines, guests worth a
//! mention, notes). Narrators only format; they never query.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;
use shared::models::{
    Guest, Reservation, ReservationStatus, Schedule, ServiceConfig, ServiceMetrics, StaffPosition,
};

/// Lifetime spend above which a guest is treated as high value
pub const HIGH_VALUE_SPEND: f64 = 1000.0;

/// Number of peak periods reported
pub const PEAK_PERIOD_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub confirmed: i64,
    pub cancelled: i64,
    pub completed: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeakPeriod {
    pub time: String,
    pub covers: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffLine {
    pub staff_name: String,
    pub position: StaffPosition,
    pub shift_start: String,
    pub shift_end: String,
    pub scheduled_hours: f64,
    pub hourly_rate: f64,
}

impl fmt::Display for StaffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}-{} ({}hrs @ ${:.2}/hr)",
            self.staff_name,
            self.position,
            self.shift_start,
            self.shift_end,
            hours(self.scheduled_hours),
            self.hourly_rate
        )
    }
}

/// 两位小数，去掉末尾的 0 (5.0 -> "5", 4.3333 -> "4.33")
fn hours(h: f64) -> String {
    let s = format!("{h:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestHighlight {
    pub name: String,
    pub party_size: i64,
    pub time: String,
    pub vip_status: bool,
    pub total_visits: i64,
    pub total_spend: f64,
    pub preferences: Option<String>,
    /// Notes on the reservation, not the guest profile
    pub notes: Option<String>,
}

impl fmt::Display for GuestHighlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Party of {}) at {} - {} visits, ${:.2} lifetime spend",
            self.name, self.party_size, self.time, self.total_visits, self.total_spend
        )?;
        if self.vip_status {
            f.write_str(" - VIP")?;
        }
        if let Some(p) = &self.preferences {
            write!(f, " - {p}")?;
        }
        if let Some(n) = &self.notes {
            write!(f, " - Note: {n}")?;
        }
        Ok(())
    }
}

/// A notes-bearing reservation or schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteLine {
    /// Guest or staff name
    pub subject: String,
    pub time: String,
    pub note: String,
}

impl fmt::Display for NoteLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.subject, self.time, self.note)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredSummary {
    pub metrics: ServiceMetrics,
    pub status_breakdown: StatusBreakdown,
    pub peak_periods: Vec<PeakPeriod>,
    pub staff_lines: Vec<StaffLine>,
    pub guest_highlights: Vec<GuestHighlight>,
    pub reservation_notes: Vec<NoteLine>,
    pub schedule_notes: Vec<NoteLine>,
    pub peak_time_start: Option<String>,
    pub peak_time_end: Option<String>,
    pub service_notes: Option<String>,
}

impl StructuredSummary {
    pub fn service_date(&self) -> &str {
        &self.metrics.service_date
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Build the summary from one date's records.
///
/// `metrics` must come from the same slices. Peaks and guest highlights
/// ignore cancelled reservations; the metrics keep counting them.
pub fn build_summary(
    metrics: ServiceMetrics,
    reservations: &[Reservation],
    schedules: &[Schedule],
    config: Option<&ServiceConfig>,
    guests: &[Guest],
) -> StructuredSummary {
    let mut status_breakdown = StatusBreakdown::default();
    for r in reservations {
        match r.status {
            ReservationStatus::Confirmed => status_breakdown.confirmed += 1,
            ReservationStatus::Cancelled => status_breakdown.cancelled += 1,
            ReservationStatus::Completed => status_breakdown.completed += 1,
        }
    }

    let active: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.status != ReservationStatus::Cancelled)
        .collect();

    StructuredSummary {
        metrics,
        status_breakdown,
        peak_periods: peak_periods(&active),
        staff_lines: schedules
            .iter()
            .map(|s| StaffLine {
                staff_name: s.staff_name.clone(),
                position: s.position,
                shift_start: s.shift_start.clone(),
                shift_end: s.shift_end.clone(),
                scheduled_hours: s.scheduled_hours,
                hourly_rate: s.hourly_rate,
            })
            .collect(),
        guest_highlights: guest_highlights(&active, guests),
        reservation_notes: active
            .iter()
            .filter_map(|r| {
                non_blank(&r.notes).map(|note| NoteLine {
                    subject: r.guest_name.clone(),
                    time: r.time.clone(),
                    note,
                })
            })
            .collect(),
        schedule_notes: schedules
            .iter()
            .filter_map(|s| {
                non_blank(&s.notes).map(|note| NoteLine {
                    subject: s.staff_name.clone(),
                    time: s.shift_start.clone(),
                    note,
                })
            })
            .collect(),
        peak_time_start: config.and_then(|c| c.peak_time_start.clone()),
        peak_time_end: config.and_then(|c| c.peak_time_end.clone()),
        service_notes: config.and_then(|c| non_blank(&c.notes)),
    }
}

/// Covers per arrival time, busiest first, ties to the earlier time
fn peak_periods(active: &[&Reservation]) -> Vec<PeakPeriod> {
    let mut by_time: BTreeMap<&str, i64> = BTreeMap::new();
    for r in active {
        *by_time.entry(r.time.as_str()).or_default() += r.party_size;
    }
    let mut periods: Vec<PeakPeriod> = by_time
        .into_iter()
        .map(|(time, covers)| PeakPeriod {
            time: time.to_string(),
            covers,
        })
        .collect();
    // stable sort keeps time order within equal covers
    periods.sort_by(|a, b| b.covers.cmp(&a.covers));
    periods.truncate(PEAK_PERIOD_LIMIT);
    periods
}

fn guest_highlights(active: &[&Reservation], guests: &[Guest]) -> Vec<GuestHighlight> {
    let by_id: HashMap<i64, &Guest> = guests.iter().map(|g| (g.id, g)).collect();
    active
        .iter()
        .filter_map(|r| {
            let g = by_id.get(&r.guest_id)?;
            if !(g.vip_status || g.total_spend > HIGH_VALUE_SPEND) {
                return None;
            }
            Some(GuestHighlight {
                name: g.name.clone(),
                party_size: r.party_size,
                time: r.time.clone(),
                vip_status: g.vip_status,
                total_visits: g.total_visits,
                total_spend: g.total_spend,
                preferences: non_blank(&g.preferences),
                notes: non_blank(&r.notes),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefing::metrics::aggregate;
    use crate::briefing::testing::{config, guest, reservation, schedule};

    const DATE: &str = "2025-06-01";

    fn summarize(
        reservations: &[Reservation],
        schedules: &[Schedule],
        cfg: Option<&ServiceConfig>,
        guests: &[Guest],
    ) -> StructuredSummary {
        let metrics = aggregate(DATE, reservations, schedules, cfg);
        build_summary(metrics, reservations, schedules, cfg, guests)
    }

    #[test]
    fn test_status_breakdown() {
        let reservations = vec![
            reservation(1, 1, DATE, "18:00", 2, ReservationStatus::Confirmed),
            reservation(2, 1, DATE, "18:30", 2, ReservationStatus::Confirmed),
            reservation(3, 1, DATE, "19:00", 4, ReservationStatus::Cancelled),
            reservation(4, 1, DATE, "20:00", 3, ReservationStatus::Completed),
        ];
        let s = summarize(&reservations, &[], None, &[]);
        assert_eq!(
            s.status_breakdown,
            StatusBreakdown {
                confirmed: 2,
                cancelled: 1,
                completed: 1
            }
        );
        // metrics still count the cancelled booking
        assert_eq!(s.metrics.total_covers, 11);
    }

    #[test]
    fn test_peak_periods_top_three_skip_cancelled() {
        let reservations = vec![
            reservation(1, 1, DATE, "18:00", 2, ReservationStatus::Confirmed),
            reservation(2, 1, DATE, "19:00", 4, ReservationStatus::Confirmed),
            reservation(3, 1, DATE, "19:00", 2, ReservationStatus::Confirmed),
            reservation(4, 1, DATE, "20:00", 4, ReservationStatus::Confirmed),
            reservation(5, 1, DATE, "20:30", 4, ReservationStatus::Confirmed),
            reservation(6, 1, DATE, "21:00", 20, ReservationStatus::Cancelled),
        ];
        let s = summarize(&reservations, &[], None, &[]);
        let peaks: Vec<(&str, i64)> = s
            .peak_periods
            .iter()
            .map(|p| (p.time.as_str(), p.covers))
            .collect();
        assert_eq!(peaks, vec![("19:00", 6), ("20:00", 4), ("20:30", 4)]);
    }

    #[test]
    fn test_guest_highlights_vip_or_high_spend() {
        let guests = vec![
            guest(1, "Ada", true, 0.0),
            guest(2, "Alan", false, 1500.0),
            guest(3, "Grace", false, 1000.0),
            guest(4, "Linus", true, 0.0),
        ];
        let mut with_note = reservation(1, 1, DATE, "19:00", 2, ReservationStatus::Confirmed);
        with_note.notes = Some("Anniversary".into());
        let reservations = vec![
            with_note,
            reservation(2, 2, DATE, "19:30", 4, ReservationStatus::Completed),
            reservation(3, 3, DATE, "20:00", 2, ReservationStatus::Confirmed),
            reservation(4, 4, DATE, "20:30", 2, ReservationStatus::Cancelled),
            reservation(5, 99, DATE, "21:00", 2, ReservationStatus::Confirmed),
        ];
        let s = summarize(&reservations, &[], None, &guests);
        let names: Vec<&str> = s.guest_highlights.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Alan"]);
        assert_eq!(s.guest_highlights[0].notes.as_deref(), Some("Anniversary"));
        assert_eq!(
            s.guest_highlights[0].to_string(),
            "Ada (Party of 2) at 19:00 - 0 visits, $0.00 lifetime spend - VIP - Note: Anniversary"
        );
    }

    #[test]
    fn test_notes_and_config_fields() {
        let mut r = reservation(1, 1, DATE, "19:00", 2, ReservationStatus::Confirmed);
        r.notes = Some("  Nut allergy ".into());
        let mut blank = reservation(2, 1, DATE, "19:30", 2, ReservationStatus::Confirmed);
        blank.notes = Some("   ".into());
        let mut sched = schedule(1, "Rosa", DATE, "17:00", "22:00", 20.0);
        sched.notes = Some("Covering bar until 19:00".into());
        let mut cfg = config(DATE, 2, 5);
        cfg.peak_time_start = Some("19:00".into());
        cfg.peak_time_end = Some("21:00".into());
        cfg.notes = Some("Patio closed".into());

        let s = summarize(&[r, blank], &[sched], Some(&cfg), &[]);
        assert_eq!(s.reservation_notes.len(), 1);
        assert_eq!(s.reservation_notes[0].note, "Nut allergy");
        assert_eq!(
            s.schedule_notes[0].to_string(),
            "Rosa (17:00): Covering bar until 19:00"
        );
        assert_eq!(s.peak_time_start.as_deref(), Some("19:00"));
        assert_eq!(s.service_notes.as_deref(), Some("Patio closed"));
        assert_eq!(
            s.staff_lines[0].to_string(),
            "Rosa (server): 17:00-22:00 (5hrs @ $20.00/hr)"
        );
    }

    #[test]
    fn test_staff_line_hours_rounded() {
        let odd = schedule(1, "Rosa", DATE, "10:15", "14:35", 18.5);
        let half = schedule(2, "Ivo", DATE, "16:00", "22:30", 20.0);
        let s = summarize(&[], &[odd, half], None, &[]);
        let lines: Vec<String> = s.staff_lines.iter().map(|l| l.to_string()).collect();
        assert!(lines.contains(&"Rosa (server): 10:15-14:35 (4.33hrs @ $18.50/hr)".to_string()));
        assert!(lines.contains(&"Ivo (server): 16:00-22:30 (6.5hrs @ $20.00/hr)".to_string()));
    }
}
