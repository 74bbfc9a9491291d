//! Deterministic plain-text briefing
//!
//! Same summary in, same text out. Used when no text-generation service
//! is configured.

use std::fmt::Write;

use async_trait::async_trait;

use super::error::BriefingError;
use super::narrator::NarrativeGenerator;
use super::summary::StructuredSummary;

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    pub fn new() -> Self {
        Self
    }

    /// Render the full briefing
    pub fn render(summary: &StructuredSummary) -> String {
        let mut out = String::new();
        // fmt::Write into a String cannot fail
        let _ = write_briefing(&mut out, summary);
        out
    }
}

fn write_briefing(out: &mut String, s: &StructuredSummary) -> std::fmt::Result {
    let m = &s.metrics;

    writeln!(out, "Tonight's Service Intelligence - {}", s.service_date())?;
    writeln!(out)?;

    writeln!(out, "HEADLINE")?;
    if m.reservation_count == 0 {
        writeln!(
            out,
            "No reservations on the book. Expecting {}-{} walk-in guests with {} team member(s) scheduled.",
            m.expected_guest_range.min, m.expected_guest_range.max, m.staff_scheduled_count
        )?;
    } else {
        writeln!(
            out,
            "{} covers booked across {} reservation(s). Expecting {}-{} guests in total with {} team member(s) scheduled.",
            m.total_covers,
            m.reservation_count,
            m.expected_guest_range.min,
            m.expected_guest_range.max,
            m.staff_scheduled_count
        )?;
    }
    writeln!(out)?;

    writeln!(out, "WHAT TONIGHT LOOKS LIKE")?;
    writeln!(
        out,
        "Booked covers: {} ({} confirmed, {} completed, {} cancelled reservations)",
        m.total_covers,
        s.status_breakdown.confirmed,
        s.status_breakdown.completed,
        s.status_breakdown.cancelled
    )?;
    writeln!(out, "Expected walk-ins: {}-{}", m.walk_in_min, m.walk_in_max)?;
    writeln!(
        out,
        "Expected guest range: {}-{}",
        m.expected_guest_range.min, m.expected_guest_range.max
    )?;
    if let (Some(start), Some(end)) = (&s.peak_time_start, &s.peak_time_end) {
        writeln!(out, "Planned peak window: {start}-{end}")?;
    }
    if s.peak_periods.is_empty() {
        writeln!(out, "Peak periods: none identified")?;
    } else {
        writeln!(out, "Peak periods:")?;
        for p in &s.peak_periods {
            writeln!(out, "- {}: {} covers", p.time, p.covers)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "STAFFING")?;
    if s.staff_lines.is_empty() {
        writeln!(out, "No staff scheduled.")?;
    } else {
        writeln!(
            out,
            "{} scheduled, {} total hours, estimated labor cost ${:.2}",
            m.staff_scheduled_count, m.total_hours, m.labor_cost
        )?;
        writeln!(
            out,
            "Up to {:.1} expected guests per team member.",
            m.expected_guest_range.max as f64 / m.staff_scheduled_count as f64
        )?;
        for line in &s.staff_lines {
            writeln!(out, "- {line}")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "GUEST HIGHLIGHTS")?;
    if s.guest_highlights.is_empty() {
        writeln!(out, "No VIP or high-value guests on the book.")?;
    } else {
        for g in &s.guest_highlights {
            writeln!(out, "- {g}")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "NOTES")?;
    let has_notes = s.service_notes.is_some()
        || !s.reservation_notes.is_empty()
        || !s.schedule_notes.is_empty();
    if !has_notes {
        writeln!(out, "No notes for this service.")?;
    }
    if let Some(notes) = &s.service_notes {
        writeln!(out, "Service: {notes}")?;
    }
    for n in &s.reservation_notes {
        writeln!(out, "- Reservation {n}")?;
    }
    for n in &s.schedule_notes {
        writeln!(out, "- Shift {n}")?;
    }

    Ok(())
}

#[async_trait]
impl NarrativeGenerator for TemplateNarrator {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn generate(&self, summary: &StructuredSummary) -> Result<String, BriefingError> {
        Ok(Self::render(summary))
    }
}
