//! Recurrence schedules offered to users.
//!
//! Meeting cadences are picked from a fixed set of human-readable labels,
//! each mapping to one Google Calendar RRULE line. The labels are what users
//! type and what planning documents contain, so they are matched exactly.

use serde::{Deserialize, Serialize};

/// A supported recurrence schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// "Diario": every weekday
    Weekdays,
    /// "Lunes, Miércoles y Viernes"
    MonWedFri,
    /// "Martes y Jueves"
    TueThu,
    /// "Semanal (Viernes)": once a week on Friday
    WeeklyFriday,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Weekdays,
        Frequency::MonWedFri,
        Frequency::TueThu,
        Frequency::WeeklyFriday,
    ];

    /// Look up a schedule by its label. Matching is exact, accents included.
    pub fn from_label(label: &str) -> Option<Frequency> {
        Frequency::ALL.iter().copied().find(|f| f.label() == label)
    }

    /// The user-facing label for this schedule.
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Weekdays => "Diario",
            Frequency::MonWedFri => "Lunes, Miércoles y Viernes",
            Frequency::TueThu => "Martes y Jueves",
            Frequency::WeeklyFriday => "Semanal (Viernes)",
        }
    }

    /// The RRULE line sent to the API for this schedule.
    pub fn rrule(&self) -> &'static str {
        match self {
            Frequency::Weekdays => "RRULE:FREQ=DAILY;BYDAY=MO,TU,WE,TH,FR",
            Frequency::MonWedFri => "RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR",
            Frequency::TueThu => "RRULE:FREQ=WEEKLY;BYDAY=TU,TH",
            Frequency::WeeklyFriday => "RRULE:FREQ=WEEKLY;BYDAY=FR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rrule::RRuleSet;

    // --- from_label ---

    #[test]
    fn label_lookup_exact_match() {
        assert_eq!(Frequency::from_label("Diario"), Some(Frequency::Weekdays));
        assert_eq!(
            Frequency::from_label("Lunes, Miércoles y Viernes"),
            Some(Frequency::MonWedFri)
        );
        assert_eq!(
            Frequency::from_label("Martes y Jueves"),
            Some(Frequency::TueThu)
        );
        assert_eq!(
            Frequency::from_label("Semanal (Viernes)"),
            Some(Frequency::WeeklyFriday)
        );
    }

    #[test]
    fn label_lookup_rejects_unknown() {
        assert_eq!(Frequency::from_label("Diario (L-V)"), None);
        assert_eq!(Frequency::from_label("diario"), None);
        assert_eq!(Frequency::from_label(""), None);
    }

    #[test]
    fn label_lookup_requires_accents() {
        // "Miercoles" without the accent is a different string
        assert_eq!(Frequency::from_label("Lunes, Miercoles y Viernes"), None);
    }

    // --- rrule ---

    #[test]
    fn rrule_table_verbatim() {
        assert_eq!(
            Frequency::Weekdays.rrule(),
            "RRULE:FREQ=DAILY;BYDAY=MO,TU,WE,TH,FR"
        );
        assert_eq!(
            Frequency::MonWedFri.rrule(),
            "RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR"
        );
        assert_eq!(Frequency::TueThu.rrule(), "RRULE:FREQ=WEEKLY;BYDAY=TU,TH");
        assert_eq!(
            Frequency::WeeklyFriday.rrule(),
            "RRULE:FREQ=WEEKLY;BYDAY=FR"
        );
    }

    #[test]
    fn rrule_lines_parse() {
        for frequency in Frequency::ALL {
            let input = format!("DTSTART:20260105T090000Z\n{}", frequency.rrule());
            let parsed: Result<RRuleSet, _> = input.parse();
            assert!(
                parsed.is_ok(),
                "RRULE for {:?} did not parse: {}",
                frequency,
                frequency.rrule()
            );
        }
    }

    #[test]
    fn labels_round_trip() {
        for frequency in Frequency::ALL {
            assert_eq!(Frequency::from_label(frequency.label()), Some(frequency));
        }
    }
}
