// Composer - composite responses built from selector output

use super::selector::{by_category, by_time_of_day, pick_one, refs};
use crate::domain::{
    BedtimeRoutine, Category, QuoteRecord, QuoteStore, ReminderType, RoutineStep, TimePeriod,
};
use crate::port::Picker;
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Quote of the day, optionally bundled with a sleep hygiene tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWisdom {
    pub period: TimePeriod,
    pub quote: QuoteRecord,
    pub tip: Option<QuoteRecord>,
}

/// Quote for `period` plus a sleep_hygiene tip when `include_tip` is set
pub fn daily_wisdom(
    store: &QuoteStore,
    period: TimePeriod,
    include_tip: bool,
    picker: &dyn Picker,
) -> DailyWisdom {
    let all = refs(store.all());

    let quote = pick_one(&by_time_of_day(&all, period), store.all(), picker).clone();

    let tip = include_tip.then(|| {
        pick_one(&by_category(&all, Category::SleepHygiene), store.all(), picker).clone()
    });

    DailyWisdom { period, quote, tip }
}

struct RoutineTemplate {
    steps: &'static [(u32, &'static str)],
    closing_quote: &'static str,
    closing_author: &'static str,
}

// Offsets are minutes before bedtime, strictly decreasing.
fn template(reminder_type: ReminderType) -> RoutineTemplate {
    match reminder_type {
        ReminderType::Preparation => RoutineTemplate {
            steps: &[
                (60, "Turn off electronic devices"),
                (50, "Lay out your clothes for tomorrow"),
                (40, "Set the bedroom temperature to 18-20°C"),
                (30, "Take a warm bath or shower"),
            ],
            closing_quote: "Proper preparation is the first step towards restorative sleep.",
            closing_author: "Sleep Coach Expert",
        },
        ReminderType::Relaxation => RoutineTemplate {
            steps: &[
                (30, "4-7-8 breathing: inhale 4, hold 7, exhale 8"),
                (25, "Read a few pages of a relaxing book"),
                (15, "Play soft music or nature sounds"),
                (10, "Meditate or practice mindfulness"),
            ],
            closing_quote: "Relaxation is the key that opens the door to deep sleep.",
            closing_author: "Mindfulness Master",
        },
        ReminderType::Environment => RoutineTemplate {
            steps: &[
                (45, "Darken the room with blackout curtains"),
                (35, "Switch to silence or white noise"),
                (25, "Cool the room to 18-20°C"),
                (15, "Check that your mattress and pillow are comfortable"),
            ],
            closing_quote: "Your bedroom is the sacred temple of rest.",
            closing_author: "Environment Expert",
        },
        ReminderType::Mindfulness => RoutineTemplate {
            steps: &[
                (20, "Reflect on 3 positive things from today"),
                (15, "Let go of the day's worries"),
                (10, "Focus on the present moment"),
                (5, "Practice gratitude"),
            ],
            closing_quote: "A calm mind finds its way to restorative sleep.",
            closing_author: "Mindfulness Teacher",
        },
    }
}

/// Ordered routine ending at `bedtime`. Step times wrap past midnight.
pub fn bedtime_routine(bedtime: NaiveTime, reminder_type: ReminderType) -> BedtimeRoutine {
    let template = template(reminder_type);

    let steps = template
        .steps
        .iter()
        .map(|&(minutes_before, action)| {
            let at = bedtime - Duration::minutes(i64::from(minutes_before));
            RoutineStep {
                minutes_before,
                at: at.format("%H:%M").to_string(),
                action: action.to_string(),
            }
        })
        .collect();

    BedtimeRoutine {
        bedtime: bedtime.format("%H:%M").to_string(),
        reminder_type,
        steps,
        closing_quote: template.closing_quote.to_string(),
        closing_author: template.closing_author.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::{RoundRobinPicker, SeededPicker};
    use crate::domain::TimeOfDay;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_daily_wisdom_without_tip() {
        let store = QuoteStore::builtin().unwrap();
        let picker = SeededPicker::new(3);

        for period in TimePeriod::ALL {
            let wisdom = daily_wisdom(&store, period, false, &picker);
            assert!(wisdom.tip.is_none());
            assert!(
                wisdom.quote.time_of_day == TimeOfDay::from(period)
                    || wisdom.quote.time_of_day == TimeOfDay::Any
            );
        }
    }

    #[test]
    fn test_daily_wisdom_with_tip_is_sleep_hygiene() {
        let store = QuoteStore::builtin().unwrap();
        let picker = RoundRobinPicker::new();

        for _ in 0..20 {
            let wisdom = daily_wisdom(&store, TimePeriod::Night, true, &picker);
            let tip = wisdom.tip.expect("tip requested");
            assert_eq!(tip.category, Category::SleepHygiene);
        }
    }

    #[test]
    fn test_bedtime_routine_offsets_from_bedtime() {
        let routine = bedtime_routine(time(22, 0), ReminderType::Preparation);

        assert_eq!(routine.bedtime, "22:00");
        assert_eq!(routine.steps.len(), 4);
        assert_eq!(routine.steps[0].at, "21:00");
        assert_eq!(routine.steps[0].minutes_before, 60);
        assert_eq!(
            routine.steps[0].render(),
            "21:00 (60 min before): Turn off electronic devices"
        );
        assert_eq!(routine.steps[3].at, "21:30");
    }

    #[test]
    fn test_bedtime_routine_wraps_past_midnight() {
        let routine = bedtime_routine(time(0, 30), ReminderType::Preparation);
        assert_eq!(routine.steps[0].at, "23:30");
        assert_eq!(routine.steps[3].at, "00:00");
    }

    #[test]
    fn test_every_template_is_ordered() {
        for reminder_type in ReminderType::ALL {
            let routine = bedtime_routine(time(23, 0), reminder_type);
            assert_eq!(routine.reminder_type, reminder_type);
            assert!(!routine.steps.is_empty());
            assert!(!routine.closing_quote.is_empty());
            assert!(routine
                .steps
                .windows(2)
                .all(|w| w[0].minutes_before > w[1].minutes_before));
        }
    }

    #[test]
    fn test_templates_differ_by_type() {
        let a = bedtime_routine(time(22, 0), ReminderType::Relaxation);
        let b = bedtime_routine(time(22, 0), ReminderType::Environment);
        assert_ne!(a.steps, b.steps);
    }
}
