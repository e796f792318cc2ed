// Built-in quote catalog
//
// Edit this list to change the shipped quotes. The store is built from it once
// at startup and never changes while the process runs.

use super::quote::{Category, Mood, QuoteRecord, TimeOfDay};

pub fn builtin_records() -> Vec<QuoteRecord> {
    use Category::*;
    use Mood::*;

    vec![
        // Night
        QuoteRecord::new(
            1,
            "Every night is a chance for your mind and body to regenerate completely.",
            Some("Dr. Sleep Coach"),
            SleepHygiene,
            TimeOfDay::Night,
            Peaceful,
        ),
        QuoteRecord::new(
            2,
            "Sleep is the best meditation there is. Surrender to it with gratitude.",
            Some("Dalai Lama"),
            Mindfulness,
            TimeOfDay::Night,
            Calm,
        ),
        QuoteRecord::new(
            3,
            "Your brain works all night organizing the memories of the day. Give it the rest it deserves.",
            Some("Neuroscience Today"),
            Science,
            TimeOfDay::Night,
            Educational,
        ),
        QuoteRecord::new(
            4,
            "Disconnect your devices, connect with your dreams.",
            Some("Sleep Expert"),
            SleepHygiene,
            TimeOfDay::Evening,
            Motivational,
        ),
        QuoteRecord::new(
            5,
            "Sleep is when your body repairs, your mind processes and your soul rests.",
            Some("Wellness Guru"),
            Holistic,
            TimeOfDay::Night,
            Peaceful,
        ),
        // Morning
        QuoteRecord::new(
            6,
            "Every sunrise is a new blank page. How will you write it today?",
            Some("Morning Wisdom"),
            Motivation,
            TimeOfDay::Morning,
            Motivational,
        ),
        QuoteRecord::new(
            7,
            "A good day starts with a night of restorative sleep. Your body thanks you for it.",
            Some("Health Coach"),
            Wellness,
            TimeOfDay::Morning,
            Calm,
        ),
        QuoteRecord::new(
            8,
            "The sun rises to remind you that every day is a new chance to shine.",
            Some("Sun Wisdom"),
            Inspiration,
            TimeOfDay::Morning,
            Motivational,
        ),
        // Evening
        QuoteRecord::new(
            9,
            "As the day comes to an end, let your mind find peace too.",
            Some("Evening Reflection"),
            Mindfulness,
            TimeOfDay::Evening,
            Reflective,
        ),
        QuoteRecord::new(
            10,
            "A dark, cool and quiet room is the sacred temple of restorative sleep.",
            Some("Sleep Environment Expert"),
            SleepHygiene,
            TimeOfDay::Evening,
            Educational,
        ),
        // Sleep hygiene tips
        QuoteRecord::new(
            11,
            "Caffeine stays in your system for up to 8 hours. Plan your last cup wisely.",
            Some("Sleep Science"),
            SleepHygiene,
            TimeOfDay::Evening,
            Educational,
        ),
        QuoteRecord::new(
            12,
            "Your bed is only for sleeping and relaxing. Keep it a sanctuary of rest.",
            Some("Sleep Hygiene Pro"),
            SleepHygiene,
            TimeOfDay::Evening,
            Motivational,
        ),
        QuoteRecord::new(
            13,
            "Breathe in for 4 seconds, hold for 7, breathe out for 8. The 4-7-8 technique for sleep.",
            Some("Dr. Andrew Weil"),
            Techniques,
            TimeOfDay::Night,
            Calm,
        ),
        QuoteRecord::new(
            14,
            "Blue light from screens confuses your brain. Give it an hour off before bed.",
            Some("Circadian Rhythm Expert"),
            SleepHygiene,
            TimeOfDay::Evening,
            Educational,
        ),
        QuoteRecord::new(
            15,
            "Sleep is not lost time, it is an investment in tomorrow's health, productivity and happiness.",
            Some("Productivity Coach"),
            Motivation,
            TimeOfDay::Night,
            Motivational,
        ),
        // Any time
        QuoteRecord::new(
            16,
            "Go to bed and wake up at the same time every day, weekends included. Consistency anchors your body clock.",
            Some("Sleep Science"),
            SleepHygiene,
            TimeOfDay::Any,
            Educational,
        ),
        QuoteRecord::new(
            17,
            "Relax your body one muscle group at a time, from your toes up to your forehead.",
            Some("Progressive Relaxation Guide"),
            Techniques,
            TimeOfDay::Any,
            Calm,
        ),
        QuoteRecord::new(
            18,
            "Rest is not a reward for finishing the day. It is part of the work.",
            None,
            Inspiration,
            TimeOfDay::Any,
            Reflective,
        ),
    ]
}
