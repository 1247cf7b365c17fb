use super::TimeOfDay;

const MORNING: [&str; 10] = [
    "Seize the day, your masterpiece awaits.",
    "Create your best today!",
    "The world awaits your brilliance.",
    "Today's pages are blank. Fill them well.",
    "Make today extraordinary!",
    "Dawn's here - so is your potential.",
    "Productivity is one sunrise away.",
    "Life's a canvas, paint your day.",
    "Be the energy you want to attract.",
    "Embrace the hustle, savor the outcome.",
];

const AFTERNOON: [&str; 10] = [
    "Slow and steady wins the day. Keep going!",
    "Step by step, you're moving mountains.",
    "Remember: The sun also rises slowly, yet it brightens the world.",
    "Small progress is still progress. You're doing great!",
    "Remember the tortoise - slow, steady, unstoppable.",
    "Relax. Breathe. Your pace, your race.",
    "Every effort is a building block. You're creating greatness.",
    "It's okay to be tired. It's not okay to give up. You've got this!",
    "Tired? That's just proof of your effort. Keep pushing.",
    "Slow doesn't mean stopped. Every step matters.",
];

const EVENING: [&str; 10] = [
    "As the day ends, remember: every effort adds up. Be proud.",
    "Even the sun sets in paradise. Relax, you've done well today.",
    "Your dedication today deserves an evening of peace. Enjoy.",
    "Take pride in how far you've come. Have a peaceful night.",
    "Another day conquered. Rest and recharge, warrior.",
    "Feel the day's weight lifting. You've earned your calm.",
    "You gave today your all. Now, give yourself permission to relax.",
    "Productivity is knowing when to relax. You've done enough today.",
    "The stars are out, time to rest. Tomorrow, shine brighter.",
    "Tonight, let your mind rest. Tomorrow, let it create anew.",
];

const NIGHT: [&str; 10] = [
    "Embrace the night's silence. Let go of your worries, sleep deep.",
    "Rest your mind. Tomorrow holds new promise.",
    "Let the moon guide you to peaceful dreams.",
    "Stars can't shine without darkness. Embrace rest, recharge for tomorrow.",
    "Sleep is the best meditation. Embrace tranquility.",
    "Nighttime whispers peace. Listen, rest, rejuvenate.",
    "Like the calm sea under the moon, let your mind find peace tonight.",
    "Breathe out worries, breathe in peace. Sleep awaits.",
    "Tomorrow is a new canvas. Rest now, paint tomorrow.",
    "Trade your fears for dreams. Goodnight, peaceful sleep.",
];

/// Fixed, read-only message lists, one per bucket
pub struct MessageCatalog;

impl MessageCatalog {
    pub const fn messages(part: TimeOfDay) -> &'static [&'static str] {
        match part {
            TimeOfDay::Morning => &MORNING,
            TimeOfDay::Afternoon => &AFTERNOON,
            TimeOfDay::Evening => &EVENING,
            TimeOfDay::Night => &NIGHT,
        }
    }

    #[cfg(test)]
    pub fn contains(part: TimeOfDay, message: &str) -> bool {
        Self::messages(part).contains(&message)
    }
}
