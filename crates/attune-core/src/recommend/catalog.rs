//! Fixed activity templates used by the recommendation rules

use crate::models::{Difficulty, RecommendationType, WellnessRecommendation};
use Difficulty::{Challenging, Easy, Moderate};
use RecommendationType::*;

/// A static activity description, instantiated per call
pub struct Activity {
    pub kind: RecommendationType,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub benefits: &'static [&'static str],
    pub instructions: &'static [&'static str],
}

impl Activity {
    pub fn build(&self) -> WellnessRecommendation {
        WellnessRecommendation {
            kind: self.kind,
            title: self.title.to_string(),
            description: self.description.to_string(),
            duration_minutes: self.duration_minutes,
            difficulty: self.difficulty,
            benefits: self.benefits.iter().map(|s| s.to_string()).collect(),
            instructions: self.instructions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ----------------------------------------------------------------------------
// Immediate
// ----------------------------------------------------------------------------

pub static BOX_BREATHING: Activity = Activity {
    kind: Breathing,
    title: "Box Breathing",
    description: "A steady four-count breathing pattern that slows your heart rate",
    duration_minutes: 4,
    difficulty: Easy,
    benefits: &["Calms the nervous system", "Reduces racing thoughts"],
    instructions: &[
        "Breathe in through your nose for 4 counts",
        "Hold your breath for 4 counts",
        "Exhale slowly for 4 counts",
        "Hold empty for 4 counts and repeat for 4 minutes",
    ],
};

pub static GROUNDING_54321: Activity = Activity {
    kind: Grounding,
    title: "5-4-3-2-1 Grounding",
    description: "Anchor yourself in the present by naming what your senses notice",
    duration_minutes: 5,
    difficulty: Easy,
    benefits: &["Interrupts anxious spirals", "Brings attention back to the present"],
    instructions: &[
        "Name 5 things you can see",
        "Name 4 things you can touch",
        "Name 3 things you can hear",
        "Name 2 things you can smell",
        "Name 1 thing you can taste",
    ],
};

pub static PHYSIOLOGICAL_SIGH: Activity = Activity {
    kind: Breathing,
    title: "Physiological Sigh",
    description: "Two short inhales followed by a long exhale to release tension quickly",
    duration_minutes: 2,
    difficulty: Easy,
    benefits: &["Fast stress relief", "Lowers physical tension"],
    instructions: &[
        "Inhale deeply through your nose",
        "Take a second short inhale on top of the first",
        "Exhale slowly and fully through your mouth",
        "Repeat 5 times",
    ],
};

pub static PROGRESSIVE_RELAXATION: Activity = Activity {
    kind: Rest,
    title: "Progressive Muscle Relaxation",
    description: "Tense and release each muscle group to let go of stored stress",
    duration_minutes: 10,
    difficulty: Easy,
    benefits: &["Releases muscle tension", "Improves body awareness"],
    instructions: &[
        "Sit or lie down comfortably",
        "Tense your feet for 5 seconds, then release",
        "Move upward through legs, stomach, hands, arms, shoulders and face",
        "Notice the difference between tension and relaxation",
    ],
};

pub static SELF_COMPASSION_BREAK: Activity = Activity {
    kind: Meditation,
    title: "Self-Compassion Break",
    description: "Acknowledge that this is hard and offer yourself kindness",
    duration_minutes: 5,
    difficulty: Easy,
    benefits: &["Softens self-criticism", "Eases emotional pain"],
    instructions: &[
        "Place a hand over your heart",
        "Say to yourself: this is a moment of difficulty",
        "Remind yourself that everyone struggles sometimes",
        "Ask what you need to hear right now and say it kindly",
    ],
};

pub static COMFORT_MUSIC: Activity = Activity {
    kind: Creative,
    title: "Comforting Music",
    description: "Listen to a few songs that have lifted you up before",
    duration_minutes: 10,
    difficulty: Easy,
    benefits: &["Shifts emotional state", "Provides comfort"],
    instructions: &[
        "Pick two or three songs you associate with good memories",
        "Listen without multitasking",
        "Notice any change in how you feel",
    ],
};

pub static ENERGIZING_BREATH: Activity = Activity {
    kind: Breathing,
    title: "Energizing Breath",
    description: "Quick rhythmic breathing to wake up body and mind",
    duration_minutes: 3,
    difficulty: Easy,
    benefits: &["Boosts alertness", "Increases oxygen flow"],
    instructions: &[
        "Sit up tall",
        "Take 10 quick breaths in and out through your nose",
        "Follow with one deep breath and a slow exhale",
        "Repeat three rounds",
    ],
};

pub static HYDRATE_AND_SNACK: Activity = Activity {
    kind: Nutrition,
    title: "Hydrate and Refuel",
    description: "Drink water and have a small snack with protein",
    duration_minutes: 5,
    difficulty: Easy,
    benefits: &["Counters dehydration fatigue", "Stabilizes blood sugar"],
    instructions: &[
        "Drink a full glass of water",
        "Choose a snack such as nuts, yogurt or fruit with nut butter",
        "Eat slowly away from screens",
    ],
};

pub static GRATITUDE_SNAPSHOT: Activity = Activity {
    kind: Creative,
    title: "Gratitude Snapshot",
    description: "Capture what is going well so you can come back to it later",
    duration_minutes: 5,
    difficulty: Easy,
    benefits: &["Reinforces positive emotions", "Builds a record of good days"],
    instructions: &[
        "Write down three things that made today good",
        "Note who or what contributed to each",
        "Save it somewhere you will see it again",
    ],
};

pub static SAVOR_THE_MOMENT: Activity = Activity {
    kind: Meditation,
    title: "Savor the Moment",
    description: "Pause and fully notice how good this feels",
    duration_minutes: 3,
    difficulty: Easy,
    benefits: &["Extends positive feelings", "Builds mindfulness"],
    instructions: &[
        "Stop what you are doing for a moment",
        "Notice where in your body you feel the good mood",
        "Take three slow breaths while holding that feeling",
    ],
};

pub static CENTERING_BREATH: Activity = Activity {
    kind: Breathing,
    title: "Centering Breath",
    description: "Slow your breathing to turn excitement into focus",
    duration_minutes: 3,
    difficulty: Easy,
    benefits: &["Improves focus", "Keeps energy steady"],
    instructions: &[
        "Inhale for 4 counts",
        "Exhale for 6 counts",
        "Repeat for 3 minutes while relaxing your shoulders",
    ],
};

pub static IDEA_CAPTURE: Activity = Activity {
    kind: Creative,
    title: "Idea Capture",
    description: "Write down the ideas and plans behind your excitement",
    duration_minutes: 5,
    difficulty: Easy,
    benefits: &["Keeps ideas from slipping away", "Clears mental space"],
    instructions: &[
        "List everything you are excited about",
        "Circle the one that matters most",
        "Write the very next step for it",
    ],
};

// ----------------------------------------------------------------------------
// Short term
// ----------------------------------------------------------------------------

pub static MINDFUL_WALK: Activity = Activity {
    kind: Exercise,
    title: "Mindful Walk",
    description: "A slow walk paying attention to each step and your surroundings",
    duration_minutes: 15,
    difficulty: Easy,
    benefits: &["Burns off nervous energy", "Combines movement with mindfulness"],
    instructions: &[
        "Walk at a comfortable pace",
        "Notice the feeling of each foot touching the ground",
        "When your mind wanders, bring it back to your steps",
    ],
};

pub static BODY_SCAN: Activity = Activity {
    kind: Meditation,
    title: "Guided Body Scan",
    description: "Move your attention slowly through your body, releasing tension",
    duration_minutes: 15,
    difficulty: Easy,
    benefits: &["Deep relaxation", "Improves body awareness"],
    instructions: &[
        "Lie down or sit comfortably and close your eyes",
        "Start at your toes and notice any sensation",
        "Move attention slowly up to the top of your head",
        "Breathe into any area that feels tight",
    ],
};

pub static WORRY_JOURNAL: Activity = Activity {
    kind: Creative,
    title: "Worry Journaling",
    description: "Get worries out of your head and onto paper",
    duration_minutes: 10,
    difficulty: Easy,
    benefits: &["Reduces rumination", "Separates solvable from unsolvable worries"],
    instructions: &[
        "Write down every worry without judging it",
        "Mark the ones you can act on",
        "Write one small action for each marked worry",
    ],
};

pub static EXPRESSIVE_JOURNALING: Activity = Activity {
    kind: Creative,
    title: "Expressive Journaling",
    description: "Write freely about what you are feeling and why",
    duration_minutes: 15,
    difficulty: Easy,
    benefits: &["Processes difficult emotions", "Brings clarity"],
    instructions: &[
        "Set a timer for 15 minutes",
        "Write continuously about how you feel",
        "Do not worry about grammar or structure",
        "Finish by writing one kind thing about yourself",
    ],
};

pub static REACH_OUT: Activity = Activity {
    kind: Social,
    title: "Reach Out to Someone",
    description: "Connect with a friend or family member you trust",
    duration_minutes: 15,
    difficulty: Moderate,
    benefits: &["Reduces isolation", "Provides support and perspective"],
    instructions: &[
        "Pick one person you feel safe with",
        "Send a message or call them",
        "Share honestly how you are doing, even briefly",
    ],
};

pub static GENTLE_WALK_OUTSIDE: Activity = Activity {
    kind: Exercise,
    title: "Gentle Walk Outside",
    description: "Get some daylight and light movement",
    duration_minutes: 20,
    difficulty: Easy,
    benefits: &["Natural light lifts mood", "Gentle movement releases endorphins"],
    instructions: &[
        "Head outside, even just around the block",
        "Walk at an easy pace",
        "Look up and notice the sky, trees or buildings around you",
    ],
};

pub static POWER_NAP: Activity = Activity {
    kind: Rest,
    title: "Power Nap",
    description: "A short nap to restore alertness without grogginess",
    duration_minutes: 20,
    difficulty: Easy,
    benefits: &["Restores alertness", "Improves mood and focus"],
    instructions: &[
        "Find a quiet, dim place",
        "Set an alarm for 20 minutes",
        "Lie down and let yourself rest even if you do not fall asleep",
    ],
};

pub static FRESH_AIR_BREAK: Activity = Activity {
    kind: Exercise,
    title: "Fresh Air Break",
    description: "Step outside and move a little to shake off fatigue",
    duration_minutes: 10,
    difficulty: Easy,
    benefits: &["Increases alertness", "Breaks up sedentary time"],
    instructions: &[
        "Step outside or open a window",
        "Take ten deep breaths",
        "Walk or stretch for a few minutes",
    ],
};

pub static BALANCED_SNACK: Activity = Activity {
    kind: Nutrition,
    title: "Balanced Snack",
    description: "Refuel with a mix of protein, fiber and water",
    duration_minutes: 10,
    difficulty: Easy,
    benefits: &["Sustained energy", "Avoids sugar crashes"],
    instructions: &[
        "Pair a protein with a fruit or vegetable",
        "Drink a glass of water",
        "Skip extra caffeine late in the day",
    ],
};

pub static BRAIN_DUMP: Activity = Activity {
    kind: Creative,
    title: "Brain Dump and Prioritize",
    description: "List everything on your mind and pick what actually matters today",
    duration_minutes: 15,
    difficulty: Easy,
    benefits: &["Reduces mental load", "Creates a clear plan"],
    instructions: &[
        "Write down every task and concern",
        "Mark the top three that must happen today",
        "Move or drop the rest",
    ],
};

pub static CARDIO_BURST: Activity = Activity {
    kind: Exercise,
    title: "Cardio Burst",
    description: "A short, intense workout to burn off stress hormones",
    duration_minutes: 20,
    difficulty: Challenging,
    benefits: &["Burns off stress", "Releases endorphins"],
    instructions: &[
        "Warm up for 3 minutes",
        "Alternate 30 seconds of fast effort with 30 seconds of rest",
        "Repeat for 12 minutes",
        "Cool down and stretch",
    ],
};

pub static BRISK_WALK: Activity = Activity {
    kind: Exercise,
    title: "Brisk Walk",
    description: "A fast-paced walk to clear your head",
    duration_minutes: 15,
    difficulty: Moderate,
    benefits: &["Reduces stress", "Improves mood and focus"],
    instructions: &[
        "Walk at a pace where talking takes a little effort",
        "Swing your arms and breathe deeply",
        "Keep going for 15 minutes",
    ],
};

pub static GENTLE_STRETCH: Activity = Activity {
    kind: Exercise,
    title: "Gentle Stretching",
    description: "Slow stretches to loosen up without much effort",
    duration_minutes: 10,
    difficulty: Easy,
    benefits: &["Releases tension", "Low effort movement"],
    instructions: &[
        "Roll your neck and shoulders slowly",
        "Reach overhead and lean side to side",
        "Fold forward gently and hang for a few breaths",
    ],
};

pub static DESK_STRETCH: Activity = Activity {
    kind: Exercise,
    title: "Desk Stretch Sequence",
    description: "Quick stretches you can do without leaving your workspace",
    duration_minutes: 5,
    difficulty: Easy,
    benefits: &["Relieves desk tension", "Resets focus"],
    instructions: &[
        "Roll your shoulders back ten times",
        "Stretch each arm across your chest",
        "Twist gently left and right in your chair",
        "Stand up and reach toward the ceiling",
    ],
};

pub static SHARE_GOOD_NEWS: Activity = Activity {
    kind: Social,
    title: "Share the Good News",
    description: "Tell someone about what is going well",
    duration_minutes: 10,
    difficulty: Easy,
    benefits: &["Amplifies positive emotions", "Strengthens relationships"],
    instructions: &[
        "Think of someone who would be glad to hear from you",
        "Send a message or call",
        "Share what made you happy today",
    ],
};

pub static CREATIVE_SESSION: Activity = Activity {
    kind: Creative,
    title: "Creative Session",
    description: "Use your good mood to make something",
    duration_minutes: 30,
    difficulty: Moderate,
    benefits: &["Channels positive energy", "Builds a sense of accomplishment"],
    instructions: &[
        "Pick a creative activity you enjoy",
        "Set aside 30 minutes without interruptions",
        "Focus on the process rather than the result",
    ],
};

pub static ACTIVE_PLAY: Activity = Activity {
    kind: Exercise,
    title: "Active Play",
    description: "Do a physical activity you genuinely enjoy",
    duration_minutes: 30,
    difficulty: Moderate,
    benefits: &["Makes exercise fun", "Extends your good mood"],
    instructions: &[
        "Choose a sport, dance or game you enjoy",
        "Invite someone to join if you like",
        "Play for 30 minutes",
    ],
};

pub static PLAN_NEXT_STEP: Activity = Activity {
    kind: Creative,
    title: "Plan Your Next Step",
    description: "Turn excitement into a concrete plan",
    duration_minutes: 15,
    difficulty: Easy,
    benefits: &["Turns energy into progress", "Prevents overcommitting"],
    instructions: &[
        "Write down the goal you are excited about",
        "Break it into three steps",
        "Schedule the first step",
    ],
};

pub static CALM_WIND_DOWN: Activity = Activity {
    kind: Meditation,
    title: "Calm Wind-Down",
    description: "Settle your energy so you can rest later",
    duration_minutes: 10,
    difficulty: Easy,
    benefits: &["Prevents restlessness", "Supports good sleep"],
    instructions: &[
        "Dim the lights and put your phone away",
        "Breathe slowly for a few minutes",
        "Notice your body settling",
    ],
};

// ----------------------------------------------------------------------------
// Long term
// ----------------------------------------------------------------------------

pub static MINDFULNESS_HABIT: Activity = Activity {
    kind: Meditation,
    title: "Daily Mindfulness Practice",
    description: "Build a short daily meditation habit",
    duration_minutes: 10,
    difficulty: Moderate,
    benefits: &[
        "Improves emotional regulation",
        "Reduces baseline stress",
        "Builds self-awareness",
    ],
    instructions: &[
        "Pick a consistent time each day",
        "Start with 5 minutes and build up to 10",
        "Use a guided meditation if helpful",
        "Track your streak",
    ],
};

pub static EXERCISE_HABIT: Activity = Activity {
    kind: Exercise,
    title: "Regular Exercise Routine",
    description: "Move your body most days of the week",
    duration_minutes: 30,
    difficulty: Moderate,
    benefits: &[
        "Reduces anxiety and stress over time",
        "Improves sleep",
        "Boosts energy",
    ],
    instructions: &[
        "Aim for 30 minutes, 4-5 days a week",
        "Choose activities you enjoy",
        "Schedule workouts like appointments",
        "Start small and increase gradually",
    ],
};

pub static SUPPORT_NETWORK: Activity = Activity {
    kind: Social,
    title: "Build Your Support Network",
    description: "Invest in relationships that support you",
    duration_minutes: 30,
    difficulty: Moderate,
    benefits: &[
        "Protects against low moods",
        "Provides help when you need it",
    ],
    instructions: &[
        "List the people you can turn to",
        "Schedule regular contact with at least one of them each week",
        "Consider joining a group or community around an interest",
        "Consider talking to a counselor or therapist",
    ],
};

pub static SLEEP_HYGIENE: Activity = Activity {
    kind: Rest,
    title: "Sleep Hygiene Routine",
    description: "Create consistent habits that support restful sleep",
    duration_minutes: 30,
    difficulty: Moderate,
    benefits: &["Better mood regulation", "More energy during the day"],
    instructions: &[
        "Go to bed and wake up at the same time every day",
        "Avoid screens for an hour before bed",
        "Keep your bedroom cool, dark and quiet",
        "Limit caffeine after noon",
    ],
};
