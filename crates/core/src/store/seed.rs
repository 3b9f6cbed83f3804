//! Built-in prompts loaded at startup

use super::{Category, NewPrompt};

type SeedEntry = (Category, &'static str, [&'static str; 2]);

const SEED: &[SeedEntry] = &[
    // Scenarios
    (
        Category::Scenarios,
        "You're a team of Victorian-era food critics who have just discovered that your favorite restaurant has been secretly run by time-traveling teenagers from 2024. React to their 'deconstructed' fish and chips served on a wooden plank.",
        ["Accent: Posh British", "Prop: Magnifying glass"],
    ),
    (
        Category::Scenarios,
        "You're wedding planners trying to organize a ceremony for two rival medieval kingdoms, but the only venue available is a laser tag arena that's having a 'Shakespearean Night' theme.",
        ["Prop: Foam sword", "Line: 'But soft, what light through yonder window breaks?'"],
    ),
    (
        Category::Scenarios,
        "You're tech support agents helping famous historical figures troubleshoot their new smart devices. Today's client: Cleopatra trying to set up her Instagram account.",
        ["Accent: Valley Girl", "Prop: Ancient Egyptian headpiece"],
    ),
    (
        Category::Scenarios,
        "You're museum curators who've discovered that all the exhibits come alive at night, and they're forming a union to demand better working conditions and dental coverage.",
        ["Prop: Clipboard", "Character trait: Overly bureaucratic"],
    ),
    (
        Category::Scenarios,
        "You're contestants on a cooking show where the secret ingredient is always something completely inedible, and today's challenge is making a five-star meal using only office supplies.",
        ["Prop: Stapler", "Line: 'And now for the staple course...'"],
    ),
    // Characters
    (
        Category::Characters,
        "A mime who's just discovered they can actually speak, but only in Shakespearean English, and they're trying to order a complicated coffee drink at a modern café.",
        ["Gesture: Invisible box motions", "Accent: Elizabethan English"],
    ),
    (
        Category::Characters,
        "An overly enthusiastic museum docent who believes every exhibit is personally trying to communicate with them, and they're giving a tour to a group of skeptical teenagers.",
        ["Prop: Museum badge", "Character trait: Whispers to paintings"],
    ),
    (
        Category::Characters,
        "A conspiracy theorist who thinks birds are government drones, but secretly loves birdwatching and is struggling with this internal conflict during a nature walk.",
        ["Prop: Binoculars", "Line: 'That's clearly a surveillance pigeon'"],
    ),
    (
        Category::Characters,
        "A former child prodigy violinist who now works as a pizza delivery driver and keeps trying to incorporate classical music theory into customer interactions.",
        ["Prop: Pizza box", "Hum: Beethoven's 9th Symphony"],
    ),
    (
        Category::Characters,
        "A retired superhero who now teaches preschool and keeps accidentally using their super-strength during normal classroom activities like finger painting.",
        ["Prop: Safety scissors", "Character trait: Whispers dramatically"],
    ),
    // Props & lines
    (
        Category::Props,
        "A rubber duck that squeaks in morse code, and you're the only person who can understand it. It has urgent information about tomorrow's weather.",
        ["Sound: Duck squeaks", "Knowledge: Basic morse code"],
    ),
    (
        Category::Props,
        "A vintage typewriter that only types in emoji, and you're a serious novelist trying to write the great American novel using it.",
        ["Gesture: Hunt-and-peck typing", "Frustration level: Extreme"],
    ),
    (
        Category::Props,
        "A GPS that gives directions to emotional states instead of locations. 'In 200 feet, turn left toward mild anxiety, then proceed straight to existential dread.'",
        ["Voice: Robotic GPS tone", "Line: 'Recalculating... recalculating...'"],
    ),
    (
        Category::Props,
        "A magic 8-ball that only gives pretentious philosophical answers like 'The question assumes a binary universe' and 'Causality is but an illusion, my friend.'",
        ["Gesture: Vigorous shaking", "Tone: Overly intellectual"],
    ),
    (
        Category::Props,
        "A doorbell that plays a different classical music piece each time it's pressed, but it's stuck on repeat and won't stop playing Vivaldi's 'Four Seasons' at maximum volume.",
        ["Sound: Doorbell chime", "Volume: Increasingly frustrated"],
    ),
];

/// The seed set as insertable records
pub fn seed_prompts() -> Vec<NewPrompt> {
    SEED.iter()
        .map(|(category, content, elements)| {
            NewPrompt::new(*content, *category).with_elements(elements.iter().copied())
        })
        .collect()
}
