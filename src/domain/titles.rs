use crate::core::random::SimRng;

/// Page headings, one picked at random on load
pub const TITLES: [&str; 11] = [
    "Watch Balls Move",
    "Spectate Sphere Physics",
    "Ningen Bounce",
    "Wall Tennis",
    "Gravity Balls",
    "Zero-Player Pong",
    "Lag Physics",
    "Observe Circle Collisions",
    "JavaScript is fun!",
    "Stored in the Balls",
    "Certified Useless Website",
];

pub fn pick_title(rng: &mut SimRng) -> &'static str {
    TITLES[rng.index(TITLES.len())]
}
