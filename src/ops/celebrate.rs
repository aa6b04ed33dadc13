use rand::Rng;

/// The fixed set of celebration messages. One is shown for two seconds
/// whenever a toggle lands on the completed state.
pub const MESSAGES: &[&str] = &[
    "Nice work!",
    "One down!",
    "Crushed it!",
    "Keep it rolling!",
    "Done and dusted!",
    "You're on fire!",
    "Great job!",
    "That's progress!",
];

/// Pick a message uniformly at random. The RNG is injected so callers (and
/// tests) control the source of randomness.
pub fn pick_message<R: Rng>(rng: &mut R) -> &'static str {
    MESSAGES[rng.gen_range(0..MESSAGES.len())]
}
