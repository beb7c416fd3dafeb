//! Fixed die-face glyphs, one per face value.

/// Rendered height of a die face in terminal rows.
pub const FACE_HEIGHT: usize = 5;

const FACE_ONE: [&str; FACE_HEIGHT] = [
    "┌─────────┐",
    "│         │",
    "│    ●    │",
    "│         │",
    "└─────────┘",
];

const FACE_TWO: [&str; FACE_HEIGHT] = [
    "┌─────────┐",
    "│ ●       │",
    "│         │",
    "│       ● │",
    "└─────────┘",
];

const FACE_THREE: [&str; FACE_HEIGHT] = [
    "┌─────────┐",
    "│ ●       │",
    "│    ●    │",
    "│       ● │",
    "└─────────┘",
];

const FACE_FOUR: [&str; FACE_HEIGHT] = [
    "┌─────────┐",
    "│ ●     ● │",
    "│         │",
    "│ ●     ● │",
    "└─────────┘",
];

const FACE_FIVE: [&str; FACE_HEIGHT] = [
    "┌─────────┐",
    "│ ●     ● │",
    "│    ●    │",
    "│ ●     ● │",
    "└─────────┘",
];

const FACE_SIX: [&str; FACE_HEIGHT] = [
    "┌─────────┐",
    "│ ●     ● │",
    "│ ●     ● │",
    "│ ●     ● │",
    "└─────────┘",
];

/// Glyph for a face value. Out-of-range values display as a six.
pub fn face_lines(value: u8) -> [&'static str; FACE_HEIGHT] {
    match value {
        1 => FACE_ONE,
        2 => FACE_TWO,
        3 => FACE_THREE,
        4 => FACE_FOUR,
        5 => FACE_FIVE,
        _ => FACE_SIX,
    }
}
