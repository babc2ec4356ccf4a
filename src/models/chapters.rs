//! The fixed 23-chapter catalog
//!
//! Index `i` (0-based) corresponds to week `i + 1`. The catalog is read-only;
//! advancing the cycle walks it front to back exactly once.

/// Ordered chapter titles for the full cycle.
pub const CHAPTERS: [&str; 23] = [
    "Chapter 1: Not Mass, Not Spam, Not Shameful",
    "Chapter 2: The Marketer Learns to See",
    "Chapter 3: Marketing Changes People Through Stories, Connections, and Experience",
    "Chapter 4: The Smallest Viable Market",
    "Chapter 5: In Search of \"Better\"",
    "Chapter 6: Beyond Commodities",
    "Chapter 7: The Canvas of Dreams and Desires",
    "Chapter 8: More of the Who: Seeking the Smallest Viable Market",
    "Chapter 9: People Like Us Do Things Like This",
    "Chapter 10: Trust and Tension",
    "Chapter 11: Status, Dominion, and Affiliation",
    "Chapter 12: A Better Business Plan",
    "Chapter 13: Semiotics, Symbols, and Vernacular",
    "Chapter 14: Treat Different People Differently",
    "Chapter 15: Reaching the Right People",
    "Chapter 16: Price Is a Story",
    "Chapter 17: Permission and Remarkability in a Virtuous Cycle",
    "Chapter 18: Trust Is as Scarce as Attention",
    "Chapter 19: The Funnel",
    "Chapter 20: Organizing and Leading a Tribe",
    "Chapter 21: Some Case Studies Using the Method",
    "Chapter 22: Marketing Works, and Now It's Your Turn",
    "Chapter 23: Marketing to the Most Important Person",
];

/// Total number of weeks in one full cycle.
pub const TOTAL_WEEKS: u32 = CHAPTERS.len() as u32;

/// Look up the chapter title for a 1-based week number.
pub fn chapter_for_week(week: u32) -> Option<&'static str> {
    if week == 0 {
        return None;
    }
    CHAPTERS.get(week as usize - 1).copied()
}
