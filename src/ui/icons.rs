//! Glyph lookups for course icon tags and lesson status

/// Glyph for unknown or missing icon tags
pub const DEFAULT_ICON: &str = "▤";

pub const STATUS_NOT_STARTED: &str = "○";
pub const STATUS_COMPLETED: &str = "✓";
pub const STATUS_LOCKED: &str = "⊘";

/// Resolve a course icon tag to a glyph
pub fn course_icon(tag: &str) -> &'static str {
    match tag.trim().to_ascii_lowercase().as_str() {
        "code" | "terminal" => "λ",
        "database" | "data" => "⛁",
        "design" | "palette" => "✎",
        "science" | "flask" => "⚗",
        "language" | "languages" => "✍",
        "math" | "calculator" => "∑",
        "music" => "♫",
        "business" | "chart" => "↗",
        _ => DEFAULT_ICON,
    }
}

/// Status glyph for a lesson
pub fn lesson_status(completed: bool, locked: bool) -> &'static str {
    if completed {
        STATUS_COMPLETED
    } else if locked {
        STATUS_LOCKED
    } else {
        STATUS_NOT_STARTED
    }
}
