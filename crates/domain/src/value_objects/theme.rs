//! Deterministic theme tokens for games that have no cover of their own.

const GRADIENT_PAIRS: [&str; 10] = [
    "from-red-600 to-red-950",
    "from-blue-600 to-blue-950",
    "from-emerald-600 to-emerald-950",
    "from-amber-600 to-amber-950",
    "from-purple-600 to-purple-950",
    "from-indigo-600 to-indigo-950",
    "from-pink-600 to-pink-950",
    "from-cyan-600 to-cyan-950",
    "from-orange-600 to-orange-950",
    "from-slate-600 to-slate-950",
];

const THEME_COLORS: [&str; 10] = [
    "#ef4444", "#3b82f6", "#10b981", "#f59e0b", "#8b5cf6", "#6366f1", "#ec4899", "#06b6d4",
    "#f97316", "#64748b",
];

/// Accent used before any realm is chosen.
pub const DEFAULT_ACCENT: &str = "#F5B800";

/// Sum of UTF-16 code units, matching how the palettes were keyed.
fn palette_index(game_name: &str) -> usize {
    let hash: u64 = game_name.encode_utf16().map(u64::from).sum();
    (hash % 10) as usize
}

/// Gradient class token for a game name.
pub fn game_gradient(game_name: &str) -> String {
    format!("bg-gradient-to-br {}", GRADIENT_PAIRS[palette_index(game_name)])
}

/// Accent color for a game name.
pub fn game_theme_color(game_name: &str) -> &'static str {
    THEME_COLORS[palette_index(game_name)]
}
