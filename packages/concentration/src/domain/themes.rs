//! Card themes: named glyph sets usable as content sources.
//!
//! A theme is pure demo data for presentation layers that want a ready-made
//! deck; the engine itself only requires an equality-comparable content type.

/// A named set of glyphs. Pair index `i` maps to the `i`-th glyph, so a
/// theme backs up to [`pair_count`](Theme::pair_count) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    glyphs: Vec<String>,
}

impl Theme {
    pub fn new(name: impl Into<String>, glyphs: Vec<String>) -> Self {
        Self {
            name: name.into(),
            glyphs,
        }
    }

    /// The classic spooky-and-sundry glyph set.
    pub fn classic() -> Self {
        let glyphs = [
            "👻", "🎃", "💀", "😈", "🤡", "🕷️", "🧙", "🌕", "🐼", "🦉", "🐸", "🦊",
            "🎩", "💎", "🕰️", "⚙️", "🏆", "🎾", "🏠", "💰", "🍕", "🍭", "🚀", "⭐",
        ];
        Self::new("classic", glyphs.iter().map(|g| g.to_string()).collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of pairs this theme can back.
    pub fn pair_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Content for a pair index. Callers must keep `pair_index` below
    /// [`pair_count`](Theme::pair_count); deck construction driven by this
    /// theme's own pair count never goes out of range.
    pub fn content_at(&self, pair_index: usize) -> String {
        self.glyphs[pair_index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_theme_has_distinct_glyphs() {
        let theme = Theme::classic();
        assert!(theme.pair_count() >= 12);

        for i in 0..theme.pair_count() {
            for j in (i + 1)..theme.pair_count() {
                assert_ne!(theme.content_at(i), theme.content_at(j));
            }
        }
    }

    #[test]
    fn custom_theme_maps_indices_in_order() {
        let theme = Theme::new("tiny", vec!["a".into(), "b".into()]);
        assert_eq!(theme.name(), "tiny");
        assert_eq!(theme.pair_count(), 2);
        assert_eq!(theme.content_at(0), "a");
        assert_eq!(theme.content_at(1), "b");
    }
}
