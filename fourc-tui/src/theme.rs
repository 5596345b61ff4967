//! Neon-on-charcoal palette for the FourC presenter.
//!
//! # Color Palette
//! - **Background**: deep charcoal
//! - **Accent**: electric cyan (focus, current reveal item)
//! - **Positive**: neon green (links, completion)
//! - **Negative**: hot pink (errors)
//! - **Warning**: neon orange
//! - **Neutral**: cool purple (secondary info)
//! - **Muted**: steel blue (past reveal items, hints)
//!
//! Category colors come from `fourc_core::attributes`, so the palette and the
//! CLI badges never disagree.

use fourc_core::{attributes, FourC, Visibility};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub const fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Accent color for a category; unrecognized categories get the neutral grey.
    pub fn category_color(&self, category: Option<FourC>) -> Color {
        let (r, g, b) = attributes(category).rgb;
        Color::Rgb(r, g, b)
    }

    /// Style for a reveal item by tier. Invisible items are never drawn, but
    /// get a hidden style so callers can stay branch-free.
    pub fn reveal_style(&self, visibility: Visibility) -> Style {
        match visibility {
            Visibility::Current => Style::default()
                .fg(self.text_primary)
                .add_modifier(Modifier::BOLD),
            Visibility::Past => Style::default()
                .fg(self.text_secondary)
                .add_modifier(Modifier::DIM),
            Visibility::Invisible => Style::default().add_modifier(Modifier::HIDDEN),
        }
    }

    /// Progress bar color: accent while presenting, green when complete.
    pub fn progress_color(&self, fraction: f64) -> Color {
        if fraction >= 1.0 {
            self.positive
        } else {
            self.accent
        }
    }
}

const THEME: Theme = Theme::parrot_neon();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn category(category: Option<FourC>) -> Style {
    Style::default().fg(THEME.category_color(category))
}

pub fn reveal(visibility: Visibility) -> Style {
    THEME.reveal_style(visibility)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

pub fn cursor() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn category_colors_are_distinct() {
        let theme = Theme::default();
        let colors: Vec<Color> = FourC::ALL
            .iter()
            .map(|c| theme.category_color(Some(*c)))
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(theme.category_color(None), Color::Rgb(150, 150, 160));
    }

    #[test]
    fn reveal_styles_differ_by_tier() {
        let theme = Theme::default();
        let current = theme.reveal_style(Visibility::Current);
        let past = theme.reveal_style(Visibility::Past);
        assert!(current.add_modifier.contains(Modifier::BOLD));
        assert!(past.add_modifier.contains(Modifier::DIM));
        assert!(theme
            .reveal_style(Visibility::Invisible)
            .add_modifier
            .contains(Modifier::HIDDEN));
    }

    #[test]
    fn progress_color() {
        let theme = Theme::default();
        assert_eq!(theme.progress_color(1.0), theme.positive);
        assert_eq!(theme.progress_color(0.4), theme.accent);
    }
}
