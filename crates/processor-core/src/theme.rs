//! Color themes for the terminal form.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeVariant {
    /// Light background with green accents
    #[default]
    Meadow,
    Night,
}

#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub selection: Color,
}

/// Parts of the form that get their own styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Background,
    Text,
    Title,
    Border,
    /// Border of the widget that currently has focus
    FocusBorder,
    Placeholder,
    Error,
    Chip,
    Highlight,
    Output,
    Hint,
}

#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let palette = match variant {
            ThemeVariant::Meadow => Palette {
                background: Color::Rgb(240, 244, 195), // #f0f4c3
                surface: Color::Rgb(250, 250, 250),    // #fafafa
                foreground: Color::Rgb(51, 51, 51),    // #333333
                accent: Color::Rgb(85, 139, 47),       // #558b2f
                muted: Color::Rgb(130, 130, 130),
                error: Color::Rgb(211, 47, 47), // #d32f2f
                selection: Color::Rgb(236, 236, 236),
            },
            ThemeVariant::Night => Palette {
                background: Color::Rgb(30, 34, 30),
                surface: Color::Rgb(40, 45, 40),
                foreground: Color::Rgb(220, 224, 210),
                accent: Color::Rgb(156, 204, 101), // #9ccc65
                muted: Color::Rgb(120, 128, 118),
                error: Color::Rgb(239, 83, 80), // #ef5350
                selection: Color::Rgb(60, 68, 58),
            },
        };

        Self { variant, palette }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn toggle(&mut self) {
        let next = match self.variant {
            ThemeVariant::Meadow => ThemeVariant::Night,
            ThemeVariant::Night => ThemeVariant::Meadow,
        };
        *self = Self::new(next);
    }

    pub fn style(&self, element: Element) -> Style {
        let p = &self.palette;
        match element {
            Element::Background => Style::default().fg(p.foreground).bg(p.background),
            Element::Text => Style::default().fg(p.foreground).bg(p.surface),
            Element::Title => Style::default()
                .fg(p.accent)
                .bg(p.surface)
                .add_modifier(Modifier::BOLD),
            Element::Border => Style::default().fg(p.muted).bg(p.surface),
            Element::FocusBorder => Style::default()
                .fg(p.accent)
                .bg(p.surface)
                .add_modifier(Modifier::BOLD),
            Element::Placeholder => Style::default()
                .fg(p.muted)
                .bg(p.surface)
                .add_modifier(Modifier::ITALIC),
            Element::Error => Style::default().fg(p.error).bg(p.surface),
            Element::Chip => Style::default()
                .fg(p.surface)
                .bg(p.accent)
                .add_modifier(Modifier::BOLD),
            Element::Highlight => Style::default()
                .fg(p.foreground)
                .bg(p.selection)
                .add_modifier(Modifier::BOLD),
            Element::Output => Style::default().fg(p.foreground).bg(p.selection),
            Element::Hint => Style::default().fg(p.muted).bg(p.background),
        }
    }
}
