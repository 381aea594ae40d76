use eframe::egui::{Color32, Visuals};

/// The ten color roles of the language picker. Every background role has a
/// paired `on_*` role for the text and icons drawn on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePickerColors {
    pub content: Color32,
    pub on_content: Color32,
    pub selected: Color32,
    pub on_selected: Color32,
    pub dismiss: Color32,
    pub on_dismiss: Color32,
    pub apply: Color32,
    pub on_apply: Color32,
    pub bars: Color32,
    pub on_bars: Color32,
}

/// Per-instance replacements for the theme-derived roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    pub content: Option<Color32>,
    pub on_content: Option<Color32>,
    pub selected: Option<Color32>,
    pub on_selected: Option<Color32>,
    pub dismiss: Option<Color32>,
    pub on_dismiss: Option<Color32>,
    pub apply: Option<Color32>,
    pub on_apply: Option<Color32>,
    pub bars: Option<Color32>,
    pub on_bars: Option<Color32>,
}

impl LanguagePickerColors {
    /// Theme defaults: surfaces for content and dismiss, the selection
    /// colors for selected rows and bars, the active widget colors for apply.
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let surface = visuals.window_fill();
        let on_surface = visuals.text_color();
        let secondary = visuals.selection.bg_fill;
        let on_secondary = visuals.selection.stroke.color;
        let primary = visuals.widgets.active.bg_fill;
        let on_primary = visuals.widgets.active.fg_stroke.color;

        Self {
            content: surface,
            on_content: on_surface,
            selected: secondary,
            on_selected: on_secondary,
            dismiss: surface,
            on_dismiss: on_surface,
            apply: primary,
            on_apply: on_primary,
            bars: secondary,
            on_bars: on_secondary,
        }
    }

    pub fn resolve(visuals: &Visuals, overrides: &ColorOverrides) -> Self {
        let theme = Self::from_visuals(visuals);

        Self {
            content: overrides.content.unwrap_or(theme.content),
            on_content: overrides.on_content.unwrap_or(theme.on_content),
            selected: overrides.selected.unwrap_or(theme.selected),
            on_selected: overrides.on_selected.unwrap_or(theme.on_selected),
            dismiss: overrides.dismiss.unwrap_or(theme.dismiss),
            on_dismiss: overrides.on_dismiss.unwrap_or(theme.on_dismiss),
            apply: overrides.apply.unwrap_or(theme.apply),
            on_apply: overrides.on_apply.unwrap_or(theme.on_apply),
            bars: overrides.bars.unwrap_or(theme.bars),
            on_bars: overrides.on_bars.unwrap_or(theme.on_bars),
        }
    }

    /// Row background for the given selection state.
    pub fn row_fill(&self, selected: bool) -> Color32 {
        if selected {
            self.selected
        } else {
            Color32::TRANSPARENT
        }
    }

    /// Row text and check mark tint for the given selection state.
    pub fn row_text(&self, selected: bool) -> Color32 {
        if selected {
            self.on_selected
        } else {
            self.on_content
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_theme() {
        for visuals in [Visuals::dark(), Visuals::light()] {
            let colors = LanguagePickerColors::resolve(&visuals, &ColorOverrides::default());

            assert_eq!(colors.content, visuals.window_fill());
            assert_eq!(colors.on_content, visuals.text_color());
            assert_eq!(colors.selected, visuals.selection.bg_fill);
            assert_eq!(colors.bars, colors.selected);
            assert_eq!(colors.on_bars, colors.on_selected);
            assert_eq!(colors.dismiss, colors.content);
            assert_eq!(colors.apply, visuals.widgets.active.bg_fill);
        }
    }

    #[test]
    fn overrides_replace_only_their_role() {
        let visuals = Visuals::light();
        let overrides = ColorOverrides {
            selected: Some(Color32::RED),
            on_apply: Some(Color32::WHITE),
            ..Default::default()
        };

        let theme = LanguagePickerColors::from_visuals(&visuals);
        let colors = LanguagePickerColors::resolve(&visuals, &overrides);

        assert_eq!(colors.selected, Color32::RED);
        assert_eq!(colors.on_apply, Color32::WHITE);
        assert_eq!(colors.bars, theme.bars);
        assert_eq!(colors.apply, theme.apply);
        assert_eq!(colors.on_content, theme.on_content);
    }

    #[test]
    fn row_colors_depend_on_selection() {
        let colors = LanguagePickerColors::from_visuals(&Visuals::dark());

        assert_eq!(colors.row_fill(true), colors.selected);
        assert_eq!(colors.row_fill(false), Color32::TRANSPARENT);
        assert_eq!(colors.row_text(true), colors.on_selected);
        assert_eq!(colors.row_text(false), colors.on_content);
    }
}
