use super::decision_bars::{decision_buttons, header, Decision, DecisionLabels};
use super::language_button::language_button;
use crate::app::language_option::LanguageOption;
use crate::app::style::{ColorOverrides, LanguagePickerColors, Spacing};
use eframe::egui::{self, Id, Key, Modifiers};

pub const PICKER_WIDTH: f32 = 400.0;

/// Why the picker was closed without applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    BackNavigation,
    OutsideTap,
    DismissButton,
}

/// A user interaction with an open picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    Select(String),
    Apply,
    Dismiss(DismissReason),
}

/// The terminal result of one picker interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Cancelled,
    Applied(String),
}

/// The staged, not yet committed, selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    selected: String,
}

impl PickerState {
    pub fn new(current_language: impl Into<String>) -> Self {
        Self {
            selected: current_language.into(),
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_selected(&self, option: &LanguageOption) -> bool {
        option.matches(&self.selected)
    }

    /// Applies one action. Selecting only restages; apply and dismiss end
    /// the interaction with an outcome.
    pub fn handle(&mut self, action: PickerAction) -> Option<PickerOutcome> {
        match action {
            PickerAction::Select(code) => {
                self.selected = code;
                None
            }
            PickerAction::Apply => Some(PickerOutcome::Applied(self.selected.clone())),
            PickerAction::Dismiss(reason) => {
                tracing::debug!("language picker dismissed: {:?}", reason);
                Some(PickerOutcome::Cancelled)
            }
        }
    }
}

/// Callback form of [`PickerOutcome`]: a dismissal callback and an
/// optional apply callback receiving the staged code.
pub struct PickerCallbacks<'a> {
    on_dismiss: Box<dyn FnMut() + 'a>,
    on_apply: Option<Box<dyn FnMut(&str) + 'a>>,
}

impl<'a> PickerCallbacks<'a> {
    pub fn new(on_dismiss: impl FnMut() + 'a) -> Self {
        Self {
            on_dismiss: Box::new(on_dismiss),
            on_apply: None,
        }
    }

    pub fn on_apply(mut self, on_apply: impl FnMut(&str) + 'a) -> Self {
        self.on_apply = Some(Box::new(on_apply));
        self
    }

    pub fn dispatch(&mut self, outcome: PickerOutcome) {
        match outcome {
            PickerOutcome::Cancelled => (self.on_dismiss)(),
            PickerOutcome::Applied(code) => match self.on_apply.as_mut() {
                Some(on_apply) => on_apply(&code),
                None => tracing::debug!("apply pressed without an apply handler"),
            },
        }
    }
}

/// Modal language selection dialog.
///
/// The host owns the picker for as long as it should stay open and calls
/// [`LanguagePicker::show`] every frame. Dropping the picker discards the
/// staged selection.
pub struct LanguagePicker {
    id: Id,
    header_text: String,
    options: Vec<LanguageOption>,
    spacing: Spacing,
    colors: ColorOverrides,
    labels: DecisionLabels,
    state: PickerState,
}

impl LanguagePicker {
    pub fn new(
        header_text: impl Into<String>,
        options: Vec<LanguageOption>,
        current_language: impl Into<String>,
    ) -> Self {
        Self {
            id: Id::new("language_picker"),
            header_text: header_text.into(),
            options,
            spacing: Spacing::default(),
            colors: ColorOverrides::default(),
            labels: DecisionLabels::default(),
            state: PickerState::new(current_language),
        }
    }

    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id = Id::new(salt);
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn colors(mut self, colors: ColorOverrides) -> Self {
        self.colors = colors;
        self
    }

    pub fn labels(mut self, labels: DecisionLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn options(&self) -> &[LanguageOption] {
        &self.options
    }

    pub fn staged(&self) -> &str {
        self.state.selected()
    }

    /// Selection flags in option order.
    pub fn highlighted(&self) -> Vec<bool> {
        self.options
            .iter()
            .map(|option| self.state.is_selected(option))
            .collect()
    }

    pub fn handle(&mut self, action: PickerAction) -> Option<PickerOutcome> {
        self.state.handle(action)
    }

    /// Draws the dialog and returns an outcome once the user applies or
    /// dismisses it.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<PickerOutcome> {
        let colors = LanguagePickerColors::resolve(&ctx.style().visuals, &self.colors);

        let width = PICKER_WIDTH.min(ctx.screen_rect().width() - 2.0 * self.spacing.horizontal());
        let modal = egui::Modal::new(self.id)
            .frame(egui::Frame::new().fill(colors.bars).corner_radius(4.0))
            .show(ctx, |ui| {
                ui.set_width(width.max(1.0));
                ui.spacing_mut().item_spacing.y = 0.0;

                header(ui, &self.header_text, self.spacing, &colors);

                let mut tapped = None;
                egui::Frame::new().fill(colors.content).show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    egui::ScrollArea::vertical()
                        .id_salt(self.id.with("rows"))
                        .auto_shrink([false, true])
                        .max_height(ui.ctx().screen_rect().height() * 0.6)
                        .show(ui, |ui| {
                            for option in &self.options {
                                ui.add_space(self.spacing.vertical());
                                let selected = self.state.is_selected(option);
                                if language_button(ui, option, selected, self.spacing, &colors)
                                    .clicked()
                                {
                                    tapped = Some(option.code.clone());
                                }
                            }
                            ui.add_space(self.spacing.vertical());
                        });
                });

                let decision = decision_buttons(ui, &self.labels, self.spacing, &colors);
                (tapped, decision)
            });

        // Back navigation belongs to the top modal, and only when no popup
        // inside it would take the key first.
        let back_pressed = modal.is_top_modal
            && !modal.any_popup_open
            && ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Escape));

        let mut actions = Vec::new();
        if back_pressed {
            actions.push(PickerAction::Dismiss(DismissReason::BackNavigation));
        }

        let (tapped, decision) = modal.inner;
        if let Some(code) = tapped {
            actions.push(PickerAction::Select(code));
        }
        match decision {
            Some(Decision::Apply) => actions.push(PickerAction::Apply),
            Some(Decision::Dismiss) => {
                actions.push(PickerAction::Dismiss(DismissReason::DismissButton))
            }
            None => {}
        }
        if modal.backdrop_response.clicked() {
            actions.push(PickerAction::Dismiss(DismissReason::OutsideTap));
        }

        // First terminal action wins; a frame never reports two outcomes.
        actions
            .into_iter()
            .find_map(|action| self.state.handle(action))
    }

    pub fn show_with(&mut self, ctx: &egui::Context, callbacks: &mut PickerCallbacks<'_>) {
        if let Some(outcome) = self.show(ctx) {
            callbacks.dispatch(outcome);
        }
    }
}
