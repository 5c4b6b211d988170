use crate::model::{TaskBoard, TaskId};
use crate::ui::theme;
use egui::{Color32, RichText, Ui};

/// Actions the form can request.
pub enum FormAction {
    None,
    AddTask,
    Attach(TaskId),
    Detach(TaskId),
}

fn required_label(ui: &mut Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        ui.label(RichText::new("*").color(theme::DANGER));
        ui.label(RichText::new(text).color(theme::TEXT_SECONDARY));
    });
}

/// Render the "Add Task" form. Text fields are edited in place on the
/// board's draft; everything that touches the collection or the dependency
/// pool is returned as an action.
pub fn show_task_form(board: &mut TaskBoard, ui: &mut Ui) -> FormAction {
    let mut action = FormAction::None;

    ui.label(RichText::new("Add Task").font(theme::font_section()).strong());
    ui.add_space(4.0);

    if let Some(err) = board.error() {
        ui.label(
            RichText::new(format!("{} {}", egui_phosphor::regular::WARNING, err))
                .color(theme::DANGER),
        );
        ui.add_space(2.0);
    }

    // Snapshot the pool before handing out a mutable borrow of the draft.
    let available: Vec<TaskId> = board.available_dependencies().collect();

    theme::card_frame().show(ui, |ui| {
        egui::Grid::new("task_form_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                let draft = &mut board.draft;

                required_label(ui, "Task ID");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.task_id)
                        .hint_text("e.g. 1")
                        .desired_width(theme::FIELD_WIDTH),
                );
                ui.end_row();

                required_label(ui, "Description");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.description)
                        .hint_text("What needs doing...")
                        .desired_width(theme::FIELD_WIDTH),
                );
                ui.end_row();

                required_label(ui, "Days Required to Complete");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.days_required)
                        .hint_text("e.g. 3")
                        .desired_width(theme::FIELD_WIDTH),
                );
                ui.end_row();

                required_label(ui, "Deadline");
                ui.horizontal(|ui| match draft.deadline.as_mut() {
                    Some(date) => {
                        ui.add(
                            egui_extras::DatePickerButton::new(date).id_salt("draft_deadline"),
                        );
                        if ui
                            .small_button(egui_phosphor::regular::X)
                            .on_hover_text("Clear deadline")
                            .clicked()
                        {
                            draft.deadline = None;
                        }
                    }
                    None => {
                        let pick = format!("{} Pick date", egui_phosphor::regular::CALENDAR_BLANK);
                        if ui.button(pick).clicked() {
                            draft.deadline = Some(chrono::Local::now().date_naive());
                        }
                    }
                });
                ui.end_row();

                ui.label(RichText::new("Dependencies").color(theme::TEXT_SECONDARY));
                ui.add_enabled_ui(!available.is_empty(), |ui| {
                    egui::ComboBox::from_id_salt("dependency_picker")
                        .selected_text("Select Dependency")
                        .width(theme::FIELD_WIDTH)
                        .show_ui(ui, |ui| {
                            for &id in &available {
                                if ui.selectable_label(false, id.to_string()).clicked() {
                                    action = FormAction::Attach(id);
                                }
                            }
                        });
                });
                ui.end_row();
            });

        if !board.draft.dependencies().is_empty() {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for &dep in board.draft.dependencies() {
                    ui.label(RichText::new(dep.to_string()).strong());
                    let remove = egui::Button::new(
                        RichText::new(format!("{} Remove", egui_phosphor::regular::X))
                            .size(11.0)
                            .color(theme::TEXT_SECONDARY),
                    );
                    if ui.add(remove).clicked() {
                        action = FormAction::Detach(dep);
                    }
                    ui.add_space(6.0);
                }
            });
        }

        ui.add_space(6.0);
        let add_btn = egui::Button::new(
            RichText::new(format!("{}  Add Task", egui_phosphor::regular::PLUS))
                .color(Color32::WHITE),
        )
        .fill(theme::ACCENT)
        .rounding(egui::Rounding::same(4.0));
        if ui.add_sized([120.0, 28.0], add_btn).clicked() {
            action = FormAction::AddTask;
        }
    });

    action
}
