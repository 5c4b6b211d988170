use crate::model::task::format_dependencies;
use crate::model::{Task, TaskId};
use crate::ui::theme;
use egui::{RichText, Ui};

/// Actions that the task list can request.
pub enum TaskListAction {
    None,
    Delete(TaskId),
}

/// Render the committed tasks, one card per task, each with a delete button.
pub fn show_task_list(tasks: &[Task], ui: &mut Ui) -> TaskListAction {
    let mut action = TaskListAction::None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("Tasks").font(theme::font_section()).strong());
        ui.label(
            RichText::new(format!("({})", tasks.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);

    if tasks.is_empty() {
        ui.label(RichText::new("No tasks yet.").italics().color(theme::TEXT_DIM));
        return action;
    }

    for task in tasks {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&task.description).strong());
                ui.label(
                    RichText::new(format!(
                        "(ID: {}, Days Required: {}, Deadline: {})",
                        task.task_id,
                        task.days_required,
                        task.deadline.format("%Y-%m-%d")
                    ))
                    .color(theme::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let del = egui::Button::new(
                        RichText::new(egui_phosphor::regular::TRASH).color(theme::DANGER),
                    )
                    .frame(false);
                    if ui.add(del).on_hover_text("Delete task").clicked() {
                        action = TaskListAction::Delete(task.task_id);
                    }
                });
            });
            ui.label(
                RichText::new(format!(
                    "Dependencies: {}",
                    format_dependencies(&task.dependencies)
                ))
                .size(11.5)
                .color(theme::TEXT_DIM),
            );
        });
        ui.add_space(4.0);
    }

    action
}
