use crate::model::task::{format_annotation, format_dependencies};
use crate::model::ScheduledTask;
use crate::ui::theme;
use egui::{RichText, Ui};

/// Returns true when the user clicked "Back".
fn back_button(ui: &mut Ui) -> bool {
    let text = format!("{}  Back", egui_phosphor::regular::ARROW_LEFT);
    ui.add_sized([90.0, 28.0], egui::Button::new(text)).clicked()
}

fn field(ui: &mut Ui, name: &str, value: impl Into<String>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{name}:")).strong());
        ui.label(value.into());
    });
}

/// Render the task list returned by the backend. Returns true on "Back".
pub fn show_results(tasks: &[ScheduledTask], ui: &mut Ui) -> bool {
    let back = back_button(ui);
    ui.add_space(8.0);
    ui.label(RichText::new("Task Details").font(theme::font_title()).strong());
    ui.add_space(6.0);

    if tasks.is_empty() {
        ui.label(
            RichText::new("The backend returned no tasks.")
                .italics()
                .color(theme::TEXT_DIM),
        );
    }

    for task in tasks {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            field(ui, "Task ID", task.task_id.to_string());
            field(ui, "Description", task.description.as_str());
            field(ui, "Days Required", task.days_required.to_string());
            field(ui, "Deadline", task.deadline.as_str());
            field(ui, "Dependencies", format_dependencies(&task.dependencies));
            for (key, value) in &task.annotations {
                field(ui, key, format_annotation(value));
            }
        });
        ui.add_space(4.0);
    }

    back
}

/// Render a submission error. Returns true on "Back".
pub fn show_error(message: &str, ui: &mut Ui) -> bool {
    let back = back_button(ui);
    ui.add_space(8.0);
    ui.label(
        RichText::new(format!("{} {}", egui_phosphor::regular::WARNING, message))
            .size(14.0)
            .color(theme::DANGER),
    );
    back
}
