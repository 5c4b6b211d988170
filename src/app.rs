use std::path::PathBuf;

use crate::io::Submitter;
use crate::model::{TaskBoard, TaskId};
use crate::screen::Screen;
use crate::ui;

/// Main application state.
pub struct TaskPlannerApp {
    pub board: TaskBoard,
    pub screen: Screen,
    pub submitter: Submitter,
    pub config_dir: Option<PathBuf>,

    // Dialog state
    pub show_about: bool,

    // Status message
    pub status_message: String,
}

impl TaskPlannerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        submitter: Submitter,
        config_dir: Option<PathBuf>,
    ) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self::with_submitter(submitter, config_dir)
    }

    /// State without any egui setup.
    pub fn with_submitter(submitter: Submitter, config_dir: Option<PathBuf>) -> Self {
        let status_message = match submitter.endpoint() {
            Some(_) => "Ready".to_string(),
            None => "Ready (no backend endpoint configured)".to_string(),
        };
        Self {
            board: TaskBoard::new(),
            screen: Screen::Editing,
            submitter,
            config_dir,
            show_about: false,
            status_message,
        }
    }

    // --- Task operations ---

    pub fn add_task(&mut self) {
        match self.board.add_task() {
            Ok(id) => self.status_message = format!("Task {} added", id),
            Err(e) => self.status_message = format!("Task not added: {}", e),
        }
    }

    pub fn delete_task(&mut self, id: TaskId) {
        self.board.delete_task(id);
        self.status_message = format!("Task {} deleted", id);
    }

    pub fn attach_dependency(&mut self, id: TaskId) {
        if self.board.attach(id) {
            self.status_message = format!("Dependency {} attached", id);
        }
    }

    pub fn detach_dependency(&mut self, id: TaskId) {
        if self.board.detach(id) {
            self.status_message = format!("Dependency {} removed", id);
        }
    }

    // --- Submission ---

    pub fn submit(&mut self, ctx: &egui::Context) {
        let tasks = self.board.tasks().to_vec();
        let count = tasks.len();
        if self.submitter.submit(tasks, Some(ctx.clone())) {
            self.status_message = format!("Submitting {} tasks...", count);
        }
    }

    /// Pick up a finished submission, if any, and switch views.
    pub fn poll_submission(&mut self) {
        if let Some(outcome) = self.submitter.poll() {
            self.status_message = match &outcome {
                Ok(tasks) => format!("Backend returned {} tasks", tasks.len()),
                Err(e) => format!("Submission failed: {}", e),
            };
            self.screen = Screen::from_outcome(outcome);
        }
    }

    pub fn back(&mut self) {
        self.screen.back();
        self.status_message = "Ready".to_string();
    }

    pub fn open_config_folder(&mut self) {
        let Some(dir) = self.config_dir.clone() else {
            self.status_message = "No config folder on this platform".to_string();
            return;
        };
        if let Err(e) = std::fs::create_dir_all(&dir).and_then(|_| open::that(&dir)) {
            tracing::warn!(path = %dir.display(), error = %e, "could not open config folder");
            self.status_message = format!("Could not open config folder: {}", e);
        }
    }

    fn show_editor(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Task Manager")
                .font(ui::theme::font_title())
                .strong(),
        );
        ui.add_space(8.0);

        match ui::task_form::show_task_form(&mut self.board, ui) {
            ui::task_form::FormAction::AddTask => self.add_task(),
            ui::task_form::FormAction::Attach(id) => self.attach_dependency(id),
            ui::task_form::FormAction::Detach(id) => self.detach_dependency(id),
            ui::task_form::FormAction::None => {}
        }

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(6.0);

        match ui::task_list::show_task_list(self.board.tasks(), ui) {
            ui::task_list::TaskListAction::Delete(id) => self.delete_task(id),
            ui::task_list::TaskListAction::None => {}
        }

        ui.add_space(12.0);
        let pending = self.submitter.is_pending();
        let label = if pending {
            format!("{}  Submitting...", egui_phosphor::regular::HOURGLASS)
        } else {
            format!("{}  Submit", egui_phosphor::regular::PAPER_PLANE_TILT)
        };
        let submit_btn = egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
            .fill(ui::theme::SUCCESS)
            .rounding(egui::Rounding::same(4.0));
        if ui
            .add_enabled_ui(!pending, |ui| ui.add_sized([120.0, 30.0], submit_btn))
            .inner
            .clicked()
        {
            self.submit(ui.ctx());
        }
    }
}

/// Ctrl+Enter, or Cmd+Enter on macOS.
fn submit_shortcut_pressed(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter))
}

impl eframe::App for TaskPlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        self.poll_submission();

        // Handle keyboard shortcuts outside closures to avoid borrow issues
        if submit_shortcut_pressed(ctx) && self.screen.is_editing() {
            self.submit(ctx);
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Tasks: {}", self.board.tasks().len()))
                                .font(ui::theme::font_status())
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        let mut go_back = false;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_DARK)
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_max_width(ui::theme::CONTENT_MAX_WIDTH);
                        if self.screen.is_editing() {
                            self.show_editor(ui);
                            return;
                        }
                        match &self.screen {
                            Screen::Editing => {}
                            Screen::Results(tasks) => {
                                go_back = ui::result_view::show_results(tasks, ui);
                            }
                            Screen::Failed(message) => {
                                go_back = ui::result_view::show_error(message, ui);
                            }
                        }
                    });
            });
        if go_back {
            self.back();
        }

        // Dialogs
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
