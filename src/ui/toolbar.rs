use crate::app::TaskPlannerApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};

/// Render the top menu bar.
pub fn show_toolbar(app: &mut TaskPlannerApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  Tasks  ").font(theme::font_menu()), |ui| {
            let can_submit = app.screen.is_editing() && !app.submitter.is_pending();
            if ui
                .add_enabled(can_submit, egui::Button::new("  Submit      Ctrl+Enter"))
                .clicked()
            {
                app.submit(ui.ctx());
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("  Open Config Folder").clicked() {
                app.open_config_folder();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned backend endpoint
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let endpoint = match app.submitter.endpoint() {
                Some(url) => url.to_string(),
                None => "no backend configured".to_string(),
            };
            ui.label(RichText::new(endpoint).size(11.0).weak());
        });
    });
}
