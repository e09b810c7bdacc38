//! Main view rendering (heading, clock, readout, entries, controls)

use super::App;
use crate::constants::APP_TITLE;
use crate::theme;
use crate::ui::components::{
    action_button, armed_caption, describe_alarm, describe_timer, time_input, time_readout,
};
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub fn render_main(&mut self, ctx: &egui::Context) {
        let alert = self.controller.alert_color();

        egui::CentralPanel::default()
            .frame(theme::root_frame(alert))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{} {} {}", icons::TIMER, APP_TITLE, icons::ALARM))
                            .font(egui::FontId::monospace(theme::FONT_HEADING))
                            .color(theme::TEXT_HEADING)
                            .strong(),
                    );
                    ui.add_space(theme::SPACING_MD);

                    theme::clock_frame(alert).show(ui, |ui| {
                        time_readout(ui, self.controller.clock_text(), theme::FONT_CLOCK, theme::TEXT_CLOCK);
                    });
                    ui.add_space(theme::SPACING_LG);

                    theme::readout_frame(alert).show(ui, |ui| {
                        time_readout(
                            ui,
                            self.controller.elapsed_text(),
                            theme::FONT_ELAPSED,
                            theme::TEXT_ELAPSED,
                        );
                    });
                    ui.add_space(theme::SPACING_LG);

                    self.render_entries(ui);
                    ui.add_space(theme::SPACING_LG);

                    self.render_controls(ui);
                });
            });
    }

    /// Timer and alarm entries, each with its Set button and armed value
    fn render_entries(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("entries")
            .num_columns(3)
            .spacing([theme::SPACING_SM, theme::SPACING_SM])
            .show(ui, |ui| {
                time_input(ui, &mut self.timer_input);
                if action_button(ui, icons::HOURGLASS, "Set Timer", theme::BTN_TIMER, false) {
                    self.on_set_timer();
                }
                armed_caption(ui, &describe_timer(self.controller.timer_set()));
                ui.end_row();

                time_input(ui, &mut self.alarm_input);
                if action_button(ui, icons::ALARM, "Set Alarm", theme::BTN_ALARM, false) {
                    self.on_set_alarm();
                }
                armed_caption(ui, &describe_alarm(self.controller.alarm_time()));
                ui.end_row();
            });
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("controls")
            .num_columns(3)
            .spacing([theme::SPACING_MD, theme::SPACING_MD])
            .show(ui, |ui| {
                if action_button(ui, icons::PLAY, "Start", theme::BTN_START, true) {
                    self.on_start();
                }
                if action_button(ui, icons::PAUSE, "Stop", theme::BTN_STOP, true) {
                    self.on_stop();
                }
                if action_button(ui, icons::ARROW_COUNTER_CLOCKWISE, "Reset", theme::BTN_RESET, true) {
                    self.on_reset();
                }
                ui.end_row();
            });
    }
}
