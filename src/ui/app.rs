use eframe::{egui, glow};

use super::controller;
use crate::{display::DisplayText, midi::MidirHost};

pub struct App {
    title: String,
    display: DisplayText,
    controller: Option<controller::Handle>,
}

impl App {
    pub fn new(title: &str, client_name: &str, cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let display = DisplayText::new(Some(cc.egui_ctx.clone()));
        let controller = controller::Spawner {
            host: MidirHost::new(client_name),
            sink: display.clone(),
        }
        .spawn()
        .map_err(|err| log::error!("{err:#}"))
        .ok();

        Self {
            title: title.to_string(),
            display,
            controller,
        }
    }

    pub fn shutdown(&mut self) {
        if let Some(ref mut controller) = self.controller {
            controller.shutdown();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.title.as_str());
            ui.add_space(10f32);

            let text = self.display.text().clone();
            ui.group(|ui| {
                ui.label(egui::RichText::new(text).monospace());
            });
        });
    }

    fn on_exit(&mut self, _gl: &glow::Context) {
        self.shutdown();
    }
}
