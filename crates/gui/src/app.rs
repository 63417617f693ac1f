//! Application context: startup sequence plus the main recipe window.

use std::sync::Arc;
use std::time::Instant;

use eframe::egui;
use mealdb_core::api::search_query;
use mealdb_core::startup::{StartupPhase, StartupSequence};
use mealdb_core::MealApi;

use crate::splash;
use crate::worker::{Lookup, LookupState, LookupStatus};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xFA, 0xF3, 0xE0);
const REPORT_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xF7, 0xE6);
const THUMBNAIL_SIZE: [f32; 2] = [300.0, 200.0];

pub const MAIN_TITLE: &str = "Meal Recipe App";

// ─── Main app ───────────────────────────────────────────────────

/// Owns the window state; the API client is injected by `main`.
pub struct MealApp {
    api: Arc<dyn MealApi>,
    startup: StartupSequence,
    /// Dropped once the main window is shown.
    splash: Option<egui::TextureHandle>,
    shell: Option<Shell>,
}

impl MealApp {
    pub fn new(cc: &eframe::CreationContext<'_>, api: Arc<dyn MealApi>) -> anyhow::Result<Self> {
        let splash = splash::load_splash(&cc.egui_ctx)?;
        Ok(Self {
            api,
            startup: StartupSequence::default(),
            splash: Some(splash),
            shell: None,
        })
    }

    fn reveal_main(&mut self, ctx: &egui::Context) {
        self.splash = None;
        ctx.send_viewport_cmd(egui::ViewportCommand::Decorations(true));
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(MAIN_TITLE.to_string()));
        self.shell = Some(Shell::new(ctx, self.api.clone()));
    }
}

impl eframe::App for MealApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if self.startup.tick(now) == Some(StartupPhase::MainShown) {
            self.reveal_main(ctx);
        }

        match (&mut self.shell, &self.splash) {
            (Some(shell), _) => shell.show(ctx, &self.api),
            (None, Some(texture)) => {
                splash::show_splash(ctx, texture);
                // Single-shot timer: wake up exactly when the splash expires.
                if let Some(remaining) = self.startup.remaining(now) {
                    ctx.request_repaint_after(remaining);
                }
            }
            (None, None) => {}
        }
    }
}

// ─── Recipe window ──────────────────────────────────────────────

struct Shell {
    query: String,
    categories: Vec<String>,
    selected_category: String,
    report: String,
    thumbnail: Option<egui::TextureHandle>,
    lookups: LookupState,
}

impl Shell {
    fn new(ctx: &egui::Context, api: Arc<dyn MealApi>) -> Self {
        ctx.set_visuals(egui::Visuals::light());
        let lookups = LookupState::new();
        lookups.load_categories(api, Some(ctx.clone()));
        Self {
            query: String::new(),
            categories: Vec::new(),
            selected_category: String::new(),
            report: String::new(),
            thumbnail: None,
            lookups,
        }
    }

    fn dispatch(&self, ctx: &egui::Context, api: &Arc<dyn MealApi>, lookup: Lookup) {
        self.lookups.dispatch(api.clone(), lookup, Some(ctx.clone()));
    }

    /// Pull finished work from the worker threads into the widgets.
    fn apply_updates(&mut self, ctx: &egui::Context) {
        if let Some(names) = self.lookups.take_categories() {
            self.categories = names;
        }
        if let Some(presentation) = self.lookups.take_result() {
            self.report = presentation.text().to_string();
            // Not-found keeps whatever image was shown before.
            if let Some(thumbnail) = &presentation.thumbnail {
                self.thumbnail = Some(splash::texture_from_rgba(
                    ctx,
                    "meal-thumbnail",
                    thumbnail.image(),
                ));
            }
        }
    }

    fn show(&mut self, ctx: &egui::Context, api: &Arc<dyn MealApi>) {
        self.apply_updates(ctx);
        if self.lookups.is_running() {
            ctx.request_repaint();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(BACKGROUND).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("Meal Recipe").size(30.0).strong());
                    ui.add_space(10.0);

                    self.show_controls(ui, ctx, api);
                    ui.add_space(6.0);
                    show_status(ui, &self.lookups.status());

                    if let Some(texture) = &self.thumbnail {
                        ui.add_space(6.0);
                        ui.image(egui::load::SizedTexture::new(texture.id(), THUMBNAIL_SIZE));
                    }
                    ui.add_space(10.0);
                });

                egui::Frame::default()
                    .fill(REPORT_BACKGROUND)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                ui.add(
                                    egui::TextEdit::multiline(&mut self.report.as_str())
                                        .desired_width(f32::INFINITY)
                                        .desired_rows(15)
                                        .frame(false),
                                );
                            });
                    });
            });
    }

    fn show_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, api: &Arc<dyn MealApi>) {
        ui.horizontal(|ui| {
            let entry = ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("Meal name")
                    .desired_width(360.0),
            );
            let submitted = entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Search Meal").clicked() || submitted {
                if let Some(query) = search_query(&self.query) {
                    self.dispatch(ctx, api, Lookup::Search(query.to_string()));
                }
            }
            if self.lookups.is_running() {
                ui.spinner();
            }
        });

        ui.add_space(6.0);
        if ui.button("Get Random Meal").clicked() {
            self.dispatch(ctx, api, Lookup::Random);
        }
        ui.add_space(6.0);

        let mut chosen = None;
        let selected_text = if self.selected_category.is_empty() {
            "Choose a category"
        } else {
            self.selected_category.as_str()
        };
        egui::ComboBox::from_id_salt("category")
            .selected_text(selected_text)
            .width(220.0)
            .show_ui(ui, |ui| {
                for name in &self.categories {
                    if ui
                        .selectable_label(self.selected_category == *name, name.as_str())
                        .clicked()
                    {
                        chosen = Some(name.clone());
                    }
                }
            });
        if let Some(category) = chosen {
            self.selected_category = category.clone();
            self.dispatch(ctx, api, Lookup::Category(category));
        }
    }
}

fn show_status(ui: &mut egui::Ui, status: &LookupStatus) {
    match status {
        LookupStatus::Idle => {}
        LookupStatus::Running(msg) => {
            ui.weak(msg);
        }
        LookupStatus::Failed(msg) => {
            ui.colored_label(egui::Color32::RED, msg);
        }
    }
}
