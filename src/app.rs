use eframe::egui::{self, RichText};
use std::path::{Path, PathBuf};

use crate::config::UserConfig;
use crate::quiz::load_questions;
use crate::session::QuizSession;
use crate::ui::{QuizAction, QuizUi};

#[derive(Debug)]
enum AppState {
    FileSelection,
    QuizForm,
}

pub struct QuizApp {
    config: UserConfig,
    ui: QuizUi,
    session: Option<QuizSession>,
    current_file: Option<PathBuf>,
    load_error: Option<String>,
    state: AppState,
}

impl QuizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = UserConfig::load();
        let mut app = Self {
            config,
            ui: QuizUi::default(),
            session: None,
            current_file: None,
            load_error: None,
            state: AppState::FileSelection,
        };

        // A configured startup file skips the file-selection screen.
        if let Some(path) = app.config.questions_file.clone() {
            app.open_file(&path);
        }
        app
    }

    /// Loads a questions file and moves to the quiz form. Load failures
    /// are not fatal: they are logged and surfaced in the UI, and the
    /// quiz proceeds with zero questions.
    fn open_file(&mut self, path: &Path) {
        match load_questions(path) {
            Ok(questions) => {
                self.load_error = None;
                self.session = Some(QuizSession::new(questions));
            }
            Err(e) => {
                log::error!("Failed to load questions: {}", e);
                self.load_error = Some(e.to_string());
                self.session = Some(QuizSession::new(Vec::new()));
            }
        }

        self.current_file = Some(path.to_path_buf());
        self.state = AppState::QuizForm;

        if self.load_error.is_none() {
            if let Some(file_str) = path.to_str() {
                self.config.update_file_history(file_str.to_string());
                if let Err(e) = self.config.save() {
                    log::warn!("Failed to save config: {}", e);
                }
            }
        }
    }

    fn show_score_window(&mut self, ctx: &egui::Context) {
        let Some(session) = &self.session else { return };
        let score = session.score();
        let total = session.total();

        let mut open = self.ui.show_score;
        let mut dismissed = false;
        egui::Window::new("Quiz Result")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(RichText::new("Your Score:").strong());
                ui.label(format!("{} out of {}", score, total));
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        // The quiz resets for another attempt once the result is dismissed.
        if dismissed || !open {
            self.ui.show_score = false;
            if let Some(session) = &mut self.session {
                session.reset();
            }
        }
    }
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state {
                AppState::FileSelection => {
                    if let Some(path) = self.ui.show_file_selection(
                        ui,
                        &mut self.config.quiz_folder,
                        &self.config.file_history,
                    ) {
                        let path = if path.is_absolute() {
                            path
                        } else {
                            self.config.quiz_folder.join(path)
                        };
                        log::info!("Selected file: {}", path.display());
                        self.open_file(&path);
                    }

                    if ui.button("Settings").clicked() {
                        self.ui.show_settings = !self.ui.show_settings;
                    }

                    if self.ui.show_settings {
                        let mut show = true;
                        let mut quiz_folder = self.config.quiz_folder.clone();
                        let mut questions_file = self.config.questions_file.clone();
                        egui::Window::new("Settings").open(&mut show).show(ctx, |ui| {
                            self.ui.show_settings(ui, &mut quiz_folder, &mut questions_file);
                        });
                        if quiz_folder != self.config.quiz_folder
                            || questions_file != self.config.questions_file
                        {
                            self.config.quiz_folder = quiz_folder;
                            self.config.questions_file = questions_file;
                            if let Err(e) = self.config.save() {
                                log::warn!("Failed to save config: {}", e);
                            }
                        }
                        self.ui.show_settings = show;
                    }
                }
                AppState::QuizForm => {
                    if let Some(error) = &self.load_error {
                        ui.label(RichText::new(error).color(egui::Color32::RED));
                    }

                    if let Some(session) = &self.session {
                        let (selections, action) = self.ui.show_quiz_form(ui, session);

                        if let Some(session) = &mut self.session {
                            for (id, option) in selections {
                                session.record_selection(id, option);
                            }
                            match action {
                                QuizAction::Submit => {
                                    session.submit();
                                    self.ui.show_score = true;
                                }
                                QuizAction::Reset => {
                                    session.reset();
                                }
                                QuizAction::ReturnToFileSelection => {
                                    self.state = AppState::FileSelection;
                                    self.session = None;
                                    self.current_file = None;
                                    self.load_error = None;
                                }
                                QuizAction::None => {}
                            }
                        }
                    }

                    if self.ui.show_score {
                        self.show_score_window(ctx);
                    }
                }
            }
        });
    }
}
