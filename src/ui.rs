use egui::{Color32, RichText, Ui};
use std::fs;
use std::path::PathBuf;

use crate::session::{AnswerStatus, QuizSession};

pub struct QuizUi {
    pub show_settings: bool,
    pub show_score: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum QuizAction {
    None,
    Submit,
    Reset,
    ReturnToFileSelection,
}

impl Default for QuizUi {
    fn default() -> Self {
        Self {
            show_settings: false,
            show_score: false,
        }
    }
}

impl QuizUi {
    pub fn show_file_selection(
        &mut self,
        ui: &mut Ui,
        quiz_folder: &mut PathBuf,
        file_history: &[(String, i64)],
    ) -> Option<PathBuf> {
        let mut selected_file = None;

        ui.heading("Select Questions File");
        ui.separator();

        if !file_history.is_empty() {
            ui.label("Recent Files:");
            for (file, _) in file_history {
                if ui.button(file).clicked() {
                    selected_file = Some(PathBuf::from(file));
                }
            }
            ui.separator();
        }

        ui.label(format!("Current Folder: {}", quiz_folder.display()));
        if ui.button("Change Folder").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .set_directory(quiz_folder.clone())
                .pick_folder()
            {
                *quiz_folder = path;
            }
        }

        // List the question files in the current folder
        if let Ok(entries) = fs::read_dir(&quiz_folder) {
            ui.add_space(10.0);
            ui.label("Available Question Files:");
            ui.separator();

            let mut files: Vec<_> = entries
                .filter_map(Result::ok)
                .filter(|entry| {
                    entry
                        .path()
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .map(|ext| ext.eq_ignore_ascii_case("txt"))
                        .unwrap_or(false)
                })
                .collect();
            files.sort_by_key(|entry| entry.file_name());

            for entry in files {
                let file_name = entry.file_name();
                if let Some(name) = file_name.to_str() {
                    if ui.button(name).clicked() {
                        selected_file = Some(entry.path());
                    }
                }
            }
        }

        selected_file
    }

    pub fn show_settings(
        &mut self,
        ui: &mut Ui,
        quiz_folder: &mut PathBuf,
        questions_file: &mut Option<PathBuf>,
    ) {
        ui.heading("Settings");
        ui.separator();

        ui.label("Quiz Folder:");
        ui.horizontal(|ui| {
            ui.label(quiz_folder.display().to_string());
            if ui.button("Browse").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .set_directory(quiz_folder.clone())
                    .pick_folder()
                {
                    *quiz_folder = path;
                }
            }
        });

        ui.add_space(10.0);
        ui.label("Startup Questions File (loaded automatically when set):");
        ui.horizontal(|ui| {
            match questions_file {
                Some(path) => ui.label(path.display().to_string()),
                None => ui.label("none"),
            };
            if ui.button("Pick File").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .set_directory(quiz_folder.clone())
                    .add_filter("Question files", &["txt"])
                    .pick_file()
                {
                    *questions_file = Some(path);
                }
            }
            if questions_file.is_some() && ui.button("Clear").clicked() {
                *questions_file = None;
            }
        });
    }

    /// Renders every question in a scrollable form. Returns the selection
    /// events made this frame (question id, chosen option) and the button
    /// action, for the caller to feed back into the session.
    pub fn show_quiz_form(
        &mut self,
        ui: &mut Ui,
        session: &QuizSession,
    ) -> (Vec<(usize, String)>, QuizAction) {
        let mut selections = Vec::new();
        let mut action = QuizAction::None;

        ui.heading("Quiz");
        ui.separator();

        if session.is_empty() {
            ui.label("No questions loaded.");
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for question in session.questions() {
                    ui.add_space(10.0);
                    ui.label(RichText::new(&question.text).size(14.0).strong());

                    let current = session.selection(question.id);
                    for option in session.display_options(question.id) {
                        let checked = current.map(|s| s == option).unwrap_or(false);
                        if ui.radio(checked, option).clicked() {
                            selections.push((question.id, option.clone()));
                        }
                    }

                    match session.status(question.id) {
                        AnswerStatus::Unanswered => {}
                        AnswerStatus::Correct => {
                            ui.label(RichText::new("\u{2714} Correct").color(Color32::GREEN));
                        }
                        AnswerStatus::Incorrect => {
                            ui.label(RichText::new("\u{2716} Incorrect").color(Color32::RED));
                        }
                        AnswerStatus::NoAnswer => {
                            ui.label(
                                RichText::new("\u{2716} No Answer Selected").color(Color32::RED),
                            );
                        }
                    }
                }
            });

        ui.add_space(20.0);
        ui.separator();
        ui.horizontal(|ui| {
            if !session.is_empty() && ui.button("Submit").clicked() {
                action = QuizAction::Submit;
            }
            if !session.is_empty() && ui.button("Reset").clicked() {
                action = QuizAction::Reset;
            }
            if ui.button("Return to File Selection").clicked() {
                action = QuizAction::ReturnToFileSelection;
            }
        });

        (selections, action)
    }
}
