//! Settings screen layout derived from [`SettingsState`].

use std::fmt::Write as _;

use crate::ui::settings::state::{PickerField, SettingsState};

pub const DATA_SAVER_NOTE: &str = "When data saver is enabled, images will load in a lower \
resolution by default. Downloads will always be in the maximum resolution.";

pub const EXCLUDE_AI_SUMMARY: &str = "Attempt to remove AI-generated images by excluding the \
'ai_generated' tag in search queries by default.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowControl {
    /// Opens a single-choice picker.
    Picker(PickerField),
    Switch(bool),
    /// Opens the download directory prompt.
    StoragePrompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsRow {
    Heading(&'static str),
    Item {
        title: &'static str,
        summary: Option<String>,
        control: RowControl,
    },
}

/// One option line of an open picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub label: &'static str,
    pub selected: bool,
}

impl SettingsState {
    pub fn rows(&self) -> Vec<SettingsRow> {
        let prefs = &self.preferences;
        let storage_summary = if prefs.storage_location.is_unset() {
            "Tap to set".to_string()
        } else {
            prefs.storage_location.to_string()
        };

        vec![
            SettingsRow::Heading("Data saver"),
            SettingsRow::Item {
                title: "Data saver",
                summary: Some(prefs.data_saver.description().to_string()),
                control: RowControl::Picker(PickerField::DataSaver),
            },
            SettingsRow::Heading("Downloads"),
            SettingsRow::Item {
                title: "Save downloads to",
                summary: Some(storage_summary),
                control: RowControl::StoragePrompt,
            },
            SettingsRow::Heading("Searching"),
            SettingsRow::Item {
                title: "Image source",
                summary: Some(prefs.image_source.description().to_string()),
                control: RowControl::Picker(PickerField::ImageSource),
            },
            SettingsRow::Item {
                title: "Hide AI-generated images",
                summary: Some(EXCLUDE_AI_SUMMARY.to_string()),
                control: RowControl::Switch(prefs.exclude_ai),
            },
        ]
    }

    /// Options of the open picker, or empty when none is open.
    pub fn picker_options(&self) -> Vec<PickerOption> {
        let Some(field) = self.picker else {
            return Vec::new();
        };
        let selected = field.selected_index(&self.preferences);
        field
            .options()
            .into_iter()
            .enumerate()
            .map(|(i, label)| PickerOption {
                label,
                selected: i == selected,
            })
            .collect()
    }

    /// Plain-text rendering of the screen.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for row in self.rows() {
            match row {
                SettingsRow::Heading(text) => {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    let _ = writeln!(out, "[{text}]");
                }
                SettingsRow::Item {
                    title,
                    summary,
                    control,
                } => {
                    let marker = match control {
                        RowControl::Switch(true) => " (on)",
                        RowControl::Switch(false) => " (off)",
                        _ => "",
                    };
                    let _ = writeln!(out, "  {title}{marker}");
                    if let Some(summary) = summary {
                        let _ = writeln!(out, "    {summary}");
                    }
                }
            }
        }
        let _ = writeln!(out, "\n{DATA_SAVER_NOTE}");
        out
    }
}
