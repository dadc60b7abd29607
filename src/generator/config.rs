//! Project configuration (thconfig) composition

use crate::settings::{ExportType, PaperSize, Settings};

use super::LAYOUT_BLOCK_NAME;

/// Compose the thconfig document
///
/// `layout_file_name` must match the name the layout document is saved
/// under; Therion reads it through the `input` line.
pub fn generate_config(settings: &Settings, layout_file_name: &str) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push("encoding utf-8".to_string());

    let sources: Vec<String> = settings
        .source_files()
        .map(|f| format!("source {}", f.file_name))
        .collect();
    sections.push(if sources.is_empty() {
        // No survey data attached; reference the conventional entry file
        "source main.th".to_string()
    } else {
        sources.join("\n")
    });

    sections.push(format!("select {}", settings.select_name));
    sections.push(format!("input {layout_file_name}"));

    let tasks: Vec<String> = settings
        .export_types
        .iter()
        .filter_map(|t| export_task(*t, settings.paper_size))
        .collect();
    if !tasks.is_empty() {
        sections.push(tasks.join("\n"));
    }

    let mut document = sections.join("\n\n");
    document.push('\n');
    document
}

fn export_task(export: ExportType, paper: PaperSize) -> Option<String> {
    match export {
        ExportType::Map => Some(format!(
            "export map -layout {LAYOUT_BLOCK_NAME} -layout {} -o map.pdf",
            paper.layout_name()
        )),
        ExportType::Model => Some("export model -o model.lox".to_string()),
        // Atlas has no task template; it contributes no line
        ExportType::Atlas => None,
    }
}
