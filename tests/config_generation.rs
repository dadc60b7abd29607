//! Integration tests for the generated thconfig document

use pretty_assertions::assert_eq;

use thgen::{generate_config, ExportType, FileKind, PaperSize, Settings, UploadedFile};

fn upload(name: &str, kind: FileKind) -> UploadedFile {
    UploadedFile {
        id: name.to_string(),
        file_name: name.to_string(),
        kind,
        content: None,
    }
}

#[test]
fn test_complete_document() {
    let mut settings = Settings::default();
    settings.select_name = "s1".to_string();
    settings.export_types = vec![ExportType::Map];
    settings.uploaded_files = vec![upload("cave.th", FileKind::Source)];

    let config = generate_config(&settings, "layout.thl");

    assert_eq!(
        config,
        "encoding utf-8\n\
         \n\
         source cave.th\n\
         \n\
         select s1\n\
         \n\
         input layout.thl\n\
         \n\
         export map -layout custom_layout -layout A4_Layout -o map.pdf\n"
    );
}

#[test]
fn test_non_source_uploads_are_skipped() {
    let mut settings = Settings::default();
    settings.uploaded_files = vec![
        upload("notes.txt", FileKind::Text),
        upload("entrance.th2", FileKind::Drawing),
        upload("old_thconfig", FileKind::Config),
    ];

    let config = generate_config(&settings, "layout.thl");
    assert!(config.contains("source main.th"));
    assert!(!config.contains("notes.txt"));
    assert!(!config.contains("entrance.th2"));
}

#[test]
fn test_map_export_tracks_paper_size() {
    let mut settings = Settings::default();
    settings.export_types = vec![ExportType::Map];
    settings.paper_size = PaperSize::A1;

    let config = generate_config(&settings, "layout.thl");
    assert!(config.contains("export map -layout custom_layout -layout A1_Layout -o map.pdf"));
}

#[test]
fn test_all_export_kinds_together() {
    let mut settings = Settings::default();
    settings.export_types = vec![ExportType::Atlas, ExportType::Map, ExportType::Model];

    let config = generate_config(&settings, "layout.thl");
    let map = config.find("export map").expect("map task");
    let model = config.find("export model -o model.lox").expect("model task");
    assert!(map < model, "tasks keep the requested order");
    // Atlas is recognized input but has no task template
    assert!(!config.contains("atlas"));
}

#[test]
fn test_repeat_generation_is_identical() {
    let mut settings = Settings::default();
    settings.uploaded_files = vec![
        upload("a.th", FileKind::Source),
        upload("b.th", FileKind::Source),
    ];
    settings.export_types = vec![ExportType::Map, ExportType::Model];

    assert_eq!(
        generate_config(&settings, "layout.thl"),
        generate_config(&settings, "layout.thl")
    );
}
