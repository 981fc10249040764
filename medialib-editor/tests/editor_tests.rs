mod common;

use common::{editor, fixture, format, init_tracing, type_id, FEAR, FORMAT, FULL_TOOLBAR};
use medialib_document::{Block, Document};
use medialib_editor::{Editor, EditorCommand, EditorError, MediaEmbedPlugin};
use medialib_history::{Command, History, HistoryError};
use medialib_library::{ChosenItem, DialogOutcome, LibraryError, SelectionChange};
use medialib_policy::{AllowList, EditorConfig, FilterFormat, MediaEmbedSettings, ToolbarItem};
use medialib_types::{Alignment, ViewModeId};
use pretty_assertions::assert_eq;

fn chosen(item: &medialib_types::CatalogItem) -> ChosenItem {
    ChosenItem {
        item: item.clone(),
        view_mode: ViewModeId::default_mode(),
    }
}

// ── Configuration ────────────────────────────────────────────────

#[test]
fn invalid_pair_is_rejected_with_every_violation() {
    let fx = fixture();
    let config = EditorConfig::new("other_format", &[ToolbarItem::DrupalMedia]);
    let disabled = FilterFormat::new(FORMAT, "Test format");
    let err = Editor::from_config(config, &disabled, fx.catalog(), "")
        .err()
        .unwrap();
    match err {
        EditorError::InvalidPair(violations) => assert_eq!(violations.len(), 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn disabled_filter_leaves_insert_media_disabled() {
    let fx = fixture();
    let format = FilterFormat::new(FORMAT, "Test format");
    let editor = Editor::from_config(
        EditorConfig::new(FORMAT, &[ToolbarItem::SourceEditing]),
        &format,
        fx.catalog(),
        "<p>Hi</p>",
    )
    .unwrap();
    assert!(editor.media().is_none());
    assert!(!editor.is_enabled(EditorCommand::InsertMedia));
    assert!(editor.is_enabled(EditorCommand::Source));
    assert_eq!(editor.data(), "<p>Hi</p>");
}

#[test]
fn fresh_editor_has_nothing_to_undo() {
    let fx = fixture();
    let editor = editor(&fx, &[]);
    assert!(editor.is_enabled(EditorCommand::InsertMedia));
    assert!(!editor.is_enabled(EditorCommand::Undo));
    assert!(!editor.is_enabled(EditorCommand::Redo));
}

// ── Insertion (Scenario B) ───────────────────────────────────────

#[tokio::test]
async fn inserting_selected_media_writes_embed_markup() {
    init_tracing();
    let fx = fixture();
    let mut editor = editor(&fx, &[]);

    let mut session = editor.open_media_library().await.unwrap();
    assert_eq!(session.active_type(), &type_id("image"));
    assert_eq!(session.items()[0].name, FEAR);
    assert_eq!(session.click(&fx.fear.id).unwrap(), SelectionChange::Selected);
    let outcome = session.insert().unwrap();

    assert_eq!(editor.finish_media_library(outcome).unwrap(), Some(0));
    assert_eq!(
        editor.data(),
        format!(
            r#"<drupal-media data-entity-type="media" data-entity-uuid="{}" data-align="center"></drupal-media>"#,
            fx.fear.id
        )
    );
    let widgets = editor.widgets();
    assert_eq!(widgets.len(), 1);
    assert_eq!(widgets[0].referenced_item_id, fx.fear.id);
    assert_eq!(widgets[0].view_mode, None);
}

#[tokio::test]
async fn cancelled_dialog_changes_nothing() {
    let fx = fixture();
    let mut editor = editor(&fx, &[]);
    let session = editor.open_media_library().await.unwrap();
    assert_eq!(session.cancel(), DialogOutcome::Cancelled);
    assert_eq!(editor.finish_media_library(DialogOutcome::Cancelled).unwrap(), None);
    assert!(editor.document().is_empty());
    assert!(editor.history().is_empty());
}

#[tokio::test]
async fn insert_lands_at_cursor() {
    let fx = fixture();
    let format = format(&[]);
    let mut editor = Editor::from_config(
        EditorConfig::new(FORMAT, FULL_TOOLBAR),
        &format,
        fx.catalog(),
        "<p>Before</p>",
    )
    .unwrap();
    editor.set_cursor(Some(0));
    let index = editor.insert_media(&chosen(&fx.baron), Some(Alignment::Left)).unwrap();
    assert_eq!(index, 0);
    assert!(editor.data().ends_with("</drupal-media><p>Before</p>"));
    assert!(editor.data().contains(r#"data-align="left""#));
}

#[tokio::test]
async fn view_mode_is_written_only_when_there_is_a_choice() {
    let fx = fixture();
    let format = FilterFormat::new(FORMAT, "Test format").with_media_embed(
        MediaEmbedSettings::enabled().with_view_modes("view_mode_1", ["view_mode_1", "view_mode_2"]),
    );
    let mut editor =
        Editor::from_config(EditorConfig::new(FORMAT, FULL_TOOLBAR), &format, fx.catalog(), "")
            .unwrap();

    let mut session = editor.open_media_library().await.unwrap();
    // No default type: the first tab in display order is `arrakis`.
    assert_eq!(session.active_type(), &type_id("arrakis"));
    session.click(&fx.baron.id).unwrap();
    editor.finish_media_library(session.insert().unwrap()).unwrap();

    assert!(editor.data().contains(r#"data-view-mode="view_mode_1""#));
}

#[test]
fn disallowed_type_cannot_be_inserted() {
    let fx = fixture();
    let mut editor = editor(&fx, &["image"]);
    let err = editor.insert_media(&chosen(&fx.baron), None).unwrap_err();
    assert!(matches!(err, EditorError::TypeNotAllowed(t) if t == type_id("arrakis")));
    assert!(editor.document().is_empty());
}

#[tokio::test]
async fn unavailable_catalog_fails_to_open() {
    let fx = fixture();
    let editor = editor(&fx, &[]);
    fx.catalog.set_offline(true);
    let err = editor.open_media_library().await.unwrap_err();
    assert!(matches!(
        err,
        EditorError::Library(LibraryError::CatalogUnavailable(_))
    ));
}

#[tokio::test]
async fn plugin_built_from_allow_list_directly() {
    let fx = fixture();
    let plugin = MediaEmbedPlugin::new(
        fx.catalog(),
        AllowList::allow_all().with_enabled([type_id("arrakis")]),
    );
    let mut editor = Editor::new(
        EditorConfig::new(FORMAT, &[ToolbarItem::DrupalMedia]),
        Default::default(),
    )
    .with_media(plugin);

    let session = editor.open_media_library().await.unwrap();
    assert!(session.tabs().is_empty());
    assert_eq!(session.items().len(), 1);
    assert!(editor.finish_media_library(session.cancel()).unwrap().is_none());
    assert_eq!(
        editor.insert_media(&chosen(&fx.baron), None).unwrap(),
        0
    );
}

// ── Undo / redo (Scenario D) ─────────────────────────────────────

#[test]
fn undo_removes_widget_and_redo_restores_it() {
    let fx = fixture();
    let mut editor = editor(&fx, &[]);
    editor.insert_media(&chosen(&fx.fear), None).unwrap();
    let inserted = editor.data();
    assert!(editor.is_enabled(EditorCommand::Undo));

    assert!(editor.undo().unwrap());
    assert!(editor.widgets().is_empty());
    assert_eq!(editor.data(), "");
    assert!(!editor.is_enabled(EditorCommand::Undo));
    assert!(editor.is_enabled(EditorCommand::Redo));

    assert!(editor.redo().unwrap());
    assert_eq!(editor.data(), inserted);
    assert!(editor.is_enabled(EditorCommand::Undo));
    assert!(!editor.is_enabled(EditorCommand::Redo));
}

#[test]
fn disabled_undo_is_a_no_op() {
    let fx = fixture();
    let mut editor = editor(&fx, &[]);
    assert!(!editor.undo().unwrap());
    assert!(!editor.redo().unwrap());
}

#[test]
fn diverged_undo_keeps_cursor() {
    let fx = fixture();
    let mut foreign = Document::new();
    let mut history = History::new();
    history
        .commit(
            &mut foreign,
            Command::InsertBlock {
                index: 0,
                block: Block::paragraph("<p>Elsewhere</p>"),
            },
        )
        .unwrap();

    let format = format(&[]);
    let mut editor = Editor::from_config(
        EditorConfig::new(FORMAT, FULL_TOOLBAR),
        &format,
        fx.catalog(),
        "<p>Here</p>",
    )
    .unwrap()
    .with_history(history);
    editor.set_cursor(Some(0));

    let err = editor.undo().unwrap_err();
    assert!(matches!(err, EditorError::History(HistoryError::Diverged { entry: 0 })));
    assert_eq!(editor.data(), "<p>Here</p>");

    assert_eq!(editor.insert_media(&chosen(&fx.fear), None).unwrap(), 0);
}

#[test]
fn alignment_change_is_one_undo_step() {
    let fx = fixture();
    let mut editor = editor(&fx, &[]);
    editor.insert_media(&chosen(&fx.fear), None).unwrap();
    editor.set_alignment(0, Alignment::Right).unwrap();
    assert_eq!(editor.widgets()[0].alignment, Alignment::Right);

    editor.undo().unwrap();
    assert_eq!(editor.widgets()[0].alignment, Alignment::Center);
    assert_eq!(editor.history().position(), 1);
}

#[test]
fn remove_block_is_undoable() {
    let fx = fixture();
    let mut editor = editor(&fx, &[]);
    editor.insert_media(&chosen(&fx.fear), None).unwrap();
    editor.remove_block(0).unwrap();
    assert!(editor.document().is_empty());
    editor.undo().unwrap();
    assert_eq!(editor.widgets().len(), 1);
}

#[test]
fn toolbar_without_undo_never_enables_it() {
    let fx = fixture();
    let format = format(&[]);
    let mut editor = Editor::from_config(
        EditorConfig::new(FORMAT, &[ToolbarItem::DrupalMedia]),
        &format,
        fx.catalog(),
        "",
    )
    .unwrap();
    editor.insert_media(&chosen(&fx.fear), None).unwrap();
    assert!(!editor.is_enabled(EditorCommand::Undo));
    assert!(!editor.undo().unwrap());
    assert_eq!(editor.widgets().len(), 1);
}

// ── Source editing ───────────────────────────────────────────────

#[test]
fn source_mode_disables_everything_but_source() {
    let fx = fixture();
    let mut editor = editor(&fx, &[]);
    editor.insert_media(&chosen(&fx.fear), None).unwrap();
    editor.toggle_source().unwrap();

    assert!(editor.is_source_editing());
    assert_eq!(editor.source_text(), Some(editor.data().as_str()));
    for command in [EditorCommand::InsertMedia, EditorCommand::Undo, EditorCommand::Redo] {
        assert!(!editor.is_enabled(command), "{command} should be disabled");
    }
    assert!(editor.is_enabled(EditorCommand::Source));
    assert!(matches!(
        editor.insert_media(&chosen(&fx.fear), None),
        Err(EditorError::CommandDisabled(EditorCommand::InsertMedia))
    ));
}

#[test]
fn source_edit_is_committed_as_one_entry() {
    let fx = fixture();
    let mut editor = editor(&fx, &[]);
    editor.insert_media(&chosen(&fx.fear), None).unwrap();
    let before = editor.data();

    editor.toggle_source().unwrap();
    let edited = before.replace(r#"data-align="center""#, r#"data-align="right""#);
    editor.set_source_text(format!("<p>Intro</p>{edited}")).unwrap();
    editor.toggle_source().unwrap();

    assert!(!editor.is_source_editing());
    assert_eq!(editor.widgets()[0].alignment, Alignment::Right);
    assert_eq!(editor.document().blocks()[0], Block::paragraph("<p>Intro</p>"));
    assert_eq!(editor.history().len(), 2);

    editor.undo().unwrap();
    assert_eq!(editor.data(), before);
}

#[test]
fn equivalent_source_edit_adds_no_history() {
    let fx = fixture();
    let mut editor = editor(&fx, &[]);
    editor.insert_media(&chosen(&fx.fear), None).unwrap();
    let canonical = editor.data();

    editor.toggle_source().unwrap();
    editor
        .set_source_text(format!(
            r#"<drupal-media data-entity-uuid='{}' data-align="center" data-entity-type="media" />"#,
            fx.fear.id
        ))
        .unwrap();
    editor.toggle_source().unwrap();

    assert_eq!(editor.data(), canonical);
    assert_eq!(editor.history().len(), 1);

    assert!(editor.undo().unwrap());
    assert!(editor.widgets().is_empty());
    assert!(!editor.is_enabled(EditorCommand::Undo));
}

#[test]
fn unchanged_source_adds_no_history() {
    let fx = fixture();
    let mut editor = editor(&fx, &[]);
    editor.toggle_source().unwrap();
    editor.toggle_source().unwrap();
    assert!(editor.history().is_empty());
}

#[test]
fn source_text_requires_source_mode() {
    let fx = fixture();
    let mut editor = editor(&fx, &[]);
    assert!(editor.set_source_text("<p>x</p>").is_err());
    assert_eq!(editor.source_text(), None);
}

#[test]
fn malformed_embed_in_source_survives_as_unparsed() {
    let fx = fixture();
    let mut editor = editor(&fx, &[]);
    editor.toggle_source().unwrap();
    editor
        .set_source_text(r#"<drupal-media data-entity-type="node"></drupal-media>"#)
        .unwrap();
    editor.toggle_source().unwrap();
    assert!(editor.widgets().is_empty());
    assert_eq!(editor.document().unparsed(), vec![0]);
}

#[test]
fn command_labels() {
    let labels: Vec<&str> = EditorCommand::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["Insert Drupal Media", "Source", "Undo", "Redo"]);
    assert_eq!("Source".parse::<EditorCommand>().unwrap(), EditorCommand::Source);
}
