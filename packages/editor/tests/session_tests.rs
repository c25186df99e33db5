//! Orchestrator behavior: gating, protected blocks, recovery, feedback.

use std::time::Duration;

use biolink_blocks::{Alignment, Block, BlockContent, BlockKind, BlockStyle, SizePreset};
use biolink_editor::{
    BlockPatch, EditSession, EditorError, FeedbackEvent, FeedbackKind, PageDocument, Persistence,
    SaveError, SessionConfig,
};

fn session(premium: bool) -> EditSession<bool, Vec<FeedbackEvent>> {
    EditSession::new(PageDocument::new("@maya"), premium, Vec::new())
}

fn session_with_ttl(ttl: Duration) -> EditSession<bool, Vec<FeedbackEvent>> {
    let config = SessionConfig {
        undo_timeout: ttl,
        ..SessionConfig::default()
    };
    EditSession::with_config(PageDocument::new("@maya"), config, false, Vec::new())
}

#[test]
fn test_profile_invariant_survives_edit_sequences() {
    let mut session = session(false);

    let link = session.insert_block("link", 1).unwrap();
    let text = session.insert_block("text", 1).unwrap();
    session.insert_block("image", 5).unwrap();
    session.delete_block(&text).unwrap();
    session.move_block(&link, 2).unwrap();
    let profile_id = session.document().blocks()[0].id.clone();
    session.delete_block(&profile_id).unwrap();

    let profiles: Vec<_> = session
        .document()
        .blocks()
        .iter()
        .filter(|b| b.kind() == BlockKind::Profile)
        .collect();
    assert_eq!(profiles.len(), 1);
    assert_eq!(session.document().blocks()[0].kind(), BlockKind::Profile);
}

#[test]
fn test_premium_insert_rejected_without_entitlement() {
    let mut session = session(false);
    let before = session.document().to_json().unwrap();

    let err = session.insert_block("form", 1).unwrap_err();

    assert_eq!(err, EditorError::PremiumRequired(BlockKind::Form));
    // Byte-for-byte unchanged
    assert_eq!(session.document().to_json().unwrap(), before);
    assert!(session.history().is_empty());
    assert!(!session.can_undo());
}

#[test]
fn test_premium_insert_allowed_with_entitlement() {
    let mut session = session(true);

    let id = session.insert_block("form", 1).unwrap();

    assert_eq!(
        session.document().find_block(&id).unwrap().kind(),
        BlockKind::Form
    );
}

#[test]
fn test_unknown_kind_insert_mutates_nothing() {
    let mut session = session(false);
    let before = session.document().to_json().unwrap();

    let err = session.insert_block("hologram", 1).unwrap_err();

    assert!(matches!(err, EditorError::Block(_)));
    assert_eq!(session.document().to_json().unwrap(), before);
    assert!(session.history().is_empty());
}

#[test]
fn test_update_unknown_id_fails() {
    let mut session = session(false);

    let err = session
        .update_block("nope-1", BlockPatch::size(SizePreset::HalfSmall))
        .unwrap_err();

    assert_eq!(err, EditorError::NotFound("nope-1".to_string()));
}

#[test]
fn test_update_replaces_content_and_keeps_order() {
    let mut session = session(false);
    let first = session.insert_block("link", 1).unwrap();
    let second = session.insert_block("link", 2).unwrap();

    session
        .update_block(
            &first,
            BlockPatch::content(BlockContent::Link {
                title: "My shop".to_string(),
                url: "https://shop.example".to_string(),
                thumbnail_url: None,
            })
            .with_size(SizePreset::HalfMedium)
            .with_style(BlockStyle {
                alignment: Alignment::Center,
                ..BlockStyle::default()
            }),
        )
        .unwrap();

    let blocks = session.document().blocks();
    assert_eq!(blocks[1].id, first);
    assert_eq!(blocks[2].id, second);
    match &blocks[1].content {
        BlockContent::Link { title, .. } => assert_eq!(title, "My shop"),
        other => panic!("expected link content, got {:?}", other),
    }
    assert_eq!(blocks[1].size, Some(SizePreset::HalfMedium));
    assert_eq!(
        blocks[1].style.as_ref().map(|s| s.alignment),
        Some(Alignment::Center)
    );
    // The sibling is untouched
    assert_eq!(blocks[2].size, None);
}

#[test]
fn test_update_with_kind_changing_payload_fails() {
    let mut session = session(false);
    let id = session.insert_block("link", 1).unwrap();

    let err = session
        .update_block(&id, BlockPatch::content(BlockContent::Text {
            body: "now I'm text".to_string(),
        }))
        .unwrap_err();

    assert_eq!(err, EditorError::ConstructionFailed);
    assert_eq!(
        session.document().find_block(&id).unwrap().kind(),
        BlockKind::Link
    );
}

#[test]
fn test_delete_unknown_id_is_quiet_noop() {
    let mut session = session(false);
    let before = session.document().to_json().unwrap();

    session.delete_block("ghost-9").unwrap();

    assert_eq!(session.document().to_json().unwrap(), before);
    assert!(session.history().is_empty());
}

#[test]
fn test_delete_profile_is_indistinguishable_from_success() {
    let mut session = session(false);
    let profile_id = session.document().blocks()[0].id.clone();

    session.delete_block(&profile_id).unwrap();

    assert_eq!(session.document().blocks().len(), 1);
    assert!(session.history().is_empty());
    assert!(!session.restore_pending(&profile_id));
}

#[test]
fn test_delete_then_restore_reinserts_at_original_index() {
    let mut session = session(false);
    session.insert_block("link", 1).unwrap();
    let middle = session.insert_block("text", 2).unwrap();
    session.insert_block("image", 3).unwrap();

    session.delete_block(&middle).unwrap();
    assert!(session.document().find_block(&middle).is_none());
    assert!(session.restore_pending(&middle));

    assert!(session.restore_deleted(&middle));

    assert_eq!(session.document().position_of(&middle), Some(2));
    assert!(!session.restore_pending(&middle));
    // A second restore finds nothing
    assert!(!session.restore_deleted(&middle));
}

#[test]
fn test_restore_after_ttl_has_no_effect() {
    let mut session = session_with_ttl(Duration::ZERO);
    let id = session.insert_block("link", 1).unwrap();

    session.delete_block(&id).unwrap();

    assert!(!session.restore_pending(&id));
    assert!(!session.restore_deleted(&id));
    assert!(session.document().find_block(&id).is_none());
}

#[test]
fn test_move_reorders_blocks() {
    let mut session = session(false);
    let a = session.insert_block("link", 1).unwrap();
    let b = session.insert_block("text", 2).unwrap();
    let c = session.insert_block("image", 3).unwrap();

    session.move_block(&c, 1).unwrap();

    let order: Vec<_> = session.document().blocks()[1..]
        .iter()
        .map(|blk| blk.id.clone())
        .collect();
    assert_eq!(order, vec![c, a, b]);
}

#[test]
fn test_move_to_same_position_records_nothing() {
    let mut session = session(false);
    let a = session.insert_block("link", 1).unwrap();
    let recorded = session.history().len();

    session.move_block(&a, 1).unwrap();

    assert_eq!(session.history().len(), recorded);
}

#[test]
fn test_replace_blocks_requires_profile() {
    let mut session = session(false);
    let keep = session.document().snapshot();

    let err = session.replace_blocks(Vec::new()).unwrap_err();
    assert_eq!(err, EditorError::MissingProfile);

    session.insert_block("link", 1).unwrap();
    let err = session
        .replace_blocks(session.document().blocks()[1..].to_vec())
        .unwrap_err();
    assert_eq!(err, EditorError::MissingProfile);

    // A valid list goes through
    session.replace_blocks(keep).unwrap();
    assert_eq!(session.document().blocks().len(), 1);
}

#[test]
fn test_feedback_events_follow_the_edit_flow() {
    let mut session = session(false);

    let id = session.insert_block("link", 1).unwrap();
    session.delete_block(&id).unwrap();
    session.restore_deleted(&id);
    session.undo();

    let kinds: Vec<_> = session.feedback().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FeedbackKind::Recorded,
            FeedbackKind::Deleted,
            FeedbackKind::Restored,
            FeedbackKind::Undone,
        ]
    );

    // Deletion feedback carries the restore handle
    assert_eq!(session.feedback()[1].block_id.as_deref(), Some(id.as_str()));
    assert_eq!(session.feedback()[1].label, "Deleted link block");
}

#[test]
fn test_rows_track_the_live_document() {
    let mut session = session(false);
    let a = session.insert_block("button", 1).unwrap();
    let b = session.insert_block("text", 2).unwrap();
    session
        .update_block(&a, BlockPatch::size(SizePreset::HalfSmall))
        .unwrap();
    session
        .update_block(&b, BlockPatch::size(SizePreset::HalfSmall))
        .unwrap();

    let rows = session.rows();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].blocks.len(), 2);
    assert!(!rows[1].has_empty_slot);

    session.delete_block(&b).unwrap();
    let rows = session.rows();
    assert!(rows[1].has_empty_slot);
}

struct MemoryStore {
    saved: Vec<Vec<Block>>,
    fail: bool,
}

impl Persistence for MemoryStore {
    fn save(&mut self, blocks: &[Block]) -> Result<(), SaveError> {
        if self.fail {
            return Err(SaveError("disk full".to_string()));
        }
        self.saved.push(blocks.to_vec());
        Ok(())
    }
}

#[test]
fn test_save_hands_the_block_list_to_persistence() -> anyhow::Result<()> {
    let mut session = session(false);
    session.insert_block("link", 1)?;

    let mut store = MemoryStore {
        saved: Vec::new(),
        fail: false,
    };
    session.save_with(&mut store)?;

    assert_eq!(store.saved.len(), 1);
    assert_eq!(store.saved[0], session.document().blocks());

    store.fail = true;
    assert!(session.save_with(&mut store).is_err());
    // A failed save never touches the document
    assert_eq!(session.document().blocks().len(), 2);
    Ok(())
}
