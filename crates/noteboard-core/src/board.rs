//! Draft lifecycle and the board reducer.
//!
//! Every user interaction is a [`BoardAction`] fed to [`NoteBoard::apply`].
//! Transitions are synchronous: a save either commits the draft as a new note
//! and resets it, or leaves the list untouched and records a validation error
//! on the draft.

use crate::error::{Error, Result, ValidationError};
use crate::models::{Attachment, AttachmentSlot, Note, NoteId};
use crate::store::{MemoryNoteStore, NoteStore};

/// The note being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Text as typed, untrimmed.
    pub text: String,
    /// Generic file attachment.
    pub file: Option<Attachment>,
    /// Image attachment, previewed inline.
    pub image: Option<Attachment>,
    /// Set by a rejected save, cleared only by a successful one.
    pub error: Option<ValidationError>,
}

impl Draft {
    /// Check the draft can become a note.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            Err(ValidationError::EmptyText)
        } else {
            Ok(())
        }
    }

    fn slot_mut(&mut self, slot: AttachmentSlot) -> &mut Option<Attachment> {
        match slot {
            AttachmentSlot::File => &mut self.file,
            AttachmentSlot::Image => &mut self.image,
        }
    }
}

/// A user interaction with the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Replace the draft text.
    SetText(String),
    /// Picker result for the generic file slot; only the first item is kept.
    SetFile(Vec<Attachment>),
    /// Picker result for the image slot; only the first item is kept.
    SetImage(Vec<Attachment>),
    /// Validate and commit the draft.
    Save,
    /// Remove a saved note.
    Delete(NoteId),
}

/// What a transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// Draft text replaced.
    TextChanged,
    /// Draft attachment replaced.
    AttachmentSelected(AttachmentSlot),
    /// Picker returned nothing; draft untouched.
    SelectionEmpty(AttachmentSlot),
    /// Draft committed as a new note.
    Saved(NoteId),
    /// Save rejected; the draft carries the error.
    Rejected(ValidationError),
    /// Note removed.
    Deleted(NoteId),
    /// No note had this id.
    NotFound(NoteId),
}

/// Board state: the draft plus the saved notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBoard<S = MemoryNoteStore> {
    draft: Draft,
    store: S,
}

impl NoteBoard<MemoryNoteStore> {
    /// Create an empty in-memory board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved notes in insertion order, without cloning.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        self.store.as_slice()
    }
}

impl<S: NoteStore> NoteBoard<S> {
    /// Create a board backed by `store`.
    pub fn with_store(store: S) -> Self {
        Self {
            draft: Draft::default(),
            store,
        }
    }

    /// The current draft.
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Run one transition.
    ///
    /// Validation failures are reported as [`BoardEvent::Rejected`] rather
    /// than `Err`; only store failures are errors here.
    pub fn apply(&mut self, action: BoardAction) -> Result<BoardEvent> {
        match action {
            BoardAction::SetText(text) => {
                self.set_text(text);
                Ok(BoardEvent::TextChanged)
            }
            BoardAction::SetFile(picked) => Ok(self.select(AttachmentSlot::File, picked)),
            BoardAction::SetImage(picked) => Ok(self.select(AttachmentSlot::Image, picked)),
            BoardAction::Save => match self.save() {
                Ok(id) => Ok(BoardEvent::Saved(id)),
                Err(Error::Validation(error)) => Ok(BoardEvent::Rejected(error)),
                Err(error) => Err(error),
            },
            BoardAction::Delete(id) => {
                if self.delete(&id)? {
                    Ok(BoardEvent::Deleted(id))
                } else {
                    Ok(BoardEvent::NotFound(id))
                }
            }
        }
    }

    /// Replace the draft text. A pending error stays visible.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    /// Keep the first picked file; an empty selection is a no-op.
    pub fn set_file(&mut self, picked: impl IntoIterator<Item = Attachment>) -> bool {
        self.select(AttachmentSlot::File, picked)
            == BoardEvent::AttachmentSelected(AttachmentSlot::File)
    }

    /// Keep the first picked image; an empty selection is a no-op.
    pub fn set_image(&mut self, picked: impl IntoIterator<Item = Attachment>) -> bool {
        self.select(AttachmentSlot::Image, picked)
            == BoardEvent::AttachmentSelected(AttachmentSlot::Image)
    }

    fn select(
        &mut self,
        slot: AttachmentSlot,
        picked: impl IntoIterator<Item = Attachment>,
    ) -> BoardEvent {
        let Some(attachment) = picked.into_iter().next() else {
            return BoardEvent::SelectionEmpty(slot);
        };

        tracing::debug!(
            ?slot,
            name = %attachment.name,
            size = attachment.len(),
            "Draft attachment selected"
        );
        *self.draft.slot_mut(slot) = Some(attachment);
        BoardEvent::AttachmentSelected(slot)
    }

    /// Commit the draft as a new note appended to the list.
    ///
    /// On validation failure the error is recorded on the draft, the list is
    /// untouched, and `Error::Validation` is returned.
    pub fn save(&mut self) -> Result<NoteId> {
        if let Err(error) = self.draft.validate() {
            tracing::debug!("Save rejected: {}", error);
            self.draft.error = Some(error);
            return Err(error.into());
        }

        let note = Note::new(
            self.draft.text.clone(),
            self.draft.file.clone(),
            self.draft.image.clone(),
        );
        let id = note.id;
        self.store.insert(note)?;
        self.draft = Draft::default();

        tracing::info!(note_id = %id, "Note saved");
        Ok(id)
    }

    /// Remove the note with `id`; a missing id is not an error.
    pub fn delete(&mut self, id: &NoteId) -> Result<bool> {
        let removed = self.store.delete(id)?;
        if removed {
            tracing::info!(note_id = %id, "Note deleted");
        } else {
            tracing::debug!(note_id = %id, "Delete ignored, note not found");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(board: &NoteBoard) -> Vec<&str> {
        board.notes().iter().map(|note| note.text.as_str()).collect()
    }

    fn save_text(board: &mut NoteBoard, text: &str) -> NoteId {
        board.set_text(text);
        board.save().unwrap()
    }

    #[test]
    fn save_plain_note_clears_draft() {
        let mut board = NoteBoard::new();
        board.set_text("Buy milk");

        let event = board.apply(BoardAction::Save).unwrap();

        let note = &board.notes()[0];
        assert_eq!(event, BoardEvent::Saved(note.id));
        assert_eq!(note.text, "Buy milk");
        assert_eq!(note.file, None);
        assert_eq!(note.image, None);
        assert_eq!(board.draft(), &Draft::default());
    }

    #[test]
    fn save_empty_text_sets_error_and_keeps_list() {
        let mut board = NoteBoard::new();

        let event = board.apply(BoardAction::Save).unwrap();

        assert_eq!(event, BoardEvent::Rejected(ValidationError::EmptyText));
        assert!(board.notes().is_empty());
        assert_eq!(board.draft().error, Some(ValidationError::EmptyText));
        assert_eq!(
            board.draft().error.map(|e| e.to_string()).as_deref(),
            Some("El texto es obligatorio")
        );
    }

    #[test]
    fn save_whitespace_text_is_rejected_and_draft_kept() {
        let mut board = NoteBoard::new();
        board.set_text(" \n\t ");
        board.set_file([Attachment::new("report.pdf", b"%PDF".to_vec())]);

        assert!(matches!(
            board.save(),
            Err(Error::Validation(ValidationError::EmptyText))
        ));
        assert!(board.notes().is_empty());
        assert_eq!(board.draft().text, " \n\t ");
        assert!(board.draft().file.is_some());
    }

    #[test]
    fn error_survives_typing_and_clears_on_successful_save() {
        let mut board = NoteBoard::new();
        board.apply(BoardAction::Save).unwrap();

        board.apply(BoardAction::SetText("now valid".into())).unwrap();
        assert_eq!(board.draft().error, Some(ValidationError::EmptyText));

        board.apply(BoardAction::Save).unwrap();
        assert_eq!(board.draft().error, None);
        assert_eq!(texts(&board), vec!["now valid"]);
    }

    #[test]
    fn saves_preserve_insertion_order_and_unique_ids() {
        let mut board = NoteBoard::new();
        let inputs: Vec<String> = (0..50).map(|i| format!("note {i}")).collect();
        for text in &inputs {
            save_text(&mut board, text);
        }

        let saved: Vec<String> = board.notes().iter().map(|n| n.text.clone()).collect();
        assert_eq!(saved, inputs);

        let mut ids: Vec<NoteId> = board.notes().iter().map(|n| n.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), inputs.len());
    }

    #[test]
    fn save_resets_attachments() {
        let mut board = NoteBoard::new();
        board.set_text("trip");
        board.set_file([Attachment::new("report.pdf", b"%PDF".to_vec())]);
        board.set_image([Attachment::new("photo.jpg", vec![0xff, 0xd8])]);

        board.save().unwrap();

        assert_eq!(board.draft(), &Draft::default());
        let note = &board.notes()[0];
        assert_eq!(note.file.as_ref().map(|a| a.name.as_str()), Some("report.pdf"));
        assert_eq!(note.image.as_ref().map(|a| a.name.as_str()), Some("photo.jpg"));
    }

    #[test]
    fn picker_keeps_first_item_and_ignores_empty_selection() {
        let mut board = NoteBoard::new();
        let first = Attachment::new("a.txt", b"a".to_vec());
        let second = Attachment::new("b.txt", b"b".to_vec());

        let event = board
            .apply(BoardAction::SetFile(vec![first.clone(), second]))
            .unwrap();
        assert_eq!(event, BoardEvent::AttachmentSelected(AttachmentSlot::File));
        assert_eq!(board.draft().file.as_ref(), Some(&first));

        let event = board.apply(BoardAction::SetFile(Vec::new())).unwrap();
        assert_eq!(event, BoardEvent::SelectionEmpty(AttachmentSlot::File));
        assert_eq!(board.draft().file.as_ref(), Some(&first));
    }

    #[test]
    fn picking_again_replaces_attachment() {
        let mut board = NoteBoard::new();
        board.set_image([Attachment::new("old.png", vec![1])]);
        let replacement = Attachment::new("new.png", vec![2]);

        assert!(board.set_image([replacement.clone()]));
        assert_eq!(board.draft().image.as_ref(), Some(&replacement));
        assert_eq!(board.draft().file, None);
    }

    #[test]
    fn delete_removes_exactly_one_note() {
        let mut board = NoteBoard::new();
        let a = save_text(&mut board, "A");
        save_text(&mut board, "B");
        save_text(&mut board, "C");

        let event = board.apply(BoardAction::Delete(a)).unwrap();

        assert_eq!(event, BoardEvent::Deleted(a));
        assert_eq!(texts(&board), vec!["B", "C"]);
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let mut board = NoteBoard::new();
        save_text(&mut board, "A");
        let missing = NoteId::new();

        let event = board.apply(BoardAction::Delete(missing)).unwrap();

        assert_eq!(event, BoardEvent::NotFound(missing));
        assert_eq!(texts(&board), vec!["A"]);
    }

    #[test]
    fn save_two_then_delete_first_leaves_second() {
        let mut board = NoteBoard::new();
        let a = save_text(&mut board, "A");
        let b = save_text(&mut board, "B");

        board.delete(&a).unwrap();

        assert_eq!(board.notes().len(), 1);
        assert_eq!(board.notes()[0].id, b);
    }

    struct FailingStore;

    impl NoteStore for FailingStore {
        fn insert(&mut self, _note: Note) -> Result<()> {
            Err(Error::Storage("disk full".to_string()))
        }

        fn list(&self) -> Result<Vec<Note>> {
            Ok(Vec::new())
        }

        fn delete(&mut self, _id: &NoteId) -> Result<bool> {
            Ok(false)
        }
    }

    #[test]
    fn store_failure_keeps_draft() {
        let mut board = NoteBoard::with_store(FailingStore);
        board.set_text("keep me");

        let result = board.apply(BoardAction::Save);

        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(board.draft().text, "keep me");
        assert_eq!(board.draft().error, None);
    }
}
