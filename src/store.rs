//! Note persistence.
//!
//! The store only needs two operations: create a note and list every note.
//! `SledNoteStore` keeps each note as a JSON document in a sled tree keyed by
//! its big-endian sequence number, so tree order is insertion order.

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Note;

/// Name of the sled tree holding note documents.
pub const NOTES_TREE: &str = "notes";

pub trait NoteStore: Send + Sync {
    /// Persist a new note with a fresh id and sequence number.
    fn save(&self, content: &str) -> Result<Note>;

    /// Every stored note, ordered by `seq` ascending.
    fn find_all(&self) -> Result<Vec<Note>>;
}

/// All notes, newest first.
pub fn recent(store: &dyn NoteStore) -> Result<Vec<Note>> {
    let mut notes = store.find_all()?;
    notes.sort_by(|a, b| b.seq.cmp(&a.seq));
    Ok(notes)
}

#[derive(Clone)]
pub struct SledNoteStore {
    db: sled::Db,
    notes: sled::Tree,
}

impl SledNoteStore {
    /// Open (or create) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    /// An in-memory database that is discarded on drop.
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    fn from_db(db: sled::Db) -> Result<Self> {
        let notes = db.open_tree(NOTES_TREE)?;
        Ok(Self { db, notes })
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.notes.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl NoteStore for SledNoteStore {
    fn save(&self, content: &str) -> Result<Note> {
        let note = Note {
            id: Uuid::new_v4().to_string(),
            seq: self.db.generate_id()?,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        let doc = serde_json::to_vec(&note)?;
        self.notes.insert(note.seq.to_be_bytes(), doc)?;
        tracing::debug!(id = %note.id, seq = note.seq, "note stored");
        Ok(note)
    }

    fn find_all(&self) -> Result<Vec<Note>> {
        self.notes
            .iter()
            .values()
            .map(|doc| -> Result<Note> { Ok(serde_json::from_slice(&doc?)?) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_save_assigns_fresh_ids() {
        let store = SledNoteStore::temporary().unwrap();
        let a = store.save("first").unwrap();
        let b = store.save("second").unwrap();

        assert_ne!(a.id, b.id);
        assert!(b.seq > a.seq);
        assert_eq!(a.content, "first");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_all_in_insertion_order() {
        let store = SledNoteStore::temporary().unwrap();
        for text in ["one", "two", "three"] {
            store.save(text).unwrap();
        }

        let contents: Vec<_> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|n| n.content)
            .collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let store = SledNoteStore::temporary().unwrap();
        for i in 0..300 {
            store.save(&format!("note {}", i)).unwrap();
        }

        let notes = recent(&store).unwrap();
        assert_eq!(notes.len(), 300);
        assert_eq!(notes[0].content, "note 299");
        assert_eq!(notes[299].content, "note 0");
        assert!(notes.windows(2).all(|w| w[0].seq > w[1].seq));
    }

    #[test]
    fn test_empty_store() {
        let store = SledNoteStore::temporary().unwrap();
        assert!(store.is_empty());
        assert!(recent(&store).unwrap().is_empty());
    }

    #[test]
    fn test_reopen_keeps_notes_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db");

        {
            let store = SledNoteStore::open(&path).unwrap();
            store.save("before restart").unwrap();
            store.db.flush().unwrap();
        }

        let store = SledNoteStore::open(&path).unwrap();
        let later = store.save("after restart").unwrap();
        let notes = recent(&store).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, later.id);
        assert_eq!(notes[1].content, "before restart");
    }

    #[test]
    fn test_corrupt_document_is_reported() {
        let store = SledNoteStore::temporary().unwrap();
        store.notes.insert(0u64.to_be_bytes(), b"not json".to_vec()).unwrap();

        assert!(matches!(store.find_all(), Err(Error::CorruptDocument(_))));
    }
}
