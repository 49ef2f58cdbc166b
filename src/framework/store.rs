//! # Backing Store
//!
//! The in-memory, insertion-ordered collection that a [`ResourceActor`](crate::framework::ResourceActor)
//! owns exclusively. Every mutation goes through one of three operations: insert, merge
//! an update, or mark a record deleted. Records are never removed.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use indexmap::IndexMap;

/// Insertion-ordered store of entities keyed by id.
#[derive(Debug, Clone)]
pub struct Store<T: ActorEntity> {
    records: IndexMap<T::Id, T>,
}

impl<T: ActorEntity> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> Store<T> {
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Total number of records, deleted ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record regardless of its deleted flag.
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.get(id)
    }

    /// All non-deleted records, in insertion order.
    pub fn visible(&self) -> Vec<T> {
        self.records
            .values()
            .filter(|item| !item.is_deleted())
            .cloned()
            .collect()
    }

    /// Appends a new record. Fails if the id is already taken, deleted records included.
    pub fn insert(&mut self, item: T) -> Result<&T, FrameworkError> {
        let id = item.id().clone();
        if self.records.contains_key(&id) {
            return Err(FrameworkError::DuplicateId(id.to_string()));
        }
        let (index, _) = self.records.insert_full(id, item);
        Ok(&self.records[index])
    }

    /// Merges `update` into the record with `id` and returns the merged record.
    ///
    /// Soft-deleted records can still be updated; they remain hidden from [`Store::visible`].
    pub fn merge(&mut self, id: &T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let item = self
            .records
            .get_mut(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_update(update)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        Ok(item.clone())
    }

    /// Flags the record with `id` as deleted.
    ///
    /// Returns `true` only when a visible record was flipped; unknown ids and
    /// already-deleted records are no-ops.
    pub fn mark_deleted(&mut self, id: &T::Id) -> bool {
        match self.records.get_mut(id) {
            Some(item) if !item.is_deleted() => {
                item.mark_deleted();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u64,
        title: String,
        pinned: bool,
        deleted: bool,
    }

    #[derive(Debug)]
    struct NoteCreate {
        title: String,
    }

    #[derive(Debug, Default)]
    struct NoteUpdate {
        title: Option<String>,
        pinned: Option<bool>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Note error")]
    struct NoteError;

    impl ActorEntity for Note {
        type Id = u64;
        type Create = NoteCreate;
        type Update = NoteUpdate;
        type Error = NoteError;

        fn from_create_params(id: u64, params: NoteCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                title: params.title,
                pinned: false,
                deleted: false,
            })
        }

        fn id(&self) -> &u64 {
            &self.id
        }

        fn on_update(&mut self, update: NoteUpdate) -> Result<(), Self::Error> {
            if let Some(title) = update.title {
                self.title = title;
            }
            if let Some(pinned) = update.pinned {
                self.pinned = pinned;
            }
            Ok(())
        }

        fn is_deleted(&self) -> bool {
            self.deleted
        }

        fn mark_deleted(&mut self) {
            self.deleted = true;
        }
    }

    fn note(id: u64, title: &str) -> Note {
        Note::from_create_params(id, NoteCreate { title: title.into() }).unwrap()
    }

    #[test]
    fn visible_keeps_insertion_order() {
        let mut store = Store::new();
        store.insert(note(3, "c")).unwrap();
        store.insert(note(1, "a")).unwrap();
        store.insert(note(2, "b")).unwrap();

        let ids: Vec<u64> = store.visible().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn insert_rejects_taken_id_even_when_deleted() {
        let mut store = Store::new();
        store.insert(note(1, "a")).unwrap();
        store.mark_deleted(&1);

        let result = store.insert(note(1, "again"));
        assert!(matches!(result, Err(FrameworkError::DuplicateId(_))));
        assert_eq!(store.get(&1).unwrap().title, "a");
    }

    #[test]
    fn merge_only_touches_supplied_fields() {
        let mut store = Store::new();
        store.insert(note(1, "draft")).unwrap();

        let merged = store
            .merge(
                &1,
                NoteUpdate {
                    pinned: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(merged.title, "draft");
        assert!(merged.pinned);
        assert_eq!(store.get(&1), Some(&merged));
    }

    #[test]
    fn merge_unknown_id_is_not_found() {
        let mut store: Store<Note> = Store::new();
        let result = store.merge(&42, NoteUpdate::default());
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
    }

    #[test]
    fn mark_deleted_hides_but_keeps_record() {
        let mut store = Store::new();
        store.insert(note(1, "a")).unwrap();
        store.insert(note(2, "b")).unwrap();

        assert!(store.mark_deleted(&1));
        assert!(!store.mark_deleted(&1));
        assert!(!store.mark_deleted(&99));

        assert_eq!(store.len(), 2);
        assert!(store.get(&1).unwrap().deleted);
        let ids: Vec<u64> = store.visible().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
