//! Bridge between the in-memory library and its single store entry.

use crate::book::Book;
use crate::library::Library;
use crate::store::{KeyValueStore, StoreError};
use thiserror::Error;
use tracing::{debug, info};

/// Key the whole library snapshot lives under.
pub const STORAGE_KEY: &str = "myLibrary";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("stored library is not valid: {0}")]
    Parse(serde_json::Error),
    #[error("failed to serialize library: {0}")]
    Serialize(serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored under the key; the library was left untouched.
    Missing,
    /// The library now holds this many books from the store.
    Loaded(usize),
}

pub fn serialize(books: &[Book]) -> Result<String, PersistError> {
    serde_json::to_string(books).map_err(PersistError::Serialize)
}

pub fn deserialize(text: &str) -> Result<Vec<Book>, PersistError> {
    serde_json::from_str(text).map_err(PersistError::Parse)
}

/// Write the full snapshot, replacing whatever was stored before.
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, library: &Library) -> Result<(), PersistError> {
    let text = serialize(library.books())?;
    store.set(STORAGE_KEY, text)?;
    debug!(books = library.len(), "Saved library snapshot");
    Ok(())
}

/// Replace the library's contents with the stored snapshot, if any.
///
/// On a parse error the library is not modified.
pub fn load<S: KeyValueStore + ?Sized>(
    store: &S,
    library: &mut Library,
) -> Result<LoadOutcome, PersistError> {
    let Some(text) = store.get(STORAGE_KEY)? else {
        debug!("No stored library found");
        return Ok(LoadOutcome::Missing);
    };
    let books = deserialize(&text)?;
    let count = books.len();
    library.replace_all(books);
    info!(books = count, "Loaded library from store");
    Ok(LoadOutcome::Loaded(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn sample_library() -> Library {
        let mut library = Library::new();
        library
            .add(Book::new("Test Title", "Test Author", 123, true))
            .unwrap();
        library
            .add(Book::new("Dune", "Frank Herbert", 412, false))
            .unwrap();
        library
    }

    #[test]
    fn save_writes_serialized_library_under_key() {
        let mut store = MemoryStore::new();
        let library = sample_library();
        save(&mut store, &library).unwrap();
        assert_eq!(
            store.get(STORAGE_KEY).unwrap(),
            Some(serialize(library.books()).unwrap())
        );
    }

    #[test]
    fn load_reads_stored_books() {
        let mut store = MemoryStore::new();
        store
            .set(
                STORAGE_KEY,
                r#"[{"title":"Loaded Title","author":"Loaded Author","pages":456,"check":false}]"#
                    .to_string(),
            )
            .unwrap();
        let mut library = Library::new();

        assert_eq!(load(&store, &mut library).unwrap(), LoadOutcome::Loaded(1));
        assert_eq!(
            library.books(),
            &[Book::new("Loaded Title", "Loaded Author", 456, false)]
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let library = sample_library();
        save(&mut store, &library).unwrap();

        let mut restored = Library::new();
        load(&store, &mut restored).unwrap();
        assert_eq!(restored.books(), library.books());
    }

    #[test]
    fn save_then_load_round_trips_any_sequence_of_adds() {
        for count in 0..6 {
            let mut library = Library::new();
            for i in 0..count {
                library
                    .add(Book::new(
                        format!("Title {i}"),
                        format!("Author {}", i % 2),
                        (i as u32 + 1) * 37,
                        i % 3 == 0,
                    ))
                    .unwrap();
            }
            let mut store = MemoryStore::new();
            save(&mut store, &library).unwrap();

            let mut restored = Library::new();
            assert_eq!(load(&store, &mut restored).unwrap(), LoadOutcome::Loaded(count));
            assert_eq!(restored, library, "sequence of {count} adds");
        }
    }

    #[test]
    fn missing_key_leaves_library_untouched() {
        let store = MemoryStore::new();
        let mut library = sample_library();
        assert_eq!(load(&store, &mut library).unwrap(), LoadOutcome::Missing);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn load_replaces_existing_contents() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "[]".to_string()).unwrap();
        let mut library = sample_library();
        assert_eq!(load(&store, &mut library).unwrap(), LoadOutcome::Loaded(0));
        assert!(library.is_empty());
    }

    #[test]
    fn corrupt_value_surfaces_parse_error() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{not json".to_string()).unwrap();
        let mut library = sample_library();
        assert!(matches!(
            load(&store, &mut library),
            Err(PersistError::Parse(_))
        ));
        assert_eq!(library.len(), 2);
    }
}
