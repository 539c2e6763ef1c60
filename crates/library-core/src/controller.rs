//! Owns the library and its store, and runs every user action as
//! validate, mutate, persist.

use crate::book::{Book, BookKey};
use crate::library::{Library, LibraryError};
use crate::persistence::{self, LoadOutcome, PersistError};
use crate::render::{LibraryView, RowOrder, render};
use crate::store::KeyValueStore;
use crate::validate::{ValidationError, validate_book_input};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Library(#[from] LibraryError),
    /// The in-memory change was applied but could not be written.
    #[error("Could not save your library: {0}")]
    Persist(#[from] PersistError),
}

/// Raw values of the add-book form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub pages: String,
    pub read: bool,
}

impl BookForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ControllerOptions {
    /// Seed the default books when nothing is loaded.
    pub seed_defaults: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            seed_defaults: true,
        }
    }
}

pub struct Controller<S> {
    library: Library,
    store: S,
    startup_warning: Option<String>,
}

impl<S: KeyValueStore> Controller<S> {
    /// Load the library from `store`, seeding defaults if it comes up empty.
    ///
    /// Corrupt stored data leaves the library empty (or seeded, in memory only)
    /// and is reported through [`Controller::startup_warning`]; it never fails.
    pub fn open(store: S, options: ControllerOptions) -> Self {
        let mut controller = Self {
            library: Library::new(),
            store,
            startup_warning: None,
        };
        let loaded = match persistence::load(&controller.store, &mut controller.library) {
            Ok(LoadOutcome::Loaded(count)) => {
                info!(books = count, "Restored saved library");
                true
            }
            Ok(LoadOutcome::Missing) => {
                info!("Starting with a new library");
                true
            }
            Err(err) => {
                warn!("Ignoring stored library: {err}");
                controller.library.clear();
                controller.startup_warning = Some(format!("Saved library could not be read: {err}"));
                false
            }
        };
        if options.seed_defaults && controller.library.seed_defaults_if_empty() {
            info!(books = controller.library.len(), "Seeded default books");
            // An unreadable value stays on disk until the user changes something.
            if loaded {
                if let Err(err) = controller.persist() {
                    controller.startup_warning = Some(err.to_string());
                }
            }
        }
        controller
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn startup_warning(&self) -> Option<&str> {
        self.startup_warning.as_deref()
    }

    pub fn view(&self, order: RowOrder) -> LibraryView {
        render(&self.library, order)
    }

    /// Validate the form and append a new book.
    pub fn submit(&mut self, form: &BookForm) -> Result<&Book, ControllerError> {
        let pages = validate_book_input(&form.title, &form.author, &form.pages)?;
        let book = Book::new(form.title.trim(), form.author.trim(), pages, form.read);
        info!(title = %book.title, author = %book.author, pages, read = book.read, "Adding book");
        self.library.add(book).inspect_err(|err| warn!("Rejected book: {err}"))?;
        self.persist()?;
        self.library
            .books()
            .last()
            .ok_or(ControllerError::Library(LibraryError::NoSuchBook))
    }

    /// Flip the read flag of the book identified by `key`; returns the new flag.
    pub fn toggle_read(&mut self, key: &BookKey, hint: usize) -> Result<bool, ControllerError> {
        let position = self.resolve(key, hint)?;
        let read = self.library.toggle_read(position)?;
        info!(position, title = %key.title, read, "Toggled read flag");
        self.persist()?;
        Ok(read)
    }

    /// Remove the book identified by `key` and return it.
    pub fn delete(&mut self, key: &BookKey, hint: usize) -> Result<Book, ControllerError> {
        let position = self.resolve(key, hint)?;
        let removed = self.library.remove(position)?;
        info!(position, title = %removed.title, "Deleted book");
        self.persist()?;
        Ok(removed)
    }

    pub fn clear_all(&mut self) -> Result<(), ControllerError> {
        let count = self.library.len();
        self.library.clear();
        info!(removed = count, "Cleared library");
        self.persist()?;
        Ok(())
    }

    fn resolve(&self, key: &BookKey, hint: usize) -> Result<usize, LibraryError> {
        self.library.resolve(key, hint).ok_or_else(|| {
            warn!(title = %key.title, author = %key.author, hint, "Row action for a missing book");
            LibraryError::NoSuchBook
        })
    }

    fn persist(&mut self) -> Result<(), PersistError> {
        persistence::save(&mut self.store, &self.library).inspect_err(|err| {
            error!("Failed to save library: {err}");
        })
    }
}
