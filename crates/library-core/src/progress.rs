use crate::book::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub total: usize,
    pub read: usize,
    /// Share of books read, 0..=100, rounded half-up.
    pub percent: u32,
}

impl Progress {
    pub fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read = books.iter().filter(|book| book.read).count();
        Self {
            total,
            read,
            percent: percent_read(read, total),
        }
    }

    pub fn header(&self) -> String {
        format!("Read {} out of {} books", self.read, self.total)
    }
}

/// `round(read / total * 100)` with halves rounded up; 0 for an empty library.
pub fn percent_read(read: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let (read, total) = (read as u64, total as u64);
    ((200 * read + total) / (2 * total)) as u32
}
