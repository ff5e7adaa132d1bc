use std::thread;
use std::vec;

use bioscript_formats::GenBankRecord;
use log::info;

use crate::client::{HistoryHandle, SearchResult, SequenceDatabase};
use crate::config::Paging;
use crate::EntrezError;

type ProgressFn<'a> = Box<dyn FnMut(usize, usize) + 'a>;

/// Records of a search, fetched one page at a time as they are consumed.
///
/// At most `min(count, max_records)` records are requested. After every page
/// request the stream sleeps for the configured throttle, whether or not
/// the request succeeded. The first failed page is yielded as an error and
/// ends the stream.
pub struct RecordStream<'a, D: SequenceDatabase + ?Sized> {
    db: &'a D,
    history: Option<HistoryHandle>,
    limit: usize,
    paging: Paging,
    next_start: usize,
    buffer: vec::IntoIter<GenBankRecord>,
    finished: bool,
    on_page: Option<ProgressFn<'a>>,
}

impl<'a, D: SequenceDatabase + ?Sized> RecordStream<'a, D> {
    pub fn new(db: &'a D, search: &SearchResult, paging: Paging) -> Result<Self, EntrezError> {
        let limit = search.count.min(paging.max_records);
        let history = match (&search.history, limit) {
            (_, 0) => None,
            (Some(history), _) => Some(history.clone()),
            (None, _) => return Err(EntrezError::MissingHistory),
        };
        if limit > 0 && paging.page_size == 0 {
            return Err(EntrezError::InvalidPaging);
        }

        Ok(Self {
            db,
            history,
            limit,
            paging,
            next_start: 0,
            buffer: Vec::new().into_iter(),
            finished: false,
            on_page: None,
        })
    }

    /// Call `f(start, end)` before each page is requested
    pub fn with_progress(mut self, f: impl FnMut(usize, usize) + 'a) -> Self {
        self.on_page = Some(Box::new(f));
        self
    }

    /// Number of records this stream will ask for in total
    pub fn limit(&self) -> usize {
        self.limit
    }

    fn fetch_next_page(&mut self, history: &HistoryHandle) -> Result<(), EntrezError> {
        let start = self.next_start;
        let size = self.paging.page_size.min(self.limit - start);
        if let Some(on_page) = self.on_page.as_mut() {
            on_page(start, start + size);
        }
        info!("fetching records {} to {}", start, start + size);

        let page = self.db.fetch_page(history, start, size);
        self.next_start += size;
        if !self.paging.throttle.is_zero() {
            thread::sleep(self.paging.throttle);
        }

        self.buffer = page?.into_iter();
        Ok(())
    }
}

impl<D: SequenceDatabase + ?Sized> Iterator for RecordStream<'_, D> {
    type Item = Result<GenBankRecord, EntrezError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffer.next() {
                return Some(Ok(record));
            }
            if self.finished || self.next_start >= self.limit {
                return None;
            }
            let history = self.history.clone()?;
            if let Err(e) = self.fetch_next_page(&history) {
                self.finished = true;
                return Some(Err(e));
            }
        }
    }
}
