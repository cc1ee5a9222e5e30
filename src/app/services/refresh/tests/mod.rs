//! Tests for the refresh module
//!
//! Cycles run against a scripted in-memory source so fetch and parse failures can
//! be reached without touching the filesystem or network.

pub mod scheduler_tests;
pub mod state_tests;

use crate::app::adapters::source::{FetchError, TextSource};
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One scripted response
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Missing,
}

/// Source that replays scripted replies in order, repeating the last one
#[derive(Debug)]
pub struct ScriptedSource {
    replies: Mutex<VecDeque<Reply>>,
    fetches: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Source that always returns the same text
    pub fn fixed(text: &str) -> Self {
        Self::new(vec![Reply::Text(text.to_string())])
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn next_reply(&self) -> Reply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies.front().cloned().unwrap_or(Reply::Missing)
        }
    }
}

impl TextSource for ScriptedSource {
    async fn fetch_text(&self) -> Result<Vec<u8>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.next_reply() {
            Reply::Text(text) => Ok(text.into_bytes()),
            Reply::Missing => Err(FetchError::File {
                path: PathBuf::from("scripted.csv"),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            }),
        }
    }

    fn describe(&self) -> String {
        "scripted feed".to_string()
    }
}

impl TextSource for &ScriptedSource {
    async fn fetch_text(&self) -> Result<Vec<u8>, FetchError> {
        (**self).fetch_text().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

pub const GOOD_FEED: &str = "name,score\nAda,100\nLin,250\n";
pub const OTHER_FEED: &str = "name,score\nBo,10\n";
pub const UNTERMINATED_FEED: &str = "name,score\n\"Ada,100\n";
pub const OVERFLOW_FEED: &str = "name,score,wins\nAda,1,1e30\n";
