//! Recording [`Caller`] used by the retriever unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::{Caller, Error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Get(String),
    Put {
        path: String,
        body: String,
        content_type: String,
    },
    Delete(String),
}

/// Replays canned responses in order and records every call it receives.
/// Once the canned responses run out every call succeeds with an empty body.
#[derive(Default)]
pub(crate) struct RecordingCaller {
    responses: Mutex<VecDeque<Result<String, Error>>>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingCaller {
    pub(crate) fn respond_with(self, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.to_string()));
        self
    }

    pub(crate) fn fail_with(self, status: u16) -> Self {
        self.responses.lock().unwrap().push_back(Err(Error::HttpStatus {
            status,
            body: String::new(),
        }));
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<String, Error> {
        self.calls.lock().unwrap().push(call);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

impl Caller for RecordingCaller {
    async fn get_text(&self, path: &str) -> Result<String, Error> {
        self.record(Call::Get(path.to_string()))
    }

    async fn put(&self, body: &str, content_type: &str, path: &str) -> Result<(), Error> {
        self.record(Call::Put {
            path: path.to_string(),
            body: body.to_string(),
            content_type: content_type.to_string(),
        })
        .map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        self.record(Call::Delete(path.to_string())).map(|_| ())
    }
}
