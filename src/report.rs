//! Update report builder
//!
//! Decodes the resolver output one JSON object at a time and keeps the
//! records that carry an `Update`, in emission order. Decoding stops at the
//! first object that fails to parse; a clean end of input is the normal way
//! for that to happen.

use crate::domain::{ModuleRecord, ModuleUpdate};
use serde_json::Deserializer;
use tracing::{debug, warn};

/// Which records make it into the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateFilter {
    /// Skip modules the main module does not require directly
    pub direct_only: bool,
}

impl UpdateFilter {
    pub fn new(direct_only: bool) -> Self {
        Self { direct_only }
    }

    pub fn accepts(&self, record: &ModuleRecord) -> bool {
        !(self.direct_only && record.indirect)
    }
}

/// Decode records from a concatenated-JSON stream until the first failure
pub fn decode_records(bytes: &[u8]) -> impl Iterator<Item = ModuleRecord> + '_ {
    let mut stream = Deserializer::from_slice(bytes).into_iter::<ModuleRecord>();
    let mut exhausted = false;

    std::iter::from_fn(move || {
        if exhausted {
            return None;
        }
        match stream.next() {
            Some(Ok(record)) => Some(record),
            Some(Err(e)) => {
                // Trailing bytes that are not a module record end the stream
                debug!(
                    offset = stream.byte_offset(),
                    "stopped decoding resolver output: {}", e
                );
                exhausted = true;
                None
            }
            None => {
                exhausted = true;
                None
            }
        }
    })
}

/// Updates available in a resolver output stream, in emission order
pub fn updates(bytes: &[u8], filter: UpdateFilter) -> impl Iterator<Item = ModuleUpdate> + '_ {
    decode_records(bytes).filter_map(move |record| {
        if let Some(ref error) = record.error {
            warn!("module {}: {}", record.path, error.err);
        }
        if !filter.accepts(&record) {
            return None;
        }
        record.to_update()
    })
}
