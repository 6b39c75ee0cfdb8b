//! Timestamps go over the wire in SQLite's `datetime('now')` text form, `YYYY-MM-DD HH:MM:SS`.

use chrono::NaiveDateTime;
use serde::Serializer;

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&ts.format(FORMAT))
}

pub fn serialize_opt<S: Serializer>(
    ts: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match ts {
        Some(ts) => serialize(ts, serializer),
        None => serializer.serialize_none(),
    }
}
