//! Low-level parsing utilities.
//!
//! [`whatsapp`] holds the prefix patterns, layout detection and timestamp
//! handling used by [`ChatParser`](crate::parser::ChatParser).

pub mod whatsapp;

pub use whatsapp::{
    Prefix, detect_layout, detect_layout_in, find_prefixes, parse_whatsapp_timestamp,
    resolve_date_order,
};
