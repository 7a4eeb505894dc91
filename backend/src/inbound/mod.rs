//! Inbound adapters that translate external requests into registry calls
//! while keeping framework details at the edge.

pub mod http;
