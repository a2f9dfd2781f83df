//! Embedded word list
//!
//! Default vocabulary compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/vocabulary.rs"));
