//! Platform-neutral pieces of the linkbio profile page: static bilingual
//! content, the photo-works wire models, page state, and the client that reads
//! photo works from the headless content API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod models;
