//! End-to-end tests against a fully wired in-process server: real router,
//! real disk-backed stores in tempdirs, mocked speech and definition
//! providers. No network or cloud credentials required.

pub mod helpers;

mod test_wordlists;
mod test_words;
