pub mod learning;
pub mod review;
pub mod speech;
pub mod wordlists;
pub mod words;
