pub mod health;
pub mod learning;
pub mod speech;
pub mod wordlists;
pub mod words;
