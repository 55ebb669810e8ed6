pub mod history;
pub mod info;
pub mod options;
