//! Analysis modules — filename classification against the extension table.

pub mod file_types;

pub use file_types::{category_for_extension, classify, extension_of, Classification};
