pub mod highlight;
pub mod info;
pub mod source_loader;
pub mod tokens;
