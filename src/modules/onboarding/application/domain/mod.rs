pub mod draft;
pub mod entities;
