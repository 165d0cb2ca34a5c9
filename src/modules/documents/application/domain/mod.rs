pub mod checklist;
pub mod entities;
pub mod policies;
