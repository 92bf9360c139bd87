//! UI Components
//!
//! Board columns and cards.

mod kanban_card;
mod kanban_column;

pub use kanban_card::KanbanCard;
pub use kanban_column::KanbanColumn;

/// `base`, then the classes carried over from the page, then every flag that is on
pub(crate) fn class_list(base: &str, extra: &[String], flags: &[(&str, bool)]) -> String {
    let mut c = String::from(base);
    for class in extra {
        c.push(' ');
        c.push_str(class);
    }
    for (class, on) in flags {
        if *on {
            c.push(' ');
            c.push_str(class);
        }
    }
    c
}
