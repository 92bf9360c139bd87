//! Page Markup Reader
//!
//! Reads the server-rendered board (`.kanban-column[data-status]` with
//! `.kanban-card[data-request-id]` inside) into a `BoardState`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::models::{Card, Column};
use crate::store::BoardState;

const BOARD_SELECTOR: &str = ".kanban-board";
const COLUMN_SELECTOR: &str = ".kanban-column";
const CARDS_SELECTOR: &str = ".kanban-cards";
const CARD_SELECTOR: &str = ".kanban-card";
const TITLE_SELECTOR: &str = ".kanban-column-title, h1, h2, h3, h4, h5, h6";
const BADGE_SELECTOR: &str = ".badge";

/// Classes the board toggles itself; never carried over from the page
const RUNTIME_CLASSES: &[&str] = &["dragging", "drop-animate", "drag-over"];
/// Card attributes the board renders itself
const CARD_OWNED_ATTRIBUTES: &[&str] = &["class", "draggable", "data-request-id"];

/// The element the board is mounted into: `.kanban-board`, or the parent
/// of the first column when the page has no explicit board wrapper.
pub fn find_board_root(doc: &Document) -> Option<Element> {
    if let Ok(Some(root)) = doc.query_selector(BOARD_SELECTOR) {
        return Some(root);
    }
    doc.query_selector(COLUMN_SELECTOR)
        .ok()
        .flatten()
        .and_then(|col| col.parent_element())
}

/// Read columns and cards below `root`.
/// Returns the state plus a warning for every element that was skipped.
pub fn read_board(root: &Element) -> (BoardState, Vec<String>) {
    let mut state = BoardState::default();
    let mut warnings = Vec::new();

    for col_el in query_all(root, COLUMN_SELECTOR) {
        let Some(status) = non_empty_attr(&col_el, "data-status") else {
            warnings.push("column without data-status skipped".to_string());
            continue;
        };

        let heading = first_text(&col_el, TITLE_SELECTOR);
        let badge = first_text(&col_el, BADGE_SELECTOR);
        let title = column_title(heading.as_deref(), badge.as_deref(), &status);

        let cards_el = col_el.query_selector(CARDS_SELECTOR).ok().flatten();
        let header_html = badge
            .as_ref()
            .and_then(|_| header_markup(&col_el, cards_el.as_ref()));

        for card_el in query_all(&col_el, CARD_SELECTOR) {
            match non_empty_attr(&card_el, "data-request-id") {
                Some(request_id) => state.cards.push(Card {
                    request_id,
                    status: status.clone(),
                    body_html: card_el.inner_html(),
                    classes: extra_classes(card_el.get_attribute("class").as_deref(), "kanban-card"),
                    attributes: kept_attributes(attribute_pairs(&card_el), CARD_OWNED_ATTRIBUTES),
                }),
                None => warnings.push(format!("card without data-request-id in column '{}' skipped", status)),
            }
        }

        state.columns.push(Column {
            classes: extra_classes(col_el.get_attribute("class").as_deref(), "kanban-column"),
            cards_classes: cards_el
                .as_ref()
                .map(|el| extra_classes(el.get_attribute("class").as_deref(), "kanban-cards"))
                .unwrap_or_default(),
            header_html,
            status,
            title,
        });
    }

    (state, warnings)
}

/// Column heading text with the badge count stripped, or the status when
/// the heading is missing or empty.
pub fn column_title(heading: Option<&str>, badge: Option<&str>, status: &str) -> String {
    let mut title = heading.unwrap_or_default().trim();
    if let Some(badge) = badge.map(str::trim).filter(|b| !b.is_empty()) {
        title = title.strip_suffix(badge).unwrap_or(title).trim_end();
    }
    if title.is_empty() {
        status.to_string()
    } else {
        title.to_string()
    }
}

/// Classes from a `class` attribute, minus the element's own marker class
/// and the classes the board toggles at runtime.
pub fn extra_classes(class_attr: Option<&str>, own: &str) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();
    for class in class_attr.unwrap_or_default().split_whitespace() {
        if class == own || RUNTIME_CLASSES.contains(&class) || classes.iter().any(|c| c == class) {
            continue;
        }
        classes.push(class.to_string());
    }
    classes
}

/// Attributes to re-apply, without the ones the board renders itself
pub fn kept_attributes(pairs: Vec<(String, String)>, owned: &[&str]) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .filter(|(name, _)| !owned.contains(&name.to_ascii_lowercase().as_str()))
        .collect()
}

/// Markup of the column's direct children that do not hold the cards
fn header_markup(col_el: &Element, cards_el: Option<&Element>) -> Option<String> {
    let html: String = query_all(col_el, ":scope > *")
        .into_iter()
        .filter(|child| match cards_el {
            Some(cards) => !child.contains(Some(&**cards)),
            None => child.query_selector(CARD_SELECTOR).ok().flatten().is_none(),
        })
        .map(|child| child.outer_html())
        .collect();
    if html.trim().is_empty() { None } else { Some(html) }
}

fn attribute_pairs(el: &Element) -> Vec<(String, String)> {
    el.get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| el.get_attribute(&name).map(|value| (name, value)))
        .collect()
}

fn query_all(parent: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = parent.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn first_text(parent: &Element, selector: &str) -> Option<String> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
}

fn non_empty_attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_title_strips_badge() {
        assert_eq!(column_title(Some("  In Progress 3 "), Some("3"), "In Progress"), "In Progress");
        assert_eq!(column_title(Some("Repaired"), Some("12"), "Repaired"), "Repaired");
    }

    #[test]
    fn test_extra_classes_keep_page_styling() {
        assert_eq!(
            extra_classes(Some("kanban-card overdue  priority-high"), "kanban-card"),
            vec!["overdue".to_string(), "priority-high".to_string()]
        );
        assert!(extra_classes(Some("kanban-card"), "kanban-card").is_empty());
        assert!(extra_classes(None, "kanban-card").is_empty());
    }

    #[test]
    fn test_extra_classes_drop_runtime_state() {
        assert_eq!(
            extra_classes(Some("kanban-cards drag-over dragging bg-light bg-light"), "kanban-cards"),
            vec!["bg-light".to_string()]
        );
    }

    #[test]
    fn test_kept_attributes_skip_board_owned() {
        let pairs = vec![
            ("class".to_string(), "kanban-card overdue".to_string()),
            ("draggable".to_string(), "true".to_string()),
            ("data-request-id".to_string(), "7".to_string()),
            ("data-priority".to_string(), "High".to_string()),
            ("title".to_string(), "Hydraulic press".to_string()),
        ];
        assert_eq!(
            kept_attributes(pairs, CARD_OWNED_ATTRIBUTES),
            vec![
                ("data-priority".to_string(), "High".to_string()),
                ("title".to_string(), "Hydraulic press".to_string()),
            ]
        );
    }

    #[test]
    fn test_column_title_falls_back_to_status() {
        assert_eq!(column_title(None, None, "Scrap"), "Scrap");
        assert_eq!(column_title(Some("   "), Some("0"), "Scrap"), "Scrap");
        assert_eq!(column_title(Some("0"), Some("0"), "New"), "New");
    }
}
