//! Plain-text views of feature state, built from selectors.

use std::fmt::Write;

use crate::features::cart::{selectors as cart, CartState};
use crate::features::counter::CounterState;
use crate::features::todo::{selectors as todo, TodoState};
use crate::features::user::UserState;

pub fn render_cart(state: &CartState) -> String {
    let mut out = String::new();
    if state.items.is_empty() {
        out.push_str("Cart is empty\n");
    }
    for item in &state.items {
        let _ = writeln!(
            out,
            "#{} {} x{} @ {:.2} = {:.2}",
            item.id,
            item.name,
            item.quantity,
            item.price,
            item.line_total()
        );
    }
    let _ = writeln!(out, "Items: {}", cart::total_items(state));
    let _ = writeln!(out, "Subtotal: {:.2}", cart::subtotal(state));
    let _ = writeln!(
        out,
        "Discount: {} (-{:.2})",
        state.discount,
        cart::discount_amount(state)
    );
    let _ = writeln!(out, "Total: {:.2}", cart::total(state));
    if !state.note.is_empty() {
        let _ = writeln!(out, "Note: {}", state.note);
    }
    out
}

pub fn render_todo(state: &TodoState) -> String {
    let mut out = String::new();
    let visible = todo::visible_todos(state);
    if visible.is_empty() {
        let _ = writeln!(out, "No {} todos", state.filter);
    }
    for item in &visible {
        let mark = if item.completed { "x" } else { " " };
        let _ = writeln!(out, "[{}] #{} {}", mark, item.id, item.text);
    }
    let _ = writeln!(
        out,
        "Filter: {} | {} active, {} completed",
        state.filter,
        todo::active_count(state),
        todo::completed_count(state)
    );
    if !state.input_value.is_empty() {
        let _ = writeln!(out, "Input: {}", state.input_value);
    }
    out
}

pub fn render_counter(state: &CounterState) -> String {
    format!("Count: {}\n", state.count)
}

pub fn render_user(state: &UserState) -> String {
    match state.display_name() {
        Some(name) => format!("Logged in as {}\n", name),
        None => "Not logged in\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cart::Discount;
    use crate::features::todo::{Filter, Todo};
    use crate::features::user::User;

    #[test]
    fn cart_shows_totals_and_discount() {
        let state = CartState {
            discount: Discount::Ten,
            note: "gift wrap".to_string(),
            ..CartState::sample()
        };
        let out = render_cart(&state);
        assert!(out.contains("#2 AirPods Pro x2 @ 249.00 = 498.00"));
        assert!(out.contains("Subtotal: 1497.00"));
        assert!(out.contains("Discount: 10% (-149.70)"));
        assert!(out.contains("Total: 1347.30"));
        assert!(out.contains("Note: gift wrap"));
    }

    #[test]
    fn empty_cart_says_so() {
        assert_eq!(
            render_cart(&CartState::default()),
            "Cart is empty\nItems: 0\nSubtotal: 0.00\nDiscount: 0% (-0.00)\nTotal: 0.00\n"
        );
    }

    #[test]
    fn todo_marks_completed_and_respects_filter() {
        let state = TodoState {
            filter: Filter::Active,
            ..TodoState::with_todos(vec![
                Todo {
                    id: 1,
                    text: "done".to_string(),
                    completed: true,
                },
                Todo {
                    id: 2,
                    text: "open".to_string(),
                    completed: false,
                },
            ])
        };
        let out = render_todo(&state);
        assert!(out.contains("[ ] #2 open"));
        assert!(!out.contains("#1 done"));
        assert!(out.contains("Filter: active | 1 active, 1 completed"));
    }

    #[test]
    fn user_views() {
        assert_eq!(render_user(&UserState::default()), "Not logged in\n");
        let state = UserState {
            user: Some(User {
                name: "An".to_string(),
            }),
        };
        assert_eq!(render_user(&state), "Logged in as An\n");
        assert_eq!(render_counter(&CounterState { count: -2 }), "Count: -2\n");
    }
}
