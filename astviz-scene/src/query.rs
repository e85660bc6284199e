//! Two-state search query input.
//!
//! While [`QueryMode::Typing`], characters edit the query. Toggling back to
//! [`QueryMode::Idle`] commits the query, which is the only point where the
//! highlight engine runs.

use crate::highlight;
use crate::node::Node;

/// Lowest accepted character code (space).
const FIRST_ACCEPTED: u32 = 32;
/// Highest accepted character code (`}`).
const LAST_ACCEPTED: u32 = 125;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryMode {
    #[default]
    Idle,
    Typing,
}

/// Discrete query editing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryEvent {
    /// Switch between idle and typing; leaving typing commits.
    Toggle,
    Insert(char),
    DeleteLast,
}

/// What handling a [`QueryEvent`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    Ignored,
    Edited,
    StartedTyping,
    /// Typing ended. `matched` is `None` when the query was empty and no
    /// search ran.
    Committed { matched: Option<bool> },
}

/// Whether a typed character may enter the query.
pub fn accepts(ch: char) -> bool {
    (FIRST_ACCEPTED..=LAST_ACCEPTED).contains(&u32::from(ch))
}

/// Query text and input mode.
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    mode: QueryMode,
    text: String,
}

impl QueryInput {
    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    pub fn is_typing(&self) -> bool {
        self.mode == QueryMode::Typing
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply one input event. Commits search `root`.
    pub fn handle(
        &mut self,
        event: QueryEvent,
        root: &mut Node,
    ) -> QueryOutcome {
        match (self.mode, event) {
            (QueryMode::Idle, QueryEvent::Toggle) => {
                self.mode = QueryMode::Typing;
                log::debug!("query input: typing");
                QueryOutcome::StartedTyping
            },
            (QueryMode::Typing, QueryEvent::Toggle) => {
                self.mode = QueryMode::Idle;
                log::debug!("query input: idle, committing {:?}", self.text);
                let matched = highlight::apply_query(root, &self.text);
                QueryOutcome::Committed { matched }
            },
            (QueryMode::Typing, QueryEvent::Insert(ch)) if accepts(ch) => {
                self.text.push(ch);
                QueryOutcome::Edited
            },
            (QueryMode::Typing, QueryEvent::DeleteLast) => {
                match self.text.pop() {
                    Some(_) => QueryOutcome::Edited,
                    None => QueryOutcome::Ignored,
                }
            },
            _ => QueryOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::with_children(
            "A",
            vec![
                Node::leaf("B"),
                Node::with_children("C", vec![Node::leaf("D")]),
            ],
        )
    }

    fn type_text(input: &mut QueryInput, root: &mut Node, text: &str) {
        for ch in text.chars() {
            input.handle(QueryEvent::Insert(ch), root);
        }
    }

    #[test]
    fn given_idle_mode_when_characters_arrive_then_query_is_unchanged() {
        let mut root = sample();
        let mut input = QueryInput::default();

        let outcome = input.handle(QueryEvent::Insert('D'), &mut root);

        assert_eq!(outcome, QueryOutcome::Ignored);
        assert_eq!(input.text(), "");
        assert_eq!(input.mode(), QueryMode::Idle);
    }

    #[test]
    fn given_typed_query_when_committed_then_match_and_ancestors_highlight() {
        let mut root = sample();
        let mut input = QueryInput::default();

        input.handle(QueryEvent::Toggle, &mut root);
        type_text(&mut input, &mut root, "D");
        let outcome = input.handle(QueryEvent::Toggle, &mut root);

        assert_eq!(outcome, QueryOutcome::Committed { matched: Some(true) });
        assert_eq!(root.highlighted_labels(), vec!["A", "C", "D"]);
        assert!(!input.is_typing());
    }

    #[test]
    fn given_typing_when_characters_edited_then_highlights_wait_for_commit() {
        let mut root = sample();
        let mut input = QueryInput::default();

        input.handle(QueryEvent::Toggle, &mut root);
        type_text(&mut input, &mut root, "BX");
        input.handle(QueryEvent::DeleteLast, &mut root);

        assert_eq!(input.text(), "B");
        assert!(root.highlighted_labels().is_empty());
    }

    #[test]
    fn given_empty_query_when_committed_then_previous_highlights_remain() {
        let mut root = sample();
        let mut input = QueryInput::default();
        input.handle(QueryEvent::Toggle, &mut root);
        type_text(&mut input, &mut root, "B");
        input.handle(QueryEvent::Toggle, &mut root);

        input.handle(QueryEvent::Toggle, &mut root);
        input.handle(QueryEvent::DeleteLast, &mut root);
        let outcome = input.handle(QueryEvent::Toggle, &mut root);

        assert_eq!(outcome, QueryOutcome::Committed { matched: None });
        assert_eq!(root.highlighted_labels(), vec!["A", "B"]);
    }

    #[test]
    fn given_empty_query_when_deleting_then_event_is_ignored() {
        let mut root = sample();
        let mut input = QueryInput::default();
        input.handle(QueryEvent::Toggle, &mut root);

        let outcome = input.handle(QueryEvent::DeleteLast, &mut root);

        assert_eq!(outcome, QueryOutcome::Ignored);
    }

    #[test]
    fn given_characters_outside_printable_range_when_typed_then_rejected() {
        assert!(accepts(' '));
        assert!(accepts('}'));
        assert!(!accepts('~'));
        assert!(!accepts('\n'));
        assert!(!accepts('é'));
    }
}
