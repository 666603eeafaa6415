//! Deck state and its transition methods.

use crate::command::DeckCommand;
use crate::deeplink::parse_fragment;
use crate::frontmatter::{DeckMeta, extract_frontmatter};
use crate::navigate::{Movement, NavigationChange, clamp_index, resolve_movement};
use crate::paginate::paginate;
use serde::Serialize;

/// View-mode flags toggled by key commands and consumed by the embedding
/// layer (CSS classes, alternate surfaces).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewFlags {
    /// Colors are inverted.
    pub inverted: bool,
    /// The print view (all slides in sequence) is showing.
    pub printing: bool,
    /// The inline editor is open.
    pub editing: bool,
}

/// What changed when a document was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpdate {
    /// Slide count after repagination.
    pub page_count: usize,
    /// Index re-clamp forced by a shrunken slide list, if any.
    pub navigation: Option<NavigationChange>,
}

/// Observable effect of applying a deck command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    /// The slide index changed.
    Navigated(NavigationChange),
    /// A view flag toggled; the new flags are carried.
    ViewChanged(ViewFlags),
    /// The command resolved to no visible change.
    Unchanged,
}

/// The navigable state of one deck instance.
///
/// Owns the document, the slide list derived from it, the current index,
/// and the view flags. All mutation goes through transition methods that
/// report what changed, so a rendering layer subscribes to the reports
/// instead of poking at fields. One widget instance owns one `DeckState`;
/// nothing is shared across instances.
#[derive(Debug, Clone, Default)]
pub struct DeckState {
    document: String,
    meta: DeckMeta,
    pages: Vec<String>,
    index: usize,
    view: ViewFlags,
}

impl DeckState {
    /// Creates an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a deck positioned at slide 0 of `document`.
    pub fn from_document(document: &str) -> Self {
        let mut state = Self::new();
        state.apply_document(document);
        state
    }

    /// Replaces the document: splits off frontmatter, repaginates from
    /// scratch, and re-clamps the index against the new slide count.
    ///
    /// Never fails: a malformed frontmatter block is logged and treated as
    /// body text.
    pub fn apply_document(&mut self, document: &str) -> DocumentUpdate {
        let (meta, body) = match extract_frontmatter(document) {
            Ok(Some(split)) => (split.meta, &document[split.body_start..]),
            Ok(None) => (DeckMeta::default(), document),
            Err(err) => {
                log::warn!("ignoring malformed deck frontmatter: {err}");
                (DeckMeta::default(), document)
            }
        };

        self.document = document.to_string();
        self.meta = meta;
        self.pages = paginate(body);

        let clamped = clamp_index(self.index as isize, self.pages.len());
        let navigation = (clamped != self.index).then(|| NavigationChange {
            from: self.index,
            to: clamped,
        });
        self.index = clamped;

        DocumentUpdate {
            page_count: self.pages.len(),
            navigation,
        }
    }

    /// Applies a movement, committing the clamped result.
    ///
    /// Returns the `(from, to)` change when the index actually moved, for
    /// deep-link sync and navigation events; `None` when the movement was a
    /// no-op at a boundary. The report is advisory and never gates the
    /// change itself.
    pub fn apply_movement(&mut self, movement: Movement) -> Option<NavigationChange> {
        let to = resolve_movement(movement, self.index, self.pages.len());
        let change = (to != self.index).then_some(NavigationChange {
            from: self.index,
            to,
        });
        self.index = to;
        change
    }

    /// Applies a command produced by the key mapping.
    pub fn apply_command(&mut self, command: DeckCommand) -> CommandEffect {
        match command {
            DeckCommand::Move(movement) => match self.apply_movement(movement) {
                Some(change) => CommandEffect::Navigated(change),
                None => CommandEffect::Unchanged,
            },
            DeckCommand::ToggleInvert => {
                self.view.inverted = !self.view.inverted;
                CommandEffect::ViewChanged(self.view)
            }
            DeckCommand::TogglePrint => {
                self.view.printing = !self.view.printing;
                CommandEffect::ViewChanged(self.view)
            }
            DeckCommand::ToggleEditor => {
                self.view.editing = !self.view.editing;
                CommandEffect::ViewChanged(self.view)
            }
        }
    }

    /// Seeds the index from a URL fragment. Non-numeric fragments resolve
    /// to slide 0; everything is clamped like any other movement.
    pub fn apply_start_fragment(&mut self, fragment: &str) -> Option<NavigationChange> {
        self.apply_movement(Movement::Goto(parse_fragment(fragment)))
    }

    /// The raw document text, frontmatter included.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Metadata from the frontmatter block, default when absent.
    pub fn meta(&self) -> &DeckMeta {
        &self.meta
    }

    /// The slide fragments in document order.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Number of slides.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Current slide index. Always in range while the deck is non-empty,
    /// pinned to 0 otherwise.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Markdown source of slide `index`.
    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    /// Markdown source of the current slide; `None` for an empty deck,
    /// which suppresses rendering.
    pub fn current_page(&self) -> Option<&str> {
        self.page(self.index)
    }

    /// Current view flags.
    pub fn view(&self) -> ViewFlags {
        self.view
    }
}
