#![deny(missing_docs)]
//! slidedown core: pagination, navigation, and deck state for Markdown
//! slide decks.

/// Keyboard command mapping.
pub mod command;
/// Deck state and transitions.
pub mod deck;
/// Indent stripping for embedded Markdown.
pub mod dedent;
/// URL fragment codec for deep-link sync.
pub mod deeplink;
/// Fenced code tracking for the paginator.
pub mod fence;
/// YAML frontmatter extraction for deck metadata.
pub mod frontmatter;
/// Slide index movements and clamping.
pub mod navigate;
/// Document-to-slides splitting.
pub mod paginate;

pub use command::{DeckCommand, command_for_key};
pub use deck::{CommandEffect, DeckState, DocumentUpdate, ViewFlags};
pub use dedent::strip_common_indent;
pub use deeplink::{format_fragment, parse_fragment};
pub use fence::FenceTracker;
pub use frontmatter::{DeckMeta, FrontmatterError, FrontmatterSplit, extract_frontmatter};
pub use navigate::{Movement, NavigationChange, clamp_index, resolve_movement};
pub use paginate::{is_slide_delimiter, paginate};
