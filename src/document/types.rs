//! Core rendered-page types.

/// One direct child of a rendered block.
///
/// Only literal text runs are usable as matching anchors; output of nested
/// markup (links, template expansions, interactive widgets) renders text too,
/// but that text has no literal counterpart on the block's source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A literal text run, present verbatim in the source markup.
    Text(String),
    /// Rendered text of a nested markup child.
    Markup(String),
}

impl Segment {
    /// The rendered text of this segment, whatever its kind.
    pub fn rendered(&self) -> &str {
        match self {
            Self::Text(text) | Self::Markup(text) => text,
        }
    }
}

/// A region of rendered output corresponding to one semantic unit of the
/// document (typically a paragraph).
///
/// Blocks are ephemeral: they exist only in the rendered view and carry just
/// enough structure to be matched back to the source markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Position of the block in the rendered document flow. Shares one
    /// numbering with [`Heading`] positions so outline lookups work.
    position: usize,
    /// Direct children, in rendered order.
    segments: Vec<Segment>,
}

impl Block {
    /// Create a block at the given flow position.
    pub fn new(position: usize, segments: Vec<Segment>) -> Self {
        Self { position, segments }
    }

    /// Position of the block in the rendered document flow.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Direct children, in rendered order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the block renders any visible text at all.
    ///
    /// This counts nested markup output too: a paragraph holding nothing but
    /// a link still shows text to the reader, so it still gets an edit
    /// affordance (even though matching it will fail and fall back).
    pub fn has_text(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| !segment.rendered().trim().is_empty())
    }

    /// The longest trimmed direct text run, used as the matching anchor.
    ///
    /// Returns `None` when the block has no non-empty direct text runs.
    /// Earlier segments win ties, so the choice is stable for a given block.
    pub fn longest_text(&self) -> Option<&str> {
        let mut longest: Option<&str> = None;
        for segment in &self.segments {
            let Segment::Text(text) = segment else {
                continue;
            };
            let trimmed = text.trim();
            if trimmed.len() > longest.map_or(0, str::len) {
                longest = Some(trimmed);
            }
        }
        longest
    }
}

/// A heading in the rendered document, part of the structural outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1 = page title level, 2 = top section, ...).
    pub level: u8,
    /// Stable heading identifier, with spaces encoded as underscores.
    pub id: String,
    /// Position in the rendered document flow (same numbering as blocks).
    pub position: usize,
}

impl Heading {
    /// Human-readable section name: the identifier with underscores restored
    /// to spaces, as used in section-link edit summaries.
    pub fn section_label(&self) -> String {
        self.id.replace('_', " ")
    }
}

/// The rendered view of one document: its editable blocks plus a pre-built
/// heading outline for enclosing-section lookup.
#[derive(Debug, Clone, Default)]
pub struct RenderedPage {
    blocks: Vec<Block>,
    outline: Vec<Heading>,
}

impl RenderedPage {
    /// Assemble a rendered page. `outline` must be ordered by position.
    pub fn new(blocks: Vec<Block>, outline: Vec<Heading>) -> Self {
        debug_assert!(
            outline.windows(2).all(|w| w[0].position <= w[1].position),
            "outline must be ordered by position"
        );
        Self { blocks, outline }
    }

    /// All blocks, in rendered order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The heading outline, in rendered order.
    pub fn outline(&self) -> &[Heading] {
        &self.outline
    }

    /// Blocks that should receive an edit affordance (those rendering text).
    pub fn editable_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|block| block.has_text())
    }

    /// The heading whose section encloses `block`: the last outline entry
    /// positioned before the block, or `None` for lead content.
    pub fn enclosing_heading(&self, block: &Block) -> Option<&Heading> {
        self.outline
            .iter()
            .take_while(|heading| heading.position < block.position())
            .last()
    }

    /// One-based index of the enclosing section for full-editor fallback
    /// links; `0` addresses the lead section.
    pub fn section_number(&self, block: &Block) -> usize {
        self.outline
            .iter()
            .take_while(|heading| heading.position < block.position())
            .count()
    }
}
