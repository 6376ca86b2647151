//! Page layout: packing measured content blocks into fixed-height pages.
//!
//! The algorithm is a pure function of the block sequence and the height
//! budget; the event-driven recomputation contract lives in [`driver`]. Page
//! sets are recomputed from scratch on every trigger and discarded between
//! renders, never incrementally mutated.

pub mod driver;

pub use driver::{Measure, Repaginator, Trigger};

/// An atomic, non-splittable unit of renderable content with a measured
/// pixel height. Order-significant; the paginator never reorders or splits.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub id: u32,
    pub height: f32,
}

/// An ordered, contiguous slice of the block sequence assigned to one page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    pub index: usize,
    pub blocks: Vec<Block>,
}

impl Page {
    /// Cumulative height of the page's blocks.
    pub fn content_height(&self) -> f32 {
        self.blocks.iter().map(|b| b.height).sum()
    }
}

/// Height budget for one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Maximum usable content height in pixels.
    pub max_height: f32,
    /// Fixed inset subtracted from the budget for safe margins.
    pub inset: f32,
}

impl LayoutOptions {
    pub fn new(max_height: f32) -> Self {
        Self {
            max_height,
            inset: 0.0,
        }
    }

    pub fn with_inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    fn budget(&self) -> f32 {
        (self.max_height - self.inset).max(0.0)
    }
}

/// Pack blocks into pages, greedy, single pass, left to right.
///
/// A block is appended to the current page while the accumulated height stays
/// within the budget; otherwise the page closes and the block opens the next
/// one. A block taller than the budget is never split: it lands alone on its
/// own page and the overflow is accepted, never dropped.
///
/// # Examples
///
/// ```
/// use folio::{paginate, Block, LayoutOptions};
///
/// let blocks = [
///     Block { id: 0, height: 500.0 },
///     Block { id: 1, height: 500.0 },
///     Block { id: 2, height: 100.0 },
/// ];
/// let pages = paginate(&blocks, &LayoutOptions::new(900.0));
/// assert_eq!(pages.len(), 2);
/// assert_eq!(pages[0].blocks.len(), 1);
/// assert_eq!(pages[1].blocks.len(), 2);
/// ```
pub fn paginate(blocks: &[Block], opts: &LayoutOptions) -> Vec<Page> {
    let budget = opts.budget();
    let mut pages: Vec<Page> = Vec::new();
    let mut current: Vec<Block> = Vec::new();
    let mut accumulated = 0.0f32;

    for block in blocks {
        if !current.is_empty() && accumulated + block.height > budget {
            pages.push(Page {
                index: pages.len(),
                blocks: std::mem::take(&mut current),
            });
            accumulated = 0.0;
        }
        accumulated += block.height;
        current.push(block.clone());
    }

    if !current.is_empty() {
        pages.push(Page {
            index: pages.len(),
            blocks: current,
        });
    }

    pages
}
