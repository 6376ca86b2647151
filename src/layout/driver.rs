//! Event-driven repagination.
//!
//! The packing algorithm in the parent module is pure; this driver is the
//! outer contract that re-invokes it on observed triggers (mount, content
//! change, resize, asset loads, the settling timer). Each trigger runs one
//! full measure-and-pack pass synchronously; there is no incremental diffing
//! and no cancellation, so passes are strictly ordered by trigger arrival.

use log::debug;

use super::{Block, LayoutOptions, Page, paginate};

/// What caused a repagination pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Initial mount of the measurement surface.
    Mount,
    /// The block sequence changed.
    ContentChanged,
    /// Viewport resize.
    Resize,
    /// An image within the measured content finished loading.
    AssetLoaded,
    /// An image failed to load (its final rendered height is now known).
    AssetFailed,
    /// The short fallback timer that absorbs layout settling after mount.
    SettleTimer,
}

/// The off-screen measurement surface.
///
/// Implementations style an off-screen clone identically to final
/// presentation and read back rendered heights. `measure` returns `None`
/// when the surface is detached (e.g. unmounted mid-computation).
pub trait Measure {
    /// Rendered pixel height of each block, in order; `None` if detached.
    fn measure(&mut self, block_ids: &[u32]) -> Option<Vec<f32>>;

    /// Current maximum usable content height for one page.
    fn max_height(&self) -> f32;
}

/// Holds the block sequence and the last valid page set, re-packing on every
/// trigger. A failed measurement pass is a no-op: the previous page set stays
/// in place until a later pass succeeds.
pub struct Repaginator<M: Measure> {
    measurer: M,
    inset: f32,
    block_ids: Vec<u32>,
    pages: Vec<Page>,
}

impl<M: Measure> Repaginator<M> {
    pub fn new(measurer: M, inset: f32) -> Self {
        Self {
            measurer,
            inset,
            block_ids: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Replace the block sequence and immediately re-pack.
    pub fn set_blocks(&mut self, block_ids: Vec<u32>) {
        self.block_ids = block_ids;
        self.on_trigger(Trigger::ContentChanged);
    }

    /// Run one measure-and-pack pass. Returns whether a new page set was
    /// produced; `false` means the surface was detached and the previous
    /// result is retained.
    pub fn on_trigger(&mut self, trigger: Trigger) -> bool {
        debug!("repagination pass: {:?}", trigger);

        let Some(heights) = self.measurer.measure(&self.block_ids) else {
            debug!(
                "measurement surface detached; keeping {} page(s)",
                self.pages.len()
            );
            return false;
        };
        if heights.len() != self.block_ids.len() {
            // A partially rendered surface is as unusable as a detached one.
            debug!("measurement incomplete; keeping {} page(s)", self.pages.len());
            return false;
        }

        let blocks: Vec<Block> = self
            .block_ids
            .iter()
            .zip(&heights)
            .map(|(&id, &height)| Block { id, height })
            .collect();
        let opts = LayoutOptions::new(self.measurer.max_height()).with_inset(self.inset);

        self.pages = paginate(&blocks, &opts);
        debug!("packed {} block(s) into {} page(s)", blocks.len(), self.pages.len());
        true
    }

    /// The last successfully computed page set.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Mutable access to the measurement surface, for feeding it events.
    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeSurface {
        heights: HashMap<u32, f32>,
        max_height: f32,
        attached: bool,
    }

    impl Measure for FakeSurface {
        fn measure(&mut self, block_ids: &[u32]) -> Option<Vec<f32>> {
            if !self.attached {
                return None;
            }
            Some(
                block_ids
                    .iter()
                    .map(|id| self.heights.get(id).copied().unwrap_or(0.0))
                    .collect(),
            )
        }

        fn max_height(&self) -> f32 {
            self.max_height
        }
    }

    fn surface(heights: &[(u32, f32)], max_height: f32) -> FakeSurface {
        FakeSurface {
            heights: heights.iter().copied().collect(),
            max_height,
            attached: true,
        }
    }

    #[test]
    fn mount_produces_pages() {
        let mut driver = Repaginator::new(
            surface(&[(0, 500.0), (1, 500.0), (2, 100.0)], 900.0),
            0.0,
        );
        driver.set_blocks(vec![0, 1, 2]);
        assert_eq!(driver.pages().len(), 2);
    }

    #[test]
    fn detached_surface_keeps_previous_pages() {
        let mut driver = Repaginator::new(surface(&[(0, 100.0), (1, 100.0)], 900.0), 0.0);
        driver.set_blocks(vec![0, 1]);
        assert_eq!(driver.pages().len(), 1);

        driver.measurer.attached = false;
        assert!(!driver.on_trigger(Trigger::Resize));
        assert_eq!(driver.pages().len(), 1);

        driver.measurer.attached = true;
        assert!(driver.on_trigger(Trigger::SettleTimer));
        assert_eq!(driver.pages().len(), 1);
    }

    #[test]
    fn resize_changes_packing() {
        let mut driver = Repaginator::new(surface(&[(0, 400.0), (1, 400.0)], 900.0), 0.0);
        driver.set_blocks(vec![0, 1]);
        assert_eq!(driver.pages().len(), 1);

        driver.measurer.max_height = 500.0;
        assert!(driver.on_trigger(Trigger::Resize));
        assert_eq!(driver.pages().len(), 2);
    }

    #[test]
    fn asset_load_updates_heights() {
        let mut driver = Repaginator::new(surface(&[(0, 100.0), (1, 100.0)], 900.0), 0.0);
        driver.set_blocks(vec![0, 1]);
        assert_eq!(driver.pages().len(), 1);

        // The image finished loading and block 1 grew past the budget.
        driver.measurer.heights.insert(1, 850.0);
        assert!(driver.on_trigger(Trigger::AssetLoaded));
        assert_eq!(driver.pages().len(), 2);
    }

    #[test]
    fn inset_is_applied_to_every_pass() {
        let mut driver = Repaginator::new(surface(&[(0, 450.0), (1, 450.0)], 900.0), 100.0);
        driver.set_blocks(vec![0, 1]);
        assert_eq!(driver.pages().len(), 2);
    }
}
