//! Windowed layout for fixed-column product grids.
//!
//! A [`VirtualGrid`] splits a catalog into row bands of `columns` items and
//! reports only the rows that intersect the scroll viewport, widened by a few
//! overscan rows so fast scrolling does not show blank bands. Finding the
//! visible range is constant time regardless of catalog size.
//!
//! All distances are in CSS pixels.

use std::fmt;
use std::ops::Range;

/// Default rows kept mounted above and below the viewport.
pub const DEFAULT_OVERSCAN_ROWS: usize = 2;

/// Default number of skeleton rows shown while items are loading.
pub const DEFAULT_SKELETON_ROWS: usize = 2;

/// Shape of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    /// Estimated height of one item.
    pub item_height: usize,
    /// Vertical space between rows.
    pub gap: usize,
    pub overscan: usize,
    pub skeleton_rows: usize,
}

impl GridLayout {
    /// Layout with default overscan and skeleton rows.
    ///
    /// `columns` below 1 is treated as 1.
    #[must_use]
    pub fn new(columns: usize, item_height: usize, gap: usize) -> Self {
        Self {
            columns: columns.max(1),
            item_height,
            gap,
            overscan: DEFAULT_OVERSCAN_ROWS,
            skeleton_rows: DEFAULT_SKELETON_ROWS,
        }
    }

    #[must_use]
    pub const fn with_overscan(mut self, rows: usize) -> Self {
        self.overscan = rows;
        self
    }

    #[must_use]
    pub const fn with_skeleton_rows(mut self, rows: usize) -> Self {
        self.skeleton_rows = rows;
        self
    }

    /// Distance between the tops of consecutive rows.
    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.item_height.saturating_add(self.gap).max(1)
    }

    fn columns(&self) -> usize {
        self.columns.max(1)
    }
}

/// The visible part of the scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub scroll_top: usize,
    pub height: usize,
}

/// Stable key of a grid cell, derived from the item index alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey(usize);

impl CellKey {
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Placeholder shown in place of an item while the catalog loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Skeleton {
    pub slot: usize,
}

impl fmt::Display for Skeleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skeleton-{}", self.slot)
    }
}

/// A mounted item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell<R> {
    pub key: CellKey,
    pub content: R,
}

/// A mounted row band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow<R> {
    pub index: usize,
    /// Distance from the top of the grid to the top of this row.
    pub offset: usize,
    pub cells: Vec<GridCell<R>>,
}

/// What the grid should mount for the current viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridFrame<R> {
    /// Items are not available yet.
    Loading(Vec<Skeleton>),
    /// There are no items. Empty-state messaging is up to the caller.
    Empty,
    /// Rows intersecting the viewport, plus overscan.
    Rows {
        total_height: usize,
        rows: Vec<GridRow<R>>,
    },
}

/// Virtualized grid state: a layout plus the current viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualGrid {
    layout: GridLayout,
    viewport: Viewport,
}

impl VirtualGrid {
    #[must_use]
    pub const fn new(layout: GridLayout, viewport: Viewport) -> Self {
        Self { layout, viewport }
    }

    #[must_use]
    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Scroll event: move the viewport.
    pub fn scroll_to(&mut self, scroll_top: usize) {
        self.viewport.scroll_top = scroll_top;
    }

    /// Resize event: change the viewport height.
    pub fn resize(&mut self, height: usize) {
        self.viewport.height = height;
    }

    /// Number of row bands for `item_count` items.
    #[must_use]
    pub fn row_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.layout.columns())
    }

    /// Total scrollable height: `rows × (item_height + gap)`.
    #[must_use]
    pub fn total_height(&self, item_count: usize) -> usize {
        self.row_count(item_count)
            .saturating_mul(self.layout.row_stride())
    }

    /// Rows to mount: those intersecting the viewport, widened by overscan.
    #[must_use]
    pub fn visible_rows(&self, item_count: usize) -> Range<usize> {
        let rows = self.row_count(item_count);
        if rows == 0 {
            return 0..0;
        }

        let stride = self.layout.row_stride();
        let top = self.viewport.scroll_top;
        let bottom = top.saturating_add(self.viewport.height);

        let first = top / stride;
        let last = bottom.div_ceil(stride).max(first.saturating_add(1));

        let start = first.saturating_sub(self.layout.overscan).min(rows);
        let end = last.saturating_add(self.layout.overscan).min(rows);
        start..end.max(start)
    }

    /// Item indices to mount, in order.
    #[must_use]
    pub fn visible_items(&self, item_count: usize) -> Range<usize> {
        let rows = self.visible_rows(item_count);
        let columns = self.layout.columns();
        let start = rows.start.saturating_mul(columns).min(item_count);
        let end = rows.end.saturating_mul(columns).min(item_count);
        start..end
    }

    /// Build the frame for `items`, calling `render` for each mounted item.
    ///
    /// `None` means the items are still loading and yields skeletons shaped
    /// like the grid.
    pub fn render<T, R>(
        &self,
        items: Option<&[T]>,
        mut render: impl FnMut(&T, usize) -> R,
    ) -> GridFrame<R> {
        let Some(items) = items else {
            let slots = self.layout.columns() * self.layout.skeleton_rows;
            return GridFrame::Loading((0..slots).map(|slot| Skeleton { slot }).collect());
        };

        if items.is_empty() {
            return GridFrame::Empty;
        }

        let columns = self.layout.columns();
        let stride = self.layout.row_stride();
        let rows = self
            .visible_rows(items.len())
            .map(|row| {
                let begin = row * columns;
                let end = (begin + columns).min(items.len());
                let cells = items
                    .get(begin..end)
                    .unwrap_or_default()
                    .iter()
                    .zip(begin..)
                    .map(|(item, index)| GridCell {
                        key: CellKey(index),
                        content: render(item, index),
                    })
                    .collect();
                GridRow {
                    index: row,
                    offset: row * stride,
                    cells,
                }
            })
            .collect();

        GridFrame::Rows {
            total_height: self.total_height(items.len()),
            rows,
        }
    }
}
