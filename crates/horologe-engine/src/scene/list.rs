use core::ops::{Deref, DerefMut};

use crate::coords::{Affine, Vec2};

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + transform.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Logical-pixel transform applied to the command's geometry.
    pub transform: Affine,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Transforms
///
/// Use [`rotated`](Self::rotated) to scope draw commands to a rotation. The
/// returned guard derefs to the list and restores the previous transform
/// when dropped, so an early return cannot leak the rotation into later items.
///
/// ```
/// # use horologe_engine::coords::Vec2;
/// # use horologe_engine::paint::Color;
/// # use horologe_engine::scene::{DrawList, ZIndex};
/// let mut list = DrawList::new();
/// {
///     let mut hand = list.rotated(Vec2::new(150.0, 150.0), 30.0);
///     hand.push_circle(ZIndex(2), Vec2::new(200.0, 150.0), 4.0, Color::from_rgb_hex(0xFF0000));
/// }
/// assert!(list.current_transform().is_identity());
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active transforms.
    /// The top is always the effective transform, already composed with all parents.
    transform_stack: Vec<Affine>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the transform stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.transform_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current transform from the transform stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            transform: self.current_transform(),
        });

        self.sorted_dirty = true;
    }

    /// Effective transform for the next pushed item.
    #[inline]
    pub fn current_transform(&self) -> Affine {
        self.transform_stack.last().copied().unwrap_or(Affine::IDENTITY)
    }

    /// Begins a transformed region. `local` is applied before any parent transform.
    ///
    /// Calls must be balanced with [`pop_transform`](Self::pop_transform).
    #[inline]
    pub fn push_transform(&mut self, local: Affine) {
        let effective = local.then(self.current_transform());
        self.transform_stack.push(effective);
    }

    /// Begins a region rotated by `degrees` (clockwise on screen) about `pivot`.
    #[inline]
    pub fn push_rotation(&mut self, pivot: Vec2, degrees: f32) {
        self.push_transform(Affine::rotation_about(pivot, degrees));
    }

    /// Ends the most recent region started by [`push_transform`](Self::push_transform).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching push.
    #[inline]
    pub fn pop_transform(&mut self) {
        debug_assert!(
            !self.transform_stack.is_empty(),
            "pop_transform called without matching push_transform"
        );
        self.transform_stack.pop();
    }

    /// Scoped rotation: pushes the rotation and pops it when the guard drops.
    #[must_use = "the rotation is popped as soon as the guard is dropped"]
    pub fn rotated(&mut self, pivot: Vec2, degrees: f32) -> TransformScope<'_> {
        let depth = self.transform_stack.len();
        self.push_rotation(pivot, degrees);
        TransformScope { list: self, depth }
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

impl PartialEq for DrawList {
    /// Two lists are equal when they record the same items; scratch buffers are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

/// Guard returned by [`DrawList::rotated`].
///
/// Derefs to the underlying [`DrawList`]. On drop, the transform stack is
/// truncated back to its depth at creation, which also discards any
/// unbalanced pushes made through the guard.
pub struct TransformScope<'a> {
    list: &'a mut DrawList,
    depth: usize,
}

impl Deref for TransformScope<'_> {
    type Target = DrawList;

    fn deref(&self) -> &DrawList {
        self.list
    }
}

impl DerefMut for TransformScope<'_> {
    fn deref_mut(&mut self) -> &mut DrawList {
        self.list
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        self.list.transform_stack.truncate(self.depth);
    }
}
