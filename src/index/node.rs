//! Tree nodes.
//!
//! A node is either a leaf holding listings or an internal node holding child
//! nodes, never both. Its bounding box encloses everything below it; every
//! mutation restores that before returning.

use realty_types::{Property, Rectangle};

/// Contents of a node.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Leaf(Vec<Property>),
    Internal(Vec<SpatialNode>),
}

/// A spatial container with a bounding box over its contents.
#[derive(Debug, Clone)]
pub struct SpatialNode {
    bbox: Rectangle,
    kind: NodeKind,
}

impl SpatialNode {
    /// An empty leaf seeded with `bbox`.
    pub fn leaf(bbox: Rectangle) -> Self {
        Self {
            bbox,
            kind: NodeKind::Leaf(Vec::new()),
        }
    }

    /// An empty internal node seeded with `bbox`.
    pub fn internal(bbox: Rectangle) -> Self {
        Self {
            bbox,
            kind: NodeKind::Internal(Vec::new()),
        }
    }

    pub fn bbox(&self) -> &Rectangle {
        &self.bbox
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Add one listing below this node.
    ///
    /// A leaf appends it to its items. An internal node wraps it in a new
    /// single-listing leaf child and appends that child. Existing content is
    /// never moved, merged or split.
    pub fn insert(&mut self, property: Property) {
        match &mut self.kind {
            NodeKind::Leaf(items) => items.push(property),
            NodeKind::Internal(children) => {
                let mut child = SpatialNode::leaf(*property.bbox());
                child.insert(property);
                children.push(child);
            }
        }
        self.recompute_bbox();
    }

    /// Grow the box to enclose all direct contents.
    ///
    /// The current box is the seed, so a node never shrinks below the region
    /// it was created with (the configured universe, for the root).
    pub fn recompute_bbox(&mut self) {
        let seed = self.bbox;
        self.bbox = match &self.kind {
            NodeKind::Leaf(items) => items
                .iter()
                .fold(seed, |acc, item| acc.union(item.bbox())),
            NodeKind::Internal(children) => children
                .iter()
                .fold(seed, |acc, child| acc.union(child.bbox())),
        };
    }

    /// Depth-first collection of listings whose box intersects `region`,
    /// skipping any subtree whose box does not. Results keep insertion order.
    pub(crate) fn collect_intersecting<'a>(
        &'a self,
        region: &Rectangle,
        out: &mut Vec<&'a Property>,
    ) {
        if !self.bbox.intersects(region) {
            log::trace!("pruned subtree with bbox {} for region {}", self.bbox, region);
            return;
        }

        match &self.kind {
            NodeKind::Leaf(items) => {
                out.extend(items.iter().filter(|item| item.bbox().intersects(region)));
            }
            NodeKind::Internal(children) => {
                for child in children {
                    child.collect_intersecting(region, out);
                }
            }
        }
    }

    /// Number of listings in this subtree.
    pub fn len(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(items) => items.len(),
            NodeKind::Internal(children) => children.iter().map(SpatialNode::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Internal(children) => {
                1 + children.iter().map(SpatialNode::node_count).sum::<usize>()
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Internal(children) => children.iter().map(SpatialNode::leaf_count).sum(),
        }
    }

    /// Levels in this subtree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Internal(children) => {
                1 + children.iter().map(SpatialNode::depth).max().unwrap_or(0)
            }
        }
    }

    /// Check the enclosure invariant over the whole subtree.
    pub fn encloses_contents(&self) -> bool {
        match &self.kind {
            NodeKind::Leaf(items) => items.iter().all(|item| self.bbox.contains_rect(item.bbox())),
            NodeKind::Internal(children) => children
                .iter()
                .all(|child| self.bbox.contains_rect(child.bbox()) && child.encloses_contents()),
        }
    }

    /// All listings in the subtree, in insertion order.
    pub fn records(&self) -> Records<'_> {
        Records {
            stack: vec![self],
            current: <&[Property]>::default().iter(),
        }
    }
}

/// Depth-first iterator over the listings of a subtree.
pub struct Records<'a> {
    stack: Vec<&'a SpatialNode>,
    current: std::slice::Iter<'a, Property>,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a Property;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(item);
            }
            let node = self.stack.pop()?;
            match &node.kind {
                NodeKind::Leaf(items) => self.current = items.iter(),
                NodeKind::Internal(children) => self.stack.extend(children.iter().rev()),
            }
        }
    }
}
