//! Scene: node arena, forest roots and the axonometric view.

use std::cmp::Ordering;

use slotmap::SlotMap;

use crate::error::{CoreError, CoreResult};
use crate::node::{Node, NodeId, Parent};
use crate::projection::Axonometric;
use crate::{DMat4, DVec2, matrix};

/// Projection context and owner of every node created through it.
///
/// Nodes start unattached. Only nodes reachable from the scene's top-level
/// children take part in [`project_nodes`](Self::project_nodes) and
/// [`sort_nodes`](Self::sort_nodes). Nothing is recomputed automatically:
/// after changing angles or transforms, run both passes again before reading
/// projected values.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    view: Axonometric,
    children: Vec<NodeId>,
    nodes: SlotMap<NodeId, Node>,
}

impl Scene {
    pub fn new(pitch_degrees: f64, rotation_degrees: f64) -> Self {
        Self {
            view: Axonometric::new(pitch_degrees, rotation_degrees),
            children: Vec::new(),
            nodes: SlotMap::with_key(),
        }
    }

    pub fn set_pitch(&mut self, degrees: f64) {
        self.view.set_pitch(degrees);
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        self.view.set_rotation(degrees);
    }

    /// Sets the 2D offset added to every projected point and returns it.
    pub fn set_origin(&mut self, x: f64, y: f64) -> DVec2 {
        self.view.set_origin(DVec2::new(x, y))
    }

    #[inline]
    pub fn pitch(&self) -> f64 {
        self.view.pitch()
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.view.rotation()
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        self.view.origin()
    }

    #[inline]
    pub fn view(&self) -> &Axonometric {
        &self.view
    }

    /// Creates an unattached node.
    pub fn create_node(&mut self, label: Option<&str>) -> NodeId {
        self.nodes.insert(Node::new(label.map(str::to_owned)))
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Top-level children in insertion order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Number of live nodes, attached or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attached nodes in depth-first pre-order.
    pub fn collect_nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.nodes.get(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Adds `child` to the scene's top level. Duplicates and stale handles are
    /// ignored. A child of another parent is moved.
    pub fn add_child(&mut self, child: NodeId) -> NodeId {
        if !self.nodes.contains_key(child) || self.children.contains(&child) {
            return child;
        }

        self.unlink(child);
        self.children.push(child);
        self.nodes[child].parent = Some(Parent::Scene);
        self.set_attached(child, true);

        log::debug!("attached {child:?} ({}) to scene", self.label_of(child));
        child
    }

    /// Removes `child` from the scene's top level, detaching its subtree.
    pub fn remove_child(&mut self, child: NodeId) -> NodeId {
        if let Some(i) = self.children.iter().position(|&c| c == child) {
            self.children.remove(i);
            self.nodes[child].parent = None;
            self.set_attached(child, false);

            log::debug!("detached {child:?} ({}) from scene", self.label_of(child));
        }
        child
    }

    /// Adds `child` under `parent`. The child's subtree inherits the parent's
    /// attachment. Duplicates, stale handles and cycles are ignored.
    pub fn add_child_to(&mut self, parent: NodeId, child: NodeId) -> NodeId {
        if parent == child
            || !self.nodes.contains_key(child)
            || !self.nodes.contains_key(parent)
            || self.nodes[parent].children.contains(&child)
            || self.is_ancestor(child, parent)
        {
            return child;
        }

        self.unlink(child);
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(Parent::Node(parent));
        let attached = self.nodes[parent].attached;
        self.set_attached(child, attached);

        log::debug!(
            "added {child:?} ({}) under {parent:?} ({}), attached={attached}",
            self.label_of(child),
            self.label_of(parent)
        );
        child
    }

    /// Removes `child` from `parent`, detaching its subtree.
    pub fn remove_child_from(&mut self, parent: NodeId, child: NodeId) -> NodeId {
        let Some(p) = self.nodes.get_mut(parent) else {
            return child;
        };
        if let Some(i) = p.children.iter().position(|&c| c == child) {
            p.children.remove(i);
            self.nodes[child].parent = None;
            self.set_attached(child, false);

            log::debug!(
                "removed {child:?} ({}) from {parent:?} ({})",
                self.label_of(child),
                self.label_of(parent)
            );
        }
        child
    }

    /// Detaches `id` and frees it together with its whole subtree.
    /// Returns the number of nodes freed.
    pub fn delete_node(&mut self, id: NodeId) -> usize {
        if !self.nodes.contains_key(id) {
            return 0;
        }
        self.unlink(id);

        let mut freed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(next) {
                stack.extend(node.children);
                freed += 1;
            }
        }

        log::debug!("deleted {id:?} and {} descendants", freed - 1);
        freed
    }

    /// Projects one node.
    ///
    /// With `bubble` the full ancestor chain is composed from the top-level
    /// ancestor down. Without it the parent's cached matrix is reused, so the
    /// parent must already have been projected in the current pass.
    pub fn project(&mut self, id: NodeId, bubble: bool) -> CoreResult<()> {
        let node = self.nodes.get(id).ok_or(CoreError::UnknownNode(id))?;

        let mut world = DMat4::IDENTITY;
        if bubble {
            let mut chain = vec![id];
            let mut parent = node.parent;
            loop {
                match parent {
                    Some(Parent::Scene) => break,
                    Some(Parent::Node(p)) => {
                        let ancestor = self.nodes.get(p).ok_or(CoreError::UnknownNode(p))?;
                        chain.push(p);
                        parent = ancestor.parent;
                    }
                    None => return Err(CoreError::NodeNotAttached(id)),
                }
            }
            for &link in chain.iter().rev() {
                self.nodes[link].apply_local(&mut world);
            }
        } else {
            if !node.attached {
                return Err(CoreError::NodeNotAttached(id));
            }
            if let Some(Parent::Node(p)) = node.parent {
                matrix::copy(self.nodes[p].matrix(), &mut world);
            }
            node.apply_local(&mut world);
        }

        let projected = self
            .view
            .project(matrix::translation(&world), self.nodes[id].z_offset());
        self.nodes[id].store_projection(world, projected);
        Ok(())
    }

    /// Projects every attached node top-down, reusing each parent's matrix.
    pub fn project_nodes(&mut self) {
        let order = self.collect_nodes();
        for &id in &order {
            let node = &self.nodes[id];
            let mut world = match node.parent {
                Some(Parent::Node(p)) => *self.nodes[p].matrix(),
                _ => DMat4::IDENTITY,
            };
            node.apply_local(&mut world);

            let projected = self
                .view
                .project(matrix::translation(&world), node.z_offset());
            self.nodes[id].store_projection(world, projected);
        }
        log::trace!("projected {} nodes", order.len());
    }

    /// Orders attached nodes back to front by depth, then by `z_priority`,
    /// and writes each node's `z_index`. Equal keys keep traversal order.
    pub fn sort_nodes(&mut self) -> Vec<NodeId> {
        let mut order = self.collect_nodes();
        order.sort_by(|&a, &b| {
            let (a, b) = (&self.nodes[a], &self.nodes[b]);
            a.z_depth()
                .partial_cmp(&b.z_depth())
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    a.z_priority()
                        .partial_cmp(&b.z_priority())
                        .unwrap_or(Ordering::Equal)
                })
        });
        for (index, &id) in order.iter().enumerate() {
            self.nodes[id].z_index = index;
        }
        log::trace!("sorted {} nodes", order.len());
        order
    }

    /// Takes `child` out of whatever list currently holds it and marks its
    /// subtree detached.
    fn unlink(&mut self, child: NodeId) {
        match self.nodes[child].parent.take() {
            Some(Parent::Scene) => self.children.retain(|&c| c != child),
            Some(Parent::Node(p)) => {
                if let Some(parent) = self.nodes.get_mut(p) {
                    parent.children.retain(|&c| c != child);
                }
            }
            None => {}
        }
        self.set_attached(child, false);
    }

    fn set_attached(&mut self, root: NodeId, attached: bool) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(id) {
                node.attached = attached;
                stack.extend(node.children.iter().copied());
            }
        }
    }

    /// True if `ancestor` is `node` or one of its ancestors.
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = match self.nodes.get(id).and_then(|n| n.parent) {
                Some(Parent::Node(p)) => Some(p),
                _ => None,
            };
        }
        false
    }

    fn label_of(&self, id: NodeId) -> &str {
        self.nodes
            .get(id)
            .and_then(Node::label)
            .unwrap_or("unlabelled")
    }
}
