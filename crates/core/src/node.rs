//! Scene nodes: local transform, cached world matrix and projected output.

use slotmap::new_key_type;

use crate::projection::Projected;
use crate::{DMat4, DQuat, DVec2, DVec3, matrix, quaternion};

new_key_type! {
    /// Handle to a node stored in a [`Scene`](crate::Scene).
    pub struct NodeId;
}

/// What a node hangs off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parent {
    /// Top-level child of the scene.
    Scene,
    Node(NodeId),
}

/// A transformable point in the scene hierarchy.
///
/// Transform setters are plain data updates; nothing is projected until the
/// owning scene runs a projection pass.
#[derive(Clone, Debug)]
pub struct Node {
    label: Option<String>,

    pub(crate) parent: Option<Parent>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) attached: bool,

    position: DVec3,
    scale: DVec3,
    /// Last Euler angles passed to `rotate`, in degrees.
    rotation: DVec3,
    quaternion: DQuat,
    local_rotation: bool,

    z_priority: f64,
    z_offset: f64,

    matrix: DMat4,
    vertex: DVec3,
    projected: DVec2,
    z_depth: f64,
    pub(crate) z_index: usize,
}

impl Node {
    pub fn new(label: Option<String>) -> Self {
        Self {
            label,
            parent: None,
            children: Vec::new(),
            attached: false,
            position: DVec3::ZERO,
            scale: DVec3::ONE,
            rotation: DVec3::ZERO,
            quaternion: quaternion::identity(),
            local_rotation: false,
            z_priority: 0.0,
            z_offset: 0.0,
            matrix: DMat4::IDENTITY,
            vertex: DVec3::ZERO,
            projected: DVec2::ZERO,
            z_depth: 0.0,
            z_index: 0,
        }
    }

    /// Restores the default transform and clears projected output.
    ///
    /// Tree relations and the `local_rotation`, `z_priority` and `z_offset`
    /// settings are left alone.
    pub fn reset(&mut self) {
        self.projected = DVec2::ZERO;
        self.vertex = DVec3::ZERO;
        self.z_index = 0;
        self.z_depth = 0.0;

        self.position = DVec3::ZERO;
        self.scale = DVec3::ONE;
        self.rotation = DVec3::ZERO;

        matrix::identity(&mut self.matrix);
        self.quaternion = quaternion::identity();
    }

    /// Sets the local position.
    pub fn translate(&mut self, x: f64, y: f64, z: f64) {
        self.position = DVec3::new(x, y, z);
    }

    /// Sets the local scale factors.
    pub fn scale(&mut self, x: f64, y: f64, z: f64) {
        self.scale = DVec3::new(x, y, z);
    }

    /// Sets the rotation from Euler angles in degrees.
    ///
    /// With `local_rotation` enabled the difference from the previous angles is
    /// composed onto the current orientation instead of replacing it.
    pub fn rotate(&mut self, x: f64, y: f64, z: f64) {
        if self.local_rotation {
            let delta = quaternion::from_euler(
                x - self.rotation.x,
                y - self.rotation.y,
                z - self.rotation.z,
            );
            self.quaternion = quaternion::multiply(delta, self.quaternion);
        } else {
            self.quaternion = quaternion::from_euler(x, y, z);
        }
        self.rotation = DVec3::new(x, y, z);
    }

    pub fn set_rotation_x(&mut self, degrees: f64) {
        self.rotate(degrees, self.rotation.y, self.rotation.z);
    }

    pub fn set_rotation_y(&mut self, degrees: f64) {
        self.rotate(self.rotation.x, degrees, self.rotation.z);
    }

    pub fn set_rotation_z(&mut self, degrees: f64) {
        self.rotate(self.rotation.x, self.rotation.y, degrees);
    }

    #[inline]
    pub fn rotation_x(&self) -> f64 {
        self.rotation.x
    }

    #[inline]
    pub fn rotation_y(&self) -> f64 {
        self.rotation.y
    }

    #[inline]
    pub fn rotation_z(&self) -> f64 {
        self.rotation.z
    }

    /// Last Euler angles passed to `rotate`. Not an absolute orientation once
    /// local rotations have been accumulated.
    #[inline]
    pub fn rotation(&self) -> DVec3 {
        self.rotation
    }

    #[inline]
    pub fn quaternion(&self) -> DQuat {
        self.quaternion
    }

    #[inline]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    #[inline]
    pub fn scale_factors(&self) -> DVec3 {
        self.scale
    }

    #[inline]
    pub fn local_rotation(&self) -> bool {
        self.local_rotation
    }

    pub fn set_local_rotation(&mut self, local: bool) {
        self.local_rotation = local;
    }

    #[inline]
    pub fn z_priority(&self) -> f64 {
        self.z_priority
    }

    /// Tie-break for equal depths; lower sorts further back.
    pub fn set_z_priority(&mut self, priority: f64) {
        self.z_priority = priority;
    }

    #[inline]
    pub fn z_offset(&self) -> f64 {
        self.z_offset
    }

    /// Added to the projected depth.
    pub fn set_z_offset(&mut self, offset: f64) {
        self.z_offset = offset;
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[inline]
    pub fn parent(&self) -> Option<Parent> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True when reachable from the scene's top-level children.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Composed local-to-scene matrix from the last projection.
    #[inline]
    pub fn matrix(&self) -> &DMat4 {
        &self.matrix
    }

    /// Scene-space vertex from the last projection.
    #[inline]
    pub fn vertex(&self) -> DVec3 {
        self.vertex
    }

    #[inline]
    pub fn vx(&self) -> f64 {
        self.vertex.x
    }

    #[inline]
    pub fn vy(&self) -> f64 {
        self.vertex.y
    }

    #[inline]
    pub fn vz(&self) -> f64 {
        self.vertex.z
    }

    #[inline]
    pub fn projected(&self) -> DVec2 {
        self.projected
    }

    #[inline]
    pub fn px(&self) -> f64 {
        self.projected.x
    }

    #[inline]
    pub fn py(&self) -> f64 {
        self.projected.y
    }

    #[inline]
    pub fn z_depth(&self) -> f64 {
        self.z_depth
    }

    /// Draw position from the last sort; 0 is drawn first.
    #[inline]
    pub fn z_index(&self) -> usize {
        self.z_index
    }

    /// Appends this node's translate, rotate and scale to `target`.
    pub(crate) fn apply_local(&self, target: &mut DMat4) {
        let p = self.position;
        let s = self.scale;
        matrix::translate(target, p.x, p.y, p.z);
        matrix::multiply(target, &quaternion::to_matrix(self.quaternion));
        matrix::scale(target, s.x, s.y, s.z);
    }

    /// Stores a freshly composed world matrix and its projection.
    pub(crate) fn store_projection(&mut self, world: DMat4, projected: Projected) {
        self.matrix = world;
        self.vertex = matrix::translation(&world);
        self.projected = projected.point;
        self.z_depth = projected.depth;
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(None)
    }
}
