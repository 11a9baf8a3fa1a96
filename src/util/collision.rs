use crate::core::prelude::*;
use crate::util::{gg_float, gg_range};
use crate::warn_every_seconds;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Which way [`HitBox::flip`] mirrors a shape.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FlipMode {
    /// Mirror left-right, across a vertical line.
    Horizontal,
    /// Mirror top-bottom, across a horizontal line.
    Vertical,
}

/// The closed interval covered by a set of points projected onto an axis.
///
/// Axes are raw edge vectors rather than unit normals: the scale factor is the same for both
/// shapes being compared on a given axis, so it cannot change whether the intervals overlap, and
/// skipping it keeps the arithmetic exact.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Projection {
    pub min: i64,
    pub max: i64,
}

impl Projection {
    pub fn of(corners: &[Point; 4], axis: Point) -> Self {
        let (min, max) = corners
            .iter()
            .map(|corner| corner.dot(axis))
            .minmax()
            .into_option()
            .unwrap_or_default();
        Self { min, max }
    }

    /// Touching endpoints count as overlapping.
    pub fn overlaps(&self, other: &Projection) -> bool {
        gg_range::overlaps_inclusive(&(self.min..=self.max), &(other.min..=other.max))
    }
}

/// Rotates `p` about `c` by `degrees`, counter-clockwise as seen on screen (y down), and snaps the
/// result back onto the integer grid.
pub fn rotate_point(p: Point, c: Point, degrees: f64, rounding: RoundingMode) -> Point {
    rotate_vec(p.as_vec2(), c.as_vec2(), degrees).to_point(rounding)
}

fn rotate_vec(p: Vec2, c: Vec2, degrees: f64) -> Vec2 {
    if degrees == 0. {
        return p;
    }
    let radius = (p - c).len();
    if radius < EPSILON {
        return p;
    }
    // Bearing counter-clockwise from the positive x-axis, with y flipped to point up.
    let bearing = (c.y - p.y).atan2(p.x - c.x).to_degrees();
    let new_bearing = (bearing + degrees).to_radians();
    Vec2 {
        x: c.x + radius * new_bearing.cos(),
        y: c.y - radius * new_bearing.sin(),
    }
}

/// The full state of a [`HitBox`].
///
/// The persisted part is the normal-pose rectangle (`origin`, `width`, `height`) plus the
/// orientation (`angle`, `mirror_x`, `mirror_y`). `corners` and `axes` are derived from those
/// every time any of them changes:
/// 1. take the normal-pose corners, clockwise from the top-left;
/// 2. mirror them about the normal-pose centre for each mirror flag that is set;
/// 3. rotate them by `angle` degrees about the same centre;
/// 4. snap them onto the grid according to `rounding`, then recompute `axes`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
    /// Degrees, counter-clockwise, relative to the normal pose.
    pub angle: f64,
    pub mirror_x: bool,
    pub mirror_y: bool,
    pub rounding: RoundingMode,
    pub corners: [Point; 4],
    /// The two edges meeting at the topmost corner.
    pub axes: [Point; 2],
}

impl Pose {
    fn normal(origin: Point, width: i32, height: i32, rounding: RoundingMode) -> Self {
        let mut rv = Self {
            origin,
            width,
            height,
            angle: 0.,
            mirror_x: false,
            mirror_y: false,
            rounding,
            corners: [Point::zero(); 4],
            axes: [Point::zero(); 2],
        };
        rv.derive();
        rv
    }

    // Far corners that fall outside the `i32` range are clamped onto it.
    fn normal_corners(&self) -> [Point; 4] {
        let Point { x, y } = self.origin;
        let right = gg_float::saturate_i32(i64::from(x) + i64::from(self.width));
        let bottom = gg_float::saturate_i32(i64::from(y) + i64::from(self.height));
        [
            Point { x, y },
            Point { x: right, y },
            Point {
                x: right,
                y: bottom,
            },
            Point { x, y: bottom },
        ]
    }

    fn normal_centre(&self) -> Vec2 {
        Vec2 {
            x: f64::from(self.origin.x) + f64::from(self.width) / 2.,
            y: f64::from(self.origin.y) + f64::from(self.height) / 2.,
        }
    }

    fn derive(&mut self) {
        let centre = self.normal_centre();
        let corners = self.normal_corners().map(|corner| {
            let mut v = corner.as_vec2();
            if self.mirror_x {
                v.x = 2. * centre.x - v.x;
            }
            if self.mirror_y {
                v.y = 2. * centre.y - v.y;
            }
            rotate_vec(v, centre, self.angle).to_point(self.rounding)
        });
        self.corners = corners;
        self.recompute_axes();
    }

    fn top_index(&self) -> usize {
        let mut rv = 0;
        for i in 1..4 {
            if self.corners[i].y < self.corners[rv].y {
                rv = i;
            }
        }
        rv
    }

    fn recompute_axes(&mut self) {
        let top = self.top_index();
        let left = (top + 3) % 4;
        let right = (top + 1) % 4;
        self.axes = [
            self.corners[top].saturating_sub(self.corners[left]),
            self.corners[top].saturating_sub(self.corners[right]),
        ];
    }

    /// The midpoint of corners 0 and 2, which are always diagonally opposite.
    pub fn center(&self) -> Point {
        let [a, _, c, _] = self.corners;
        let midpoint = |a: i32, c: i32| {
            let (a, c) = (i64::from(a), i64::from(c));
            gg_float::saturate_i32((c - a) / 2 + a)
        };
        Point {
            x: midpoint(a.x, c.x),
            y: midpoint(a.y, c.y),
        }
    }

    /// A shape with a zero-length edge has no area and never collides with anything.
    pub fn is_degenerate(&self) -> bool {
        self.axes.iter().any(|axis| axis.is_zero())
    }

    fn collides_with(&self, other: &Pose) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            warn_every_seconds!(
                1,
                "collision query involving degenerate hit box: {:?} vs. {:?}",
                self.corners,
                other.corners
            );
            return false;
        }
        self.axes.iter().chain(other.axes.iter()).all(|&axis| {
            Projection::of(&self.corners, axis).overlaps(&Projection::of(&other.corners, axis))
        })
    }

    fn flip_across(&mut self, mode: FlipMode, line: Point) {
        // The mirrored extent of [origin, origin + size] across `line` starts at
        // 2 * line - origin - size.
        let mirrored = |line: i32, origin: i32, size: i32| {
            gg_float::saturate_i32(2 * i64::from(line) - i64::from(origin) - i64::from(size))
        };
        match mode {
            FlipMode::Horizontal => {
                self.origin.x = mirrored(line.x, self.origin.x, self.width);
                self.mirror_x = !self.mirror_x;
            }
            FlipMode::Vertical => {
                self.origin.y = mirrored(line.y, self.origin.y, self.height);
                self.mirror_y = !self.mirror_y;
            }
        }
        self.negate_angle();
    }

    // A reflection reverses the sense of any rotation composed with it.
    fn negate_angle(&mut self) {
        self.angle = -self.angle;
        if self.angle == 0. {
            self.angle = 0.;
        }
    }
}

/// A rectangle for collision detection that can be moved, rotated and flipped.
///
/// All methods take `&self` and are safe to call from several threads at once: each hit box
/// guards its state with its own reader/writer lock. Mutators hold the write lock for the whole
/// update, so readers never see corners that disagree with the axes or the angle.
///
/// # Examples
///
/// ```
/// use hitbox::util::collision::{collide, HitBox};
///
/// let player = HitBox::new(0, 0, 10, 10);
/// let wall = HitBox::new(10, 0, 10, 10);
/// assert!(collide(&player, &wall));
///
/// player.move_to(-5, 0);
/// assert!(!collide(&player, &wall));
/// ```
pub struct HitBox {
    id: HitBoxId,
    pose: RwLock<Pose>,
}

impl HitBox {
    /// Creates a hit box at `(x, y)` with the given size, in normal pose.
    ///
    /// Zero-sized boxes are accepted but never collide; see [`HitBox::try_new`] to reject them.
    ///
    /// Any `i32` input is accepted. Geometry is exact while every corner, and every edge vector,
    /// fits in `i32`; beyond that, corners (and the origin after a flip) are clamped to the `i32`
    /// range instead of overflowing.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        let pose = Pose::normal(Point { x, y }, width, height, DEFAULT_ROUNDING);
        if pose.is_degenerate() {
            warn!("created degenerate hit box: {width}x{height} at {}", pose.origin);
        }
        Self {
            id: HitBoxId::next(),
            pose: RwLock::new(pose),
        }
    }

    pub fn try_new(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("hit box must have non-zero area: got {width}x{height} at ({x}, {y})");
        }
        Ok(Self::new(x, y, width, height))
    }

    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        let pose = self.pose.get_mut().unwrap_or_else(PoisonError::into_inner);
        pose.rounding = rounding;
        pose.derive();
        self
    }

    // Every write rewrites the derived state in full, so a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Pose> {
        self.pose.read().unwrap_or_else(PoisonError::into_inner)
    }
    fn write(&self) -> RwLockWriteGuard<'_, Pose> {
        self.pose.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> HitBoxId {
        self.id
    }

    /// The current corners, starting from the corner that is top-left in normal pose and going
    /// clockwise in normal pose.
    pub fn corners(&self) -> [Point; 4] {
        self.read().corners
    }
    pub fn axes(&self) -> [Point; 2] {
        self.read().axes
    }
    pub fn center(&self) -> Point {
        self.read().center()
    }
    pub fn origin(&self) -> Point {
        self.read().origin
    }
    pub fn size(&self) -> (i32, i32) {
        let pose = self.read();
        (pose.width, pose.height)
    }
    pub fn angle(&self) -> f64 {
        self.read().angle
    }
    pub fn is_flipped(&self, mode: FlipMode) -> bool {
        let pose = self.read();
        match mode {
            FlipMode::Horizontal => pose.mirror_x,
            FlipMode::Vertical => pose.mirror_y,
        }
    }
    pub fn is_degenerate(&self) -> bool {
        self.read().is_degenerate()
    }
    /// A consistent copy of the whole state.
    pub fn snapshot(&self) -> Pose {
        *self.read()
    }

    /// Moves the normal-pose top-left corner to `(x, y)`, keeping the current orientation.
    pub fn move_to(&self, x: i32, y: i32) {
        let mut pose = self.write();
        pose.origin = Point { x, y };
        pose.derive();
    }

    /// Sets the orientation to `degrees` counter-clockwise from normal pose, rotating about the
    /// shape's own centre. Calling this twice with the same value gives the same corners.
    pub fn rotate_absolute(&self, degrees: f64) {
        if !degrees.is_finite() {
            warn!("{}: ignoring rotation by {degrees}", self.id);
            return;
        }
        let mut pose = self.write();
        pose.angle = degrees;
        pose.derive();
    }

    /// Rotates the shape by a further `degrees` counter-clockwise about `center`, which need not
    /// be inside the shape. The stored angle accumulates, so it keeps describing the orientation.
    pub fn rotate_around(&self, degrees: f64, center: Point) {
        if !degrees.is_finite() {
            warn!("{}: ignoring rotation by {degrees}", self.id);
            return;
        }
        let mut pose = self.write();
        let half_extent = Vec2 {
            x: f64::from(pose.width) / 2.,
            y: f64::from(pose.height) / 2.,
        };
        let new_centre = rotate_vec(pose.normal_centre(), center.as_vec2(), degrees);
        pose.origin = (new_centre - half_extent).to_point(pose.rounding);
        pose.angle = gg_float::normalise_degrees(pose.angle + degrees);
        pose.derive();
    }

    /// Mirrors the shape across the line through `center`: a vertical line for
    /// [`FlipMode::Horizontal`], a horizontal one for [`FlipMode::Vertical`].
    ///
    /// Flipping is part of the persisted orientation, so it survives later calls to
    /// [`HitBox::move_to`] and [`HitBox::rotate_absolute`], and flipping twice with the same
    /// arguments restores the corners exactly.
    pub fn flip(&self, mode: FlipMode, center: Point) {
        let mut pose = self.write();
        pose.flip_across(mode, center);
        pose.derive();
    }

    /// Mirrors the shape across a line through its own exact centre, so it stays in place.
    pub fn flip_around_center(&self, mode: FlipMode) {
        let mut pose = self.write();
        match mode {
            FlipMode::Horizontal => pose.mirror_x = !pose.mirror_x,
            FlipMode::Vertical => pose.mirror_y = !pose.mirror_y,
        }
        pose.negate_angle();
        pose.derive();
    }

    /// Clears the rotation and any flips.
    pub fn restore_normal_pose(&self) {
        let mut pose = self.write();
        pose.angle = 0.;
        pose.mirror_x = false;
        pose.mirror_y = false;
        pose.derive();
    }

    pub fn collides_with(&self, other: &HitBox) -> bool {
        collide(self, other)
    }
}

/// Returns true if the two hit boxes overlap, including when they only touch.
///
/// Both boxes are read-locked for the duration of the test, always in order of [`HitBoxId`], so
/// the result comes from one consistent snapshot of each and concurrent calls with the arguments
/// swapped cannot deadlock.
pub fn collide(a: &HitBox, b: &HitBox) -> bool {
    if std::ptr::eq(a, b) {
        return !a.read().is_degenerate();
    }
    let (first, second) = if a.id < b.id { (a, b) } else { (b, a) };
    check_lt!(first.id, second.id);
    let first = first.read();
    let second = second.read();
    first.collides_with(&second)
}

impl Clone for HitBox {
    fn clone(&self) -> Self {
        Self {
            id: HitBoxId::next(),
            pose: RwLock::new(self.snapshot()),
        }
    }
}

impl Debug for HitBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitBox")
            .field("id", &self.id)
            .field("pose", &self.snapshot())
            .finish()
    }
}

impl Display for HitBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let pose = self.snapshot();
        write!(
            f,
            "{}[{}] @ {:.1} deg",
            self.id,
            pose.corners.iter().join(", "),
            pose.angle
        )
    }
}
