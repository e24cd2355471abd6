//! This contains logic for locating a point within the simplectic tiling of a space.

use core::{
    fmt::Debug,
    ops::{Add, Sub},
};

use bevy_math::{DVec2, DVec3, DVec4, I64Vec2, I64Vec3, I64Vec4, UVec2, UVec3, UVec4};

use crate::{
    hash::PermutationHash,
    math::fast_floor,
    tables::{F2, F3, F4, G2, G3, G4, SIMPLEX_TRAVERSAL},
};

/// Represents a portion or cell of some larger domain and a position within that cell.
pub trait DomainCell {
    /// The larger/full domain this is a segment of.
    type Full;

    /// Iterates all the corners relevant to this segment.
    fn iter_points(&self) -> impl Iterator<Item = CellPoint<Self::Full>>;
}

/// Represents a corner of a [`DomainCell`] relative to the sampled point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPoint<T> {
    /// The permutation hash of this corner. Corners shared between cells always hash the same.
    pub hash: u8,
    /// Defines the offset of the sample point from this corner.
    pub offset: T,
}

/// Represents a type that can partition some domain `T` into cells.
pub trait Partitioner<T> {
    /// The [`DomainCell`] this partitioner produces.
    type Cell: DomainCell<Full = T>;

    /// Constructs the cell containing `full`.
    fn partition(&self, full: T) -> Self::Cell;
}

/// Decides the order the corners of a simplex are visited in, walking from the cell origin to the opposite corner.
pub trait Traversal<F>: Copy + Debug + PartialEq {
    /// The integer step from the cell origin to a corner.
    type Step;
    /// The steps of every corner between the first and the last.
    type Steps: IntoIterator<Item = Self::Step>;

    /// Picks the traversal for a point at `offset` from its cell origin.
    fn of(offset: F) -> Self;

    /// Lists the intermediate corners in visiting order.
    fn steps(&self) -> Self::Steps;
}

/// A space that can be tiled by simplices.
/// This is implemented for [`DVec2`], [`DVec3`] and [`DVec4`].
pub trait SimplexSpace:
    Copy + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self>
{
    /// A signed lattice coordinate.
    type Cell: Copy;
    /// A lattice coordinate wrapped to `0..=255`, or a step within a cell.
    type Lattice: Copy + Debug + PartialEq + Add<Output = Self::Lattice> + PermutationHash;
    /// How the corners of a cell are ordered.
    type Traversal: Traversal<Self, Step = Self::Lattice>;

    /// The factor that skews this space onto the simplex lattice.
    const SKEW: f64;
    /// The factor that unskews the simplex lattice back onto this space.
    const UNSKEW: f64;
    /// The step to the cell origin.
    const ORIGIN_STEP: Self::Lattice;
    /// The step to the corner opposite the cell origin.
    const DIAGONAL_STEP: Self::Lattice;

    /// Creates a vector with every element set to `value`.
    fn splat(value: f64) -> Self;
    /// Sums the elements.
    fn element_sum(self) -> f64;
    /// Floors each element toward negative infinity.
    fn floor_cell(self) -> Self::Cell;
    /// Converts a lattice coordinate into this space.
    fn cell_to_space(cell: Self::Cell) -> Self;
    /// Masks each element of `cell` to `0..=255`.
    fn wrap_cell(cell: Self::Cell) -> Self::Lattice;
    /// Converts a step into this space.
    fn step_to_space(step: Self::Lattice) -> Self;
}

impl SimplexSpace for DVec2 {
    type Cell = I64Vec2;
    type Lattice = UVec2;
    type Traversal = Ordering2;

    const SKEW: f64 = F2;
    const UNSKEW: f64 = G2;
    const ORIGIN_STEP: UVec2 = UVec2::ZERO;
    const DIAGONAL_STEP: UVec2 = UVec2::ONE;

    #[inline]
    fn splat(value: f64) -> Self {
        DVec2::splat(value)
    }

    #[inline]
    fn element_sum(self) -> f64 {
        self.x + self.y
    }

    #[inline]
    fn floor_cell(self) -> I64Vec2 {
        I64Vec2::new(fast_floor(self.x), fast_floor(self.y))
    }

    #[inline]
    fn cell_to_space(cell: I64Vec2) -> Self {
        cell.as_dvec2()
    }

    #[inline]
    fn wrap_cell(cell: I64Vec2) -> UVec2 {
        (cell & I64Vec2::splat(255)).as_uvec2()
    }

    #[inline]
    fn step_to_space(step: UVec2) -> Self {
        step.as_dvec2()
    }
}

impl SimplexSpace for DVec3 {
    type Cell = I64Vec3;
    type Lattice = UVec3;
    type Traversal = Ordering3;

    const SKEW: f64 = F3;
    const UNSKEW: f64 = G3;
    const ORIGIN_STEP: UVec3 = UVec3::ZERO;
    const DIAGONAL_STEP: UVec3 = UVec3::ONE;

    #[inline]
    fn splat(value: f64) -> Self {
        DVec3::splat(value)
    }

    #[inline]
    fn element_sum(self) -> f64 {
        self.x + self.y + self.z
    }

    #[inline]
    fn floor_cell(self) -> I64Vec3 {
        I64Vec3::new(fast_floor(self.x), fast_floor(self.y), fast_floor(self.z))
    }

    #[inline]
    fn cell_to_space(cell: I64Vec3) -> Self {
        cell.as_dvec3()
    }

    #[inline]
    fn wrap_cell(cell: I64Vec3) -> UVec3 {
        (cell & I64Vec3::splat(255)).as_uvec3()
    }

    #[inline]
    fn step_to_space(step: UVec3) -> Self {
        step.as_dvec3()
    }
}

impl SimplexSpace for DVec4 {
    type Cell = I64Vec4;
    type Lattice = UVec4;
    type Traversal = Ordering4;

    const SKEW: f64 = F4;
    const UNSKEW: f64 = G4;
    const ORIGIN_STEP: UVec4 = UVec4::ZERO;
    const DIAGONAL_STEP: UVec4 = UVec4::ONE;

    #[inline]
    fn splat(value: f64) -> Self {
        DVec4::splat(value)
    }

    #[inline]
    fn element_sum(self) -> f64 {
        self.x + self.y + self.z + self.w
    }

    #[inline]
    fn floor_cell(self) -> I64Vec4 {
        I64Vec4::new(
            fast_floor(self.x),
            fast_floor(self.y),
            fast_floor(self.z),
            fast_floor(self.w),
        )
    }

    #[inline]
    fn cell_to_space(cell: I64Vec4) -> Self {
        cell.as_dvec4()
    }

    #[inline]
    fn wrap_cell(cell: I64Vec4) -> UVec4 {
        (cell & I64Vec4::splat(255)).as_uvec4()
    }

    #[inline]
    fn step_to_space(step: UVec4) -> Self {
        step.as_dvec4()
    }
}

/// The two ways to cross a 2d simplex (a triangle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering2 {
    /// Lower triangle: `(0,0) -> (1,0) -> (1,1)`.
    XY,
    /// Upper triangle: `(0,0) -> (0,1) -> (1,1)`.
    YX,
}

impl Traversal<DVec2> for Ordering2 {
    type Step = UVec2;
    type Steps = [UVec2; 1];

    #[inline]
    fn of(offset: DVec2) -> Self {
        if offset.x > offset.y {
            Self::XY
        } else {
            Self::YX
        }
    }

    #[inline]
    fn steps(&self) -> Self::Steps {
        match self {
            Self::XY => [UVec2::X],
            Self::YX => [UVec2::Y],
        }
    }
}

/// The six ways to cross a 3d simplex (a tetrahedron), named by the axes in decreasing order of offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering3 {
    /// `x >= y >= z`
    XYZ,
    /// `x >= z > y`
    XZY,
    /// `z > x >= y`
    ZXY,
    /// `z > y > x`
    ZYX,
    /// `y >= z > x`
    YZX,
    /// `y > x >= z`
    YXZ,
}

impl Ordering3 {
    /// Every ordering.
    pub const ALL: [Self; 6] = [
        Self::XYZ,
        Self::XZY,
        Self::ZXY,
        Self::ZYX,
        Self::YZX,
        Self::YXZ,
    ];
}

impl Traversal<DVec3> for Ordering3 {
    type Step = UVec3;
    type Steps = [UVec3; 2];

    #[inline]
    fn of(offset: DVec3) -> Self {
        let DVec3 { x, y, z } = offset;
        if x >= y {
            if y >= z {
                Self::XYZ
            } else if x >= z {
                Self::XZY
            } else {
                Self::ZXY
            }
        } else if y < z {
            Self::ZYX
        } else if x < z {
            Self::YZX
        } else {
            Self::YXZ
        }
    }

    #[inline]
    fn steps(&self) -> Self::Steps {
        let (second, third) = match self {
            Self::XYZ => (UVec3::X, UVec3::new(1, 1, 0)),
            Self::XZY => (UVec3::X, UVec3::new(1, 0, 1)),
            Self::ZXY => (UVec3::Z, UVec3::new(1, 0, 1)),
            Self::ZYX => (UVec3::Z, UVec3::new(0, 1, 1)),
            Self::YZX => (UVec3::Y, UVec3::new(0, 1, 1)),
            Self::YXZ => (UVec3::Y, UVec3::new(1, 1, 0)),
        };
        [second, third]
    }
}

/// One of the 24 ways to cross a 4d simplex, looked up from [`SIMPLEX_TRAVERSAL`].
///
/// Each element of `ranks` is the rank of that axis's offset, where 3 is the largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering4 {
    ranks: [u8; 4],
}

impl Ordering4 {
    /// Packs the six pairwise comparisons of `offset` into a 6 bit index.
    #[inline]
    pub fn comparison_mask(offset: DVec4) -> u8 {
        let DVec4 { x, y, z, w } = offset;
        ((x > y) as u8) << 5
            | ((x > z) as u8) << 4
            | ((y > z) as u8) << 3
            | ((x > w) as u8) << 2
            | ((y > w) as u8) << 1
            | (z > w) as u8
    }

    /// Looks up the ordering for a comparison `mask`.
    /// Returns `None` for masks no set of 4 values can produce, and for masks wider than 6 bits.
    pub fn from_mask(mask: u8) -> Option<Self> {
        let ranks = *SIMPLEX_TRAVERSAL.get(mask as usize)?;
        (ranks != [0; 4]).then_some(Self { ranks })
    }

    /// The rank of each axis, where 3 marks the largest offset.
    #[inline]
    pub fn ranks(&self) -> [u8; 4] {
        self.ranks
    }

    #[inline]
    fn step_at_threshold(&self, threshold: u8) -> UVec4 {
        UVec4::from_array(self.ranks.map(|rank| (rank >= threshold) as u32))
    }
}

impl Traversal<DVec4> for Ordering4 {
    type Step = UVec4;
    type Steps = [UVec4; 3];

    #[inline]
    fn of(offset: DVec4) -> Self {
        Self {
            ranks: SIMPLEX_TRAVERSAL[Self::comparison_mask(offset) as usize],
        }
    }

    #[inline]
    fn steps(&self) -> Self::Steps {
        [
            self.step_at_threshold(3),
            self.step_at_threshold(2),
            self.step_at_threshold(1),
        ]
    }
}

/// A simplex of the skewed lattice and the position of a sample point within it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexCell<F: SimplexSpace> {
    /// The cell origin, wrapped to `0..=255` per axis.
    pub lattice: F::Lattice,
    /// The offset of the sample point from the unskewed cell origin.
    pub offset: F,
    /// The order in which the corners are visited.
    pub traversal: F::Traversal,
}

impl<F: SimplexSpace> SimplexCell<F> {
    #[inline]
    fn point_at(&self, step: F::Lattice, corner: usize) -> CellPoint<F> {
        CellPoint {
            hash: (self.lattice + step).permutation_hash(),
            offset: self.offset - F::step_to_space(step) + F::splat(F::UNSKEW * corner as f64),
        }
    }
}

impl<F: SimplexSpace> DomainCell for SimplexCell<F> {
    type Full = F;

    #[inline]
    fn iter_points(&self) -> impl Iterator<Item = CellPoint<Self::Full>> {
        core::iter::once(F::ORIGIN_STEP)
            .chain(self.traversal.steps())
            .chain(core::iter::once(F::DIAGONAL_STEP))
            .enumerate()
            .map(move |(corner, step)| self.point_at(step, corner))
    }
}

/// A [`Partitioner`] that produces [`SimplexCell`]s.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SimplexGrid;

impl<F: SimplexSpace> Partitioner<F> for SimplexGrid {
    type Cell = SimplexCell<F>;

    #[inline]
    fn partition(&self, full: F) -> Self::Cell {
        let skew = full.element_sum() * F::SKEW;
        let cell = (full + F::splat(skew)).floor_cell();

        let origin = F::cell_to_space(cell);
        let unskew = origin.element_sum() * F::UNSKEW;
        let offset = full - (origin - F::splat(unskew));

        SimplexCell {
            lattice: F::wrap_cell(cell),
            offset,
            traversal: <F::Traversal as Traversal<F>>::of(offset),
        }
    }
}
