//! Network data types: nodes, rectangular regions, square-lattice networks.

use std::fmt;

use nalgebra::Vector2;

use crate::error::{check_length, DomainError};

/// A placed transmitter.
///
/// Invariants:
/// - `l` is finite and `> 0`; position is finite.
/// - Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    id: usize,
    position: Vector2<f64>,
    l: f64,
}

impl Node {
    pub fn new(id: usize, position: Vector2<f64>, l: f64) -> Result<Self, DomainError> {
        check_length("l", l)?;
        if !(position.x.is_finite() && position.y.is_finite()) {
            return Err(DomainError::invalid(format!(
                "node {id} position ({}, {}) is not finite",
                position.x, position.y
            )));
        }
        Ok(Self { id, position, l })
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }
    #[inline]
    pub fn position(&self) -> Vector2<f64> {
        self.position
    }
    /// Coverage radius.
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }
}

/// Axis-aligned rectangle `[x_min, x_max] × [y_min, y_max]` with positive extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Region {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, DomainError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());
        if !finite || x_max <= x_min || y_max <= y_min {
            return Err(DomainError::invalid(format!(
                "region [{x_min}, {x_max}] × [{y_min}, {y_max}] is empty or not finite"
            )));
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Rectangle `[0, width] × [0, height]`.
    pub fn from_size(width: f64, height: f64) -> Result<Self, DomainError> {
        check_length("width", width)?;
        check_length("height", height)?;
        Self::new(0.0, width, 0.0, height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// How a `SquareNetwork` was generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkKind {
    FourNodeCell,
    Grid,
    MinimumNodes,
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NetworkKind::FourNodeCell => "four_node_cell",
            NetworkKind::Grid => "grid",
            NetworkKind::MinimumNodes => "minimum_nodes",
        })
    }
}

/// Nodes on a rectangular lattice.
///
/// Invariants:
/// - `nodes[k].id() == k`.
/// - `cols * rows >= nodes.len()`; equality except for `MinimumNodes`, which
///   keeps only the first `n` lattice sites.
/// - All nodes share the radius `l`.
#[derive(Clone, Debug)]
pub struct SquareNetwork {
    pub kind: NetworkKind,
    pub nodes: Vec<Node>,
    pub l: f64,
    /// Lattice spacing along x and y.
    pub spacing: (f64, f64),
    /// Lattice dimensions `(cols, rows)`.
    pub dims: (usize, usize),
    pub bounds: Region,
}

impl SquareNetwork {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn positions(&self) -> Vec<Vector2<f64>> {
        self.nodes.iter().map(Node::position).collect()
    }
    /// Human-readable description (kind, counts, spacing, bounds).
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SquareNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "network: {}", self.kind)?;
        writeln!(f, "nodes: {}", self.nodes.len())?;
        writeln!(f, "coverage radius: {:.2} m", self.l)?;
        writeln!(f, "grid: {} × {}", self.dims.0, self.dims.1)?;
        writeln!(
            f,
            "spacing: {:.1} m × {:.1} m",
            self.spacing.0, self.spacing.1
        )?;
        write!(
            f,
            "bounds: [{:.1}, {:.1}] × [{:.1}, {:.1}]",
            self.bounds.x_min, self.bounds.x_max, self.bounds.y_min, self.bounds.y_max
        )
    }
}
