//! Obstacle entities and the live registry

use serde::{Deserialize, Serialize};

/// One rectangle of a cactus cluster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CactusSegment {
    pub width: f32,
    pub height: f32,
    /// Offset from the cluster's left edge
    pub x_offset: f32,
}

/// 1-3 ground-anchored segments placed side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CactusCluster {
    pub segments: Vec<CactusSegment>,
    /// Sum of segment widths plus the gaps between them
    pub total_width: f32,
    /// Tallest segment
    pub max_height: f32,
}

/// Flying band, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Altitude {
    High,
    Mid,
    Low,
}

impl Altitude {
    pub const ALL: [Altitude; 3] = [Altitude::High, Altitude::Mid, Altitude::Low];

    /// Index into `Tuning::bird_altitudes`
    pub fn index(self) -> usize {
        match self {
            Altitude::High => 0,
            Altitude::Mid => 1,
            Altitude::Low => 2,
        }
    }
}

/// A bird flying at a fixed band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub width: f32,
    pub height: f32,
    pub altitude: Altitude,
    /// Baseline y of the band
    pub baseline: f32,
}

/// Shape-specific payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObstacleKind {
    Cactus(CactusCluster),
    Bird(Bird),
}

impl ObstacleKind {
    pub fn width(&self) -> f32 {
        match self {
            ObstacleKind::Cactus(c) => c.total_width,
            ObstacleKind::Bird(b) => b.width,
        }
    }
}

/// A live obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Already scored
    pub passed: bool,
    pub kind: ObstacleKind,
}

impl Obstacle {
    #[inline]
    pub fn width(&self) -> f32 {
        self.kind.width()
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width()
    }
}

/// Owns every live obstacle, in spawn order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl Default for ObstacleRegistry {
    fn default() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an obstacle at `x`, returning its id
    pub fn spawn(&mut self, x: f32, kind: ObstacleKind) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            x,
            passed: false,
            kind,
        });
        id
    }

    /// Scroll every obstacle left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Drop obstacles whose right edge is past `-margin`; returns how many went
    pub fn prune(&mut self, margin: f32) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.right() > -margin);
        before - self.obstacles.len()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
