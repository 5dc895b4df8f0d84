use serde::{Deserialize, Serialize};

/// A recorded pointer position in screen points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
}

impl Sample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Sample) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<egui::Pos2> for Sample {
    fn from(value: egui::Pos2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Sample> for egui::Pos2 {
    fn from(value: Sample) -> Self {
        egui::Pos2::new(value.x, value.y)
    }
}

/// Fixed-capacity pointer history, most recent sample first.
///
/// Samples live in a fixed array used as a ring; `head` is the slot of the
/// most recent sample and older samples follow it backwards. Pushing into a
/// full history overwrites the oldest slot.
#[derive(Debug, Clone)]
pub struct PositionHistory<const CAPACITY: usize> {
    slots: [Sample; CAPACITY],
    head: usize,
    len: usize,
}

impl<const CAPACITY: usize> Default for PositionHistory<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAPACITY: usize> PositionHistory<CAPACITY> {
    pub fn new() -> Self {
        Self {
            slots: [Sample::default(); CAPACITY],
            head: 0,
            len: 0,
        }
    }

    /// A full history where every slot holds `sample`.
    pub fn filled(sample: Sample) -> Self {
        Self {
            slots: [sample; CAPACITY],
            head: 0,
            len: CAPACITY,
        }
    }

    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Records `sample` as the most recent one, evicting the oldest when full.
    pub fn push(&mut self, sample: Sample) {
        if CAPACITY == 0 {
            return;
        }
        self.head = (self.head + 1) % CAPACITY;
        self.slots[self.head] = sample;
        self.len = (self.len + 1).min(CAPACITY);
    }

    /// Sample `age` pushes ago; 0 is the most recent.
    pub fn get(&self, age: usize) -> Option<Sample> {
        if age >= self.len {
            return None;
        }
        Some(self.slots[(self.head + CAPACITY - age) % CAPACITY])
    }

    pub fn latest(&self) -> Option<Sample> {
        self.get(0)
    }

    /// Most recent first.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len).filter_map(move |age| self.get(age))
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}
