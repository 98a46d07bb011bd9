//! Replays a fixed roll sequence. Used by tests that need exact outcomes.

use crate::stream::FluxStream;

/// Dice stream that replays a script of single-die results
///
/// Each individual die consumes one scripted value, clamped into
/// `1..=sides`. Once the script runs out every die shows `fallback`.
/// Child streams restart the script from the beginning.
///
/// # Example
/// ```
/// use dice::{FluxStream, ScriptedFlux};
///
/// let mut flux = ScriptedFlux::new(vec![6, 1, 3], 2);
/// assert_eq!(flux.flux(), 5);
/// assert_eq!(flux.die(6, 2), 5); // 3 from the script, then the fallback 2
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedFlux {
    script: Vec<i32>,
    position: usize,
    fallback: i32,
}

impl ScriptedFlux {
    pub fn new(script: Vec<i32>, fallback: i32) -> Self {
        Self {
            script,
            position: 0,
            fallback,
        }
    }

    /// Stream where every die shows the same face
    pub fn constant(face: i32) -> Self {
        Self::new(Vec::new(), face)
    }

    /// Number of individual dice rolled so far
    pub fn rolls_consumed(&self) -> usize {
        self.position
    }

    fn next_face(&mut self, sides: u32) -> i32 {
        let face = self
            .script
            .get(self.position)
            .copied()
            .unwrap_or(self.fallback);
        self.position += 1;
        face.clamp(1, sides as i32)
    }
}

impl FluxStream for ScriptedFlux {
    fn die(&mut self, sides: u32, count: u32) -> i32 {
        if sides == 0 {
            return 0;
        }
        (0..count).map(|_| self.next_face(sides)).sum()
    }

    fn sub(&self, _suffix: &str) -> Self {
        Self::new(self.script.clone(), self.fallback)
    }
}
