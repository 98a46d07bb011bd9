//! The dice capability consumed by the generators.

/// A deterministic source of dice rolls.
///
/// Generators only ever talk to this trait, so tests can swap in a
/// [`ScriptedFlux`](crate::ScriptedFlux) and replay an exact roll sequence.
pub trait FluxStream {
    /// Sum of `count` rolls of a `sides`-sided die.
    ///
    /// Returns 0 when either argument is 0.
    fn die(&mut self, sides: u32, count: u32) -> i32;

    /// Single six-sided die
    fn d6(&mut self) -> i32 {
        self.die(6, 1)
    }

    /// Sum of two six-sided dice
    fn two_d6(&mut self) -> i32 {
        self.die(6, 2)
    }

    /// Difference of two six-sided dice, in -5..=5
    fn flux(&mut self) -> i32 {
        let first = self.die(6, 1);
        let second = self.die(6, 1);
        first - second
    }

    /// Derive a child stream from this stream's identity plus `suffix`.
    ///
    /// Calling `sub` twice with the same suffix yields identical children,
    /// regardless of how many rolls the parent has consumed in between.
    fn sub(&self, suffix: &str) -> Self
    where
        Self: Sized;
}
