// Game module - owns the simulation and drives it tick by tick
//
// This module contains:
// - game_loop.rs: GameLoop struct, per-tick sequencing and the run loop
// - clock.rs: FrameClock for fixed-rate pacing
// - types.rs: Tick outcome and session statistics

pub mod clock;
pub mod game_loop;
pub mod types;

// Re-export types for convenience
pub use clock::FrameClock;
pub use game_loop::GameLoop;
pub use types::*;
