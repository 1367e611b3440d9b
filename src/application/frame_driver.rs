use std::time::Instant;

use super::{CellView, Engine};

/// FrameDriver applies the per-frame protocol a renderer follows:
/// the first frame shows the initial generation, every later frame
/// steps exactly once and then reads the buffer.
pub struct FrameDriver {
    engine: Engine,
    frames: u64,
    pub last_step_time_ms: f32, // Evolution performance metric
}

impl FrameDriver {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            frames: 0,
            last_step_time_ms: 0.0,
        }
    }

    /// Produce the generation to draw for the next frame
    pub fn advance(&mut self) -> CellView<'_> {
        if self.frames > 0 {
            let start = Instant::now();
            self.engine.step();
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        }
        self.frames += 1;
        self.engine.cells()
    }

    /// Frames produced so far
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn into_engine(self) -> Engine {
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_does_not_step() {
        let mut driver = FrameDriver::new(Engine::new(10, 10).unwrap());
        let initial = Engine::new(10, 10).unwrap();

        let view = driver.advance();
        assert_eq!(view.as_bytes(), initial.cells().as_bytes());
        assert_eq!(driver.engine().generation(), 0);
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn test_one_step_per_later_frame() {
        let mut driver = FrameDriver::new(Engine::new(20, 12).unwrap());
        let mut reference = Engine::new(20, 12).unwrap();

        driver.advance();
        for frame in 1..6 {
            reference.step();
            let view = driver.advance();
            assert_eq!(view.as_bytes(), reference.cells().as_bytes(), "frame {}", frame);
        }
        assert_eq!(driver.frames(), 6);
        assert_eq!(driver.into_engine().generation(), 5);
    }
}
