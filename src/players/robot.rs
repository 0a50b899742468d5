use crate::*;
use rand::Rng;
use rand::rngs::ThreadRng;

/// Computer opponent drawing uniformly from the three choices.
///
/// The default robot uses the thread-local generator seeded from the OS,
/// so draws are not reproducible across runs. Pass a seeded generator
/// through [`Robot::new`] for deterministic play.
#[derive(Debug)]
pub struct Robot<R = ThreadRng>
where
    R: Rng,
{
    rng: R,
}

impl<R> Robot<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for Robot<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::rng())
    }
}

impl<R> Player for Robot<R>
where
    R: Rng,
{
    fn choose(&mut self) -> Choice {
        Choice::all()[self.rng.random_range(0..N_CHOICES)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn seeded_robots_agree() {
        let mut a = Robot::new(SmallRng::seed_from_u64(0xC0FFEE));
        let mut b = Robot::new(SmallRng::seed_from_u64(0xC0FFEE));
        for _ in 0..64 {
            assert!(a.choose() == b.choose());
        }
    }

    #[test]
    fn uniform() {
        const TRIALS: usize = 1 << 16;
        const TOLERANCE: f32 = 0.02;
        let mut robot = Robot::new(SmallRng::seed_from_u64(42));
        let mut counts = [0usize; N_CHOICES];
        for _ in 0..TRIALS {
            counts[usize::from(robot.choose())] += 1;
        }
        for choice in Choice::all() {
            let freq = counts[usize::from(choice)] as f32 / TRIALS as f32;
            let diff = (freq - 1. / N_CHOICES as f32).abs();
            assert!(diff < TOLERANCE, "{}: {:.4} far from 1/3", choice, freq);
        }
    }

    #[test]
    fn default_covers_domain() {
        let mut robot = Robot::<ThreadRng>::default();
        let mut seen = [false; N_CHOICES];
        for _ in 0..1024 {
            seen[usize::from(robot.choose())] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
