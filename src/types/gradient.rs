//! Editable gradient value: stops plus an angle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GradiaError, Result};

use super::stop::{sort_stops, sorted_stops};
use super::{ColorStop, Colour};

/// Fewest stops a gradient can have.
pub const MIN_STOPS: usize = 2;

/// Most stops the editor allows.
pub const MAX_STOPS: usize = 5;

/// A linear gradient definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub stops: Vec<ColorStop>,
    /// Direction in degrees, CSS convention (90 = left to right).
    pub angle: f64,
}

impl Gradient {
    /// Create a gradient, requiring at least two stops.
    pub fn new(stops: Vec<ColorStop>, angle: f64) -> Result<Self> {
        if stops.len() < MIN_STOPS {
            return Err(GradiaError::Validation {
                message: format!("A gradient needs at least {} stops, got {}", MIN_STOPS, stops.len()),
                help: None,
            });
        }
        Ok(Self {
            stops,
            angle: angle.rem_euclid(360.0),
        })
    }

    /// Generate a random 2-4 stop gradient.
    ///
    /// The first stop sits at 0%, the last at 100%, and any middle stops land
    /// somewhere in `[10, 90)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let count = rng.random_range(2..=4usize);
        let mut stops: Vec<ColorStop> = (0..count)
            .map(|i| {
                let position = if i == 0 {
                    0.0
                } else if i == count - 1 {
                    100.0
                } else {
                    rng.random_range(10..90) as f64
                };
                ColorStop::new(Colour::random(&mut *rng), position)
            })
            .collect();
        sort_stops(&mut stops);

        Self {
            stops,
            angle: rng.random_range(0..360) as f64,
        }
    }

    /// Append a stop, up to `MAX_STOPS`.
    pub fn add_stop(&mut self, stop: ColorStop) -> Result<()> {
        if self.stops.len() >= MAX_STOPS {
            return Err(GradiaError::Validation {
                message: format!("A gradient can have at most {} stops", MAX_STOPS),
                help: Some("Remove a stop before adding another".to_string()),
            });
        }
        self.stops.push(stop);
        Ok(())
    }

    /// Remove the stop at `index`, keeping at least `MIN_STOPS`.
    pub fn remove_stop(&mut self, index: usize) -> Result<ColorStop> {
        if self.stops.len() <= MIN_STOPS {
            return Err(GradiaError::Validation {
                message: format!("A gradient needs at least {} stops", MIN_STOPS),
                help: None,
            });
        }
        if index >= self.stops.len() {
            return Err(GradiaError::Validation {
                message: format!("No stop at index {}", index),
                help: None,
            });
        }
        Ok(self.stops.remove(index))
    }

    /// Stops sorted by position.
    pub fn sorted_stops(&self) -> Vec<ColorStop> {
        sorted_stops(&self.stops)
    }
}

/// Pick a readable label colour for text drawn over `stops`.
///
/// White wins when more than half of the stops are dark.
pub fn label_colour(stops: &[ColorStop]) -> Colour {
    let dark = stops.iter().filter(|s| s.color.is_dark()).count();
    if dark * 2 > stops.len() {
        Colour::WHITE
    } else {
        Colour::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stop(hex: &str, position: f64) -> ColorStop {
        ColorStop::new(Colour::from_hex(hex).unwrap(), position)
    }

    fn two_stop() -> Gradient {
        Gradient::new(vec![stop("#9b87f5", 0.0), stop("#4eb3af", 100.0)], 90.0).unwrap()
    }

    #[test]
    fn test_new_requires_two_stops() {
        assert!(Gradient::new(vec![stop("#000000", 0.0)], 0.0).is_err());
        assert!(Gradient::new(vec![], 0.0).is_err());
    }

    #[test]
    fn test_angle_wraps() {
        let g = Gradient::new(vec![stop("#000000", 0.0), stop("#ffffff", 100.0)], -90.0).unwrap();
        assert_eq!(g.angle, 270.0);
    }

    #[test]
    fn test_add_stop_limit() {
        let mut g = two_stop();
        for _ in 0..3 {
            g.add_stop(stop("#ff0000", 50.0)).unwrap();
        }
        assert_eq!(g.stops.len(), MAX_STOPS);
        assert!(g.add_stop(stop("#ff0000", 50.0)).is_err());
    }

    #[test]
    fn test_remove_stop_limit() {
        let mut g = two_stop();
        assert!(g.remove_stop(0).is_err());

        g.add_stop(stop("#ff0000", 50.0)).unwrap();
        assert!(g.remove_stop(7).is_err());
        let removed = g.remove_stop(2).unwrap();
        assert_eq!(removed.color, Colour::rgb(255, 0, 0));
        assert_eq!(g.stops.len(), 2);
    }

    #[test]
    fn test_random_gradient_shape() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..50 {
            let g = Gradient::random(&mut rng);
            assert!((2..=4).contains(&g.stops.len()));
            assert_eq!(g.stops.first().unwrap().position, 0.0);
            assert_eq!(g.stops.last().unwrap().position, 100.0);
            for middle in &g.stops[1..g.stops.len() - 1] {
                assert!((10.0..90.0).contains(&middle.position));
            }
            assert!((0.0..360.0).contains(&g.angle));
        }
    }

    #[test]
    fn test_label_colour() {
        let dark = [stop("#0f2027", 0.0), stop("#203a43", 50.0), stop("#ffffff", 100.0)];
        assert_eq!(label_colour(&dark), Colour::WHITE);

        let even = [stop("#000000", 0.0), stop("#ffffff", 100.0)];
        assert_eq!(label_colour(&even), Colour::BLACK);
    }
}
