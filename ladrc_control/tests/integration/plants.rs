//! Simulated plants for closed-loop tests (forward Euler at the loop rate).

/// `dy/dt = -a·y + b·u + d`
pub struct FirstOrderPlant {
    pub y: f64,
    pub a: f64,
    pub b: f64,
    pub load: f64,
}

impl FirstOrderPlant {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            y: 0.0,
            a,
            b,
            load: 0.0,
        }
    }

    pub fn step(&mut self, u: f64, dt: f64) {
        self.y += dt * (-self.a * self.y + self.b * u + self.load);
    }
}

/// `d²y/dt² = -c·dy/dt + b·u`
pub struct SecondOrderPlant {
    pub y: f64,
    pub v: f64,
    pub c: f64,
    pub b: f64,
}

impl SecondOrderPlant {
    pub fn new(c: f64, b: f64) -> Self {
        Self {
            y: 0.0,
            v: 0.0,
            c,
            b,
        }
    }

    pub fn step(&mut self, u: f64, dt: f64) {
        self.v += dt * (-self.c * self.v + self.b * u);
        self.y += dt * self.v;
    }
}

/// Number of samples until `trace` stays within `band` of `target` for good.
pub fn settling_steps(trace: &[f64], target: f64, band: f64) -> usize {
    trace
        .iter()
        .rposition(|y| (y - target).abs() >= band)
        .map_or(0, |i| i + 1)
}
