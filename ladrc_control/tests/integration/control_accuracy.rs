//! Closed-loop step response tests.
//!
//! A unit reference step must settle within 1 % on first- and second-order
//! plants, with settling time inversely proportional to the controller
//! bandwidth.

use ladrc_control::{Ladrc, LadrcParameters};

use super::plants::{FirstOrderPlant, SecondOrderPlant, settling_steps};

const DT: f64 = 0.001;
const STEPS: usize = 10_000;

/// Run a unit step on `dy/dt = -a·y + b·u` and return the output trace.
fn first_order_step(params: &LadrcParameters, a: f64, b: f64) -> (Vec<f64>, Ladrc) {
    let mut ctrl = Ladrc::new(params).unwrap();
    let mut plant = FirstOrderPlant::new(a, b);
    let mut trace = Vec::with_capacity(STEPS);

    for _ in 0..STEPS {
        let u = ctrl.compute_control_output(1.0, plant.y).unwrap();
        plant.step(u, DT);
        trace.push(plant.y);
    }
    (trace, ctrl)
}

#[test]
fn first_order_plant_converges_within_one_percent() {
    let params = LadrcParameters::new(1, 2.0, 10.0, 50.0);
    let (trace, ctrl) = first_order_step(&params, 1.0, 2.0);

    let final_y = *trace.last().unwrap();
    assert!((final_y - 1.0).abs() < 0.01, "final output {final_y:.6}");
    assert!(settling_steps(&trace, 1.0, 0.01) < 1000);

    // The observer attributes the plant's own -a·y term to the disturbance.
    assert!((ctrl.estimated_output() - 1.0).abs() < 1e-6);
    assert!((ctrl.estimated_disturbance() + 1.0).abs() < 1e-6);
}

#[test]
fn settling_time_scales_inversely_with_bandwidth() {
    let slow = first_order_step(&LadrcParameters::new(1, 2.0, 10.0, 50.0), 1.0, 2.0).0;
    let fast = first_order_step(&LadrcParameters::new(1, 2.0, 20.0, 100.0), 1.0, 2.0).0;

    let t_slow = settling_steps(&slow, 1.0, 0.01) as f64;
    let t_fast = settling_steps(&fast, 1.0, 0.01) as f64;
    let ratio = t_slow / t_fast;
    assert!(
        ratio > 1.6 && ratio < 2.5,
        "settling {t_slow} vs {t_fast} steps, ratio {ratio:.2}"
    );
}

#[test]
fn first_order_response_does_not_overshoot() {
    let (trace, _) = first_order_step(&LadrcParameters::new(1, 2.0, 10.0, 50.0), 1.0, 2.0);
    let peak = trace.iter().copied().fold(f64::MIN, f64::max);
    assert!(peak < 1.01, "peak {peak:.4}");
}

#[test]
fn nominal_gain_mismatch_is_absorbed() {
    // Real gain 2.5, controller assumes 2.0.
    let params = LadrcParameters::new(1, 2.0, 10.0, 50.0);
    let (trace, ctrl) = first_order_step(&params, 1.0, 2.5);

    assert!((trace.last().unwrap() - 1.0).abs() < 0.01);
    assert!(ctrl.estimated_disturbance().is_finite());
}

#[test]
fn second_order_plant_converges() {
    let params = LadrcParameters::new(2, 1.0, 10.0, 50.0);
    let mut ctrl = Ladrc::new(&params).unwrap();
    let mut plant = SecondOrderPlant::new(0.5, 1.2);
    let mut trace = Vec::with_capacity(STEPS);

    for _ in 0..STEPS {
        let u = ctrl.compute_control_output(1.0, plant.y).unwrap();
        plant.step(u, DT);
        trace.push(plant.y);
    }

    let final_y = *trace.last().unwrap();
    assert!((final_y - 1.0).abs() < 0.01, "final output {final_y:.6}");
    assert!(settling_steps(&trace, 1.0, 0.01) < 2000);
    let peak = trace.iter().copied().fold(f64::MIN, f64::max);
    assert!(peak < 1.05, "peak {peak:.4}");
}

#[test]
fn zero_reference_and_output_stays_at_origin() {
    let mut ctrl = Ladrc::new(&LadrcParameters::new(2, 1.0, 10.0, 50.0)).unwrap();
    for _ in 0..STEPS {
        assert_eq!(ctrl.compute_control_output(0.0, 0.0).unwrap(), 0.0);
    }
}
