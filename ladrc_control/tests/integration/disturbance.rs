//! Disturbance rejection and instance independence.

use std::thread;

use ladrc_control::{Ladrc, LadrcParameters};

use super::plants::{FirstOrderPlant, settling_steps};

const DT: f64 = 0.001;

#[test]
fn step_load_is_rejected() {
    let mut ctrl = Ladrc::new(&LadrcParameters::new(1, 2.0, 10.0, 50.0)).unwrap();
    let mut plant = FirstOrderPlant::new(1.0, 2.0);
    let mut after_load = Vec::with_capacity(5000);

    for k in 0..10_000 {
        if k == 5000 {
            plant.load = 5.0;
        }
        let u = ctrl.compute_control_output(1.0, plant.y).unwrap();
        plant.step(u, DT);
        if k >= 5000 {
            after_load.push(plant.y);
        }
    }

    let worst = after_load
        .iter()
        .map(|y| (y - 1.0).abs())
        .fold(0.0_f64, f64::max);
    assert!(worst < 0.2, "load pushed output {worst:.3} away");
    assert!(settling_steps(&after_load, 1.0, 0.01) < 1000);
    assert!((plant.y - 1.0).abs() < 0.01);

    // Total disturbance = -a·y + load = -1 + 5.
    assert!(
        (ctrl.estimated_disturbance() - 4.0).abs() < 1e-3,
        "disturbance estimate {}",
        ctrl.estimated_disturbance()
    );
}

fn run_loop(params: LadrcParameters, reference: f64) -> Vec<f64> {
    let mut ctrl = Ladrc::new(&params).unwrap();
    let mut plant = FirstOrderPlant::new(1.0, params.nominal_gain);
    (0..2000)
        .map(|_| {
            let u = ctrl.compute_control_output(reference, plant.y).unwrap();
            plant.step(u, DT);
            u
        })
        .collect()
}

#[test]
fn instances_on_separate_threads_are_independent() {
    let a = LadrcParameters::new(1, 2.0, 10.0, 50.0);
    let b = LadrcParameters::new(1, 3.0, 15.0, 75.0);

    let expected_a = run_loop(a, 1.0);
    let expected_b = run_loop(b, -0.5);

    let ha = thread::spawn(move || run_loop(a, 1.0));
    let hb = thread::spawn(move || run_loop(b, -0.5));

    assert_eq!(ha.join().unwrap(), expected_a);
    assert_eq!(hb.join().unwrap(), expected_b);
}

#[test]
fn cloned_controller_diverges_only_with_its_own_inputs() {
    let mut original = Ladrc::new(&LadrcParameters::new(1, 2.0, 10.0, 50.0)).unwrap();
    original.compute_control_output(1.0, 0.0).unwrap();

    let mut copy = original.clone();
    let u_copy = copy.compute_control_output(1.0, 0.1).unwrap();
    let u_orig = original.compute_control_output(1.0, 0.1).unwrap();
    assert_eq!(u_copy, u_orig);

    copy.compute_control_output(1.0, 0.2).unwrap();
    assert_ne!(copy.state(), original.state());
}
