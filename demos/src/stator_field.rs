use std::fs::File;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use physlab::stator::{ self, Drive, Event, StatorState };

// air-gap field of a synchronous machine: drive the application state through
// a representative interaction sequence and serialize the resulting scenes

fn main() -> anyhow::Result<()> {
    // a dense three-phase winding a quarter period into its cycle
    let mut state = StatorState::default();
    state = stator::update(state, Event::SetCoils(15));
    state = stator::update(state, Event::ToggleDrive);
    state = stator::update(state, Event::SetTime(0.25));
    assert_eq!(state.drive, Drive::ThreePhase);

    let scene = stator::view(&state);
    println!("scene primitives: {}", scene.machine.len());
    println!("resultant field angle: {:.1}°", scene.resultant_angle);

    // one animated drive period: the resultant angle should sweep a full turn
    state = stator::update(state, Event::SetTime(0.0));
    state = stator::update(state, Event::ToggleAnimation);
    let mut angles: Vec<f64> = Vec::new();
    for _ in 0..30 {
        angles.push(stator::view(&state).resultant_angle);
        state = stator::update(state, Event::Tick);
    }
    let angles = nd::Array1::from(angles);

    // the start of the cycle under single-phase drive, for comparison
    let single = stator::update(
        stator::update(state, Event::ToggleDrive),
        Event::SetTime(0.0),
    );
    let single_scene = stator::view(&single);

    std::fs::create_dir_all("output")?;
    let mut npz = NpzWriter::new(File::create("output/stator_field.npz")?);
    npz.add_array("theta", &scene.theta)?;
    npz.add_array("field_three_phase", &scene.field)?;
    npz.add_array("fundamental_three_phase", &scene.fundamental)?;
    npz.add_array("field_single_phase", &single_scene.field)?;
    npz.add_array("fundamental_single_phase", &single_scene.fundamental)?;
    npz.add_array("animation_angles", &angles)?;
    npz.finish()?;
    Ok(())
}
