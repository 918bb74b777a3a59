//! Air-gap field of a synchronous machine stator, structured as an explicit
//! application state advanced by pure update functions.
//!
//! The original demonstration drove a pile of mutable widget globals from
//! slider callbacks; here the whole interaction surface is a [`StatorState`]
//! value, every interaction is an [`Event`], and [`view`] renders the state
//! to plain scene data for whatever draws it.

use std::f64::consts::{ PI, TAU };
use ndarray as nd;

/// Peak air-gap field of a fully driven coil set.
pub const B_MAX: f64 = 5.0;
/// Largest selectable coil count per set.
pub const MAX_COILS: usize = 15;
/// Number of field vectors sampled around the air gap.
const GAP_VECTORS: usize = 16;
/// Points per B(θ) curve.
const CURVE_SAMPLES: usize = 150;
/// Animation step, in drive periods per frame.
const FRAME_STEP: f64 = 1.0 / 30.0;

/// Winding drive scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Drive {
    /// One coil set; the field pulses along a fixed axis.
    SinglePhase,
    /// Three coil sets 120° apart; the field rotates at the drive frequency.
    ThreePhase,
}

/// Complete state of the demonstration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StatorState {
    /// Coils per set; held odd and clamped to `1..=MAX_COILS`.
    pub coils: usize,
    /// Drive scheme.
    pub drive: Drive,
    /// Time in units of the drive period, wrapped to `[0, 1)`.
    pub t: f64,
    /// Whether `Event::Tick` advances the clock.
    pub animating: bool,
}

impl Default for StatorState {
    fn default() -> Self {
        Self {
            coils: 1,
            drive: Drive::SinglePhase,
            t: 0.0,
            animating: false,
        }
    }
}

/// State transitions, one per interaction the original demonstration offers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    SetCoils(usize),
    SetTime(f64),
    ToggleDrive,
    ToggleAnimation,
    /// Advance the animation clock by one frame, if animating.
    Tick,
}

/// Advance the state by one event.
///
/// Pure: equal inputs produce equal outputs and nothing outside the returned
/// state is touched.
pub fn update(state: StatorState, event: Event) -> StatorState {
    let mut next = state;
    match event {
        Event::SetCoils(n) => {
            let n = n.clamp(1, MAX_COILS);
            next.coils = if n % 2 == 0 { n + 1 } else { n };
        }
        Event::SetTime(t) => {
            next.t = t.rem_euclid(1.0);
        }
        Event::ToggleDrive => {
            next.drive = match state.drive {
                Drive::SinglePhase => Drive::ThreePhase,
                Drive::ThreePhase => Drive::SinglePhase,
            };
        }
        Event::ToggleAnimation => {
            next.animating = !state.animating;
        }
        Event::Tick => {
            if state.animating {
                next.t = (state.t + FRAME_STEP).rem_euclid(1.0);
            }
        }
    }
    next
}

/// Angular position of the axis of coil `i` among `n`, the set being spread
/// over half the machine circumference.
pub fn coil_angle(i: usize, n: usize) -> f64 {
    let delta = PI / n as f64;
    (i as f64 - (n as f64 - 1.0) / 2.0) * delta
}

// sign of the square-wave gap field: positive within a quarter turn of the
// coil axis on either side
fn gap_sign(x: f64) -> f64 {
    let d = x.rem_euclid(TAU);
    if d < PI / 2.0 || d > 3.0 * PI / 2.0 { 1.0 } else { -1.0 }
}

/// Square-wave air-gap field of a single coil whose axis sits at `angle`.
pub fn coil_field(theta: f64, angle: f64, t: f64, drive: Drive) -> f64 {
    match drive {
        Drive::ThreePhase => B_MAX * gap_sign(theta - angle - TAU * t),
        Drive::SinglePhase => {
            B_MAX * (TAU * t).cos() * gap_sign(theta - angle)
        }
    }
}

/// Total air-gap field of `n` coils, each weighted `1/n`.
pub fn total_field(theta: f64, t: f64, n: usize, drive: Drive) -> f64 {
    (0..n)
        .map(|i| coil_field(theta, coil_angle(i, n), t, drive))
        .sum::<f64>()
        / n as f64
}

/// Sinusoidal fundamental the coil sum approximates: rotating for
/// three-phase drive, pulsating for single-phase.
pub fn fundamental(theta: f64, t: f64, drive: Drive) -> f64 {
    match drive {
        Drive::ThreePhase => B_MAX * (theta - TAU * t).cos(),
        Drive::SinglePhase => B_MAX * theta.cos() * (TAU * t).cos(),
    }
}

/// Drawing primitives understood by the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Circle { center: (f64, f64), radius: f64, filled: bool },
    Arrow { base: (f64, f64), tip: (f64, f64), weight: f64 },
    Label { pos: (f64, f64), text: String },
}

/// Everything needed to redraw the demonstration for one state.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Machine cross-section, slot markers, and air-gap field vectors.
    pub machine: Vec<Primitive>,
    /// Sampled angular coordinate of the field curves.
    pub theta: nd::Array1<f64>,
    /// Square-wave coil sum B(θ).
    pub field: nd::Array1<f64>,
    /// Sinusoidal fundamental B(θ).
    pub fundamental: nd::Array1<f64>,
    /// Orientation of the resultant field arrow, in degrees.
    pub resultant_angle: f64,
}

// slot and winding-direction markers for one coil set whose return conductors
// sit diametrically opposite
fn coil_set_primitives(
    prims: &mut Vec<Primitive>,
    coils: usize,
    slot_radius: f64,
    offset_deg: f64,
) {
    let slot = 0.1 - 0.001 * coils as f64;
    let rc = slot_radius + slot / 2.0;
    for (half_deg, outgoing) in [(offset_deg, true), (offset_deg + 180.0, false)] {
        for i in 0..coils {
            let angle = coil_angle(i, coils) + half_deg.to_radians();
            let center = (rc * angle.cos(), rc * angle.sin());
            prims.push(Primitive::Circle {
                center,
                radius: 1.1 * slot,
                filled: false,
            });
            prims.push(Primitive::Label {
                pos: center,
                text: if outgoing { "·".into() } else { "×".into() },
            });
        }
    }
}

/// Render the state to scene data.
///
/// Pure: drawing happens elsewhere, on the returned value.
pub fn view(state: &StatorState) -> Scene {
    let r_machine = 2.9;
    let mut machine = vec![
        // stator iron, air gap, rotor
        Primitive::Circle {
            center: (0.0, 0.0), radius: r_machine, filled: true,
        },
        Primitive::Circle {
            center: (0.0, 0.0), radius: 3.0 * r_machine / 4.0, filled: false,
        },
        Primitive::Circle {
            center: (0.0, 0.0), radius: 2.0 * r_machine / 3.0, filled: true,
        },
    ];
    let slot_radius = 2.3;
    coil_set_primitives(&mut machine, state.coils, slot_radius, 90.0);
    if state.drive == Drive::ThreePhase {
        coil_set_primitives(&mut machine, state.coils, slot_radius + 0.21, 210.0);
        coil_set_primitives(&mut machine, state.coils, slot_radius + 0.42, 330.0);
    }

    // field vectors around the air gap
    let r_gap = 2.7;
    let vec_len = 0.4;
    let phase = TAU * state.t;
    for i in 0..GAP_VECTORS {
        let angle = (i as f64 - 8.0) * TAU / GAP_VECTORS as f64;
        let along = match state.drive {
            Drive::ThreePhase => (angle - phase).cos(),
            Drive::SinglePhase => angle.cos() * phase.cos(),
        };
        let ri = 3.0 * r_gap / 4.0;
        let base = (ri * angle.cos(), ri * angle.sin());
        machine.push(Primitive::Arrow {
            base,
            tip: (
                base.0 + vec_len * along * angle.cos(),
                base.1 + vec_len * along * angle.sin(),
            ),
            weight: 1.0,
        });
    }

    // resultant field arrow and its angle readout
    let (base, tip, resultant_angle) = match state.drive {
        Drive::ThreePhase => (
            (-r_gap / 2.0 * phase.cos(), -r_gap / 2.0 * phase.sin()),
            (r_gap / 2.0 * phase.cos(), r_gap / 2.0 * phase.sin()),
            360.0 * state.t,
        ),
        Drive::SinglePhase => (
            (-r_gap / 2.0 * phase.cos(), 0.0),
            (r_gap / 2.0 * phase.cos(), 0.0),
            (1.0 - phase.cos().signum()) * 90.0,
        ),
    };
    machine.push(Primitive::Arrow { base, tip, weight: 1.3 });
    machine.push(Primitive::Label {
        pos: (-0.7, -3.0),
        text: format!("max field angle: {resultant_angle:5.1}°"),
    });

    let theta: nd::Array1<f64>
        = nd::Array1::linspace(-5.0, 5.0, CURVE_SAMPLES);
    let field = theta.mapv(|th| {
        total_field(th, state.t, state.coils, state.drive)
    });
    let fund = theta.mapv(|th| fundamental(th, state.t, state.drive));

    Scene {
        machine,
        theta,
        field,
        fundamental: fund,
        resultant_angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_is_pure_and_clamps_coil_counts() {
        let s0 = StatorState::default();
        assert_eq!(update(s0, Event::SetCoils(4)).coils, 5);
        assert_eq!(update(s0, Event::SetCoils(0)).coils, 1);
        assert_eq!(update(s0, Event::SetCoils(99)).coils, MAX_COILS);
        assert_eq!(
            update(s0, Event::SetTime(1.25)),
            update(s0, Event::SetTime(1.25)),
        );
        // the input state is untouched
        assert_eq!(s0, StatorState::default());
    }

    #[test]
    fn tick_only_advances_while_animating() {
        let s0 = StatorState::default();
        assert_eq!(update(s0, Event::Tick).t, 0.0);
        let animating = update(s0, Event::ToggleAnimation);
        assert!(update(animating, Event::Tick).t > 0.0);
    }

    #[test]
    fn single_phase_field_pulses_on_a_fixed_axis() {
        // at a quarter period the single-phase drive current is zero
        for th in [0.0, 0.8, 2.1] {
            assert!(total_field(th, 0.25, 5, Drive::SinglePhase).abs() < 1e-9);
        }
        // and the resultant never leaves the horizontal axis
        let state = StatorState {
            t: 0.37,
            drive: Drive::SinglePhase,
            ..StatorState::default()
        };
        let scene = view(&state);
        assert!(
            scene.resultant_angle == 0.0 || scene.resultant_angle == 180.0
        );
    }

    #[test]
    fn three_phase_resultant_rotates_with_the_drive() {
        let mut state = StatorState::default();
        state = update(state, Event::ToggleDrive);
        state = update(state, Event::SetTime(0.25));
        let scene = view(&state);
        assert!((scene.resultant_angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn more_coils_track_the_fundamental_more_closely() {
        let rms = |n: usize| {
            let theta: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 500);
            let err: f64 = theta.iter()
                .map(|&th| {
                    (total_field(th, 0.0, n, Drive::ThreePhase)
                        - fundamental(th, 0.0, Drive::ThreePhase))
                        .powi(2)
                })
                .sum();
            (err / 500.0).sqrt()
        };
        assert!(rms(15) < rms(1));
    }
}
