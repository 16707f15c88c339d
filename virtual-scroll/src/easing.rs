use core::f64::consts::PI;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

const BACK_MAGNITUDE: f64 = 1.70158;
const ELASTIC_MAGNITUDE: f64 = 0.7;
const ELASTIC_IN_OUT_MAGNITUDE: f64 = 0.65;

/// Named easing curves for scroll animations.
///
/// Every curve maps normalized elapsed time `t` in `[0, 1]` to normalized progress, with
/// `sample(0) == 0` and `sample(1) == 1`. Back and elastic curves overshoot in between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    #[default]
    Linear,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

impl Easing {
    pub const ALL: [Easing; 31] = [
        Self::Linear,
        Self::EaseInSine,
        Self::EaseOutSine,
        Self::EaseInOutSine,
        Self::EaseInQuad,
        Self::EaseOutQuad,
        Self::EaseInOutQuad,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
        Self::EaseInQuart,
        Self::EaseOutQuart,
        Self::EaseInOutQuart,
        Self::EaseInQuint,
        Self::EaseOutQuint,
        Self::EaseInOutQuint,
        Self::EaseInExpo,
        Self::EaseOutExpo,
        Self::EaseInOutExpo,
        Self::EaseInCirc,
        Self::EaseOutCirc,
        Self::EaseInOutCirc,
        Self::EaseInBack,
        Self::EaseOutBack,
        Self::EaseInOutBack,
        Self::EaseInElastic,
        Self::EaseOutElastic,
        Self::EaseInOutElastic,
        Self::EaseInBounce,
        Self::EaseOutBounce,
        Self::EaseInOutBounce,
    ];

    /// Samples the curve. `t` is clamped to `[0, 1]`; NaN samples as `0`.
    pub fn sample(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        (self.curve())(t)
    }

    /// The curve as a plain function of `t` in `[0, 1]` (no clamping).
    pub fn curve(self) -> fn(f64) -> f64 {
        match self {
            Self::Linear => linear,
            Self::EaseInSine => in_sine,
            Self::EaseOutSine => out_sine,
            Self::EaseInOutSine => in_out_sine,
            Self::EaseInQuad => in_quad,
            Self::EaseOutQuad => out_quad,
            Self::EaseInOutQuad => in_out_quad,
            Self::EaseInCubic => in_cubic,
            Self::EaseOutCubic => out_cubic,
            Self::EaseInOutCubic => in_out_cubic,
            Self::EaseInQuart => in_quart,
            Self::EaseOutQuart => out_quart,
            Self::EaseInOutQuart => in_out_quart,
            Self::EaseInQuint => in_quint,
            Self::EaseOutQuint => out_quint,
            Self::EaseInOutQuint => in_out_quint,
            Self::EaseInExpo => in_expo,
            Self::EaseOutExpo => out_expo,
            Self::EaseInOutExpo => in_out_expo,
            Self::EaseInCirc => in_circ,
            Self::EaseOutCirc => out_circ,
            Self::EaseInOutCirc => in_out_circ,
            Self::EaseInBack => in_back,
            Self::EaseOutBack => out_back,
            Self::EaseInOutBack => in_out_back,
            Self::EaseInElastic => in_elastic,
            Self::EaseOutElastic => out_elastic,
            Self::EaseInOutElastic => in_out_elastic,
            Self::EaseInBounce => in_bounce,
            Self::EaseOutBounce => out_bounce,
            Self::EaseInOutBounce => in_out_bounce,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInSine => "ease-in-sine",
            Self::EaseOutSine => "ease-out-sine",
            Self::EaseInOutSine => "ease-in-out-sine",
            Self::EaseInQuad => "ease-in-quad",
            Self::EaseOutQuad => "ease-out-quad",
            Self::EaseInOutQuad => "ease-in-out-quad",
            Self::EaseInCubic => "ease-in-cubic",
            Self::EaseOutCubic => "ease-out-cubic",
            Self::EaseInOutCubic => "ease-in-out-cubic",
            Self::EaseInQuart => "ease-in-quart",
            Self::EaseOutQuart => "ease-out-quart",
            Self::EaseInOutQuart => "ease-in-out-quart",
            Self::EaseInQuint => "ease-in-quint",
            Self::EaseOutQuint => "ease-out-quint",
            Self::EaseInOutQuint => "ease-in-out-quint",
            Self::EaseInExpo => "ease-in-expo",
            Self::EaseOutExpo => "ease-out-expo",
            Self::EaseInOutExpo => "ease-in-out-expo",
            Self::EaseInCirc => "ease-in-circ",
            Self::EaseOutCirc => "ease-out-circ",
            Self::EaseInOutCirc => "ease-in-out-circ",
            Self::EaseInBack => "ease-in-back",
            Self::EaseOutBack => "ease-out-back",
            Self::EaseInOutBack => "ease-in-out-back",
            Self::EaseInElastic => "ease-in-elastic",
            Self::EaseOutElastic => "ease-out-elastic",
            Self::EaseInOutElastic => "ease-in-out-elastic",
            Self::EaseInBounce => "ease-in-bounce",
            Self::EaseOutBounce => "ease-out-bounce",
            Self::EaseInOutBounce => "ease-in-out-bounce",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown easing curve `{0}`")]
pub struct ParseEasingError(pub String);

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| ParseEasingError(s.to_owned()))
    }
}

fn linear(t: f64) -> f64 {
    t
}

fn in_sine(t: f64) -> f64 {
    1.0 - (t * PI / 2.0).cos()
}

fn out_sine(t: f64) -> f64 {
    (t * PI / 2.0).sin()
}

fn in_out_sine(t: f64) -> f64 {
    -0.5 * ((PI * t).cos() - 1.0)
}

fn in_quad(t: f64) -> f64 {
    t * t
}

fn out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

fn in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn in_cubic(t: f64) -> f64 {
    t * t * t
}

fn out_cubic(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * u + 1.0
}

fn in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        (t - 1.0) * u * u + 1.0
    }
}

fn in_quart(t: f64) -> f64 {
    t.powi(4)
}

fn out_quart(t: f64) -> f64 {
    1.0 - (t - 1.0).powi(4)
}

fn in_out_quart(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - 8.0 * (t - 1.0).powi(4)
    }
}

fn in_quint(t: f64) -> f64 {
    t.powi(5)
}

fn out_quint(t: f64) -> f64 {
    1.0 + (t - 1.0).powi(5)
}

fn in_out_quint(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t.powi(5)
    } else {
        1.0 + 16.0 * (t - 1.0).powi(5)
    }
}

// The exponential forms never reach 0/1 exactly, so the endpoints are pinned.
fn in_expo(t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    2f64.powf(10.0 * (t - 1.0))
}

fn out_expo(t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    1.0 - 2f64.powf(-10.0 * t)
}

fn in_out_expo(t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let scaled = t * 2.0 - 1.0;
    if scaled < 0.0 {
        0.5 * 2f64.powf(10.0 * scaled)
    } else {
        0.5 * (2.0 - 2f64.powf(-10.0 * scaled))
    }
}

fn in_circ(t: f64) -> f64 {
    1.0 - (1.0 - t * t).max(0.0).sqrt()
}

fn out_circ(t: f64) -> f64 {
    let u = t - 1.0;
    (1.0 - u * u).max(0.0).sqrt()
}

fn in_out_circ(t: f64) -> f64 {
    let scaled = t * 2.0;
    if scaled < 1.0 {
        -0.5 * ((1.0 - scaled * scaled).max(0.0).sqrt() - 1.0)
    } else {
        let u = scaled - 2.0;
        0.5 * ((1.0 - u * u).max(0.0).sqrt() + 1.0)
    }
}

fn in_back(t: f64) -> f64 {
    t * t * ((BACK_MAGNITUDE + 1.0) * t - BACK_MAGNITUDE)
}

fn out_back(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * ((BACK_MAGNITUDE + 1.0) * u + BACK_MAGNITUDE) + 1.0
}

fn in_out_back(t: f64) -> f64 {
    let s = BACK_MAGNITUDE * 1.525;
    let scaled = t * 2.0;
    if scaled < 1.0 {
        0.5 * scaled * scaled * ((s + 1.0) * scaled - s)
    } else {
        let u = scaled - 2.0;
        0.5 * (u * u * ((s + 1.0) * u + s) + 2.0)
    }
}

fn elastic_phase(magnitude: f64) -> (f64, f64) {
    let period = 1.0 - magnitude;
    let shift = period / (2.0 * PI) * 1f64.asin();
    (period, shift)
}

fn in_elastic(t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let (p, s) = elastic_phase(ELASTIC_MAGNITUDE);
    let u = t - 1.0;
    -(2f64.powf(10.0 * u) * ((u - s) * 2.0 * PI / p).sin())
}

fn out_elastic(t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let (p, s) = elastic_phase(ELASTIC_MAGNITUDE);
    let scaled = t * 2.0;
    2f64.powf(-10.0 * scaled) * ((scaled - s) * 2.0 * PI / p).sin() + 1.0
}

fn in_out_elastic(t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let (p, s) = elastic_phase(ELASTIC_IN_OUT_MAGNITUDE);
    let u = t * 2.0 - 1.0;
    let wave = ((u - s) * 2.0 * PI / p).sin();
    if u < 0.0 {
        -0.5 * 2f64.powf(10.0 * u) * wave
    } else {
        0.5 * 2f64.powf(-10.0 * u) * wave + 1.0
    }
}

fn out_bounce(t: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let u = t - 1.5 / D;
        N * u * u + 0.75
    } else if t < 2.5 / D {
        let u = t - 2.25 / D;
        N * u * u + 0.9375
    } else {
        let u = t - 2.625 / D;
        N * u * u + 0.984375
    }
}

fn in_bounce(t: f64) -> f64 {
    1.0 - out_bounce(1.0 - t)
}

fn in_out_bounce(t: f64) -> f64 {
    if t < 0.5 {
        in_bounce(t * 2.0) * 0.5
    } else {
        out_bounce(t * 2.0 - 1.0) * 0.5 + 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn every_curve_hits_both_endpoints() {
        for easing in Easing::ALL {
            let start = easing.sample(0.0);
            let end = easing.sample(1.0);
            assert!(start.abs() < EPS, "{easing}: sample(0) = {start}");
            assert!((end - 1.0).abs() < EPS, "{easing}: sample(1) = {end}");
        }
    }

    #[test]
    fn expo_and_elastic_endpoints_are_exact() {
        for easing in [
            Easing::EaseInExpo,
            Easing::EaseOutExpo,
            Easing::EaseInOutExpo,
            Easing::EaseInElastic,
            Easing::EaseOutElastic,
            Easing::EaseInOutElastic,
        ] {
            assert_eq!(easing.sample(0.0), 0.0, "{easing}");
            assert_eq!(easing.sample(1.0), 1.0, "{easing}");
        }
    }

    #[test]
    fn every_curve_is_finite_across_the_domain() {
        for easing in Easing::ALL {
            for i in 0..=200 {
                let t = i as f64 / 200.0;
                assert!(easing.sample(t).is_finite(), "{easing} at {t}");
            }
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::EaseInQuad.sample(-3.0), 0.0);
        assert_eq!(Easing::EaseInQuad.sample(7.0), 1.0);
        assert_eq!(Easing::EaseOutExpo.sample(f64::NAN), 0.0);
    }

    #[test]
    fn in_out_curves_are_symmetric_at_midpoint() {
        for easing in [
            Easing::EaseInOutSine,
            Easing::EaseInOutQuad,
            Easing::EaseInOutCubic,
            Easing::EaseInOutQuart,
            Easing::EaseInOutQuint,
            Easing::EaseInOutExpo,
            Easing::EaseInOutCirc,
            Easing::EaseInOutBounce,
        ] {
            assert!((easing.sample(0.5) - 0.5).abs() < 1e-6, "{easing}");
        }
    }

    #[test]
    fn monotonic_curves_never_go_backwards() {
        for easing in [
            Easing::Linear,
            Easing::EaseInSine,
            Easing::EaseOutQuad,
            Easing::EaseInOutCubic,
            Easing::EaseOutQuint,
            Easing::EaseInOutExpo,
            Easing::EaseOutCirc,
        ] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.sample(i as f64 / 100.0);
                assert!(v + EPS >= prev, "{easing} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn back_overshoots() {
        assert!(Easing::EaseInBack.sample(0.2) < 0.0);
        assert!(Easing::EaseOutBack.sample(0.8) > 1.0);
    }

    #[test]
    fn names_round_trip() {
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>(), Ok(easing));
        }
        assert_eq!(
            "ease-sideways".parse::<Easing>(),
            Err(ParseEasingError("ease-sideways".to_owned()))
        );
    }
}
