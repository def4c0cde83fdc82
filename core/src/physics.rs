// core/src/physics.rs
// Felles konstanter og små regnehjelpere for alle treningstyper.

pub const LEN_STEP: f64 = 0.65;     // skrittlengde (m)
pub const M_IN_KM: f64 = 1000.0;    // meter i km
pub const MIN_IN_HOUR: f64 = 60.0;  // minutter i en time

/// Avrunding til `dp` desimaler (InfoMessage::rounded bruker 3).
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Distanse (km) ut fra antall bevegelser og lengden på hver.
#[inline]
pub fn distance_km(action: u64, len_step_m: f64) -> f64 {
    action as f64 * len_step_m / M_IN_KM
}

/// Snittfart (km/t). Varighet må være > 0, ellers `None`.
#[inline]
pub fn speed_kmh(distance_km: f64, duration_h: f64) -> Option<f64> {
    if !(duration_h > 0.0) {
        return None;
    }
    Some(distance_km / duration_h)
}

/// Varighet i minutter.
#[inline]
pub fn duration_min(duration_h: f64) -> f64 {
    duration_h * MIN_IN_HOUR
}
