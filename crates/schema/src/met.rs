//! Helpers for preparing Penman-schema weather columns.

/// Actual vapour pressure (kPa) from relative humidity.
///
/// Saturation pressure uses the Magnus form at the mean of `tmin` and
/// `tmax` (°C):
///
/// ```text
/// e_s = 6.11 · 10^(7.5 T / (237.3 + T))   [hPa]
/// e_a = rh / 100 · e_s / 10               [kPa]
/// ```
///
/// `rh` is in percent (0–100).
pub fn vapour_pressure_from_rh(rh: f64, tmin: f64, tmax: f64) -> f64 {
    let mean_t = (tmin + tmax) / 2.0;
    let saturation_hpa = 6.11 * 10f64.powf(7.5 * mean_t / (237.3 + mean_t));
    rh / 100.0 * saturation_hpa / 10.0
}

/// Wind speed at 2 m above a short grass surface from a measurement at
/// height `z` metres (FAO-56, eq. 47).
pub fn wind_speed_at_2m(ws: f64, z: f64) -> f64 {
    ws * 4.87 / (67.8 * z - 5.42).ln()
}
