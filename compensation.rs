//! Floating point compensation formulas, Bosch BST-BMP280-DS001 section 8.1.
//!
//! Both functions are pure. `compute_temperature` hands back `t_fine` so that
//! `compute_pressure` is fed from the same raw sample instead of recomputing it.

use crate::structs::Calibration;

/// Returns the temperature in degrees Celsius and the fine temperature `t_fine`.
pub fn compute_temperature(calib: &Calibration, raw_value: i32) -> (f32, i32) {
    let v1 = (raw_value as f32 / 16384.0 - calib.t1 as f32 / 1024.0) * calib.t2 as f32;
    let v2 = ((raw_value as f32 / 131072.0 - calib.t1 as f32 / 8192.0)
        * (raw_value as f32 / 131072.0 - calib.t1 as f32 / 8192.0))
        * calib.t3 as f32;
    let celsius = (v1 + v2) / 5120.0;
    let t_fine = (v1 + v2) as i32;
    (celsius, t_fine)
}

/// Returns the pressure in Pa.
pub fn compute_pressure(calib: &Calibration, raw_value: i32, t_fine: i32) -> f32 {
    let mut v1 = t_fine as f32 / 2.0 - 64000.0;
    let mut v2 = v1 * v1 * calib.p6 as f32 / 32768.0 + v1 * calib.p5 as f32 * 2.0;
    v2 = v2 / 4.0 + calib.p4 as f32 * 65536.0;
    v1 = (calib.p3 as f32 * v1 * v1 / 524288.0 + calib.p2 as f32 * v1) / 524288.0;
    v1 = (1.0 + v1 / 32768.0) * calib.p1 as f32;
    if v1 == 0.0 {
        // avoid division by zero
        return 0.0;
    }
    let mut pressure = 1048576.0 - raw_value as f32;
    pressure = (pressure - v2 / 4096.0) * (6250.0 / v1);
    v1 = calib.p9 as f32 * pressure * pressure / 2147483648.0;
    v2 = pressure * calib.p8 as f32 / 32768.0;
    pressure + (v1 + v2 + calib.p7 as f32) / 16.0
}
