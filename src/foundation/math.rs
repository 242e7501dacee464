pub(crate) fn gcd_u64(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

pub(crate) fn lcm_u64(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    let g = gcd_u64(a, b);
    (a / g).saturating_mul(b)
}

pub(crate) fn gcd_u32(a: u32, b: u32) -> u32 {
    gcd_u64(u64::from(a), u64::from(b)) as u32
}

/// Best rational approximation of `x` with denominator bounded by
/// `max_den`, via continued-fraction expansion. Non-finite or non-positive
/// input collapses to 1/1.
pub(crate) fn approx_ratio(x: f64, max_den: u64) -> (u64, u64) {
    if !x.is_finite() || x <= 0.0 {
        return (1, 1);
    }

    let (mut p0, mut q0) = (0u64, 1u64);
    let (mut p1, mut q1) = (1u64, 0u64);
    let mut v = x;
    loop {
        let a = v.floor();
        if a > u64::MAX as f64 {
            break;
        }
        let a = a as u64;
        let (Some(p2), Some(q2)) = (
            a.checked_mul(p1).and_then(|m| m.checked_add(p0)),
            a.checked_mul(q1).and_then(|m| m.checked_add(q0)),
        ) else {
            break;
        };
        if q2 > max_den {
            break;
        }
        (p0, q0) = (p1, q1);
        (p1, q1) = (p2, q2);

        let frac = v - v.floor();
        if frac < 1e-9 {
            break;
        }
        v = 1.0 / frac;
    }

    if q1 == 0 { (1, 1) } else { (p1.max(1), q1) }
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
