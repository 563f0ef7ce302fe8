//! Synthetic sailing generation.
//!
//! Batches are a pure function of the criteria, the configuration and the
//! supplied random source. Stability across page loads comes from the cache
//! in [`crate::engine`], not from seeding.

use rand::Rng;

use crate::config::{PriceBand, ScheduleConfig};
use crate::criteria::{SearchCriteria, add_days};
use crate::numbers::{i64_to_f64, round_to_step, usize_to_u32};
use crate::sailing::Sailing;

/// Generate a fresh batch of sailings ordered by departure date, with ids
/// assigned `1..=N` in that order.
pub fn generate(
    criteria: &SearchCriteria,
    config: &ScheduleConfig,
    rng: &mut impl Rng,
) -> Vec<Sailing> {
    let count = criteria.cargo_period.batch_size(rng);
    let mut offsets =
        sample_departure_offsets(count, criteria.cargo_period.days(), config, rng);
    offsets.sort_unstable();

    let window_start = criteria.window_start();
    let transit = config.transit_range(criteria);
    let band = config.price_band(&criteria.container_type);
    let space = config.available_space;

    offsets
        .into_iter()
        .enumerate()
        .map(|(idx, offset)| {
            let departure_date = add_days(window_start, offset);
            let transit_time_days = rng.gen_range(transit.min..=transit.max);
            let unit = unit_price(band, config.price_step, rng);
            Sailing {
                id: usize_to_u32(idx + 1),
                departure_date,
                transit_time_days,
                eta: add_days(departure_date, transit_time_days),
                total_price: unit.saturating_mul(i64::from(criteria.container_number)),
                available_space: rng.gen_range(space.min..=space.max),
            }
        })
        .collect()
}

/// Draw a per-container price from the band, rounded to the nearest `step`.
pub fn unit_price(band: PriceBand, step: i64, rng: &mut impl Rng) -> i64 {
    let min = i64_to_f64(band.min);
    let max = i64_to_f64(band.max);
    let raw = if max > min {
        rng.gen_range(min..max)
    } else {
        min
    };
    round_to_step(raw, step)
}

/// Pick `count` day offsets, relative to the window start, for departures.
///
/// Candidates come from `[min_window_offset_days, period_days - 1]` and are
/// rejected when closer than `min_departure_spacing_days` to an accepted
/// offset, or when accepting them would leave too little room for the rest
/// of the batch. Sampling stops after `max_date_attempts` draws; any
/// shortfall is then filled deterministically, relaxing the spacing rule
/// only when no spaced set of `count` offsets fits the window. Offsets are
/// returned in acceptance order.
pub fn sample_departure_offsets(
    count: usize,
    period_days: u32,
    config: &ScheduleConfig,
    rng: &mut impl Rng,
) -> Vec<u32> {
    let mut picked = Vec::with_capacity(count);
    if count == 0 || period_days == 0 {
        return picked;
    }
    let hi = period_days - 1;
    let lo = config.min_window_offset_days.min(hi);
    let spacing = config.min_departure_spacing_days;
    let satisfiable = spaced_room(&picked, count, lo, hi, spacing) >= count;

    let mut attempts = 0;
    while picked.len() < count && attempts < config.max_date_attempts {
        attempts += 1;
        let candidate = rng.gen_range(lo..=hi);
        if !is_spaced(&picked, candidate, spacing) {
            continue;
        }
        picked.push(candidate);
        if satisfiable && spaced_room(&picked, count, lo, hi, spacing) < count - picked.len() {
            picked.pop();
        }
    }

    if picked.len() < count {
        log::debug!(
            "departure sampling gave {} of {count} dates after {attempts} attempts; filling window",
            picked.len()
        );
        fill_remaining(&mut picked, count, lo, hi, spacing);
    }
    picked
}

fn is_spaced(picked: &[u32], candidate: u32, spacing: u32) -> bool {
    picked.iter().all(|&p| p.abs_diff(candidate) >= spacing)
}

/// How many more spaced offsets fit alongside `picked`, up to `want`.
///
/// Taking the lowest free offset first is optimal on a line, so the
/// ascending scan gives the true maximum.
fn spaced_room(picked: &[u32], want: usize, lo: u32, hi: u32, spacing: u32) -> usize {
    let mut taken = picked.to_vec();
    let mut added = 0;
    for offset in lo..=hi {
        if added >= want {
            break;
        }
        if !taken.contains(&offset) && is_spaced(&taken, offset, spacing) {
            taken.push(offset);
            added += 1;
        }
    }
    added
}

fn fill_remaining(picked: &mut Vec<u32>, count: usize, lo: u32, hi: u32, spacing: u32) {
    for offset in lo..=hi {
        if picked.len() >= count {
            return;
        }
        if !picked.contains(&offset) && is_spaced(picked, offset, spacing) {
            picked.push(offset);
        }
    }
    if picked.len() < count {
        log::warn!("window of {} days cannot space {count} departures", hi - lo + 1);
    }
    for offset in lo..=hi {
        if picked.len() >= count {
            return;
        }
        if !picked.contains(&offset) {
            picked.push(offset);
        }
    }
    while picked.len() < count {
        picked.push(hi);
    }
}
