//! Progress percentage for the header bar.

/// Percentage of the workout done, with partial credit for finished sets.
///
/// `round(100 * (step_index / total_steps + (current_set - 1) / sets / total_steps))`,
/// clamped to `0..=100`. Zero steps or zero sets never divide by zero.
pub fn progress_percent(step_index: usize, current_set: u32, sets: u32, total_steps: usize) -> u8 {
    if total_steps == 0 {
        return 0;
    }
    let total = total_steps as f64;
    let sets = sets.max(1) as f64;
    let finished_sets = current_set.saturating_sub(1) as f64;

    let fraction = step_index as f64 / total + finished_sets / sets / total;
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}
