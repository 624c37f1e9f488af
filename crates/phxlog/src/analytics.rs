//! Reference computation of the [`Analytics`] aggregate.
//!
//! The remote diary service owns this computation; the local stores use this module
//! so that they answer analytics queries the same way.
//!
//! - **Window**: days dated on or after `today - (window - 1)`.
//! - **training_days**: number of recorded days in the window.
//! - **avg_steps**: integer mean of the step values of all activity blocks in the
//!   window. Blank steps count as zero, unreadable ones are skipped.
//! - **last_working_weights**: for each tracked lift, the last readable set weight of
//!   any strength block whose exercise name contains the lift (case-insensitive).
//!   Days are scanned in the order given, so callers pass them oldest first.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

use crate::block::Block;
use crate::model::{Analytics, WorkoutDay};

pub const DEFAULT_TRACKED_LIFTS: [&str; 3] = ["присед", "становая", "жим стоя"];

pub fn default_tracked_lifts() -> Vec<String> {
    DEFAULT_TRACKED_LIFTS.iter().map(|s| s.to_string()).collect()
}

pub fn compute(days: &[WorkoutDay], window: u32, today: NaiveDate, tracked: &[String]) -> Analytics {
    let since = today - Duration::days(i64::from(window) - 1);
    let in_window: Vec<&WorkoutDay> = days.iter().filter(|d| d.date >= since).collect();

    let mut steps: Vec<i64> = Vec::new();
    let mut weights: BTreeMap<String, Option<f64>> = tracked
        .iter()
        .map(|lift| (lift.to_lowercase(), None))
        .collect();

    for day in &in_window {
        for block in &day.blocks {
            match block {
                Block::Activity(a) => {
                    let value = if a.steps.is_blank() {
                        Some(0)
                    } else {
                        a.steps.as_i64()
                    };
                    steps.extend(value);
                }
                Block::Strength(s) => {
                    let exercise = s.exercise.to_lowercase();
                    for (lift, last) in weights.iter_mut() {
                        if !exercise.contains(lift.as_str()) {
                            continue;
                        }
                        for set in &s.sets {
                            if let Some(weight) = set.weight.as_f64() {
                                *last = Some(weight);
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }

    let avg_steps = if steps.is_empty() {
        None
    } else {
        Some(steps.iter().sum::<i64>() / steps.len() as i64)
    };

    Analytics {
        days: window,
        training_days: in_window.len() as u32,
        avg_steps,
        last_working_weights: weights,
    }
}
