//! Synthetic option sets for exercising the menus.

use rand::Rng;
use rselect::{SelectOption, SelectableValue};

const WORDS: &[&str] = &[
    "cpu", "memory", "latency", "requests", "errors", "disk", "network", "queue", "cache", "gc",
    "threads", "uptime", "saturation", "throughput", "p99", "heap",
];

const ICONS: &[&str] = &["◆", "●", "▲", "■"];

/// Shape of a generated option set.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorSpec {
    pub groups: usize,
    pub max_children: usize,
    pub leaves: usize,
    /// Probability that a generated option is disabled
    pub disabled_ratio: f64,
}

impl Default for GeneratorSpec {
    fn default() -> Self {
        Self {
            groups: 40,
            max_children: 60,
            leaves: 25,
            disabled_ratio: 0.05,
        }
    }
}

/// Generates leaves followed by groups with sequential values.
pub fn generate_options<R: Rng>(rng: &mut R, spec: &GeneratorSpec) -> Vec<SelectOption<u64>> {
    let mut next_value = 0u64;
    let mut value = || {
        next_value += 1;
        next_value
    };

    let mut options = Vec::with_capacity(spec.leaves + spec.groups);

    for _ in 0..spec.leaves {
        options.push(SelectOption::Leaf(random_value(rng, value(), spec)));
    }

    for group in 0..spec.groups {
        let header = SelectableValue::new(value(), format!("Dashboard folder {}", group + 1));
        let count = rng.gen_range(0..=spec.max_children);
        let children = (0..count).map(|_| random_value(rng, value(), spec)).collect();
        options.push(SelectOption::Group { header, children });
    }

    options
}

fn random_value<R: Rng>(rng: &mut R, value: u64, spec: &GeneratorSpec) -> SelectableValue<u64> {
    let words = rng.gen_range(1..=4);
    let label = (0..words)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join("_");

    let mut data = SelectableValue::new(value, format!("{label}_{value}"))
        .with_description(format!("Metric series #{value}"))
        .disabled(rng.gen_bool(spec.disabled_ratio));
    if rng.gen_bool(0.2) {
        data = data.with_icon(ICONS[rng.gen_range(0..ICONS.len())]);
    }
    if rng.gen_bool(0.1) {
        data = data.with_title(format!("Series {value} (sampled)"));
    }
    data
}
