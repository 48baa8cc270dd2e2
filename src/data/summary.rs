//! Plain data behind the three fixed overview charts.

use super::model::{Pokedex, Stat};
use super::query::primary_types;

/// Bars shown in the totals chart unless configured otherwise.
pub const DEFAULT_TOP: usize = 10;

/// One bar of the totals chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalBar {
    pub index: usize,
    pub name: String,
    pub primary_type: String,
    pub total: f64,
}

/// The first `n` records in table order (not ranked by total).
pub fn top_totals(dex: &Pokedex, n: usize) -> Vec<TotalBar> {
    dex.iter()
        .enumerate()
        .take(n)
        .map(|(index, r)| TotalBar {
            index,
            name: r.name.clone(),
            primary_type: r.primary_type.clone(),
            total: r.total,
        })
        .collect()
}

/// Attack/defense points of one primary type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeScatter {
    pub primary_type: String,
    /// `(attack, defense)` pairs.
    pub points: Vec<[f64; 2]>,
    /// Names, parallel to `points`.
    pub names: Vec<String>,
}

impl TypeScatter {
    /// Names of every record plotted exactly at `(attack, defense)`.
    pub fn names_at(&self, attack: f64, defense: f64) -> Vec<&str> {
        self.points
            .iter()
            .zip(&self.names)
            .filter(|(point, _)| point[0] == attack && point[1] == defense)
            .map(|(_, name)| name.as_str())
            .collect()
    }
}

pub fn attack_defense_by_type(dex: &Pokedex) -> Vec<TypeScatter> {
    primary_types(dex)
        .into_iter()
        .map(|primary_type| {
            let (points, names): (Vec<[f64; 2]>, Vec<String>) = dex
                .iter()
                .filter(|r| r.primary_type == primary_type)
                .map(|r| ([r.stat(Stat::Attack), r.stat(Stat::Defense)], r.name.clone()))
                .unzip();
            TypeScatter {
                primary_type,
                points,
                names,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Box-plot summaries
// ---------------------------------------------------------------------------

/// Tukey box-plot summary of one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct FiveNumberSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    /// Values beyond 1.5 × IQR from the quartiles.
    pub outliers: Vec<f64>,
}

impl FiveNumberSummary {
    /// Summarise `values`. Returns `None` for an empty or NaN-containing sample.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() || values.iter().any(|v| v.is_nan()) {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let mut lower_whisker = f64::INFINITY;
        let mut upper_whisker = f64::NEG_INFINITY;
        let mut outliers = Vec::new();
        for &v in &sorted {
            if (low_fence..=high_fence).contains(&v) {
                lower_whisker = lower_whisker.min(v);
                upper_whisker = upper_whisker.max(v);
            } else {
                outliers.push(v);
            }
        }

        Some(Self {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Speed distribution of one primary type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpread {
    pub primary_type: String,
    pub summary: FiveNumberSummary,
}

pub fn speed_by_type(dex: &Pokedex) -> Vec<TypeSpread> {
    primary_types(dex)
        .into_iter()
        .filter_map(|primary_type| {
            let speeds: Vec<f64> = dex
                .iter()
                .filter(|r| r.primary_type == primary_type)
                .map(|r| r.stat(Stat::Speed))
                .collect();
            let Some(summary) = FiveNumberSummary::from_values(&speeds) else {
                log::warn!(
                    "skipping speed box plot for '{primary_type}': speeds are not all numbers"
                );
                return None;
            };
            Some(TypeSpread {
                primary_type,
                summary,
            })
        })
        .collect()
}
