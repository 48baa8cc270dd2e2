use thiserror::Error;

use super::model::{Pokedex, Stat};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("pick two different types to compare")]
    SameType,
    #[error("no records have primary type '{0}'")]
    EmptyGroup(String),
}

/// Mean of each stat over the records of one primary type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAverages {
    pub primary_type: String,
    /// Number of records averaged.
    pub members: usize,
    /// Indexed by [`Stat::index`].
    pub means: [f64; 6],
}

impl TypeAverages {
    pub fn mean(&self, stat: Stat) -> f64 {
        self.means[stat.index()]
    }

    /// `(stat, mean)` pairs in [`Stat::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        Stat::ALL.iter().map(move |&s| (s, self.mean(s)))
    }
}

/// Side-by-side averages for two types, in the order they were requested.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeComparison {
    pub groups: [TypeAverages; 2],
}

/// Average the six stats of every record whose *primary* type is `first`,
/// and likewise for `second`.
///
/// Membership is always decided by primary type, even when a label was
/// picked from the list of secondary types. A label with no primary-type
/// members is an error rather than a NaN or zero mean.
pub fn compare_types(
    dex: &Pokedex,
    first: &str,
    second: &str,
) -> Result<TypeComparison, CompareError> {
    if first == second {
        return Err(CompareError::SameType);
    }
    Ok(TypeComparison {
        groups: [averages(dex, first)?, averages(dex, second)?],
    })
}

fn averages(dex: &Pokedex, primary_type: &str) -> Result<TypeAverages, CompareError> {
    let mut sums = [0.0f64; 6];
    let mut members = 0usize;

    for record in dex.iter().filter(|r| r.primary_type == primary_type) {
        for (sum, value) in sums.iter_mut().zip(record.stats.iter()) {
            *sum += value;
        }
        members += 1;
    }

    if members == 0 {
        log::warn!("cannot average stats for '{primary_type}': no members");
        return Err(CompareError::EmptyGroup(primary_type.to_string()));
    }

    Ok(TypeAverages {
        primary_type: primary_type.to_string(),
        members,
        means: sums.map(|s| s / members as f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn dex() -> Pokedex {
        let mut gyarados = record("Gyarados", "Water", [95.0, 125.0, 79.0, 60.0, 100.0, 81.0]);
        gyarados.secondary_type = "Flying".to_string();
        Pokedex::from_records(vec![
            record("Ember", "Fire", [10.0, 20.0, 30.0, 40.0, 50.0, 60.0]),
            record("Blaze", "Fire", [20.0, 40.0, 50.0, 60.0, 70.0, 80.0]),
            record("Drip", "Water", [5.0, 5.0, 5.0, 5.0, 5.0, 5.0]),
            gyarados,
        ])
    }

    #[test]
    fn means_are_per_primary_type() {
        let dex = Pokedex::from_records(vec![
            record("A", "Fire", [10.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            record("B", "Fire", [20.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            record("C", "Water", [5.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ]);
        let cmp = compare_types(&dex, "Fire", "Water").unwrap();

        assert_eq!(cmp.groups[0].primary_type, "Fire");
        assert_eq!(cmp.groups[0].mean(Stat::Hp), 15.0);
        assert_eq!(cmp.groups[1].primary_type, "Water");
        assert_eq!(cmp.groups[1].mean(Stat::Hp), 5.0);
    }

    #[test]
    fn every_group_has_six_ordered_means() {
        let cmp = compare_types(&dex(), "Fire", "Water").unwrap();
        let fire: Vec<(Stat, f64)> = cmp.groups[0].iter().collect();

        assert_eq!(fire.len(), 6);
        assert_eq!(
            fire,
            vec![
                (Stat::Hp, 15.0),
                (Stat::Attack, 30.0),
                (Stat::Defense, 40.0),
                (Stat::SpecialAttack, 50.0),
                (Stat::SpecialDefense, 60.0),
                (Stat::Speed, 70.0),
            ]
        );
        assert_eq!(cmp.groups[0].members, 2);
        assert_eq!(cmp.groups[1].members, 2);
        assert_eq!(cmp.groups[1].mean(Stat::Attack), 65.0);
    }

    #[test]
    fn secondary_type_never_contributes() {
        // Gyarados is Water/Flying; "Flying" has no primary-type members.
        let err = compare_types(&dex(), "Fire", "Flying").unwrap_err();
        assert_eq!(err, CompareError::EmptyGroup("Flying".to_string()));
    }

    #[test]
    fn sentinel_label_is_an_empty_group() {
        let err = compare_types(&dex(), "None", "Water").unwrap_err();
        assert_eq!(err, CompareError::EmptyGroup("None".to_string()));
    }

    #[test]
    fn identical_labels_are_rejected() {
        assert_eq!(
            compare_types(&dex(), "Fire", "Fire"),
            Err(CompareError::SameType)
        );
    }

    #[test]
    fn repeated_comparisons_are_identical() {
        let dex = dex();
        assert_eq!(
            compare_types(&dex, "Water", "Fire"),
            compare_types(&dex, "Water", "Fire")
        );
    }
}
