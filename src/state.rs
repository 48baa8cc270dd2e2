use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::color::TypeColors;
use crate::data::compare::{compare_types, CompareError, TypeComparison};
use crate::data::loader::load_file;
use crate::data::model::Pokedex;
use crate::data::query::{primary_types, search_by_name, secondary_types};
use crate::data::summary::DEFAULT_TOP;

// ---------------------------------------------------------------------------
// Display mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Info,
    Stats,
    Compare,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Info, Mode::Stats, Mode::Compare];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Info => "Pokémon Information",
            Mode::Stats => "Pokémon Stats Visualizations",
            Mode::Compare => "Pokémon Type Comparison",
        }
    }
}

/// What the info view should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTarget {
    /// Show the record at this row.
    Row(usize),
    /// A search is active and matched nothing.
    NotFound,
    /// No table, or an empty one.
    Nothing,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None until a file loads successfully).
    pub dataset: Option<Pokedex>,

    /// Where `dataset` came from.
    pub source: Option<PathBuf>,

    pub mode: Mode,

    /// Name search text as typed; blank means browse by index.
    pub search: String,

    /// Rows matching `search` (cached).
    pub search_hits: Vec<usize>,

    /// Row picked among `search_hits`.
    pub selected_hit: Option<usize>,

    /// Row picked with the index slider.
    pub browse_index: usize,

    /// Compare selectors: first from primary types, second from secondary types.
    pub primary_options: Vec<String>,
    pub secondary_options: Vec<String>,
    pub compare_first: Option<String>,
    pub compare_second: Option<String>,

    /// Result for the current compare pair (cached).
    pub comparison: Option<Result<TypeComparison, CompareError>>,

    pub type_colors: TypeColors,

    /// Bars in the totals chart.
    pub top_n: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source: None,
            mode: Mode::default(),
            search: String::new(),
            search_hits: Vec::new(),
            selected_hit: None,
            browse_index: 0,
            primary_options: Vec::new(),
            secondary_options: Vec::new(),
            compare_first: None,
            compare_second: None,
            comparison: None,
            type_colors: TypeColors::default(),
            top_n: DEFAULT_TOP,
            status_message: None,
        }
    }
}

impl AppState {
    /// Load a table from disk and make it current. On failure the previous
    /// table (if any) stays and the error lands in the status line.
    pub fn load(&mut self, path: &Path) -> anyhow::Result<()> {
        let loaded = load_file(path).with_context(|| format!("loading {}", path.display()));
        match loaded {
            Ok(dataset) => {
                self.set_dataset(dataset, Some(path.to_path_buf()));
                Ok(())
            }
            Err(e) => {
                self.status_message = Some(format!("Error: {e:#}"));
                Err(e)
            }
        }
    }

    /// Ingest a newly loaded table and reset every selection.
    pub fn set_dataset(&mut self, dataset: Pokedex, source: Option<PathBuf>) {
        self.primary_options = primary_types(&dataset);
        self.secondary_options = secondary_types(&dataset);
        self.type_colors = TypeColors::new(&self.primary_options);

        self.compare_first = self.primary_options.first().cloned();
        self.compare_second = self.secondary_options.first().cloned();
        self.browse_index = 0;

        self.dataset = Some(dataset);
        self.source = source;
        self.status_message = None;

        self.research();
        self.recompare();
    }

    /// Update the search text. A changed query reselects the first hit.
    pub fn set_search(&mut self, query: &str) {
        if self.search != query {
            self.search = query.to_string();
            self.research();
        }
    }

    /// A blank or whitespace-only query means browse by index.
    pub fn is_searching(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Pick one row among the current search hits.
    pub fn select_hit(&mut self, row: usize) {
        if self.search_hits.contains(&row) {
            self.selected_hit = Some(row);
        }
    }

    /// Move the index slider, clamped to the table.
    pub fn set_browse_index(&mut self, index: usize) {
        let len = self.dataset.as_ref().map_or(0, Pokedex::len);
        self.browse_index = index.min(len.saturating_sub(1));
    }

    pub fn set_compare_first(&mut self, label: String) {
        self.compare_first = Some(label);
        self.recompare();
    }

    pub fn set_compare_second(&mut self, label: String) {
        self.compare_second = Some(label);
        self.recompare();
    }

    /// Resolve which record the info view shows.
    pub fn info_target(&self) -> InfoTarget {
        let Some(ds) = &self.dataset else {
            return InfoTarget::Nothing;
        };
        if ds.is_empty() {
            return InfoTarget::Nothing;
        }
        if !self.is_searching() {
            return InfoTarget::Row(self.browse_index);
        }
        match self.selected_hit {
            Some(row) => InfoTarget::Row(row),
            None => InfoTarget::NotFound,
        }
    }

    fn research(&mut self) {
        self.search_hits = match &self.dataset {
            Some(ds) if self.is_searching() => search_by_name(ds, &self.search),
            _ => Vec::new(),
        };
        self.selected_hit = self.search_hits.first().copied();
    }

    fn recompare(&mut self) {
        self.comparison = match (&self.dataset, &self.compare_first, &self.compare_second) {
            (Some(ds), Some(a), Some(b)) => Some(compare_types(ds, a, b)),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn loaded() -> AppState {
        let mut charizard = record("Charizard", "Fire", [78.0, 84.0, 78.0, 109.0, 85.0, 100.0]);
        charizard.secondary_type = "Flying".to_string();
        let dex = Pokedex::from_records(vec![
            record("Charmander", "Fire", [39.0, 52.0, 43.0, 60.0, 50.0, 65.0]),
            record("Squirtle", "Water", [44.0, 48.0, 65.0, 50.0, 64.0, 43.0]),
            charizard,
        ]);
        let mut state = AppState::default();
        state.set_dataset(dex, None);
        state
    }

    #[test]
    fn empty_search_browses_by_index() {
        let mut state = loaded();
        state.set_browse_index(1);
        assert_eq!(state.info_target(), InfoTarget::Row(1));
    }

    #[test]
    fn browse_index_is_clamped() {
        let mut state = loaded();
        state.set_browse_index(99);
        assert_eq!(state.browse_index, 2);
    }

    #[test]
    fn search_selects_first_hit_then_allows_choice() {
        let mut state = loaded();
        state.set_search("CHAR");
        assert_eq!(state.search_hits, vec![0, 2]);
        assert_eq!(state.info_target(), InfoTarget::Row(0));

        state.select_hit(2);
        assert_eq!(state.info_target(), InfoTarget::Row(2));

        // Rows outside the hit list are ignored.
        state.select_hit(1);
        assert_eq!(state.info_target(), InfoTarget::Row(2));
    }

    #[test]
    fn changed_search_resets_selected_hit() {
        let mut state = loaded();
        state.set_search("char");
        state.select_hit(2);
        state.set_search("chari");
        assert_eq!(state.info_target(), InfoTarget::Row(2));
        state.set_search("charm");
        assert_eq!(state.info_target(), InfoTarget::Row(0));
    }

    #[test]
    fn search_without_hits_is_not_found() {
        let mut state = loaded();
        state.set_search("mew");
        assert_eq!(state.info_target(), InfoTarget::NotFound);
    }

    #[test]
    fn mode_switch_keeps_selection() {
        let mut state = loaded();
        state.set_browse_index(2);
        state.mode = Mode::Compare;
        state.mode = Mode::Info;
        assert_eq!(state.info_target(), InfoTarget::Row(2));
    }

    #[test]
    fn compare_selectors_follow_type_columns() {
        let mut state = loaded();
        assert_eq!(state.primary_options, ["Fire", "Water"]);
        assert_eq!(state.secondary_options, ["None", "Flying"]);
        assert_eq!(state.compare_first.as_deref(), Some("Fire"));
        assert_eq!(state.compare_second.as_deref(), Some("None"));
        assert_eq!(
            state.comparison,
            Some(Err(CompareError::EmptyGroup("None".to_string())))
        );

        state.set_compare_second("Fire".to_string());
        assert_eq!(state.comparison, Some(Err(CompareError::SameType)));

        state.set_compare_first("Water".to_string());
        let cmp = state.comparison.clone().unwrap().unwrap();
        assert_eq!(cmp.groups[0].primary_type, "Water");
        assert_eq!(cmp.groups[1].members, 2);
    }

    #[test]
    fn failed_load_keeps_previous_table() {
        let mut state = loaded();
        let dir = tempfile::tempdir().unwrap();
        assert!(state.load(&dir.path().join("missing.csv")).is_err());
        assert_eq!(state.dataset.as_ref().map(Pokedex::len), Some(3));
        assert!(state.status_message.is_some());
    }

    #[test]
    fn successful_load_replaces_table() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "Name,Type 1,Type 2,Total,HP,Attack,Defense,SP. Atk.,SP. Def,Speed,Image"
        )
        .unwrap();
        writeln!(file, "Eevee,Normal,,325,55,55,50,45,65,55,e.png").unwrap();

        let mut state = loaded();
        state.set_search("char");
        state.load(file.path()).unwrap();

        assert_eq!(state.dataset.as_ref().map(Pokedex::len), Some(1));
        assert_eq!(state.source.as_deref(), Some(file.path()));
        assert_eq!(state.primary_options, ["Normal"]);
        assert!(state.search_hits.is_empty());
    }

    #[test]
    fn typed_query_keeps_inner_spaces() {
        let mut state = AppState::default();
        state.set_dataset(
            Pokedex::from_records(vec![
                record("Mew", "Psychic", [100.0; 6]),
                record("Mr. Mime", "Psychic", [40.0, 45.0, 65.0, 100.0, 120.0, 90.0]),
            ]),
            None,
        );

        for ch in "mr. mime".chars() {
            let mut query = state.search.clone();
            query.push(ch);
            state.set_search(&query);
        }

        assert_eq!(state.search, "mr. mime");
        assert_eq!(state.search_hits, vec![1]);
        assert_eq!(state.info_target(), InfoTarget::Row(1));
    }

    #[test]
    fn whitespace_query_browses_by_index() {
        let mut state = loaded();
        state.set_browse_index(2);
        state.set_search("  ");
        assert!(!state.is_searching());
        assert!(state.search_hits.is_empty());
        assert_eq!(state.info_target(), InfoTarget::Row(2));
    }

    #[test]
    fn nothing_to_show_without_a_table() {
        assert_eq!(AppState::default().info_target(), InfoTarget::Nothing);
    }
}
