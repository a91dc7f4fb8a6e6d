//! Sectioned list model.
//!
//! `ListModel<V>` owns an ordered list of [`Section`]s, each an ordered list
//! of [`Row`]s carrying content of type `V`. Mutators validate their indices,
//! change the content, and then emit exactly one [`ListDelta`] so the host
//! view can update the matching rows instead of reloading everything.

use std::sync::Arc;

use lister_core::logging::targets;
use lister_core::{ConnectionId, EdgeInsets, ThreadAffinity};
use parking_lot::{Mutex, RwLock};

use super::cell::CellWrapper;
use super::index::IndexPath;
use super::removal::remove_at_indices;
use super::row::{Row, RowId};
use super::section::{Section, SectionId};
use super::traits::{HostView, ListDataSource, ListDelta, ListSignals, RowAnimation};
use crate::config::ListConfig;
use crate::error::{ListError, ListResult};

/// A list of sections and rows that keeps a host view in sync.
///
/// The model is meant to be driven from the host's UI thread. Content sits
/// behind a lock so the type is `Send + Sync`, and in debug builds mutators
/// assert they run on the owning thread. The owner is the thread that
/// created the model until a host is bound; [`bind_host`](Self::bind_host)
/// moves ownership to the binding thread, so a model may be built on a
/// loader thread and handed to the UI thread.
///
/// Signals are emitted after the content lock is released, so connected
/// slots may query the model.
///
/// # Example
///
/// ```
/// use lister::model::{IndexPath, ListDataSource, ListModel, Row, Section};
///
/// let model = ListModel::new();
/// model.set(vec![
///     Section::new(vec![Row::new("General"), Row::new("Display")]).with_header("Settings"),
/// ]);
///
/// model.append_row(Row::new("Sound").with_height(44.0), 0).unwrap();
/// model.remove_row(IndexPath::new(0, 0)).unwrap();
///
/// assert_eq!(model.section_views_count(0).unwrap(), 2);
/// assert_eq!(model.row_height(IndexPath::new(0, 1)).unwrap(), 44.0);
/// ```
pub struct ListModel<V> {
    content: RwLock<Vec<Section<V>>>,
    config: ListConfig,
    signals: ListSignals,
    affinity: Mutex<ThreadAffinity>,
}

impl<V: Send + Sync + 'static> Default for ListModel<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Send + Sync + 'static> ListModel<V> {
    /// Creates an empty model with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// Creates an empty model with the given configuration.
    pub fn with_config(config: ListConfig) -> Self {
        Self {
            content: RwLock::new(Vec::new()),
            config,
            signals: ListSignals::new(),
            affinity: Mutex::new(ThreadAffinity::current()),
        }
    }

    /// Creates a model with the default configuration that starts out
    /// holding `sections`.
    ///
    /// No delta is emitted; nothing can be connected yet.
    pub fn with_sections(sections: Vec<Section<V>>) -> Self {
        Self::with_config_and_sections(ListConfig::default(), sections)
    }

    /// Creates a model with the given configuration that starts out holding
    /// `sections`.
    pub fn with_config_and_sections(config: ListConfig, sections: Vec<Section<V>>) -> Self {
        let model = Self::with_config(config);
        *model.content.write() = sections;
        model
    }

    /// The model's configuration.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// The model's signals.
    pub fn signals(&self) -> &ListSignals {
        &self.signals
    }

    /// Read access to the sections.
    ///
    /// Holds a read lock until dropped; do not call mutators meanwhile.
    pub fn sections(&self) -> impl std::ops::Deref<Target = Vec<Section<V>>> + '_ {
        self.content.read()
    }

    /// Connects `host` to the delta signal.
    ///
    /// The host first receives a [`ListDelta::FullReload`] so it starts from
    /// the current content, then every later delta. The calling thread
    /// becomes the model's owning thread.
    ///
    /// Returns the connection ID for [`unbind_host`](Self::unbind_host).
    pub fn bind_host<H>(&self, host: Arc<H>) -> ConnectionId
    where
        H: HostView + ?Sized + 'static,
    {
        *self.affinity.lock() = ThreadAffinity::current();
        tracing::debug!(target: targets::MODEL, "host bound");
        host.apply_delta(&ListDelta::FullReload);
        self.signals
            .connect_delta(move |delta| host.apply_delta(delta))
    }

    /// Disconnects a host bound with [`bind_host`](Self::bind_host).
    pub fn unbind_host(&self, id: ConnectionId) -> bool {
        self.signals.disconnect_delta(id)
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Replaces the entire content. Emits [`ListDelta::FullReload`].
    pub fn set(&self, sections: Vec<Section<V>>) {
        self.check_thread();
        let section_count = sections.len();
        *self.content.write() = sections;
        tracing::debug!(target: targets::MODEL, section_count, "content replaced");
        self.emit(ListDelta::FullReload);
    }

    /// Removes all sections. Same as `set(Vec::new())`.
    pub fn clear(&self) {
        self.set(Vec::new());
    }

    /// Inserts `row` before the row currently at `path`, using the
    /// configured animation.
    ///
    /// `path.row()` may equal the section's row count, which appends.
    pub fn insert_row(&self, row: Row<V>, path: IndexPath) -> ListResult<()> {
        self.insert_row_with(row, path, self.config.animation())
    }

    /// Like [`insert_row`](Self::insert_row) with an explicit animation.
    pub fn insert_row_with(
        &self,
        row: Row<V>,
        path: IndexPath,
        animation: RowAnimation,
    ) -> ListResult<()> {
        self.check_thread();
        {
            let mut content = self.content.write();
            let rows = section_at_mut(&mut content, path.section())?.rows_mut();
            if path.row() > rows.len() {
                return Err(ListError::RowOutOfRange {
                    section: path.section(),
                    row: path.row(),
                    count: rows.len(),
                });
            }
            rows.insert(path.row(), row);
        }
        tracing::debug!(target: targets::MODEL, %path, "row inserted");
        self.emit(ListDelta::InsertAt { path, animation });
        Ok(())
    }

    /// Appends `row` to the end of `section`, using the configured animation.
    ///
    /// Returns the path the row now occupies.
    pub fn append_row(&self, row: Row<V>, section: usize) -> ListResult<IndexPath> {
        self.append_row_with(row, section, self.config.animation())
    }

    /// Like [`append_row`](Self::append_row) with an explicit animation.
    pub fn append_row_with(
        &self,
        row: Row<V>,
        section: usize,
        animation: RowAnimation,
    ) -> ListResult<IndexPath> {
        self.check_thread();
        let path = {
            let mut content = self.content.write();
            let rows = section_at_mut(&mut content, section)?.rows_mut();
            rows.push(row);
            IndexPath::new(section, rows.len() - 1)
        };
        tracing::debug!(target: targets::MODEL, %path, "row appended");
        self.emit(ListDelta::InsertAt { path, animation });
        Ok(path)
    }

    /// Removes and returns the row at `path`, using the configured animation.
    pub fn remove_row(&self, path: IndexPath) -> ListResult<Row<V>> {
        self.remove_row_with(path, self.config.animation())
    }

    /// Like [`remove_row`](Self::remove_row) with an explicit animation.
    pub fn remove_row_with(&self, path: IndexPath, animation: RowAnimation) -> ListResult<Row<V>> {
        self.check_thread();
        let removed = {
            let mut content = self.content.write();
            let rows = section_at_mut(&mut content, path.section())?.rows_mut();
            if path.row() >= rows.len() {
                return Err(ListError::RowOutOfRange {
                    section: path.section(),
                    row: path.row(),
                    count: rows.len(),
                });
            }
            rows.remove(path.row())
        };
        tracing::debug!(target: targets::MODEL, %path, "row removed");
        self.emit(ListDelta::DeleteAt { path, animation });
        Ok(removed)
    }

    /// Removes the rows at `rows` within `section`, using the configured
    /// animation.
    ///
    /// `rows` may be unsorted and non-contiguous. Surviving rows keep their
    /// order. The removed rows are returned in the order `rows` lists them,
    /// and the single [`ListDelta::DeleteAtMany`] lists paths in that order
    /// too. An empty `rows` changes nothing and emits nothing.
    pub fn remove_rows(&self, section: usize, rows: &[usize]) -> ListResult<Vec<Row<V>>> {
        self.remove_rows_with(section, rows, self.config.animation())
    }

    /// Like [`remove_rows`](Self::remove_rows) with an explicit animation.
    pub fn remove_rows_with(
        &self,
        section: usize,
        rows: &[usize],
        animation: RowAnimation,
    ) -> ListResult<Vec<Row<V>>> {
        self.check_thread();
        let removed = {
            let mut content = self.content.write();
            let section_rows = section_at_mut(&mut content, section)?.rows_mut();
            if rows.is_empty() {
                return Ok(Vec::new());
            }
            remove_at_indices(section_rows, rows)
                .map_err(|err| ListError::from_removal(section, err))?
        };
        tracing::debug!(target: targets::MODEL, section, count = removed.len(), "rows removed");
        self.emit(ListDelta::DeleteAtMany {
            paths: IndexPath::many(section, rows),
            animation,
        });
        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Current number of rows in `section`.
    pub fn section_views_count(&self, section: usize) -> ListResult<usize> {
        self.row_count(section)
    }

    /// Runs `f` on the row at `path` under the read lock.
    pub fn with_row<R>(&self, path: IndexPath, f: impl FnOnce(&Row<V>) -> R) -> ListResult<R> {
        let content = self.content.read();
        Ok(f(row_at(&content, path)?))
    }

    /// Identity of the row at `path`.
    pub fn row_id(&self, path: IndexPath) -> ListResult<RowId> {
        self.with_row(path, Row::id)
    }

    /// Identity of the section at `section`.
    pub fn section_id(&self, section: usize) -> ListResult<SectionId> {
        let content = self.content.read();
        Ok(section_at(&content, section)?.id())
    }

    /// Current position of the row with identity `id`, if it is in the model.
    pub fn position_of(&self, id: RowId) -> Option<IndexPath> {
        let content = self.content.read();
        content.iter().enumerate().find_map(|(section, s)| {
            s.rows()
                .iter()
                .position(|row| row.id() == id)
                .map(|row| IndexPath::new(section, row))
        })
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Handles a selection of the row at `path` by the host view.
    ///
    /// Invokes the row's action, if any, synchronously and exactly once,
    /// then emits the selection signal
    /// ([`ListSignals::connect_selected`]). Returns whether an action ran.
    /// The content lock is not held while the action runs, so the action may
    /// mutate the model.
    pub fn select(&self, path: IndexPath) -> ListResult<bool> {
        self.check_thread();
        let action = {
            let content = self.content.read();
            row_at(&content, path)?.action().cloned()
        };

        let ran = match action {
            Some(action) => {
                action();
                true
            }
            None => false,
        };
        tracing::debug!(target: targets::MODEL, %path, ran, "row selected");
        self.signals.emit_selected(path);
        Ok(ran)
    }

    fn check_thread(&self) {
        self.affinity.lock().debug_assert_same_thread();
    }

    fn emit(&self, delta: ListDelta) {
        tracing::trace!(target: targets::MODEL, ?delta, "emitting delta");
        self.signals.emit_delta(delta);
    }

    fn title(&self, text: Option<&str>) -> Option<String> {
        match text {
            Some(text) => Some(text.to_owned()),
            None if self.config.empty_titles() => Some(String::new()),
            None => None,
        }
    }
}

impl<V: Clone + Send + Sync + 'static> ListModel<V> {
    /// Builds the cell for the row at `path`: its content wrapped with its
    /// insets (or the configured default insets).
    pub fn cell_for_row(&self, path: IndexPath) -> ListResult<CellWrapper<V>> {
        let content = self.content.read();
        let row = row_at(&content, path)?;
        let edges = row.edges().unwrap_or(self.config.default_edges());
        Ok(CellWrapper::new(row.content().clone(), edges))
    }
}

impl<V: Send + Sync + 'static> ListDataSource for ListModel<V> {
    fn section_count(&self) -> usize {
        self.content.read().len()
    }

    fn row_count(&self, section: usize) -> ListResult<usize> {
        let content = self.content.read();
        Ok(section_at(&content, section)?.len())
    }

    fn row_height(&self, path: IndexPath) -> ListResult<f32> {
        let height = self.with_row(path, Row::height)?;
        Ok(height.unwrap_or(self.config.default_row_height()))
    }

    fn row_edges(&self, path: IndexPath) -> ListResult<EdgeInsets> {
        let edges = self.with_row(path, Row::edges)?;
        Ok(edges.unwrap_or(self.config.default_edges()))
    }

    fn header_title(&self, section: usize) -> ListResult<Option<String>> {
        let content = self.content.read();
        Ok(self.title(section_at(&content, section)?.header()))
    }

    fn footer_title(&self, section: usize) -> ListResult<Option<String>> {
        let content = self.content.read();
        Ok(self.title(section_at(&content, section)?.footer()))
    }
}

fn section_at<V>(content: &[Section<V>], section: usize) -> ListResult<&Section<V>> {
    content.get(section).ok_or(ListError::SectionOutOfRange {
        section,
        count: content.len(),
    })
}

fn section_at_mut<V>(content: &mut [Section<V>], section: usize) -> ListResult<&mut Section<V>> {
    let count = content.len();
    content
        .get_mut(section)
        .ok_or(ListError::SectionOutOfRange { section, count })
}

fn row_at<V>(content: &[Section<V>], path: IndexPath) -> ListResult<&Row<V>> {
    let section = section_at(content, path.section())?;
    section.row(path.row()).ok_or(ListError::RowOutOfRange {
        section: path.section(),
        row: path.row(),
        count: section.len(),
    })
}

static_assertions::assert_impl_all!(ListModel<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn letters(section: &str) -> Section<String> {
        section.chars().map(|c| Row::new(c.to_string())).collect()
    }

    fn contents(model: &ListModel<String>, section: usize) -> Vec<String> {
        model.sections()[section]
            .rows()
            .iter()
            .map(|row| row.content().clone())
            .collect()
    }

    fn record(model: &ListModel<String>) -> Arc<Mutex<Vec<ListDelta>>> {
        let deltas = Arc::new(Mutex::new(Vec::new()));
        let recv = deltas.clone();
        model.signals().connect_delta(move |delta| {
            recv.lock().push(delta.clone());
        });
        deltas
    }

    #[test]
    fn test_set_emits_full_reload() {
        let model = ListModel::new();
        let deltas = record(&model);

        model.set(vec![letters("abc"), letters("de")]);

        assert_eq!(model.section_count(), 2);
        assert_eq!(model.row_count(1).unwrap(), 2);
        assert_eq!(*deltas.lock(), vec![ListDelta::FullReload]);
    }

    #[test]
    fn test_clear() {
        let model = ListModel::with_sections(vec![letters("abc")]);
        let deltas = record(&model);

        model.clear();

        assert!(model.is_empty());
        assert_eq!(*deltas.lock(), vec![ListDelta::FullReload]);
    }

    #[test]
    fn test_insert_row_and_signal() {
        let model = ListModel::with_sections(vec![letters("ac")]);
        let deltas = record(&model);

        model
            .insert_row(Row::new("b".to_string()), IndexPath::new(0, 1))
            .unwrap();

        assert_eq!(contents(&model, 0), vec!["a", "b", "c"]);
        assert_eq!(
            *deltas.lock(),
            vec![ListDelta::InsertAt {
                path: IndexPath::new(0, 1),
                animation: RowAnimation::Fade,
            }]
        );
    }

    #[test]
    fn test_insert_row_out_of_range() {
        let model = ListModel::with_sections(vec![letters("ab")]);
        let deltas = record(&model);

        let err = model
            .insert_row(Row::new("x".to_string()), IndexPath::new(0, 3))
            .unwrap_err();

        assert_eq!(
            err,
            ListError::RowOutOfRange {
                section: 0,
                row: 3,
                count: 2
            }
        );
        assert_eq!(contents(&model, 0), vec!["a", "b"]);
        assert!(deltas.lock().is_empty());
    }

    #[test]
    fn test_append_row_returns_path() {
        let model = ListModel::with_sections(vec![letters("ab"), letters("")]);
        let deltas = record(&model);

        let path = model.append_row(Row::new("z".to_string()), 1).unwrap();

        assert_eq!(path, IndexPath::new(1, 0));
        assert_eq!(
            *deltas.lock(),
            vec![ListDelta::InsertAt {
                path,
                animation: RowAnimation::Fade,
            }]
        );
    }

    #[test]
    fn test_remove_row_returns_row() {
        let model = ListModel::with_sections(vec![letters("abc")]);
        let deltas = record(&model);

        let row = model
            .remove_row_with(IndexPath::new(0, 1), RowAnimation::Left)
            .unwrap();

        assert_eq!(row.content(), "b");
        assert_eq!(contents(&model, 0), vec!["a", "c"]);
        assert_eq!(
            *deltas.lock(),
            vec![ListDelta::DeleteAt {
                path: IndexPath::new(0, 1),
                animation: RowAnimation::Left,
            }]
        );
    }

    #[test]
    fn test_remove_rows_caller_order() {
        let model = ListModel::with_sections(vec![letters("ABCDE")]);
        let deltas = record(&model);

        let removed = model.remove_rows(0, &[3, 0]).unwrap();

        let removed: Vec<String> = removed.into_iter().map(Row::into_content).collect();
        assert_eq!(removed, vec!["D", "A"]);
        assert_eq!(contents(&model, 0), vec!["B", "C", "E"]);
        assert_eq!(
            *deltas.lock(),
            vec![ListDelta::DeleteAtMany {
                paths: vec![IndexPath::new(0, 3), IndexPath::new(0, 0)],
                animation: RowAnimation::Fade,
            }]
        );
    }

    #[test]
    fn test_remove_rows_empty_is_silent() {
        let model = ListModel::with_sections(vec![letters("abc")]);
        let deltas = record(&model);

        let removed = model.remove_rows(0, &[]).unwrap();

        assert!(removed.is_empty());
        assert_eq!(contents(&model, 0), vec!["a", "b", "c"]);
        assert!(deltas.lock().is_empty());
    }

    #[test]
    fn test_remove_rows_rejects_duplicates() {
        let model = ListModel::with_sections(vec![letters("abc")]);
        let deltas = record(&model);

        let err = model.remove_rows(0, &[2, 2]).unwrap_err();

        assert_eq!(err, ListError::DuplicateRow { section: 0, row: 2 });
        assert_eq!(contents(&model, 0), vec!["a", "b", "c"]);
        assert!(deltas.lock().is_empty());
    }

    #[test]
    fn test_invalid_section_everywhere() {
        let model = ListModel::with_sections(vec![letters("ab")]);
        let deltas = record(&model);
        let expected = ListError::SectionOutOfRange {
            section: 5,
            count: 1,
        };

        assert_eq!(
            model.insert_row(Row::new("x".into()), IndexPath::new(5, 0)),
            Err(expected.clone())
        );
        assert_eq!(
            model.append_row(Row::new("x".into()), 5),
            Err(expected.clone())
        );
        assert_eq!(
            model.remove_row(IndexPath::new(5, 0)).map(|_| ()),
            Err(expected.clone())
        );
        assert_eq!(
            model.remove_rows(5, &[0]).map(|_| ()),
            Err(expected.clone())
        );
        assert_eq!(model.remove_rows(5, &[]).map(|_| ()), Err(expected.clone()));
        assert_eq!(model.section_views_count(5), Err(expected.clone()));
        assert_eq!(model.select(IndexPath::new(5, 0)), Err(expected));

        assert_eq!(contents(&model, 0), vec!["a", "b"]);
        assert!(deltas.lock().is_empty());
    }

    #[test]
    fn test_select_runs_only_that_action() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let f = first.clone();
        let s = second.clone();

        let model = ListModel::with_sections(vec![Section::new(vec![
            Row::new("one".to_string()).with_action(move || {
                f.fetch_add(1, Ordering::SeqCst);
            }),
            Row::new("two".to_string()).with_action(move || {
                s.fetch_add(1, Ordering::SeqCst);
            }),
            Row::new("three".to_string()),
        ])]);

        assert!(model.select(IndexPath::new(0, 1)).unwrap());
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);

        assert!(!model.select(IndexPath::new(0, 2)).unwrap());
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_action_may_mutate_model() {
        let model = Arc::new(ListModel::<String>::new());
        let weak = Arc::downgrade(&model);
        model.set(vec![Section::new(vec![Row::new("delete me".to_string())
            .with_action(move || {
                if let Some(model) = weak.upgrade() {
                    model.remove_row(IndexPath::new(0, 0)).unwrap();
                }
            })])]);

        assert!(model.select(IndexPath::new(0, 0)).unwrap());
        assert_eq!(model.section_views_count(0).unwrap(), 0);
    }

    #[test]
    fn test_slot_may_query_model() {
        let model = Arc::new(ListModel::with_sections(vec![letters("ab")]));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&model);
        let recv = seen.clone();
        model.signals().connect_delta(move |_| {
            if let Some(model) = weak.upgrade() {
                recv.lock().push(model.row_count(0).unwrap());
            }
        });

        model.append_row(Row::new("c".to_string()), 0).unwrap();
        model.remove_rows(0, &[0, 1]).unwrap();

        assert_eq!(*seen.lock(), vec![3, 1]);
    }

    #[test]
    fn test_titles_and_fallback() {
        let sections = || {
            vec![
                letters("a").with_header("Header"),
                letters("b").with_footer("Footer"),
            ]
        };

        let model = ListModel::with_sections(sections());
        assert_eq!(model.header_title(0).unwrap().as_deref(), Some("Header"));
        assert_eq!(model.footer_title(0).unwrap(), None);
        assert_eq!(model.footer_title(1).unwrap().as_deref(), Some("Footer"));

        let model = ListModel::with_config(ListConfig::new().with_empty_titles(true));
        model.set(sections());
        assert_eq!(model.footer_title(0).unwrap().as_deref(), Some(""));
        assert_eq!(model.header_title(1).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_heights_and_edges_fall_back_to_config() {
        let config = ListConfig::new()
            .with_default_row_height(48.0)
            .with_default_edges(EdgeInsets::uniform(2.0));
        let model = ListModel::with_config(config);
        model.set(vec![Section::new(vec![
            Row::new("plain".to_string()),
            Row::new("custom".to_string())
                .with_height(90.0)
                .with_edges(EdgeInsets::symmetric(16.0, 8.0)),
        ])]);

        assert_eq!(model.row_height(IndexPath::new(0, 0)).unwrap(), 48.0);
        assert_eq!(model.row_height(IndexPath::new(0, 1)).unwrap(), 90.0);
        assert_eq!(
            model.row_edges(IndexPath::new(0, 0)).unwrap(),
            EdgeInsets::uniform(2.0)
        );
        assert_eq!(model.section_height(0).unwrap(), 138.0);

        let cell = model.cell_for_row(IndexPath::new(0, 1)).unwrap();
        assert_eq!(cell.content(), "custom");
        assert_eq!(cell.edges(), EdgeInsets::symmetric(16.0, 8.0));
    }

    #[test]
    fn test_position_of_follows_row() {
        let model = ListModel::with_sections(vec![letters("abc"), letters("d")]);
        let id = model.row_id(IndexPath::new(0, 2)).unwrap();

        model.remove_row(IndexPath::new(0, 0)).unwrap();
        assert_eq!(model.position_of(id), Some(IndexPath::new(0, 1)));

        let row = model.remove_row(IndexPath::new(0, 1)).unwrap();
        assert_eq!(row.id(), id);
        assert_eq!(model.position_of(id), None);
    }

    #[test]
    fn test_configured_animation_used() {
        let model =
            ListModel::with_config(ListConfig::new().with_animation(RowAnimation::Bottom));
        model.set(vec![letters("a")]);
        let deltas = record(&model);

        model.remove_row(IndexPath::new(0, 0)).unwrap();

        assert_eq!(deltas.lock()[0].animation(), Some(RowAnimation::Bottom));
    }

    struct CountingHost {
        deltas: Mutex<Vec<ListDelta>>,
    }

    impl HostView for CountingHost {
        fn apply_delta(&self, delta: &ListDelta) {
            self.deltas.lock().push(delta.clone());
        }
    }

    #[test]
    fn test_bind_host_starts_with_full_reload() {
        let model = ListModel::with_sections(vec![letters("ab")]);
        let host = Arc::new(CountingHost {
            deltas: Mutex::new(Vec::new()),
        });

        model.bind_host(host.clone());
        model.append_row(Row::new("c".to_string()), 0).unwrap();

        let deltas = host.deltas.lock();
        assert_eq!(deltas.len(), 2);
        assert!(deltas[0].is_full_reload());
        assert_eq!(deltas[1].paths(), &[IndexPath::new(0, 2)]);
    }

    #[test]
    fn test_model_built_on_loader_thread() {
        let model = std::thread::spawn(|| ListModel::with_sections(vec![letters("abc")]))
            .join()
            .unwrap();
        let host = Arc::new(CountingHost {
            deltas: Mutex::new(Vec::new()),
        });

        model.bind_host(host.clone());
        model.remove_rows(0, &[0, 2]).unwrap();
        assert!(model.select(IndexPath::new(0, 0)).is_ok());

        assert_eq!(contents(&model, 0), vec!["b"]);
        assert_eq!(host.deltas.lock().len(), 2);
    }

    #[test]
    fn test_config_and_sections_together() {
        let config = ListConfig::new()
            .with_default_row_height(32.0)
            .with_animation(RowAnimation::Middle);
        let model = ListModel::with_config_and_sections(config, vec![letters("ab")]);
        let deltas = record(&model);

        assert_eq!(model.row_height(IndexPath::new(0, 1)).unwrap(), 32.0);
        model.remove_row(IndexPath::new(0, 0)).unwrap();

        assert_eq!(deltas.lock()[0].animation(), Some(RowAnimation::Middle));
        assert_eq!(contents(&model, 0), vec!["b"]);
    }
}
