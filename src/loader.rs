//! Lookup orchestration: validate, fetch, normalize, fill

use crate::error::{LookupError, LookupResult};
use crate::form::{FieldTargets, FormFiller, FormTarget};
use crate::mapping::FieldMapper;
use crate::record::Record;
use crate::store::RecordStore;
use crate::store::constants::DEFAULT_TIMEOUT;
use log::{error, info, warn};
use std::time::Duration;

/// Presentation hooks around a lookup (spinners, toasts, ...)
pub trait LookupObserver {
    fn loading(&mut self, active: bool);
    fn success(&mut self, filled: usize);
    fn error(&mut self, err: &LookupError);
}

/// Observer that ignores every notification
#[derive(Debug, Default)]
pub struct NoopObserver;

impl LookupObserver for NoopObserver {
    fn loading(&mut self, _active: bool) {}
    fn success(&mut self, _filled: usize) {}
    fn error(&mut self, _err: &LookupError) {}
}

/// Result of a successful load-and-fill
#[derive(Debug, Clone)]
pub struct FillOutcome {
    pub record: Record,
    pub filled: usize,
}

pub struct RecordLoader {
    store: Box<dyn RecordStore>,
    mapper: FieldMapper,
    timeout: Duration,
}

impl RecordLoader {
    pub fn new(store: Box<dyn RecordStore>, mapper: FieldMapper) -> Self {
        Self {
            store,
            mapper,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    pub fn mapper(&self) -> &FieldMapper {
        &self.mapper
    }

    /// Fetch the raw row for `id`, keyed by the sheet's own headers
    pub async fn load_raw(&self, id: &str) -> LookupResult<Record> {
        let id = id.trim();
        if id.is_empty() {
            return Err(LookupError::MissingInput);
        }

        info!("Looking up '{}' via {} store", id, self.store.name());
        match tokio::time::timeout(self.timeout, self.store.fetch(id)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout(self.timeout)),
        }
    }

    /// Fetch the row for `id` and normalize it into a canonical record
    pub async fn load(&self, id: &str) -> LookupResult<Record> {
        let raw = self.load_raw(id).await?;
        Ok(self.mapper.normalize(&raw))
    }

    /// Load `id` and write it into `form`.
    ///
    /// The form is only touched after the record is loaded.
    pub async fn load_and_fill(
        &self,
        id: &str,
        filler: &FormFiller,
        overrides: &FieldTargets,
        form: &mut dyn FormTarget,
        observer: &mut dyn LookupObserver,
    ) -> LookupResult<FillOutcome> {
        observer.loading(true);
        let loaded = self.load(id).await;
        observer.loading(false);

        let record = match loaded {
            Ok(record) => record,
            Err(err) => {
                error!("Lookup failed: {}", err);
                observer.error(&err);
                return Err(err);
            }
        };

        let filled = filler.fill(&record, overrides, form);
        if filled == 0 {
            warn!("Record for '{}' filled no fields", id.trim());
        }
        observer.success(filled);

        Ok(FillOutcome { record, filled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::form::MemoryForm;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedStore {
        rows: Vec<Record>,
        calls: Arc<AtomicUsize>,
        delay: Option<Duration>,
    }

    impl FixedStore {
        fn new(rows: Vec<Record>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    rows,
                    calls: calls.clone(),
                    delay: None,
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl RecordStore for FixedStore {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch(&self, id: &str) -> LookupResult<Record> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.rows
                .iter()
                .find(|r| r.get("ת.ז.") == Some(id))
                .cloned()
                .ok_or_else(|| LookupError::not_found(id))
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Vec<String>,
    }

    impl LookupObserver for RecordingObserver {
        fn loading(&mut self, active: bool) {
            self.events.push(format!("loading:{}", active));
        }
        fn success(&mut self, filled: usize) {
            self.events.push(format!("success:{}", filled));
        }
        fn error(&mut self, err: &LookupError) {
            self.events.push(format!("error:{:?}", err.kind()));
        }
    }

    fn row() -> Record {
        [("ת.ז.", "123"), ("שם משפחה", "כהן")].into_iter().collect()
    }

    #[tokio::test]
    async fn test_load_normalizes() {
        let (store, _) = FixedStore::new(vec![row()]);
        let loader = RecordLoader::new(Box::new(store), FieldMapper::default());

        let record = loader.load(" 123 ").await.unwrap();
        let expected: Record = [("id", "123"), ("lastName", "כהן")].into_iter().collect();
        assert_eq!(record, expected);
    }

    #[tokio::test]
    async fn test_blank_id_never_fetches() {
        let (store, calls) = FixedStore::new(vec![row()]);
        let loader = RecordLoader::new(Box::new(store), FieldMapper::default());

        let err = loader.load("   ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingInput);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_load_and_fill_end_to_end() {
        let (store, _) = FixedStore::new(vec![row()]);
        let loader = RecordLoader::new(Box::new(store), FieldMapper::default());
        let filler = FormFiller::new(FieldTargets::new());
        let overrides: FieldTargets = [("id", "f1"), ("lastName", "f2")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut form = MemoryForm::new();
        let mut observer = RecordingObserver::default();

        let outcome = loader
            .load_and_fill("123", &filler, &overrides, &mut form, &mut observer)
            .await
            .unwrap();

        assert_eq!(outcome.filled, 2);
        assert_eq!(form.value("f1"), Some("123"));
        assert_eq!(form.value("f2"), Some("כהן"));
        assert_eq!(observer.events, vec!["loading:true", "loading:false", "success:2"]);
    }

    #[tokio::test]
    async fn test_failed_lookup_fills_nothing() {
        let (store, _) = FixedStore::new(vec![row()]);
        let loader = RecordLoader::new(Box::new(store), FieldMapper::default());
        let mut form = MemoryForm::new();
        let mut observer = RecordingObserver::default();

        let err = loader
            .load_and_fill(
                "999",
                &FormFiller::default(),
                &FieldTargets::new(),
                &mut form,
                &mut observer,
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(form.values().is_empty());
        assert!(form.events().is_empty());
        assert_eq!(
            observer.events,
            vec!["loading:true", "loading:false", "error:NotFound"]
        );
    }

    #[tokio::test]
    async fn test_slow_store_times_out() {
        let (mut store, _) = FixedStore::new(vec![row()]);
        store.delay = Some(Duration::from_secs(10));
        let loader = RecordLoader::new(Box::new(store), FieldMapper::default())
            .with_timeout(Duration::from_millis(50));

        let err = loader.load("123").await.unwrap_err();
        assert!(matches!(err, LookupError::Timeout(d) if d == Duration::from_millis(50)));
    }
}
