use anyhow::{anyhow, Result};
use async_trait::async_trait;
use dashprune::deletion::{ActionDispatch, ConfirmDeleteModal, DeletionService, Navigator};
use dashprune::search::{DeletionRequest, SearchAction};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

type Log = Arc<Mutex<Vec<String>>>;

struct FakeService {
    log: Log,
    calls: Mutex<Vec<(Vec<String>, Vec<String>)>>,
    fail: bool,
    gate: Option<Arc<Notify>>,
}

impl FakeService {
    fn new(log: Log) -> Self {
        Self { log, calls: Mutex::new(Vec::new()), fail: false, gate: None }
    }
}

#[async_trait]
impl DeletionService for FakeService {
    async fn delete_folders_and_dashboards(
        &self,
        folders: &[String],
        dashboards: &[String],
    ) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((folders.to_vec(), dashboards.to_vec()));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.log.lock().unwrap().push("delete".into());
        if self.fail {
            return Err(anyhow!("backend said no"));
        }
        Ok(())
    }
}

struct FakeNavigator(Log);

impl Navigator for FakeNavigator {
    fn update(&self, path: &str) {
        self.0.lock().unwrap().push(format!("navigate {path}"));
    }
}

struct FakeDispatch(Log, Mutex<Vec<SearchAction>>);

impl ActionDispatch for FakeDispatch {
    fn dispatch(&self, action: SearchAction) {
        self.0.lock().unwrap().push("dispatch".into());
        self.1.lock().unwrap().push(action);
    }
}

fn request() -> DeletionRequest {
    DeletionRequest::new(vec!["A".into()], vec!["B".into(), "C".into()])
}

#[tokio::test]
async fn confirm_deletes_then_navigates_then_dispatches() {
    let log: Log = Arc::default();
    let service = Arc::new(FakeService::new(log.clone()));
    let dispatch = Arc::new(FakeDispatch(log.clone(), Mutex::new(Vec::new())));
    let mut modal = ConfirmDeleteModal::new(
        service.clone(),
        Arc::new(FakeNavigator(log.clone())),
        dispatch.clone(),
    );
    modal.open();

    modal.confirm(&request()).await.expect("confirm ok");

    assert!(!modal.is_open());
    let calls = service.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], (vec!["A".to_string()], vec!["B".to_string(), "C".to_string()]));
    assert_eq!(
        *log.lock().unwrap(),
        vec!["delete", "navigate /dashboards", "dispatch"]
    );
    assert_eq!(
        *dispatch.1.lock().unwrap(),
        vec![SearchAction::DeleteItems {
            folders: vec!["A".into()],
            dashboards: vec!["B".into(), "C".into()],
        }]
    );
}

#[tokio::test]
async fn failure_propagates_and_skips_follow_ups() {
    let log: Log = Arc::default();
    let mut service = FakeService::new(log.clone());
    service.fail = true;
    let dispatch = Arc::new(FakeDispatch(log.clone(), Mutex::new(Vec::new())));
    let mut modal = ConfirmDeleteModal::new(
        Arc::new(service),
        Arc::new(FakeNavigator(log.clone())),
        dispatch.clone(),
    );
    modal.open();

    let err = modal.confirm(&request()).await.unwrap_err();
    assert_eq!(err.to_string(), "backend said no");
    assert!(modal.is_open());
    assert_eq!(*log.lock().unwrap(), vec!["delete"]);
    assert!(dispatch.1.lock().unwrap().is_empty());
}

#[tokio::test]
async fn follow_ups_wait_for_the_deletion_to_finish() {
    let log: Log = Arc::default();
    let gate = Arc::new(Notify::new());
    let mut service = FakeService::new(log.clone());
    service.gate = Some(gate.clone());
    let service = Arc::new(service);
    let mut modal = ConfirmDeleteModal::new(
        service.clone(),
        Arc::new(FakeNavigator(log.clone())),
        Arc::new(FakeDispatch(log.clone(), Mutex::new(Vec::new()))),
    );
    modal.open();

    let task = tokio::spawn(async move {
        modal.confirm(&request()).await.map(|_| modal.is_open())
    });

    // Wait until the request is in flight
    while service.calls.lock().unwrap().is_empty() {
        tokio::task::yield_now().await;
    }
    assert!(log.lock().unwrap().is_empty());

    gate.notify_one();
    let still_open = task.await.unwrap().unwrap();
    assert!(!still_open);
    assert_eq!(log.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn dismiss_sends_nothing() {
    let log: Log = Arc::default();
    let service = Arc::new(FakeService::new(log.clone()));
    let mut modal = ConfirmDeleteModal::new(
        service.clone(),
        Arc::new(FakeNavigator(log.clone())),
        Arc::new(FakeDispatch(log.clone(), Mutex::new(Vec::new()))),
    );
    modal.open();
    assert!(modal.is_open());

    modal.dismiss();

    assert!(!modal.is_open());
    assert!(service.calls.lock().unwrap().is_empty());
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn custom_listing_path_is_used() {
    let log: Log = Arc::default();
    let mut modal = ConfirmDeleteModal::new(
        Arc::new(FakeService::new(log.clone())),
        Arc::new(FakeNavigator(log.clone())),
        Arc::new(FakeDispatch(log.clone(), Mutex::new(Vec::new()))),
    )
    .with_listing_path("/dashboards/browse");

    modal.confirm(&request()).await.unwrap();
    assert_eq!(log.lock().unwrap()[1], "navigate /dashboards/browse");
}

#[test]
fn prompt_reflects_request_counts() {
    let log: Log = Arc::default();
    let modal = ConfirmDeleteModal::new(
        Arc::new(FakeService::new(log.clone())),
        Arc::new(FakeNavigator(log.clone())),
        Arc::new(FakeDispatch(log, Mutex::new(Vec::new()))),
    );
    let p = modal.prompt(&request());
    assert_eq!(p.text, "Do you want to delete the selected folder and dashboards?");
    assert!(p.subtitle.is_some());
}
