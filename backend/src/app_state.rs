//! # App State Module
//!
//! [`InvoiceManager`] is the single owner of the store and the entry point the
//! presentation layer talks to: queries, mutations, view models, observer
//! registration and the one-time readiness signal.
//!
//! ## Loading
//!
//! The only asynchronous step is the initial load. A complete store is built
//! aside and swapped in, then `Ready` is published on the readiness channel.
//! If the load fails the store stays empty and `Failed` is published instead.
//! Either way the manager never loads again.
//!
//! ## Concurrency
//!
//! Mutations take `&mut self`, so all writes and recomputations are serialized
//! through whoever owns the manager. Nothing here is locked.

use crate::config::AppConfig;
use crate::domain::change_notifier::{ChangeEvent, SubscriptionId};
use crate::domain::commands::{
    AddInvoiceCommand, AddItemCommand, CreateDraftInvoiceCommand, RemoveItemCommand,
    SetInvoiceStatusCommand, SetItemFieldCommand,
};
use crate::domain::models::{Invoice, InvoiceItem, Recipient, Sender};
use crate::domain::InvoiceService;
use crate::error::{InvoiceError, LoadError};
use crate::io::InvoiceViewService;
use crate::storage::{load_store, FilePayloadSource, InvoiceStore, PayloadSource};
use shared::{EntityId, InvoiceDetailResponse, InvoiceListRow, InvoiceStatus, StatusCounts};
use tokio::sync::watch;
use tracing::{error, info};

/// Progress of the one-time initial load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Pending,
    Ready,
    Failed(String),
}

pub struct InvoiceManager {
    config: AppConfig,
    store: InvoiceStore,
    invoice_service: InvoiceService,
    view_service: InvoiceViewService,
    load_state: watch::Sender<LoadState>,
}

impl InvoiceManager {
    pub fn new(config: AppConfig) -> Self {
        let (load_state, _) = watch::channel(LoadState::Pending);
        let view_service = InvoiceViewService::new(config.currency_symbol.clone());
        Self {
            config,
            store: InvoiceStore::new(),
            invoice_service: InvoiceService::new(),
            view_service,
            load_state,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Receiver of the load state. Sees `Ready` or `Failed` exactly once.
    pub fn readiness(&self) -> watch::Receiver<LoadState> {
        self.load_state.subscribe()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        *self.load_state.borrow() == LoadState::Ready
    }

    /// Load the payload from the configured data file
    pub async fn initialize_from_config(&mut self) -> Result<(), LoadError> {
        let source = FilePayloadSource::new(self.config.data_path.clone());
        self.initialize(&source).await
    }

    /// Populate the store from `source`. Only the first call may load.
    pub async fn initialize<S>(&mut self, source: &S) -> Result<(), LoadError>
    where
        S: PayloadSource + ?Sized,
    {
        if *self.load_state.borrow() != LoadState::Pending {
            return Err(LoadError::AlreadyLoaded);
        }

        match load_store(source).await {
            Ok(store) => {
                self.store = store;
                self.load_state.send_replace(LoadState::Ready);
                info!("Invoice data ready");
                Ok(())
            }
            Err(e) => {
                error!("Failed to load invoice data: {}", e);
                self.load_state.send_replace(LoadState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn store(&self) -> &InvoiceStore {
        &self.store
    }

    // Queries

    pub fn find_sender(&self, id: &EntityId) -> Option<&Sender> {
        self.store.find_sender(id)
    }

    pub fn find_recipient(&self, id: &EntityId) -> Option<&Recipient> {
        self.store.find_recipient(id)
    }

    pub fn find_invoice(&self, id: &EntityId) -> Option<&Invoice> {
        self.store.find_invoice(id)
    }

    pub fn sender_name_by_id(&self, id: &EntityId) -> Option<&str> {
        self.store.sender_name_by_id(id)
    }

    pub fn recipient_name_by_id(&self, id: &EntityId) -> Option<&str> {
        self.store.recipient_name_by_id(id)
    }

    pub fn count_by_status(&self, status: &InvoiceStatus) -> usize {
        self.store.count_by_status(status)
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.store.status_counts()
    }

    // Views

    pub fn invoice_list(&self) -> Vec<InvoiceListRow> {
        self.view_service.invoice_list(&self.store)
    }

    pub fn invoice_detail(&self, id: &EntityId) -> Option<InvoiceDetailResponse> {
        self.view_service.invoice_detail(&self.store, id)
    }

    // Mutations

    pub fn add_invoice(&mut self, command: AddInvoiceCommand) -> &Invoice {
        self.invoice_service.add_invoice(&mut self.store, command)
    }

    pub fn create_draft_invoice(&mut self, command: CreateDraftInvoiceCommand) -> &Invoice {
        self.invoice_service.create_draft_invoice(&mut self.store, command)
    }

    pub fn add_item_to_invoice(&mut self, command: AddItemCommand) -> Result<usize, InvoiceError> {
        self.invoice_service.add_item_to_invoice(&mut self.store, command)
    }

    pub fn remove_item_from_invoice(&mut self, command: RemoveItemCommand) -> Result<InvoiceItem, InvoiceError> {
        self.invoice_service.remove_item_from_invoice(&mut self.store, command)
    }

    pub fn set_invoice_status(&mut self, command: SetInvoiceStatusCommand) -> Result<(), InvoiceError> {
        self.invoice_service.set_invoice_status(&mut self.store, command)
    }

    pub fn set_item_field(&mut self, command: SetItemFieldCommand) -> Result<(), InvoiceError> {
        self.invoice_service.set_item_field(&mut self.store, command)
    }

    // Observers

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        self.invoice_service.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.invoice_service.unsubscribe(id)
    }
}
