use crate::domain::vm::api;
use crate::layout::global_context::{AppGlobalContext, NotificationKind};
use crate::shared::api_utils::HttpDocumentService;
use contracts::domain::vm::VirtualMachine;
use contracts::shared::documents::{dismiss_error, error_clearing_document};
use contracts::shared::refresh::{RefreshOutcome, RefreshTracker};
use contracts::shared::selection::RowId;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// State of one VM shown in a details pane.
///
/// Responses that arrive after the pane is gone, or after a newer refresh
/// was started, are dropped.
#[derive(Clone, Copy)]
pub struct VmDetailsViewModel {
    pub id: RowId,
    pub tracker: RwSignal<RefreshTracker<VirtualMachine>>,
    pub dismissing: RwSignal<bool>,
    ctx: AppGlobalContext,
}

impl VmDetailsViewModel {
    pub fn new(ctx: AppGlobalContext, id: RowId, initial: Option<VirtualMachine>) -> Self {
        let tracker = match initial {
            Some(vm) => RefreshTracker::with_data(vm),
            None => RefreshTracker::new(),
        };
        Self {
            id,
            tracker: RwSignal::new(tracker),
            dismissing: RwSignal::new(false),
            ctx,
        }
    }

    pub fn vm(&self) -> Option<VirtualMachine> {
        self.tracker.with(|t| t.data().cloned())
    }

    pub fn is_pending(&self) -> bool {
        self.tracker.with(|t| t.is_pending())
    }

    pub fn load_error(&self) -> Option<String> {
        self.tracker.with(|t| t.last_error().map(|e| e.to_string()))
    }

    /// Re-reads the VM from the API
    pub fn refresh_command(&self) {
        let Some(ticket) = self.tracker.try_update(|t| t.begin()) else {
            return;
        };
        let (ctx, id, tracker) = (self.ctx, self.id, self.tracker);
        log!("🔄 refresh VM #{}", id);

        spawn_local(async move {
            let result = api::fetch_vm(ctx, id).await;
            match tracker.try_update(|t| t.complete(ticket, result)) {
                Some(RefreshOutcome::Failed(e)) => {
                    ctx.notify(NotificationKind::Error, format!("VM #{}: {}", id, e));
                }
                Some(RefreshOutcome::Stale) => log!("⏭️ stale response for VM #{}", id),
                Some(RefreshOutcome::Applied) => {}
                None => log!("💤 VM #{} pane closed before the response", id),
            }
        });
    }

    /// Blanks the error marker of the VM, then refreshes it.
    pub fn dismiss_error_command(&self, on_updated: Option<Callback<RowId>>) {
        let this = *self;
        if this.dismissing.get_untracked() {
            return;
        }
        this.dismissing.set(true);

        spawn_local(async move {
            let service = HttpDocumentService::new(this.ctx, "vm");
            let result = dismiss_error(&service, this.id, &error_clearing_document()).await;
            this.dismissing.try_set(false);
            match result {
                Ok(()) => {
                    this.ctx.notify(
                        NotificationKind::Success,
                        format!("Error of VM #{} dismissed", this.id),
                    );
                    this.refresh_command();
                    if let Some(cb) = on_updated {
                        cb.run(this.id);
                    }
                }
                Err(e) => this.ctx.notify(NotificationKind::Error, e.to_string()),
            }
        });
    }
}
