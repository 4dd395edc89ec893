use super::view_model::VmDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::submit_button::SubmitButton;
use crate::shared::icons::icon;
use contracts::domain::vm::VirtualMachine;
use contracts::shared::selection::RowId;
use leptos::prelude::*;
use thaw::*;

#[component]
fn InfoRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="details-row">
            <span class="details-row__label">{label}</span>
            <span class="details-row__value">{value}</span>
        </div>
    }
}

/// Details of one VM.
///
/// Without `initial` the VM is loaded on mount. The locate and close
/// buttons are shown only when their callbacks are set.
#[component]
pub fn VmDetails(
    id: RowId,
    initial: Option<VirtualMachine>,
    /// Scroll the list to this VM
    #[prop(optional)]
    on_locate: Option<Callback<()>>,
    /// Remove this VM from the selection
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    /// The VM template was changed
    #[prop(optional)]
    on_updated: Option<Callback<RowId>>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let needs_load = initial.is_none();
    let vm = VmDetailsViewModel::new(ctx, id, initial);
    if needs_load {
        vm.refresh_command();
    }

    let heading = move || {
        vm.vm()
            .map(|v| v.heading())
            .unwrap_or_else(|| format!("#{}", id))
    };

    view! {
        <div class="details-container vm-details" data-cy=format!("vm-details-{}", id)>
            <div class="details-header">
                <h3 class="details-header__title">{heading}</h3>
                <div class="details-header__actions">
                    <SubmitButton
                        tooltip="Refresh"
                        icon=icon("refresh")
                        pending=Signal::derive(move || vm.is_pending())
                        test_id="detail-refresh"
                        on_click=Callback::new(move |_| vm.refresh_command())
                    />
                    {on_locate.map(|cb| view! {
                        <SubmitButton
                            tooltip="Locate on table"
                            icon=icon("locate")
                            test_id="locate-on-table"
                            on_click=cb
                        />
                    })}
                    {on_close.map(|cb| view! {
                        <SubmitButton
                            tooltip="Close"
                            icon=icon("x")
                            test_id="unselect"
                            on_click=cb
                        />
                    })}
                </div>
            </div>

            {move || vm.load_error().filter(|_| vm.vm().is_none()).map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            {move || vm.vm().map(|data| {
                let error = data.error_message().map(str::to_string);
                view! {
                    {error.map(|message| view! {
                        <div class="vm-details__error">
                            <MessageBar intent=MessageBarIntent::Error>
                                {icon("alert")}
                                <span>{message}</span>
                            </MessageBar>
                            <SubmitButton
                                tooltip="Dismiss"
                                icon=icon("check")
                                pending=vm.dismissing
                                test_id="dismiss-error"
                                on_click=Callback::new(move |_| vm.dismiss_error_command(on_updated))
                            />
                        </div>
                    })}
                    <div class="details-form">
                        <InfoRow label="ID" value=data.id.to_string() />
                        <InfoRow label="Name" value=data.name.clone() />
                        <InfoRow label="Owner" value=data.owner.clone() />
                        <InfoRow label="Group" value=data.group.clone() />
                        <InfoRow label="State" value=data.state_label() />
                        <InfoRow label="Start time" value=data.start_time_display() />
                    </div>
                }
            })}
        </div>
    }
}

/// Standalone page of a VM (`/vm/:id`).
#[component]
pub fn VmDetailPage(id: RowId) -> impl IntoView {
    view! {
        <div class="page vm-detail-page">
            <VmDetails id=id initial=None />
        </div>
    }
}
