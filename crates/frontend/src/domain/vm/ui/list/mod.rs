pub mod state;

use self::state::{create_state, VmListState};
use crate::domain::vm::api;
use crate::domain::vm::ui::details::VmDetails;
use crate::layout::global_context::{AppGlobalContext, NotificationKind};
use crate::shared::api_utils::HttpDocumentService;
use crate::shared::components::multiple_tags::MultipleTags;
use crate::shared::components::submit_button::SubmitButton;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use contracts::domain::vm::VirtualMachine;
use contracts::shared::documents::clear_errors;
use contracts::shared::navigation::{fill_path, routes::VM_DETAIL, NavigationState};
use contracts::shared::selection::{DetailPane, RowId};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Key of the VM table in the shared selection store
const RESOURCE: &str = "vm";

fn row_dom_id(id: RowId) -> String {
    format!("vm-row-{}", id)
}

fn scroll_to_row(id: RowId) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&row_dom_id(id)))
    else {
        log!("⚠️ row of VM #{} is not rendered", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
fn VmRow(vm: VirtualMachine, state: RwSignal<VmListState>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let id = vm.id;
    let is_selected = move || state.with(|s| s.selection.contains(id));
    let has_error = vm.error_message().is_some();
    let detail_state = NavigationState::for_entity(id.to_string(), vm.name.clone());

    view! {
        <tr
            id=row_dom_id(id)
            class="table__row"
            class:table__row--selected=is_selected
            class:table__row--located=move || state.with(|s| s.located == Some(id))
            on:click=move |_| state.update(|s| {
                s.selection.set([id]);
            })
            on:dblclick=move |_| {
                let id_param = id.to_string();
                let path = fill_path(&VM_DETAIL.path(), &[("id", id_param.as_str())]);
                ctx.navigate(&path, detail_state.clone());
            }
        >
            <TableCheckbox
                checked=Signal::derive(is_selected)
                on_change=Callback::new(move |_| state.update(|s| {
                    s.selection.toggle(id);
                }))
            />
            <td class="table__cell">{id}</td>
            <td class="table__cell">{vm.name.clone()}</td>
            <td class="table__cell">{vm.owner.clone()}</td>
            <td class="table__cell">{vm.group.clone()}</td>
            <td class="table__cell">{vm.state_label()}</td>
            <td class="table__cell">{vm.start_time_display()}</td>
            <td class="table__cell table__cell--icon">
                {has_error.then(|| view! { <span title="Error">{icon("alert")}</span> })}
            </td>
        </tr>
    }
}

/// Таблица виртуальных машин с панелью деталей.
///
/// The selection is published to `AppGlobalContext::selection` under
/// [`RESOURCE`]. One selected row shows its details, several show tags.
#[component]
pub fn VirtualMachines() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let tag_limit = ctx.config().ui.tag_limit;
    let clearing = RwSignal::new(false);

    ctx.selection.update(|store| store.reset_for(RESOURCE));

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_vm_pool(ctx).await {
                Ok(items) => {
                    log!("✅ loaded {} VMs", items.len());
                    state.try_update(|s| s.set_items(items));
                }
                Err(e) => {
                    log!("❌ VM pool: {}", e);
                    state.try_update(|s| {
                        s.is_loaded = true;
                        s.error = Some(e.to_string());
                    });
                }
            }
        });
    };

    let items = Memo::new(move |_| state.with(|s| s.items.clone()));
    let selected = Memo::new(move |_| state.with(|s| s.selection.clone()));
    let pane = Memo::new(move |_| selected.with(|s| DetailPane::from_selection(s.ids())));

    // Публикуем только пока активна вкладка VM; возврат на неё публикует заново
    Effect::new(move |_| {
        let ids = selected.with(|s| s.ids().to_vec());
        if ctx.selection.with(|store| store.active() == Some(RESOURCE)) {
            ctx.selection
                .maybe_update(|store| store.publish(RESOURCE, &ids));
        }
    });

    let locate = move |id: RowId| {
        state.update(|s| s.located = Some(id));
        scroll_to_row(id);
    };

    let unselect = move |id: RowId| {
        state.update(|s| {
            s.selection.remove(id);
        });
    };

    let selected_have_errors = Signal::derive(move || {
        state.with(|s| s.selected_items().iter().any(|vm| vm.error_message().is_some()))
    });

    let clear_selected_errors = move || {
        let targets = state.with_untracked(|s| s.selected_items());
        clearing.set(true);
        spawn_local(async move {
            let service = HttpDocumentService::new(ctx, RESOURCE);
            match clear_errors(&service, &targets).await {
                Ok(cleared) if cleared.is_empty() => {
                    ctx.notify(NotificationKind::Info, "No errors to clear")
                }
                Ok(cleared) => ctx.notify(
                    NotificationKind::Success,
                    format!("Errors cleared on {} VM(s)", cleared.len()),
                ),
                Err((cleared, e)) => ctx.notify(
                    NotificationKind::Error,
                    format!("{} (cleared before the failure: {})", e, cleared.len()),
                ),
            }
            clearing.try_set(false);
            fetch();
        });
    };

    fetch();

    view! {
        <div class="page vm-list">
            <div class="header">
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                    <span class="header__counter">
                        {move || format!("{} of {} selected", selected.with(|s| s.len()), items.with(|i| i.len()))}
                    </span>
                </div>
            </div>

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <div class="vm-list__body">
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <TableCheckbox
                                    header=true
                                    checked=Signal::derive(move || state.with(|s| s.all_selected()))
                                    indeterminate=Signal::derive(move || state.with(|s| s.partially_selected()))
                                    on_change=Callback::new(move |checked: bool| state.update(|s| {
                                        if checked {
                                            let all: Vec<RowId> = s.items.iter().map(|vm| vm.id).collect();
                                            s.selection.set(all);
                                        } else {
                                            s.selection.clear();
                                        }
                                    }))
                                />
                                <th class="table__header-cell">"ID"</th>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Owner"</th>
                                <th class="table__header-cell">"Group"</th>
                                <th class="table__header-cell">"State"</th>
                                <th class="table__header-cell">"Start time"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                if !state.with(|s| s.is_loaded) {
                                    return view! {
                                        <tr><td colspan="8" class="table__cell"><Spinner size=SpinnerSize::Small /></td></tr>
                                    }.into_any();
                                }
                                items.get().into_iter().map(|vm| view! {
                                    <VmRow vm=vm state=state />
                                }).collect_view().into_any()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="vm-list__pane">
                    {move || match pane.get() {
                        DetailPane::None => view! {
                            <div class="placeholder">"Select a VM to see its details"</div>
                        }.into_any(),
                        DetailPane::Single(id) => {
                            let initial = state.with_untracked(|s| s.find(id).cloned());
                            view! {
                                <VmDetails
                                    id=id
                                    initial=initial
                                    on_locate=Callback::new(move |_| locate(id))
                                    on_close=Callback::new(move |_| unselect(id))
                                    on_updated=Callback::new(move |_| fetch())
                                />
                            }.into_any()
                        }
                        DetailPane::Tags(_) => view! {
                            <div class="vm-list__tags">
                                <MultipleTags
                                    tags=Signal::derive(move || state.with(|s| s.tags()))
                                    limit=tag_limit
                                    on_click=Callback::new(locate)
                                    on_remove=Callback::new(unselect)
                                />
                                <Show when=move || selected_have_errors.get()>
                                    <SubmitButton
                                        tooltip="Clear errors"
                                        icon=icon("check")
                                        pending=clearing
                                        test_id="clear-errors"
                                        on_click=Callback::new(move |_| clear_selected_errors())
                                    />
                                </Show>
                            </div>
                        }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
