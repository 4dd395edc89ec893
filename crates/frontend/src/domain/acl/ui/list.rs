use super::card::AclCard;
use crate::domain::acl::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::acl::Acl;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Rules whose readable text or raw string contains `query` (case-insensitive).
fn filter_acls(acls: &[Acl], query: &str) -> Vec<Acl> {
    let query = query.trim().to_lowercase();
    acls.iter()
        .filter(|acl| {
            query.is_empty()
                || acl.readable().to_lowercase().contains(&query)
                || acl.string.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[component]
pub fn AclList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (items, set_items) = signal::<Vec<Acl>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let query = RwSignal::new(String::new());

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_acls(ctx).await {
                Ok(acls) => {
                    log!("✅ loaded {} ACL rules", acls.len());
                    set_items.try_set(acls);
                    set_error.try_set(None);
                }
                Err(e) => {
                    set_error.try_set(Some(e.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    };

    let visible = Memo::new(move |_| items.with(|all| query.with(|q| filter_acls(all, q))));

    fetch();

    view! {
        <div class="page acl-list">
            <div class="header">
                <div class="header__actions">
                    <Input value=query placeholder="Search" />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <Spinner /> }
            >
                <div class="acl-list__cards">
                    <For
                        each=move || visible.get()
                        key=|acl| acl.id
                        children=|acl| view! { <AclCard acl=acl /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acl(id: u64, string: &str) -> Acl {
        Acl {
            id,
            string: string.to_string(),
        }
    }

    #[test]
    fn test_filter_by_readable_text() {
        let acls = vec![
            acl(0, "@1 VM+IMAGE/* CREATE #0"),
            acl(3, "#5 HOST/%100 USE+MANAGE+ADMIN *"),
        ];

        let hosts = filter_acls(&acls, "Hosts");
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].id, 3);

        assert_eq!(filter_acls(&acls, "%100").len(), 1);
        assert_eq!(filter_acls(&acls, "  ").len(), 2);
    }
}
