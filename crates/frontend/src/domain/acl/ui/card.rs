use contracts::domain::acl::Acl;
use leptos::prelude::*;

/// Правило ACL: человекочитаемый текст и номер.
#[component]
pub fn AclCard(acl: Acl) -> impl IntoView {
    view! {
        <div class="acl-card" data-cy=format!("acl-card-{}", acl.id)>
            <div class="acl-card__title" title=acl.string.clone()>{acl.readable()}</div>
            <div class="acl-card__caption">{acl.caption()}</div>
        </div>
    }
}
