use contracts::shared::selection::split_tags;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TagItem {
    pub id: u64,
    pub label: String,
}

/// Shows at most `limit` tags followed by a "+N" badge.
#[component]
pub fn MultipleTags(
    #[prop(into)] tags: Signal<Vec<TagItem>>,
    limit: usize,
    /// Click on a tag
    #[prop(optional)]
    on_click: Option<Callback<u64>>,
    /// Removal of a tag; shows a close button when set
    #[prop(optional)]
    on_remove: Option<Callback<u64>>,
) -> impl IntoView {
    view! {
        <div class="multiple-tags">
            {move || {
                let all = tags.get();
                let (shown, more) = split_tags(&all, limit);
                let shown = shown.to_vec();
                view! {
                    {shown.into_iter().map(|tag| {
                        let id = tag.id;
                        view! {
                            <span class="chip" on:click=move |_| {
                                if let Some(cb) = on_click {
                                    cb.run(id);
                                }
                            }>
                                <span class="chip__label">{tag.label}</span>
                                {on_remove.map(|cb| view! {
                                    <button
                                        class="chip__remove"
                                        aria-label="Remove"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            cb.run(id);
                                        }
                                    >
                                        "×"
                                    </button>
                                })}
                            </span>
                        }
                    }).collect_view()}
                    {(more > 0).then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {format!("+{}", more)}
                        </Badge>
                    })}
                }
            }}
        </div>
    }
}
