use leptos::prelude::*;

/// Ячейка таблицы с чекбоксом выбора строки.
///
/// Клик по ячейке не доходит до строки. В заголовке используется
/// `indeterminate`, когда выбрана только часть строк.
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    #[prop(optional, into)] indeterminate: Signal<bool>,
    on_change: Callback<bool>,
    /// `th` for the header row
    #[prop(optional)]
    header: bool,
) -> impl IntoView {
    let input = view! {
        <input
            type="checkbox"
            class="table__checkbox"
            prop:checked=checked
            prop:indeterminate=indeterminate
            on:change=move |ev| on_change.run(event_target_checked(&ev))
        />
    };

    if header {
        view! { <th class="table__cell table__cell--checkbox">{input}</th> }.into_any()
    } else {
        view! {
            <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
                {input}
            </td>
        }
        .into_any()
    }
}
