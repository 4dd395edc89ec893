use leptos::prelude::*;

/// SVG path data of the icons used by menus and buttons. Unknown names fall
/// back to a plain square.
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "tv" => &["M2 7h20v12H2z", "M17 2l-5 5-5-5"],
        "packages" | "box" | "box-iso" => &["M21 16V8l-9-5-9 5v8l9 5 9-5z", "M3.3 7L12 12l8.7-5", "M12 22V12"],
        "cell-2x2" => &["M3 3h8v8H3z", "M13 3h8v8h-8z", "M3 13h8v8H3z", "M13 13h8v8h-8z"],
        "multiple-pages" | "empty-page" => &["M14 2H6v20h12V6z", "M14 2v4h4"],
        "keyframes" | "shuffle" => &["M16 3h5v5", "M4 20L21 3", "M21 16v5h-5", "M15 15l6 6", "M4 4l5 5"],
        "folder" => &["M3 6h6l2 2h10v11H3z"],
        "db" | "database-settings" => &["M4 6c0-1.7 3.6-3 8-3s8 1.3 8 3-3.6 3-8 3-8-1.3-8-3z", "M4 6v12c0 1.7 3.6 3 8 3s8-1.3 8-3V6", "M4 12c0 1.7 3.6 3 8 3s8-1.3 8-3"],
        "archive" => &["M3 4h18v4H3z", "M5 8v12h14V8", "M10 12h4"],
        "refresh-double" | "refresh" => &["M21 12a9 9 0 1 1-3-6.7L21 8", "M21 3v5h-5"],
        "clock" => &["M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18z", "M12 7v5l3 3"],
        "simple-cart" => &["M3 3h2l3 12h11l2-8H6", "M9 20h.01", "M18 20h.01"],
        "cloud-download" | "cloud-sync" | "settings-cloud" => &["M7 18a5 5 0 1 1 1-9.9A6 6 0 0 1 19 10a4 4 0 0 1 0 8z"],
        "server-connection" | "network" => &["M12 2v6", "M5 14v-3h14v3", "M2 14h6v6H2z", "M16 14h6v6h-6z", "M9 2h6v6H9z"],
        "shield" => &["M12 3l8 3v6c0 5-3.5 8-8 9-4.5-1-8-4-8-9V6z"],
        "alpine" => &["M2 20l7-12 4 6 3-4 6 10z"],
        "server" | "hard-drive" => &["M3 4h18v7H3z", "M3 13h18v7H3z", "M7 8h.01", "M7 17h.01"],
        "pin" => &["M12 21s-7-6.2-7-11a7 7 0 0 1 14 0c0 4.8-7 11-7 11z", "M12 8v4"],
        "home" => &["M3 11l9-8 9 8", "M5 10v10h14V10"],
        "user" => &["M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8z", "M4 21a8 8 0 0 1 16 0"],
        "group" => &["M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z", "M2 21a7 7 0 0 1 14 0", "M16 3.1a4 4 0 0 1 0 7.8", "M22 21a7 7 0 0 0-4-6.3"],
        "list" => &["M8 6h13", "M8 12h13", "M8 18h13", "M3 6h.01", "M3 12h.01", "M3 18h.01"],
        "key" => &["M15 7a4 4 0 1 1-3.9 5H3v3h3v3h3v-3h2.1A4 4 0 0 1 15 7z"],
        "headset" => &["M4 14v-2a8 8 0 0 1 16 0v2", "M4 14h3v6H4z", "M17 14h3v6h-3z"],
        "chevron-right" => &["M9 6l6 6-6 6"],
        "x" | "cancel" => &["M18 6L6 18", "M6 6l12 12"],
        "locate" => &["M12 2v4", "M12 18v4", "M2 12h4", "M18 12h4", "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8z"],
        "alert" => &["M12 3l10 18H2z", "M12 10v4", "M12 17h.01"],
        "check" => &["M5 12l5 5L20 7"],
        _ => &["M4 4h16v16H4z"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name);
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::navigation::list_endpoints;

    #[test]
    fn test_registry_icons_are_drawn() {
        let fallback = icon_paths("");
        for group in list_endpoints() {
            assert_ne!(icon_paths(group.icon), fallback, "group icon {}", group.icon);
            for route in group.sidebar_routes() {
                if let Some(name) = route.icon {
                    assert_ne!(icon_paths(name), fallback, "route icon {}", name);
                }
            }
        }
    }
}
