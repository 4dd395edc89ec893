use once_cell::sync::Lazy;

use super::endpoints::all_entries;
use super::label::RouteParams;
use super::route::RouteEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

struct CompiledRoute {
    entry: &'static RouteEntry,
    segments: Vec<Segment>,
    literals: usize,
}

static COMPILED: Lazy<Vec<CompiledRoute>> = Lazy::new(|| {
    all_entries()
        .into_iter()
        .map(|entry| {
            let segments: Vec<Segment> = split(&entry.path())
                .map(|s| match s.strip_prefix(':') {
                    Some(name) => Segment::Param(name.to_string()),
                    None => Segment::Literal(s.to_string()),
                })
                .collect();
            let literals = segments
                .iter()
                .filter(|s| matches!(s, Segment::Literal(_)))
                .count();
            CompiledRoute {
                entry,
                segments,
                literals,
            }
        })
        .collect()
});

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Concrete path matched against the registry.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub entry: &'static RouteEntry,
    pub params: RouteParams,
}

/// Finds the entry for a concrete path such as `/vm/42`.
///
/// Trailing slashes and query strings are ignored. When several templates
/// match, the one with more literal segments wins, so `/vm-template/create`
/// never resolves to `/vm-template/:id`.
pub fn match_path(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let parts: Vec<&str> = split(path).collect();

    let mut best: Option<(&CompiledRoute, RouteParams)> = None;
    for route in COMPILED.iter() {
        if route.segments.len() != parts.len() {
            continue;
        }
        let Some(params) = bind(&route.segments, &parts) else {
            continue;
        };
        let better = best
            .as_ref()
            .map(|(current, _)| route.literals > current.literals)
            .unwrap_or(true);
        if better {
            best = Some((route, params));
        }
    }

    best.map(|(route, params)| RouteMatch {
        entry: route.entry,
        params,
    })
}

fn bind(segments: &[Segment], parts: &[&str]) -> Option<RouteParams> {
    let mut params = RouteParams::new();
    for (segment, part) in segments.iter().zip(parts) {
        match segment {
            Segment::Literal(literal) if literal == part => {}
            Segment::Literal(_) => return None,
            Segment::Param(name) => params.insert(name.as_str(), *part),
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::navigation::endpoints::{CREATE_VM_TEMPLATE, UPDATE_PROVIDER, VMS, VM_DETAIL};
    use crate::shared::navigation::ScreenKey;

    #[test]
    fn test_match_list_and_detail() {
        let list = match_path("/vm").unwrap();
        assert!(std::ptr::eq(list.entry, &VMS));
        assert!(list.params.is_empty());

        let detail = match_path("/vm/42").unwrap();
        assert!(std::ptr::eq(detail.entry, &VM_DETAIL));
        assert_eq!(detail.params.get("id"), Some("42"));
    }

    #[test]
    fn test_literal_segment_beats_parameter() {
        let create = match_path("/vm-template/create").unwrap();
        assert!(std::ptr::eq(create.entry, &CREATE_VM_TEMPLATE));
        assert!(create.params.is_empty());

        let detail = match_path("/vm-template/12").unwrap();
        assert_eq!(detail.entry.screen, ScreenKey::VmTemplateDetail);
    }

    #[test]
    fn test_trailing_slash_and_query_are_ignored() {
        assert!(std::ptr::eq(match_path("/vm/").unwrap().entry, &VMS));
        assert!(std::ptr::eq(match_path("/vm?active=1").unwrap().entry, &VMS));
    }

    #[test]
    fn test_nested_parameter() {
        let edit = match_path("/providers/edit/3").unwrap();
        assert!(std::ptr::eq(edit.entry, &UPDATE_PROVIDER));
        assert_eq!(edit.params.get("id"), Some("3"));
    }

    #[test]
    fn test_unknown_paths() {
        assert!(match_path("/nope").is_none());
        assert!(match_path("/vm/1/extra").is_none());
        assert!(match_path("/").is_none());
    }
}
