use std::cmp::Ordering;

use depsight_core::component::{ComponentIdentifier, ComponentSelector};
use depsight_core::edge::DependencyEdge;
use depsight_insight::matcher::{MavenVersionMatcher, SemverMatcher, VersionComparator};
use depsight_insight::ordering::{sort, EdgeOrdering};
use depsight_util::errors::DepsightError;

fn edge(requested: &str, actual: &str, from: &str) -> DependencyEdge {
    DependencyEdge::new(
        ComponentSelector::parse(requested),
        ComponentIdentifier::parse(actual),
        ComponentIdentifier::parse(from),
    )
}

fn requested(edges: &[DependencyEdge]) -> Vec<String> {
    edges
        .iter()
        .map(|e| e.requested.as_ref().map(|r| r.to_string()).unwrap_or_default())
        .collect()
}

/// Treats anything starting with `~` as dynamic and orders static versions by length.
struct FakeComparator;

impl VersionComparator for FakeComparator {
    fn is_dynamic(&self, version: &str) -> bool {
        version.starts_with('~')
    }

    fn compare(&self, left: &str, right: &str) -> Ordering {
        left.len().cmp(&right.len())
    }

    fn matches_strictly(&self, requested: &str, actual: &ComponentIdentifier) -> bool {
        actual.version() == Some(requested)
    }
}

#[test]
fn end_to_end_example() {
    let edges = vec![
        edge("b:x:1.0", "b:x:1.0", ":app"),
        edge(":core", ":core", ":app"),
        edge("a:y:2.0", "a:y:2.0", ":app"),
    ];
    let sorted = sort(edges, &MavenVersionMatcher).unwrap();
    assert_eq!(requested(&sorted), vec![":core", "a:y:2.0", "b:x:1.0"]);
}

#[test]
fn projects_always_precede_modules() {
    let edges = vec![
        edge("aaa:aaa:0.1", "aaa:aaa:0.1", ":app"),
        edge(":zzz", ":zzz", "zzz:zzz:9.9"),
        edge("aaa:aaa:latest.release", "aaa:aaa:0.1", ":app"),
        edge(":yyy", ":yyy", ":app"),
    ];
    let sorted = sort(edges, &MavenVersionMatcher).unwrap();
    assert_eq!(
        requested(&sorted),
        vec![":yyy", ":zzz", "aaa:aaa:0.1", "aaa:aaa:latest.release"]
    );
}

#[test]
fn group_ordering_ignores_versions() {
    let edges = vec![
        edge("org.widget:lib:0.1", "org.widget:lib:0.1", ":app"),
        edge("com.acme:lib:99.0", "com.acme:lib:99.0", ":app"),
    ];
    let sorted = sort(edges, &MavenVersionMatcher).unwrap();
    assert_eq!(
        requested(&sorted),
        vec!["com.acme:lib:99.0", "org.widget:lib:0.1"]
    );
}

#[test]
fn strictly_matching_edge_sorts_first() {
    let overridden = edge("com.acme:lib:1.0", "com.acme:lib:2.0", ":b");
    let exact = edge("com.acme:lib:1.0", "com.acme:lib:1.0", ":a");
    let sorted = sort(vec![overridden.clone(), exact.clone()], &MavenVersionMatcher).unwrap();
    assert_eq!(sorted, vec![exact, overridden]);
}

#[test]
fn static_request_sorts_before_dynamic() {
    let dynamic = edge("com.acme:lib:latest.release", "com.acme:lib:2.0", ":app");
    let fixed = edge("com.acme:lib:1.5", "com.acme:lib:2.0", ":app");
    let sorted = sort(vec![dynamic.clone(), fixed.clone()], &MavenVersionMatcher).unwrap();
    assert_eq!(sorted, vec![fixed, dynamic]);
}

#[test]
fn origin_tie_break_prefers_projects() {
    let from_module = edge("com.acme:lib:1.0", "com.acme:lib:1.0", "com.acme:app:1.0");
    let from_project = edge("com.acme:lib:1.0", "com.acme:lib:1.0", ":app");
    let sorted = sort(
        vec![from_module.clone(), from_project.clone()],
        &MavenVersionMatcher,
    )
    .unwrap();
    assert_eq!(sorted, vec![from_project, from_module]);
}

#[test]
fn sorting_is_idempotent_and_stable() {
    let edges = vec![
        edge("com.acme:lib:1.0", "com.acme:lib:2.0", ":b"),
        edge(":core", ":core", ":b"),
        edge("com.acme:lib:[1.0,2.0)", "com.acme:lib:2.0", ":a"),
        edge(":core", ":core", ":a"),
        edge("com.acme:lib:2.0", "com.acme:lib:2.0", ":c"),
        edge("com.acme:lib:1.0.0", "com.acme:lib:2.0", ":b"),
    ];
    let once = sort(edges, &MavenVersionMatcher).unwrap();
    let twice = sort(once.clone(), &MavenVersionMatcher).unwrap();
    assert_eq!(once, twice);

    // The two `:core` edges and the 1.0 / 1.0.0 pair compare equal and keep input order.
    assert_eq!(once[0].from, ComponentIdentifier::project(":b"));
    assert_eq!(once[1].from, ComponentIdentifier::project(":a"));
    assert_eq!(
        requested(&once[2..]),
        vec![
            "com.acme:lib:2.0",
            "com.acme:lib:1.0",
            "com.acme:lib:1.0.0",
            "com.acme:lib:[1.0,2.0)"
        ]
    );
}

#[test]
fn comparator_is_injected() {
    let edges = vec![
        edge("g:m:~1", "g:m:333", ":app"),
        edge("g:m:22", "g:m:333", ":app"),
        edge("g:m:4444", "g:m:333", ":app"),
        edge("g:m:333", "g:m:333", ":app"),
    ];
    let sorted = sort(edges, &FakeComparator).unwrap();
    assert_eq!(requested(&sorted), vec!["g:m:333", "g:m:22", "g:m:4444", "g:m:~1"]);
}

#[test]
fn works_through_trait_objects() {
    let matcher: Box<dyn VersionComparator> = Box::new(SemverMatcher);
    let edges = vec![
        edge("g:m:^1.0", "g:m:1.2.0", ":app"),
        edge("g:m:1.10.0", "g:m:1.2.0", ":app"),
        edge("g:m:1.9.0", "g:m:1.2.0", ":app"),
    ];
    let sorted = sort(edges, matcher.as_ref()).unwrap();
    assert_eq!(requested(&sorted), vec!["g:m:1.9.0", "g:m:1.10.0", "g:m:^1.0"]);
}

#[test]
fn absent_requested_fails_whole_sort() {
    let edges = vec![
        edge(":core", ":core", ":app"),
        DependencyEdge {
            requested: None,
            actual: ComponentIdentifier::parse("com.acme:lib:1.0"),
            from: ComponentIdentifier::parse(":app"),
        },
    ];
    let err = sort(edges, &MavenVersionMatcher).unwrap_err();
    assert!(matches!(err, DepsightError::InvalidEdge { .. }));
    assert!(err.to_string().contains("<none> -> com.acme:lib:1.0"));
}

#[test]
fn single_malformed_edge_is_still_rejected() {
    let err = sort(vec![edge("lib@android", ":lib", ":app")], &MavenVersionMatcher).unwrap_err();
    assert!(matches!(err, DepsightError::UnsupportedSelectorKind { .. }));
}

#[test]
fn empty_input_sorts_to_empty() {
    assert!(sort(Vec::new(), &MavenVersionMatcher).unwrap().is_empty());
}

#[test]
fn pairwise_compare_is_antisymmetric() {
    let edges = [
        edge(":core", ":core", ":app"),
        edge("a:b:1.0", "a:b:1.0", ":app"),
        edge("a:b:1.0", "a:b:2.0", ":app"),
        edge("a:b:1.+", "a:b:2.0", ":app"),
        edge("a:b:1.0", "a:b:2.0", "x:y:1.0"),
    ];
    let ordering = EdgeOrdering::new(&MavenVersionMatcher);
    for l in &edges {
        for r in &edges {
            let lr = ordering.compare(l, r).unwrap();
            let rl = ordering.compare(r, l).unwrap();
            assert_eq!(lr, rl.reverse(), "{l} vs {r}");
        }
    }
}

fn permutations(items: &[DependencyEdge]) -> Vec<Vec<DependencyEdge>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut all = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            all.push(tail);
        }
    }
    all
}

#[test]
fn equivalent_versions_sort_identically_in_any_input_order() {
    // 1, 1.0 and 1-ga are the same version; origins decide among them.
    let edges = [
        edge("g:m:1", "g:m:2.0", ":c"),
        edge("g:m:1.0", "g:m:2.0", ":a"),
        edge("g:m:1-ga", "g:m:2.0", ":b"),
        edge("g:m:1.1", "g:m:2.0", ":a"),
        edge("g:m:0.9", "g:m:2.0", ":z"),
    ];
    let expected = vec!["g:m:0.9", "g:m:1.0", "g:m:1-ga", "g:m:1", "g:m:1.1"];
    let orders = permutations(&edges);
    assert_eq!(orders.len(), 120);
    for input in orders {
        let sorted = sort(input, &MavenVersionMatcher).unwrap();
        assert_eq!(requested(&sorted), expected);
    }
}

#[test]
fn substituted_edge_does_not_win_the_exact_match_slot() {
    let substituted = edge("g:old:1.0", "org.other:replacement:1.0", ":app");
    let exact = edge("g:old:2.0", "g:old:2.0", ":app");
    let sorted = sort(vec![substituted.clone(), exact.clone()], &MavenVersionMatcher).unwrap();
    assert_eq!(sorted, vec![exact, substituted]);
}

#[test]
fn padded_resolution_is_not_an_exact_match() {
    let padded = edge("com.acme:lib:1.0", "com.acme:lib:1.0.0", ":a");
    let exact = edge("com.acme:lib:2.0", "com.acme:lib:2.0", ":b");
    let sorted = sort(vec![padded.clone(), exact.clone()], &MavenVersionMatcher).unwrap();
    assert_eq!(sorted, vec![exact, padded]);
}
