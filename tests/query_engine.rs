//! Query engine integration tests
//!
//! Drives filter, sort, aggregate and histogram through the public API the
//! dashboard and CLI use.

use aitrend::catalog::{Catalog, Tool, parse_date};
use aitrend::query::{Query, SortKey, Summary, aggregate, evaluate, filter, histogram, sort};

fn tool(name: &str, rating: f64, users: u64, categories: &[&str], added: &str) -> Tool {
    Tool::new(name, format!("{} description", name))
        .with_categories(categories.iter().copied())
        .with_rating(rating)
        .with_users(users)
        .with_added(parse_date(added).unwrap())
}

fn two_tools() -> Catalog {
    Catalog::new(vec![
        tool("A", 4.8, 100, &["LLM"], "2024-01-01"),
        tool("B", 4.8, 50, &["Vision"], "2024-06-01"),
    ])
    .unwrap()
}

fn names(tools: &[&Tool]) -> Vec<String> {
    tools.iter().map(|t| t.name.clone()).collect()
}

#[test]
fn test_scenario_everything_passes() {
    let catalog = two_tools();
    let query = Query::all().with_sort(Some(SortKey::Popularity));

    let eval = evaluate(&catalog, &query);
    assert_eq!(names(&eval.tools), vec!["A", "B"]);
    assert_eq!(
        eval.summary,
        Summary {
            count: 2,
            avg_rating: 4.8,
            total_users: 150
        }
    );
    assert_eq!(eval.histogram.len(), 2);
    assert_eq!(eval.histogram["LLM"], 1);
    assert_eq!(eval.histogram["Vision"], 1);
}

#[test]
fn test_scenario_nothing_passes() {
    let catalog = two_tools();
    let query = Query::all().with_min_rating(4.9);

    let eval = evaluate(&catalog, &query);
    assert!(eval.tools.is_empty());
    assert_eq!(eval.summary, Summary::default());
    assert_eq!(eval.summary.avg_rating, 0.0);
    assert_eq!(eval.histogram["LLM"], 1);
    assert_eq!(eval.histogram["Vision"], 1);
}

#[test]
fn test_open_query_returns_catalog_in_order() {
    let catalog = Catalog::builtin().unwrap();
    let all = filter(catalog.tools(), &Query::all());
    assert_eq!(all.len(), catalog.len());
    for (got, want) in all.iter().zip(catalog.tools()) {
        assert_eq!(got.name, want.name);
    }
}

#[test]
fn test_filter_is_subsequence_of_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let queries = [
        Query::all().with_search("ai"),
        Query::all().with_categories(["Design", "LLM"]),
        Query::default().with_min_rating(4.5),
        Query::all().with_search("CODE").with_categories(["Productivity"]),
    ];

    for query in &queries {
        let result = filter(catalog.tools(), query);
        let mut positions = result.iter().map(|t| {
            catalog
                .tools()
                .iter()
                .position(|c| c.name == t.name)
                .expect("filtered tool must come from the catalog")
        });
        let mut last = positions.next();
        for pos in positions {
            assert!(Some(pos) > last, "order not preserved for {:?}", query);
            last = Some(pos);
        }
    }
}

#[test]
fn test_rating_above_domain_matches_nothing() {
    let catalog = Catalog::builtin().unwrap();
    let query = Query::all().with_search("").with_min_rating(5.1);
    assert!(filter(catalog.tools(), &query).is_empty());
}

#[test]
fn test_category_filter_is_or() {
    let catalog = Catalog::builtin().unwrap();
    let query = Query::all().with_categories(["Vision", "Multimodal"]);
    let result = filter(catalog.tools(), &query);
    assert_eq!(names(&result), vec!["Midjourney v6", "Claude Studio"]);
}

#[test]
fn test_predicates_are_conjunctive() {
    let catalog = Catalog::builtin().unwrap();
    let query = Query::all()
        .with_search("design")
        .with_categories(["Prototyping"])
        .with_min_rating(4.3);
    let result = filter(catalog.tools(), &query);
    for tool in &result {
        assert!(tool.rating >= 4.3);
        assert!(tool.has_category("Prototyping"));
        let text = format!("{} {}", tool.name, tool.description).to_lowercase();
        assert!(text.contains("design"));
    }
    assert!(!result.iter().any(|t| t.name == "Builder.io"));
}

#[test]
fn test_sort_is_stable_on_rating_ties() {
    let catalog = two_tools();
    let filtered = filter(catalog.tools(), &Query::all());
    let sorted = sort(filtered, Some(SortKey::Rating));
    assert_eq!(names(&sorted), vec!["A", "B"]);
}

#[test]
fn test_sort_is_idempotent() {
    let catalog = Catalog::builtin().unwrap();
    for key in SortKey::ALL {
        let once = sort(filter(catalog.tools(), &Query::all()), Some(key));
        let twice = sort(once.clone(), Some(key));
        assert_eq!(names(&once), names(&twice), "{:?}", key);
    }
}

#[test]
fn test_unknown_sort_is_identity() {
    let catalog = Catalog::builtin().unwrap();
    let key = SortKey::from_label("Trending");
    assert!(key.is_none());
    let result = sort(filter(catalog.tools(), &Query::all()), key);
    assert_eq!(result[0].name, "Vercel v0");
    assert_eq!(result[11].name, "Replit GhostWriter+");
}

#[test]
fn test_recently_added_orders_by_date() {
    let catalog = two_tools();
    let sorted = sort(filter(catalog.tools(), &Query::all()), Some(SortKey::RecentlyAdded));
    assert_eq!(names(&sorted), vec!["B", "A"]);
}

#[test]
fn test_aggregate_empty() {
    assert_eq!(
        aggregate(&[]),
        Summary {
            count: 0,
            avg_rating: 0.0,
            total_users: 0
        }
    );
}

#[test]
fn test_histogram_total_matches_category_entries() {
    let catalog = Catalog::builtin().unwrap();
    let counts = histogram(catalog.tools());
    let expected: usize = catalog.tools().iter().map(|t| t.categories.len()).sum();
    assert_eq!(counts.values().sum::<usize>(), expected);
    assert_eq!(expected, 26);
}

#[test]
fn test_histogram_ignores_query() {
    let catalog = Catalog::builtin().unwrap();
    let open = evaluate(&catalog, &Query::all());
    let closed = evaluate(&catalog, &Query::all().with_search("no such tool"));
    assert!(closed.tools.is_empty());
    assert_eq!(open.histogram, closed.histogram);
}

#[test]
fn test_evaluation_serializes() {
    let catalog = two_tools();
    let eval = evaluate(&catalog, &Query::all());
    let json = serde_json::to_value(&eval).unwrap();
    assert_eq!(json["summary"]["count"], 2);
    assert_eq!(json["total_tools"], 2);
    assert_eq!(json["tools"][0]["name"], "A");
    assert_eq!(json["tools"][1]["added"], "2024-06-01");
}
