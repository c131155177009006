//! Catalog filter properties over the bundled dataset and small fixtures

use shared::models::{Boutique, Mall, Product};
use storefront::{
    Catalog, ExploreScreen, FilterCriteria, MallDetailScreen, SearchParams, SearchScreen,
    TextScope, filter,
};

fn mall(id: i64, name: &str, categories: &[i64]) -> Mall {
    Mall {
        id,
        name: name.to_string(),
        address: format!("Street {}", id),
        image: String::new(),
        boutiques_count: 10,
        categories: categories.to_vec(),
        featured: id % 2 == 0,
        map_image: None,
    }
}

fn boutique(id: i64, name: &str, description: &str, category: i64) -> Boutique {
    Boutique {
        id,
        mall_id: 1,
        name: name.to_string(),
        category,
        description: description.to_string(),
        location: String::new(),
        contact_number: String::new(),
        instagram: String::new(),
        has_delivery: false,
        photos: vec![],
        featured: false,
    }
}

fn all_criteria(catalog: &Catalog) -> Vec<FilterCriteria> {
    let mut out = vec![FilterCriteria::new()];
    for query in ["", "a", "MEGA", "sneaker", "zzz", " "] {
        for category in [None, Some(0), Some(1), Some(3), Some(6), Some(99)] {
            out.push(FilterCriteria {
                query: query.to_string(),
                category_id: category,
            });
        }
    }
    for c in catalog.categories() {
        out.push(FilterCriteria::new().with_category(c.id));
    }
    out
}

fn is_subsequence<T: PartialEq>(sub: &[T], full: &[T]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

#[test]
fn test_identity() {
    let catalog = Catalog::bundled().unwrap();
    let none = FilterCriteria::new();
    assert_eq!(filter(catalog.malls(), &none, TextScope::Name), catalog.malls());
    assert_eq!(
        filter(catalog.boutiques(), &none, TextScope::NameAndDescription),
        catalog.boutiques()
    );
    assert_eq!(filter(catalog.products(), &none, TextScope::Name), catalog.products());
}

#[test]
fn test_idempotence_and_order() {
    let catalog = Catalog::bundled().unwrap();
    for criteria in all_criteria(&catalog) {
        let once = filter(catalog.malls(), &criteria, TextScope::Name);
        assert_eq!(filter(&once, &criteria, TextScope::Name), once);
        assert!(is_subsequence(&once, catalog.malls()));

        let once = filter(catalog.boutiques(), &criteria, TextScope::NameAndDescription);
        assert_eq!(filter(&once, &criteria, TextScope::NameAndDescription), once);
        assert!(is_subsequence(&once, catalog.boutiques()));

        let once: Vec<Product> = filter(catalog.products(), &criteria, TextScope::Name);
        assert_eq!(filter(&once, &criteria, TextScope::Name), once);
        assert!(is_subsequence(&once, catalog.products()));
    }
}

#[test]
fn test_and_semantics() {
    let catalog = Catalog::bundled().unwrap();
    for criteria in all_criteria(&catalog) {
        let kept = filter(catalog.malls(), &criteria, TextScope::Name);
        for m in catalog.malls() {
            let text = criteria.query.is_empty()
                || m.name.to_lowercase().contains(&criteria.query.to_lowercase());
            let category = match criteria.category() {
                None => true,
                Some(id) => m.categories.contains(&id),
            };
            assert_eq!(kept.contains(m), text && category, "mall {} {:?}", m.id, criteria);
        }
    }
}

#[test]
fn test_and_semantics_boutiques() {
    let catalog = Catalog::bundled().unwrap();
    for criteria in all_criteria(&catalog) {
        let needle = criteria.query.to_lowercase();
        let kept = filter(catalog.boutiques(), &criteria, TextScope::NameAndDescription);
        for b in catalog.boutiques() {
            let text = needle.is_empty()
                || b.name.to_lowercase().contains(&needle)
                || b.description.to_lowercase().contains(&needle);
            let category = criteria.category().is_none_or(|id| b.category == id);
            assert_eq!(kept.contains(b), text && category, "boutique {} {:?}", b.id, criteria);
        }
    }
}

#[test]
fn test_and_semantics_products() {
    let catalog = Catalog::bundled().unwrap();
    for criteria in all_criteria(&catalog) {
        let needle = criteria.query.to_lowercase();
        let kept = filter(catalog.products(), &criteria, TextScope::Name);
        for p in catalog.products() {
            let text = needle.is_empty() || p.name.to_lowercase().contains(&needle);
            assert_eq!(kept.contains(p), text, "product {} {:?}", p.id, criteria);
        }
    }
}

#[test]
fn test_sentinel_clears_filter() {
    let catalog = Catalog::bundled().unwrap();
    let zero = FilterCriteria {
        query: String::new(),
        category_id: Some(0),
    };
    let none = FilterCriteria::new();
    assert_eq!(
        filter(catalog.malls(), &zero, TextScope::Name),
        filter(catalog.malls(), &none, TextScope::Name)
    );
    assert_eq!(
        filter(catalog.boutiques(), &zero, TextScope::Name),
        filter(catalog.boutiques(), &none, TextScope::Name)
    );
}

#[test]
fn test_case_insensitivity() {
    let boutiques = vec![boutique(1, "Zara Boutique", "", 1)];
    for query in ["zara", "ZARA", "Zara"] {
        let criteria = FilterCriteria::new().with_query(query);
        assert_eq!(filter(&boutiques, &criteria, TextScope::Name).len(), 1);
    }
}

#[test]
fn test_scenario_a_explore_membership() {
    let malls = vec![
        mall(1, "One", &[1, 3]),
        mall(2, "Two", &[2]),
        mall(3, "Three", &[4, 5]),
        mall(4, "Four", &[3]),
        mall(5, "Five", &[]),
    ];
    let kept = filter(&malls, &FilterCriteria::new().with_category(3), TextScope::Name);
    let ids: Vec<i64> = kept.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 4]);

    // Same behavior through the explore screen on the bundled data
    let catalog = Catalog::bundled().unwrap();
    let mut explore = ExploreScreen::new(&catalog);
    explore.select_category(3);
    let ids: Vec<i64> = explore.malls().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_scenario_b_description_match() {
    let boutiques = vec![
        boutique(1, "ShoeBox", "sells sneakers", 2),
        boutique(2, "Hat Shop", "caps", 3),
    ];
    let criteria = FilterCriteria::new().with_query("sneaker");
    let kept = filter(&boutiques, &criteria, TextScope::NameAndDescription);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, "ShoeBox");
}

#[test]
fn test_scenario_c_equality() {
    let boutiques = vec![boutique(1, "A", "", 4)];
    assert_eq!(
        filter(&boutiques, &FilterCriteria::new().with_category(4), TextScope::Name).len(),
        1
    );
    assert!(filter(&boutiques, &FilterCriteria::new().with_category(5), TextScope::Name).is_empty());

    let catalog = Catalog::bundled().unwrap();
    let mut detail = MallDetailScreen::open(&catalog, 1).unwrap();
    detail.select_category(4);
    assert!(detail.boutiques().iter().all(|b| b.category == 4));
}

#[test]
fn test_scenario_d_empty_input() {
    let malls: Vec<Mall> = vec![];
    let boutiques: Vec<Boutique> = vec![];
    let criteria = FilterCriteria::new().with_query("anything");
    assert!(filter(&malls, &criteria, TextScope::Name).is_empty());
    assert!(filter(&boutiques, &criteria, TextScope::NameAndDescription).is_empty());
}

#[test]
fn test_scenario_e_reset() {
    let catalog = Catalog::bundled().unwrap();
    let mut search = SearchScreen::open(&catalog, &SearchParams::default());
    search.set_query("x");
    search.select_category(2);
    search.reset();

    assert_eq!(search.criteria(), &FilterCriteria::new());
    assert_eq!(
        search.boutiques(),
        catalog.boutiques().iter().collect::<Vec<_>>()
    );
}
