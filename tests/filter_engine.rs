use llm_directory::catalog::{Catalog, Entry, EntryId, ModelType};
use llm_directory::filtering::{
    apply_filters, update_range, update_search, update_type, EntryFilter, FilterCriteria,
    ParameterRange, TypeFilter,
};

fn make_entry(id: u64, name: &str, model_type: &str, parameters: u64) -> Entry {
    Entry::new(
        id,
        name,
        ModelType::new(model_type),
        parameters,
        format!("{name} description"),
    )
}

fn reference_catalog() -> Vec<Entry> {
    vec![
        make_entry(1, "GPT-3", "GPT", 175_000_000_000),
        make_entry(2, "BERT", "BERT", 340_000_000),
        make_entry(3, "T5", "T5", 11_000_000_000),
    ]
}

fn wider_catalog() -> Vec<Entry> {
    vec![
        make_entry(1, "GPT-3", "GPT", 175_000_000_000),
        make_entry(2, "BERT", "BERT", 340_000_000),
        make_entry(3, "T5", "T5", 11_000_000_000),
        make_entry(4, "GPT-2", "GPT", 1_500_000_000),
        make_entry(5, "DistilBERT", "BERT", 66_000_000),
        make_entry(6, "Flan-T5", "T5", 11_000_000_000),
        make_entry(7, "RoBERTa", "BERT", 355_000_000),
        make_entry(8, "mT5", "T5", 0),
    ]
}

fn ids(entries: &[&Entry]) -> Vec<EntryId> {
    entries.iter().map(|e| e.id().clone()).collect()
}

fn criteria_grid() -> Vec<FilterCriteria> {
    let searches = ["", "gpt", "BERT", "t5", "-", "zzz"];
    let types = [
        TypeFilter::Any,
        TypeFilter::from_label("GPT"),
        TypeFilter::from_label("BERT"),
        TypeFilter::from_label("T5"),
        TypeFilter::from_label("LLaMA"),
    ];
    let ranges = [
        ParameterRange::new(0, 200_000_000_000),
        ParameterRange::new(0, 1_000_000_000),
        ParameterRange::new(340_000_000, 11_000_000_000),
        ParameterRange::new(11_000_000_000, 11_000_000_000),
        ParameterRange::new(5, 1),
    ];

    let mut grid = Vec::new();
    for s in searches {
        for t in &types {
            for r in ranges {
                let k = FilterCriteria::default();
                let k = update_search(&k, s);
                let k = update_type(&k, t.clone());
                let k = update_range(&k, r);
                grid.push(k);
            }
        }
    }
    grid
}

#[test]
fn scenario_type_filter_gpt() {
    let catalog = reference_catalog();
    let criteria = FilterCriteria::default()
        .with_type(TypeFilter::from_label("GPT"))
        .with_range(ParameterRange::new(0, 200_000_000_000));

    let visible = apply_filters(&catalog, &criteria);

    assert_eq!(ids(&visible), vec![EntryId::from(1)]);
}

#[test]
fn scenario_range_below_one_billion() {
    let catalog = reference_catalog();
    let criteria = FilterCriteria::default().with_range(ParameterRange::new(0, 1_000_000_000));

    let visible = apply_filters(&catalog, &criteria);

    assert_eq!(ids(&visible), vec![EntryId::from(2)]);
}

#[test]
fn invariant_default_criteria_is_identity() {
    let seed = Catalog::seed();
    let visible = apply_filters(seed.entries(), &FilterCriteria::default());

    let expected: Vec<&Entry> = seed.entries().iter().collect();
    assert_eq!(ids(&visible), ids(&expected));

    // Models heavier than the slider maximum are still part of the identity.
    let mut catalog = wider_catalog();
    catalog.push(make_entry(9, "GPT-4", "GPT", 1_760_000_000_000));
    catalog.push(make_entry(10, "Huge", "GPT", u64::MAX));

    let visible = apply_filters(&catalog, &FilterCriteria::default());
    let expected: Vec<&Entry> = catalog.iter().collect();
    assert_eq!(ids(&visible), ids(&expected));
}

#[test]
fn invariant_result_is_ordered_subsequence() {
    let catalog = wider_catalog();

    for criteria in criteria_grid() {
        let visible = apply_filters(&catalog, &criteria);

        let mut cursor = catalog.iter();
        for v in &visible {
            assert!(
                cursor.any(|c| std::ptr::eq(c, *v)),
                "result must be a subsequence of the catalog for {criteria:?}"
            );
        }
    }
}

#[test]
fn invariant_result_is_exactly_the_matching_entries() {
    let catalog = wider_catalog();

    for criteria in criteria_grid() {
        let visible = apply_filters(&catalog, &criteria);
        let needle = criteria.search().as_str().to_lowercase();

        for entry in &catalog {
            let by_hand = entry.name().to_lowercase().contains(&needle)
                && match criteria.selected_type() {
                    TypeFilter::Any => true,
                    TypeFilter::Exactly(t) => entry.model_type() == t,
                }
                && criteria.parameter_range().min <= entry.parameters()
                && entry.parameters() <= criteria.parameter_range().max;

            let present = visible.iter().any(|v| v.id() == entry.id());
            assert_eq!(present, by_hand, "entry {} under {criteria:?}", entry.id());
            assert_eq!(criteria.matches(entry), by_hand);
        }
    }
}

#[test]
fn invariant_range_bounds_inclusive() {
    let catalog = reference_catalog();

    let at_min = FilterCriteria::default().with_range(ParameterRange::new(340_000_000, 500_000_000));
    assert_eq!(ids(&apply_filters(&catalog, &at_min)), vec![EntryId::from(2)]);

    let at_max = FilterCriteria::default().with_range(ParameterRange::new(0, 11_000_000_000));
    assert_eq!(
        ids(&apply_filters(&catalog, &at_max)),
        vec![EntryId::from(2), EntryId::from(3)]
    );

    let point = FilterCriteria::default().with_range(ParameterRange::new(175_000_000_000, 175_000_000_000));
    assert_eq!(ids(&apply_filters(&catalog, &point)), vec![EntryId::from(1)]);
}

#[test]
fn invariant_range_is_full_precision() {
    let catalog = vec![make_entry(1, "Odd", "GPT", 175_000_000_001)];
    let criteria = FilterCriteria::default().with_range(ParameterRange::new(0, 175_000_000_000));

    assert!(apply_filters(&catalog, &criteria).is_empty());
}

#[test]
fn search_is_case_insensitive_substring() {
    let catalog = wider_catalog();

    let upper = FilterCriteria::default().with_search("BERT");
    let lower = FilterCriteria::default().with_search("bert");
    let mixed = FilterCriteria::default().with_search("bErT");

    let expected = vec![EntryId::from(2), EntryId::from(5), EntryId::from(7)];
    assert_eq!(ids(&apply_filters(&catalog, &upper)), expected);
    assert_eq!(ids(&apply_filters(&catalog, &lower)), expected);
    assert_eq!(ids(&apply_filters(&catalog, &mixed)), expected);
}

#[test]
fn type_match_is_case_sensitive() {
    let catalog = reference_catalog();
    let criteria = FilterCriteria::default().with_type(TypeFilter::from_label("gpt"));

    assert!(apply_filters(&catalog, &criteria).is_empty());
}

#[test]
fn unknown_type_yields_empty_not_error() {
    let catalog = reference_catalog();
    let criteria = update_type(&FilterCriteria::default(), TypeFilter::from_label("LLaMA"));

    assert!(apply_filters(&catalog, &criteria).is_empty());
}

#[test]
fn inverted_range_yields_empty_not_error() {
    let catalog = reference_catalog();
    let range = ParameterRange::new(200_000_000_000, 0);
    assert!(range.is_inverted());

    let criteria = update_range(&FilterCriteria::default(), range);

    assert!(apply_filters(&catalog, &criteria).is_empty());
}

#[test]
fn empty_catalog_yields_empty() {
    let catalog: Vec<Entry> = Vec::new();
    assert!(apply_filters(&catalog, &FilterCriteria::default()).is_empty());
}

#[test]
fn updates_produce_new_snapshots() {
    let base = FilterCriteria::default();

    let searched = update_search(&base, "t5");
    let typed = update_type(&searched, TypeFilter::from_label("T5"));
    let ranged = update_range(&typed, ParameterRange::new(1, 2));

    assert_eq!(base, FilterCriteria::default());
    assert_eq!(searched.search().as_str(), "t5");
    assert_eq!(searched.selected_type(), &TypeFilter::Any);
    assert_eq!(typed.search().as_str(), "t5");
    assert_eq!(typed.parameter_range(), base.parameter_range());
    assert_eq!(ranged.selected_type(), &TypeFilter::from_label("T5"));
    assert_eq!(ranged.parameter_range(), ParameterRange::new(1, 2));
}

#[test]
fn filters_compose_across_all_three_criteria() {
    let catalog = wider_catalog();
    let criteria = FilterCriteria::default()
        .with_search("t5")
        .with_type(TypeFilter::from_label("T5"))
        .with_range(ParameterRange::new(1, 200_000_000_000));

    // mT5 has zero parameters and falls below the range.
    assert_eq!(
        ids(&apply_filters(&catalog, &criteria)),
        vec![EntryId::from(3), EntryId::from(6)]
    );
}
