use common::facet_index::Facet;
use common::filter_panel::{FilterAction, FilterPanelState};
use common::hotel_dataset::HotelDataset;
use common::placement::normalize_longitude;

const TWO_HOTELS: &str = r#"[
    {"name": "Park Hyatt Abu Dhabi", "brand": {"label": "Park Hyatt"},
     "location": {"country": {"label": "UAE"}, "region": {"label": "Middle East"}},
     "awardCategory": {"label": "6"}, "lat": 24.5355, "lng": 54.4279},
    {"name": "Andaz Tokyo Toranomon Hills", "brand": {"label": "Andaz"},
     "location": {"country": {"label": "Japan"}, "region": {"label": "Asia Pacific"}},
     "lat": 35.6672, "lng": 139.7499}
]"#;


#[test]
fn test_deselecting_a_brand_leaves_the_other_hotel() {
    let dataset = HotelDataset::from_json_str(TWO_HOTELS).unwrap();
    let facets = dataset.facets();
    let panel = FilterPanelState::new(facets);
    assert_eq!(dataset.filtered_hotels(&panel.filter).len(), 2);

    let panel = panel.apply(&FilterAction::ToggleValue { facet: Facet::Brand, value: "Park Hyatt".to_string() }, facets);
    let visible = dataset.filtered_hotels(&panel.filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Andaz Tokyo Toranomon Hills");

    let markers = dataset.placements(&panel.filter);
    assert_eq!(markers.len(), 3);
    assert!(markers.iter().all(|m| m.hotel.name == "Andaz Tokyo Toranomon Hills"));
}

#[test]
fn test_offsets_apply_to_the_wrapped_longitude() {
    let dataset = HotelDataset::from_json_str(
        r#"[{"name": "Across The Line", "brand": {"label": "Hyatt Regency"},
            "location": {"country": {"label": "Fiji"}, "region": {"label": "Asia Pacific"}},
            "lat": -17.8, "lng": 200}]"#,
    )
    .unwrap();
    assert_eq!(normalize_longitude(200.0), -160.0);
    let lngs = dataset.placements(&dataset.initial_filter()).iter().map(|m| m.lng).collect::<Vec<_>>();
    assert_eq!(lngs, vec![-520.0, -160.0, 200.0]);
}

#[test]
fn test_select_all_toggle_on_full_facet_hides_everything() {
    let dataset = HotelDataset::from_json_str(TWO_HOTELS).unwrap();
    let facets = dataset.facets();
    let panel = FilterPanelState::new(facets).apply(&FilterAction::ToggleAll { facet: Facet::Country }, facets);
    assert!(panel.filter.selected(Facet::Country).is_empty());
    assert!(panel.is_all_selected(Facet::Brand, facets));
    assert!(panel.is_all_selected(Facet::Region, facets));
    assert!(dataset.filtered_hotels(&panel.filter).is_empty());
    assert!(dataset.placements(&panel.filter).is_empty());
}

#[test]
fn test_every_action_recomputes_from_scratch() {
    let dataset = HotelDataset::from_json_str(TWO_HOTELS).unwrap();
    let facets = dataset.facets();
    let actions = [
        FilterAction::ToggleCollapse { facet: Facet::Region },
        FilterAction::ToggleValue { facet: Facet::Region, value: "Asia Pacific".to_string() },
        FilterAction::ToggleAll { facet: Facet::Region },
        FilterAction::ToggleValue { facet: Facet::Country, value: "UAE".to_string() },
        FilterAction::ToggleValue { facet: Facet::Country, value: "UAE".to_string() },
    ];
    let mut panel = FilterPanelState::new(facets);
    for action in &actions {
        panel = panel.apply(action, facets);
        let visible = dataset.filtered_hotels(&panel.filter);
        assert_eq!(dataset.placements(&panel.filter).len(), 3 * visible.len());
    }
    assert_eq!(panel.filter, dataset.initial_filter());
    assert!(panel.collapse.is_collapsed(Facet::Region));
}

#[test]
fn test_shipped_dataset_loads() {
    let dataset = HotelDataset::from_json_str(include_str!("../../frontend/data/hotels.json")).unwrap();
    assert_eq!(dataset.hotels().len(), 13);
    assert_eq!(
        dataset.facets().brand,
        vec!["Alila", "Andaz", "Grand Hyatt", "Hyatt Regency", "Park Hyatt"]
    );
    // one hotel has no brand and one has no region, so neither passes the initial filter
    let initial = dataset.initial_filter();
    assert_eq!(dataset.filtered_hotels(&initial).len(), 11);
    assert_eq!(dataset.placements(&initial).len(), 33);

    let maui = dataset
        .placements(&initial)
        .into_iter()
        .filter(|m| m.hotel.name.starts_with("Hyatt Regency Maui"))
        .map(|m| m.lng)
        .collect::<Vec<_>>();
    let home = normalize_longitude(203.3119);
    assert!(home < 0.0);
    assert_eq!(maui, vec![home - 360.0, home, home + 360.0]);
}
