// ==========================================
// 端到端流程测试
// ==========================================
// 户数据 → 楼层 → 分类 → 编号 → 完工统计 → 概览
// ==========================================

mod helpers;

use fiber_planning_engine::domain::{AggregateStats, BuildingCategory, EstimateMethod};
use fiber_planning_engine::engine::{
    AggregationEngine, BuildingClassifier, BuildingOverviewEngine, IdentifierGenerator,
};
use fiber_planning_engine::{logging, EngineConfig};
use helpers::test_data_builder::{BuildingBuilder, UnitBuilder};

#[test]
fn test_three_floor_building_flow() {
    logging::init_test();

    let building = BuildingBuilder::new("Dorpsstraat 5")
        .suffixes(&["1", "2", "3"], "1075TB")
        .build();

    let classifier = BuildingClassifier::new();
    let classification = classifier.classify(&building);
    assert_eq!(classification.floor_count, 3);
    assert_eq!(classification.category, Some(BuildingCategory::HoogBouw));

    let identifier = IdentifierGenerator::new().generate(&building, &classification);
    assert_eq!(identifier.as_deref(), Some("HB-107503005"));

    let stats = AggregationEngine::new().aggregate_building(&building);
    assert_eq!(stats, AggregateStats::new(3, 0));
    assert_eq!(stats.percentage, 0.0);
}

#[test]
fn test_overview_matches_individual_engines() {
    logging::init_test();

    let buildings = vec![
        BuildingBuilder::new("Dorpsstraat 5")
            .suffixes(&["1", "2", "3"], "1075TB")
            .build(),
        BuildingBuilder::new("Molenweg 12")
            .unit(UnitBuilder::new().suffix("LINKS").completed().build())
            .unit(UnitBuilder::new().suffix("RECHTS").build())
            .build(),
    ];

    let overviews = BuildingOverviewEngine::new().overview_all(&buildings);
    assert_eq!(overviews.len(), 2);

    let high = &overviews[0];
    assert_eq!(high.floor_estimate.method, EstimateMethod::Identifiers);
    assert_eq!(high.identifier.as_deref(), Some("HB-107503005"));
    assert_eq!(high.stats, AggregateStats::new(3, 0));

    let low = &overviews[1];
    assert!(low.floor_estimate.is_fallback());
    assert!(low.classification.is(BuildingCategory::LaagBouw));
    assert_eq!(low.identifier, None);
    assert_eq!(low.stats.percentage, 50.0);
}

#[test]
fn test_overview_serializes_for_host_application() {
    let building = BuildingBuilder::new("Dorpsstraat 5")
        .suffixes(&["1", "2", "3"], "1075TB")
        .build();

    let overview = BuildingOverviewEngine::from_config(&EngineConfig::default()).overview(&building);
    let json = serde_json::to_value(&overview).unwrap();

    assert_eq!(json["classification"]["category"], "HoogBouw");
    assert_eq!(json["classification"]["floor_count"], 3);
    assert_eq!(json["floor_estimate"]["method"], "IDENTIFIERS");
    assert_eq!(json["identifier"], "HB-107503005");
    assert_eq!(json["stats"]["total_units"], 3);
}

#[test]
fn test_building_deserializes_with_missing_fields() {
    let json = r#"{
        "address": "Dorpsstraat 5",
        "units": [
            {"unit_suffix": "1", "postcode": "1075TB"},
            {"search_key": "1075TB_5_2_"},
            {"unit_suffix": "3", "installer_appointment": {"signature_file": "sig.png"}}
        ]
    }"#;
    let building: fiber_planning_engine::Building = serde_json::from_str(json).unwrap();
    assert!(!building.blocked);

    let overview = BuildingOverviewEngine::new().overview(&building);
    assert_eq!(overview.identifier.as_deref(), Some("HB-107503005"));
    assert_eq!(overview.stats, AggregateStats::new(3, 1));
}
