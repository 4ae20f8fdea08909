//! Entity tagger capability tests.

use deepscene_engine::{
    default_lexicon, EngineConfig, EntityCategory, EntityTagger, FallbackPolicy, SceneAnalyzer,
    TaggedEntity, TaggerCapability, TaggerError,
};
use mockall::mock;

mock! {
    pub Tagger {}

    impl EntityTagger for Tagger {
        fn find_entities(&self, text: &str) -> Result<Vec<TaggedEntity>, TaggerError>;
        fn name(&self) -> &'static str;
    }
}

fn analyzer_with(tagger: TaggerCapability) -> SceneAnalyzer {
    SceneAnalyzer::builder(default_lexicon())
        .fallback_policy(FallbackPolicy::First)
        .tagger(tagger)
        .build()
        .unwrap()
}

/// Test that the default configuration finds known places.
#[test]
fn test_gazetteer_from_config() {
    let config = EngineConfig {
        fallback_policy: FallbackPolicy::First,
        ..Default::default()
    };
    let analyzer = SceneAnalyzer::from_config(&config).unwrap();

    let scene = analyzer.analyze("A chase through Tokyo at midnight").unwrap();
    assert_eq!(scene.setting, "Tokyo");

    let scene = analyzer.analyze("Inspectors gather at Scotland Yard").unwrap();
    assert_eq!(scene.setting, "Scotland Yard");
}

/// Test that without a tagger the pattern path is used.
#[test]
fn test_absent_tagger_uses_patterns() {
    let analyzer = analyzer_with(TaggerCapability::Absent);
    let scene = analyzer.analyze("A chase through Tokyo at midnight").unwrap();
    assert_eq!(scene.setting, "midnight");
}

/// Test that a present tagger's first place-like entity wins.
#[test]
fn test_mock_tagger_present() {
    let mut tagger = MockTagger::new();
    tagger.expect_find_entities().returning(|_| {
        Ok(vec![
            TaggedEntity::new(0..5, EntityCategory::Person),
            TaggedEntity::new(15..27, EntityCategory::Location),
        ])
    });
    tagger.expect_name().return_const("mock");

    let analyzer = analyzer_with(TaggerCapability::present(tagger));
    let scene = analyzer.analyze("Alice hikes in Death Valley at dawn").unwrap();
    assert_eq!(scene.setting, "Death Valley");
}

/// Test that a failing tagger degrades to the pattern path.
#[test]
fn test_mock_tagger_failure_degrades() {
    let mut tagger = MockTagger::new();
    tagger
        .expect_find_entities()
        .returning(|_| Err(TaggerError::Failed("model crashed".to_string())));
    tagger.expect_name().return_const("mock");

    let analyzer = analyzer_with(TaggerCapability::present(tagger));
    let scene = analyzer
        .analyze("A detective investigates a mysterious crime in a dark warehouse at night")
        .unwrap();
    assert_eq!(scene.setting, "dark warehouse");
}

/// Test that out-of-range spans are ignored.
#[test]
fn test_mock_tagger_bad_span() {
    let mut tagger = MockTagger::new();
    tagger
        .expect_find_entities()
        .returning(|_| Ok(vec![TaggedEntity::new(100..120, EntityCategory::Facility)]));
    tagger.expect_name().return_const("mock");

    let analyzer = analyzer_with(TaggerCapability::present(tagger));
    let scene = analyzer.analyze("Tea in the garden").unwrap();
    assert_eq!(scene.setting, "garden");
}

/// Test that the tagger never affects anything but the setting.
#[test]
fn test_tagger_only_changes_setting() {
    let mut tagger = MockTagger::new();
    tagger
        .expect_find_entities()
        .returning(|_| Ok(vec![TaggedEntity::new(2..8, EntityCategory::Facility)]));
    tagger.expect_name().return_const("mock");

    let description = "A castle ghost haunts the halls";
    let with_tagger = analyzer_with(TaggerCapability::present(tagger))
        .analyze(description)
        .unwrap();
    let without = analyzer_with(TaggerCapability::Absent)
        .analyze(description)
        .unwrap();

    assert_eq!(with_tagger.setting, "castle");
    assert_eq!(with_tagger.genre, without.genre);
    assert_eq!(with_tagger.mood, without.mood);
    assert_eq!(with_tagger.characters, without.characters);
}
