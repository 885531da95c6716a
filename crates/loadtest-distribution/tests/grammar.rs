use loadtest_distribution::{
    parse_distribution, parse_ratio, product, Distribution, DistributionError, Fixed, Ratio,
    SharedRandom, Uniform,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Insert {
    partitions: Distribution,
    select: Ratio,
}

const PROFILE: &str = r#"
partitions: uniform(1..100)
select: fixed(1)/10
"#;

#[test]
fn test_deserialize_from_yaml() {
    let insert: Insert = serde_yaml::from_str(PROFILE).unwrap();
    assert_eq!(
        insert.partitions,
        Distribution::Uniform(Uniform::new(1, 100))
    );
    assert_eq!(insert.select, Ratio::new(Fixed::new(1), 10));
}

#[test]
fn test_serialize_round_trip() {
    let insert: Insert = serde_yaml::from_str(PROFILE).unwrap();
    let yaml = serde_yaml::to_string(&insert).unwrap();
    assert!(yaml.contains("uniform(1..100)"));
    assert!(yaml.contains("fixed(1)/10"));

    let back: Insert = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, insert);
}

#[test]
fn test_deserialize_reports_grammar_error() {
    let err = serde_yaml::from_str::<Insert>("partitions: bogus(1)\nselect: fixed(1)/1\n")
        .unwrap_err();
    assert!(err.to_string().contains("unsupported distribution: bogus"));

    let err = serde_yaml::from_str::<Insert>("partitions: fixed(1)\nselect: fixed(1)/0\n")
        .unwrap_err();
    assert!(err.to_string().contains("invalid input value"));
}

#[test]
fn test_fixed_generates_constant() {
    let rng = SharedRandom::from_seed(42);
    for n in [0u32, 1, 7, 1000, u32::MAX] {
        let d = parse_distribution(&format!("fixed({n})")).unwrap();
        for _ in 0..10 {
            assert_eq!(d.generate(&rng), i64::from(n));
        }
    }
}

#[test]
fn test_uniform_covers_range() {
    let rng = SharedRandom::from_seed(42);
    let d = parse_distribution("uniform(10..20)").unwrap();
    let values: Vec<i64> = (0..5000).map(|_| d.generate(&rng)).collect();
    assert!(values.iter().all(|v| (10..20).contains(v)));
    assert_eq!(values.iter().min(), Some(&10));
    assert_eq!(values.iter().max(), Some(&19));
}

#[test]
fn test_degenerate_uniform_behaves_as_fixed() {
    let rng = SharedRandom::from_seed(42);
    let d = parse_distribution("uniform(5..5)").unwrap();
    assert!((0..100).all(|_| d.generate(&rng) == 5));
}

#[test]
fn test_batch_size_from_partition_ratio() {
    let rng = SharedRandom::from_seed(42);
    let partition = parse_distribution("fixed(6)").unwrap();
    let select = Distribution::from(parse_ratio("fixed(1)/2").unwrap());
    assert_eq!(product(&rng, [&partition, &select]), 3);
}

#[test]
fn test_ratio_error_paths() {
    assert_eq!(
        parse_ratio("fixed(4)/0").unwrap_err(),
        DistributionError::InvalidInput
    );
    assert_eq!(
        parse_ratio("~fixed(4)/2").unwrap_err(),
        DistributionError::InvertedUnsupported("~fixed".to_string())
    );
}

#[test]
fn test_batch_size_with_many_large_ratios() {
    let rng = SharedRandom::from_seed(42);
    let partition = parse_distribution("fixed(100)").unwrap();
    let select = Distribution::from(parse_ratio("fixed(1)/65536").unwrap());
    let batch = product(&rng, [&partition, &select, &select, &select, &select]);
    assert_eq!(batch, 1);
}
