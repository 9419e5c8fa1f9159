use chart_gallery::core::{
    RngSource, ScriptedSource, SwapStep, UniformSource, shuffle_in_place, shuffle_in_place_traced,
};
use chart_gallery::error::{ChartError, ChartResult};

#[test]
fn scripted_samples_produce_exact_permutation() {
    let mut items = [10, 20, 30];
    let mut source = ScriptedSource::new([0.9, 0.1]);
    let mut steps = Vec::new();

    let shuffled =
        shuffle_in_place_traced(&mut items, &mut source, |step| steps.push(step)).expect("shuffle");

    assert_eq!(shuffled, &[20, 10, 30]);
    assert_eq!(steps, [SwapStep { i: 2, j: 2 }, SwapStep { i: 1, j: 0 }]);
    assert_eq!(source.remaining(), 0);
    assert_eq!(items, [20, 10, 30]);
}

#[test]
fn empty_and_single_inputs_draw_nothing() {
    let mut source = ScriptedSource::default();

    let mut empty: [u8; 0] = [];
    let shuffled = shuffle_in_place(&mut empty, &mut source).expect("empty");
    assert!(shuffled.is_empty());

    let mut single = ["only".to_owned()];
    let result = shuffle_in_place(&mut single, &mut source).expect("single");
    assert_eq!(result, ["only".to_owned()]);
    assert_eq!(source.drawn(), 0);
}

#[test]
fn shuffle_consumes_one_sample_per_swap() {
    let mut items: Vec<usize> = (0..8).collect();
    let mut source = ScriptedSource::new(vec![0.5; 7]);

    shuffle_in_place(&mut items, &mut source).expect("shuffle");

    assert_eq!(source.drawn(), 7);
}

#[test]
fn exhausted_source_error_propagates_unchanged() {
    let mut items = [1, 2, 3, 4];
    let mut source = ScriptedSource::new([0.3]);

    let err = shuffle_in_place(&mut items, &mut source).expect_err("source runs dry");

    assert!(matches!(
        err,
        ChartError::RandomSourceExhausted { drawn: 1 }
    ));
    let mut sorted = items;
    sorted.sort_unstable();
    assert_eq!(sorted, [1, 2, 3, 4]);
}

struct FailingSource;

impl UniformSource for FailingSource {
    fn next_unit(&mut self) -> ChartResult<f64> {
        Err(ChartError::InvalidData("entropy unavailable".to_owned()))
    }
}

#[test]
fn custom_source_failure_is_not_masked() {
    let mut items = vec!['a', 'b'];
    let err = shuffle_in_place(&mut items, &mut FailingSource).expect_err("failing source");

    match err {
        ChartError::InvalidData(message) => assert_eq!(message, "entropy unavailable"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(items, ['a', 'b']);
}

#[test]
fn out_of_range_sample_is_invalid_argument() {
    let mut items = [1, 2];
    let mut source = ScriptedSource::new([1.0]);

    let err = shuffle_in_place(&mut items, &mut source).expect_err("sample of 1.0");

    assert!(matches!(err, ChartError::InvalidArgument(_)));
    assert_eq!(items, [1, 2]);
}

#[test]
fn works_with_non_clone_elements_and_dyn_sources() {
    struct Token(u32);

    let mut items: Vec<Token> = (0..16).map(Token).collect();
    let mut seeded = RngSource::seeded(11);
    let source: &mut dyn UniformSource = &mut seeded;

    shuffle_in_place(&mut items, source).expect("shuffle");

    let mut ids: Vec<u32> = items.iter().map(|token| token.0).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..16).collect::<Vec<_>>());
}

#[test]
fn same_seed_gives_same_permutation() {
    let mut left: Vec<u32> = (0..32).collect();
    let mut right = left.clone();

    shuffle_in_place(&mut left, &mut RngSource::seeded(99)).expect("left");
    shuffle_in_place(&mut right, &mut RngSource::seeded(99)).expect("right");

    assert_eq!(left, right);
}
