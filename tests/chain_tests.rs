use chrono::NaiveDate;
use itinera::core::chain::{Chain, SegmentPatch, validate};
use itinera::errors::AppError;
use itinera::models::segment::Segment;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn seg(ordinal: usize, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Segment {
    Segment::new(1, ordinal, start, end, 1, "EUR")
}

/// Three-leg chain with open bounds at both ends:
/// [.. -> 03-05] [03-05 -> 03-08] [03-08 -> ..]
fn open_chain() -> Vec<Segment> {
    vec![
        seg(0, None, Some(d(2024, 3, 5))),
        seg(1, Some(d(2024, 3, 5)), Some(d(2024, 3, 8))),
        seg(2, Some(d(2024, 3, 8)), None),
    ]
}

#[test]
fn test_validate_accepts_open_bounds_at_chain_ends() {
    assert!(validate(&open_chain()).is_ok());
}

#[test]
fn test_validate_rejects_empty_chain() {
    assert!(matches!(validate(&[]), Err(AppError::InvalidChain(_))));
}

#[test]
fn test_validate_rejects_segment_with_no_bounds_at_all() {
    let chain = vec![seg(0, None, None)];
    assert!(matches!(
        validate(&chain),
        Err(AppError::InvalidChain(_))
    ));
}

#[test]
fn test_validate_rejects_discontinuity() {
    let chain = vec![
        seg(0, Some(d(2024, 3, 1)), Some(d(2024, 3, 5))),
        seg(1, Some(d(2024, 3, 6)), Some(d(2024, 3, 9))),
    ];
    assert!(matches!(
        validate(&chain),
        Err(AppError::InvalidChain(_))
    ));
}

#[test]
fn test_validate_rejects_non_contiguous_ordinals() {
    let mut chain = open_chain();
    chain[1].ordinal = 5;
    assert!(matches!(
        validate(&chain),
        Err(AppError::InvalidChain(_))
    ));
}

#[test]
fn test_validate_rejects_mixed_cities() {
    let mut chain = open_chain();
    chain[2].city_id = 99;
    assert!(matches!(
        validate(&chain),
        Err(AppError::InvalidChain(_))
    ));
}

#[test]
fn test_set_end_cascades_into_next_start() {
    let mut chain = Chain::from_segments(open_chain()).unwrap();

    chain.set_end(1, d(2024, 3, 7)).unwrap();

    let segs = chain.segments();
    assert_eq!(segs[1].end, Some(d(2024, 3, 7)));
    assert_eq!(segs[2].start, Some(d(2024, 3, 7)));
    // the first leg is not involved in the cascade
    assert_eq!(segs[0].start, None);
    assert_eq!(segs[0].end, Some(d(2024, 3, 5)));
    assert!(validate(segs).is_ok());
}

#[test]
fn test_set_end_on_fully_open_two_leg_chain() {
    // [.. -> 01-10] [01-10 -> ..]
    let data = vec![
        seg(0, None, Some(d(2024, 1, 10))),
        seg(1, Some(d(2024, 1, 10)), None),
    ];

    let mut chain = Chain::from_segments(data.clone()).unwrap();
    chain.set_end(0, d(2024, 1, 12)).unwrap();
    assert_eq!(chain.segments()[0].end, Some(d(2024, 1, 12)));
    assert_eq!(chain.segments()[1].start, Some(d(2024, 1, 12)));

    // with a fixed first start, a boundary before it is rejected
    let mut data = data;
    data[0].start = Some(d(2024, 1, 9));
    let mut chain = Chain::from_segments(data).unwrap();
    assert!(matches!(
        chain.set_end(0, d(2024, 1, 8)),
        Err(AppError::InvalidDateOrder(_))
    ));
}

#[test]
fn test_set_end_rejects_date_before_start() {
    let mut chain = Chain::from_segments(open_chain()).unwrap();

    let err = chain.set_end(1, d(2024, 3, 4)).unwrap_err();
    assert!(matches!(err, AppError::InvalidDateOrder(_)));

    // failed call must leave the chain untouched
    assert_eq!(chain.segments()[1].end, Some(d(2024, 3, 8)));
    assert_eq!(chain.segments()[2].start, Some(d(2024, 3, 8)));
}

#[test]
fn test_set_end_rejects_date_at_or_after_next_end() {
    let chain_data = vec![
        seg(0, Some(d(2024, 3, 1)), Some(d(2024, 3, 5))),
        seg(1, Some(d(2024, 3, 5)), Some(d(2024, 3, 9))),
    ];
    let mut chain = Chain::from_segments(chain_data).unwrap();

    assert!(matches!(
        chain.set_end(0, d(2024, 3, 9)),
        Err(AppError::InvalidDateOrder(_))
    ));
    assert!(matches!(
        chain.set_end(0, d(2024, 3, 10)),
        Err(AppError::InvalidDateOrder(_))
    ));
    // strictly inside the next segment is fine
    assert!(chain.set_end(0, d(2024, 3, 7)).is_ok());
}

#[test]
fn test_set_end_out_of_range_ordinal() {
    let mut chain = Chain::from_segments(open_chain()).unwrap();
    assert!(matches!(
        chain.set_end(7, d(2024, 3, 7)),
        Err(AppError::OutOfRangeOrdinal(7))
    ));
}

#[test]
fn test_append_after_tail_then_set_end_splits_the_stay() {
    // single closed leg 03-01 -> 03-10, split at 03-06
    let data = vec![seg(0, Some(d(2024, 3, 1)), Some(d(2024, 3, 10)))];
    let mut chain = Chain::from_segments(data).unwrap();

    chain.append_after(0).unwrap();
    chain.set_end(0, d(2024, 3, 6)).unwrap();

    let segs = chain.segments();
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].start, Some(d(2024, 3, 1)));
    assert_eq!(segs[0].end, Some(d(2024, 3, 6)));
    assert_eq!(segs[1].start, Some(d(2024, 3, 6)));
    assert_eq!(segs[1].end, Some(d(2024, 3, 10)));
    assert_eq!(segs[1].ordinal, 1);
    assert!(validate(segs).is_ok());
}

#[test]
fn test_append_after_open_tail_keeps_the_open_end() {
    let data = vec![seg(0, Some(d(2024, 3, 1)), None)];
    let mut chain = Chain::from_segments(data).unwrap();

    chain.append_after(0).unwrap();
    chain.set_end(0, d(2024, 3, 6)).unwrap();

    let segs = chain.segments();
    assert_eq!(segs[0].end, Some(d(2024, 3, 6)));
    assert_eq!(segs[1].start, Some(d(2024, 3, 6)));
    assert_eq!(segs[1].end, None);
    assert!(validate(segs).is_ok());
}

#[test]
fn test_append_after_mid_then_set_end_splits_the_middle_leg() {
    let mut chain = Chain::from_segments(open_chain()).unwrap();

    // split leg 1 (03-05 -> 03-08) at 03-06
    chain.append_after(1).unwrap();

    let segs = chain.segments();
    assert_eq!(segs.len(), 4);
    // new leg seeded with start = previous end, end unset
    assert_eq!(segs[2].start, Some(d(2024, 3, 8)));
    assert_eq!(segs[2].end, None);

    chain.set_end(1, d(2024, 3, 6)).unwrap();
    chain.set_end(2, d(2024, 3, 8)).unwrap();

    let segs = chain.segments();
    assert_eq!(segs[1].end, Some(d(2024, 3, 6)));
    assert_eq!(segs[2].start, Some(d(2024, 3, 6)));
    assert_eq!(segs[2].end, Some(d(2024, 3, 8)));
    assert_eq!(segs[3].start, Some(d(2024, 3, 8)));
    assert!(validate(segs).is_ok());
}

#[test]
fn test_append_copies_meal_and_currency() {
    let mut data = vec![seg(0, Some(d(2024, 3, 1)), Some(d(2024, 3, 10)))];
    data[0].meal = Some("HB".to_string());
    data[0].currency = "USD".to_string();

    let mut chain = Chain::from_segments(data).unwrap();
    chain.append_after(0).unwrap();

    let new_leg = &chain.segments()[1];
    assert_eq!(new_leg.meal.as_deref(), Some("HB"));
    assert_eq!(new_leg.currency, "USD");
    assert!(new_leg.hotels.is_empty());
    assert_eq!(new_leg.guide_id, None);
}

#[test]
fn test_toggle_hotel_is_idempotent() {
    let mut chain = Chain::from_segments(open_chain()).unwrap();

    chain.toggle_hotel(0, 42, true).unwrap();
    chain.toggle_hotel(0, 42, true).unwrap();
    assert_eq!(chain.segments()[0].hotels.len(), 1);

    chain.toggle_hotel(0, 42, false).unwrap();
    chain.toggle_hotel(0, 42, false).unwrap();
    assert!(chain.segments()[0].hotels.is_empty());
}

#[test]
fn test_update_fields_partial_patch() {
    let mut chain = Chain::from_segments(open_chain()).unwrap();

    chain
        .update_fields(
            1,
            SegmentPatch {
                meal: Some(Some("BB".to_string())),
                target_price: Some(Some(420.0)),
                ..Default::default()
            },
        )
        .unwrap();

    let s = &chain.segments()[1];
    assert_eq!(s.meal.as_deref(), Some("BB"));
    assert_eq!(s.target_price, Some(420.0));
    assert_eq!(s.currency, "EUR"); // untouched

    // explicit clears
    chain
        .update_fields(
            1,
            SegmentPatch {
                meal: Some(None),
                target_price: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
    let s = &chain.segments()[1];
    assert_eq!(s.meal, None);
    assert_eq!(s.target_price, None);
}

#[test]
fn test_commit_round_trip_leaves_parent_identical() {
    let mut parent = open_chain();
    let chain = Chain::from_segments(parent.clone()).unwrap();

    chain.commit(&mut parent, 0).unwrap();

    assert_eq!(parent.len(), 3);
    for (i, s) in parent.iter().enumerate() {
        assert_eq!(s.ordinal, i);
    }
    assert_eq!(parent[0].end, Some(d(2024, 3, 5)));
    assert_eq!(parent[2].start, Some(d(2024, 3, 8)));
}

#[test]
fn test_commit_subrange_round_trip() {
    let mut parent = open_chain();

    // edit session over the middle leg only; ordinals are relative to
    // the loaded slice
    let mut middle = vec![parent[1].clone()];
    middle[0].ordinal = 0;
    let chain = Chain::from_segments(middle.clone()).unwrap();
    chain.commit(&mut parent, 1).unwrap();

    assert_eq!(parent.len(), 3);
    let mut spliced = vec![parent[1].clone()];
    assert_eq!(spliced[0].start, middle[0].start);
    assert_eq!(spliced[0].end, middle[0].end);
    spliced[0].ordinal = 0;
    assert!(Chain::from_segments(spliced).is_ok());
}

#[test]
fn test_commit_splices_and_renumbers() {
    let mut parent = open_chain();

    let mut chain = Chain::from_segments(parent.clone()).unwrap();
    chain.append_after(0).unwrap();
    chain.set_end(0, d(2024, 3, 3)).unwrap();

    chain.commit(&mut parent, 0).unwrap();

    assert_eq!(parent.len(), 4);
    let ordinals: Vec<usize> = parent.iter().map(|s| s.ordinal).collect();
    assert_eq!(ordinals, vec![0, 1, 2, 3]);
    assert_eq!(parent[0].end, Some(d(2024, 3, 3)));
    assert_eq!(parent[1].start, Some(d(2024, 3, 3)));
    assert_eq!(parent[1].end, Some(d(2024, 3, 5)));
    assert!(validate(&parent).is_ok());
}

#[test]
fn test_commit_failure_leaves_parent_untouched() {
    let mut parent = open_chain();
    let before = parent.clone();

    let mut chain = Chain::from_segments(parent.clone()).unwrap();
    chain
        .update_fields(
            1,
            SegmentPatch {
                currency: Some("USD".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    // splice target outside the parent list
    let err = chain.commit(&mut parent, 5).unwrap_err();
    assert!(matches!(err, AppError::OutOfRangeOrdinal(5)));

    assert_eq!(parent.len(), before.len());
    for (a, b) in parent.iter().zip(before.iter()) {
        assert_eq!(a.start, b.start);
        assert_eq!(a.end, b.end);
        assert_eq!(a.currency, b.currency);
    }
}

#[test]
fn test_from_segments_rejects_corrupt_input() {
    let chain = vec![
        seg(0, Some(d(2024, 3, 9)), Some(d(2024, 3, 5))), // start after end
    ];
    assert!(matches!(
        Chain::from_segments(chain),
        Err(AppError::InvalidChain(_))
    ));
}
