use chrono::{NaiveDate, Weekday};
use itinera::core::calendar::{CalendarWindow, project, visible_days, week_window};
use itinera::core::chain::Chain;
use itinera::models::segment::Segment;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn seg(ordinal: usize, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Segment {
    Segment::new(1, ordinal, start, end, 1, "EUR")
}

fn chain_of(segments: Vec<Segment>) -> Chain {
    Chain::from_segments(segments).unwrap()
}

/// Sunday-anchored week around 2024-03-06: [2024-03-03, 2024-03-10)
fn march_week() -> CalendarWindow {
    week_window(d(2024, 3, 6), Weekday::Sun)
}

#[test]
fn test_week_window_snaps_back_to_the_week_start() {
    let w = march_week();
    assert_eq!(w.start, d(2024, 3, 3));
    assert_eq!(w.end, d(2024, 3, 10));
}

#[test]
fn test_week_window_pivot_on_week_start_is_identity() {
    let w = week_window(d(2024, 3, 3), Weekday::Sun);
    assert_eq!(w.start, d(2024, 3, 3));

    // monday anchoring
    let w = week_window(d(2024, 3, 4), Weekday::Mon);
    assert_eq!(w.start, d(2024, 3, 4));
    let w = week_window(d(2024, 3, 7), Weekday::Mon);
    assert_eq!(w.start, d(2024, 3, 4));
}

#[test]
fn test_week_window_is_pure() {
    for _ in 0..3 {
        assert_eq!(week_window(d(2024, 3, 6), Weekday::Sun), march_week());
    }
}

#[test]
fn test_days_iterates_the_full_window() {
    let days: Vec<NaiveDate> = march_week().days().collect();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0], d(2024, 3, 3));
    assert_eq!(days[6], d(2024, 3, 9));
}

#[test]
fn test_padding_counts_for_interior_chain() {
    // one leg 03-05 -> 03-08 inside the 03-03..03-10 window:
    // two empty columns on each side
    let chains = vec![(
        1,
        chain_of(vec![seg(0, Some(d(2024, 3, 5)), Some(d(2024, 3, 8)))]),
    )];

    let placed = project(&march_week(), &chains);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].leading_pad, 2);
    assert_eq!(placed[0].trailing_pad, 2);
}

#[test]
fn test_padding_zero_when_chain_overflows_the_window() {
    let chains = vec![(
        1,
        chain_of(vec![seg(0, Some(d(2024, 2, 20)), Some(d(2024, 3, 20)))]),
    )];

    let placed = project(&march_week(), &chains);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].leading_pad, 0);
    assert_eq!(placed[0].trailing_pad, 0);
}

#[test]
fn test_open_bounds_read_as_infinite() {
    // open start: no leading pad; open end: no trailing pad
    let chains = vec![
        (1, chain_of(vec![seg(0, None, Some(d(2024, 3, 7)))])),
        (2, chain_of(vec![seg(0, Some(d(2024, 3, 6)), None)])),
    ];

    let placed = project(&march_week(), &chains);
    assert_eq!(placed.len(), 2);

    assert_eq!(placed[0].leading_pad, 0);
    assert_eq!(placed[0].trailing_pad, 3); // 03-07 .. 03-10

    assert_eq!(placed[1].leading_pad, 3); // 03-03 .. 03-06
    assert_eq!(placed[1].trailing_pad, 0);
}

#[test]
fn test_chain_ending_before_the_window_is_excluded() {
    let chains = vec![(
        1,
        chain_of(vec![seg(0, Some(d(2024, 2, 25)), Some(d(2024, 3, 2)))]),
    )];
    assert!(project(&march_week(), &chains).is_empty());
}

#[test]
fn test_chain_ending_exactly_at_window_start_is_excluded() {
    // ends are exclusive: a 03-03 end means the last night was 03-02
    let chains = vec![(
        1,
        chain_of(vec![seg(0, Some(d(2024, 2, 25)), Some(d(2024, 3, 3)))]),
    )];
    assert!(project(&march_week(), &chains).is_empty());
}

#[test]
fn test_chain_starting_at_or_after_window_end_is_excluded() {
    let chains = vec![
        (
            1,
            chain_of(vec![seg(0, Some(d(2024, 3, 10)), Some(d(2024, 3, 15)))]),
        ),
        (
            2,
            chain_of(vec![seg(0, Some(d(2024, 3, 12)), Some(d(2024, 3, 15)))]),
        ),
    ];
    assert!(project(&march_week(), &chains).is_empty());
}

#[test]
fn test_chain_touching_the_last_window_day_is_included() {
    // starts on the window's last day (03-09)
    let chains = vec![(
        1,
        chain_of(vec![seg(0, Some(d(2024, 3, 9)), Some(d(2024, 3, 15)))]),
    )];

    let placed = project(&march_week(), &chains);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].leading_pad, 6);
    assert_eq!(placed[0].trailing_pad, 0);
}

#[test]
fn test_projection_keeps_interior_segments_and_order() {
    let chains = vec![(
        7,
        chain_of(vec![
            seg(0, Some(d(2024, 3, 4)), Some(d(2024, 3, 6))),
            seg(1, Some(d(2024, 3, 6)), Some(d(2024, 3, 8))),
        ]),
    )];

    let placed = project(&march_week(), &chains);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].booking_id, 7);
    assert_eq!(placed[0].segments.len(), 2);
    assert_eq!(placed[0].segments[0].start, Some(d(2024, 3, 4)));
    assert_eq!(placed[0].segments[1].start, Some(d(2024, 3, 6)));
    assert_eq!(placed[0].leading_pad, 1);
    assert_eq!(placed[0].trailing_pad, 2);
}

#[test]
fn test_visible_days_clips_to_the_window() {
    let w = march_week();

    // fully inside
    let s = seg(0, Some(d(2024, 3, 5)), Some(d(2024, 3, 8)));
    assert_eq!(visible_days(&w, &s), 3);

    // overflowing both sides
    let s = seg(0, Some(d(2024, 2, 20)), Some(d(2024, 3, 20)));
    assert_eq!(visible_days(&w, &s), 7);

    // open bounds fill to the window edges
    let s = seg(0, None, Some(d(2024, 3, 7)));
    assert_eq!(visible_days(&w, &s), 4);
    let s = seg(0, Some(d(2024, 3, 6)), None);
    assert_eq!(visible_days(&w, &s), 4);

    // entirely outside
    let s = seg(0, Some(d(2024, 3, 20)), Some(d(2024, 3, 25)));
    assert_eq!(visible_days(&w, &s), 0);
}
