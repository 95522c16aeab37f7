use crate::timeline::TimelineSide;

#[test]
fn entries_alternate_sides_by_ordinal() {
    let sides: Vec<TimelineSide> = (0..6).map(TimelineSide::for_index).collect();
    assert_eq!(
        sides,
        vec![
            TimelineSide::Left,
            TimelineSide::Right,
            TimelineSide::Left,
            TimelineSide::Right,
            TimelineSide::Left,
            TimelineSide::Right,
        ]
    );
}

#[test]
fn opposite_flips_the_side() {
    assert_eq!(TimelineSide::Left.opposite(), TimelineSide::Right);
    assert_eq!(TimelineSide::Right.opposite(), TimelineSide::Left);
}
