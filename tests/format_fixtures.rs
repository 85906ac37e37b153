use intsets::FastIntSet;
use rstest::rstest;

#[rstest]
#[case::empty(&[], "()")]
#[case::single(&[7], "(7)")]
#[case::negatives_then_run(&[-5, -3, -2, -1, 0, 1, 2, 3, 4, 5], "(-5,-3,-2,-1,0-5)")]
#[case::pair_then_run(&[0, 1, 3, 4, 5], "(0,1,3-5)")]
#[case::across_cutoff(&[-1, 0, 1, 127, 128, 255, 256, 257, 512], "(-1,0,1,127,128,255-257,512)")]
#[case::run_of_three_through_cutoff(&[126, 127, 128], "(126-128)")]
#[case::negative_run_not_compressed(&[-4, -3, -2], "(-4,-3,-2)")]
#[case::zero_crossing_short_tail(&[-3, -2, -1, 0, 1], "(-3,-2,-1,0,1)")]
#[case::unsorted_input(&[9, 3, 8, 4, 7, 5], "(3-5,7-9)")]
fn test_display(
    #[case] values: &[i64],
    #[case] expected: &str,
) {
    let set = FastIntSet::from_values(values);
    assert_eq!(set.to_string(), expected);
    assert_eq!(format!("{set:?}"), format!("FastIntSet{expected}"));
}

#[rstest]
fn test_display_after_mutation() {
    let mut set = FastIntSet::new();
    set.add_range(0, 200);
    assert_eq!(set.to_string(), "(0-200)");

    set.remove(100);
    assert_eq!(set.to_string(), "(0-99,101-200)");

    set.remove(1);
    set.remove(199);
    assert_eq!(set.to_string(), "(0,2-99,101-198,200)");
}
