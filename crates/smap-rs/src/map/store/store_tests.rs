use super::*;
use crate::SMAP_INIT_WIDTH;

fn stripe_with(start: usize, width: usize, floor: usize, used: usize) -> Stripe {
    let mut s = Stripe::new(start, start + width, floor);
    for _ in 0..used {
        s.request_slot().unwrap();
    }
    s
}

/// Two stripes of width 4; the first holds depths 1, 2, 3 and the second
/// depths 11, 12.
fn two_stripe_fixture() -> (Vec<Stripe>, Vec<Slot<char>>) {
    let stripes = vec![stripe_with(0, 4, 0, 3), stripe_with(4, 4, 10, 2)];

    let mut items = empty_slots(8);
    items[0] = Some(Entry::new(1, 'a'));
    items[1] = Some(Entry::new(2, 'b'));
    items[2] = Some(Entry::new(3, 'c'));
    items[4] = Some(Entry::new(11, 'd'));
    items[5] = Some(Entry::new(12, 'e'));

    (stripes, items)
}

fn live_depths(stripes: &[Stripe], items: &[Slot<char>]) -> Vec<usize> {
    let mut depths = Vec::new();
    for stripe in stripes {
        for raw in stripe.start()..stripe.position() {
            depths.push(items[raw].as_ref().unwrap().depth);
        }
    }
    depths.sort_unstable();
    depths
}

#[test]
fn rebuild_doubles_stripes_at_or_past_half_capacity() {
    let old = vec![
        stripe_with(0, 4, 0, 4),
        stripe_with(4, 4, 10, 2),
        stripe_with(8, 4, 20, 3),
    ];

    let (rebuilt, slot_count) = rebuild_stripes(&old);

    assert_eq!(rebuilt[0].width(), 8);
    assert_eq!(rebuilt[1].width(), 4);
    assert_eq!(rebuilt[2].width(), 6);
    assert_eq!(slot_count, 18);
}

#[test]
fn rebuild_keeps_width_below_half_capacity() {
    let old = vec![stripe_with(0, 8, 0, 3), stripe_with(8, 8, 10, 0)];

    let (rebuilt, _) = rebuild_stripes(&old);

    assert_eq!(rebuilt[0].width(), 8);
    assert_eq!(rebuilt[1].width(), SMAP_INIT_WIDTH);
}

#[test]
fn rebuild_revives_zero_width_stripes() {
    // Shrunk layout: an empty stripe keeps no window at all.
    let old = vec![stripe_with(0, 3, 0, 3), stripe_with(3, 0, 10, 0)];

    let (rebuilt, slot_count) = rebuild_stripes(&old);

    assert_eq!(rebuilt[0].width(), 6);
    assert_eq!(rebuilt[1].width(), SMAP_INIT_WIDTH);
    assert_eq!(slot_count, 6 + SMAP_INIT_WIDTH);
}

#[test]
fn rebuild_lays_windows_out_back_to_back() {
    let old = vec![
        stripe_with(0, 4, 0, 4),
        stripe_with(4, 4, 10, 1),
        stripe_with(8, 4, 20, 0),
    ];

    let (rebuilt, slot_count) = rebuild_stripes(&old);

    let mut offset = 0;
    for stripe in &rebuilt {
        assert_eq!(stripe.start(), offset);
        offset = stripe.end();
    }
    assert_eq!(offset, slot_count);
}

#[test]
fn restripe_preserves_each_stripe_live_prefix() {
    let (mut stripes, mut items) = two_stripe_fixture();

    let slot_count = restripe(&mut stripes, &mut items);

    assert_eq!(items.len(), slot_count);
    assert_eq!(stripes[0].used(), 3);
    assert_eq!(stripes[1].used(), 2);

    assert_eq!(items[stripes[0].start()].unwrap(), Entry::new(1, 'a'));
    assert_eq!(items[stripes[0].start() + 2].unwrap(), Entry::new(3, 'c'));
    assert_eq!(items[stripes[1].start()].unwrap(), Entry::new(11, 'd'));

    // Tails came out vacant.
    for stripe in &stripes {
        for raw in stripe.position()..stripe.end() {
            assert!(items[raw].is_none());
        }
    }
}

#[test]
fn shrink_compacts_and_trims_every_window() {
    let mut stripes = vec![
        stripe_with(0, 4, 0, 2),
        stripe_with(4, 4, 10, 0),
        stripe_with(8, 4, 20, 3),
    ];
    let mut items: Vec<Slot<char>> = empty_slots(12);
    items[0] = Some(Entry::new(1, 'a'));
    items[1] = Some(Entry::new(2, 'b'));
    items[8] = Some(Entry::new(21, 'c'));
    items[9] = Some(Entry::new(22, 'd'));
    items[10] = Some(Entry::new(23, 'e'));

    shrink(&mut stripes, &mut items, 5);

    assert_eq!(items.len(), 5);
    assert!(items.iter().all(Option::is_some));

    assert_eq!(stripes[0].start(), 0);
    assert_eq!(stripes[0].end(), 2);
    assert_eq!(stripes[1].start(), 2);
    assert_eq!(stripes[1].end(), 2);
    assert_eq!(stripes[2].start(), 2);
    assert_eq!(stripes[2].end(), 5);

    for stripe in &stripes {
        assert_eq!(stripe.available(), 0);
    }

    assert_eq!(items[2].unwrap(), Entry::new(21, 'c'));
    assert_eq!(items[4].unwrap(), Entry::new(23, 'e'));
}

#[test]
fn erase_swaps_the_tail_entry_into_the_hole() {
    let (mut stripes, mut items) = two_stripe_fixture();

    assert!(erase_from_stripe(&mut items, &mut stripes[0], 1));

    assert_eq!(stripes[0].used(), 2);
    assert_eq!(items[1].unwrap(), Entry::new(3, 'c'));
    assert!(items[2].is_none());
}

#[test]
fn erase_of_the_last_slot_just_vacates_it() {
    let (mut stripes, mut items) = two_stripe_fixture();

    assert!(erase_from_stripe(&mut items, &mut stripes[1], 5));

    assert_eq!(stripes[1].used(), 1);
    assert_eq!(items[4].unwrap(), Entry::new(11, 'd'));
    assert!(items[5].is_none());
}

#[test]
fn erase_on_an_empty_stripe_reports_failure() {
    let mut stripes = vec![stripe_with(0, 4, 0, 0)];
    let mut items: Vec<Slot<char>> = empty_slots(4);

    assert!(!erase_from_stripe(&mut items, &mut stripes[0], 0));
}

#[test]
fn remove_matching_sweeps_the_whole_window() {
    let (mut stripes, mut items) = two_stripe_fixture();

    let (any, removed) =
        remove_matching(&mut stripes, &mut items, 0, 0, 8, |entry| entry.depth % 2 == 1);

    assert!(any);
    assert_eq!(removed, 3);
    assert_eq!(live_depths(&stripes, &items), vec![2, 12]);
}

#[test]
fn remove_matching_respects_the_raw_window_clamp() {
    let (mut stripes, mut items) = two_stripe_fixture();

    // Window [1, 5) excludes the first stripe's slot 0 and the second
    // stripe's slot 5.
    let (any, removed) =
        remove_matching(&mut stripes, &mut items, 0, 1, 5, |entry| entry.depth % 2 == 1);

    assert!(any);
    assert_eq!(removed, 2);
    assert_eq!(live_depths(&stripes, &items), vec![1, 2, 12]);
}

#[test]
fn remove_matching_without_hits_reports_nothing() {
    let (mut stripes, mut items) = two_stripe_fixture();

    let (any, removed) =
        remove_matching(&mut stripes, &mut items, 0, 0, 8, |entry| entry.depth > 100);

    assert!(!any);
    assert_eq!(removed, 0);
    assert_eq!(live_depths(&stripes, &items).len(), 5);
}

#[test]
fn clear_all_frees_every_stripe_once() {
    let (mut stripes, _items) = two_stripe_fixture();

    assert_eq!(clear_all(&mut stripes), (true, 5));
    assert!(stripes.iter().all(Stripe::is_empty));

    assert_eq!(clear_all(&mut stripes), (false, 0));
}
