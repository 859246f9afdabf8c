//! Chain walks over the stripe table: depth lookup and packed/raw index
//! translation.
//!
//! Stripes live in one contiguous slice in ascending depth order, so the
//! chain is walked by index instead of neighbor pointers. A *packed* index
//! counts live entries in stripe order, skipping each stripe's unused tail;
//! a *raw* index addresses the backing array directly.


use crate::layout::stripe::Stripe;

/// `next_floor` returns the depth floor of the stripe after `index`, or
/// `None` for the last stripe.
#[must_use]
pub fn next_floor(stripes: &[Stripe], index: usize) -> Option<usize> {
    stripes.get(index + 1).map(Stripe::depth_floor)
}

/// `locate_by_depth_scan` walks the chain and returns the index of the
/// stripe owning `depth`.
///
/// Returns `None` only for an empty chain; the last stripe absorbs every
/// depth at or above its floor.
#[must_use]
pub fn locate_by_depth_scan(stripes: &[Stripe], depth: usize) -> Option<usize> {
    (0..stripes.len()).find(|&i| stripes[i].depth_match(depth, next_floor(stripes, i)))
}

/// `locate_by_depth_jump` computes the owning stripe index in O(1).
///
/// Stripe floors are assigned as `stripe_depth * i`, so dividing by
/// `stripe_depth` inverts the assignment exactly; depths past the last floor
/// clamp onto the last stripe, which absorbs them.
///
/// # Panics
/// Panics in debug builds if the chain is empty or `stripe_depth` is zero;
/// the map's construction sanitation rules out both.
#[must_use]
pub fn locate_by_depth_jump(stripes: &[Stripe], depth: usize, stripe_depth: usize) -> usize {
    debug_assert!(!stripes.is_empty());
    debug_assert!(stripe_depth > 0);

    (depth / stripe_depth).min(stripes.len() - 1)
}

/// `locate_by_packed` translates a packed index into the owning stripe index
/// and the raw backing-array index, walking non-empty stripes and
/// accumulating their live counts. `None` when `packed` is past the last
/// live entry.
#[must_use]
pub fn locate_by_packed(stripes: &[Stripe], packed: usize) -> Option<(usize, usize)> {
    let mut remaining = packed;
    for (i, stripe) in stripes.iter().enumerate() {
        if stripe.is_empty() {
            continue;
        }

        let used = stripe.used();
        if used > remaining {
            return Some((i, stripe.start() + remaining));
        }
        remaining -= used;
    }

    None
}

/// `raw_of_packed` is `locate_by_packed` reduced to the raw index.
#[must_use]
pub fn raw_of_packed(stripes: &[Stripe], packed: usize) -> Option<usize> {
    locate_by_packed(stripes, packed).map(|(_, raw)| raw)
}

/// `packed_of_raw` is the inverse translation: the packed index at which the
/// stripe holding live raw index `raw` begins, or `None` when no stripe
/// holds it live.
#[must_use]
pub fn packed_of_raw(stripes: &[Stripe], raw: usize) -> Option<usize> {
    let mut packed = 0;
    for stripe in stripes {
        if stripe.is_empty() {
            continue;
        }

        if stripe.index_match(raw) {
            return Some(packed);
        }
        packed += stripe.used();
    }

    None
}

/// `packed_start_at_depth` returns the packed index where the stripe owning
/// `depth` begins: the live total of every stripe before it. Zero for an
/// empty chain.
#[must_use]
pub fn packed_start_at_depth(stripes: &[Stripe], depth: usize) -> usize {
    let mut packed = 0;
    for (i, stripe) in stripes.iter().enumerate() {
        if stripe.depth_match(depth, next_floor(stripes, i)) {
            return packed;
        }
        packed += stripe.used();
    }

    packed
}

/// `packed_end_at_depth` returns the packed index one past the last live
/// entry of the stripe owning `depth`. Together with
/// [`packed_start_at_depth`] this bounds the stripe's packed window; the
/// window is empty when the stripe holds nothing.
#[must_use]
pub fn packed_end_at_depth(stripes: &[Stripe], depth: usize) -> usize {
    let mut packed = 0;
    for (i, stripe) in stripes.iter().enumerate() {
        packed += stripe.used();
        if stripe.depth_match(depth, next_floor(stripes, i)) {
            return packed;
        }
    }

    packed
}

/// `locate_contig` resolves a raw-equals-packed index while the map is
/// shrunk: stripe windows abut and carry no tails, so the owning stripe is
/// the one whose live range contains `index` and the index passes through
/// unchanged.
#[must_use]
pub fn locate_contig(stripes: &[Stripe], index: usize) -> Option<(usize, usize)> {
    for (i, stripe) in stripes.iter().enumerate() {
        if stripe.is_empty() {
            continue;
        }

        if stripe.index_match(index) {
            return Some((i, index));
        }
    }

    None
}
