//! Classic array drills as free functions over slices.
//!
//! Everything here is a pure function: no state, no I/O, inputs either
//! borrowed or mutated in place. Arithmetic functions are generic over
//! [`num_traits::PrimInt`], so they work for any primitive integer type.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use num_traits::PrimInt;

/// Finds two distinct indices whose elements sum to `target`, scanning
/// left to right with a complement map. Returns the first such pair in
/// scan order, or `None` if no pair sums to `target`.
///
/// O(n log n) with an ordered map; the slice need not be sorted.
///
/// ```
/// use dskit::algo::two_sum;
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
/// assert_eq!(two_sum(&[1, 2, 3], 100), None);
/// ```
pub fn two_sum<T: PrimInt>(nums: &[T], target: T) -> Option<(usize, usize)> {
    let mut seen: BTreeMap<T, usize> = BTreeMap::new();
    for (i, &x) in nums.iter().enumerate() {
        // For unsigned T an underflowing complement cannot exist.
        if let Some(complement) = target.checked_sub(&x) {
            if let Some(&j) = seen.get(&complement) {
                return Some((j, i));
            }
        }
        seen.entry(x).or_insert(i);
    }
    None
}

/// Two-pointer variant of [`two_sum`] for a slice already sorted
/// ascending. O(n), no extra storage.
///
/// Returns `None` when no pair sums to `target` (including for slices
/// shorter than two elements).
pub fn two_sum_sorted<T: PrimInt>(nums: &[T], target: T) -> Option<(usize, usize)> {
    if nums.len() < 2 {
        return None;
    }
    let (mut left, mut right) = (0, nums.len() - 1);
    while left < right {
        let sum = nums[left] + nums[right];
        if sum == target {
            return Some((left, right));
        } else if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }
    None
}

/// Maximum sum of `k` consecutive elements, by sliding a window across
/// the slice. Returns `T::zero()` when `k == 0` or `k > nums.len()`.
///
/// ```
/// use dskit::algo::max_window_sum;
/// assert_eq!(max_window_sum(&[2, 1, 5, 1, 3, 2], 3), 9); // [5, 1, 3]
/// ```
pub fn max_window_sum<T: PrimInt>(nums: &[T], k: usize) -> T {
    if k == 0 || k > nums.len() {
        return T::zero();
    }
    let mut window = nums[..k].iter().fold(T::zero(), |acc, &x| acc + x);
    let mut best = window;
    for i in k..nums.len() {
        window = window + nums[i] - nums[i - k];
        best = best.max(window);
    }
    best
}

/// Builds the prefix-sum table of `nums`: one element longer than the
/// input, with a leading zero, so that
/// `prefix[i] == nums[0] + ... + nums[i - 1]`.
///
/// ```
/// use dskit::algo::prefix_sums;
/// assert_eq!(prefix_sums(&[1, 2, 3, 4]), vec![0, 1, 3, 6, 10]);
/// ```
pub fn prefix_sums<T: PrimInt>(nums: &[T]) -> Vec<T> {
    let mut prefix = Vec::with_capacity(nums.len() + 1);
    prefix.push(T::zero());
    let mut acc = T::zero();
    for &x in nums {
        acc = acc + x;
        prefix.push(acc);
    }
    prefix
}

/// Sum of the original elements over the inclusive index range `[l, r]`,
/// answered from a [`prefix_sums`] table in O(1).
///
/// Requires `l <= r` and `r + 1 < prefix.len()`.
pub fn range_sum<T: PrimInt>(prefix: &[T], l: usize, r: usize) -> T {
    prefix[r + 1] - prefix[l]
}

/// Kadane's algorithm: the maximum sum over all non-empty contiguous
/// subarrays. Returns `T::zero()` for an empty slice; for an all-negative
/// slice the best single element wins.
///
/// ```
/// use dskit::algo::max_subarray_sum;
/// assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), 6);
/// assert_eq!(max_subarray_sum(&[-5, -2, -8, -1]), -1);
/// ```
pub fn max_subarray_sum<T: PrimInt>(nums: &[T]) -> T {
    let Some((&first, rest)) = nums.split_first() else {
        return T::zero();
    };
    let mut best = first;
    let mut ending_here = first;
    for &x in rest {
        ending_here = x.max(ending_here + x);
        best = best.max(ending_here);
    }
    best
}

/// Compacts a sorted slice in place so that each run of equal adjacent
/// elements keeps exactly one representative, and returns the new logical
/// length. Elements past the returned length are unspecified leftovers.
///
/// ```
/// use dskit::algo::dedup_sorted;
/// let mut nums = [1, 1, 2, 2, 2, 3, 4, 4, 5];
/// let len = dedup_sorted(&mut nums);
/// assert_eq!(len, 5);
/// assert_eq!(&nums[..len], &[1, 2, 3, 4, 5]);
/// ```
pub fn dedup_sorted<T: Copy + PartialEq>(nums: &mut [T]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..nums.len() {
        if nums[read] != nums[read - 1] {
            nums[write] = nums[read];
            write += 1;
        }
    }
    write
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use super::*;

    #[test]
    fn two_sum_finds_first_pair() {
        assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
        assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
        assert_eq!(two_sum(&[3, 3], 6), Some((0, 1)));
    }

    #[test]
    fn two_sum_not_found_and_empty() {
        assert_eq!(two_sum(&[1, 2, 3], 100), None);
        assert_eq!(two_sum::<i32>(&[], 5), None);
    }

    #[test]
    fn two_sum_unsigned_does_not_underflow() {
        // 15 > 9, so probing its complement must not wrap around.
        assert_eq!(two_sum(&[15u32, 2, 7], 9), Some((1, 2)));
    }

    #[test]
    fn two_sum_sorted_found() {
        let nums = [1, 3, 5, 7, 9, 11];
        let (i, j) = two_sum_sorted(&nums, 12).unwrap();
        assert_eq!(nums[i] + nums[j], 12);
        assert!(i < j);
    }

    #[test]
    fn two_sum_sorted_not_found_and_empty() {
        assert_eq!(two_sum_sorted(&[1, 2, 3, 4], 100), None);
        assert_eq!(two_sum_sorted::<i32>(&[], 5), None);
        assert_eq!(two_sum_sorted(&[5], 5), None);
    }

    #[test]
    fn window_sum_normal() {
        assert_eq!(max_window_sum(&[2, 1, 5, 1, 3, 2], 3), 9); // [5, 1, 3]
    }

    #[test]
    fn window_sum_k_equals_n() {
        assert_eq!(max_window_sum(&[1, 2, 3, 4], 4), 10);
    }

    #[test]
    fn window_sum_invalid_k() {
        assert_eq!(max_window_sum(&[1, 2, 3], 5), 0);
        assert_eq!(max_window_sum(&[1, 2, 3], 0), 0);
    }

    #[test]
    fn window_sum_single_element() {
        assert_eq!(max_window_sum(&[42], 1), 42);
    }

    #[test]
    fn prefix_build() {
        assert_eq!(prefix_sums(&[1, 2, 3, 4]), vec![0, 1, 3, 6, 10]);
        assert_eq!(prefix_sums::<i32>(&[]), vec![0]);
    }

    #[test]
    fn prefix_range_query() {
        let prefix = prefix_sums(&[3, 1, 4, 1, 5, 9, 2, 6]);
        // arr[2..=5] = 4 + 1 + 5 + 9
        assert_eq!(range_sum(&prefix, 2, 5), 19);
    }

    #[test]
    fn prefix_single_element() {
        let prefix = prefix_sums(&[7]);
        assert_eq!(range_sum(&prefix, 0, 0), 7);
    }

    #[test]
    fn kadane_mixed() {
        // Best subarray is [4, -1, 2, 1].
        assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), 6);
    }

    #[test]
    fn kadane_all_negative_keeps_best_single() {
        assert_eq!(max_subarray_sum(&[-5, -2, -8, -1]), -1);
    }

    #[test]
    fn kadane_all_positive_takes_everything() {
        assert_eq!(max_subarray_sum(&[1, 2, 3, 4, 5]), 15);
    }

    #[test]
    fn kadane_single_and_empty() {
        assert_eq!(max_subarray_sum(&[10]), 10);
        assert_eq!(max_subarray_sum::<i32>(&[]), 0);
    }

    #[test]
    fn dedup_with_duplicates() {
        let mut nums = [1, 1, 2, 2, 2, 3, 4, 4, 5];
        let len = dedup_sorted(&mut nums);
        assert_eq!(len, 5);
        assert_eq!(&nums[..len], &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn dedup_without_duplicates() {
        let mut nums = [1, 2, 3, 4];
        assert_eq!(dedup_sorted(&mut nums), 4);
        assert_eq!(nums, [1, 2, 3, 4]);
    }

    #[test]
    fn dedup_all_same() {
        let mut nums = [7, 7, 7, 7];
        assert_eq!(dedup_sorted(&mut nums), 1);
        assert_eq!(nums[0], 7);
    }

    #[test]
    fn dedup_empty() {
        let mut nums: [i32; 0] = [];
        assert_eq!(dedup_sorted(&mut nums), 0);
    }
}
