//! Scripted walkthrough of the classic array algorithms.

use dskit::algo;
use dskit::Array;

fn main() {
    println!("=== Array algorithms - common patterns ===\n");

    // 1. Two sum (sorted array, two pointers)
    {
        println!("1. Two sum (sorted array)");
        let nums = [1, 3, 5, 7, 9, 11];
        let target = 12;
        println!("{}", Array::from(nums).render("nums"));
        println!("target: {}", target);

        match algo::two_sum_sorted(&nums, target) {
            Some((i, j)) => println!(
                "indices: ({}, {}) -> values: {} + {} = {}\n",
                i, j, nums[i], nums[j], target
            ),
            None => println!("no pair found\n"),
        }
    }

    // 2. Max sum of k consecutive elements (sliding window)
    {
        println!("2. Sliding window - max sum of k consecutive");
        let arr = [2, 1, 5, 1, 3, 2];
        let k = 3;
        println!("{}", Array::from(arr).render("arr"));
        println!("k: {}", k);
        println!("max sum of {} consecutive: {}\n", k, algo::max_window_sum(&arr, k));
    }

    // 3. Prefix sums & range query
    {
        println!("3. Prefix sums - range query");
        let arr = [3, 1, 4, 1, 5, 9, 2, 6];
        println!("{}", Array::from(arr).render("arr"));

        let prefix = algo::prefix_sums(&arr);
        println!("{}", Array::from(prefix.clone()).render("prefix sums"));

        let (l, r) = (2, 5);
        println!("sum over [{}, {}]: {}", l, r, algo::range_sum(&prefix, l, r));
        println!("check: arr[2..=5] = 4 + 1 + 5 + 9 = 19\n");
    }

    // 4. Kadane's algorithm (max subarray sum)
    {
        println!("4. Kadane's algorithm - max subarray sum");
        let nums = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
        println!("{}", Array::from(nums).render("nums"));
        println!("max subarray sum: {}", algo::max_subarray_sum(&nums));
        println!("subarray: [4, -1, 2, 1]\n");
    }

    // 5. Remove duplicates (in place)
    {
        println!("5. In place - remove duplicates");
        let mut nums = [1, 1, 2, 2, 2, 3, 4, 4, 5];
        println!("{}", Array::from(nums).render("original"));

        let len = algo::dedup_sorted(&mut nums);
        println!("{}", Array::from_slice(&nums[..len]).render("deduplicated"));
        println!("new length: {}\n", len);
    }

    println!("=== end of playground ===");
}
