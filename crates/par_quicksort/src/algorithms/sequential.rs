use super::partition::partition;

pub fn sort(data: &mut [i32]) {
    quick_sort_recursive(data, 0);
}

/// Sorts `data` and returns the deepest recursion level reached.
pub fn sort_with_depth(data: &mut [i32]) -> usize {
    quick_sort_recursive(data, 0)
}

fn quick_sort_recursive(mut data: &mut [i32], depth: usize) -> usize {
    let mut max_depth = depth;

    // Recurse on the smaller side, loop on the larger: depth stays O(log n).
    while data.len() > 1 {
        let split = partition(data);
        debug_assert!(split > 0 && split < data.len());

        let (left, right) = data.split_at_mut(split);
        let nested = if left.len() < right.len() {
            let nested = quick_sort_recursive(left, depth + 1);
            data = right;
            nested
        } else {
            let nested = quick_sort_recursive(right, depth + 1);
            data = left;
            nested
        };
        max_depth = max_depth.max(nested);
    }

    max_depth
}
