/// Hoare partition around the midpoint element.
///
/// Returns the split index `s`: every element of `data[..s]` is `<= pivot` and
/// every element of `data[s..]` is `>= pivot`. Elements equal to the pivot may
/// land on either side. For `data.len() >= 2` the split lies in `1..len`.
#[inline]
pub fn partition(data: &mut [i32]) -> usize {
    debug_assert!(!data.is_empty());

    let pivot = data[(data.len() - 1) / 2];
    let mut i = 0usize;
    let mut j = data.len() - 1;

    loop {
        while data[i] < pivot {
            i += 1;
        }

        while data[j] > pivot {
            j -= 1;
        }

        if i > j {
            return i;
        }

        data.swap(i, j);
        i += 1;
        // The right cursor would step past the front; the scan has crossed.
        if j == 0 {
            return i;
        }
        j -= 1;

        if i > j {
            return i;
        }
    }
}
