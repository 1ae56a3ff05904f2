use crate::element::Element;
use crate::merge::RunMerger;
use crate::run::Run;

/// Plain recursive mergesort. Ignores existing order, so it serves as the
/// baseline the adaptive policies are measured against.
pub fn top_down_sort<T: Element>(arr: &mut [T], merger: &mut RunMerger<T>) {
    sort_range(arr, 0, arr.len(), merger);
}

fn sort_range<T: Element>(arr: &mut [T], lo: usize, hi: usize, merger: &mut RunMerger<T>) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(arr, lo, mid, merger);
    sort_range(arr, mid, hi, merger);
    merger.merge(arr, Run::new(lo, mid), Run::new(mid, hi));
}
