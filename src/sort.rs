use log::{debug, info};

use crate::base_case::binary_insertion_sort;
use crate::baseline::{insertion_sort, quick_sort};
use crate::config::{MergePolicy, SortConfig};
use crate::element::Element;
use crate::error::Result;
use crate::merge::{MergeCostCounters, RunMerger};
use crate::powersort::power_sort;
use crate::shiverssort::adaptive_shivers_sort;
use crate::top_down::top_down_sort;

/// Sorts a copy of `seq` and returns it with the merge counters of this call.
pub fn sort<T: Element>(seq: &[T], config: &SortConfig) -> Result<(Vec<T>, MergeCostCounters)> {
    let mut arr = seq.to_vec();
    let counters = sort_in_place(&mut arr, config)?;
    Ok((arr, counters))
}

/// Sorts `arr` in place. The configuration is validated before anything is touched.
///
/// The baseline policies only fill in `element_moves`; the merge counters stay zero.
pub fn sort_in_place<T: Element>(arr: &mut [T], config: &SortConfig) -> Result<MergeCostCounters> {
    config.validate::<T>()?;
    debug!(
        "sorting {} elements: policy={}, strategy={}, c={}, min_run={}",
        arr.len(),
        config.policy,
        config.strategy,
        config.stack_constant,
        config.min_run
    );

    let counters = match config.policy {
        MergePolicy::QuickSort => moves_only::<T>(quick_sort(arr)),
        MergePolicy::Insertion => moves_only::<T>(insertion_sort(arr)),
        MergePolicy::BinaryInsertion => moves_only::<T>(binary_insertion_sort(arr, 0)),
        policy => {
            let mut merger = RunMerger::new(config.strategy, arr.len())?;
            match policy {
                MergePolicy::Power => power_sort(arr, config.min_run, &mut merger),
                MergePolicy::Stack => {
                    adaptive_shivers_sort(arr, config.stack_constant, config.min_run, &mut merger)
                }
                _ => top_down_sort(arr, &mut merger),
            }
            merger.counters
        }
    };

    info!("Counters: {:?}", counters);
    Ok(counters)
}

fn moves_only<T>(element_moves: u64) -> MergeCostCounters {
    MergeCostCounters {
        element_moves,
        ..MergeCostCounters::for_element::<T>()
    }
}

#[inline]
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}
