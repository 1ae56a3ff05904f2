pub mod sort;
pub mod metrics;
pub mod report;
mod base_case;
mod baseline;
mod config;
mod element;
mod error;
mod merge;
mod powersort;
mod run;
mod shiverssort;
mod top_down;

pub use sort::{is_sorted, sort, sort_in_place};
pub use metrics::{compute_all, DisorderMetricsResult, NormalizedMetrics, RawMetrics};
pub use base_case::binary_insertion_sort;
pub use baseline::{insertion_sort, quick_sort};
pub use config::{
    BufferStrategy, MergePolicy, SortConfig, DEFAULT_MIN_RUN, DEFAULT_STACK_CONSTANT,
};
pub use element::Element;
pub use error::{Error, Result};
pub use merge::{MergeCostCounters, RunMerger};
pub use powersort::{node_power, power_sort};
pub use run::{decompose, extend_and_reverse_run, Run};
pub use shiverssort::{adaptive_shivers_sort, size_class};
pub use top_down::top_down_sort;
