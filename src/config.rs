use std::any::type_name;
use std::fmt;
use std::str::FromStr;

use crate::element::Element;
use crate::error::{Error, Result};

/// Runs shorter than this are extended with binary insertion sort before they are pushed.
pub const DEFAULT_MIN_RUN: usize = 32;
/// The `c` in the size class `floor(log2(len / c))` of adaptive ShiversSort.
pub const DEFAULT_STACK_CONSTANT: usize = 3;

const _: () = {
    assert!(DEFAULT_MIN_RUN >= 1, "DEFAULT_MIN_RUN must be positive");
    assert!(DEFAULT_STACK_CONSTANT >= 1, "DEFAULT_STACK_CONSTANT must be positive");
};

/// Decides in which order adjacent runs get merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergePolicy {
    /// Node-power merge tree (PowerSort).
    Power,
    /// Logarithmic size-class stack (adaptive ShiversSort).
    Stack,
    /// Non-adaptive recursive halving, kept as a baseline.
    TopDown,
    /// Middle-pivot Lomuto quicksort. Not stable, merges nothing.
    QuickSort,
    /// Linear insertion sort.
    Insertion,
    /// Insertion sort with an upper-bound binary search for each slot.
    BinaryInsertion,
}

/// How a single merge uses the scratch buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferStrategy {
    FullCopy,
    HalfCopy,
    Sentinel,
}

impl MergePolicy {
    pub const ALL: [MergePolicy; 6] = [
        MergePolicy::Power,
        MergePolicy::Stack,
        MergePolicy::TopDown,
        MergePolicy::QuickSort,
        MergePolicy::Insertion,
        MergePolicy::BinaryInsertion,
    ];
    pub const ADAPTIVE: [MergePolicy; 2] = [MergePolicy::Power, MergePolicy::Stack];
    /// Comparison sorts without runs. They ignore the buffer strategy, the
    /// stack constant and the minimum run length.
    pub const BASELINES: [MergePolicy; 3] = [
        MergePolicy::QuickSort,
        MergePolicy::Insertion,
        MergePolicy::BinaryInsertion,
    ];

    /// Whether sorting goes through `RunMerger`.
    pub fn merges_runs(self) -> bool {
        matches!(self, MergePolicy::Power | MergePolicy::Stack | MergePolicy::TopDown)
    }
}

impl BufferStrategy {
    pub const ALL: [BufferStrategy; 3] = [
        BufferStrategy::FullCopy,
        BufferStrategy::HalfCopy,
        BufferStrategy::Sentinel,
    ];

    /// Scratch cells one sort over `n` elements can need at most.
    pub fn scratch_len(self, n: usize) -> usize {
        match self {
            BufferStrategy::FullCopy => n,
            BufferStrategy::HalfCopy => n / 2,
            // full copy fallback for runs ending in the sentinel value needs n
            BufferStrategy::Sentinel => n + 2,
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MergePolicy::Power => "power",
            MergePolicy::Stack => "stack",
            MergePolicy::TopDown => "top-down",
            MergePolicy::QuickSort => "quicksort",
            MergePolicy::Insertion => "insertion",
            MergePolicy::BinaryInsertion => "binary-insertion",
        };
        f.pad(name)
    }
}

impl fmt::Display for BufferStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BufferStrategy::FullCopy => "full-copy",
            BufferStrategy::HalfCopy => "half-copy",
            BufferStrategy::Sentinel => "sentinel",
        };
        f.pad(name)
    }
}

impl FromStr for MergePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "power" => Ok(MergePolicy::Power),
            "stack" => Ok(MergePolicy::Stack),
            "top-down" => Ok(MergePolicy::TopDown),
            "quicksort" => Ok(MergePolicy::QuickSort),
            "insertion" => Ok(MergePolicy::Insertion),
            "binary-insertion" => Ok(MergePolicy::BinaryInsertion),
            _ => Err(Error::UnknownOption(s.to_string())),
        }
    }
}

impl FromStr for BufferStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full-copy" => Ok(BufferStrategy::FullCopy),
            "half-copy" => Ok(BufferStrategy::HalfCopy),
            "sentinel" => Ok(BufferStrategy::Sentinel),
            _ => Err(Error::UnknownOption(s.to_string())),
        }
    }
}

/// Everything one `sort` call needs to know. Passed explicitly, never global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub policy: MergePolicy,
    pub strategy: BufferStrategy,
    pub stack_constant: usize,
    pub min_run: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            policy: MergePolicy::Power,
            strategy: BufferStrategy::HalfCopy,
            stack_constant: DEFAULT_STACK_CONSTANT,
            min_run: DEFAULT_MIN_RUN,
        }
    }
}

impl SortConfig {
    pub fn new(policy: MergePolicy, strategy: BufferStrategy) -> SortConfig {
        SortConfig {
            policy,
            strategy,
            ..SortConfig::default()
        }
    }

    pub fn with_stack_constant(mut self, c: usize) -> SortConfig {
        self.stack_constant = c;
        self
    }

    pub fn with_min_run(mut self, min_run: usize) -> SortConfig {
        self.min_run = min_run;
        self
    }

    /// Rejects configurations that cannot work for `T` before any merge happens.
    pub fn validate<T: Element>(&self) -> Result<()> {
        if self.stack_constant == 0 {
            return Err(Error::InvalidStackConstant);
        }
        if self.policy.merges_runs()
            && self.strategy == BufferStrategy::Sentinel
            && T::sentinel().is_none()
        {
            return Err(Error::SentinelUnavailable(type_name::<T>()));
        }
        Ok(())
    }
}
