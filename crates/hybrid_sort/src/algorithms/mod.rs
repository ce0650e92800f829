pub mod common;
pub mod heap_sort;
pub mod insertion_sort;
pub mod quick_sort_2way;
pub mod quick_sort_3way;
