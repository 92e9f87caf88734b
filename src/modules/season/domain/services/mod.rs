pub mod relation_ordering;
