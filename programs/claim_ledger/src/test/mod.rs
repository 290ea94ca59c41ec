pub mod fixture;
pub mod test_capacity;
pub mod test_properties;
pub mod test_queries;
