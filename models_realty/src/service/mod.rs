//! Service layer types - what callers of the db client consume.

pub mod owner;
pub mod property;
pub mod property_filter;
pub mod property_image;
pub mod property_trace;

pub use owner::Owner;
pub use property::Property;
pub use property_filter::PropertyFilter;
pub use property_image::PropertyImage;
pub use property_trace::PropertyTrace;
