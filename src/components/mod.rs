pub mod collection_list;
pub mod header;
pub mod layout;

pub use collection_list::CollectionList;
pub use header::Header;
pub use layout::Layout;
